//! # BF instructions
//! Source code is a plain sequence of bytes. Eight of them are instructions, every
//! other byte is ignored by the machine.

use core::fmt::Display;

/// One of the eight instructions understood by the [`BfMachine`](crate::machine::BfMachine).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum BfInstruction {
    /// `+`: increments the current cell, wrapping around.
    Increment = b'+',
    /// `-`: decrements the current cell, wrapping around.
    Decrement = b'-',
    /// `>`: moves the cursor one cell to the right, stopping at the last cell.
    MoveRight = b'>',
    /// `<`: moves the cursor one cell to the left, stopping at the first cell.
    MoveLeft = b'<',
    /// `.`: writes the current cell to the device bus.
    Output = b'.',
    /// `,`: reads a byte from the device bus into the current cell.
    Input = b',',
    /// `[`: enters a loop if the current cell is nonzero, skips it otherwise.
    LoopEnter = b'[',
    /// `]`: jumps back to the start of the loop if the current cell is nonzero.
    LoopExit = b']',
}
impl BfInstruction {
    /// Decodes a source byte, returning `None` if it is not an instruction.
    /// # Example
    /// ```rust
    /// # use barybf::instruction::BfInstruction;
    /// assert_eq!(BfInstruction::decode(b'['), Some(BfInstruction::LoopEnter));
    /// assert_eq!(BfInstruction::decode(b'a'), None);
    /// ```
    pub const fn decode(byte: u8) -> Option<Self> {
        Some(match byte {
            b'+' => Self::Increment,
            b'-' => Self::Decrement,
            b'>' => Self::MoveRight,
            b'<' => Self::MoveLeft,
            b'.' => Self::Output,
            b',' => Self::Input,
            b'[' => Self::LoopEnter,
            b']' => Self::LoopExit,
            _ => return None,
        })
    }

    /// Returns the source byte of this instruction.
    /// # Example
    /// ```rust
    /// # use barybf::instruction::BfInstruction;
    /// assert_eq!(BfInstruction::Output.byte(), b'.');
    /// ```
    pub const fn byte(self) -> u8 {
        self as u8
    }
}
impl Display for BfInstruction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Increment => "inc",
            Self::Decrement => "dec",
            Self::MoveRight => "right",
            Self::MoveLeft => "left",
            Self::Output => "out",
            Self::Input => "in",
            Self::LoopEnter => "enter",
            Self::LoopExit => "exit",
        })
    }
}
