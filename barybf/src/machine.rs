//! # BF machine
//! Represents a fully functional brainfuck machine: a [`BfTape`] of 4096 cells
//! and the [`AddressStack`] keeping track of open loops.
//!
//! Execution of code is done using the [`BfVector`] abstraction. It is an iterator
//! borrowing the machine, the source code and a [`BfDeviceBus`]. It then runs until
//! it reaches the end of the source, or a null byte. Using iterators eases up the
//! interaction. One could easily log instructions executed, for example.
//! ```rust
//! # use barybf::{bus::BfDeviceBus, machine::BfMachine};
//! # struct Silent;
//! # impl BfDeviceBus for Silent {
//! #     fn read(&mut self) -> Option<u8> { None }
//! #     fn write(&mut self, _byte: u8) {}
//! # }
//! let mut machine = BfMachine::new();
//! for executed in machine.vector(b"++>+", &mut Silent) {
//!     println!("{}", executed.unwrap() as char);
//! }
//! ```
//!
//! Machines hold no reference to the code they run, so the same machine can be
//! fed several programs in a row, each one starting where the tape was left.

use core::fmt::Display;
use core::iter::FusedIterator;

use crate::{bus::BfDeviceBus, instruction::BfInstruction, stack::AddressStack, tape::BfTape};

/// Value stored by `,` when the device bus has no more input, unless configured
/// otherwise.
pub const END_OF_INPUT: u8 = 0xff;

/// What the `,` instruction does once the device bus runs out of input.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum EndOfInput {
    /// Stores the given byte in the current cell.
    Store(u8),
    /// Leaves the current cell untouched.
    Unchanged,
}
impl Default for EndOfInput {
    fn default() -> Self {
        Self::Store(END_OF_INPUT)
    }
}

/// Fatal conditions encountered while executing code.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Ord, Eq)]
pub enum BfMachineError {
    /// A `[` was skipped but the source ended before its matching `]`.
    UnterminatedLoop { position: usize },
}
impl Display for BfMachineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnterminatedLoop { position } => write!(
                f,
                "reached eof while searching for ] matching [ at {position}"
            ),
        }
    }
}
impl core::error::Error for BfMachineError {}

/// The brainfuck machine, able to execute the eight brainfuck instructions.
#[derive(Clone, Debug, Default)]
pub struct BfMachine {
    tape: BfTape,
    address_stack: AddressStack,
    end_of_input: EndOfInput,
}
impl BfMachine {
    /// Returns a new [`BfMachine`] with a zeroed tape and no open loops.
    pub fn new() -> Self {
        Self::default()
    }

    /// Modifies what `,` stores once input is exhausted.
    /// # Example
    /// ```rust
    /// # use barybf::machine::{BfMachine, EndOfInput};
    /// let machine = BfMachine::new().with_end_of_input(EndOfInput::Unchanged);
    /// assert_eq!(machine.end_of_input(), EndOfInput::Unchanged);
    /// ```
    pub fn with_end_of_input(mut self, end_of_input: EndOfInput) -> Self {
        self.end_of_input = end_of_input;
        self
    }

    pub fn tape(&self) -> &BfTape {
        &self.tape
    }
    pub fn tape_mut(&mut self) -> &mut BfTape {
        &mut self.tape
    }
    pub fn address_stack(&self) -> &AddressStack {
        &self.address_stack
    }
    pub fn end_of_input(&self) -> EndOfInput {
        self.end_of_input
    }

    /// Returns a [`BfVector`] that can be iterated on to execute `code` from its
    /// first byte.
    pub fn vector<'a, B: BfDeviceBus>(
        &'a mut self,
        code: &'a [u8],
        device_bus: &'a mut B,
    ) -> BfVector<'a, B> {
        BfVector {
            machine: self,
            code,
            device_bus,
            instruction_pointer: 0,
            halted: false,
        }
    }

    /// Executes `code` from its first byte until the end.
    pub fn execute<B: BfDeviceBus>(
        &mut self,
        code: &[u8],
        device_bus: &mut B,
    ) -> Result<(), BfMachineError> {
        self.vector(code, device_bus).execute_till_end()
    }

    /// Executes the byte at `instruction_pointer`, modifying the machine's state.
    ///
    /// Returns the position of the next byte to execute. Bytes that are not
    /// instructions do nothing.
    pub fn execute_instruction<B: BfDeviceBus>(
        &mut self,
        code: &[u8],
        instruction_pointer: usize,
        device_bus: &mut B,
    ) -> Result<usize, BfMachineError> {
        let byte = fetch(code, instruction_pointer);
        let mut instruction_pointer = instruction_pointer;

        match BfInstruction::decode(byte) {
            Some(BfInstruction::Increment) => self.tape.increment(),
            Some(BfInstruction::Decrement) => self.tape.decrement(),
            Some(BfInstruction::MoveRight) => self.tape.move_right(),
            Some(BfInstruction::MoveLeft) => self.tape.move_left(),
            Some(BfInstruction::Output) => device_bus.write(self.tape.current()),
            Some(BfInstruction::Input) => match (device_bus.read(), self.end_of_input) {
                (Some(value), _) | (None, EndOfInput::Store(value)) => {
                    *self.tape.current_mut() = value
                }
                (None, EndOfInput::Unchanged) => {}
            },
            Some(BfInstruction::LoopEnter) => {
                if self.tape.current() != 0 {
                    self.address_stack.push(instruction_pointer)
                } else {
                    instruction_pointer = matching_loop_exit(code, instruction_pointer)?;
                }
            }
            Some(BfInstruction::LoopExit) => match self.address_stack.peek() {
                Some(loop_start) if self.tape.current() != 0 => {
                    log::debug!("{instruction_pointer:#06x}: looping back to {loop_start:#06x}");
                    instruction_pointer = loop_start
                }
                _ => {
                    self.address_stack.pop();
                }
            },
            None => {}
        }

        Ok(instruction_pointer + 1)
    }
}

/// Reads the byte at the given position, the end of the code reading as a null
/// byte.
fn fetch(code: &[u8], position: usize) -> u8 {
    code.get(position).copied().unwrap_or(0)
}

/// Finds the `]` closing the loop that starts at `loop_start`.
fn matching_loop_exit(code: &[u8], loop_start: usize) -> Result<usize, BfMachineError> {
    let mut depth = 1usize;
    let mut position = loop_start;
    while depth != 0 {
        position += 1;
        match fetch(code, position) {
            0 => {
                return Err(BfMachineError::UnterminatedLoop {
                    position: loop_start,
                })
            }
            b'[' => depth += 1,
            b']' => depth -= 1,
            _ => {}
        }
    }
    log::debug!("{loop_start:#06x}: skipping loop up to {position:#06x}");
    Ok(position)
}

/// An instruction vector, implemented as an iterator that executes instructions
/// in sequence until it reaches the end of the code.
///
/// Each call to `next` executes one byte and returns it, or the error that
/// stopped the machine. Once an error has been returned, the vector is exhausted.
///
/// # [`FusedIterator`]
/// Code is borrowed immutably for the whole life of the vector, so once the end
/// is reached it stays reached.
pub struct BfVector<'a, B> {
    machine: &'a mut BfMachine,
    code: &'a [u8],
    device_bus: &'a mut B,
    instruction_pointer: usize,
    halted: bool,
}
impl<B: BfDeviceBus> BfVector<'_, B> {
    /// Position of the next byte to execute.
    pub fn instruction_pointer(&self) -> usize {
        self.instruction_pointer
    }

    pub fn machine(&self) -> &BfMachine {
        self.machine
    }

    /// Executes instructions until the end of the code is reached.
    pub fn execute_till_end(self) -> Result<(), BfMachineError> {
        for executed in self {
            executed?;
        }
        Ok(())
    }
}
impl<B: BfDeviceBus> Iterator for BfVector<'_, B> {
    type Item = Result<u8, BfMachineError>;

    /// Steps through the next instruction to execute. Returns `Some` until the
    /// end of the code is reached.
    fn next(&mut self) -> Option<Self::Item> {
        let byte = fetch(self.code, self.instruction_pointer);
        if self.halted || byte == 0 {
            return None;
        }

        if let Some(instruction) = BfInstruction::decode(byte) {
            log::trace!(
                "{:#06x}: {instruction} cursor {:#06x} cell {:#04x}",
                self.instruction_pointer,
                self.machine.tape.cursor(),
                self.machine.tape.current()
            );
        }

        match self
            .machine
            .execute_instruction(self.code, self.instruction_pointer, self.device_bus)
        {
            Ok(next) => {
                self.instruction_pointer = next;
                Some(Ok(byte))
            }
            Err(error) => {
                self.halted = true;
                Some(Err(error))
            }
        }
    }
}
impl<B: BfDeviceBus> FusedIterator for BfVector<'_, B> {}
