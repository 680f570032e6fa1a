//! # BF tape
//! The memory of the machine: 4096 byte cells, all zeroed at start, and a cursor
//! pointing at the cell instructions currently act on.
//!
//! The tape never grows. Moving the cursor past either end leaves it on the
//! boundary cell instead of wrapping around or failing.

use core::{
    fmt::Display,
    ops::{Index, IndexMut},
};

/// Number of cells on a [`BfTape`].
pub const TAPE_SIZE: usize = 0x1000;

/// Fixed size tape of byte cells used by the [`BfMachine`](crate::machine::BfMachine).
///
/// Indexing is done using absolute cell positions, regardless of where the
/// cursor currently is.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct BfTape {
    cells: [u8; TAPE_SIZE],
    cursor: usize,
}
impl Default for BfTape {
    /// Returns a zeroed [`BfTape`].
    /// Same as [`BfTape::new`].
    fn default() -> Self {
        Self::new()
    }
}
impl BfTape {
    /// Returns a zeroed `BfTape` with its cursor on the first cell.
    /// # Example
    /// ```rust
    /// # use barybf::tape::BfTape;
    /// let tape = BfTape::new();
    /// assert_eq!(tape.cursor(), 0);
    /// assert!(tape.cells().iter().all(|&b| b == 0));
    /// ```
    pub const fn new() -> Self {
        Self {
            cells: [0u8; TAPE_SIZE],
            cursor: 0,
        }
    }

    /// Position of the cursor on the tape.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// All the cells of the tape.
    pub fn cells(&self) -> &[u8; TAPE_SIZE] {
        &self.cells
    }

    /// Returns the byte under the cursor.
    pub fn current(&self) -> u8 {
        self.cells[self.cursor]
    }
    /// Returns a mutable reference to the byte under the cursor.
    /// # Example
    /// ```rust
    /// # use barybf::tape::BfTape;
    /// # let mut tape = BfTape::new();
    /// *tape.current_mut() = 10;
    /// assert_eq!(tape.current(), 10);
    /// ```
    pub fn current_mut(&mut self) -> &mut u8 {
        &mut self.cells[self.cursor]
    }

    /// Increments the byte under the cursor, wrapping from 255 to 0.
    /// # Example
    /// ```rust
    /// # use barybf::tape::BfTape;
    /// # let mut tape = BfTape::new();
    /// *tape.current_mut() = 0xff;
    /// tape.increment();
    /// assert_eq!(tape.current(), 0);
    /// ```
    pub fn increment(&mut self) {
        let cell = self.current_mut();
        *cell = cell.wrapping_add(1)
    }

    /// Decrements the byte under the cursor, wrapping from 0 to 255.
    /// # Example
    /// ```rust
    /// # use barybf::tape::BfTape;
    /// # let mut tape = BfTape::new();
    /// tape.decrement();
    /// assert_eq!(tape.current(), 0xff);
    /// ```
    pub fn decrement(&mut self) {
        let cell = self.current_mut();
        *cell = cell.wrapping_sub(1)
    }

    /// Moves the cursor one cell to the right, staying on the last cell if it
    /// is already there.
    /// # Example
    /// ```rust
    /// # use barybf::tape::{BfTape, TAPE_SIZE};
    /// # let mut tape = BfTape::new();
    /// for _ in 0..TAPE_SIZE + 10 {
    ///     tape.move_right();
    /// }
    /// assert_eq!(tape.cursor(), TAPE_SIZE - 1);
    /// ```
    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(TAPE_SIZE - 1)
    }

    /// Moves the cursor one cell to the left, staying on the first cell if it
    /// is already there.
    /// # Example
    /// ```rust
    /// # use barybf::tape::BfTape;
    /// # let mut tape = BfTape::new();
    /// tape.move_left();
    /// assert_eq!(tape.cursor(), 0);
    /// ```
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1)
    }
}
impl Index<usize> for BfTape {
    type Output = u8;

    /// Returns a reference to the cell at the given position.
    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}
impl IndexMut<usize> for BfTape {
    /// Returns a mutable reference to the cell at the given position.
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.cells[index]
    }
}
impl PartialEq<[u8; TAPE_SIZE]> for BfTape {
    /// Partial equality between the cells of this tape and an array of 4096
    /// bytes.
    ///
    /// This does not care about the cursor location.
    fn eq(&self, other: &[u8; TAPE_SIZE]) -> bool {
        &self.cells == other
    }
}
impl Display for BfTape {
    /// Pretty printing for tapes: the cells around the cursor, the one under
    /// the cursor being followed by `|`.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let start = self.cursor.saturating_sub(4);
        let end = (self.cursor + 4).min(TAPE_SIZE - 1);
        write!(f, "@{:#06x} ", start)?;
        for i in start..=end {
            write!(
                f,
                "{:#04x}{} ",
                self.cells[i],
                if i == self.cursor { "|" } else { "" }
            )?
        }
        Ok(())
    }
}
