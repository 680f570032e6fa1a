//! # Address stack
//! Loops are implemented by remembering where each open `[` sits in the source.
//! Every time a loop is entered, the position of its `[` is pushed; when the
//! matching `]` finds a nonzero cell it jumps back to the position on top of
//! the stack, otherwise it pops it.
//!
//! The depth of the stack is thus always the number of loops currently being
//! executed.

use alloc::vec::Vec;
use core::fmt::Display;

/// By how many positions the stack grows when it runs out of space.
pub const STACK_BLOCK_SIZE: usize = 10;

/// LIFO stack of instruction positions used by the [`BfMachine`](crate::machine::BfMachine).
///
/// Storage grows in blocks of [`STACK_BLOCK_SIZE`] positions and is never given
/// back while the stack lives. Reading from an empty stack is not an error, it
/// simply returns `None`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct AddressStack {
    data: Vec<usize>,
}
impl Default for AddressStack {
    /// Returns an empty [`AddressStack`].
    /// Same as [`AddressStack::new`].
    fn default() -> Self {
        Self::new()
    }
}
impl AddressStack {
    /// Returns an empty `AddressStack` with room for one block of positions.
    /// # Example
    /// ```rust
    /// # use barybf::stack::{AddressStack, STACK_BLOCK_SIZE};
    /// let stack = AddressStack::new();
    /// assert!(stack.is_empty());
    /// assert!(stack.capacity() >= STACK_BLOCK_SIZE);
    /// ```
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(STACK_BLOCK_SIZE),
        }
    }

    /// Pushes a position on top of the stack.
    ///
    /// If the stack is full, its storage grows by [`STACK_BLOCK_SIZE`] positions
    /// first. An allocation failure aborts.
    /// # Example
    /// ```rust
    /// # use barybf::stack::AddressStack;
    /// # let mut stack = AddressStack::new();
    /// for position in 0..25 {
    ///     stack.push(position);
    /// }
    /// assert_eq!(stack.depth(), 25);
    /// assert_eq!(stack.peek(), Some(24));
    /// ```
    pub fn push(&mut self, position: usize) {
        if self.data.len() == self.data.capacity() {
            self.data.reserve_exact(STACK_BLOCK_SIZE);
        }
        self.data.push(position)
    }

    /// Returns the position on top of the stack without removing it, or `None`
    /// if the stack is empty.
    /// # Example
    /// ```rust
    /// # use barybf::stack::AddressStack;
    /// # let mut stack = AddressStack::new();
    /// assert_eq!(stack.peek(), None);
    /// stack.push(0);
    /// assert_eq!(stack.peek(), Some(0));
    /// assert_eq!(stack.depth(), 1);
    /// ```
    pub fn peek(&self) -> Option<usize> {
        self.data.last().copied()
    }

    /// Removes the position on top of the stack and returns it. Popping an empty
    /// stack does nothing and returns `None`.
    /// # Example
    /// ```rust
    /// # use barybf::stack::AddressStack;
    /// # let mut stack = AddressStack::new();
    /// stack.push(2);
    /// stack.push(3);
    ///
    /// assert_eq!(stack.pop(), Some(3));
    /// assert_eq!(stack.pop(), Some(2));
    /// assert_eq!(stack.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<usize> {
        self.data.pop()
    }

    /// Number of positions currently on the stack.
    pub fn depth(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of positions the stack can hold before growing again.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }
}
impl Display for AddressStack {
    /// Pretty printing, bottom of the stack first and `|` marking the top.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for position in &self.data {
            write!(f, "{position:#06x} ")?
        }
        write!(f, "|")
    }
}
