//! # BaryBF: the baremetal brainfuck machine
//! An interpreter for [brainfuck](https://esolangs.org/wiki/Brainfuck) designed
//! to not rely on `std`. Only `alloc` is needed, for the address stack that
//! remembers where open loops start.
//!
//! The machine works on a fixed tape of 4096 byte cells, and talks to the outside
//! world through a [`BfDeviceBus`](bus::BfDeviceBus) provided by the host.
//! ```rust
//! # use barybf::{bus::BfDeviceBus, machine::BfMachine};
//! struct Silent;
//! impl BfDeviceBus for Silent {
//!     fn read(&mut self) -> Option<u8> { None }
//!     fn write(&mut self, _byte: u8) {}
//! }
//!
//! let mut machine = BfMachine::new();
//! machine.vector(b"+++[>++<-]", &mut Silent).execute_till_end().unwrap();
//! assert_eq!(machine.tape()[1], 6);
//! ```

#![no_std]

extern crate alloc;

pub mod bus;
pub mod instruction;
pub mod machine;
pub mod stack;
pub mod tape;

#[cfg(test)]
mod test;
