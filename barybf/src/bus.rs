//! # BF device bus
//! The machine interacts with the outside world using the `,` and `.` instructions.
//! What these actually read from and write to is implementation defined, in the
//! form of a trait that satisfies:
//! - reading a single byte, or reporting that input is exhausted
//! - writing a single byte
//!
//! Both calls complete before the next instruction executes. Buffering, if any,
//! is left to the implementor.

pub trait BfDeviceBus {
    /// Reads the next input byte, or `None` if there is no more input.
    fn read(&mut self) -> Option<u8>;
    /// Writes a byte to the output.
    fn write(&mut self, byte: u8);
}
