use std::io::{ErrorKind, Read, Write};

use barybf::{
    bus::BfDeviceBus,
    machine::{BfMachine, BfMachineError, EndOfInput},
};

/// Defines how the brainfuck machine will interact with a terminal: `,` reads
/// one byte from `input`, `.` writes one byte to `output` and flushes it.
pub struct StdioDeviceBus<R, W> {
    input: R,
    output: W,
}
impl<R: Read, W: Write> StdioDeviceBus<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
impl<R: Read, W: Write> BfDeviceBus for StdioDeviceBus<R, W> {
    fn read(&mut self) -> Option<u8> {
        let mut buffer = [0];
        loop {
            match self.input.read(&mut buffer) {
                Ok(0) => return None,
                Ok(_) => return Some(buffer[0]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    log::warn!("failed to read input, treating it as exhausted: {e}");
                    return None;
                }
            }
        }
    }
    fn write(&mut self, byte: u8) {
        if let Err(e) = self
            .output
            .write_all(&[byte])
            .and_then(|_| self.output.flush())
        {
            log::warn!("failed to write {byte:#04x} to output: {e}")
        }
    }
}

/// Parses the end of input policy given on the command line: either a byte value
/// or `keep`.
pub fn parse_end_of_input(arg: &str) -> Result<EndOfInput, String> {
    if arg.eq_ignore_ascii_case("keep") {
        return Ok(EndOfInput::Unchanged);
    }
    arg.parse::<u8>()
        .map(EndOfInput::Store)
        .map_err(|_| format!("expected a byte value (0-255) or `keep`, got `{arg}`"))
}

/// Runs `code` on a fresh machine until the end, returning the machine for
/// inspection.
pub fn run<R: Read, W: Write>(
    code: &[u8],
    end_of_input: EndOfInput,
    input: R,
    output: W,
) -> Result<BfMachine, BfMachineError> {
    let mut machine = BfMachine::new().with_end_of_input(end_of_input);
    let mut device_bus = StdioDeviceBus::new(input, output);
    machine.execute(code, &mut device_bus)?;
    Ok(machine)
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_stdio_bus() {
        let mut bus = StdioDeviceBus::new(Cursor::new(b"xy".to_vec()), Vec::new());
        assert_eq!(bus.read(), Some(b'x'));
        assert_eq!(bus.read(), Some(b'y'));
        assert_eq!(bus.read(), None);
        bus.write(b'z');
        bus.write(0);
        let (_, output) = bus.into_inner();
        assert_eq!(output, [b'z', 0]);
    }

    #[test]
    fn test_parse_end_of_input() {
        assert_eq!(parse_end_of_input("255"), Ok(EndOfInput::Store(255)));
        assert_eq!(parse_end_of_input("0"), Ok(EndOfInput::Store(0)));
        assert_eq!(parse_end_of_input("KEEP"), Ok(EndOfInput::Unchanged));
        assert!(parse_end_of_input("256").is_err());
        assert!(parse_end_of_input("-1").is_err());
    }

    #[test]
    fn test_run() {
        let mut output = Vec::new();
        let machine = run(b",+.", EndOfInput::default(), &b"a"[..], &mut output).unwrap();
        assert_eq!(output, b"b");
        assert_eq!(machine.tape().current(), b'b');

        let mut output = Vec::new();
        assert_eq!(
            run(b".[", EndOfInput::default(), &b""[..], &mut output).err(),
            Some(BfMachineError::UnterminatedLoop { position: 1 })
        );
        assert_eq!(output, [0]);
    }
}
