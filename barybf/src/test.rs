use alloc::{collections::VecDeque, vec::Vec};

use crate::{
    bus::BfDeviceBus,
    machine::{BfMachine, BfMachineError, EndOfInput},
    tape::TAPE_SIZE,
};

struct BfTestBus {
    input: VecDeque<u8>,
    output: Vec<u8>,
}
impl BfTestBus {
    fn new(input: &[u8]) -> Self {
        Self {
            input: input.iter().copied().collect(),
            output: Vec::new(),
        }
    }
}
impl BfDeviceBus for BfTestBus {
    fn read(&mut self) -> Option<u8> {
        self.input.pop_front()
    }
    fn write(&mut self, byte: u8) {
        self.output.push(byte)
    }
}

fn run_with_input(
    source: &[u8],
    input: &[u8],
) -> (BfMachine, Result<(), BfMachineError>, Vec<u8>) {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut machine = BfMachine::new();
    let mut bus = BfTestBus::new(input);
    let result = machine.execute(source, &mut bus);
    (machine, result, bus.output)
}
fn assert_tape_state(source: &[u8], expected_cells: &[u8]) {
    let (machine, result, _) = run_with_input(source, &[]);
    assert_eq!(result, Ok(()));
    assert_eq!(
        &machine.tape().cells()[..expected_cells.len()],
        expected_cells
    )
}
fn assert_output(source: &[u8], input: &[u8], expected_output: &[u8]) {
    let (_, result, output) = run_with_input(source, input);
    assert_eq!(result, Ok(()));
    assert_eq!(output, expected_output)
}

#[test]
fn test_inc_dec() {
    assert_tape_state(b"+++", &[0x03]);
    assert_tape_state(b"+++--", &[0x01]);
    assert_tape_state(b"-", &[0xff]);
    assert_tape_state(&[b'+'; 256], &[0x00]);
    assert_tape_state(&[b'-'; 300], &[0xd4]);
}

#[test]
fn test_moves() {
    assert_tape_state(b"+>++>+++", &[0x01, 0x02, 0x03]);
    assert_tape_state(b"<<<+", &[0x01]);
    assert_tape_state(b">>><<+", &[0x00, 0x01]);
}

#[test]
fn test_moves_clamp_at_last_cell() {
    let mut source = [b'>'; TAPE_SIZE + 5].to_vec();
    source.push(b'+');
    let (machine, result, _) = run_with_input(&source, &[]);
    assert_eq!(result, Ok(()));
    assert_eq!(machine.tape().cursor(), TAPE_SIZE - 1);
    assert_eq!(machine.tape()[TAPE_SIZE - 1], 0x01);
}

#[test]
fn test_ignores_other_bytes() {
    assert_tape_state(b"this + is + a comment\n+", &[0x03]);
    assert_output(b"++++++++[>++++++++<-]>+. ( prints A )", &[], b"A");
}

#[test]
fn test_null_byte_ends_code() {
    assert_tape_state(b"++\0++", &[0x02]);
    assert_tape_state(b"\0[", &[0x00]);
}

#[test]
fn test_echo() {
    assert_output(b",.", &[65], &[65]);
    assert_output(b",.,.,.", b"abc", b"abc");
}

#[test]
fn test_end_of_input() {
    assert_tape_state(b",", &[0xff]);

    let mut machine = BfMachine::new().with_end_of_input(EndOfInput::Store(0));
    machine.execute(b"+++,", &mut BfTestBus::new(&[])).unwrap();
    assert_eq!(machine.tape().current(), 0x00);

    let mut machine = BfMachine::new().with_end_of_input(EndOfInput::Unchanged);
    machine.execute(b"+++,", &mut BfTestBus::new(&[])).unwrap();
    assert_eq!(machine.tape().current(), 0x03);

    // Zero on end of input makes `,[.,]` a proper cat program
    let mut machine = BfMachine::new().with_end_of_input(EndOfInput::Store(0));
    let mut bus = BfTestBus::new(b"hello");
    machine.execute(b",[.,]", &mut bus).unwrap();
    assert_eq!(bus.output, b"hello");
}

#[test]
fn test_skipped_loop_has_no_effect() {
    assert_tape_state(b"[+++>+++.,]+", &[0x01, 0x00]);
    assert_output(b"[.[.].]>+.", &[], &[0x01]);
    let (machine, _, _) = run_with_input(b"[[[]]]", &[]);
    assert!(machine.address_stack().is_empty());
}

#[test]
fn test_transfer() {
    assert_tape_state(b"+++++[->+<]", &[0x00, 0x05]);
    assert_tape_state(b"+++[>++<-]", &[0x00, 0x06]);
}

#[test]
fn test_nested_loops() {
    // 3 * 4 * 5 in the third cell
    assert_tape_state(b"+++[>++++[>+++++<-]<-]", &[0x00, 0x00, 0x3c]);
}

#[test]
fn test_stack_depth_follows_open_loops() {
    let mut machine = BfMachine::new();
    let mut bus = BfTestBus::new(&[]);
    let mut vector = machine.vector(b"+[[-]]", &mut bus);

    vector.by_ref().take(3).for_each(|executed| assert!(executed.is_ok()));
    assert_eq!(vector.instruction_pointer(), 3);
    assert_eq!(vector.machine().address_stack().depth(), 2);
    assert_eq!(vector.machine().address_stack().peek(), Some(2));

    assert_eq!(vector.execute_till_end(), Ok(()));
    assert_eq!(machine.address_stack().depth(), 0);
}

#[test]
fn test_loop_starting_at_position_zero() {
    let mut machine = BfMachine::new();
    *machine.tape_mut().current_mut() = 3;
    machine.execute(b"[->+<]", &mut BfTestBus::new(&[])).unwrap();
    assert_eq!(machine.tape()[0], 0x00);
    assert_eq!(machine.tape()[1], 0x03);
}

#[test]
fn test_unmatched_loop_exit_is_ignored() {
    assert_tape_state(b"+]+", &[0x02]);
    assert_tape_state(b"]]]+", &[0x01]);
}

#[test]
fn test_unterminated_loop() {
    let (_, result, output) = run_with_input(b"[+", &[]);
    assert_eq!(result, Err(BfMachineError::UnterminatedLoop { position: 0 }));
    assert!(output.is_empty());

    let (_, result, output) = run_with_input(b"+.>[[]", &[]);
    assert_eq!(result, Err(BfMachineError::UnterminatedLoop { position: 3 }));
    assert_eq!(output, [0x01]);
}

#[test]
fn test_vector_stops_after_error() {
    let mut machine = BfMachine::new();
    let mut bus = BfTestBus::new(&[]);
    let mut vector = machine.vector(b"+[+", &mut bus);
    assert_eq!(vector.next(), Some(Ok(b'+')));
    assert_eq!(vector.next(), Some(Ok(b'[')));
    assert_eq!(vector.next(), Some(Ok(b'+')));
    assert_eq!(vector.next(), None);

    let mut machine = BfMachine::new();
    let mut vector = machine.vector(b"[+", &mut bus);
    assert_eq!(
        vector.next(),
        Some(Err(BfMachineError::UnterminatedLoop { position: 0 }))
    );
    assert_eq!(vector.next(), None);
    assert_eq!(vector.next(), None);
}

#[test]
fn test_hello_world() {
    assert_output(
        b"++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.",
        &[],
        b"Hello World!\n",
    );
}
