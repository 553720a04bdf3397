//! # Control Flow Instructions
//!
//! This module implements JSR (Jump to Subroutine).

use crate::{AddressSpace, CycleBudget, CPU};

/// JSR Absolute (0x20): pushes the return address and jumps.
///
/// Fetches the 16-bit target (little-endian), writes `PC - 1` — the address
/// of the last byte of the JSR instruction, per the conventional
/// subroutine-return convention — as a little-endian word at the address in
/// SP, loads PC with the target, and advances SP.
///
/// The stack here is a preserved simplification of this design: SP is a
/// full 16-bit address that advances by one slot per call (not two, and
/// never decrementing), unlike the real hardware's descending byte stack.
/// A matching RTS would read the word back from `SP - 1`.
///
/// Cycle cost: 2 target fetch + 2 return-address write + 1 PC load
/// + 1 SP increment (6 total with the opcode fetch).
///
/// Flags: none.
pub(crate) fn jsr_absolute(cpu: &mut CPU, memory: &mut AddressSpace, cycles: &mut CycleBudget) {
    let target = cpu.fetch_word(memory, cycles);
    memory.write_word(cpu.sp, cpu.pc.wrapping_sub(1), cycles);
    cpu.pc = target;
    cycles.charge(1);
    cpu.sp = cpu.sp.wrapping_add(1);
    cycles.charge(1);
    log::trace!("JSR: PC = 0x{:04X}", cpu.pc);
}
