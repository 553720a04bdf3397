//! # Load Instructions
//!
//! This module implements LDA (Load Accumulator) in its three addressing
//! modes: Immediate, Zero Page, and Zero Page,X.
//!
//! Every LDA variant loads a byte into the accumulator and then updates the
//! zero and negative flags from the result; no other flags are affected.

use crate::{AddressSpace, CycleBudget, CPU};

/// LDA Immediate (0xA9): loads the byte following the opcode.
///
/// Cycle cost: 1 operand fetch (2 total with the opcode fetch).
///
/// Flags: Z set iff A == 0, N set iff bit 7 of A is set.
pub(crate) fn lda_immediate(cpu: &mut CPU, memory: &mut AddressSpace, cycles: &mut CycleBudget) {
    let value = cpu.fetch_byte(memory, cycles);
    cpu.a = value;
    cpu.update_zero_and_negative_flags();
    log::trace!("A = 0x{:02X}", cpu.a);
}

/// LDA Zero Page (0xA5): loads through a one-byte zero page address.
///
/// Cycle cost: 1 operand fetch + 1 read (3 total with the opcode fetch).
///
/// Flags: Z, N.
pub(crate) fn lda_zero_page(cpu: &mut CPU, memory: &mut AddressSpace, cycles: &mut CycleBudget) {
    let address = cpu.fetch_byte(memory, cycles);
    cpu.a = cpu.read_byte(memory, address as u16, cycles);
    cpu.update_zero_and_negative_flags();
    log::trace!("A = 0x{:02X}", cpu.a);
}

/// LDA Zero Page,X (0xB5): loads through a zero page address offset by X.
///
/// The index addition wraps within the zero page (`u8` arithmetic), so
/// base 0xFF with X = 2 reads from 0x0001, never 0x0101. The addition
/// itself costs one cycle.
///
/// Cycle cost: 1 operand fetch + 1 index addition + 1 read (4 total with
/// the opcode fetch).
///
/// Flags: Z, N.
pub(crate) fn lda_zero_page_x(cpu: &mut CPU, memory: &mut AddressSpace, cycles: &mut CycleBudget) {
    let base = cpu.fetch_byte(memory, cycles);
    let address = base.wrapping_add(cpu.x);
    cycles.charge(1);
    cpu.a = cpu.read_byte(memory, address as u16, cycles);
    cpu.update_zero_and_negative_flags();
    log::trace!("A = 0x{:02X}", cpu.a);
}
