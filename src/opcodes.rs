//! # Opcode Dispatch Table
//!
//! This module holds the named opcode constants and the 256-slot dispatch
//! table that maps each opcode byte to its instruction handler. The table is
//! the single source of truth for which opcodes exist: the execute loop does
//! nothing but index into it, so new instructions are added by filling in a
//! slot, never by touching the loop's control structure.
//!
//! Unrecognized opcodes are `None` slots; the execute loop reports them and
//! carries on (see [`crate::CPU::execute`]).

use crate::addressing::AddressingMode;
use crate::instructions::{control, load_store};
use crate::{AddressSpace, CycleBudget, CPU};

/// LDA Immediate: load the next byte into the accumulator. 2 cycles.
pub const LDA_IMMEDIATE: u8 = 0xA9;

/// LDA Zero Page: load through a one-byte address. 3 cycles.
pub const LDA_ZERO_PAGE: u8 = 0xA5;

/// LDA Zero Page,X: load through a one-byte address offset by X. 4 cycles.
pub const LDA_ZERO_PAGE_X: u8 = 0xB5;

/// JSR Absolute: push the return address and jump to a subroutine. 6 cycles.
pub const JSR_ABSOLUTE: u8 = 0x20;

/// Instruction handler function.
///
/// A handler reads its operands through the CPU's fetch/read primitives (so
/// its cycle charges are self-consistent with the accounting those
/// primitives perform) and updates only the registers and flags its
/// instruction is documented to affect.
pub type Handler = fn(&mut CPU, &mut AddressSpace, &mut CycleBudget);

/// A dispatch table entry: static metadata plus the handler to run.
#[derive(Clone, Copy)]
pub struct Instruction {
    /// Three-letter instruction name (e.g., "LDA", "JSR").
    pub mnemonic: &'static str,

    /// How the instruction interprets its operand bytes.
    pub addressing_mode: AddressingMode,

    /// The function implementing the instruction's effect.
    pub execute: Handler,
}

/// 256-slot dispatch table indexed by opcode byte value.
///
/// Slots without an implemented instruction hold `None`. The execute loop
/// treats those as non-fatal: the opcode fetch still costs its cycle, a
/// diagnostic is logged, and execution continues at the next byte.
///
/// # Examples
///
/// ```
/// use emu6502::{AddressingMode, LDA_IMMEDIATE, OPCODE_TABLE};
///
/// let lda = OPCODE_TABLE[LDA_IMMEDIATE as usize].unwrap();
/// assert_eq!(lda.mnemonic, "LDA");
/// assert_eq!(lda.addressing_mode, AddressingMode::Immediate);
///
/// // 0x02 has no documented instruction
/// assert!(OPCODE_TABLE[0x02].is_none());
/// ```
pub static OPCODE_TABLE: [Option<Instruction>; 256] = build_opcode_table();

const fn build_opcode_table() -> [Option<Instruction>; 256] {
    let mut table: [Option<Instruction>; 256] = [None; 256];

    table[LDA_IMMEDIATE as usize] = Some(Instruction {
        mnemonic: "LDA",
        addressing_mode: AddressingMode::Immediate,
        execute: load_store::lda_immediate,
    });
    table[LDA_ZERO_PAGE as usize] = Some(Instruction {
        mnemonic: "LDA",
        addressing_mode: AddressingMode::ZeroPage,
        execute: load_store::lda_zero_page,
    });
    table[LDA_ZERO_PAGE_X as usize] = Some(Instruction {
        mnemonic: "LDA",
        addressing_mode: AddressingMode::ZeroPageX,
        execute: load_store::lda_zero_page_x,
    });
    table[JSR_ABSOLUTE as usize] = Some(Instruction {
        mnemonic: "JSR",
        addressing_mode: AddressingMode::Absolute,
        execute: control::jsr_absolute,
    });

    table
}
