//! # Addressing Modes
//!
//! This module defines the addressing modes decoded by this instruction
//! subset. Each mode determines how the CPU interprets the operand bytes
//! that follow an opcode and how it calculates the effective address.
//!
//! The full 6502 has 13 modes; only the ones used by the implemented
//! opcodes are modeled here. New variants are added alongside the opcodes
//! that need them.

/// Addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX
/// - **2 bytes**: Absolute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// 8-bit constant operand in the instruction itself.
    ///
    /// Example: LDA #$10 (load the value 0x10 into the accumulator)
    Immediate,

    /// 8-bit address in the zero page (0x00-0xFF).
    ///
    /// Example: LDA $80 (load from address 0x0080)
    ZeroPage,

    /// Zero page address indexed by the X register.
    ///
    /// Example: LDA $80,X (load from 0x0080 + X, wrapping within the zero page)
    ZeroPageX,

    /// Full 16-bit address.
    ///
    /// Example: JSR $4242 (call the subroutine at 0x4242)
    Absolute,
}
