//! # 6502 CPU Emulator Core
//!
//! An instruction-set emulator core for the MOS Technology 6502, an 8-bit
//! accumulator-based processor. The crate models the processor registers,
//! status flags, a flat 64KB address space, and a fetch-decode-execute cycle
//! that consumes a budget of clock cycles while mutating state according to
//! decoded instructions.
//!
//! The core is purely programmatic: a driver constructs an [`AddressSpace`],
//! resets a [`CPU`] against it (which also zero-fills the memory), writes
//! program bytes at chosen addresses, and calls [`CPU::execute`] with a
//! cycle budget. Final register, flag, and memory state are read back
//! through simple accessors.
//!
//! ## Quick Start
//!
//! ```rust
//! use emu6502::{AddressSpace, CPU, JSR_ABSOLUTE, LDA_IMMEDIATE};
//!
//! let mut memory = AddressSpace::new();
//! let mut cpu = CPU::new();
//!
//! // Reset puts the CPU in its well-defined start state and zeroes memory
//! cpu.reset(&mut memory);
//!
//! // JSR $4242; the subroutine there runs LDA #$84
//! memory.write_byte(0xFFFC, JSR_ABSOLUTE);
//! memory.write_byte(0xFFFD, 0x42);
//! memory.write_byte(0xFFFE, 0x42);
//! memory.write_byte(0x4242, LDA_IMMEDIATE);
//! memory.write_byte(0x4243, 0x84);
//!
//! let consumed = cpu.execute(&mut memory, 9);
//!
//! assert_eq!(consumed, 9);
//! assert_eq!(cpu.a(), 0x84);
//! assert!(cpu.flag_n());
//! ```
//!
//! ## Architecture
//!
//! Two components, strictly layered:
//!
//! - [`AddressSpace`] is a leaf: byte read/write over the full 16-bit range
//!   plus a little-endian word write that charges the cycle budget. It knows
//!   nothing about instructions.
//! - [`CPU`] holds all processor-visible state and implements the
//!   fetch/decode/execute protocol over an exclusively borrowed address
//!   space, charging one cycle per memory access through its fetch/read
//!   primitives.
//!
//! Dispatch is table-driven: [`OPCODE_TABLE`] maps each opcode byte to an
//! [`Instruction`] handler, so new opcodes are added by filling in a table
//! slot. Unrecognized opcodes are reported through the [`log`] facade and
//! skipped; nothing in this core is fatal.
//!
//! ## Modules
//!
//! - `cpu` - CPU state, reset, and the execute loop
//! - `memory` - the flat 64KB address space
//! - `cycles` - the cycle budget threaded through execution
//! - `opcodes` - opcode constants and the dispatch table
//! - `addressing` - addressing mode enumeration

pub mod addressing;
pub mod cpu;
pub mod cycles;
pub mod memory;
pub mod opcodes;

// Internal instruction implementations (not part of the public API)
mod instructions;

// Re-export public API
pub use addressing::AddressingMode;
pub use cpu::CPU;
pub use cycles::CycleBudget;
pub use memory::{AddressSpace, MEMORY_SIZE};
pub use opcodes::{
    Handler, Instruction, JSR_ABSOLUTE, LDA_IMMEDIATE, LDA_ZERO_PAGE, LDA_ZERO_PAGE_X,
    OPCODE_TABLE,
};
