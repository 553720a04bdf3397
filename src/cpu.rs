//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state
//! and the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of the next byte to fetch
//! - **Stack pointer** (SP): stored as a full 16-bit address initialized to
//!   0x0100, advancing upward (see the field docs for this quirk)
//! - **Status flags**: C, Z, I, D, B, V, N (individual bool fields)
//!
//! ## Execution Model
//!
//! The CPU holds no ownership of its memory. Every operation that touches
//! memory takes `&mut AddressSpace`, so the address space and the CPU have
//! independent lifetimes and the exclusive borrow statically rules out
//! aliasing for the duration of a run.
//!
//! Execution is driven by [`CPU::execute`], which spends a caller-supplied
//! cycle budget: each fetched or read byte costs one cycle, and the loop
//! runs until the budget is exhausted (possibly overshooting on the final
//! instruction, which always runs to completion).

use crate::{AddressSpace, CycleBudget, OPCODE_TABLE};

/// 6502 CPU state and execution context.
///
/// Construct with [`CPU::new`], then call [`CPU::reset`] against an address
/// space before executing anything: reset is the only documented entry into
/// a well-defined register state, and it also zero-fills the memory.
///
/// # Examples
///
/// ```
/// use emu6502::{AddressSpace, CPU, LDA_IMMEDIATE};
///
/// let mut memory = AddressSpace::new();
/// let mut cpu = CPU::new();
/// cpu.reset(&mut memory);
///
/// // The driver populates memory after reset
/// memory.write_byte(0xFFFC, LDA_IMMEDIATE);
/// memory.write_byte(0xFFFD, 0x84);
///
/// let consumed = cpu.execute(&mut memory, 2);
///
/// assert_eq!(consumed, 2);
/// assert_eq!(cpu.a(), 0x84);
/// assert!(cpu.flag_n()); // Bit 7 of 0x84 is set
/// ```
pub struct CPU {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of the next byte to fetch)
    pub(crate) pc: u16,

    /// Stack pointer, stored as a full 16-bit address.
    ///
    /// Initialized to 0x0100 (the base of the stack page) and advanced
    /// upward by JSR. Real hardware keeps an 8-bit stack-page offset that
    /// grows downward; the 16-bit incrementing form is a preserved
    /// simplification of this design and part of its observable behavior.
    pub(crate) sp: u16,

    /// Carry flag (set on unsigned overflow/underflow)
    pub(crate) flag_c: bool,

    /// Zero flag (set if result is zero)
    pub(crate) flag_z: bool,

    /// Interrupt disable flag (blocks IRQ when set)
    pub(crate) flag_i: bool,

    /// Decimal mode flag (enables BCD arithmetic)
    pub(crate) flag_d: bool,

    /// Break flag (set when BRK instruction executed)
    pub(crate) flag_b: bool,

    /// Overflow flag (set on signed overflow)
    pub(crate) flag_v: bool,

    /// Negative flag (set if bit 7 of result is 1)
    pub(crate) flag_n: bool,
}

impl CPU {
    /// Creates a CPU with zeroed registers and flags.
    ///
    /// The state is not meaningful until [`CPU::reset`] has run; reset is
    /// the documented entry into a well-defined state.
    pub fn new() -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: 0x0000,
            flag_c: false,
            flag_z: false,
            flag_i: false,
            flag_d: false,
            flag_b: false,
            flag_v: false,
            flag_n: false,
        }
    }

    /// Resets the CPU and zero-fills the address space.
    ///
    /// After reset:
    /// - PC = 0xFFFC. This design treats the reset-vector location as the
    ///   literal first instruction address rather than dereferencing it for
    ///   the true start address, a preserved simplification relative to the
    ///   real hardware.
    /// - SP = 0x0100 (base of the stack page, see the `sp` field docs)
    /// - All flags cleared, A = X = Y = 0
    /// - Every byte of `memory` = 0
    ///
    /// Always succeeds.
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::{AddressSpace, CPU};
    ///
    /// let mut memory = AddressSpace::new();
    /// let mut cpu = CPU::new();
    /// cpu.reset(&mut memory);
    ///
    /// assert_eq!(cpu.pc(), 0xFFFC);
    /// assert_eq!(cpu.sp(), 0x0100);
    /// ```
    pub fn reset(&mut self, memory: &mut AddressSpace) {
        self.pc = 0xFFFC;
        self.sp = 0x0100;
        self.flag_c = false;
        self.flag_z = false;
        self.flag_i = false;
        self.flag_d = false;
        self.flag_b = false;
        self.flag_v = false;
        self.flag_n = false;
        self.a = 0x00;
        self.x = 0x00;
        self.y = 0x00;
        memory.reset();
    }

    /// Runs the fetch-decode-execute loop against a cycle budget.
    ///
    /// Each iteration fetches one opcode byte (1 cycle) and dispatches it
    /// through [`OPCODE_TABLE`]. An unrecognized opcode is logged and
    /// skipped: it costs nothing beyond the opcode fetch and does not stop
    /// the loop. The loop ends when the budget is exhausted; an instruction
    /// that has begun always runs to completion, so the final instruction
    /// may overshoot.
    ///
    /// Returns the number of cycles actually consumed, which can exceed
    /// `budget` because of that overshoot. A budget of 0 performs no work.
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::{AddressSpace, CPU, JSR_ABSOLUTE, LDA_IMMEDIATE};
    ///
    /// let mut memory = AddressSpace::new();
    /// let mut cpu = CPU::new();
    /// cpu.reset(&mut memory);
    ///
    /// // JSR $4242, then LDA #$84 at the subroutine
    /// memory.write_byte(0xFFFC, JSR_ABSOLUTE);
    /// memory.write_byte(0xFFFD, 0x42);
    /// memory.write_byte(0xFFFE, 0x42);
    /// memory.write_byte(0x4242, LDA_IMMEDIATE);
    /// memory.write_byte(0x4243, 0x84);
    ///
    /// let consumed = cpu.execute(&mut memory, 9);
    ///
    /// assert_eq!(consumed, 9);
    /// assert_eq!(cpu.a(), 0x84);
    /// assert_eq!(cpu.pc(), 0x4244);
    /// ```
    pub fn execute(&mut self, memory: &mut AddressSpace, budget: u32) -> u64 {
        let mut cycles = CycleBudget::new(budget);

        while !cycles.is_exhausted() {
            let opcode = self.fetch_byte(memory, &mut cycles);

            match OPCODE_TABLE[opcode as usize] {
                Some(instruction) => {
                    log::trace!(
                        "{} (0x{:02X}), {} cycles remaining",
                        instruction.mnemonic,
                        opcode,
                        cycles.remaining()
                    );
                    (instruction.execute)(self, memory, &mut cycles);
                }
                None => {
                    log::warn!(
                        "unhandled opcode 0x{:02X} at 0x{:04X}",
                        opcode,
                        self.pc.wrapping_sub(1)
                    );
                }
            }
        }

        cycles.consumed()
    }

    // ========== Fetch Primitives ==========

    /// Fetches the byte at PC, advancing PC and charging 1 cycle.
    ///
    /// Used for both opcode and operand fetches; the protocol does not
    /// distinguish the two at this layer. PC wraps at the 64KB boundary.
    pub(crate) fn fetch_byte(&mut self, memory: &AddressSpace, cycles: &mut CycleBudget) -> u8 {
        let value = memory.read_byte(self.pc);
        self.pc = self.pc.wrapping_add(1);
        cycles.charge(1);
        value
    }

    /// Fetches a little-endian word at PC, advancing PC by 2 and charging
    /// 2 cycles.
    pub(crate) fn fetch_word(&mut self, memory: &AddressSpace, cycles: &mut CycleBudget) -> u16 {
        let low = self.fetch_byte(memory, cycles) as u16;
        let high = self.fetch_byte(memory, cycles) as u16;
        low | (high << 8)
    }

    /// Reads the byte at an explicit address, charging 1 cycle.
    ///
    /// Used for addressing-mode resolution; does not touch PC.
    pub(crate) fn read_byte(
        &self,
        memory: &AddressSpace,
        address: u16,
        cycles: &mut CycleBudget,
    ) -> u8 {
        let value = memory.read_byte(address);
        cycles.charge(1);
        value
    }

    /// Sets the zero flag iff A == 0 and the negative flag iff bit 7 of A
    /// is set. No other flags are touched.
    pub(crate) fn update_zero_and_negative_flags(&mut self) {
        self.flag_z = self.a == 0;
        self.flag_n = (self.a & 0x80) != 0;
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value (a full 16-bit address, see the
    /// field docs).
    pub fn sp(&self) -> u16 {
        self.sp
    }

    /// Returns the status register packed as a byte.
    ///
    /// Bit layout (NV-BDIZC):
    /// - Bit 7: N (Negative)
    /// - Bit 6: V (Overflow)
    /// - Bit 5: (unused, always 1)
    /// - Bit 4: B (Break)
    /// - Bit 3: D (Decimal)
    /// - Bit 2: I (Interrupt Disable)
    /// - Bit 1: Z (Zero)
    /// - Bit 0: C (Carry)
    pub fn status(&self) -> u8 {
        let mut status: u8 = 0b0010_0000; // Bit 5 always 1

        if self.flag_n {
            status |= 0b1000_0000;
        }
        if self.flag_v {
            status |= 0b0100_0000;
        }
        if self.flag_b {
            status |= 0b0001_0000;
        }
        if self.flag_d {
            status |= 0b0000_1000;
        }
        if self.flag_i {
            status |= 0b0000_0100;
        }
        if self.flag_z {
            status |= 0b0000_0010;
        }
        if self.flag_c {
            status |= 0b0000_0001;
        }

        status
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flag_c
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flag_z
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.flag_i
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.flag_d
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.flag_b
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.flag_v
    }

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.flag_n
    }

    // ========== Register Setters ==========
    //
    // The driver seeds registers between reset and execute (e.g. preloading
    // X for indexed addressing); tests use these to arrange state.

    /// Sets the accumulator register.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets or clears the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.flag_c = value;
    }

    /// Sets or clears the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.flag_z = value;
    }

    /// Sets or clears the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.flag_v = value;
    }

    /// Sets or clears the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.flag_n = value;
    }
}

impl Default for CPU {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_state() {
        let mut memory = AddressSpace::new();
        let mut cpu = CPU::new();

        cpu.set_a(0xAA);
        cpu.set_x(0xBB);
        cpu.set_flag_c(true);
        cpu.reset(&mut memory);

        assert_eq!(cpu.pc(), 0xFFFC);
        assert_eq!(cpu.sp(), 0x0100);
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.x(), 0x00);
        assert_eq!(cpu.y(), 0x00);
        assert!(!cpu.flag_c());
        assert!(!cpu.flag_z());
        assert!(!cpu.flag_i());
        assert!(!cpu.flag_d());
        assert!(!cpu.flag_b());
        assert!(!cpu.flag_v());
        assert!(!cpu.flag_n());
    }

    #[test]
    fn test_fetch_byte_advances_pc_and_charges() {
        let mut memory = AddressSpace::new();
        let mut cpu = CPU::new();
        cpu.reset(&mut memory);

        memory.write_byte(0xFFFC, 0x42);
        let mut cycles = CycleBudget::new(1);

        let value = cpu.fetch_byte(&memory, &mut cycles);

        assert_eq!(value, 0x42);
        assert_eq!(cpu.pc(), 0xFFFD);
        assert_eq!(cycles.remaining(), 0);
    }

    #[test]
    fn test_fetch_word_little_endian() {
        let mut memory = AddressSpace::new();
        let mut cpu = CPU::new();
        cpu.reset(&mut memory);

        memory.write_byte(0xFFFC, 0x42);
        memory.write_byte(0xFFFD, 0x43);
        let mut cycles = CycleBudget::new(2);

        let word = cpu.fetch_word(&memory, &mut cycles);

        assert_eq!(word, 0x4342);
        assert_eq!(cpu.pc(), 0xFFFE);
        assert_eq!(cycles.remaining(), 0);
    }

    #[test]
    fn test_read_byte_leaves_pc_alone() {
        let mut memory = AddressSpace::new();
        let mut cpu = CPU::new();
        cpu.reset(&mut memory);

        memory.write_byte(0x0010, 0x37);
        let mut cycles = CycleBudget::new(1);

        let value = cpu.read_byte(&memory, 0x0010, &mut cycles);

        assert_eq!(value, 0x37);
        assert_eq!(cpu.pc(), 0xFFFC);
        assert_eq!(cycles.remaining(), 0);
    }

    #[test]
    fn test_update_zero_and_negative_flags() {
        let mut cpu = CPU::new();

        cpu.a = 0x00;
        cpu.update_zero_and_negative_flags();
        assert!(cpu.flag_z());
        assert!(!cpu.flag_n());

        cpu.a = 0x80;
        cpu.update_zero_and_negative_flags();
        assert!(!cpu.flag_z());
        assert!(cpu.flag_n());

        cpu.a = 0x7F;
        cpu.update_zero_and_negative_flags();
        assert!(!cpu.flag_z());
        assert!(!cpu.flag_n());
    }

    #[test]
    fn test_status_register_packing() {
        let mut cpu = CPU::new();

        // Bit 5 always set, everything else clear
        assert_eq!(cpu.status(), 0b0010_0000);

        cpu.set_flag_n(true);
        cpu.set_flag_c(true);
        assert_eq!(cpu.status(), 0b1010_0001);

        cpu.set_flag_z(true);
        cpu.set_flag_v(true);
        assert_eq!(cpu.status(), 0b1110_0011);
    }
}
