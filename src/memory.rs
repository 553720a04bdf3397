//! # Address Space
//!
//! This module provides the `AddressSpace` type: a flat, byte-addressable
//! 64KB memory model covering the processor's full 16-bit address range.
//!
//! ## Design Principles
//!
//! - Addresses are typed as `u16`, so every representable address is valid
//!   and no bounds check (or bus error) exists anywhere in the model
//! - Address arithmetic wraps at the 64KB boundary
//! - Plain reads and writes carry no cycle cost of their own; cycle charges
//!   live in the CPU's fetch/read primitives, with the single exception of
//!   [`AddressSpace::write_word`], which performs both of its accesses itself
//!   and charges one cycle per byte written

use crate::CycleBudget;

/// Size of the addressable memory in bytes (full 16-bit address space).
pub const MEMORY_SIZE: usize = 64 * 1024;

/// Flat 64KB byte-addressable memory.
///
/// All addresses (0x0000-0xFFFF) map to a single contiguous RAM array,
/// zero-filled on allocation and again on every CPU reset. The address space
/// has no knowledge of instructions; it is populated by the driver and
/// mutated through the CPU's documented instruction effects.
///
/// # Examples
///
/// ```
/// use emu6502::AddressSpace;
///
/// let mut memory = AddressSpace::new();
/// memory.write_byte(0x1234, 0x42);
/// assert_eq!(memory.read_byte(0x1234), 0x42);
/// ```
pub struct AddressSpace {
    /// 64KB contiguous memory array
    data: Box<[u8; MEMORY_SIZE]>,
}

impl AddressSpace {
    /// Creates a new address space with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; MEMORY_SIZE]),
        }
    }

    /// Reads the byte stored at `address`.
    ///
    /// Carries no cycle cost; the caller charges the budget.
    pub fn read_byte(&self, address: u16) -> u8 {
        self.data[address as usize]
    }

    /// Stores a byte at `address`.
    pub fn write_byte(&mut self, address: u16, value: u8) {
        self.data[address as usize] = value;
    }

    /// Writes a 16-bit word in little-endian order: low byte at `address`,
    /// high byte at `address + 1` (wrapping at the top of memory).
    ///
    /// Charges exactly 2 cycles, one per byte written.
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::{AddressSpace, CycleBudget};
    ///
    /// let mut memory = AddressSpace::new();
    /// let mut cycles = CycleBudget::new(2);
    ///
    /// memory.write_word(0x0100, 0xFFFE, &mut cycles);
    ///
    /// assert_eq!(memory.read_byte(0x0100), 0xFE); // Low byte
    /// assert_eq!(memory.read_byte(0x0101), 0xFF); // High byte
    /// assert!(cycles.is_exhausted());
    /// ```
    pub fn write_word(&mut self, address: u16, value: u16, cycles: &mut CycleBudget) {
        self.write_byte(address, (value & 0xFF) as u8);
        cycles.charge(1);
        self.write_byte(address.wrapping_add(1), (value >> 8) as u8);
        cycles.charge(1);
    }

    /// Sets every byte to zero. Invoked as part of CPU reset.
    pub fn reset(&mut self) {
        self.data.fill(0);
    }
}

impl Default for AddressSpace {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_write_roundtrip() {
        let mut memory = AddressSpace::new();

        // Initially all zeros
        assert_eq!(memory.read_byte(0x0000), 0x00);
        assert_eq!(memory.read_byte(0xFFFF), 0x00);

        memory.write_byte(0x1234, 0x42);
        assert_eq!(memory.read_byte(0x1234), 0x42);

        // Neighbouring addresses unchanged
        assert_eq!(memory.read_byte(0x1233), 0x00);
        assert_eq!(memory.read_byte(0x1235), 0x00);
    }

    #[test]
    fn test_full_range_boundaries() {
        let mut memory = AddressSpace::new();

        memory.write_byte(0x0000, 0x01);
        memory.write_byte(0x7FFF, 0x7F);
        memory.write_byte(0x8000, 0x80);
        memory.write_byte(0xFFFF, 0xFF);

        assert_eq!(memory.read_byte(0x0000), 0x01);
        assert_eq!(memory.read_byte(0x7FFF), 0x7F);
        assert_eq!(memory.read_byte(0x8000), 0x80);
        assert_eq!(memory.read_byte(0xFFFF), 0xFF);
    }

    #[test]
    fn test_write_word_little_endian_charges_two_cycles() {
        let mut memory = AddressSpace::new();
        let mut cycles = CycleBudget::new(5);

        memory.write_word(0x0200, 0xABCD, &mut cycles);

        assert_eq!(memory.read_byte(0x0200), 0xCD);
        assert_eq!(memory.read_byte(0x0201), 0xAB);
        assert_eq!(cycles.remaining(), 3);
    }

    #[test]
    fn test_write_word_wraps_at_top_of_memory() {
        let mut memory = AddressSpace::new();
        let mut cycles = CycleBudget::new(2);

        // High byte lands at 0x0000
        memory.write_word(0xFFFF, 0x1234, &mut cycles);

        assert_eq!(memory.read_byte(0xFFFF), 0x34);
        assert_eq!(memory.read_byte(0x0000), 0x12);
    }

    #[test]
    fn test_reset_zero_fills() {
        let mut memory = AddressSpace::new();

        memory.write_byte(0x0000, 0xAA);
        memory.write_byte(0x8000, 0xBB);
        memory.write_byte(0xFFFF, 0xCC);

        memory.reset();

        assert_eq!(memory.read_byte(0x0000), 0x00);
        assert_eq!(memory.read_byte(0x8000), 0x00);
        assert_eq!(memory.read_byte(0xFFFF), 0x00);
    }
}
