//! # Cycle Budget
//!
//! This module provides the `CycleBudget` type that meters execution.
//!
//! Every memory access in this design costs one clock cycle, and the budget
//! is the unit of work `CPU::execute` is allowed to spend. The budget is an
//! owned counter threaded explicitly through the fetch/read primitives so
//! that all cycle accounting stays visible at the call sites.

/// Remaining-cycle counter for an execution run.
///
/// The counter is deliberately *not* clamped at zero: an instruction that has
/// already started executing runs to completion even if that drives the
/// remaining count negative. The execute loop checks for exhaustion only
/// between instructions, so the final instruction may overshoot its nominal
/// cost.
///
/// # Examples
///
/// ```
/// use emu6502::CycleBudget;
///
/// let mut cycles = CycleBudget::new(3);
/// cycles.charge(1);
/// cycles.charge(1);
/// assert!(!cycles.is_exhausted());
///
/// // An in-flight instruction may charge past zero
/// cycles.charge(2);
/// assert!(cycles.is_exhausted());
/// assert_eq!(cycles.remaining(), -1);
/// assert_eq!(cycles.consumed(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleBudget {
    /// Cycles granted when the budget was created
    initial: u32,

    /// Cycles left to spend (goes negative on overshoot)
    remaining: i64,
}

impl CycleBudget {
    /// Creates a budget of `budget` cycles.
    pub fn new(budget: u32) -> Self {
        Self {
            initial: budget,
            remaining: budget as i64,
        }
    }

    /// Spends `amount` cycles. Never saturates; the remaining count may go
    /// negative.
    pub fn charge(&mut self, amount: u32) {
        self.remaining -= amount as i64;
    }

    /// Returns true once the budget is spent (remaining <= 0).
    pub fn is_exhausted(&self) -> bool {
        self.remaining <= 0
    }

    /// Cycles left to spend. Negative after an overshoot.
    pub fn remaining(&self) -> i64 {
        self.remaining
    }

    /// Cycles actually spent so far. May exceed the initial budget when the
    /// last instruction overshot.
    pub fn consumed(&self) -> u64 {
        (self.initial as i64 - self.remaining) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_budget_not_exhausted() {
        let cycles = CycleBudget::new(2);
        assert!(!cycles.is_exhausted());
        assert_eq!(cycles.remaining(), 2);
        assert_eq!(cycles.consumed(), 0);
    }

    #[test]
    fn test_zero_budget_starts_exhausted() {
        let cycles = CycleBudget::new(0);
        assert!(cycles.is_exhausted());
        assert_eq!(cycles.consumed(), 0);
    }

    #[test]
    fn test_charge_to_exactly_zero() {
        let mut cycles = CycleBudget::new(2);
        cycles.charge(2);
        assert!(cycles.is_exhausted());
        assert_eq!(cycles.remaining(), 0);
        assert_eq!(cycles.consumed(), 2);
    }

    #[test]
    fn test_overshoot_goes_negative() {
        let mut cycles = CycleBudget::new(1);
        cycles.charge(2);
        assert_eq!(cycles.remaining(), -1);
        assert_eq!(cycles.consumed(), 2);
    }
}
