//! # Instruction Implementations
//!
//! This module contains the implementations of the instruction subset,
//! organized by category. Each instruction is a standalone function that
//! takes the CPU, the address space, and the cycle budget it charges
//! against.
//!
//! ## Categories
//!
//! - **load_store**: Load instructions (LDA in its three addressing modes)
//! - **control**: Control flow instructions (JSR)
//!
//! Handlers charge cycles exclusively through the CPU's fetch/read
//! primitives and explicit `charge` calls for internal operations, and they
//! update only the flags their instruction documents.

pub(crate) mod control;
pub(crate) mod load_store;
