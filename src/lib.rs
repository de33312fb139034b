//! Base-2 logarithm of a power of two, by perfect hashing.
//!
//! Every `1 << k` for `k` in `0..32` leaves a different remainder modulo
//! 37, so one `%` and a 37-entry table recover `k` without shifting loops
//! or bit-scan intrinsics.  The table is built and checked at compile time.
//!
//! The input is assumed to have exactly one bit set.  That isn't checked:
//! anything else still returns a value in `0..LOG2_MAGIC`, just not a
//! meaningful one.  It runs on top of `libcore`, so it can be used on bare
//! metal or in kernel space.

#![cfg_attr(not(test), no_std)]

pub use math::{compute, exponent_of_residue, residue, PowerOfTwoLog, LOG2_MAGIC};

/// Alias for [`compute`].
pub use math::compute as bit_log2;

mod math;
