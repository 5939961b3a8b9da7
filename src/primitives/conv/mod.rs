//! Conversion helpers for `U256` to and from integer widths.
//!
//! Split by source width to keep `no_std` builds small.

use super::U256;

pub mod u128;
pub mod u16;
pub mod u32;
pub mod u64;
pub mod u8;
