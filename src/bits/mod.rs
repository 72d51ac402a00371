//! Packed boolean storage.
//!
//! Bits are packed eight to a byte-sized slot: bit `i` lives in slot `i / 8`
//! under mask `1 << (i % 8)`.

pub mod bitset;

pub use bitset::*;
