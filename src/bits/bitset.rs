//! Bitset operations over caller-owned byte slots, plus an owned `Bitset`
//! with bounds-checked access.
//!
//! The free functions work on any `[u8]` the caller sized with [`size_for`].
//! They only require the bit to fall inside an allocated slot: indexing past
//! the slice panics, and bits between the logical size and the slot boundary
//! are padding that nothing should rely on.
//!
//! ```text
//! let mut slots = [0u8; size_for(20)]; // 3 slots, 24 physical bits
//! set(&mut slots, 19);
//! assert!(test(&slots, 19));
//! ```

use std::fmt;

use crate::error::NumericError;

/// Bits per storage slot.
pub const SLOT_BITS: usize = u8::BITS as usize;

/// Number of byte slots needed to hold `bits` bits (rounded up to a whole slot).
pub const fn size_for(bits: usize) -> usize {
    bits.div_ceil(SLOT_BITS)
}

#[inline]
fn slot(bit: usize) -> usize {
    bit / SLOT_BITS
}

#[inline]
fn mask(bit: usize) -> u8 {
    1 << (bit % SLOT_BITS)
}

/// Set `bit` to 0.
///
/// # Panics
/// Panics if `bit / 8` is not a valid slot index of `slots`.
pub fn clear(slots: &mut [u8], bit: usize) {
    slots[slot(bit)] &= !mask(bit);
}

/// Set `bit` to 1.
///
/// # Panics
/// Panics if `bit / 8` is not a valid slot index of `slots`.
pub fn set(slots: &mut [u8], bit: usize) {
    slots[slot(bit)] |= mask(bit);
}

/// Read the value of `bit`.
///
/// # Panics
/// Panics if `bit / 8` is not a valid slot index of `slots`.
pub fn test(slots: &[u8], bit: usize) -> bool {
    slots[slot(bit)] & mask(bit) != 0
}

/// Set or clear `bit` depending on `value`.
pub fn write(slots: &mut [u8], bit: usize, value: bool) {
    if value {
        set(slots, bit);
    } else {
        clear(slots, bit);
    }
}

/// Render the first `len` bits as `'0'`/`'1'` characters in ascending index order.
pub fn format_bits(slots: &[u8], len: usize) -> String {
    (0..len).map(|bit| if test(slots, bit) { '1' } else { '0' }).collect()
}

/// Print the first `len` bits to stdout (no trailing newline).
pub fn print_bits(slots: &[u8], len: usize) {
    print!("{}", format_bits(slots, len));
}

/// A fixed-size bitset that owns its slots and rejects out-of-range indices.
///
/// The size is chosen at construction and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitset {
    slots: Vec<u8>,
    len: usize,
}

impl Bitset {
    /// Create a bitset of `len` bits, all cleared.
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![0; size_for(len)],
            len,
        }
    }

    /// Logical number of bits.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Underlying storage, including padding bits in the last slot.
    pub fn as_slots(&self) -> &[u8] {
        &self.slots
    }

    pub fn set(&mut self, bit: usize) -> Result<(), NumericError> {
        self.check(bit)?;
        set(&mut self.slots, bit);
        Ok(())
    }

    pub fn clear(&mut self, bit: usize) -> Result<(), NumericError> {
        self.check(bit)?;
        clear(&mut self.slots, bit);
        Ok(())
    }

    pub fn test(&self, bit: usize) -> Result<bool, NumericError> {
        self.check(bit)?;
        Ok(test(&self.slots, bit))
    }

    pub fn write(&mut self, bit: usize, value: bool) -> Result<(), NumericError> {
        self.check(bit)?;
        write(&mut self.slots, bit, value);
        Ok(())
    }

    /// Number of set bits within the logical size.
    pub fn count_ones(&self) -> usize {
        (0..self.len).filter(|&bit| test(&self.slots, bit)).count()
    }

    fn check(&self, bit: usize) -> Result<(), NumericError> {
        if bit < self.len {
            Ok(())
        } else {
            Err(NumericError::IndexOutOfRange { bit, len: self.len })
        }
    }
}

impl fmt::Display for Bitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_bits(&self.slots, self.len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_for_rounds_up_to_whole_slots() {
        assert_eq!(size_for(0), 0);
        assert_eq!(size_for(1), 1);
        assert_eq!(size_for(8), 1);
        assert_eq!(size_for(9), 2);
        assert_eq!(size_for(20), 3);
    }

    #[test]
    fn set_only_touches_the_requested_bit() {
        for i in 0..20 {
            let mut slots = [0u8; size_for(20)];
            set(&mut slots, i);
            for j in 0..20 {
                assert_eq!(test(&slots, j), i == j, "set({i}) leaked into bit {j}");
            }
        }
    }

    #[test]
    fn bit_maps_to_slot_and_mask() {
        let mut slots = [0u8; 3];
        set(&mut slots, 0);
        set(&mut slots, 9);
        set(&mut slots, 23);
        assert_eq!(slots, [0b0000_0001, 0b0000_0010, 0b1000_0000]);

        clear(&mut slots, 9);
        assert_eq!(slots, [0b0000_0001, 0, 0b1000_0000]);
    }

    #[test]
    fn write_then_test_returns_written_value() {
        let mut slots = [0xffu8; 2];
        for (bit, value) in [(0, false), (3, true), (7, false), (12, false), (15, true)] {
            write(&mut slots, bit, value);
            assert_eq!(test(&slots, bit), value);
        }
    }

    #[test]
    fn format_covers_logical_size_only() {
        let mut slots = [0xffu8; size_for(10)];
        clear(&mut slots, 1);
        assert_eq!(format_bits(&slots, 10), "1011111111");
        assert_eq!(format_bits(&slots, 0), "");
    }

    #[test]
    #[should_panic]
    fn raw_access_past_storage_panics() {
        let slots = [0u8; 1];
        test(&slots, 8);
    }

    #[test]
    fn checked_bitset_rejects_out_of_range() {
        let mut bits = Bitset::new(20);
        assert_eq!(bits.as_slots().len(), 3);
        assert!(bits.set(19).is_ok());
        // Bit 20 is padding inside slot 2 but outside the logical size.
        assert_eq!(
            bits.set(20),
            Err(NumericError::IndexOutOfRange { bit: 20, len: 20 })
        );
        assert!(bits.test(100).is_err());
        assert!(bits.write(20, false).is_err());
        assert!(bits.clear(20).is_err());
    }

    #[test]
    fn checked_bitset_display_and_count() {
        let mut bits = Bitset::new(6);
        bits.set(1).unwrap();
        bits.write(4, true).unwrap();
        assert_eq!(bits.to_string(), "010010");
        assert_eq!(bits.count_ones(), 2);
        assert!(!bits.is_empty());
        assert!(Bitset::new(0).is_empty());
    }
}
