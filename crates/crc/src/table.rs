//! Partial-remainder lookup table.
//!
//! `table[i]` is the remainder of `i << (width - 8)` divided by the
//! polynomial, computed MSB-first. Reflection never enters the table; the
//! computers reflect input bytes and the final remainder instead, so one
//! table serves both orientations of a polynomial.
//!
//! Widths below 8 are left-aligned in an 8-bit register (see
//! [`CrcParams::register_width`]), so their entries keep the low
//! `8 - width` bits clear.

// SAFETY: Indexing uses `u8` indices into a 256-entry array, and the const
// builder's loop index is bounded by 256.
#![allow(clippy::indexing_slicing)]

use core::ops::Index;

use crate::{
  CrcParams,
  register::{Register, divide_byte},
};

/// Entries in every table.
pub const TABLE_LEN: usize = 256;

/// Precomputed remainders for every possible dividend byte.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CrcTable([u64; TABLE_LEN]);

impl CrcTable {
  /// Entry for dividend `index`.
  #[inline]
  #[must_use]
  pub const fn get(&self, index: u8) -> u64 {
    self.0[index as usize]
  }

  /// Always [`TABLE_LEN`].
  #[inline]
  #[must_use]
  #[allow(clippy::len_without_is_empty)]
  pub const fn len(&self) -> usize {
    TABLE_LEN
  }

  /// The raw entries, in dividend order.
  #[inline]
  #[must_use]
  pub const fn as_array(&self) -> &[u64; TABLE_LEN] {
    &self.0
  }

  /// Iterate over the entries in dividend order.
  #[inline]
  pub fn iter(&self) -> core::slice::Iter<'_, u64> {
    self.0.iter()
  }
}

impl Index<u8> for CrcTable {
  type Output = u64;

  #[inline]
  fn index(&self, index: u8) -> &u64 {
    &self.0[usize::from(index)]
  }
}

impl<'a> IntoIterator for &'a CrcTable {
  type Item = &'a u64;
  type IntoIter = core::slice::Iter<'a, u64>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl core::fmt::Debug for CrcTable {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    // Entry 1 is the (aligned) polynomial; printing all 256 is just noise.
    f.debug_struct("CrcTable")
      .field("poly", &format_args!("{:#x}", self.0[1]))
      .field("last", &format_args!("{:#x}", self.0[TABLE_LEN - 1]))
      .finish_non_exhaustive()
  }
}

/// Build the lookup table for `params`.
///
/// Deterministic and `const`, so fixed profiles embed their tables in the
/// binary. `params` must already be valid; an invalid width is clamped
/// rather than rejected here.
///
/// ```
/// use crc_engine::{CrcParams, build_table};
///
/// let table = build_table(&CrcParams::CRC32_ISO);
/// assert_eq!(table.get(1), 0x04C1_1DB7);
/// assert_eq!(table.get(0x80), 0x690C_E0EE);
/// ```
#[must_use]
pub const fn build_table(params: &CrcParams) -> CrcTable {
  let reg = Register::new(params);
  let mut table = [0u64; TABLE_LEN];
  let mut dividend = 0usize;
  while dividend < TABLE_LEN {
    table[dividend] = divide_byte(&reg, (dividend as u64) << reg.top_byte_shift());
    dividend += 1;
  }
  CrcTable(table)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn crc32_entries_match_published_table() {
    // Non-reflected CRC-32 table (as in Barr's crcTable.dat / bzip2).
    let table = build_table(&CrcParams::CRC32_ISO);
    assert_eq!(table.get(0), 0x0000_0000);
    assert_eq!(table.get(1), 0x04C1_1DB7);
    assert_eq!(table.get(2), 0x0982_3B6E);
    assert_eq!(table.get(255), 0xB1F7_40B4);
  }

  #[test]
  fn table_ignores_reflection_flags() {
    let normal = build_table(&CrcParams::CRC32_BZIP2);
    let reflected = build_table(&CrcParams::CRC32_ISO);
    assert_eq!(normal, reflected);
  }

  #[test]
  fn crc16_entries() {
    let table = build_table(&CrcParams::CRC16_XMODEM);
    assert_eq!(table[1], 0x1021);
    assert_eq!(table[255], 0x1EF0);
  }

  #[test]
  fn narrow_widths_are_left_aligned() {
    let table = build_table(&CrcParams::CRC3_GSM);
    for &entry in &table {
      assert!(entry <= 0xFF);
      assert_eq!(entry & 0b1_1111, 0, "low bits set in {entry:#x}");
    }
    // x^3 + x + 1 aligned to the top of a byte.
    assert_eq!(table.get(1), 0x3 << 5);
  }

  #[test]
  fn width_64_does_not_overflow() {
    let table = build_table(&CrcParams::CRC64_XZ);
    assert_eq!(table.get(1), 0x42F0_E1EB_A9EA_3693);
    assert_eq!(table.len(), TABLE_LEN);
  }

  #[test]
  fn const_table() {
    const TABLE: CrcTable = build_table(&CrcParams::CRC8_SMBUS);
    assert_eq!(TABLE.get(1), 0x07);
    assert_eq!(TABLE.as_array().len(), 256);
  }

  #[test]
  fn debug_is_compact() {
    extern crate alloc;
    let s = alloc::format!("{:?}", build_table(&CrcParams::CRC8_SMBUS));
    assert!(s.starts_with("CrcTable"));
    assert!(s.len() < 80);
  }
}
