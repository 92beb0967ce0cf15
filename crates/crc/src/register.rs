//! Division register shared by the table builder and both computers.
//!
//! Keeping seeding, input conditioning and finalization here means the slow
//! and fast paths cannot disagree about edge cases; they differ only in how
//! one byte is folded into the remainder.

use crate::{CrcParams, MAX_WIDTH, reflect, reflect::low_mask, reflect_u8};

/// Register layout derived from a parameter set.
///
/// Widths below 8 are left-aligned in an 8-bit register. Out-of-range widths
/// are clamped so unvalidated parameters still produce a value instead of
/// overflowing a shift.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Register {
  /// CRC width after clamping to `1..=64`.
  pub(crate) width: u8,
  /// Register width in bits, `max(width, 8)`.
  pub(crate) bits: u8,
  /// Left shift aligning a `width`-bit value in the register.
  pub(crate) shift: u8,
  /// Mask for the register.
  pub(crate) mask: u64,
  /// Aligned polynomial.
  pub(crate) poly: u64,
}

impl Register {
  pub(crate) const fn new(params: &CrcParams) -> Self {
    let width = if params.width == 0 {
      1
    } else if params.width > MAX_WIDTH {
      MAX_WIDTH
    } else {
      params.width
    };
    let bits = if width < 8 { 8 } else { width };
    let shift = bits - width;
    let mask = low_mask(bits);
    Self {
      width,
      bits,
      shift,
      mask,
      poly: (params.polynomial << shift) & mask,
    }
  }

  /// Seed value: the aligned initial remainder.
  #[inline]
  pub(crate) const fn seed(&self, params: &CrcParams) -> u64 {
    (params.initial << self.shift) & self.mask
  }

  /// Align an externally visible `width`-bit remainder into the register.
  #[inline]
  pub(crate) const fn align(&self, value: u64) -> u64 {
    (value << self.shift) & self.mask
  }

  /// Distance from bit 0 to the register's top byte.
  #[inline]
  pub(crate) const fn top_byte_shift(&self) -> u8 {
    self.bits - 8
  }

  /// Undo alignment and apply output reflection, but not the final XOR.
  #[inline]
  pub(crate) const fn unxored(&self, params: &CrcParams, remainder: u64) -> u64 {
    let value = (remainder & self.mask) >> self.shift;
    if params.reflect_out { reflect(value, self.width) } else { value }
  }

  /// Produce the checksum from a final register value.
  #[inline]
  pub(crate) const fn finish(&self, params: &CrcParams, remainder: u64) -> u64 {
    (self.unxored(params, remainder) ^ params.xor_out) & low_mask(self.width)
  }
}

/// Input byte as the MSB-first division sees it.
#[inline]
pub(crate) const fn condition(params: &CrcParams, byte: u8) -> u8 {
  if params.reflect_in { reflect_u8(byte) } else { byte }
}

/// Eight rounds of MSB-first modulo-2 division.
#[inline]
pub(crate) const fn divide_byte(reg: &Register, mut remainder: u64) -> u64 {
  let top = 1u64 << (reg.bits - 1);
  let mut bit = 0;
  while bit < 8 {
    remainder = if remainder & top != 0 {
      ((remainder << 1) ^ reg.poly) & reg.mask
    } else {
      (remainder << 1) & reg.mask
    };
    bit += 1;
  }
  remainder
}
