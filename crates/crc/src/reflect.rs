//! Bit reflection.
//!
//! "Reflected" means bit-reversed about the centre of an `n`-bit field. CRC
//! standards that transmit least-significant bit first (Ethernet, zip, PNG)
//! are modelled by reflecting each input byte and the final remainder, so the
//! division itself can always run most-significant bit first.
//!
//! [`reflect`] uses the target's bit-reverse; [`reflect_bits`] is the portable
//! loop that defines its meaning.

/// Reflect the low `n_bits` bits of `value`.
///
/// Bits at or above `n_bits` are ignored and never set in the result.
/// `n_bits == 0` yields 0 and `n_bits >= 64` reverses the whole word.
///
/// # Example
///
/// ```
/// use crc_engine::reflect;
///
/// assert_eq!(reflect(0b0001_1010, 5), 0b0000_1011);
/// assert_eq!(reflect(0x04C1_1DB7, 32), 0xEDB8_8320);
/// ```
#[inline]
#[must_use]
pub const fn reflect(value: u64, n_bits: u8) -> u64 {
  if n_bits == 0 {
    return 0;
  }
  if n_bits >= 64 {
    return value.reverse_bits();
  }
  // Reversing the whole word puts bit 0 at bit 63; shift the field back down.
  (value & low_mask(n_bits)).reverse_bits() >> (64 - n_bits as u32)
}

/// Reflect the low `n_bits` bits of `value`, one bit at a time.
///
/// Same contract as [`reflect`].
#[must_use]
pub const fn reflect_bits(value: u64, n_bits: u8) -> u64 {
  let n_bits = if n_bits > 64 { 64 } else { n_bits };
  let mut result = 0u64;
  let mut data = value;
  let mut bit = 0u8;
  while bit < n_bits {
    if data & 1 != 0 {
      result |= 1 << (n_bits - 1 - bit);
    }
    data >>= 1;
    bit += 1;
  }
  result
}

/// Reflect a data byte.
#[inline]
#[must_use]
pub const fn reflect_u8(byte: u8) -> u8 {
  byte.reverse_bits()
}

/// Mask covering the low `n_bits` bits (all ones for 64).
#[inline]
#[must_use]
pub(crate) const fn low_mask(n_bits: u8) -> u64 {
  if n_bits >= 64 { u64::MAX } else { (1u64 << n_bits) - 1 }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn known_polynomials() {
    // CRC-32 (ISO-HDLC) and CRC-32C normal/reflected pairs.
    assert_eq!(reflect(0x04C1_1DB7, 32), 0xEDB8_8320);
    assert_eq!(reflect(0x1EDC_6F41, 32), 0x82F6_3B78);
    assert_eq!(reflect(0x42F0_E1EB_A9EA_3693, 64), 0xC96C_5795_D787_0F42);
  }

  #[test]
  fn small_fields() {
    assert_eq!(reflect(0b1010, 4), 0b0101);
    assert_eq!(reflect(0b1100, 4), 0b0011);
    assert_eq!(reflect(0xFF, 8), 0xFF);
    assert_eq!(reflect(0x80, 8), 0x01);
    assert_eq!(reflect(1, 1), 1);
  }

  #[test]
  fn ignores_bits_above_the_field() {
    assert_eq!(reflect(0xF0 | 0b001, 3), 0b100);
    assert_eq!(reflect_bits(0xF0 | 0b001, 3), 0b100);
  }

  #[test]
  fn zero_width_is_zero() {
    assert_eq!(reflect(u64::MAX, 0), 0);
    assert_eq!(reflect_bits(u64::MAX, 0), 0);
  }

  #[test]
  fn byte_reflection_matches_generic() {
    for byte in 0u8..=255 {
      assert_eq!(u64::from(reflect_u8(byte)), reflect(u64::from(byte), 8));
    }
  }

  #[test]
  fn low_mask_edges() {
    assert_eq!(low_mask(1), 1);
    assert_eq!(low_mask(8), 0xFF);
    assert_eq!(low_mask(63), u64::MAX >> 1);
    assert_eq!(low_mask(64), u64::MAX);
  }

  #[test]
  fn const_evaluable() {
    const R: u64 = reflect(0x8005, 16);
    const B: u64 = reflect_bits(0x8005, 16);
    assert_eq!(R, 0xA001);
    assert_eq!(R, B);
  }
}
