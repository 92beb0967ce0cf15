//! Table-driven CRC computation, one byte per step.
//!
//! Each byte costs one lookup into the [`CrcTable`] instead of eight
//! division rounds:
//!
//! ```text
//! index     = byte ^ (remainder >> (width - 8))
//! remainder = table[index] ^ (remainder << 8)
//! ```
//!
//! Correctness rests entirely on the table invariant; the equivalence tests
//! check this path against [`compute_slow`](crate::compute_slow).

use crate::{
  CrcParams, CrcTable,
  register::{Register, condition},
};

/// Compute the CRC of `message` using a prebuilt table.
///
/// `table` must come from [`build_table`](crate::build_table) on the same
/// `params`; [`CrcEngine`](crate::CrcEngine) keeps that pairing for you.
///
/// # Example
///
/// ```
/// use crc_engine::{CrcParams, build_table, compute_fast};
///
/// let params = CrcParams::CRC32_ISO;
/// let table = build_table(&params);
/// assert_eq!(compute_fast(b"123456789", &table, &params), 0xCBF4_3926);
/// ```
#[must_use]
pub fn compute_fast(message: &[u8], table: &CrcTable, params: &CrcParams) -> u64 {
  let reg = Register::new(params);
  let remainder = update_fast(&reg, params, table, reg.seed(params), message);
  reg.finish(params, remainder)
}

/// Fold `data` into a raw (aligned, unfinished) register value.
#[inline]
#[must_use]
pub(crate) fn update_fast(reg: &Register, params: &CrcParams, table: &CrcTable, mut remainder: u64, data: &[u8]) -> u64 {
  let shift = reg.top_byte_shift();
  let mask = reg.mask;

  for &byte in data {
    remainder = step(table, shift, mask, remainder, condition(params, byte));
  }
  remainder
}

#[inline(always)]
fn step(table: &CrcTable, shift: u8, mask: u64, remainder: u64, byte: u8) -> u64 {
  // The remainder never exceeds the register, so its top byte fits in u8.
  let index = byte ^ (remainder >> shift) as u8;
  table.get(index) ^ ((remainder << 8) & mask)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{build_table, compute_slow};

  #[test]
  fn check_values() {
    let cases = [
      (CrcParams::CRC32_ISO, 0xCBF4_3926),
      (CrcParams::CRC32_BZIP2, 0xFC89_1918),
      (CrcParams::CRC16_XMODEM, 0x31C3),
      (CrcParams::CRC8_SMBUS, 0xF4),
      (CrcParams::CRC7_MMC, 0x75),
      (CrcParams::CRC64_ECMA, 0x6C40_DF5F_0B49_7347),
    ];
    for (params, check) in cases {
      let table = build_table(&params);
      assert_eq!(compute_fast(b"123456789", &table, &params), check, "{params:?}");
    }
  }

  #[test]
  fn matches_reference_at_every_length() {
    let params = CrcParams::CRC24_OPENPGP;
    let table = build_table(&params);
    let data: [u8; 67] = core::array::from_fn(|i| (i as u8).wrapping_mul(37).wrapping_add(11));
    for len in 0..=data.len() {
      let msg = &data[..len];
      assert_eq!(compute_fast(msg, &table, &params), compute_slow(msg, &params), "len {len}");
    }
  }

  #[test]
  fn eight_bit_register_shifts_out_completely() {
    // remainder << 8 must vanish in an 8-bit register rather than leak upward.
    let params = CrcParams::CRC5_USB;
    let table = build_table(&params);
    for byte in 0u8..=255 {
      let fast = compute_fast(&[byte, byte], &table, &params);
      assert_eq!(fast, compute_slow(&[byte, byte], &params));
      assert!(fast < 32);
    }
  }
}
