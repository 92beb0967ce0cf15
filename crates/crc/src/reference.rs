//! Bitwise reference implementation.
//!
//! This is the canonical "source of truth" for every parameter set: one
//! modulo-2 division step per message bit, no lookup table. It is:
//!
//! - **Obviously correct**: mirrors the definition of a CRC directly
//! - **Const-evaluable**: the catalogue check values are asserted at compile time
//! - **Slow**: eight rounds per byte; use [`CrcEngine::compute`] for throughput
//!
//! The table-driven path must produce identical results for every message
//! and every parameter set.
//!
//! [`CrcEngine::compute`]: crate::CrcEngine::compute

// SAFETY: `data[i]` is bounded by the `i < data.len()` loop condition.
#![allow(clippy::indexing_slicing)]

use crate::{
  CrcParams,
  register::{Register, condition, divide_byte},
};

/// Compute the CRC of `message` one bit at a time.
///
/// Each (optionally reflected) byte is XORed into the top byte of the
/// remainder, followed by eight rounds of shift-and-conditionally-XOR.
///
/// # Example
///
/// ```
/// use crc_engine::{CrcParams, compute_slow};
///
/// assert_eq!(compute_slow(b"123456789", &CrcParams::CRC32_ISO), 0xCBF4_3926);
/// assert_eq!(compute_slow(b"", &CrcParams::CRC32_ISO), 0);
/// ```
#[must_use]
pub const fn compute_slow(message: &[u8], params: &CrcParams) -> u64 {
  let reg = Register::new(params);
  let remainder = update_slow(&reg, params, reg.seed(params), message);
  reg.finish(params, remainder)
}

/// Fold `data` into a raw (aligned, unfinished) register value.
#[must_use]
pub(crate) const fn update_slow(reg: &Register, params: &CrcParams, mut remainder: u64, data: &[u8]) -> u64 {
  let shift = reg.top_byte_shift();
  let mut i = 0usize;
  while i < data.len() {
    let byte = condition(params, data[i]);
    remainder ^= (byte as u64) << shift;
    remainder = divide_byte(reg, remainder);
    i += 1;
  }
  remainder
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

/// Standard test input for CRC check values.
const CHECK_INPUT: &[u8] = b"123456789";

const _: () = assert!(compute_slow(CHECK_INPUT, &CrcParams::CRC32_ISO) == 0xCBF4_3926);
const _: () = assert!(compute_slow(CHECK_INPUT, &CrcParams::CRC16_ARC) == 0xBB3D);
const _: () = assert!(compute_slow(CHECK_INPUT, &CrcParams::CRC3_GSM) == 0x4);
