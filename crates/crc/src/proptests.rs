//! Property tests over arbitrary parameter sets.
//!
//! Two invariants carry the whole crate:
//!
//! 1. **Equivalence**: the table-driven path equals the bitwise reference
//!    for every valid parameter set and every message.
//! 2. **Table invariant**: `table[i]` is the remainder of `i << (width - 8)`,
//!    independent of the reflection flags.
//!
//! Everything else (streaming, resume, codewords) is checked against the
//! one-shot engine, which in turn is checked against the reference.

#![cfg(all(test, not(miri)))]

extern crate std;

use proptest::prelude::*;
use std::vec::Vec;

use crate::{CrcEngine, CrcParams, build_table, compute_fast, compute_slow, reflect, reflect_bits};

prop_compose! {
  /// Any valid parameter set, widths 1 to 64.
  fn arb_params()(width in 1u8..=64)(
    width in Just(width),
    polynomial in any::<u64>(),
    initial in any::<u64>(),
    xor_out in any::<u64>(),
    reflect_in in any::<bool>(),
    reflect_out in any::<bool>(),
  ) -> CrcParams {
    let mask = if width == 64 { u64::MAX } else { (1u64 << width) - 1 };
    CrcParams {
      width,
      polynomial: polynomial & mask,
      initial: initial & mask,
      reflect_in,
      reflect_out,
      xor_out: xor_out & mask,
    }
  }
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(512))]

  #[test]
  fn fast_equals_slow(
    params in arb_params(),
    data in proptest::collection::vec(any::<u8>(), 0..=512),
  ) {
    let table = build_table(&params);
    prop_assert_eq!(
      compute_fast(&data, &table, &params),
      compute_slow(&data, &params),
      "params {:?}, len {}", params, data.len()
    );
  }

  #[test]
  fn output_fits_width(
    params in arb_params(),
    data in proptest::collection::vec(any::<u8>(), 0..=64),
  ) {
    let engine = CrcEngine::new(params).unwrap();
    prop_assert_eq!(engine.compute(&data) & !params.mask(), 0);
  }

  #[test]
  fn table_is_plain_division(params in arb_params()) {
    let table = build_table(&params);
    prop_assert_eq!(table.len(), 256);

    // The table must not depend on reflection.
    let flipped = CrcParams {
      reflect_in: !params.reflect_in,
      reflect_out: !params.reflect_out,
      ..params
    };
    prop_assert_eq!(&table, &build_table(&flipped));

    // Entry i is the CRC of the single byte i with zero init, no reflection,
    // no final XOR, shifted back into register alignment.
    let plain = CrcParams {
      initial: 0,
      xor_out: 0,
      reflect_in: false,
      reflect_out: false,
      ..params
    };
    let shift = plain.register_width() - plain.width;
    for i in 0u8..=255 {
      prop_assert_eq!(table.get(i), compute_slow(&[i], &plain) << shift);
    }
  }

  #[test]
  fn table_is_deterministic(params in arb_params()) {
    prop_assert_eq!(build_table(&params), build_table(&params));
  }

  #[test]
  fn streaming_matches_oneshot(
    params in arb_params(),
    data in proptest::collection::vec(any::<u8>(), 0..=256),
    chunk in 1usize..=17,
  ) {
    let engine = CrcEngine::new(params).unwrap();
    let mut digest = engine.digest();
    for part in data.chunks(chunk) {
      digest.update(part);
    }
    prop_assert_eq!(digest.finalize(), engine.compute(&data));
  }

  #[test]
  fn resume_matches_oneshot(
    params in arb_params(),
    data in proptest::collection::vec(any::<u8>(), 0..=256),
    split in any::<usize>(),
  ) {
    let engine = CrcEngine::new(params).unwrap();
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);
    let mut digest = engine.resume(engine.compute(a));
    digest.update(b);
    prop_assert_eq!(digest.finalize(), engine.compute(&data));
  }

  #[test]
  fn reflect_is_an_involution(value in any::<u64>(), n in 1u8..=64) {
    let mask = if n == 64 { u64::MAX } else { (1u64 << n) - 1 };
    let x = reflect(value, n);
    prop_assert_eq!(reflect(x, n), value & mask);
    prop_assert_eq!(x, reflect_bits(value, n));
  }

  #[test]
  fn codeword_residue_is_message_independent(
    width_bytes in 1u8..=8,
    polynomial in any::<u64>(),
    initial in any::<u64>(),
    xor_out in any::<u64>(),
    reflected in any::<bool>(),
    data in proptest::collection::vec(any::<u8>(), 0..=128),
  ) {
    let width = width_bytes * 8;
    let mask = if width == 64 { u64::MAX } else { (1u64 << width) - 1 };
    let params = CrcParams {
      width,
      polynomial: polynomial & mask,
      initial: initial & mask,
      reflect_in: reflected,
      reflect_out: reflected,
      xor_out: xor_out & mask,
    };
    let engine = CrcEngine::new(params).unwrap();
    let crc = engine.compute(&data);
    let mut codeword: Vec<u8> = data.clone();
    codeword.extend_from_slice(&engine.checksum_bytes(crc).unwrap());

    prop_assert!(engine.verify(&codeword));
    prop_assert_eq!(Some(engine.residue(&codeword)), engine.expected_residue());
  }
}
