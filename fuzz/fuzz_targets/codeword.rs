//! Fuzz target for codeword helpers.
//!
//! An appended checksum always verifies and yields the catalogue residue; a
//! single flipped bit never verifies.

#![no_main]

use arbitrary::Arbitrary;
use crc_engine::catalog;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  profile: u8,
  data: Vec<u8>,
  flip: u16,
}

fuzz_target!(|input: Input| {
  let profile = &catalog::PROFILES[usize::from(input.profile) % catalog::PROFILES.len()];
  let engine = profile.engine;

  let mut codeword = input.data.clone();
  let Some(crc) = engine.append_checksum(&mut codeword) else {
    assert!(profile.params().width % 8 != 0);
    return;
  };
  assert_eq!(crc, engine.compute(&input.data));
  assert!(engine.verify(&codeword), "{} rejects its own codeword", profile.name);
  assert_eq!(Some(engine.residue(&codeword)), profile.residue, "{}", profile.name);

  let bit = usize::from(input.flip) % (codeword.len() * 8);
  codeword[bit / 8] ^= 1 << (bit % 8);
  assert!(!engine.verify(&codeword), "{} accepts a flipped bit", profile.name);
});
