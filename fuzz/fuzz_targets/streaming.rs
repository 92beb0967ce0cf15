//! Fuzz target for the streaming API.
//!
//! Arbitrary update splits and resume points must match the one-shot result.

#![no_main]

use arbitrary::Arbitrary;
use crc_engine::{Checksum, Crc16CcittFalse, Crc32C, Crc64Xz, catalog};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  profile: u8,
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let profile = &catalog::PROFILES[usize::from(input.profile) % catalog::PROFILES.len()];
  let engine = profile.engine;
  let data = &input.data;
  let expected = engine.compute(data);

  let mut digest = engine.digest();
  let mut rest = data.as_slice();
  let mut sizes = input.chunk_sizes.iter().cycle();
  while !rest.is_empty() {
    let n = sizes.next().map_or(1, |&s| usize::from(s).max(1)).min(rest.len());
    let (head, tail) = rest.split_at(n);

    // Round-trip the running value through `resume` at every boundary.
    let mut resumed = engine.resume(digest.finalize());
    resumed.update(head);
    digest.update(head);
    assert_eq!(resumed.finalize(), digest.finalize(), "{} resume mismatch", profile.name);
    rest = tail;
  }
  assert_eq!(digest.finalize(), expected, "{} streaming mismatch", profile.name);
  assert_eq!(digest.len(), data.len() as u64);

  assert_eq!(u64::from(Crc16CcittFalse::checksum(data)), catalog::CRC16_CCITT_FALSE.compute(data));
  assert_eq!(u64::from(Crc32C::checksum(data)), catalog::CRC32C.compute(data));
  assert_eq!(Crc64Xz::checksum(data), catalog::CRC64_XZ.compute(data));
});
