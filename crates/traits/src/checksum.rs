//! Streaming checksum trait.
//!
//! Implemented by every fixed-profile CRC hasher in `crc-engine`. Runtime
//! parameter sets go through `crc_engine::Digest` instead, since they carry a
//! borrowed engine and cannot provide a parameterless `new()`.

use core::fmt::Debug;

/// Non-cryptographic checksum algorithm with incremental updates.
///
/// # Usage
///
/// ```rust,ignore
/// use crc_engine::{Checksum, Crc32};
///
/// // One-shot
/// let crc = Crc32::checksum(b"hello world");
///
/// // Streaming
/// let mut hasher = Crc32::new();
/// hasher.update(b"hello ");
/// hasher.update(b"world");
/// assert_eq!(hasher.finalize(), crc);
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must be idempotent
/// - `reset()` must restore the hasher to the state `new()` returns
pub trait Checksum: Clone + Default {
  /// Output size in bytes (rounded up for widths that are not a whole byte).
  const OUTPUT_SIZE: usize;

  /// The checksum output type (`u8`, `u16`, `u32` or `u64`).
  type Output: Copy + Eq + Debug + Default;

  /// Create a new hasher seeded with the algorithm's initial remainder.
  #[must_use]
  fn new() -> Self;

  /// Create a new hasher with a custom initial remainder.
  #[must_use]
  fn with_initial(initial: Self::Output) -> Self;

  /// Feed more bytes into the running checksum.
  fn update(&mut self, data: &[u8]);

  /// Feed several non-contiguous buffers, in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Return the checksum of everything fed so far.
  ///
  /// Does not consume the hasher.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  fn reset(&mut self);

  /// Compute the checksum of `data` in one shot.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the checksum of several buffers as if they were concatenated.
  #[inline]
  #[must_use]
  fn checksum_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }
}
