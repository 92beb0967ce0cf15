//! I/O adapters that checksum bytes as they pass through.
//!
//! Only bytes actually transferred are fed to the digest, so short reads and
//! short writes are handled correctly.
//!
//! ```rust
//! use std::io::{Cursor, Read};
//!
//! use crc_engine::catalog;
//!
//! let engine = &catalog::CRC32_ISO;
//! let mut reader = engine.reader(Cursor::new(b"123456789".to_vec()));
//! let mut contents = Vec::new();
//! reader.read_to_end(&mut contents)?;
//! assert_eq!(reader.crc(), 0xCBF4_3926);
//! # Ok::<(), std::io::Error>(())
//! ```

use std::io::{self, IoSlice, IoSliceMut, Read, Write};

use crate::{CrcEngine, Digest};

impl CrcEngine {
  /// Wrap a reader so everything read through it is checksummed.
  #[inline]
  #[must_use]
  pub const fn reader<R>(&self, inner: R) -> CrcReader<'_, R> {
    CrcReader {
      inner,
      digest: self.digest(),
    }
  }

  /// Wrap a writer so everything written through it is checksummed.
  #[inline]
  #[must_use]
  pub const fn writer<W>(&self, inner: W) -> CrcWriter<'_, W> {
    CrcWriter {
      inner,
      digest: self.digest(),
    }
  }
}

/// A [`Read`] adapter computing a CRC of the bytes read.
#[derive(Debug)]
pub struct CrcReader<'e, R> {
  inner: R,
  digest: Digest<'e>,
}

impl<'e, R> CrcReader<'e, R> {
  /// Checksum of everything read so far.
  #[inline]
  #[must_use]
  pub fn crc(&self) -> u64 {
    self.digest.finalize()
  }

  /// The running digest.
  #[inline]
  #[must_use]
  pub const fn digest(&self) -> &Digest<'e> {
    &self.digest
  }

  /// Borrow the inner reader.
  #[inline]
  pub const fn get_ref(&self) -> &R {
    &self.inner
  }

  /// Mutably borrow the inner reader. Bytes read directly are not checksummed.
  #[inline]
  pub const fn get_mut(&mut self) -> &mut R {
    &mut self.inner
  }

  /// Unwrap into the inner reader and the checksum so far.
  #[inline]
  pub fn into_parts(self) -> (R, u64) {
    let crc = self.crc();
    (self.inner, crc)
  }
}

impl<R: Read> Read for CrcReader<'_, R> {
  fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
    let n = self.inner.read(buf)?;
    if let Some(data) = buf.get(..n) {
      self.digest.update(data);
    }
    Ok(n)
  }

  fn read_vectored(&mut self, bufs: &mut [IoSliceMut<'_>]) -> io::Result<usize> {
    let n = self.inner.read_vectored(bufs)?;
    let mut remaining = n;
    for buf in &*bufs {
      if remaining == 0 {
        break;
      }
      let take = remaining.min(buf.len());
      if let Some(data) = buf.get(..take) {
        self.digest.update(data);
      }
      remaining -= take;
    }
    Ok(n)
  }
}

/// A [`Write`] adapter computing a CRC of the bytes written.
#[derive(Debug)]
pub struct CrcWriter<'e, W> {
  inner: W,
  digest: Digest<'e>,
}

impl<'e, W> CrcWriter<'e, W> {
  /// Checksum of everything written so far.
  #[inline]
  #[must_use]
  pub fn crc(&self) -> u64 {
    self.digest.finalize()
  }

  /// The running digest.
  #[inline]
  #[must_use]
  pub const fn digest(&self) -> &Digest<'e> {
    &self.digest
  }

  /// Borrow the inner writer.
  #[inline]
  pub const fn get_ref(&self) -> &W {
    &self.inner
  }

  /// Mutably borrow the inner writer. Bytes written directly are not checksummed.
  #[inline]
  pub const fn get_mut(&mut self) -> &mut W {
    &mut self.inner
  }

  /// Unwrap into the inner writer and the checksum so far.
  #[inline]
  pub fn into_parts(self) -> (W, u64) {
    let crc = self.crc();
    (self.inner, crc)
  }
}

impl<W: Write> Write for CrcWriter<'_, W> {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    let n = self.inner.write(buf)?;
    if let Some(data) = buf.get(..n) {
      self.digest.update(data);
    }
    Ok(n)
  }

  fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> io::Result<usize> {
    let n = self.inner.write_vectored(bufs)?;
    let mut remaining = n;
    for buf in bufs {
      if remaining == 0 {
        break;
      }
      let take = remaining.min(buf.len());
      if let Some(data) = buf.get(..take) {
        self.digest.update(data);
      }
      remaining -= take;
    }
    Ok(n)
  }

  fn flush(&mut self) -> io::Result<()> {
    self.inner.flush()
  }
}
