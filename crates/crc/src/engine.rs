//! The CRC engine: one validated parameter set paired with its table.
//!
//! An engine is built once and is immutable afterwards, so it can be shared
//! freely across threads (`&CrcEngine` is `Send + Sync`). A different CRC
//! standard means a different engine; there is no in-place reconfiguration.

use core::{fmt, ops::Deref};

use crate::{
  ConfigError, CrcParams, CrcTable, build_table,
  portable::update_fast,
  reference::update_slow,
  reflect,
  register::Register,
};

/// A validated CRC parameter set together with its lookup table.
///
/// # Examples
///
/// ```
/// use crc_engine::{CrcEngine, CrcParams};
///
/// let crc32 = CrcEngine::new(CrcParams::CRC32_ISO)?;
/// assert_eq!(crc32.compute(b"123456789"), 0xCBF4_3926);
/// assert_eq!(crc32.compute_slow(b"123456789"), 0xCBF4_3926);
///
/// // Streaming gives the same answer for any split.
/// let mut digest = crc32.digest();
/// digest.update(b"1234");
/// digest.update(b"56789");
/// assert_eq!(digest.finalize(), 0xCBF4_3926);
/// # Ok::<(), crc_engine::ConfigError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrcEngine {
  params: CrcParams,
  reg: Register,
  table: CrcTable,
}

impl CrcEngine {
  /// Validate `params` and build the lookup table.
  ///
  /// # Errors
  ///
  /// Returns [`ConfigError`] when `params` fails
  /// [`CrcParams::validate`].
  pub fn new(params: CrcParams) -> Result<Self, ConfigError> {
    if let Err(err) = params.validate() {
      #[cfg(feature = "tracing")]
      tracing::debug!(%err, ?params, "rejected crc parameters");
      return Err(err);
    }

    let engine = Self::build(params);

    #[cfg(feature = "tracing")]
    tracing::debug!(
      width = params.width,
      polynomial = params.polynomial,
      reflect_in = params.reflect_in,
      reflect_out = params.reflect_out,
      "built crc engine"
    );

    Ok(engine)
  }

  /// Build an engine in a `const` context.
  ///
  /// Intended for `static` engines over known-good parameters.
  ///
  /// ```
  /// use crc_engine::{CrcEngine, CrcParams};
  ///
  /// static MODBUS: CrcEngine = CrcEngine::from_params(CrcParams {
  ///   initial: 0xFFFF,
  ///   ..CrcParams::CRC16_ARC
  /// });
  /// assert_eq!(MODBUS.compute(b"123456789"), 0x4B37);
  /// ```
  ///
  /// # Panics
  ///
  /// Panics if `params` is invalid, which fails the build when evaluated
  /// in a `static` or `const` initializer.
  #[must_use]
  pub const fn from_params(params: CrcParams) -> Self {
    if params.validate().is_err() {
      panic!("invalid CRC parameters");
    }
    Self::build(params)
  }

  const fn build(params: CrcParams) -> Self {
    Self {
      params,
      reg: Register::new(&params),
      table: build_table(&params),
    }
  }

  /// The parameter set this engine was built for.
  #[inline]
  #[must_use]
  pub const fn params(&self) -> &CrcParams {
    &self.params
  }

  /// The lookup table built for [`params`](Self::params).
  #[inline]
  #[must_use]
  pub const fn table(&self) -> &CrcTable {
    &self.table
  }

  /// CRC width in bits.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u8 {
    self.params.width
  }

  /// Compute the CRC of `message` with the table-driven algorithm.
  #[inline]
  #[must_use]
  pub fn compute(&self, message: &[u8]) -> u64 {
    self.finish_register(self.fold(self.seed_register(), message))
  }

  /// Compute the CRC of `message` with the bitwise reference algorithm.
  ///
  /// Always equal to [`compute`](Self::compute); useful for auditing.
  #[must_use]
  pub const fn compute_slow(&self, message: &[u8]) -> u64 {
    let remainder = update_slow(&self.reg, &self.params, self.reg.seed(&self.params), message);
    self.reg.finish(&self.params, remainder)
  }

  /// Start a streaming computation.
  #[inline]
  #[must_use]
  pub const fn digest(&self) -> Digest<'_> {
    Digest {
      engine: self,
      remainder: self.reg.seed(&self.params),
      len: 0,
    }
  }

  /// Continue a streaming computation from a previously returned checksum.
  ///
  /// ```
  /// use crc_engine::catalog;
  ///
  /// let engine = &catalog::CRC32_ISO;
  /// let head = engine.compute(b"hello ");
  /// let mut digest = engine.resume(head);
  /// digest.update(b"world");
  /// assert_eq!(digest.finalize(), engine.compute(b"hello world"));
  /// ```
  #[inline]
  #[must_use]
  pub const fn resume(&self, crc: u64) -> Digest<'_> {
    Digest {
      engine: self,
      remainder: self.resume_register(crc),
      len: 0,
    }
  }

  // ───────────────────────────────────────────────────────────────────────
  // Codewords
  // ───────────────────────────────────────────────────────────────────────

  /// Encode `crc` in the byte order the standard transmits it.
  ///
  /// Reflected-output CRCs go little-endian, the rest big-endian. Returns
  /// `None` when the width is not a whole number of bytes.
  #[must_use]
  pub fn checksum_bytes(&self, crc: u64) -> Option<CodewordBytes> {
    if self.params.width % 8 != 0 {
      return None;
    }
    let len = self.params.byte_len();
    let crc = crc & self.params.mask();
    let bytes = if self.params.reflect_out {
      crc.to_le_bytes()
    } else {
      // Move the checksum's top byte to the top of the word.
      (crc << (64 - 8 * len)).to_be_bytes()
    };
    Some(CodewordBytes { bytes, len: len as u8 })
  }

  /// Append the checksum of `buf` to `buf`, forming a codeword.
  ///
  /// Returns the checksum, or `None` (leaving `buf` untouched) when the
  /// width is not a whole number of bytes.
  #[cfg(feature = "alloc")]
  pub fn append_checksum(&self, buf: &mut alloc::vec::Vec<u8>) -> Option<u64> {
    let crc = self.compute(buf);
    let encoded = self.checksum_bytes(crc)?;
    buf.extend_from_slice(&encoded);
    Some(crc)
  }

  /// Register contents after dividing a whole codeword: output reflection
  /// applied, final XOR not.
  ///
  /// For an intact codeword this equals [`expected_residue`](Self::expected_residue).
  #[must_use]
  pub fn residue(&self, codeword: &[u8]) -> u64 {
    let remainder = self.fold(self.seed_register(), codeword);
    self.reg.unxored(&self.params, remainder)
  }

  /// The fixed residue every intact codeword of this engine produces.
  ///
  /// Defined when the width is a whole number of bytes and input and output
  /// share a bit order; otherwise appending the checksum does not give a
  /// message-independent remainder and this returns `None`.
  ///
  /// ```
  /// use crc_engine::catalog;
  ///
  /// assert_eq!(catalog::CRC32_ISO.expected_residue(), Some(0xDEBB_20E3));
  /// ```
  #[must_use]
  pub fn expected_residue(&self) -> Option<u64> {
    if self.params.reflect_in != self.params.reflect_out {
      return None;
    }
    let empty = self.checksum_bytes(self.compute(&[]))?;
    Some(self.residue(&empty))
  }

  /// Check a codeword whose last [`byte_len`](CrcParams::byte_len) bytes
  /// are the transmitted checksum.
  ///
  /// Returns `false` for codewords shorter than the checksum and for widths
  /// that cannot be encoded in whole bytes.
  #[must_use]
  pub fn verify(&self, codeword: &[u8]) -> bool {
    let Some(split) = codeword.len().checked_sub(self.params.byte_len()) else {
      return false;
    };
    let (message, trailer) = codeword.split_at(split);
    match self.checksum_bytes(self.compute(message)) {
      Some(expected) => *expected == *trailer,
      None => false,
    }
  }

  // ───────────────────────────────────────────────────────────────────────
  // Raw register access for the streaming types
  // ───────────────────────────────────────────────────────────────────────

  #[inline]
  pub(crate) const fn seed_register(&self) -> u64 {
    self.reg.seed(&self.params)
  }

  #[inline]
  pub(crate) fn fold(&self, remainder: u64, data: &[u8]) -> u64 {
    update_fast(&self.reg, &self.params, &self.table, remainder, data)
  }

  #[inline]
  pub(crate) const fn finish_register(&self, remainder: u64) -> u64 {
    self.reg.finish(&self.params, remainder)
  }

  /// Register value for a caller-supplied initial remainder.
  #[inline]
  pub(crate) const fn align_register(&self, initial: u64) -> u64 {
    self.reg.align(initial & self.params.mask())
  }

  /// Invert [`finish_register`](Self::finish_register).
  #[inline]
  pub(crate) const fn resume_register(&self, crc: u64) -> u64 {
    let unxored = (crc ^ self.params.xor_out) & self.params.mask();
    let raw = if self.params.reflect_out {
      reflect(unxored, self.reg.width)
    } else {
      unxored
    };
    self.reg.align(raw)
  }
}

/// A checksum encoded for transmission; derefs to its bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodewordBytes {
  bytes: [u8; 8],
  len: u8,
}

impl Deref for CodewordBytes {
  type Target = [u8];

  #[inline]
  fn deref(&self) -> &[u8] {
    self.bytes.get(..usize::from(self.len)).unwrap_or(&[])
  }
}

impl AsRef<[u8]> for CodewordBytes {
  #[inline]
  fn as_ref(&self) -> &[u8] {
    self
  }
}

impl fmt::Debug for CodewordBytes {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut list = f.debug_list();
    for byte in &**self {
      list.entry(&format_args!("{byte:#04x}"));
    }
    list.finish()
  }
}

/// Streaming CRC state borrowing an engine.
///
/// Splitting a message across any number of [`update`](Self::update) calls
/// gives the same result as one [`CrcEngine::compute`].
#[derive(Clone)]
pub struct Digest<'e> {
  engine: &'e CrcEngine,
  remainder: u64,
  len: u64,
}

impl<'e> Digest<'e> {
  /// Start from a custom initial remainder instead of the engine's.
  #[inline]
  #[must_use]
  pub const fn with_initial(engine: &'e CrcEngine, initial: u64) -> Self {
    Self {
      engine,
      remainder: engine.align_register(initial),
      len: 0,
    }
  }

  /// Feed more bytes.
  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    self.remainder = self.engine.fold(self.remainder, data);
    self.len = self.len.wrapping_add(data.len() as u64);
  }

  /// Checksum of everything fed so far. Does not consume the digest.
  #[inline]
  #[must_use]
  pub fn finalize(&self) -> u64 {
    let crc = self.engine.finish_register(self.remainder);
    #[cfg(feature = "tracing")]
    tracing::trace!(len = self.len, crc, "crc digest finalized");
    crc
  }

  /// Return to the engine's initial state.
  #[inline]
  pub const fn reset(&mut self) {
    self.remainder = self.engine.seed_register();
    self.len = 0;
  }

  /// Bytes fed since creation or the last reset.
  #[inline]
  #[must_use]
  pub const fn len(&self) -> u64 {
    self.len
  }

  /// Whether no bytes have been fed.
  #[inline]
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// The engine this digest runs on.
  #[inline]
  #[must_use]
  pub const fn engine(&self) -> &'e CrcEngine {
    self.engine
  }
}

impl fmt::Debug for Digest<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Digest")
      .field("width", &self.engine.width())
      .field("len", &self.len)
      .finish_non_exhaustive()
  }
}
