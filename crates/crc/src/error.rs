//! Configuration errors.
//!
//! Every failure in this crate happens while validating a [`CrcParams`]
//! value. Computation over a validated engine is total.
//!
//! [`CrcParams`]: crate::CrcParams

use core::fmt;

/// A CRC parameter set was rejected.
///
/// # Examples
///
/// ```
/// use crc_engine::{ConfigError, CrcParams};
///
/// let params = CrcParams { polynomial: 0x1_0000, ..CrcParams::CRC16_ARC };
/// assert_eq!(
///   params.validate(),
///   Err(ConfigError::PolynomialTooWide { width: 16, polynomial: 0x1_0000 })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ConfigError {
  /// `width` was zero.
  ZeroWidth,
  /// `width` exceeds [`MAX_WIDTH`](crate::MAX_WIDTH).
  WidthTooLarge {
    /// The rejected width.
    width: u8,
  },
  /// The polynomial has bits set at or above `width`.
  PolynomialTooWide {
    /// Declared width.
    width: u8,
    /// The rejected polynomial.
    polynomial: u64,
  },
  /// The initial remainder has bits set at or above `width`.
  InitialTooWide {
    /// Declared width.
    width: u8,
    /// The rejected initial remainder.
    initial: u64,
  },
  /// The final XOR value has bits set at or above `width`.
  XorOutTooWide {
    /// Declared width.
    width: u8,
    /// The rejected final XOR value.
    xor_out: u64,
  },
  /// No catalogue profile matches the requested name.
  UnknownStandard,
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      Self::ZeroWidth => f.write_str("crc width must be at least 1 bit"),
      Self::WidthTooLarge { width } => {
        write!(f, "crc width {width} exceeds the {}-bit maximum", crate::MAX_WIDTH)
      }
      Self::PolynomialTooWide { width, polynomial } => {
        write!(f, "polynomial {polynomial:#x} does not fit in {width} bits")
      }
      Self::InitialTooWide { width, initial } => {
        write!(f, "initial remainder {initial:#x} does not fit in {width} bits")
      }
      Self::XorOutTooWide { width, xor_out } => {
        write!(f, "final xor value {xor_out:#x} does not fit in {width} bits")
      }
      Self::UnknownStandard => f.write_str("unknown crc standard"),
    }
  }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::string::ToString;

  use super::*;

  #[test]
  fn display_names_the_offending_value() {
    let err = ConfigError::PolynomialTooWide {
      width: 8,
      polynomial: 0x107,
    };
    assert_eq!(err.to_string(), "polynomial 0x107 does not fit in 8 bits");

    let err = ConfigError::WidthTooLarge { width: 65 };
    assert_eq!(err.to_string(), "crc width 65 exceeds the 64-bit maximum");
  }

  #[test]
  fn error_trait_impl() {
    use core::error::Error;

    let err = ConfigError::ZeroWidth;
    assert!(err.source().is_none());
  }

  #[test]
  fn trait_bounds() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<ConfigError>();
  }
}
