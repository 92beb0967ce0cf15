//! Fixed-profile hashers implementing [`Checksum`](crate::Checksum).
//!
//! Each type is a `u64` register over a compile-time catalogue engine, so
//! it is `Default`, `Clone` and free to construct.

use crate::catalog;

define_crc_type! {
  /// CRC-8/MAXIM-DOW (1-Wire).
  pub struct Crc8Maxim {
    engine: catalog::CRC8_MAXIM,
    output: u8,
  }
}

define_crc_type! {
  /// CRC-16/ARC, the classic "CRC-16".
  pub struct Crc16Arc {
    engine: catalog::CRC16_ARC,
    output: u16,
  }
}

define_crc_type! {
  /// CRC-16/IBM-3740, a.k.a. CRC-CCITT (false).
  pub struct Crc16CcittFalse {
    engine: catalog::CRC16_CCITT_FALSE,
    output: u16,
  }
}

define_crc_type! {
  /// CRC-32/ISO-HDLC (Ethernet, gzip, zip, PNG).
  ///
  /// ```
  /// use crc_engine::{Checksum, Crc32};
  ///
  /// assert_eq!(Crc32::checksum(b"123456789"), 0xCBF4_3926);
  ///
  /// let mut h = Crc32::new();
  /// h.update(b"1234");
  /// h.update(b"56789");
  /// assert_eq!(h.finalize(), 0xCBF4_3926);
  /// ```
  pub struct Crc32 {
    engine: catalog::CRC32_ISO,
    output: u32,
  }
}

define_crc_type! {
  /// CRC-32/ISCSI, Castagnoli (iSCSI, SCTP, ext4, Btrfs).
  pub struct Crc32C {
    engine: catalog::CRC32C,
    output: u32,
  }
}

define_crc_type! {
  /// CRC-64/XZ (XZ Utils, 7-Zip).
  pub struct Crc64Xz {
    engine: catalog::CRC64_XZ,
    output: u64,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Checksum;

  #[test]
  fn check_values() {
    assert_eq!(Crc8Maxim::checksum(b"123456789"), 0xA1);
    assert_eq!(Crc16Arc::checksum(b"123456789"), 0xBB3D);
    assert_eq!(Crc16CcittFalse::checksum(b"123456789"), 0x29B1);
    assert_eq!(Crc32::checksum(b"123456789"), 0xCBF4_3926);
    assert_eq!(Crc32C::checksum(b"123456789"), 0xE306_9283);
    assert_eq!(Crc64Xz::checksum(b"123456789"), 0x995D_C9BB_DF19_39FA);
  }

  #[test]
  fn output_sizes() {
    assert_eq!(Crc8Maxim::OUTPUT_SIZE, 1);
    assert_eq!(Crc16Arc::OUTPUT_SIZE, 2);
    assert_eq!(Crc32C::OUTPUT_SIZE, 4);
    assert_eq!(Crc64Xz::OUTPUT_SIZE, 8);
  }

  #[test]
  fn engines_are_the_catalogue_statics() {
    assert!(core::ptr::eq(Crc32::engine(), &catalog::CRC32_ISO));
    assert!(core::ptr::eq(Crc8Maxim::engine(), &catalog::CRC8_MAXIM));
    assert_eq!(Crc64Xz::engine().width(), 64);
  }

  #[test]
  fn default_equals_new() {
    assert_eq!(Crc32::default().finalize(), Crc32::new().finalize());
    assert_eq!(Crc16CcittFalse::default().finalize(), 0xFFFF);
  }

  #[test]
  fn resume_matches_oneshot() {
    let data = b"The quick brown fox jumps over the lazy dog";
    for split in 0..=data.len() {
      let (a, b) = data.split_at(split);
      let mut h = Crc32C::resume(Crc32C::checksum(a));
      h.update(b);
      assert_eq!(h.finalize(), Crc32C::checksum(data), "split {split}");
    }
  }

  #[test]
  fn with_initial_is_a_raw_remainder() {
    // CRC-16/ARC with initial 0xFFFF is CRC-16/MODBUS.
    let mut h = Crc16Arc::with_initial(0xFFFF);
    h.update(b"123456789");
    assert_eq!(h.finalize(), 0x4B37);
  }

  #[test]
  fn reset_restores_initial_state() {
    let mut h = Crc64Xz::new();
    h.update(b"noise");
    h.reset();
    h.update(b"123456789");
    assert_eq!(h.finalize(), 0x995D_C9BB_DF19_39FA);
  }
}
