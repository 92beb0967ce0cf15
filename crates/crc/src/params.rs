//! CRC algorithm parameters.
//!
//! Parameters follow the Rocksoft model used by the
//! [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/). Polynomials
//! are written in normal (MSB-first) form without the implicit top bit; the
//! engine applies reflection itself.

use core::str::FromStr;

use crate::{ConfigError, reflect::low_mask};

/// Widest CRC the engine supports, in bits.
pub const MAX_WIDTH: u8 = 64;

/// CRC algorithm parameters.
///
/// - `width`: number of bits in the CRC (1 to 64)
/// - `polynomial`: generator polynomial, normal form, without the implicit high bit
/// - `initial`: initial remainder
/// - `reflect_in`: reflect each input byte before dividing
/// - `reflect_out`: reflect the final remainder before the XOR
/// - `xor_out`: value XORed into the final remainder
///
/// A value is only trusted after [`validate`](Self::validate); building a
/// [`CrcEngine`](crate::CrcEngine) validates for you.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrcParams {
  /// Width in bits.
  pub width: u8,
  /// Generator polynomial (without implicit high bit).
  pub polynomial: u64,
  /// Initial value for the CRC register.
  pub initial: u64,
  /// Reflect input bytes before processing.
  pub reflect_in: bool,
  /// Reflect final CRC before XOR.
  pub reflect_out: bool,
  /// XOR value applied to final CRC.
  pub xor_out: u64,
}

impl CrcParams {
  /// CRC-3/GSM - GSM mobile networks.
  pub const CRC3_GSM: Self = Self {
    width: 3,
    polynomial: 0x3,
    initial: 0x0,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x7,
  };

  /// CRC-5/USB - USB token packets.
  pub const CRC5_USB: Self = Self {
    width: 5,
    polynomial: 0x05,
    initial: 0x1F,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0x1F,
  };

  /// CRC-7/MMC - MultiMediaCard and SD command frames.
  pub const CRC7_MMC: Self = Self {
    width: 7,
    polynomial: 0x09,
    initial: 0x00,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x00,
  };

  /// CRC-8/SMBUS - SMBus packet error checking.
  pub const CRC8_SMBUS: Self = Self {
    width: 8,
    polynomial: 0x07,
    initial: 0x00,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x00,
  };

  /// CRC-8/MAXIM-DOW - 1-Wire, iButton, sensor networks.
  pub const CRC8_MAXIM: Self = Self {
    width: 8,
    polynomial: 0x31,
    initial: 0x00,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0x00,
  };

  /// CRC-16/ARC - the classic "CRC-16"; ARC, LHA, Modbus framing.
  pub const CRC16_ARC: Self = Self {
    width: 16,
    polynomial: 0x8005,
    initial: 0x0000,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0x0000,
  };

  /// CRC-16/IBM-3740 - a.k.a. CRC-CCITT (false); floppy disks, many embedded links.
  pub const CRC16_CCITT_FALSE: Self = Self {
    width: 16,
    polynomial: 0x1021,
    initial: 0xFFFF,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x0000,
  };

  /// CRC-16/XMODEM - XMODEM, ZMODEM, Bluetooth ACL.
  pub const CRC16_XMODEM: Self = Self {
    width: 16,
    polynomial: 0x1021,
    initial: 0x0000,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x0000,
  };

  /// CRC-16/KERMIT - Kermit, Bluetooth baseband.
  pub const CRC16_KERMIT: Self = Self {
    width: 16,
    polynomial: 0x1021,
    initial: 0x0000,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0x0000,
  };

  /// CRC-24/OPENPGP - OpenPGP armor (RFC 4880).
  pub const CRC24_OPENPGP: Self = Self {
    width: 24,
    polynomial: 0x86_4CFB,
    initial: 0xB7_04CE,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x00_0000,
  };

  /// CRC-32/ISO-HDLC - Ethernet, gzip, PNG, zip, SATA.
  ///
  /// The profile the engine returns for `"CRC-32"`.
  pub const CRC32_ISO: Self = Self {
    width: 32,
    polynomial: 0x04C1_1DB7,
    initial: 0xFFFF_FFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0xFFFF_FFFF,
  };

  /// CRC-32/ISCSI (Castagnoli) - iSCSI, SCTP, Btrfs, ext4.
  pub const CRC32C: Self = Self {
    width: 32,
    polynomial: 0x1EDC_6F41,
    initial: 0xFFFF_FFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0xFFFF_FFFF,
  };

  /// CRC-32/BZIP2 - bzip2, AAL5, DECT.
  pub const CRC32_BZIP2: Self = Self {
    width: 32,
    polynomial: 0x04C1_1DB7,
    initial: 0xFFFF_FFFF,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0xFFFF_FFFF,
  };

  /// CRC-32/MPEG-2 - MPEG transport streams.
  pub const CRC32_MPEG2: Self = Self {
    width: 32,
    polynomial: 0x04C1_1DB7,
    initial: 0xFFFF_FFFF,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x0000_0000,
  };

  /// CRC-64/ECMA-182 - ECMA-182 tape cartridges.
  pub const CRC64_ECMA: Self = Self {
    width: 64,
    polynomial: 0x42F0_E1EB_A9EA_3693,
    initial: 0x0000_0000_0000_0000,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x0000_0000_0000_0000,
  };

  /// CRC-64/XZ - XZ Utils, 7-Zip.
  pub const CRC64_XZ: Self = Self {
    width: 64,
    polynomial: 0x42F0_E1EB_A9EA_3693,
    initial: 0xFFFF_FFFF_FFFF_FFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0xFFFF_FFFF_FFFF_FFFF,
  };

  /// CRC-64/NVME - NVMe end-to-end data protection.
  pub const CRC64_NVME: Self = Self {
    width: 64,
    polynomial: 0xAD93_D235_94C9_3659,
    initial: 0xFFFF_FFFF_FFFF_FFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0xFFFF_FFFF_FFFF_FFFF,
  };

  /// Look up a named standard in the [catalogue](crate::catalog).
  ///
  /// Matching ignores ASCII case and accepts common aliases.
  ///
  /// ```
  /// use crc_engine::CrcParams;
  ///
  /// let p = CrcParams::standard("CRC-32").unwrap();
  /// assert_eq!(p.polynomial, 0x04C1_1DB7);
  /// assert!(p.reflect_in && p.reflect_out);
  /// assert_eq!(CrcParams::standard("crc32"), Some(p));
  /// ```
  #[must_use]
  pub fn standard(name: &str) -> Option<Self> {
    crate::catalog::find(name).map(|profile| profile.params())
  }

  /// Check that every field is representable in `width` bits.
  ///
  /// # Errors
  ///
  /// Returns a [`ConfigError`] naming the first offending field.
  pub const fn validate(&self) -> Result<(), ConfigError> {
    if self.width == 0 {
      return Err(ConfigError::ZeroWidth);
    }
    if self.width > MAX_WIDTH {
      return Err(ConfigError::WidthTooLarge { width: self.width });
    }
    let mask = low_mask(self.width);
    if self.polynomial & !mask != 0 {
      return Err(ConfigError::PolynomialTooWide {
        width: self.width,
        polynomial: self.polynomial,
      });
    }
    if self.initial & !mask != 0 {
      return Err(ConfigError::InitialTooWide {
        width: self.width,
        initial: self.initial,
      });
    }
    if self.xor_out & !mask != 0 {
      return Err(ConfigError::XorOutTooWide {
        width: self.width,
        xor_out: self.xor_out,
      });
    }
    Ok(())
  }

  /// Mask covering the low `width` bits.
  #[inline]
  #[must_use]
  pub const fn mask(&self) -> u64 {
    low_mask(self.width)
  }

  /// Returns the reflected polynomial (bit-reversed over `width`).
  #[inline]
  #[must_use]
  pub const fn polynomial_reflected(&self) -> u64 {
    crate::reflect(self.polynomial, self.width)
  }

  /// Width of the division register: `width`, widened to a whole byte.
  ///
  /// Widths below 8 run in an 8-bit register with every value
  /// left-aligned, so the byte-at-a-time step stays uniform.
  #[inline]
  #[must_use]
  pub const fn register_width(&self) -> u8 {
    if self.width < 8 { 8 } else { self.width }
  }

  /// Number of whole bytes needed to hold a checksum.
  #[inline]
  #[must_use]
  pub const fn byte_len(&self) -> usize {
    (self.width as usize).div_ceil(8)
  }
}

impl FromStr for CrcParams {
  type Err = ConfigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::standard(s.trim()).ok_or(ConfigError::UnknownStandard)
  }
}
