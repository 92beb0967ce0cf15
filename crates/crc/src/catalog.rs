//! Named CRC standards.
//!
//! Every profile carries a compile-time engine, so looking one up never
//! builds a table at runtime. Names follow the
//! [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/all.htm);
//! lookups ignore ASCII case and accept the common aliases listed per entry.
//!
//! | Name | Width | Poly | Check |
//! |------|-------|------|-------|
//! | CRC-3/GSM | 3 | 0x3 | 0x4 |
//! | CRC-5/USB | 5 | 0x05 | 0x19 |
//! | CRC-7/MMC | 7 | 0x09 | 0x75 |
//! | CRC-8/SMBUS | 8 | 0x07 | 0xF4 |
//! | CRC-8/MAXIM-DOW | 8 | 0x31 | 0xA1 |
//! | CRC-16/ARC | 16 | 0x8005 | 0xBB3D |
//! | CRC-16/IBM-3740 | 16 | 0x1021 | 0x29B1 |
//! | CRC-16/XMODEM | 16 | 0x1021 | 0x31C3 |
//! | CRC-16/KERMIT | 16 | 0x1021 | 0x2189 |
//! | CRC-24/OPENPGP | 24 | 0x864CFB | 0x21CF02 |
//! | CRC-32/ISO-HDLC | 32 | 0x04C11DB7 | 0xCBF43926 |
//! | CRC-32/ISCSI | 32 | 0x1EDC6F41 | 0xE3069283 |
//! | CRC-32/BZIP2 | 32 | 0x04C11DB7 | 0xFC891918 |
//! | CRC-32/MPEG-2 | 32 | 0x04C11DB7 | 0x0376E6E7 |
//! | CRC-64/ECMA-182 | 64 | 0x42F0E1EBA9EA3693 | 0x6C40DF5F0B497347 |
//! | CRC-64/XZ | 64 | 0x42F0E1EBA9EA3693 | 0x995DC9BBDF1939FA |
//! | CRC-64/NVME | 64 | 0xAD93D23594C93659 | 0xAE8B14860A799888 |

use crate::{CrcEngine, CrcParams, compute_slow};

/// Input every catalogue check value is computed over.
pub const CHECK_INPUT: &[u8] = b"123456789";

/// A named CRC standard.
#[derive(Clone, Copy, Debug)]
pub struct Profile {
  /// Catalogue name, e.g. `"CRC-32/ISO-HDLC"`.
  pub name: &'static str,
  /// Other names the standard is known by.
  pub aliases: &'static [&'static str],
  /// CRC of [`CHECK_INPUT`].
  pub check: u64,
  /// Residue of an intact codeword, for byte-aligned widths.
  pub residue: Option<u64>,
  /// Engine built for this standard at compile time.
  pub engine: &'static CrcEngine,
}

impl Profile {
  /// The standard's parameters.
  #[inline]
  #[must_use]
  pub const fn params(&self) -> CrcParams {
    *self.engine.params()
  }

  /// Whether `name` refers to this profile.
  #[must_use]
  pub fn matches(&self, name: &str) -> bool {
    self.name.eq_ignore_ascii_case(name) || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
  }

  /// Recompute the check value with the table-driven path.
  #[must_use]
  pub fn verify_check(&self) -> bool {
    self.engine.compute(CHECK_INPUT) == self.check
  }
}

/// Find a profile by name or alias.
///
/// ```
/// use crc_engine::catalog;
///
/// let p = catalog::find("crc-32c").unwrap();
/// assert_eq!(p.name, "CRC-32/ISCSI");
/// assert_eq!(p.engine.compute(b"123456789"), 0xE306_9283);
/// ```
#[must_use]
pub fn find(name: &str) -> Option<&'static Profile> {
  PROFILES.iter().find(|profile| profile.matches(name))
}

macro_rules! engines {
  ($($(#[$meta:meta])* $name:ident;)*) => {
    $(
      $(#[$meta])*
      pub static $name: CrcEngine = CrcEngine::from_params(CrcParams::$name);
    )*
  };
}

engines! {
  /// CRC-3/GSM engine.
  CRC3_GSM;
  /// CRC-5/USB engine.
  CRC5_USB;
  /// CRC-7/MMC engine.
  CRC7_MMC;
  /// CRC-8/SMBUS engine.
  CRC8_SMBUS;
  /// CRC-8/MAXIM-DOW engine.
  CRC8_MAXIM;
  /// CRC-16/ARC engine.
  CRC16_ARC;
  /// CRC-16/IBM-3740 (CCITT-FALSE) engine.
  CRC16_CCITT_FALSE;
  /// CRC-16/XMODEM engine.
  CRC16_XMODEM;
  /// CRC-16/KERMIT engine.
  CRC16_KERMIT;
  /// CRC-24/OPENPGP engine.
  CRC24_OPENPGP;
  /// CRC-32/ISO-HDLC engine.
  CRC32_ISO;
  /// CRC-32/ISCSI (Castagnoli) engine.
  CRC32C;
  /// CRC-32/BZIP2 engine.
  CRC32_BZIP2;
  /// CRC-32/MPEG-2 engine.
  CRC32_MPEG2;
  /// CRC-64/ECMA-182 engine.
  CRC64_ECMA;
  /// CRC-64/XZ engine.
  CRC64_XZ;
  /// CRC-64/NVME engine.
  CRC64_NVME;
}

/// Every catalogued standard.
pub static PROFILES: [Profile; 17] = [
  Profile {
    name: "CRC-3/GSM",
    aliases: &[],
    check: 0x4,
    residue: None,
    engine: &CRC3_GSM,
  },
  Profile {
    name: "CRC-5/USB",
    aliases: &["CRC-5"],
    check: 0x19,
    residue: None,
    engine: &CRC5_USB,
  },
  Profile {
    name: "CRC-7/MMC",
    aliases: &["CRC-7"],
    check: 0x75,
    residue: None,
    engine: &CRC7_MMC,
  },
  Profile {
    name: "CRC-8/SMBUS",
    aliases: &["CRC-8"],
    check: 0xF4,
    residue: Some(0x00),
    engine: &CRC8_SMBUS,
  },
  Profile {
    name: "CRC-8/MAXIM-DOW",
    aliases: &["CRC-8/MAXIM", "DOW-CRC"],
    check: 0xA1,
    residue: Some(0x00),
    engine: &CRC8_MAXIM,
  },
  Profile {
    name: "CRC-16/ARC",
    aliases: &["CRC-16", "CRC-16/LHA", "CRC-IBM"],
    check: 0xBB3D,
    residue: Some(0x0000),
    engine: &CRC16_ARC,
  },
  Profile {
    name: "CRC-16/IBM-3740",
    aliases: &["CRC-CCITT", "CRC-16/CCITT-FALSE", "CRC-16/AUTOSAR"],
    check: 0x29B1,
    residue: Some(0x0000),
    engine: &CRC16_CCITT_FALSE,
  },
  Profile {
    name: "CRC-16/XMODEM",
    aliases: &["CRC-16/ACORN", "CRC-16/LTE", "XMODEM"],
    check: 0x31C3,
    residue: Some(0x0000),
    engine: &CRC16_XMODEM,
  },
  Profile {
    name: "CRC-16/KERMIT",
    aliases: &["CRC-16/CCITT", "CRC-16/CCITT-TRUE", "KERMIT"],
    check: 0x2189,
    residue: Some(0x0000),
    engine: &CRC16_KERMIT,
  },
  Profile {
    name: "CRC-24/OPENPGP",
    aliases: &["CRC-24"],
    check: 0x21_CF02,
    residue: Some(0x00_0000),
    engine: &CRC24_OPENPGP,
  },
  Profile {
    name: "CRC-32/ISO-HDLC",
    aliases: &["CRC-32", "CRC32", "CRC-32/IEEE", "CRC-32/ADCCP", "PKZIP"],
    check: 0xCBF4_3926,
    residue: Some(0xDEBB_20E3),
    engine: &CRC32_ISO,
  },
  Profile {
    name: "CRC-32/ISCSI",
    aliases: &["CRC-32C", "CRC32C", "CRC-32/CASTAGNOLI"],
    check: 0xE306_9283,
    residue: Some(0xB798_B438),
    engine: &CRC32C,
  },
  Profile {
    name: "CRC-32/BZIP2",
    aliases: &["CRC-32/AAL5", "CRC-32/DECT-B"],
    check: 0xFC89_1918,
    residue: Some(0xC704_DD7B),
    engine: &CRC32_BZIP2,
  },
  Profile {
    name: "CRC-32/MPEG-2",
    aliases: &[],
    check: 0x0376_E6E7,
    residue: Some(0x0000_0000),
    engine: &CRC32_MPEG2,
  },
  Profile {
    name: "CRC-64/ECMA-182",
    aliases: &["CRC-64"],
    check: 0x6C40_DF5F_0B49_7347,
    residue: Some(0x0000_0000_0000_0000),
    engine: &CRC64_ECMA,
  },
  Profile {
    name: "CRC-64/XZ",
    aliases: &["CRC-64/GO-ECMA"],
    check: 0x995D_C9BB_DF19_39FA,
    residue: Some(0x4995_8C9A_BD7D_353F),
    engine: &CRC64_XZ,
  },
  Profile {
    name: "CRC-64/NVME",
    aliases: &[],
    check: 0xAE8B_1486_0A79_9888,
    residue: Some(0xF310_303B_2B6F_6E42),
    engine: &CRC64_NVME,
  },
];

// Check values, evaluated with the bitwise reference at compile time.
const _: () = {
  assert!(compute_slow(CHECK_INPUT, &CrcParams::CRC5_USB) == 0x19);
  assert!(compute_slow(CHECK_INPUT, &CrcParams::CRC7_MMC) == 0x75);
  assert!(compute_slow(CHECK_INPUT, &CrcParams::CRC8_MAXIM) == 0xA1);
  assert!(compute_slow(CHECK_INPUT, &CrcParams::CRC16_CCITT_FALSE) == 0x29B1);
  assert!(compute_slow(CHECK_INPUT, &CrcParams::CRC24_OPENPGP) == 0x21_CF02);
  assert!(compute_slow(CHECK_INPUT, &CrcParams::CRC32C) == 0xE306_9283);
  assert!(compute_slow(CHECK_INPUT, &CrcParams::CRC64_XZ) == 0x995D_C9BB_DF19_39FA);
  assert!(compute_slow(CHECK_INPUT, &CrcParams::CRC64_NVME) == 0xAE8B_1486_0A79_9888);
};

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_check_value_holds_on_both_paths() {
    for profile in &PROFILES {
      assert!(profile.verify_check(), "{} fast path", profile.name);
      assert_eq!(profile.engine.compute_slow(CHECK_INPUT), profile.check, "{} slow path", profile.name);
    }
  }

  #[test]
  fn every_residue_matches_engine() {
    for profile in &PROFILES {
      if let Some(residue) = profile.residue {
        assert_eq!(profile.engine.expected_residue(), Some(residue), "{}", profile.name);
      }
    }
  }

  #[test]
  fn names_are_unique() {
    for (i, a) in PROFILES.iter().enumerate() {
      for b in PROFILES.iter().skip(i + 1) {
        assert!(!b.matches(a.name), "{} shadows {}", b.name, a.name);
        for alias in a.aliases {
          assert!(!b.matches(alias), "{} shadows alias {alias} of {}", b.name, a.name);
        }
      }
    }
  }

  #[test]
  fn find_is_case_insensitive() {
    assert_eq!(find("crc-32").map(|p| p.name), Some("CRC-32/ISO-HDLC"));
    assert_eq!(find("CRC-CCITT").map(|p| p.name), Some("CRC-16/IBM-3740"));
    assert_eq!(find("crc-16").map(|p| p.name), Some("CRC-16/ARC"));
    assert!(find("CRC-99").is_none());
  }

  #[test]
  fn profile_params_round_trip() {
    let p = find("CRC-32/IEEE").unwrap();
    assert_eq!(p.params(), CrcParams::CRC32_ISO);
  }
}
