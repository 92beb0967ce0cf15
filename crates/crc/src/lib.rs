//! Parameterized CRC engine.
//!
//! Computes any CRC of width 1 to 64 bits from its Rocksoft-model parameters
//! (width, polynomial, initial remainder, final XOR, input/output reflection),
//! using either a bitwise reference algorithm or a byte-at-a-time lookup
//! table. The two always agree.
//!
//! # Building Blocks
//!
//! | Item | Role |
//! |------|------|
//! | [`CrcParams`] | Immutable parameter set, validated on engine construction |
//! | [`build_table`] | 256-entry partial-remainder table |
//! | [`compute_slow`] | Bitwise reference oracle |
//! | [`compute_fast`] | Table-driven computation |
//! | [`CrcEngine`] | Parameters and table paired once, shared freely |
//! | [`catalog`] | Named standards with compile-time engines |
//! | [`Crc32`], [`Crc32C`], ... | Fixed-profile [`Checksum`] hashers |
//!
//! # Example
//!
//! ```rust
//! use crc_engine::{Checksum, Crc32, CrcEngine, CrcParams};
//!
//! // Runtime parameters.
//! let params: CrcParams = "CRC-32".parse()?;
//! let engine = CrcEngine::new(params)?;
//! assert_eq!(engine.compute(b"123456789"), 0xCBF4_3926);
//!
//! // Fixed profile.
//! assert_eq!(Crc32::checksum(b"123456789"), 0xCBF4_3926);
//!
//! // A custom parameter set: CRC-16/MODBUS.
//! let modbus = CrcEngine::new(CrcParams { initial: 0xFFFF, ..CrcParams::CRC16_ARC })?;
//! assert_eq!(modbus.compute(b"123456789"), 0x4B37);
//! # Ok::<(), crc_engine::ConfigError>(())
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable default features for embedded use:
//!
//! ```toml
//! [dependencies]
//! crc-engine = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

// Internal macros must be declared before modules that use them.
#[macro_use]
mod macros;

pub mod catalog;
mod engine;
mod error;
#[cfg(feature = "std")]
mod io;
mod params;
mod portable;
#[cfg(test)]
mod proptests;
mod reference;
mod reflect;
mod register;
mod table;
mod types;

pub use engine::{CodewordBytes, CrcEngine, Digest};
pub use error::ConfigError;
#[cfg(feature = "std")]
pub use io::{CrcReader, CrcWriter};
pub use params::{CrcParams, MAX_WIDTH};
pub use portable::compute_fast;
pub use reference::compute_slow;
pub use reflect::{reflect, reflect_bits, reflect_u8};
pub use table::{CrcTable, TABLE_LEN, build_table};
// Re-export the trait so hasher users need a single import.
pub use traits::Checksum;
pub use types::{Crc8Maxim, Crc16Arc, Crc16CcittFalse, Crc32, Crc32C, Crc64Xz};
