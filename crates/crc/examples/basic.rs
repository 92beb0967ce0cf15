//! Basic engine usage: named standards, custom parameters, streaming and
//! codewords.
//!
//! Run with: `cargo run --example basic -p crc-engine`

use std::io::{self, Read};

use crc_engine::{Checksum, Crc32, CrcEngine, CrcParams, catalog};

fn main() -> Result<(), Box<dyn std::error::Error>> {
  println!("=== CRC Engine Basic Examples ===\n");

  named_standards()?;
  custom_parameters()?;
  streaming()?;
  codewords()?;
  Ok(())
}

/// Every catalogued standard over the check input.
fn named_standards() -> Result<(), Box<dyn std::error::Error>> {
  println!("--- Catalogue ---\n");

  for profile in &catalog::PROFILES {
    let crc = profile.engine.compute(catalog::CHECK_INPUT);
    let digits = profile.params().byte_len() * 2;
    println!("{:<18} 0x{crc:0digits$X}", profile.name);
    assert_eq!(crc, profile.check);
  }

  let params: CrcParams = "CRC-32".parse()?;
  let engine = CrcEngine::new(params)?;
  let fox = b"brown fox jumped over the lazy dog";
  println!("\nCRC-32 of {:?}: 0x{:08X}\n", std::str::from_utf8(fox)?, engine.compute(fox));
  Ok(())
}

/// Any Rocksoft-model parameter set is accepted once validated.
fn custom_parameters() -> Result<(), Box<dyn std::error::Error>> {
  println!("--- Custom Parameters ---\n");

  // CRC-16/MODBUS is CRC-16/ARC with an all-ones initial remainder.
  let modbus = CrcEngine::new(CrcParams {
    initial: 0xFFFF,
    ..CrcParams::CRC16_ARC
  })?;
  println!("CRC-16/MODBUS:   0x{:04X}", modbus.compute(b"123456789"));

  // Bits above the width are rejected, not silently masked.
  let bad = CrcParams {
    polynomial: 0x1_0000_0000,
    ..CrcParams::CRC32_ISO
  };
  match CrcEngine::new(bad) {
    Ok(_) => unreachable!("33-bit polynomial accepted"),
    Err(err) => println!("rejected:        {err}\n"),
  }
  Ok(())
}

/// Streaming through a digest, a typed hasher and a reader.
fn streaming() -> io::Result<()> {
  println!("--- Streaming ---\n");

  let mut digest = catalog::CRC32_ISO.digest();
  digest.update(b"1234");
  digest.update(b"56789");
  println!("digest:          0x{:08X}", digest.finalize());

  let mut hasher = Crc32::new();
  hasher.update(b"12345");
  let saved = hasher.finalize();
  let mut resumed = Crc32::resume(saved);
  resumed.update(b"6789");
  println!("resumed:         0x{:08X}", resumed.finalize());

  let mut reader = catalog::CRC32C.reader(io::Cursor::new(b"123456789".to_vec()));
  io::copy(&mut reader, &mut io::sink())?;
  let mut rest = Vec::new();
  reader.read_to_end(&mut rest)?;
  println!("reader (CRC-32C): 0x{:08X}\n", reader.crc());
  Ok(())
}

/// Append a checksum, then verify the codeword and its residue.
fn codewords() -> Result<(), Box<dyn std::error::Error>> {
  println!("--- Codewords ---\n");

  let engine = &catalog::CRC32_ISO;
  let mut frame = b"123456789".to_vec();
  engine.append_checksum(&mut frame).ok_or("width is not whole bytes")?;
  println!("frame:           {frame:02X?}");
  println!("verify:          {}", engine.verify(&frame));
  println!("residue:         0x{:08X}", engine.residue(&frame));

  frame[3] ^= 0x10;
  println!("after bit flip:  {}", engine.verify(&frame));
  Ok(())
}
