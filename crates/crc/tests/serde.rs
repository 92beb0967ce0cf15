#![cfg(feature = "serde")]

use crc_engine::{CrcEngine, CrcParams};

#[test]
fn params_deserialize_from_config() {
  let json = r#"{
    "width": 16,
    "polynomial": 32773,
    "initial": 65535,
    "reflect_in": true,
    "reflect_out": true,
    "xor_out": 0
  }"#;
  let params: CrcParams = serde_json::from_str(json).unwrap();
  let engine = CrcEngine::new(params).unwrap();
  // CRC-16/MODBUS.
  assert_eq!(engine.compute(b"123456789"), 0x4B37);
}

#[test]
fn params_round_trip() {
  let json = serde_json::to_string(&CrcParams::CRC32C).unwrap();
  let back: CrcParams = serde_json::from_str(&json).unwrap();
  assert_eq!(back, CrcParams::CRC32C);
}

#[test]
fn invalid_config_is_rejected_by_the_engine() {
  let json = r#"{"width":8,"polynomial":263,"initial":0,"reflect_in":false,"reflect_out":false,"xor_out":0}"#;
  let params: CrcParams = serde_json::from_str(json).unwrap();
  let err = CrcEngine::new(params).unwrap_err();
  assert_eq!(err.to_string(), "polynomial 0x107 does not fit in 8 bits");
}
