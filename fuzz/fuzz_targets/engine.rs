//! Fuzz target for engine construction and table-driven computation.
//!
//! Arbitrary parameters either fail validation with `InvalidParameter` or
//! build an engine whose output matches the bitwise reference.

#![no_main]

use arbitrary::Arbitrary;
use checksum::{CrcEngine, CrcError, CrcParams, SUPPORTED_WIDTHS, reference};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  width: u8,
  polynomial: u64,
  initial: u64,
  xor_out: u64,
  reflect_in: bool,
  reflect_out: bool,
  data: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let params = CrcParams::new(
    input.width,
    input.polynomial,
    input.initial,
    input.xor_out,
    input.reflect_in,
    input.reflect_out,
  );

  let engine = match CrcEngine::from_params(params) {
    Ok(engine) => engine,
    Err(CrcError::InvalidParameter(_)) => {
      let fits = SUPPORTED_WIDTHS.contains(&input.width)
        && [input.polynomial, input.initial, input.xor_out]
          .iter()
          .all(|&v| v >> input.width == 0);
      assert!(!fits, "valid parameters rejected: {params:?}");
      return;
    }
    Err(err) => panic!("unexpected construction error: {err}"),
  };

  let crc = engine.checksum(&input.data);
  assert_eq!(crc & !engine.mask(), 0, "result wider than register");
  assert_eq!(crc, reference::bitwise(&params, &input.data), "table/bitwise mismatch");
});
