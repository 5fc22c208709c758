//! Fuzz target for the streaming hasher API.
//!
//! Arbitrary `update_range` calls, valid or not, must leave the hasher in
//! the same state as feeding only the in-bounds ranges.

#![no_main]

use arbitrary::Arbitrary;
use checksum::{CATALOGUE, CrcEngine};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  preset: u8,
  data: Vec<u8>,
  /// (offset, len) pairs, possibly out of bounds
  ranges: Vec<(u16, u16)>,
}

fuzz_target!(|input: Input| {
  let entry = &CATALOGUE[usize::from(input.preset) % CATALOGUE.len()];
  let Ok(engine) = CrcEngine::from_params(entry.params) else {
    panic!("catalogue entry {} failed validation", entry.name);
  };
  let data = &input.data;

  let mut hasher = engine.new_hasher();
  let mut accepted = Vec::new();

  for &(offset, len) in &input.ranges {
    let (offset, len) = (usize::from(offset), usize::from(len));
    let in_bounds = offset + len <= data.len();
    let result = hasher.update_range(data, offset, len);
    assert_eq!(result.is_ok(), in_bounds, "{} range {offset}+{len} of {}", entry.name, data.len());
    if in_bounds {
      accepted.extend_from_slice(&data[offset..offset + len]);
    }
  }

  assert_eq!(hasher.finalize(), engine.checksum(&accepted), "{} streaming mismatch", entry.name);

  hasher.reset();
  hasher.update(data);
  assert_eq!(hasher.finalize(), engine.checksum(data), "{} reset mismatch", entry.name);
});
