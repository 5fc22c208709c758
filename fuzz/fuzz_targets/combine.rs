//! Fuzz target for CRC combine operations.
//!
//! Tests combine chains and resume with multiple splits.

#![no_main]

use arbitrary::Arbitrary;
use checksum::{CATALOGUE, ChecksumCombine, CrcEngine};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  preset: u8,
  data: Vec<u8>,
  splits: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let entry = &CATALOGUE[usize::from(input.preset) % CATALOGUE.len()];
  let Ok(engine) = CrcEngine::from_params(entry.params) else {
    panic!("catalogue entry {} failed validation", entry.name);
  };
  let expected = engine.checksum(data);

  // Normalize splits to valid range and sort
  let mut splits: Vec<usize> = input.splits.iter().map(|s| s % (data.len() + 1)).collect();
  splits.sort_unstable();
  splits.dedup();

  let mut chunks = Vec::new();
  let mut prev = 0;
  for &split in &splits {
    if split > prev {
      chunks.push(&data[prev..split]);
      prev = split;
    }
  }
  chunks.push(&data[prev..]);

  let mut combined = engine.checksum(chunks[0]);
  let mut resumed = engine.new_hasher();
  resumed.update(chunks[0]);
  for chunk in &chunks[1..] {
    combined = engine.combine(combined, engine.checksum(chunk), chunk.len());
    resumed = engine.resume(resumed.finalize());
    resumed.update(chunk);
  }

  assert_eq!(combined, expected, "{} combine chain mismatch", entry.name);
  assert_eq!(resumed.finalize(), expected, "{} resume chain mismatch", entry.name);
});
