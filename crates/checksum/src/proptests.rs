//! Property tests for the engine against its own invariants and against the
//! `crc` crate as an independent implementation.

extern crate std;

use std::{boxed::Box, vec::Vec};

use crc::{Algorithm, Crc};
use proptest::prelude::*;
use traits::{Checksum, ChecksumCombine};

use crate::{CrcEngine, CrcParams, SUPPORTED_WIDTHS, reference, reflect::reverse_bits};

/// Any parameter set the engine accepts.
fn arb_params() -> impl Strategy<Value = CrcParams> {
  (
    prop::sample::select(SUPPORTED_WIDTHS.to_vec()),
    any::<u64>(),
    any::<u64>(),
    any::<u64>(),
    any::<bool>(),
    any::<bool>(),
  )
    .prop_map(|(width, poly, init, xor_out, reflect_in, reflect_out)| {
      let mask = (1u64 << width) - 1;
      CrcParams::new(width, poly & mask, init & mask, xor_out & mask, reflect_in, reflect_out)
    })
}

fn arb_data() -> impl Strategy<Value = Vec<u8>> {
  prop::collection::vec(any::<u8>(), 0..=2048)
}

/// Run the `crc` crate with the same parameters.
///
/// `crc` wants a `&'static Algorithm`, so the descriptor is leaked; fine for tests.
fn crc_crate(params: &CrcParams, data: &[u8]) -> u64 {
  macro_rules! run {
    ($w:ty) => {{
      let alg: &'static Algorithm<$w> = Box::leak(Box::new(Algorithm {
        width: params.width,
        poly: params.polynomial as $w,
        init: params.initial as $w,
        refin: params.reflect_in,
        refout: params.reflect_out,
        xorout: params.xor_out as $w,
        check: 0,
        residue: 0,
      }));
      u64::from(Crc::<$w>::new(alg).checksum(data))
    }};
  }

  match params.width {
    8 => run!(u8),
    16 => run!(u16),
    32 => run!(u32),
    w => panic!("unsupported width {w}"),
  }
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  #[test]
  fn matches_bitwise_reference(params in arb_params(), data in arb_data()) {
    let engine = CrcEngine::from_params(params).unwrap();
    prop_assert_eq!(engine.checksum(&data), reference::bitwise(&params, &data));
  }

  #[test]
  fn matches_crc_crate(params in arb_params(), data in arb_data()) {
    let engine = CrcEngine::from_params(params).unwrap();
    prop_assert_eq!(engine.checksum(&data), crc_crate(&params, &data));
  }

  #[test]
  fn chunking_is_irrelevant(params in arb_params(), data in arb_data(), chunk in 1usize..=97) {
    let engine = CrcEngine::from_params(params).unwrap();
    let mut hasher = engine.new_hasher();
    for part in data.chunks(chunk) {
      hasher.update(part);
    }
    prop_assert_eq!(hasher.finalize(), engine.checksum(&data));
  }

  #[test]
  fn update_range_equals_subslice(
    params in arb_params(),
    data in arb_data(),
    a in any::<prop::sample::Index>(),
    b in any::<prop::sample::Index>(),
  ) {
    let engine = CrcEngine::from_params(params).unwrap();
    let (start, end) = {
      let x = a.index(data.len() + 1);
      let y = b.index(data.len() + 1);
      (x.min(y), x.max(y))
    };
    let mut hasher = engine.new_hasher();
    hasher.update_range(&data, start, end - start).unwrap();
    prop_assert_eq!(hasher.finalize(), engine.checksum(&data[start..end]));
  }

  #[test]
  fn out_of_range_never_consumes(params in arb_params(), data in arb_data(), extra in 1usize..64) {
    let engine = CrcEngine::from_params(params).unwrap();
    let mut hasher = engine.new_hasher();
    hasher.update(&data);
    let before = hasher.finalize();
    prop_assert!(hasher.update_range(&data, 0, data.len() + extra).is_err());
    prop_assert!(hasher.update_range(&data, data.len() + extra, 0).is_err());
    prop_assert_eq!(hasher.finalize(), before);
  }

  #[test]
  fn finalize_does_not_mutate(params in arb_params(), data in arb_data(), split in any::<prop::sample::Index>()) {
    let engine = CrcEngine::from_params(params).unwrap();
    let split = split.index(data.len() + 1);
    let mut hasher = engine.new_hasher();
    hasher.update(&data[..split]);
    let _ = hasher.finalize();
    let _ = hasher.finalize();
    hasher.update(&data[split..]);
    prop_assert_eq!(hasher.finalize(), engine.checksum(&data));
  }

  #[test]
  fn reset_is_a_fresh_hasher(params in arb_params(), junk in arb_data(), data in arb_data()) {
    let engine = CrcEngine::from_params(params).unwrap();
    let mut hasher = engine.new_hasher();
    hasher.update(&junk);
    hasher.reset();
    hasher.update(&data);
    prop_assert_eq!(hasher.finalize(), engine.checksum(&data));
  }

  #[test]
  fn tables_are_deterministic(params in arb_params()) {
    let a = CrcEngine::from_params(params).unwrap();
    let b = CrcEngine::from_params(params).unwrap();
    prop_assert_eq!(a.table(), b.table());
    prop_assert!(a.table().iter().all(|&entry| entry & !a.mask() == 0));
  }

  #[test]
  fn hashers_do_not_interfere(params in arb_params(), x in arb_data(), y in arb_data()) {
    let engine = CrcEngine::from_params(params).unwrap();
    let mut hx = engine.new_hasher();
    let mut hy = engine.new_hasher();
    for (cx, cy) in x.chunks(7).zip(y.chunks(5)) {
      hx.update(cx);
      hy.update(cy);
    }
    let consumed_x = x.chunks(7).zip(y.chunks(5)).map(|(c, _)| c.len()).sum::<usize>();
    let consumed_y = x.chunks(7).zip(y.chunks(5)).map(|(_, c)| c.len()).sum::<usize>();
    prop_assert_eq!(hx.finalize(), engine.checksum(&x[..consumed_x]));
    prop_assert_eq!(hy.finalize(), engine.checksum(&y[..consumed_y]));
  }

  #[test]
  fn reflection_is_an_involution(x in any::<u64>(), n in 0u32..=63) {
    let x = x & ((1u64 << n) - 1);
    prop_assert_eq!(reverse_bits(reverse_bits(x, n), n), x);
  }

  #[test]
  fn results_fit_width(params in arb_params(), data in arb_data()) {
    let engine = CrcEngine::from_params(params).unwrap();
    prop_assert_eq!(engine.checksum(&data) & !engine.mask(), 0);
  }

  #[test]
  fn resume_continues(params in arb_params(), data in arb_data(), split in any::<prop::sample::Index>()) {
    let engine = CrcEngine::from_params(params).unwrap();
    let (a, b) = data.split_at(split.index(data.len() + 1));
    let mut resumed = engine.resume(engine.checksum(a));
    resumed.update(b);
    prop_assert_eq!(resumed.finalize(), engine.checksum(&data));
  }

  #[test]
  fn combine_equals_concatenation(params in arb_params(), data in arb_data(), split in any::<prop::sample::Index>()) {
    let engine = CrcEngine::from_params(params).unwrap();
    let (a, b) = data.split_at(split.index(data.len() + 1));
    let combined = engine.combine(engine.checksum(a), engine.checksum(b), b.len());
    prop_assert_eq!(combined, engine.checksum(&data));
  }

  #[test]
  fn trait_object_matches_inherent(params in arb_params(), data in arb_data()) {
    let engine = CrcEngine::from_params(params).unwrap();
    let mut hasher = engine.new_hasher();
    let dynamic: &mut dyn Checksum<Output = u64> = &mut hasher;
    for &byte in &data {
      dynamic.update_byte(byte);
    }
    prop_assert_eq!(dynamic.finalize(), engine.checksum(&data));
  }
}
