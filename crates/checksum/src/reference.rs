//! Bitwise reference implementation.
//!
//! This module provides the "source of truth" for CRC computation. It
//! processes one bit at a time with no lookup table, making it:
//!
//! - **Obviously correct**: the loop directly mirrors polynomial long division
//! - **Audit-friendly**: a dozen lines, no precomputed state
//! - **Const-evaluable**: can verify check values at compile time
//!
//! The table-driven [`CrcEngine`](crate::CrcEngine) must produce identical
//! results for every parameter set. This is intentionally slow (~8 operations
//! per bit); use it as a test oracle, not for throughput.

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use crate::{
  params::{CHECK_INPUT, CrcParams},
  reflect::reverse_bits,
};

/// Bitwise, MSB-first CRC over `data` with the given parameters.
///
/// Accepts any width in `8..=64` and does not validate; the result is the
/// finalized checksum (output reflection and final XOR applied).
#[must_use]
pub const fn bitwise(params: &CrcParams, data: &[u8]) -> u64 {
  let mask = params.mask();
  let top = params.top_bit();
  let shift = params.width as u32 - 8;

  let mut crc = params.initial & mask;
  let mut i: usize = 0;
  while i < data.len() {
    let byte = if params.reflect_in {
      data[i].reverse_bits()
    } else {
      data[i]
    };
    crc ^= (byte as u64) << shift;
    let mut bit: u32 = 0;
    while bit < 8 {
      crc = if crc & top != 0 {
        ((crc << 1) ^ params.polynomial) & mask
      } else {
        (crc << 1) & mask
      };
      bit += 1;
    }
    i += 1;
  }

  if params.reflect_out {
    crc = reverse_bits(crc, params.width as u32);
  }
  (crc ^ params.xor_out) & mask
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

// If these fail, the build fails.

const _: () = assert!(bitwise(&CrcParams::CRC8_SMBUS, CHECK_INPUT) == 0xF4);
const _: () = assert!(bitwise(&CrcParams::CRC16_IBM_3740, CHECK_INPUT) == 0x29B1);
const _: () = assert!(bitwise(&CrcParams::CRC32_ISO_HDLC, CHECK_INPUT) == 0xCBF4_3926);
