//! Const-fn CRC lookup table generation.
//!
//! One 256-entry table per variant. Entry `d` is the register reached by
//! placing byte `d` in the top byte of a zero register and running eight
//! steps of MSB-first polynomial division over GF(2). With the table, a byte
//! update becomes one lookup, one shift and one XOR instead of an 8-step loop.
//!
//! The register always runs MSB-first; reflected variants reverse their input
//! bytes instead of using a reflected table.

// SAFETY: All array indexing in this module uses bounded loop indices (0..256).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

/// A 256-entry lookup table. Every entry holds at most `width` significant bits.
pub type CrcTable = [u64; 256];

/// Generate a single lookup table entry.
///
/// Intermediate shifts are left unmasked, as in long division; only bit
/// `width - 1` decides whether the polynomial is subtracted, so carries above
/// the register never influence the result. The final value is masked.
///
/// `width` must be in `8..=64`.
#[must_use]
pub const fn table_entry(width: u8, poly: u64, index: u8) -> u64 {
  let mask = width_mask(width);
  let top = 1u64 << (width - 1);
  let mut reg = ((index as u64) << (width - 8)) & mask;
  let mut bit = 0;
  while bit < 8 {
    if reg & top != 0 {
      reg = (reg << 1) ^ poly;
    } else {
      reg <<= 1;
    }
    bit += 1;
  }
  reg & mask
}

/// Generate the full lookup table for `(width, poly)`.
///
/// `width` must be in `8..=64`.
#[must_use]
pub const fn generate_table(width: u8, poly: u64) -> CrcTable {
  let mut table = [0u64; 256];
  let mut i = 0usize;
  while i < 256 {
    table[i] = table_entry(width, poly, i as u8);
    i += 1;
  }
  table
}

#[inline]
const fn width_mask(width: u8) -> u64 {
  if width >= 64 { u64::MAX } else { (1u64 << width) - 1 }
}
