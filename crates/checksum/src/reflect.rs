//! Bit reflection.
//!
//! "Reflected" CRC variants process each byte least-significant bit first.
//! The engine keeps its register MSB-first and instead reverses input bytes
//! and the final register value when a variant asks for it.

/// Reverse the order of the lowest `num_bits` bits of `value`.
///
/// Bit 0 swaps with bit `num_bits - 1`, bit 1 with bit `num_bits - 2`, and so
/// on. Bits at or above `num_bits` in the input are ignored and the result
/// never has them set. Total for `num_bits` in `0..=64`; larger counts are
/// clamped to 64.
///
/// # Examples
///
/// ```
/// use checksum::reflect::reverse_bits;
///
/// assert_eq!(reverse_bits(0b0001, 4), 0b1000);
/// assert_eq!(reverse_bits(0x04C1_1DB7, 32), 0xEDB8_8320);
/// // Bits above `num_bits` do not leak into the result.
/// assert_eq!(reverse_bits(0xF01, 8), 0x80);
/// ```
#[inline]
#[must_use]
pub const fn reverse_bits(value: u64, num_bits: u32) -> u64 {
  if num_bits == 0 {
    return 0;
  }
  let num_bits = if num_bits > u64::BITS { u64::BITS } else { num_bits };
  value.reverse_bits() >> (u64::BITS - num_bits)
}

/// Reverse the 8 bits of an input byte.
#[inline]
#[must_use]
pub const fn reverse_byte(byte: u8) -> u8 {
  byte.reverse_bits()
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Bit-by-bit reversal, obviously correct.
  fn naive(value: u64, num_bits: u32) -> u64 {
    let mut out = 0u64;
    for i in 0..num_bits {
      if (value >> i) & 1 != 0 {
        out |= 1 << (num_bits - 1 - i);
      }
    }
    out
  }

  #[test]
  fn known_values() {
    assert_eq!(reverse_bits(0b1010, 4), 0b0101);
    assert_eq!(reverse_bits(0b1100, 4), 0b0011);
    assert_eq!(reverse_bits(0xFF, 8), 0xFF);
    assert_eq!(reverse_bits(0x80, 8), 0x01);
    assert_eq!(reverse_bits(0x1021, 16), 0x8408);
    assert_eq!(reverse_bits(0x1EDC_6F41, 32), 0x82F6_3B78);
  }

  #[test]
  fn zero_width_is_zero() {
    assert_eq!(reverse_bits(u64::MAX, 0), 0);
  }

  #[test]
  fn high_bits_are_ignored() {
    assert_eq!(reverse_bits(0xFFFF_FF00, 8), 0);
    assert_eq!(reverse_bits(u64::MAX, 63), (1 << 63) - 1);
  }

  #[test]
  fn matches_naive_for_every_width() {
    let samples = [0u64, 1, 0x8000_0000_0000_0001, 0x0123_4567_89AB_CDEF, u64::MAX];
    for num_bits in 0..=63 {
      for &v in &samples {
        let v = v & ((1u64 << num_bits) - 1);
        assert_eq!(reverse_bits(v, num_bits), naive(v, num_bits), "num_bits={num_bits} v={v:#x}");
      }
    }
  }

  #[test]
  fn byte_reversal() {
    for b in 0..=255u8 {
      assert_eq!(u64::from(reverse_byte(b)), reverse_bits(u64::from(b), 8));
    }
  }
}
