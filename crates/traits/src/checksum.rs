//! Non-cryptographic checksum traits.
//!
//! - **Capability, not type**: call sites hold `&mut dyn Checksum<Output = _>`
//!   or a generic `C: Checksum`, never a concrete accumulator
//! - **Streaming**: incremental updates over arbitrarily chunked input
//! - **Parallelism**: combine operation for independently computed chunks

use core::fmt::Debug;

use crate::error::{OutOfRange, checked_range};

/// Incremental checksum accumulator.
///
/// The trait is object safe. Accumulators that depend on shared, precomputed
/// state (a lookup table owned by an engine) are created by that engine, so
/// construction is not part of the capability.
///
/// # Usage
///
/// ```rust,ignore
/// use checksum::{Checksum, CrcEngine, CrcParams};
///
/// let engine = CrcEngine::from_params(CrcParams::CRC32_ISO_HDLC)?;
/// let mut hasher = engine.new_hasher();
/// hasher.update(b"1234");
/// hasher.update_range(b"xx56789", 2, 5)?;
/// assert_eq!(hasher.finalize(), 0xCBF4_3926);
/// ```
///
/// # Implementor Requirements
///
/// - `update(data)` must equal `update_byte` applied to each byte in order
/// - `finalize()` must not mutate state and must be repeatable
/// - `reset()` must restore the state the accumulator was created with
pub trait Checksum {
  /// The checksum output type.
  type Output: Copy + Eq + Debug;

  /// Consume one byte.
  fn update_byte(&mut self, byte: u8);

  /// Consume a byte sequence.
  ///
  /// This method can be called multiple times to process data incrementally.
  #[inline]
  fn update(&mut self, data: &[u8]) {
    for &byte in data {
      self.update_byte(byte);
    }
  }

  /// Consume `data[offset..offset + len]`.
  ///
  /// Equivalent to [`update`](Self::update) on the sub-slice. Fails without
  /// consuming anything when the range is not inside `data`.
  #[inline]
  fn update_range(&mut self, data: &[u8], offset: usize, len: usize) -> Result<(), OutOfRange> {
    let range = checked_range(data, offset, len)?;
    self.update(range);
    Ok(())
  }

  /// Update the hasher with multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each buffer
  /// in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Update the hasher with `std::io::IoSlice` buffers.
  #[cfg(feature = "std")]
  #[inline]
  fn update_io_slices(&mut self, bufs: &[std::io::IoSlice<'_>]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Return the checksum of everything consumed so far.
  ///
  /// This method does not consume or modify the hasher; further updates
  /// continue from the same state.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  fn reset(&mut self);
}

impl<C: Checksum + ?Sized> Checksum for &mut C {
  type Output = C::Output;

  #[inline]
  fn update_byte(&mut self, byte: u8) {
    (**self).update_byte(byte);
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    (**self).update(data);
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    (**self).finalize()
  }

  #[inline]
  fn reset(&mut self) {
    (**self).reset();
  }
}

/// Checksums that support parallel computation via combination.
///
/// The combine operation computes `crc(A || B)` from `crc(A)`, `crc(B)`, and `len(B)`
/// in O(log n) time. This enables parallel checksum computation:
///
/// 1. Split data into chunks
/// 2. Compute checksums independently
/// 3. Combine results
///
/// # Mathematical Background
///
/// Feeding a zero byte into a CRC register is a linear map over GF(2). For a
/// register seeded with `init`:
///
/// ```text
/// reg(A || B) = Z^len(B) * reg(A) XOR reg(B) XOR Z^len(B) * init
/// ```
///
/// `Z^n` is obtained by square-and-multiply in O(log n) matrix products.
pub trait ChecksumCombine {
  /// The checksum output type.
  type Output: Copy + Eq + Debug;

  /// Combine two checksums.
  ///
  /// Given `crc_a = crc(A)` and `crc_b = crc(B)`, computes `crc(A || B)`.
  ///
  /// # Arguments
  ///
  /// * `crc_a` - Checksum of the first part (A)
  /// * `crc_b` - Checksum of the second part (B)
  /// * `len_b` - Length of the second part in bytes
  #[must_use]
  fn combine(&self, crc_a: Self::Output, crc_b: Self::Output, len_b: usize) -> Self::Output;
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Wrapping byte sum, enough to exercise the default methods.
  #[derive(Default)]
  struct Sum(u32);

  impl Checksum for Sum {
    type Output = u32;

    fn update_byte(&mut self, byte: u8) {
      self.0 = self.0.wrapping_add(u32::from(byte));
    }

    fn finalize(&self) -> u32 {
      self.0
    }

    fn reset(&mut self) {
      self.0 = 0;
    }
  }

  #[test]
  fn update_folds_every_byte() {
    let mut s = Sum::default();
    s.update(&[1, 2, 3]);
    assert_eq!(s.finalize(), 6);
  }

  #[test]
  fn update_range_consumes_only_the_range() {
    let mut s = Sum::default();
    s.update_range(&[10, 20, 30, 40], 1, 2).unwrap();
    assert_eq!(s.finalize(), 50);
  }

  #[test]
  fn update_range_error_consumes_nothing() {
    let mut s = Sum::default();
    s.update_byte(7);
    let err = s.update_range(&[1, 2, 3], 2, 2).unwrap_err();
    assert_eq!(err, OutOfRange::new(2, 2, 3));
    assert_eq!(s.finalize(), 7);
  }

  #[test]
  fn vectored_matches_contiguous() {
    let mut a = Sum::default();
    a.update_vectored(&[b"ab", b"", b"cde"]);
    let mut b = Sum::default();
    b.update(b"abcde");
    assert_eq!(a.finalize(), b.finalize());
  }

  #[test]
  fn dyn_and_mut_ref_dispatch() {
    let mut s = Sum::default();
    {
      let d: &mut dyn Checksum<Output = u32> = &mut s;
      d.update(&[5, 5]);
    }
    let r = &mut s;
    r.update_byte(1);
    assert_eq!(r.finalize(), 11);
    r.reset();
    assert_eq!(s.finalize(), 0);
  }
}
