//! Error types shared by checksum implementations.
//!
//! Individual crates wrap these in their own error enums as needed.

use thiserror::Error;

/// A requested sub-range does not lie inside the input buffer.
///
/// Returned by [`Checksum::update_range`](crate::Checksum::update_range) when
/// `offset + len` overflows or exceeds the buffer length. No bytes are
/// consumed when this is returned.
///
/// # Examples
///
/// ```
/// use traits::OutOfRange;
///
/// let err = OutOfRange::new(4, 8, 10);
/// assert_eq!(err.end(), Some(12));
/// assert_eq!(
///   err.to_string(),
///   "range 4+8 out of bounds for buffer of length 10"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("range {offset}+{len} out of bounds for buffer of length {buf_len}")]
pub struct OutOfRange {
  /// First requested index.
  pub offset: usize,
  /// Requested number of bytes.
  pub len: usize,
  /// Length of the buffer the range was taken from.
  pub buf_len: usize,
}

impl OutOfRange {
  #[inline]
  #[must_use]
  pub const fn new(offset: usize, len: usize, buf_len: usize) -> Self {
    Self { offset, len, buf_len }
  }

  /// Exclusive end of the requested range, or `None` if it overflows `usize`.
  #[inline]
  #[must_use]
  pub const fn end(&self) -> Option<usize> {
    self.offset.checked_add(self.len)
  }
}

/// Resolve `offset..offset + len` inside `data`.
///
/// Overflow-safe: an `offset + len` that wraps is reported like any other
/// out-of-bounds range.
#[inline]
pub fn checked_range(data: &[u8], offset: usize, len: usize) -> Result<&[u8], OutOfRange> {
  offset
    .checked_add(len)
    .and_then(|end| data.get(offset..end))
    .ok_or(OutOfRange::new(offset, len, data.len()))
}
