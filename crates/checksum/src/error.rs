//! Errors raised by the CRC engine.

use thiserror::Error;
pub use traits::OutOfRange;

/// Why a parameter set was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[non_exhaustive]
pub enum InvalidParameter {
  /// The register width is not one of 8, 16, or 32.
  #[error("unsupported CRC width {width}, expected 8, 16, or 32")]
  UnsupportedWidth { width: u8 },
  /// A parameter has bits set above the register width.
  #[error("{field} 0x{value:X} does not fit in {width} bits")]
  ValueTooWide {
    field: &'static str,
    value: u64,
    width: u8,
  },
}

/// Errors returned by [`CrcEngine`](crate::CrcEngine) and [`Hasher`](crate::Hasher).
///
/// Construction is the only fallible step of an engine; once built, the only
/// runtime failure is a caller asking for a range outside its buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[non_exhaustive]
pub enum CrcError {
  #[error("invalid CRC parameter: {0}")]
  InvalidParameter(#[from] InvalidParameter),
  #[error(transparent)]
  IndexOutOfRange(#[from] OutOfRange),
}
