//! Table-driven CRC engine and its hashers.
//!
//! A [`CrcEngine`] owns one variant's parameters, masks and lookup table and
//! is immutable once built. Each [`Hasher`] borrows the engine and owns only
//! its running register, so any number of hashers can share one table, and
//! an engine can be shared across threads while every thread drives its own
//! hasher.

use core::fmt;

use traits::{Checksum, ChecksumCombine, error::checked_range};

use crate::{
  combine::Gf2Matrix,
  error::CrcError,
  params::{CHECK_INPUT, CrcParams},
  reflect::{reverse_bits, reverse_byte},
  table::{CrcTable, generate_table},
};

/// A CRC variant with its precomputed lookup table.
///
/// # Example
///
/// ```
/// use checksum::CrcEngine;
///
/// // CRC-16/CCITT-FALSE
/// let engine = CrcEngine::new(16, 0x1021, 0xFFFF, 0x0000, false, false)?;
///
/// let mut hasher = engine.new_hasher();
/// hasher.update(b"12345");
/// hasher.update(b"6789");
/// assert_eq!(hasher.finalize(), 0x29B1);
/// assert_eq!(engine.checksum(b"123456789"), 0x29B1);
/// # Ok::<(), checksum::CrcError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct CrcEngine {
  params: CrcParams,
  table: CrcTable,
  /// Low `width` bits set.
  mask: u64,
  /// Only bit `width - 1` set.
  msb_mask: u64,
  /// Distance from bit 0 to the register's top byte (`width - 8`).
  shift: u32,
}

impl CrcEngine {
  /// Build an engine from raw parameters.
  ///
  /// # Errors
  ///
  /// [`CrcError::InvalidParameter`] when `width` is not 8, 16, or 32, or when
  /// `polynomial`, `initial`, or `xor_out` has bits set above `width`.
  pub fn new(
    width: u8,
    polynomial: u64,
    initial: u64,
    xor_out: u64,
    reflect_in: bool,
    reflect_out: bool,
  ) -> Result<Self, CrcError> {
    Self::from_params(CrcParams::new(
      width,
      polynomial,
      initial,
      xor_out,
      reflect_in,
      reflect_out,
    ))
  }

  /// Build an engine from a parameter set, e.g. a catalogue preset.
  ///
  /// # Errors
  ///
  /// Same as [`CrcEngine::new`].
  pub fn from_params(params: CrcParams) -> Result<Self, CrcError> {
    if let Err(err) = params.validate() {
      tracing::debug!(%err, width = params.width, "rejected CRC parameters");
      return Err(err);
    }

    let engine = Self {
      params,
      table: generate_table(params.width, params.polynomial),
      mask: params.mask(),
      msb_mask: params.top_bit(),
      shift: u32::from(params.width) - 8,
    };
    tracing::debug!(
      width = params.width,
      polynomial = params.polynomial,
      reflect_in = params.reflect_in,
      reflect_out = params.reflect_out,
      "built CRC lookup table"
    );
    Ok(engine)
  }

  /// A fresh hasher seeded with the variant's initial value.
  #[inline]
  #[must_use]
  pub const fn new_hasher(&self) -> Hasher<'_> {
    Hasher {
      engine: self,
      current: self.params.initial,
    }
  }

  /// A hasher that continues from a previously finalized checksum.
  ///
  /// `resume(crc(A))` followed by `update(B)` finalizes to `crc(A || B)`.
  /// Bits of `crc` above the register width are ignored.
  #[inline]
  #[must_use]
  pub const fn resume(&self, crc: u64) -> Hasher<'_> {
    Hasher {
      engine: self,
      current: self.unfinalize(crc),
    }
  }

  /// Compute the checksum of `data` in one shot.
  #[inline]
  #[must_use]
  pub fn checksum(&self, data: &[u8]) -> u64 {
    let mut hasher = self.new_hasher();
    hasher.update(data);
    hasher.finalize()
  }

  /// The variant's check value: the checksum of ASCII `"123456789"`.
  #[inline]
  #[must_use]
  pub fn check(&self) -> u64 {
    self.checksum(CHECK_INPUT)
  }

  #[inline]
  #[must_use]
  pub const fn params(&self) -> &CrcParams {
    &self.params
  }

  #[inline]
  #[must_use]
  pub const fn width(&self) -> u8 {
    self.params.width
  }

  /// The 256-entry lookup table.
  #[inline]
  #[must_use]
  pub const fn table(&self) -> &CrcTable {
    &self.table
  }

  /// Mask with the low `width` bits set.
  #[inline]
  #[must_use]
  pub const fn mask(&self) -> u64 {
    self.mask
  }

  /// Mask with only the register's top bit set.
  #[inline]
  #[must_use]
  pub const fn msb_mask(&self) -> u64 {
    self.msb_mask
  }

  /// Fold one input byte into a raw register value.
  #[inline]
  #[allow(clippy::indexing_slicing)] // u8 index into a 256-entry table
  const fn step(&self, reg: u64, byte: u8) -> u64 {
    let val = if self.params.reflect_in { reverse_byte(byte) } else { byte };
    let temp = (reg ^ ((val as u64) << self.shift)) & self.mask;
    let pos = ((temp >> self.shift) & 0xFF) as u8;
    let temp = (temp << 8) & self.mask;
    (temp ^ self.table[pos as usize]) & self.mask
  }

  /// Raw register to externally visible checksum.
  #[inline]
  const fn finalize_register(&self, reg: u64) -> u64 {
    let value = if self.params.reflect_out {
      reverse_bits(reg, self.params.width as u32)
    } else {
      reg
    };
    (value ^ self.params.xor_out) & self.mask
  }

  /// Inverse of [`finalize_register`](Self::finalize_register).
  #[inline]
  const fn unfinalize(&self, crc: u64) -> u64 {
    let value = (crc ^ self.params.xor_out) & self.mask;
    if self.params.reflect_out {
      reverse_bits(value, self.params.width as u32)
    } else {
      value
    }
  }

  /// The linear map "feed one zero byte" acting on raw register values.
  fn zero_byte_matrix(&self) -> Gf2Matrix {
    Gf2Matrix::from_columns(u32::from(self.params.width), |reg| self.step(reg, 0))
  }
}

impl ChecksumCombine for CrcEngine {
  type Output = u64;

  fn combine(&self, crc_a: u64, crc_b: u64, len_b: usize) -> u64 {
    if len_b == 0 {
      return crc_a & self.mask;
    }
    let zeros = self.zero_byte_matrix().pow(len_b);
    // Appending B shifts A's register through len(B) zero bytes; B's own
    // register already carries the initial value shifted the same way, so it
    // cancels with the shifted seed.
    let reg_a = self.unfinalize(crc_a);
    let reg_b = self.unfinalize(crc_b);
    let reg = zeros.mul_vec(reg_a ^ self.params.initial) ^ reg_b;
    self.finalize_register(reg & self.mask)
  }
}

impl fmt::Debug for CrcEngine {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CrcEngine")
      .field("params", &self.params)
      .field("mask", &format_args!("{:#x}", self.mask))
      .finish_non_exhaustive()
  }
}

/// An incremental checksum computation over one [`CrcEngine`].
///
/// Holds a shared reference to the engine's table and its own register.
/// Cloning a hasher forks the computation; the clones evolve independently.
#[derive(Clone)]
pub struct Hasher<'a> {
  engine: &'a CrcEngine,
  current: u64,
}

impl<'a> Hasher<'a> {
  /// The engine this hasher draws its table from.
  #[inline]
  #[must_use]
  pub const fn engine(&self) -> &'a CrcEngine {
    self.engine
  }

  /// Consume one byte.
  #[inline]
  pub fn update_byte(&mut self, byte: u8) {
    self.current = self.engine.step(self.current, byte);
  }

  /// Consume a byte sequence, in order.
  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    let engine = self.engine;
    self.current = data.iter().fold(self.current, |reg, &byte| engine.step(reg, byte));
  }

  /// Consume `data[offset..offset + len]`.
  ///
  /// # Errors
  ///
  /// [`CrcError::IndexOutOfRange`] if the range does not lie inside `data`
  /// (including when `offset + len` overflows). Nothing is consumed then.
  #[inline]
  pub fn update_range(&mut self, data: &[u8], offset: usize, len: usize) -> Result<(), CrcError> {
    let range = checked_range(data, offset, len)?;
    self.update(range);
    Ok(())
  }

  /// The checksum of everything consumed so far.
  ///
  /// Applies output reflection and the final XOR to a copy of the register;
  /// the hasher itself is untouched and can keep consuming input.
  #[inline]
  #[must_use]
  pub const fn finalize(&self) -> u64 {
    self.engine.finalize_register(self.current)
  }

  /// Return to the engine's initial value. The table is not touched.
  #[inline]
  pub const fn reset(&mut self) {
    self.current = self.engine.params.initial;
  }
}

impl fmt::Debug for Hasher<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Hasher")
      .field("width", &self.engine.params.width)
      .field("current", &format_args!("{:#x}", self.current))
      .finish_non_exhaustive()
  }
}

impl Checksum for Hasher<'_> {
  type Output = u64;

  #[inline]
  fn update_byte(&mut self, byte: u8) {
    Hasher::update_byte(self, byte);
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    Hasher::update(self, data);
  }

  #[inline]
  fn finalize(&self) -> u64 {
    Hasher::finalize(self)
  }

  #[inline]
  fn reset(&mut self) {
    Hasher::reset(self);
  }
}

#[cfg(feature = "std")]
impl std::io::Write for Hasher<'_> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    self.update(buf);
    Ok(buf.len())
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}
