//! GF(2) matrix operations for CRC combination.
//!
//! When you have `crc(A)` and `crc(B)`, you can compute `crc(A || B)` without
//! reprocessing `A`. Feeding a zero byte into the register is a linear map over
//! GF(2); raising its matrix to the `len(B)`-th power by square-and-multiply
//! gives the effect of `len(B)` zero bytes in O(log n) matrix products.

/// A square GF(2) matrix of dimension `dim <= 64`, stored by columns.
///
/// Column `i` is the image of the unit vector `1 << i`. Columns at or above
/// `dim` are zero and vectors are expected to have no bits set there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Gf2Matrix {
  cols: [u64; 64],
  dim: u32,
}

impl Gf2Matrix {
  /// The identity matrix.
  #[must_use]
  pub(crate) fn identity(dim: u32) -> Self {
    Self::from_columns(dim, |v| v)
  }

  /// Matrix of a linear map given as a function on vectors.
  #[must_use]
  pub(crate) fn from_columns(dim: u32, map: impl Fn(u64) -> u64) -> Self {
    let dim = dim.min(u64::BITS);
    let mut cols = [0u64; 64];
    for (i, col) in cols.iter_mut().take(dim as usize).enumerate() {
      *col = map(1u64 << i);
    }
    Self { cols, dim }
  }

  /// Multiply matrix by a vector.
  #[inline]
  #[must_use]
  pub(crate) fn mul_vec(&self, vec: u64) -> u64 {
    self
      .cols
      .iter()
      .take(self.dim as usize)
      .enumerate()
      .filter(|&(i, _)| (vec >> i) & 1 != 0)
      .fold(0, |acc, (_, col)| acc ^ col)
  }

  /// Multiply two matrices (`self * other`).
  #[must_use]
  pub(crate) fn mul_mat(&self, other: &Self) -> Self {
    let mut cols = [0u64; 64];
    for (out, &col) in cols.iter_mut().zip(other.cols.iter()).take(self.dim as usize) {
      *out = self.mul_vec(col);
    }
    Self { cols, dim: self.dim }
  }

  #[inline]
  #[must_use]
  pub(crate) fn square(&self) -> Self {
    self.mul_mat(self)
  }

  /// `self` raised to the `n`-th power by square-and-multiply.
  #[must_use]
  pub(crate) fn pow(&self, mut n: usize) -> Self {
    let mut base = *self;
    let mut result = Self::identity(self.dim);
    while n > 0 {
      if n & 1 != 0 {
        result = result.mul_mat(&base);
      }
      n >>= 1;
      if n > 0 {
        base = base.square();
      }
    }
    result
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  /// x -> x << 1 within `dim` bits (drops the top bit).
  fn shift_left(dim: u32) -> Gf2Matrix {
    let mask = (1u64 << dim) - 1;
    Gf2Matrix::from_columns(dim, |v| (v << 1) & mask)
  }

  #[test]
  fn identity_is_neutral() {
    let m = shift_left(16);
    let id = Gf2Matrix::identity(16);
    assert_eq!(m.mul_mat(&id), m);
    assert_eq!(id.mul_mat(&m), m);
    assert_eq!(id.mul_vec(0xBEEF), 0xBEEF);
  }

  #[test]
  fn pow_matches_repeated_application() {
    let m = shift_left(8);
    for n in 0..12 {
      let expected = if n >= 8 { 0 } else { (0x01u64 << n) & 0xFF };
      assert_eq!(m.pow(n).mul_vec(0x01), expected, "n={n}");
    }
  }

  #[test]
  fn rotation_has_period_dim() {
    let dim = 32;
    let mask = (1u64 << dim) - 1;
    let rotl = Gf2Matrix::from_columns(dim, |v| ((v << 1) | (v >> (dim - 1))) & mask);
    assert_eq!(rotl.pow(32), Gf2Matrix::identity(dim));
    assert_eq!(rotl.pow(33), rotl);
    assert_eq!(rotl.pow(5).mul_vec(0x8000_0001), 0x30);
  }

  #[test]
  fn mul_vec_is_linear() {
    let rotl = Gf2Matrix::from_columns(16, |v| ((v << 3) | (v >> 13)) & 0xFFFF);
    let (a, b) = (0x1234u64, 0xF0F0u64);
    assert_eq!(rotl.mul_vec(a ^ b), rotl.mul_vec(a) ^ rotl.mul_vec(b));
  }
}
