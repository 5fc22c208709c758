//! CRC algorithm parameters.
//!
//! This module defines the parameters for CRC variants following the
//! conventions of the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/),
//! plus named presets for the widths the engine supports.

use crate::{
  error::{CrcError, InvalidParameter},
  reflect::reverse_bits,
};

/// Register widths the engine accepts.
pub const SUPPORTED_WIDTHS: [u8; 3] = [8, 16, 32];

/// Standard input for catalogue check values.
pub const CHECK_INPUT: &[u8] = b"123456789";

/// CRC algorithm parameters.
///
/// This struct captures all the parameters needed to define a CRC variant.
///
/// # Parameters
///
/// - `width`: Number of bits in the CRC (8, 16, or 32)
/// - `polynomial`: The generator polynomial (without the implicit high bit), MSB-first
/// - `initial`: Initial value for the CRC register
/// - `xor_out`: Value to XOR with the final CRC
/// - `reflect_in`: If true, reflect each input byte before processing
/// - `reflect_out`: If true, reflect the final CRC before XOR
///
/// # Reflection
///
/// "Reflected" means bit-reversed. Most common CRCs (CRC-32, CRC-32C) use
/// reflected input and output. The polynomial is always given in its normal
/// (MSB-first) form; reflection is applied to data, not to the polynomial.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct CrcParams {
  /// Width in bits (8, 16, or 32).
  pub width: u8,
  /// Generator polynomial (without implicit high bit).
  pub polynomial: u64,
  /// Initial value for the CRC register.
  pub initial: u64,
  /// XOR value applied to final CRC.
  pub xor_out: u64,
  /// Reflect input bytes before processing.
  pub reflect_in: bool,
  /// Reflect final CRC before XOR.
  pub reflect_out: bool,
}

impl CrcParams {
  /// CRC-8/SMBUS - SMBus packet error checking, plain "CRC-8"
  pub const CRC8_SMBUS: Self = Self::new(8, 0x07, 0x00, 0x00, false, false);

  /// CRC-8/MAXIM-DOW - 1-Wire, iButton, sensor networks
  pub const CRC8_MAXIM_DOW: Self = Self::new(8, 0x31, 0x00, 0x00, true, true);

  /// CRC-8/AUTOSAR - AUTOSAR E2E profiles
  pub const CRC8_AUTOSAR: Self = Self::new(8, 0x2F, 0xFF, 0xFF, false, false);

  /// CRC-16/IBM-3740 (a.k.a. CCITT-FALSE) - X.25 framing, Bluetooth, SD cards
  pub const CRC16_IBM_3740: Self = Self::new(16, 0x1021, 0xFFFF, 0x0000, false, false);

  /// CRC-16/ARC (a.k.a. IBM) - ARC, LHA, many legacy protocols
  pub const CRC16_ARC: Self = Self::new(16, 0x8005, 0x0000, 0x0000, true, true);

  /// CRC-16/XMODEM - XMODEM, ZMODEM
  pub const CRC16_XMODEM: Self = Self::new(16, 0x1021, 0x0000, 0x0000, false, false);

  /// CRC-16/KERMIT - Kermit protocol
  pub const CRC16_KERMIT: Self = Self::new(16, 0x1021, 0x0000, 0x0000, true, true);

  /// CRC-16/MODBUS - Modbus RTU
  pub const CRC16_MODBUS: Self = Self::new(16, 0x8005, 0xFFFF, 0x0000, true, true);

  /// CRC-32/ISO-HDLC - Ethernet, gzip, PNG, zip, SATA
  pub const CRC32_ISO_HDLC: Self = Self::new(32, 0x04C1_1DB7, 0xFFFF_FFFF, 0xFFFF_FFFF, true, true);

  /// CRC-32/ISCSI (Castagnoli) - iSCSI, SCTP, ext4, Btrfs
  pub const CRC32_ISCSI: Self = Self::new(32, 0x1EDC_6F41, 0xFFFF_FFFF, 0xFFFF_FFFF, true, true);

  /// CRC-32/BZIP2 - bzip2, AAL5
  pub const CRC32_BZIP2: Self = Self::new(32, 0x04C1_1DB7, 0xFFFF_FFFF, 0xFFFF_FFFF, false, false);

  /// CRC-32/MPEG-2 - MPEG transport streams
  pub const CRC32_MPEG2: Self = Self::new(32, 0x04C1_1DB7, 0xFFFF_FFFF, 0x0000_0000, false, false);

  /// CRC-32/JAMCRC - CRC-32/ISO-HDLC without the final inversion
  pub const CRC32_JAMCRC: Self = Self::new(32, 0x04C1_1DB7, 0xFFFF_FFFF, 0x0000_0000, true, true);

  /// Build a parameter set. Nothing is validated until an engine is built.
  #[inline]
  #[must_use]
  pub const fn new(
    width: u8,
    polynomial: u64,
    initial: u64,
    xor_out: u64,
    reflect_in: bool,
    reflect_out: bool,
  ) -> Self {
    Self {
      width,
      polynomial,
      initial,
      xor_out,
      reflect_in,
      reflect_out,
    }
  }

  /// Look up a catalogue preset by name.
  ///
  /// Matching ignores ASCII case. Catalogue names (`CRC-32/ISO-HDLC`) and the
  /// common aliases listed in [`CATALOGUE`] are both accepted.
  ///
  /// ```
  /// use checksum::CrcParams;
  ///
  /// assert_eq!(CrcParams::by_name("crc-32"), Some(CrcParams::CRC32_ISO_HDLC));
  /// assert_eq!(CrcParams::by_name("CRC-16/CCITT-FALSE"), Some(CrcParams::CRC16_IBM_3740));
  /// assert_eq!(CrcParams::by_name("CRC-64/XZ"), None);
  /// ```
  #[must_use]
  pub fn by_name(name: &str) -> Option<Self> {
    CATALOGUE
      .iter()
      .find(|entry| entry.matches(name))
      .map(|entry| entry.params)
  }

  /// Check that the parameters describe a variant the engine can run.
  ///
  /// Rejects widths outside [`SUPPORTED_WIDTHS`] and any polynomial, initial
  /// value, or final XOR with bits set above `width`.
  pub const fn validate(&self) -> Result<(), CrcError> {
    if !matches!(self.width, 8 | 16 | 32) {
      return Err(CrcError::InvalidParameter(InvalidParameter::UnsupportedWidth {
        width: self.width,
      }));
    }
    if let Err(e) = self.fits("polynomial", self.polynomial) {
      return Err(e);
    }
    if let Err(e) = self.fits("initial", self.initial) {
      return Err(e);
    }
    self.fits("xor_out", self.xor_out)
  }

  const fn fits(&self, field: &'static str, value: u64) -> Result<(), CrcError> {
    if value & !self.mask() != 0 {
      return Err(CrcError::InvalidParameter(InvalidParameter::ValueTooWide {
        field,
        value,
        width: self.width,
      }));
    }
    Ok(())
  }

  /// Mask with the low `width` bits set.
  ///
  /// Saturates to all ones for widths of 64 and above.
  #[inline]
  #[must_use]
  pub const fn mask(&self) -> u64 {
    if self.width >= 64 {
      u64::MAX
    } else {
      (1u64 << self.width) - 1
    }
  }

  /// Mask with only bit `width - 1` set (zero for a zero width).
  #[inline]
  #[must_use]
  pub const fn top_bit(&self) -> u64 {
    match self.width {
      0 => 0,
      w if w > 64 => 1 << 63,
      w => 1 << (w - 1),
    }
  }

  /// Returns the reflected polynomial (bit-reversed).
  ///
  /// Useful for comparing against LSB-first implementations that store the
  /// polynomial pre-reflected.
  #[must_use]
  pub const fn polynomial_reflected(&self) -> u64 {
    reverse_bits(self.polynomial, self.width as u32)
  }
}

/// A named catalogue preset with its published check value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogueEntry {
  /// Catalogue name, e.g. `CRC-32/ISO-HDLC`.
  pub name: &'static str,
  /// Other names the variant is commonly known by.
  pub aliases: &'static [&'static str],
  pub params: CrcParams,
  /// Checksum of [`CHECK_INPUT`].
  pub check: u64,
}

impl CatalogueEntry {
  fn matches(&self, name: &str) -> bool {
    self.name.eq_ignore_ascii_case(name) || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
  }
}

/// Every preset shipped with the crate.
pub const CATALOGUE: &[CatalogueEntry] = &[
  CatalogueEntry {
    name: "CRC-8/SMBUS",
    aliases: &["CRC-8"],
    params: CrcParams::CRC8_SMBUS,
    check: 0xF4,
  },
  CatalogueEntry {
    name: "CRC-8/MAXIM-DOW",
    aliases: &["CRC-8/MAXIM", "DOW-CRC"],
    params: CrcParams::CRC8_MAXIM_DOW,
    check: 0xA1,
  },
  CatalogueEntry {
    name: "CRC-8/AUTOSAR",
    aliases: &[],
    params: CrcParams::CRC8_AUTOSAR,
    check: 0xDF,
  },
  CatalogueEntry {
    name: "CRC-16/IBM-3740",
    aliases: &["CRC-16/CCITT-FALSE", "CRC-16/AUTOSAR"],
    params: CrcParams::CRC16_IBM_3740,
    check: 0x29B1,
  },
  CatalogueEntry {
    name: "CRC-16/ARC",
    aliases: &["CRC-16", "CRC-16/IBM", "CRC-IBM"],
    params: CrcParams::CRC16_ARC,
    check: 0xBB3D,
  },
  CatalogueEntry {
    name: "CRC-16/XMODEM",
    aliases: &["CRC-16/ACORN", "CRC-16/LTE", "CRC-16/V-41-MSB", "ZMODEM"],
    params: CrcParams::CRC16_XMODEM,
    check: 0x31C3,
  },
  CatalogueEntry {
    name: "CRC-16/KERMIT",
    aliases: &["CRC-16/CCITT", "CRC-16/CCITT-TRUE", "CRC-16/V-41-LSB"],
    params: CrcParams::CRC16_KERMIT,
    check: 0x2189,
  },
  CatalogueEntry {
    name: "CRC-16/MODBUS",
    aliases: &["MODBUS"],
    params: CrcParams::CRC16_MODBUS,
    check: 0x4B37,
  },
  CatalogueEntry {
    name: "CRC-32/ISO-HDLC",
    aliases: &["CRC-32", "CRC-32/ADCCP", "CRC-32/V-42", "CRC-32/XZ", "PKZIP"],
    params: CrcParams::CRC32_ISO_HDLC,
    check: 0xCBF4_3926,
  },
  CatalogueEntry {
    name: "CRC-32/ISCSI",
    aliases: &["CRC-32C", "CRC-32/BASE91-C", "CRC-32/CASTAGNOLI", "CRC-32/INTERLAKEN"],
    params: CrcParams::CRC32_ISCSI,
    check: 0xE306_9283,
  },
  CatalogueEntry {
    name: "CRC-32/BZIP2",
    aliases: &["CRC-32/AAL5", "CRC-32/DECT-B", "B-CRC-32"],
    params: CrcParams::CRC32_BZIP2,
    check: 0xFC89_1918,
  },
  CatalogueEntry {
    name: "CRC-32/MPEG-2",
    aliases: &[],
    params: CrcParams::CRC32_MPEG2,
    check: 0x0376_E6E7,
  },
  CatalogueEntry {
    name: "CRC-32/JAMCRC",
    aliases: &["JAMCRC"],
    params: CrcParams::CRC32_JAMCRC,
    check: 0x340B_C6D9,
  },
];
