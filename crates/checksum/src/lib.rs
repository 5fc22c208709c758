//! Generic, parameterized CRC checksums.
//!
//! Describe a CRC variant by its Rocksoft parameters, build a [`CrcEngine`]
//! once (it precomputes a 256-entry lookup table), then create as many
//! independent [`Hasher`]s from it as you need.
//!
//! # CRC Model
//!
//! | Parameter | Description |
//! |-----------|-------------|
//! | `width`   | CRC width in bits (8, 16, or 32) |
//! | `polynomial` | Generator polynomial, normal (MSB-first) form |
//! | `initial` | Initial register value |
//! | `xor_out` | Final XOR value |
//! | `reflect_in` | Reverse the bits of each input byte |
//! | `reflect_out` | Reverse the register before the final XOR |
//!
//! Named presets live on [`CrcParams`] and in [`CATALOGUE`].
//!
//! # Example
//!
//! ```rust
//! use checksum::{Checksum, ChecksumCombine, CrcEngine, CrcParams};
//!
//! // CRC-32/ISO-HDLC (Ethernet, gzip, zip, PNG)
//! let engine = CrcEngine::new(32, 0x04C1_1DB7, 0xFFFF_FFFF, 0xFFFF_FFFF, true, true)?;
//! assert_eq!(engine.params(), &CrcParams::CRC32_ISO_HDLC);
//!
//! // One-shot computation
//! let data = b"123456789";
//! let crc = engine.checksum(data);
//! assert_eq!(crc, 0xCBF4_3926);
//!
//! // Streaming computation through the capability trait
//! let mut hasher = engine.new_hasher();
//! let sink: &mut dyn Checksum<Output = u64> = &mut hasher;
//! sink.update(b"1234");
//! sink.update_range(b"..56789..", 2, 5)?;
//! assert_eq!(sink.finalize(), crc);
//!
//! // Combine independently computed chunks
//! let (a, b) = data.split_at(4);
//! let combined = engine.combine(engine.checksum(a), engine.checksum(b), b.len());
//! assert_eq!(combined, crc);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded use:
//!
//! ```toml
//! [dependencies]
//! checksum = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod combine;
mod engine;
pub mod error;
#[cfg(feature = "std")]
pub mod io;
pub mod params;
pub mod reference;
pub mod reflect;
pub mod table;

#[cfg(test)]
mod proptests;

pub use engine::{CrcEngine, Hasher};
pub use error::{CrcError, InvalidParameter, OutOfRange};
#[cfg(feature = "std")]
pub use io::{ChecksumReader, ChecksumWriter};
pub use params::{CATALOGUE, CHECK_INPUT, CatalogueEntry, CrcParams, SUPPORTED_WIDTHS};
// Re-export traits for convenience
pub use traits::{Checksum, ChecksumCombine};
