//! Checksum capability traits.
//!
//! This crate defines the surface every checksum accumulator exposes, so call
//! sites can depend on the capability instead of a concrete hasher type. It is
//! `no_std` compatible; the `std` feature adds `std::io` adapters.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`Checksum`] | Incremental, resettable checksum accumulator | CRC-8, CRC-16, CRC-32 |
//! | [`ChecksumCombine`] | `crc(A || B)` from `crc(A)`, `crc(B)`, `len(B)` | Table-driven CRC engines |
//!
//! # Error Types
//!
//! - [`OutOfRange`] - a requested sub-range does not lie inside the input buffer
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod checksum;
pub mod error;
pub mod io;

pub use checksum::{Checksum, ChecksumCombine};
pub use error::OutOfRange;
