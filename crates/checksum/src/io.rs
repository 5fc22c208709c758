//! I/O adapters for checksum computation.
//!
//! [`ChecksumReader`] and [`ChecksumWriter`] wrap [`std::io::Read`] and
//! [`std::io::Write`] implementations and fold the bytes actually transferred
//! into a [`Hasher`](crate::Hasher) (short reads and writes are handled).
//!
//! # Example
//!
//! ```rust
//! use std::io::{Cursor, Read};
//!
//! use checksum::{ChecksumReader, CrcEngine, CrcParams};
//!
//! let engine = CrcEngine::from_params(CrcParams::CRC32_ISCSI)?;
//! let mut reader = ChecksumReader::new(Cursor::new(b"hello world".to_vec()), engine.new_hasher());
//! let mut contents = Vec::new();
//! reader.read_to_end(&mut contents)?;
//! assert_eq!(contents, b"hello world");
//! assert_eq!(reader.crc(), engine.checksum(&contents));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use traits::io::{ChecksumReader, ChecksumWriter};
