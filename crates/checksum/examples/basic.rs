//! Basic checksum usage: presets, custom parameters, streaming, combine.
//!
//! Run with: `cargo run --example basic -p checksum`

use checksum::{CATALOGUE, Checksum, ChecksumCombine, CrcEngine, CrcError, CrcParams};

fn main() -> Result<(), CrcError> {
  println!("=== Generic CRC Examples ===\n");

  catalogue()?;
  custom_parameters()?;
  streaming()?;
  combine()?;
  Ok(())
}

/// Every shipped preset against its published check value.
fn catalogue() -> Result<(), CrcError> {
  println!("--- Catalogue ---\n");

  for entry in CATALOGUE {
    let engine = CrcEngine::from_params(entry.params)?;
    let digits = usize::from(entry.params.width / 4);
    println!("{:<16} 0x{:0digits$X}", entry.name, engine.check());
    assert_eq!(engine.check(), entry.check);
  }
  println!();
  Ok(())
}

/// Build a variant straight from its six parameters.
fn custom_parameters() -> Result<(), CrcError> {
  println!("--- Custom Parameters ---\n");

  // CRC-16/CCITT-FALSE
  let engine = CrcEngine::new(16, 0x1021, 0xFFFF, 0x0000, false, false)?;
  println!("CRC-16/CCITT-FALSE: 0x{:04X}", engine.check());

  // Unsupported widths are rejected up front.
  match CrcEngine::new(24, 0x86_4CFB, 0xB7_04CE, 0, false, false) {
    Err(err) => println!("24-bit rejected:    {err}"),
    Ok(_) => unreachable!("24-bit CRCs are not supported"),
  }
  println!();
  Ok(())
}

/// Feed data in pieces through the capability trait.
fn streaming() -> Result<(), CrcError> {
  println!("--- Streaming ---\n");

  let engine = CrcEngine::from_params(CrcParams::CRC32_ISO_HDLC)?;
  let mut hasher = engine.new_hasher();
  feed(&mut hasher, &[b"1234", b"5", b"6789"]);
  println!("CRC-32 (pieces):    0x{:08X}", hasher.finalize());

  let mut hasher = engine.new_hasher();
  hasher.update_range(b"--123456789--", 2, 9)?;
  println!("CRC-32 (sub-range): 0x{:08X}", hasher.finalize());
  println!();
  Ok(())
}

fn feed(sink: &mut dyn Checksum<Output = u64>, pieces: &[&[u8]]) {
  sink.update_vectored(pieces);
}

/// Checksum two halves separately and stitch the results.
fn combine() -> Result<(), CrcError> {
  println!("--- Combine ---\n");

  let engine = CrcEngine::from_params(CrcParams::CRC32_ISCSI)?;
  let (a, b) = b"hello world".split_at(6);
  let combined = engine.combine(engine.checksum(a), engine.checksum(b), b.len());
  println!("CRC-32C combined:   0x{combined:08X}");
  assert_eq!(combined, engine.checksum(b"hello world"));
  Ok(())
}
