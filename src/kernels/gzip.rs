//! The gzip (RFC 1952) codec primitive: a deflate stream wrapped in the
//! full gzip header plus CRC-32 and size trailer.
//!
//! Same one-shot, fixed-capacity discipline as the raw deflate module. The
//! decoder verifies both the CRC and the recorded size when the stream ends.

use std::io::{Cursor, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use super::{deflate, drain_into, DecodeFailure};
use crate::config::CompressionLevel;

/// Worst-case container overhead: the 10-byte fixed header plus the 8-byte
/// CRC/size trailer.
const WRAPPER_OVERHEAD: usize = 10 + 8;

/// The worst-case compressed size for `len` source bytes in a gzip
/// container.
pub fn compress_bound(len: usize) -> usize {
    deflate::compress_bound(len).saturating_add(WRAPPER_OVERHEAD)
}

/// Compresses `src` as a gzip stream into `dst`.
///
/// Returns the number of bytes written, or `None` when `dst` cannot hold
/// the complete stream.
pub fn compress(level: CompressionLevel, src: &[u8], dst: &mut [u8]) -> Option<usize> {
    let mut encoder = GzEncoder::new(Cursor::new(dst), Compression::new(level.get()));
    encoder.write_all(src).ok()?;
    let sink = encoder.finish().ok()?;
    Some(sink.position() as usize)
}

/// Decompresses a gzip stream into `dst`, returning the decompressed length
/// or a classified status.
pub fn decompress(src: &[u8], dst: &mut [u8]) -> Result<usize, DecodeFailure> {
    let mut decoder = GzDecoder::new(src);
    drain_into(&mut decoder, dst)
}
