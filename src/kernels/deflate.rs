//! The raw deflate (RFC 1951) codec primitive: a bare compressed stream with
//! no container header or trailer.
//!
//! This module is a safe, panic-free wrapper around the `flate2` crate's
//! in-memory compressor and decompressor, constrained to the one-shot,
//! fixed-capacity discipline the front-end requires.

use flate2::{Compress, Compression, Decompress};

use super::{oneshot_compress, oneshot_decompress, DecodeFailure};
use crate::config::CompressionLevel;

/// The worst-case compressed size for `len` source bytes.
///
/// Pessimistic on purpose: the backing compressor does not always fall back
/// to stored blocks optimally, so this allows for ~10% expansion plus a
/// fixed floor and the 5-byte per-block overhead of stored blocks.
pub fn compress_bound(len: usize) -> usize {
    let pessimistic = len.saturating_add(len / 10).saturating_add(128);
    let stored = len
        .saturating_add(5 * (len / (31 * 1024) + 1))
        .saturating_add(128);
    pessimistic.max(stored)
}

/// Compresses `src` as a raw deflate stream into `dst`.
///
/// Returns the number of bytes written, or `None` when `dst` cannot hold
/// the complete stream.
pub fn compress(level: CompressionLevel, src: &[u8], dst: &mut [u8]) -> Option<usize> {
    let mut compressor = Compress::new(Compression::new(level.get()), false);
    oneshot_compress(&mut compressor, src, dst)
}

/// Decompresses a raw deflate stream into `dst`, returning the decompressed
/// length or a classified status.
pub fn decompress(src: &[u8], dst: &mut [u8]) -> Result<usize, DecodeFailure> {
    let mut decompressor = Decompress::new(false);
    oneshot_decompress(&mut decompressor, src, dst)
}
