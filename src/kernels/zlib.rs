//! The zlib (RFC 1950) codec primitive: a deflate stream wrapped in the
//! two-byte zlib header and Adler-32 trailer.
//!
//! Same one-shot, fixed-capacity discipline as the raw deflate module; the
//! checksum is verified by the decompressor when the stream ends.

use flate2::{Compress, Compression, Decompress};

use super::{deflate, oneshot_compress, oneshot_decompress, DecodeFailure};
use crate::config::CompressionLevel;

/// Header and trailer overhead of the zlib container.
const WRAPPER_OVERHEAD: usize = 2 + 4;

/// The worst-case compressed size for `len` source bytes in a zlib
/// container.
pub fn compress_bound(len: usize) -> usize {
    deflate::compress_bound(len).saturating_add(WRAPPER_OVERHEAD)
}

/// Compresses `src` as a zlib stream into `dst`.
///
/// Returns the number of bytes written, or `None` when `dst` cannot hold
/// the complete stream.
pub fn compress(level: CompressionLevel, src: &[u8], dst: &mut [u8]) -> Option<usize> {
    let mut compressor = Compress::new(Compression::new(level.get()), true);
    oneshot_compress(&mut compressor, src, dst)
}

/// Decompresses a zlib stream into `dst`, returning the decompressed length
/// or a classified status.
pub fn decompress(src: &[u8], dst: &mut [u8]) -> Result<usize, DecodeFailure> {
    let mut decompressor = Decompress::new(true);
    oneshot_decompress(&mut decompressor, src, dst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_COMPRESSION;

    #[test]
    fn test_roundtrip_and_header_byte() {
        let src = b"abcdefghijklmnopqrstuvwxyz";
        let mut dst = vec![0u8; compress_bound(src.len())];
        let written = compress(DEFAULT_COMPRESSION, src, &mut dst).unwrap();
        // RFC 1950: CMF byte 0x78 for deflate with a 32 KiB window.
        assert_eq!(dst[0], 0x78);

        let mut out = vec![0u8; src.len()];
        let n = decompress(&dst[..written], &mut out).unwrap();
        assert_eq!(&out[..n], src);
    }

    #[test]
    fn test_missing_trailer_is_bad_data() {
        let src = b"checksummed payload";
        let mut dst = vec![0u8; compress_bound(src.len())];
        let written = compress(DEFAULT_COMPRESSION, src, &mut dst).unwrap();

        let mut out = vec![0u8; src.len()];
        // Dropping the Adler-32 trailer leaves the stream unterminated.
        assert_eq!(
            decompress(&dst[..written - 4], &mut out),
            Err(DecodeFailure::BadData)
        );
    }

    #[test]
    fn test_raw_deflate_stream_is_not_a_zlib_stream() {
        let src = b"abcdefghijklmnopqrstuvwxyz";
        let mut dst = vec![0u8; deflate::compress_bound(src.len())];
        let written = deflate::compress(DEFAULT_COMPRESSION, src, &mut dst).unwrap();

        let mut out = vec![0u8; src.len()];
        assert_eq!(
            decompress(&dst[..written], &mut out),
            Err(DecodeFailure::BadData)
        );
    }
}
