// In: src/bridge/decode.rs

//! The one-shot decode path. Mirrors the encode path except that the
//! destination capacity is mandatory: decompressed size cannot be bounded
//! from compressed size for arbitrary inputs, so the caller must know it.

use crate::bridge::args::{resolve_decode_shape, Arg, DecodeOptions};
use crate::buffer;
use crate::config::resolve_format;
use crate::error::OneflateError;
use crate::kernels;

/// Decompresses `src` into a right-sized buffer.
///
/// Accepted shapes, mirroring the documented call sequence
/// `decode(src, capacity, dest = nil, options)`:
/// - `capacity` is required and is the exact size of the negotiated
///   destination; a stream that decompresses to more bytes fails with
///   `DecompressionFailed` (output capacity too small);
/// - an optional destination buffer is recycled for the result, its old
///   contents discarded.
///
/// On success the returned buffer is trimmed to the decompressed length.
///
/// # Errors
/// Fails with `RangeError` for a missing or out-of-range capacity,
/// `ArityError` for more than one positional argument, `InvalidArgument`
/// for unrecognized format tokens or mis-kinded positional arguments,
/// `AllocationFailed` if destination storage cannot be obtained, and
/// `DecompressionFailed` (with a classified reason and raw status code)
/// if the primitive rejects the stream.
pub fn decode(
    src: &[u8],
    capacity: Option<i64>,
    args: Vec<Arg>,
    opts: DecodeOptions,
) -> Result<Vec<u8>, OneflateError> {
    // 1. Resolve the call shape, then the format token.
    let (capacity, destination) = resolve_decode_shape(capacity, args)?;
    let format = resolve_format(&opts.format, false)?;
    log::debug!(
        "decode: format={} capacity={} recycle={}",
        format.name(),
        capacity,
        destination.is_some(),
    );

    // 2. Negotiate the destination, run the primitive once, trim to the
    //    reported length.
    let mut dst = buffer::negotiate(destination, capacity)?;
    let written = kernels::decompress(format, src, &mut dst).map_err(|status| {
        OneflateError::DecompressionFailed {
            format: format.name(),
            status,
        }
    })?;
    dst.truncate(written);
    Ok(dst)
}
