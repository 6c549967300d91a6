// In: src/bridge/encode.rs

//! The one-shot encode path: shape resolution, option resolution, capacity
//! negotiation, codec dispatch, and result finalization.

use crate::bridge::args::{resolve_encode_shape, Arg, EncodeOptions};
use crate::buffer::{self, MAX_CAPACITY};
use crate::config::{resolve_format, resolve_level};
use crate::error::OneflateError;
use crate::kernels;

/// Compresses `src` into a right-sized buffer.
///
/// Accepted positional shapes, mirroring the documented call sequence
/// `encode(src, capacity = nil, dest = nil, options)`:
/// - no arguments: the destination capacity is computed from the
///   format-specific worst-case bound;
/// - a capacity: the destination is allocated at exactly that size, and the
///   call fails with `CompressionFailed` if the stream does not fit;
/// - a destination buffer (with or without a preceding capacity): the
///   buffer's storage is recycled for the result and its old contents are
///   discarded.
///
/// On success the returned buffer is trimmed to the compressed length.
///
/// # Errors
/// Fails with `ArityError` for more than two positional arguments,
/// `RangeError` for an out-of-range capacity, `InvalidArgument` for
/// unrecognized level/format tokens or mis-kinded positional arguments,
/// `AllocationFailed` if destination storage cannot be obtained, and
/// `CompressionFailed` if the stream does not fit the destination.
pub fn encode(
    src: &[u8],
    args: Vec<Arg>,
    opts: EncodeOptions,
) -> Result<Vec<u8>, OneflateError> {
    // 1. Resolve the call shape, then the option tokens.
    let shape = resolve_encode_shape(args)?;
    let level = resolve_level(&opts.level)?;
    let format = resolve_format(&opts.format, false)?;

    // 2. An unspecified capacity falls back to the format's worst-case
    //    bound, clamped to the addressable ceiling.
    let capacity = match shape.capacity {
        Some(capacity) => capacity,
        None => kernels::compress_bound(format, src.len()).min(MAX_CAPACITY),
    };
    log::debug!(
        "encode: format={} level={} capacity={} (explicit={}) recycle={}",
        format.name(),
        level.get(),
        capacity,
        shape.capacity.is_some(),
        shape.destination.is_some(),
    );

    // 3. Negotiate the destination, run the primitive once, trim to fit.
    let mut dst = buffer::negotiate(shape.destination, capacity)?;
    let written = kernels::compress(format, level, src, &mut dst).ok_or(
        OneflateError::CompressionFailed {
            format: format.name(),
        },
    )?;
    dst.truncate(written);
    Ok(dst)
}
