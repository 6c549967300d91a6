//! This module contains the pure, stateless codec primitives for the three
//! container formats, plus the per-call format dispatch.
//!
//! Each format module exposes the same pair of contracts:
//! - `compress(level, src, dst) -> Option<usize>`: one-shot compression into
//!   a fixed-capacity destination. `None` is the failure sentinel, raised
//!   when the destination cannot hold the complete stream.
//! - `decompress(src, dst) -> Result<usize, DecodeFailure>`: one-shot
//!   decompression into a fixed-capacity destination, returning the actual
//!   decompressed length or a classified status.
//! Formats that can be sized up front also expose `compress_bound(len)`.
//!
//! The raw deflate and zlib primitives drive `flate2`'s in-memory
//! `Compress`/`Decompress` state machines directly, so an incomplete stream
//! is distinguishable from one that genuinely ended. The gzip container is
//! not reachable through that in-memory API, so the gzip module goes through
//! `flate2`'s streaming wrappers instead; those already classify truncation
//! and header damage as read errors. Codec state is owned by the flate2
//! values and released by `Drop` on every exit path, so a failure part-way
//! through a transform cannot leak it.

use std::io::{ErrorKind, Read};

use flate2::{Compress, Decompress, FlushCompress, FlushDecompress, Status};

pub mod deflate;
pub mod gzip;
pub mod zlib;

use crate::config::{CompressionLevel, ContainerFormat};

//==================================================================================
// 1. Decode Status Codes
//==================================================================================

/// The non-success statuses a decompress primitive can report.
///
/// This is a closed status-code space; each status maps to a fixed reason
/// string and a stable numeric code used in diagnostics. The flate2-backed
/// primitives report `BadData` and `InsufficientSpace`; `ShortOutput` is
/// part of the vocabulary for backends that cannot report the produced
/// length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeFailure {
    /// The input is not a valid stream for the selected container format,
    /// or ends before the stream does.
    BadData,
    /// The stream ended early and the backend did not report how many bytes
    /// it produced.
    ShortOutput,
    /// The destination capacity was too small for the decompressed payload.
    InsufficientSpace,
}

impl DecodeFailure {
    /// The fixed human-readable reason for this status.
    pub fn reason(self) -> &'static str {
        match self {
            DecodeFailure::BadData => "corrupted data or unsupported",
            DecodeFailure::ShortOutput => {
                "smaller than output capacity, but output size not given"
            }
            DecodeFailure::InsufficientSpace => "output capacity was too small",
        }
    }

    /// The stable numeric code for this status.
    pub fn code(self) -> u32 {
        match self {
            DecodeFailure::BadData => 1,
            DecodeFailure::ShortOutput => 2,
            DecodeFailure::InsufficientSpace => 3,
        }
    }
}

//==================================================================================
// 2. Format Dispatch
//==================================================================================

/// Routes a compression request to the primitive for `format`.
pub fn compress(
    format: ContainerFormat,
    level: CompressionLevel,
    src: &[u8],
    dst: &mut [u8],
) -> Option<usize> {
    match format {
        ContainerFormat::Deflate => deflate::compress(level, src, dst),
        ContainerFormat::Zlib => zlib::compress(level, src, dst),
        ContainerFormat::Gzip => gzip::compress(level, src, dst),
    }
}

/// Routes a bound computation to the primitive for `format`.
pub fn compress_bound(format: ContainerFormat, len: usize) -> usize {
    match format {
        ContainerFormat::Deflate => deflate::compress_bound(len),
        ContainerFormat::Zlib => zlib::compress_bound(len),
        ContainerFormat::Gzip => gzip::compress_bound(len),
    }
}

/// Routes a decompression request to the primitive for `format`.
pub fn decompress(
    format: ContainerFormat,
    src: &[u8],
    dst: &mut [u8],
) -> Result<usize, DecodeFailure> {
    match format {
        ContainerFormat::Deflate => deflate::decompress(src, dst),
        ContainerFormat::Zlib => zlib::decompress(src, dst),
        ContainerFormat::Gzip => gzip::decompress(src, dst),
    }
}

//==================================================================================
// 3. Shared Codec Plumbing
//==================================================================================

/// Drives a compressor over the whole of `src` into the fixed-capacity
/// `dst`, finishing the stream.
///
/// Returns the number of bytes written, or `None` when the compressor gets
/// stuck before `StreamEnd`, which means the destination cannot hold the
/// complete stream.
pub(crate) fn oneshot_compress(c: &mut Compress, src: &[u8], dst: &mut [u8]) -> Option<usize> {
    loop {
        let consumed = c.total_in() as usize;
        let produced = c.total_out() as usize;
        let status = c
            .compress(&src[consumed..], &mut dst[produced..], FlushCompress::Finish)
            .ok()?;
        match status {
            Status::StreamEnd => return Some(c.total_out() as usize),
            Status::Ok | Status::BufError => {
                let stuck = c.total_in() as usize == consumed
                    && c.total_out() as usize == produced;
                if stuck {
                    return None;
                }
            }
        }
    }
}

/// Drives a decompressor over the whole of `src` into the fixed-capacity
/// `dst`, finishing the stream.
///
/// Reaching `StreamEnd` is the only success condition. A stall with input
/// left over and the destination completely full classifies as
/// `InsufficientSpace`; any other stall means the input ended before the
/// stream did and classifies as `BadData`, as does a hard decoder error
/// (corrupt data, checksum mismatch).
pub(crate) fn oneshot_decompress(
    d: &mut Decompress,
    src: &[u8],
    dst: &mut [u8],
) -> Result<usize, DecodeFailure> {
    loop {
        let consumed = d.total_in() as usize;
        let produced = d.total_out() as usize;
        let status = d
            .decompress(&src[consumed..], &mut dst[produced..], FlushDecompress::Finish)
            .map_err(|_| DecodeFailure::BadData)?;
        match status {
            Status::StreamEnd => return Ok(d.total_out() as usize),
            Status::Ok | Status::BufError => {
                let stuck = d.total_in() as usize == consumed
                    && d.total_out() as usize == produced;
                if stuck {
                    let in_done = d.total_in() as usize == src.len();
                    let out_full = d.total_out() as usize == dst.len();
                    return Err(if !in_done && out_full {
                        DecodeFailure::InsufficientSpace
                    } else {
                        DecodeFailure::BadData
                    });
                }
            }
        }
    }
}

/// Drains a streaming decoder into a fixed-capacity destination.
///
/// Once the destination is full, one extra byte is probed to distinguish
/// "the stream ended exactly here" from "the destination was too small".
/// Any decoder error classifies as `BadData`: the streaming gzip reader
/// surfaces corrupt headers, checksum mismatches and truncated input as
/// read errors.
pub(crate) fn drain_into<R: Read>(
    reader: &mut R,
    dst: &mut [u8],
) -> Result<usize, DecodeFailure> {
    let mut filled = 0;
    loop {
        if filled == dst.len() {
            let mut probe = [0u8; 1];
            return match reader.read(&mut probe) {
                Ok(0) => Ok(filled),
                Ok(_) => Err(DecodeFailure::InsufficientSpace),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(_) => Err(DecodeFailure::BadData),
            };
        }
        match reader.read(&mut dst[filled..]) {
            Ok(0) => return Ok(filled),
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(_) => return Err(DecodeFailure::BadData),
        }
    }
}
