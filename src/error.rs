// In: src/error.rs

//! This module defines the single, unified error type for the entire oneflate
//! library. It uses the `thiserror` crate to provide ergonomic, context-aware
//! error handling.
//!
//! Every failure aborts the call that produced it: no partial results, no
//! retries, and no silent fallback between formats or levels.

use thiserror::Error;

use crate::kernels::DecodeFailure;

#[derive(Error, Debug)]
pub enum OneflateError {
    // =========================================================================
    // === Argument Resolution Errors
    // =========================================================================
    /// An unrecognized level/format token, or a positional argument of the
    /// wrong kind. The message enumerates the accepted set where one exists.
    #[error("{0}")]
    InvalidArgument(String),

    /// The wrong number of positional arguments. `given` counts the source
    /// argument, matching the call sequence documented on the entry points.
    #[error("wrong number of arguments (given {given}, expect {expected})")]
    ArityError { given: usize, expected: &'static str },

    /// A capacity that is negative, missing, or beyond the addressable
    /// buffer ceiling.
    #[error("{0}")]
    RangeError(String),

    // =========================================================================
    // === Buffer & Codec Errors
    // =========================================================================
    /// Destination storage could not be grown to the negotiated capacity.
    #[error("failed to allocate output buffer of {capacity} bytes")]
    AllocationFailed { capacity: usize },

    /// The compress primitive reported failure. The destination capacity was
    /// almost certainly smaller than the stream required; compression itself
    /// cannot fail on malformed input, since input is unconstrained bytes.
    #[error("failed {format} compress (destination capacity too small?)")]
    CompressionFailed { format: &'static str },

    /// The decompress primitive returned a non-success status. Carries the
    /// container format, a fixed reason string, and the raw status code for
    /// diagnostics.
    #[error("failed {} decompress - {} (0x{:04x})", .format, .status.reason(), .status.code())]
    DecompressionFailed {
        format: &'static str,
        status: DecodeFailure,
    },
}
