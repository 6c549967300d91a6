// In: src/buffer.rs

//! This module provides the destination-buffer negotiation used by both the
//! encode and decode paths.
//!
//! Its single responsibility is to turn "an optional existing buffer plus a
//! required capacity" into a writable buffer of exactly that capacity. When
//! the caller hands in a buffer to recycle, its storage is resized in place
//! rather than reallocated, so a hot loop that feeds the same buffer through
//! many calls pays for at most one allocation. Contents of a recycled buffer
//! are discarded, never preserved.

use crate::error::OneflateError;

/// The largest destination capacity the negotiator will provide. Capacities
/// above this fail range validation in the argument shape resolvers before
/// reaching this module.
pub const MAX_CAPACITY: usize = isize::MAX as usize;

/// Produces a writable buffer of exactly `capacity` bytes, recycling
/// `existing` when one is supplied.
///
/// The returned buffer's length equals `capacity` and every byte is
/// zeroed; the caller overwrites it and truncates to the final length.
/// Recycling keeps the existing allocation whenever its capacity already
/// suffices. A capacity of zero is legal and yields an empty buffer.
///
/// Capacity must already have been validated against [`MAX_CAPACITY`];
/// this function performs no range checks of its own.
///
/// # Errors
/// Returns `OneflateError::AllocationFailed` if storage for `capacity`
/// bytes cannot be obtained.
pub fn negotiate(
    existing: Option<Vec<u8>>,
    capacity: usize,
) -> Result<Vec<u8>, OneflateError> {
    let mut buf = existing.unwrap_or_default();
    buf.clear();
    if capacity > buf.capacity() {
        buf.try_reserve_exact(capacity)
            .map_err(|_| OneflateError::AllocationFailed { capacity })?;
    }
    buf.resize(capacity, 0);
    Ok(buf)
}
