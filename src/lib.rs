//! This file is the root of the `oneflate` Rust crate.
//!
//! oneflate is a one-shot front-end over the deflate codec family: raw
//! deflate, zlib-wrapped, and gzip-wrapped streams. Callers hand in a source
//! buffer plus optional sizing/format/level hints; the library resolves the
//! hints, obtains or recycles an output buffer of the right capacity, runs
//! the codec exactly once, and returns a right-sized result buffer or a
//! classified failure.
//!
//! Every call is synchronous and self-contained: no state is shared across
//! calls except buffers the caller explicitly passes in for reuse, so
//! concurrent calls on different threads need no coordination.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod bridge;
pub mod config;
pub mod kernels;

mod buffer;
mod error;

//==================================================================================
// 2. Public Surface
//==================================================================================
pub use bridge::{
    compress, decode, decompress, deflate, encode, inflate, uncompress, Arg, DecodeOptions,
    EncodeOptions,
};
pub use buffer::MAX_CAPACITY;
pub use config::{
    ContainerFormat, FormatSpec, LevelSpec, BEST_COMPRESSION, DEFAULT_COMPRESSION,
    FAST_COMPRESSION,
};
pub use error::OneflateError;
pub use kernels::DecodeFailure;
