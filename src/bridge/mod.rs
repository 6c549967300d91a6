// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the sole public-facing API of the oneflate library. It turns
// loosely-shaped one-shot requests into fully-resolved codec invocations and
// right-sized result buffers.
//
// Data Flow (Encode):
//
//   1. [Shape Resolver (args::resolve_encode_shape)] -> Receives `Vec<Arg>`
//         |
//         `-> decides implicit-capacity vs explicit-capacity vs recycle-buffer
//
//   2. [Option Resolver (config)] -> level + format tokens -> canonical enums
//
//   3. [Buffer Negotiator (buffer)] -> bound-derived or explicit capacity
//         |
//         `-> recycles the caller's buffer storage where one was handed over
//
//   4. [Codec Dispatch (kernels)] -> one compress call, trimmed to fit
//
// Data Flow (Decode):
//
//   Identical, except the capacity is mandatory (no bound computation exists
//   for decompression) and only the format option applies.
//
// ====================================================================================
pub(crate) mod args;
pub(crate) mod decode;
pub(crate) mod encode;

// --- One-Shot Entry Points ---
pub use decode::decode;
pub use encode::encode;

// --- Call-Shape Types ---
pub use args::{Arg, DecodeOptions, EncodeOptions};

// --- Conventional Aliases ---
pub use decode::decode as decompress;
pub use decode::decode as inflate;
pub use decode::decode as uncompress;
pub use encode::encode as compress;
pub use encode::encode as deflate;
