// In: src/config.rs

//! The single source of truth for level and format resolution.
//!
//! Callers express compression levels and container formats loosely: a named
//! token, a raw integer, or nothing at all. This module collapses that
//! looseness into two closed tagged unions (`LevelSpec`, `FormatSpec`) and a
//! pair of pure resolution functions that map them onto the canonical
//! `CompressionLevel` and `ContainerFormat` values the codec layer accepts.
//! Keeping the ambiguity resolution here means every call site downstream
//! works with exactly one representation.

use serde::{Deserialize, Serialize};

use crate::error::OneflateError;

//==================================================================================
// I. Canonical Level & Format Types
//==================================================================================

/// A compression level already clamped into the codec's accepted range.
///
/// The backing codec accepts levels 1 through 9; numeric input outside that
/// range is pulled to the nearest bound rather than rejected.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CompressionLevel(u32);

/// The fastest (lowest-ratio) compression level.
pub const FAST_COMPRESSION: CompressionLevel = CompressionLevel(1);
/// The balanced default compression level.
pub const DEFAULT_COMPRESSION: CompressionLevel = CompressionLevel(6);
/// The best (slowest) compression level.
pub const BEST_COMPRESSION: CompressionLevel = CompressionLevel(9);

impl CompressionLevel {
    /// Builds a level from a raw integer, clamping into [FAST, BEST].
    pub fn clamped(value: i64) -> Self {
        let lo = FAST_COMPRESSION.0 as i64;
        let hi = BEST_COMPRESSION.0 as i64;
        CompressionLevel(value.clamp(lo, hi) as u32)
    }

    /// The raw numeric level.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        DEFAULT_COMPRESSION
    }
}

/// The byte-level wrapping around the compressed payload.
///
/// `Deflate` is a raw RFC 1951 stream with no wrapper; `Zlib` adds the
/// RFC 1950 two-byte header and Adler-32 trailer; `Gzip` adds the RFC 1952
/// header, CRC-32 and size trailer.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContainerFormat {
    #[default]
    Deflate,
    Zlib,
    Gzip,
}

impl ContainerFormat {
    /// The canonical token for this format, as accepted by the resolver and
    /// used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            ContainerFormat::Deflate => "deflate",
            ContainerFormat::Zlib => "zlib",
            ContainerFormat::Gzip => "gzip",
        }
    }
}

//==================================================================================
// II. Caller-Facing Tagged Unions
//==================================================================================

/// How the caller expressed a compression level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LevelSpec {
    /// No level given; resolves to [`DEFAULT_COMPRESSION`].
    #[default]
    Default,
    /// A named token: `default`, `fast`/`min`, or `best`/`max`.
    Named(String),
    /// A raw numeric level, clamped into range during resolution.
    Numeric(i64),
}

impl From<&str> for LevelSpec {
    fn from(token: &str) -> Self {
        LevelSpec::Named(token.to_string())
    }
}

impl From<i64> for LevelSpec {
    fn from(value: i64) -> Self {
        LevelSpec::Numeric(value)
    }
}

/// How the caller expressed a container format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormatSpec {
    /// No format given; resolves to [`ContainerFormat::Deflate`].
    #[default]
    Default,
    /// A named token: `deflate`, `zlib`, or `gzip`.
    Named(String),
}

impl From<&str> for FormatSpec {
    fn from(token: &str) -> Self {
        FormatSpec::Named(token.to_string())
    }
}

impl From<ContainerFormat> for FormatSpec {
    fn from(format: ContainerFormat) -> Self {
        FormatSpec::Named(format.name().to_string())
    }
}

//==================================================================================
// III. Resolution Functions
//==================================================================================

/// Resolves a caller-supplied level spec into a clamped [`CompressionLevel`].
///
/// Named tokens are matched case-insensitively. Numeric input is silently
/// clamped into [FAST, BEST], never rejected.
///
/// # Errors
/// Returns `OneflateError::InvalidArgument` for an unrecognized named token.
pub fn resolve_level(spec: &LevelSpec) -> Result<CompressionLevel, OneflateError> {
    match spec {
        LevelSpec::Default => Ok(DEFAULT_COMPRESSION),
        LevelSpec::Named(token) => {
            if token.eq_ignore_ascii_case("default") {
                Ok(DEFAULT_COMPRESSION)
            } else if token.eq_ignore_ascii_case("best") || token.eq_ignore_ascii_case("max") {
                Ok(BEST_COMPRESSION)
            } else if token.eq_ignore_ascii_case("fast") || token.eq_ignore_ascii_case("min") {
                Ok(FAST_COMPRESSION)
            } else {
                Err(OneflateError::InvalidArgument(format!(
                    "wrong level key - {} (expect default, fast, min, best or max)",
                    token
                )))
            }
        }
        LevelSpec::Numeric(value) => Ok(CompressionLevel::clamped(*value)),
    }
}

/// Resolves a caller-supplied format spec into a [`ContainerFormat`].
///
/// Named tokens are matched case-insensitively. When `forbid_zlib` is set the
/// `zlib` token is rejected and the diagnostic names the narrowed accepted
/// set. No current call site sets the flag; it is kept so a future entry
/// point can exclude the zlib container without touching the resolver.
///
/// # Errors
/// Returns `OneflateError::InvalidArgument` for a token outside the accepted
/// set.
pub fn resolve_format(
    spec: &FormatSpec,
    forbid_zlib: bool,
) -> Result<ContainerFormat, OneflateError> {
    if let FormatSpec::Named(token) = spec {
        if token.eq_ignore_ascii_case("deflate") {
            return Ok(ContainerFormat::Deflate);
        } else if token.eq_ignore_ascii_case("gzip") {
            return Ok(ContainerFormat::Gzip);
        } else if !forbid_zlib && token.eq_ignore_ascii_case("zlib") {
            return Ok(ContainerFormat::Zlib);
        }

        let expected = if forbid_zlib {
            "expect nil, deflate or gzip"
        } else {
            "expect nil, deflate, zlib or gzip"
        };
        return Err(OneflateError::InvalidArgument(format!(
            "wrong format key - {} ({})",
            token, expected
        )));
    }

    Ok(ContainerFormat::Deflate)
}
