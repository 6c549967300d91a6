// In: src/bridge/args.rs

//! Argument shape resolution for the two entry points.
//!
//! Call sites express a request as a short positional argument list plus an
//! options struct. Positional arguments are a closed tagged union: a slot is
//! either empty, an explicit destination capacity, or an existing buffer to
//! recycle. This module decides, once per call, which of the accepted call
//! shapes applies, so the codec dispatch never has to re-interpret argument
//! kinds.

use crate::buffer::MAX_CAPACITY;
use crate::config::{FormatSpec, LevelSpec};
use crate::error::OneflateError;

//==================================================================================
// 1. Positional Arguments & Options
//==================================================================================

/// One positional argument to [`encode`](crate::encode) or
/// [`decode`](crate::decode).
#[derive(Debug)]
pub enum Arg {
    /// An empty slot, as if the caller passed nothing here.
    Nil,
    /// An explicit destination capacity in bytes.
    Capacity(i64),
    /// An existing destination buffer, handed over for recycling. Its
    /// contents are discarded; on success the recycled storage comes back
    /// as the result.
    Buffer(Vec<u8>),
}

impl From<i64> for Arg {
    fn from(value: i64) -> Self {
        Arg::Capacity(value)
    }
}

impl From<usize> for Arg {
    fn from(value: usize) -> Self {
        Arg::Capacity(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<Vec<u8>> for Arg {
    fn from(buf: Vec<u8>) -> Self {
        Arg::Buffer(buf)
    }
}

/// Options accepted by [`encode`](crate::encode).
#[derive(Debug, Clone, Default)]
pub struct EncodeOptions {
    /// The compression level; unset means the balanced default.
    pub level: LevelSpec,
    /// The container format; unset means raw deflate.
    pub format: FormatSpec,
}

/// Options accepted by [`decode`](crate::decode).
#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
    /// The container format; unset means raw deflate.
    pub format: FormatSpec,
}

//==================================================================================
// 2. Shape Resolution — Encode
//==================================================================================

/// The resolved call shape of an encode request.
#[derive(Debug)]
pub(crate) struct EncodeShape {
    /// The requested destination capacity; `None` triggers bound
    /// computation.
    pub capacity: Option<usize>,
    /// An existing buffer to recycle as the destination.
    pub destination: Option<Vec<u8>>,
}

/// Resolves the positional arguments of an encode call.
///
/// Accepted shapes: nothing; a capacity; a destination buffer; or a
/// capacity followed by a destination buffer. Empty slots behave as if the
/// argument was omitted.
pub(crate) fn resolve_encode_shape(args: Vec<Arg>) -> Result<EncodeShape, OneflateError> {
    // The source buffer counts as the first argument in diagnostics.
    let given = args.len() + 1;
    let mut args = args.into_iter();

    match (args.next(), args.next(), args.next()) {
        (None, ..) => Ok(EncodeShape {
            capacity: None,
            destination: None,
        }),
        (Some(first), None, _) => match first {
            Arg::Nil => Ok(EncodeShape {
                capacity: None,
                destination: None,
            }),
            Arg::Capacity(value) => Ok(EncodeShape {
                capacity: Some(checked_capacity(value)?),
                destination: None,
            }),
            Arg::Buffer(buf) => Ok(EncodeShape {
                capacity: None,
                destination: Some(buf),
            }),
        },
        (Some(first), Some(second), None) => {
            let capacity = match first {
                Arg::Nil => None,
                Arg::Capacity(value) => Some(checked_capacity(value)?),
                Arg::Buffer(_) => {
                    return Err(OneflateError::InvalidArgument(
                        "wrong capacity argument - destination buffer given where capacity \
                         expected"
                            .to_string(),
                    ))
                }
            };
            let destination = match second {
                Arg::Nil => None,
                Arg::Buffer(buf) => Some(buf),
                Arg::Capacity(_) => {
                    return Err(OneflateError::InvalidArgument(
                        "wrong destination argument - capacity given where destination buffer \
                         expected"
                            .to_string(),
                    ))
                }
            };
            Ok(EncodeShape {
                capacity,
                destination,
            })
        }
        _ => Err(OneflateError::ArityError {
            given,
            expected: "1..3",
        }),
    }
}

//==================================================================================
// 3. Shape Resolution — Decode
//==================================================================================

/// Resolves the capacity and positional arguments of a decode call.
///
/// Unlike encode, the capacity is mandatory: the decompressed size of an
/// arbitrary stream cannot be bounded from its compressed size, so there is
/// no bound computation to fall back on. The only optional positional
/// argument is a destination buffer to recycle.
pub(crate) fn resolve_decode_shape(
    capacity: Option<i64>,
    args: Vec<Arg>,
) -> Result<(usize, Option<Vec<u8>>), OneflateError> {
    // The source and capacity both count as arguments in diagnostics.
    let given = args.len() + 2;
    let capacity = match capacity {
        Some(value) => checked_capacity(value)?,
        None => {
            return Err(OneflateError::RangeError(format!(
                "destination capacity is required (expect zero to {})",
                MAX_CAPACITY
            )))
        }
    };

    let mut args = args.into_iter();
    match (args.next(), args.next()) {
        (None, _) => Ok((capacity, None)),
        (Some(Arg::Nil), None) => Ok((capacity, None)),
        (Some(Arg::Buffer(buf)), None) => Ok((capacity, Some(buf))),
        (Some(Arg::Capacity(_)), None) => Err(OneflateError::InvalidArgument(
            "wrong destination argument - capacity given where destination buffer expected"
                .to_string(),
        )),
        _ => Err(OneflateError::ArityError {
            given,
            expected: "2..3",
        }),
    }
}

/// Validates a caller-supplied capacity against the addressable ceiling.
fn checked_capacity(value: i64) -> Result<usize, OneflateError> {
    if value < 0 || value as u64 > MAX_CAPACITY as u64 {
        return Err(OneflateError::RangeError(format!(
            "wrong negative or huge number - {} (expect zero to {})",
            value, MAX_CAPACITY
        )));
    }
    Ok(value as usize)
}

//==================================================================================
// 4. Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_shape_empty_and_nil() {
        let shape = resolve_encode_shape(vec![]).unwrap();
        assert_eq!(shape.capacity, None);
        assert!(shape.destination.is_none());

        let shape = resolve_encode_shape(vec![Arg::Nil]).unwrap();
        assert_eq!(shape.capacity, None);
        assert!(shape.destination.is_none());
    }

    #[test]
    fn test_encode_shape_single_argument_kind_dispatch() {
        let shape = resolve_encode_shape(vec![Arg::Capacity(100)]).unwrap();
        assert_eq!(shape.capacity, Some(100));
        assert!(shape.destination.is_none());

        let shape = resolve_encode_shape(vec![Arg::Buffer(vec![1, 2, 3])]).unwrap();
        assert_eq!(shape.capacity, None);
        assert_eq!(shape.destination.unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_encode_shape_two_arguments() {
        let shape =
            resolve_encode_shape(vec![Arg::Capacity(50), Arg::Buffer(Vec::new())]).unwrap();
        assert_eq!(shape.capacity, Some(50));
        assert!(shape.destination.is_some());

        // A nil capacity slot still means "compute the bound".
        let shape = resolve_encode_shape(vec![Arg::Nil, Arg::Nil]).unwrap();
        assert_eq!(shape.capacity, None);
        assert!(shape.destination.is_none());
    }

    #[test]
    fn test_encode_shape_arity_error_counts_source() {
        let err =
            resolve_encode_shape(vec![Arg::Nil, Arg::Nil, Arg::Nil]).unwrap_err();
        match err {
            OneflateError::ArityError { given, expected } => {
                assert_eq!(given, 4);
                assert_eq!(expected, "1..3");
            }
            other => panic!("expected ArityError, got {:?}", other),
        }
    }

    #[test]
    fn test_encode_shape_negative_capacity_is_range_error() {
        let err = resolve_encode_shape(vec![Arg::Capacity(-10)]).unwrap_err();
        assert!(matches!(err, OneflateError::RangeError(_)));
        assert!(err.to_string().contains("-10"));
    }

    #[test]
    fn test_encode_shape_kind_mismatch() {
        let err = resolve_encode_shape(vec![Arg::Buffer(Vec::new()), Arg::Buffer(Vec::new())])
            .unwrap_err();
        assert!(matches!(err, OneflateError::InvalidArgument(_)));

        let err =
            resolve_encode_shape(vec![Arg::Capacity(10), Arg::Capacity(10)]).unwrap_err();
        assert!(matches!(err, OneflateError::InvalidArgument(_)));
    }

    #[test]
    fn test_decode_shape_requires_capacity() {
        let err = resolve_decode_shape(None, vec![]).unwrap_err();
        assert!(matches!(err, OneflateError::RangeError(_)));
    }

    #[test]
    fn test_decode_shape_capacity_range() {
        assert!(resolve_decode_shape(Some(0), vec![]).is_ok());
        let err = resolve_decode_shape(Some(-1), vec![]).unwrap_err();
        assert!(matches!(err, OneflateError::RangeError(_)));
    }

    #[test]
    fn test_decode_shape_destination_and_arity() {
        let (capacity, dest) =
            resolve_decode_shape(Some(64), vec![Arg::Buffer(vec![9])]).unwrap();
        assert_eq!(capacity, 64);
        assert_eq!(dest.unwrap(), vec![9]);

        let err =
            resolve_decode_shape(Some(64), vec![Arg::Nil, Arg::Nil]).unwrap_err();
        match err {
            OneflateError::ArityError { given, expected } => {
                assert_eq!(given, 4);
                assert_eq!(expected, "2..3");
            }
            other => panic!("expected ArityError, got {:?}", other),
        }
    }
}
