use thiserror::Error;

/// Failures surfaced while decoding a buffer into typed values.
///
/// Decoders are fail-closed: any of these leaves the destination
/// unconstructed, so partially filled aggregates are never observable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input is not well-formed MessagePack (bad tag, short payload,
    /// excessive nesting).
    #[error("malformed input: {0}")]
    Malformed(&'static str),

    /// A node's tag does not yield the requested type.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// Nil appeared where a non-optional destination was requested.
    #[error("unexpected nil for non-optional destination")]
    UnexpectedNil,

    /// A fixed-width binary payload had the wrong size.
    #[error("length mismatch: expected {expected} bytes, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// A field was requested at an index beyond the array length.
    #[error("truncated: field {index} requested from array of length {len}")]
    Truncated { index: usize, len: usize },
}

/// Failures surfaced by the writer at flush time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// A binary or array was too large for its MessagePack length header.
    #[error("writer failure: value of {0} bytes exceeds the wire size limit")]
    Oversize(usize),
}

/// Out-of-range sub-buffer request on a [`Binary`](crate::Binary).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("share of [{offset}, {offset} + {len}) out of bounds for buffer of size {size}")]
pub struct RangeError {
    pub offset: usize,
    pub len: usize,
    pub size: usize,
}
