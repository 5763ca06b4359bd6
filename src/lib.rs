//! # skvpack
//!
//! The typed MessagePack codec every SKV wire message and persisted record
//! is built on. A producer writes values of any supported kind into an
//! [`MPackWriter`] and flushes to a [`Binary`]; a consumer walks the buffer
//! back out through an [`MPackReader`]. The encoding is symmetric: for every
//! supported value, decode(encode(v)) == v, byte for byte, across process
//! restarts and versions that keep their declared field lists.
//!
//! Three properties the rest of the platform leans on:
//!
//! * **Positional records.** A structured record is a fixed-arity array of
//!   its fields in declared order, with no names or tags on the wire (see
//!   [`skv_record!`]).
//! * **Zero-copy blobs.** A decoded [`Binary`] shares the source buffer's
//!   allocation instead of copying, and pins it until dropped or
//!   [`copy`](Binary::copy)-ed.
//! * **Fail-closed decoding.** Malformed or mistyped input yields a
//!   [`DecodeError`], never a panic, and never a partially filled
//!   destination.
//!
//! The codec is synchronous and performs no I/O; buffer handles use atomic
//! share counts so decoded values can cross task and shard boundaries.

/// Share-counted byte buffers.
pub mod binary;
/// Opaque fixed-width decimals.
pub mod decimal;
/// Signed nanosecond durations.
pub mod duration;
/// The wire encoder and decoder.
pub mod encoding;
/// Error types.
pub mod errors;
/// Prelude.
pub mod prelude;
/// Structured records and enumerations.
pub mod record;
/// An insertion-ordered map of pairs.
pub mod vecmap;

pub use binary::Binary;
pub use decimal::{Decimal128, Decimal64};
pub use duration::Duration;
pub use encoding::{
    decode_full, encode_full, MPackNodeReader, MPackReader, MPackStructReader, MPackWriter, Pack,
    Unpack,
};
pub use errors::{DecodeError, EncodeError, RangeError};
pub use record::Record;
pub use vecmap::VecMap;
