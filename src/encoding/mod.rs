//! # Typed MessagePack encoder and decoder
//!
//! The wire format is plain MessagePack with the platform's layered
//! conventions: strings and decimals ride as the bin family, structured
//! records as fixed-arity arrays of their fields in declared order, mappings
//! as arrays of `[key, value]` pair arrays, and absent optionals as nil.
//! Nil appears on the wire in no other position.
//!
//! # Example
//!
//! ```
//! use skvpack::prelude::*;
//!
//! skv_record! {
//!     #[derive(Debug, Clone, PartialEq)]
//!     pub struct Heartbeat {
//!         pub term: u64,
//!         pub leader: String,
//!         pub lease: Option<Duration>,
//!     }
//! }
//!
//! let hb = Heartbeat { term: 7, leader: "n1".into(), lease: None };
//!
//! // one-shot
//! let wire = encode_full(&hb).unwrap();
//! let back: Heartbeat = decode_full(&wire).unwrap();
//! assert_eq!(back, hb);
//!
//! // or incrementally, mixing top-level values
//! let mut w = MPackWriter::new();
//! w.write(&hb);
//! w.write("trailing note");
//! let wire = w.flush().unwrap();
//!
//! let mut r = MPackReader::new(&wire);
//! let first: Heartbeat = r.read().unwrap();
//! let second: String = r.read().unwrap();
//! assert_eq!((first, second.as_str()), (hb, "trailing note"));
//! ```

mod constants;
pub mod de;
pub mod ser;

pub use de::{MPackNodeReader, MPackReader, MPackStructReader, Unpack};
pub use ser::{MPackWriter, Pack};

use crate::binary::Binary;
use crate::errors::{DecodeError, EncodeError};

/// Encodes a single value into a fresh buffer.
pub fn encode_full<T: Pack + ?Sized>(value: &T) -> Result<Binary, EncodeError> {
    let mut w = MPackWriter::new();
    w.write(value);
    w.flush()
}

/// Decodes a single value from the start of a buffer.
pub fn decode_full<T: Unpack>(source: &Binary) -> Result<T, DecodeError> {
    MPackReader::new(source).read()
}
