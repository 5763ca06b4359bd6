//! Share-counted byte buffers.
//!
//! [`Binary`] is the container every codec operation starts or ends with: the
//! writer flushes into one, the reader parses out of one, and decoded binary
//! blobs are zero-copy slices of the source buffer. Handles are cheap to
//! clone; the underlying allocation is freed when the last handle drops.

use std::fmt;
use std::ops::Deref;

use bytes::Bytes;

use crate::errors::RangeError;

/// A reference-counted, sliceable, contiguous byte container.
///
/// Cloning a `Binary` or [`share`](Binary::share)-ing a sub-range never
/// copies bytes; it bumps an atomic count on the owning allocation, so
/// handles may be moved freely across tasks. A decoded binary blob shares
/// its source buffer this way and therefore pins the *entire* source
/// allocation; callers that want to release the source should take a
/// [`copy`](Binary::copy).
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Binary(Bytes);

impl Binary {
    /// An empty buffer.
    pub fn new() -> Binary {
        Binary(Bytes::new())
    }

    /// Wraps a static byte slice without copying.
    pub fn from_static(data: &'static [u8]) -> Binary {
        Binary(Bytes::from_static(data))
    }

    /// Number of readable bytes.
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Indicates whether the buffer holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The readable bytes, `data[0..size)`.
    pub fn data(&self) -> &[u8] {
        &self.0
    }

    /// Produces a buffer over `data[offset..offset + len)` sharing this
    /// buffer's owner. Fails if the range is out of bounds; there is no
    /// silent truncation.
    pub fn share(&self, offset: usize, len: usize) -> Result<Binary, RangeError> {
        match offset.checked_add(len) {
            Some(end) if end <= self.0.len() => Ok(Binary(self.0.slice(offset..end))),
            _ => Err(RangeError {
                offset,
                len,
                size: self.0.len(),
            }),
        }
    }

    /// Produces a deep copy with its own allocation, releasing any tie to
    /// the source buffer.
    pub fn copy(&self) -> Binary {
        Binary(Bytes::copy_from_slice(&self.0))
    }
}

impl Deref for Binary {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for Binary {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Binary {
    fn from(v: Vec<u8>) -> Binary {
        Binary(Bytes::from(v))
    }
}

impl From<Bytes> for Binary {
    fn from(b: Bytes) -> Binary {
        Binary(b)
    }
}

impl From<&'static [u8]> for Binary {
    fn from(data: &'static [u8]) -> Binary {
        Binary::from_static(data)
    }
}

impl fmt::Debug for Binary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Binary[{}](", self.0.len())?;
        for b in self.0.iter().take(16) {
            write!(f, "{:02x}", b)?;
        }
        if self.0.len() > 16 {
            write!(f, "..")?;
        }
        write!(f, ")")
    }
}
