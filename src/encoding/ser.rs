use std::collections::BTreeMap;
use std::hash::BuildHasher;

use hashbrown::HashMap;
use tracing::trace;

use super::constants::*;
use crate::binary::Binary;
use crate::decimal::{Decimal128, Decimal64};
use crate::duration::Duration;
use crate::errors::EncodeError;
use crate::vecmap::VecMap;

/// The typed writer: accepts values of any supported kind and accumulates
/// their MessagePack encoding in a growable output buffer.
///
/// Errors are sticky: a failed write poisons the writer and the failure is
/// reported once, at [`flush`](MPackWriter::flush). Repeated calls to
/// [`write`](MPackWriter::write) append successive top-level values; there is
/// no implicit array wrapper around them.
pub struct MPackWriter {
    out: Vec<u8>,
    err: Option<EncodeError>,
    /// Remaining element count of each open array, innermost last.
    /// Debug builds verify every array receives exactly its declared count.
    #[cfg(debug_assertions)]
    open: Vec<u64>,
}

impl Default for MPackWriter {
    fn default() -> Self {
        MPackWriter::new()
    }
}

impl MPackWriter {
    pub fn new() -> MPackWriter {
        MPackWriter {
            out: Vec::new(),
            err: None,
            #[cfg(debug_assertions)]
            open: Vec::new(),
        }
    }

    pub fn with_capacity(cap: usize) -> MPackWriter {
        MPackWriter {
            out: Vec::with_capacity(cap),
            err: None,
            #[cfg(debug_assertions)]
            open: Vec::new(),
        }
    }

    /// Writes one value of any supported kind.
    pub fn write<T: Pack + ?Sized>(&mut self, value: &T) {
        value.pack(self);
    }

    /// Closes the writer and returns the accumulated bytes.
    ///
    /// Fails if any write recorded an error.
    pub fn flush(self) -> Result<Binary, EncodeError> {
        #[cfg(debug_assertions)]
        debug_assert!(
            self.open.is_empty(),
            "flush with {} unfinished array(s)",
            self.open.len()
        );
        match self.err {
            Some(e) => Err(e),
            None => {
                trace!(bytes = self.out.len(), "writer flushed");
                Ok(Binary::from(self.out))
            }
        }
    }

    fn fail(&mut self, e: EncodeError) {
        if self.err.is_none() {
            self.err = Some(e);
        }
    }

    #[inline]
    fn note_element(&mut self) {
        #[cfg(debug_assertions)]
        if let Some(rem) = self.open.last_mut() {
            debug_assert!(*rem > 0, "array received more elements than declared");
            *rem -= 1;
        }
    }

    pub fn put_nil(&mut self) {
        self.note_element();
        self.out.push(NIL);
    }

    pub fn put_bool(&mut self, v: bool) {
        self.note_element();
        self.out.push(if v { TRUE } else { FALSE });
    }

    /// Emits the shortest MessagePack form of an unsigned integer.
    pub fn put_u64(&mut self, v: u64) {
        self.note_element();
        if v <= POS_FIXINT_MAX {
            self.out.push(v as u8);
        } else if v <= u8::MAX as u64 {
            self.out.push(UINT8);
            self.out.push(v as u8);
        } else if v <= u16::MAX as u64 {
            self.out.push(UINT16);
            self.out.extend_from_slice(&(v as u16).to_be_bytes());
        } else if v <= u32::MAX as u64 {
            self.out.push(UINT32);
            self.out.extend_from_slice(&(v as u32).to_be_bytes());
        } else {
            self.out.push(UINT64);
            self.out.extend_from_slice(&v.to_be_bytes());
        }
    }

    /// Emits the shortest MessagePack form of a signed integer.
    /// Non-negative values collapse to the unsigned forms.
    pub fn put_i64(&mut self, v: i64) {
        if v >= 0 {
            return self.put_u64(v as u64);
        }
        self.note_element();
        if v >= NEG_FIXINT_MIN {
            self.out.push(v as u8);
        } else if v >= i8::MIN as i64 {
            self.out.push(INT8);
            self.out.push(v as u8);
        } else if v >= i16::MIN as i64 {
            self.out.push(INT16);
            self.out.extend_from_slice(&(v as i16).to_be_bytes());
        } else if v >= i32::MIN as i64 {
            self.out.push(INT32);
            self.out.extend_from_slice(&(v as i32).to_be_bytes());
        } else {
            self.out.push(INT64);
            self.out.extend_from_slice(&v.to_be_bytes());
        }
    }

    pub fn put_f32(&mut self, v: f32) {
        self.note_element();
        self.out.push(FLOAT32);
        self.out.extend_from_slice(&v.to_be_bytes());
    }

    pub fn put_f64(&mut self, v: f64) {
        self.note_element();
        self.out.push(FLOAT64);
        self.out.extend_from_slice(&v.to_be_bytes());
    }

    /// Emits a binary payload. Strings and decimals ride through here as
    /// well; the codec never emits the msgpack str family.
    pub fn put_bin(&mut self, data: &[u8]) {
        self.note_element();
        let len = data.len();
        if len <= u8::MAX as usize {
            self.out.push(BIN8);
            self.out.push(len as u8);
        } else if len <= u16::MAX as usize {
            self.out.push(BIN16);
            self.out.extend_from_slice(&(len as u16).to_be_bytes());
        } else if len <= u32::MAX as usize {
            self.out.push(BIN32);
            self.out.extend_from_slice(&(len as u32).to_be_bytes());
        } else {
            self.fail(EncodeError::Oversize(len));
            return;
        }
        self.out.extend_from_slice(data);
    }

    /// Opens an array of exactly `len` elements. Every element subsequently
    /// written counts against the declared length; close with
    /// [`finish_array`](MPackWriter::finish_array).
    pub fn start_array(&mut self, len: usize) {
        self.note_element();
        if len <= FIXCOL_MAX {
            self.out.push(FIXARRAY | len as u8);
        } else if len <= u16::MAX as usize {
            self.out.push(ARRAY16);
            self.out.extend_from_slice(&(len as u16).to_be_bytes());
        } else if len <= u32::MAX as usize {
            self.out.push(ARRAY32);
            self.out.extend_from_slice(&(len as u32).to_be_bytes());
        } else {
            self.fail(EncodeError::Oversize(len));
            return;
        }
        #[cfg(debug_assertions)]
        self.open.push(len as u64);
    }

    /// Closes the innermost open array. Debug builds verify the declared
    /// element count was written exactly.
    pub fn finish_array(&mut self) {
        #[cfg(debug_assertions)]
        {
            let rem = self.open.pop();
            debug_assert_eq!(
                rem,
                Some(0),
                "array finished before all declared elements were written"
            );
        }
    }
}

/// A value the writer can emit.
///
/// Every supported kind implements this; a type with its own external
/// serialization implements it directly (together with
/// [`Unpack`](crate::Unpack)), and structured records get an implementation
/// from [`skv_record!`](crate::skv_record).
pub trait Pack {
    fn pack(&self, w: &mut MPackWriter);
}

impl<T: Pack + ?Sized> Pack for &T {
    fn pack(&self, w: &mut MPackWriter) {
        (**self).pack(w);
    }
}

macro_rules! pack_via_u64 {
    ($($t:ty)*) => {$(
        impl Pack for $t {
            #[inline]
            fn pack(&self, w: &mut MPackWriter) {
                w.put_u64(*self as u64);
            }
        }
    )*};
}

macro_rules! pack_via_i64 {
    ($($t:ty)*) => {$(
        impl Pack for $t {
            #[inline]
            fn pack(&self, w: &mut MPackWriter) {
                w.put_i64(*self as i64);
            }
        }
    )*};
}

pack_via_u64!(u8 u16 u32 u64);
pack_via_i64!(i8 i16 i32 i64);

impl Pack for bool {
    #[inline]
    fn pack(&self, w: &mut MPackWriter) {
        w.put_bool(*self);
    }
}

impl Pack for f32 {
    #[inline]
    fn pack(&self, w: &mut MPackWriter) {
        w.put_f32(*self);
    }
}

impl Pack for f64 {
    #[inline]
    fn pack(&self, w: &mut MPackWriter) {
        w.put_f64(*self);
    }
}

// Strings are emitted as the bin family, never as msgpack str.
impl Pack for str {
    fn pack(&self, w: &mut MPackWriter) {
        w.put_bin(self.as_bytes());
    }
}

impl Pack for String {
    fn pack(&self, w: &mut MPackWriter) {
        w.put_bin(self.as_bytes());
    }
}

impl Pack for Binary {
    fn pack(&self, w: &mut MPackWriter) {
        w.put_bin(self.data());
    }
}

impl Pack for Duration {
    fn pack(&self, w: &mut MPackWriter) {
        w.put_i64(self.count());
    }
}

impl Pack for Decimal64 {
    fn pack(&self, w: &mut MPackWriter) {
        w.put_bin(&self.to_bytes());
    }
}

impl Pack for Decimal128 {
    fn pack(&self, w: &mut MPackWriter) {
        w.put_bin(&self.to_bytes());
    }
}

impl<T: Pack> Pack for Option<T> {
    fn pack(&self, w: &mut MPackWriter) {
        match self {
            None => w.put_nil(),
            Some(v) => v.pack(w),
        }
    }
}

impl<T: Pack> Pack for [T] {
    fn pack(&self, w: &mut MPackWriter) {
        w.start_array(self.len());
        for el in self {
            el.pack(w);
        }
        w.finish_array();
    }
}

impl<T: Pack> Pack for Vec<T> {
    fn pack(&self, w: &mut MPackWriter) {
        self.as_slice().pack(w);
    }
}

fn pack_entries<'a, K, V, I>(w: &mut MPackWriter, len: usize, entries: I)
where
    K: Pack + 'a,
    V: Pack + 'a,
    I: Iterator<Item = (&'a K, &'a V)>,
{
    w.start_array(len);
    for (k, v) in entries {
        w.start_array(2);
        k.pack(w);
        v.pack(w);
        w.finish_array();
    }
    w.finish_array();
}

impl<K: Pack, V: Pack> Pack for VecMap<K, V> {
    fn pack(&self, w: &mut MPackWriter) {
        pack_entries(w, self.len(), self.iter().map(|(k, v)| (k, v)));
    }
}

impl<K: Pack, V: Pack, S: BuildHasher> Pack for HashMap<K, V, S> {
    fn pack(&self, w: &mut MPackWriter) {
        pack_entries(w, self.len(), self.iter());
    }
}

impl<K: Pack, V: Pack> Pack for BTreeMap<K, V> {
    fn pack(&self, w: &mut MPackWriter) {
        pack_entries(w, self.len(), self.iter());
    }
}

macro_rules! tuple_pack {
    ($len:expr, $($idx:tt: $typ:ident),*) => {
        impl<$($typ: Pack),*> Pack for ($($typ,)*) {
            fn pack(&self, w: &mut MPackWriter) {
                w.start_array($len);
                $(self.$idx.pack(w);)*
                w.finish_array();
            }
        }
    };
}

tuple_pack!(1, 0: A);
tuple_pack!(2, 0: A, 1: B);
tuple_pack!(3, 0: A, 1: B, 2: C);
tuple_pack!(4, 0: A, 1: B, 2: C, 3: D);
tuple_pack!(5, 0: A, 1: B, 2: C, 3: D, 4: E);
tuple_pack!(6, 0: A, 1: B, 2: C, 3: D, 4: E, 5: F);
tuple_pack!(7, 0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G);
tuple_pack!(8, 0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G, 7: H);
tuple_pack!(9, 0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G, 7: H, 8: I);
tuple_pack!(10, 0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G, 7: H, 8: I, 9: J);
tuple_pack!(11, 0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G, 7: H, 8: I, 9: J, 10: K);
tuple_pack!(12, 0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G, 7: H, 8: I, 9: J, 10: K, 11: L);
