/// Largest positive fixint, 0x00..=0x7f.
pub(crate) const POS_FIXINT_MAX: u64 = 0x7f;
/// Smallest negative fixint, 0xe0..=0xff.
pub(crate) const NEG_FIXINT_MIN: i64 = -32;

/// Fixarray tag base, 0x90..=0x9f. The fixmap (0x80..=0x8f) and fixstr
/// (0xa0..=0xbf) families are parsed but never emitted.
pub(crate) const FIXARRAY: u8 = 0x90;
/// Largest fixarray element count.
pub(crate) const FIXCOL_MAX: usize = 0x0f;

pub(crate) const NIL: u8 = 0xc0;
/// Reserved, never emitted by any conforming encoder.
pub(crate) const NEVER_USED: u8 = 0xc1;
pub(crate) const FALSE: u8 = 0xc2;
pub(crate) const TRUE: u8 = 0xc3;

pub(crate) const BIN8: u8 = 0xc4;
pub(crate) const BIN16: u8 = 0xc5;
pub(crate) const BIN32: u8 = 0xc6;

pub(crate) const EXT8: u8 = 0xc7;
pub(crate) const EXT16: u8 = 0xc8;
pub(crate) const EXT32: u8 = 0xc9;

pub(crate) const FLOAT32: u8 = 0xca;
pub(crate) const FLOAT64: u8 = 0xcb;

pub(crate) const UINT8: u8 = 0xcc;
pub(crate) const UINT16: u8 = 0xcd;
pub(crate) const UINT32: u8 = 0xce;
pub(crate) const UINT64: u8 = 0xcf;

pub(crate) const INT8: u8 = 0xd0;
pub(crate) const INT16: u8 = 0xd1;
pub(crate) const INT32: u8 = 0xd2;
pub(crate) const INT64: u8 = 0xd3;

pub(crate) const FIXEXT1: u8 = 0xd4;
pub(crate) const FIXEXT16: u8 = 0xd8;

pub(crate) const STR8: u8 = 0xd9;
pub(crate) const STR16: u8 = 0xda;
pub(crate) const STR32: u8 = 0xdb;

pub(crate) const ARRAY16: u8 = 0xdc;
pub(crate) const ARRAY32: u8 = 0xdd;

pub(crate) const MAP16: u8 = 0xde;
pub(crate) const MAP32: u8 = 0xdf;

/// Parser nesting cap; deeper input is rejected as malformed.
pub(crate) const MAX_DEPTH: u32 = 32;
