pub use crate::{
    decode_full, encode_full, skv_enum, skv_record, Binary, DecodeError, Decimal128, Decimal64,
    Duration, EncodeError, MPackNodeReader, MPackReader, MPackStructReader, MPackWriter, Pack,
    RangeError, Record, Unpack, VecMap,
};
pub use hashbrown::HashMap;
