//! Literal wire-byte scenarios: exact encodings, layered conventions, and
//! fail-closed decoding of hand-built buffers.

use skvpack::prelude::*;

skv_record! {
    #[derive(Debug, Clone, PartialEq)]
    struct Probe {
        a: u32,
        b: String,
        c: Option<i64>,
    }
}

#[test]
fn record_wire_layout() {
    let p = Probe {
        a: 1,
        b: "hi".to_string(),
        c: None,
    };
    let wire = encode_full(&p).unwrap();
    assert_eq!(
        wire.data(),
        &[0x93, 0x01, 0xc4, 0x02, b'h', b'i', 0xc0],
        "array-of-3, fixint 1, bin-2 \"hi\", nil"
    );
    let back: Probe = decode_full(&wire).unwrap();
    assert_eq!(back, p);
}

#[test]
fn empty_sequence_is_one_byte() {
    let empty: Vec<u16> = Vec::new();
    let wire = encode_full(&empty).unwrap();
    assert_eq!(wire.data(), &[0x90]);
    let back: Vec<u16> = decode_full(&wire).unwrap();
    assert!(back.is_empty());
}

#[test]
fn mapping_wire_layout_and_order() {
    let mut m: VecMap<String, i32> = VecMap::new();
    m.insert("x".to_string(), 7);
    m.insert("y".to_string(), -1);

    let wire = encode_full(&m).unwrap();
    assert_eq!(
        wire.data(),
        &[0x92, 0x92, 0xc4, 0x01, b'x', 0x07, 0x92, 0xc4, 0x01, b'y', 0xff],
        "outer array of 2, each pair an inner array of 2"
    );

    let back: VecMap<String, i32> = decode_full(&wire).unwrap();
    let entries: Vec<(&str, i32)> = back.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    assert_eq!(entries, vec![("x", 7), ("y", -1)]);
}

#[test]
fn duration_is_a_tick_count() {
    let d = Duration::from_nanos(1_500_000_000);
    let wire = encode_full(&d).unwrap();
    assert_eq!(wire.data(), &[0xce, 0x59, 0x68, 0x2f, 0x00]);
    let back: Duration = decode_full(&wire).unwrap();
    assert_eq!(back.count(), 1_500_000_000);
}

#[test]
fn invalid_first_byte_is_malformed() {
    let bin = Binary::from(vec![0xc1u8]);
    assert!(matches!(
        decode_full::<u8>(&bin),
        Err(DecodeError::Malformed(_))
    ));
}

#[test]
fn decimal_width_is_enforced() {
    let d = Decimal64::from_bytes([0x11; 8]);
    let wire = encode_full(&d).unwrap();
    assert_eq!(&wire.data()[..2], &[0xc4, 0x08]);
    assert_eq!(decode_full::<Decimal64>(&wire).unwrap(), d);

    // hand-built 7- and 9-byte payloads must fail
    let short = Binary::from(vec![0xc4u8, 0x07, 1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(
        decode_full::<Decimal64>(&short),
        Err(DecodeError::LengthMismatch {
            expected: 8,
            found: 7,
        })
    );
    let long = Binary::from(vec![0xc4u8, 0x09, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    assert_eq!(
        decode_full::<Decimal64>(&long),
        Err(DecodeError::LengthMismatch {
            expected: 8,
            found: 9,
        })
    );

    // a Decimal64 payload is not a Decimal128
    let wire64 = encode_full(&d).unwrap();
    assert_eq!(
        decode_full::<Decimal128>(&wire64),
        Err(DecodeError::LengthMismatch {
            expected: 16,
            found: 8,
        })
    );
}

#[test]
fn string_and_binary_encode_identically() {
    let s = "same bytes".to_string();
    let b = Binary::from(s.as_bytes().to_vec());
    let enc_s = encode_full(&s).unwrap();
    let enc_b = encode_full(&b).unwrap();
    assert_eq!(enc_s.data(), enc_b.data());
}

#[test]
fn absent_optional_is_exactly_nil() {
    assert_eq!(encode_full(&None::<i64>).unwrap().data(), &[0xc0]);
    assert_eq!(encode_full(&None::<String>).unwrap().data(), &[0xc0]);
    assert_eq!(encode_full(&None::<Vec<u8>>).unwrap().data(), &[0xc0]);
    assert_eq!(encode_full(&None::<Probe>).unwrap().data(), &[0xc0]);
}

#[test]
fn tuple_wire_layout() {
    let t = (1u8, "a".to_string(), true);
    let wire = encode_full(&t).unwrap();
    assert_eq!(wire.data(), &[0x93, 0x01, 0xc4, 0x01, b'a', 0xc3]);
    let back: (u8, String, bool) = decode_full(&wire).unwrap();
    assert_eq!(back, t);
}

#[test]
fn record_arity_rejects_short_arrays() {
    // Probe declares 3 fields; any shorter wire array fails, even though
    // the missing field is optional
    let two = Binary::from(vec![0x92u8, 0x01, 0xc4, 0x01, b'q']);
    assert_eq!(
        decode_full::<Probe>(&two),
        Err(DecodeError::Truncated { index: 2, len: 2 })
    );

    let one = Binary::from(vec![0x91u8, 0x01]);
    assert_eq!(
        decode_full::<Probe>(&one),
        Err(DecodeError::Truncated { index: 1, len: 1 })
    );
}

#[test]
fn multi_value_stream_reads_in_order() {
    let mut w = MPackWriter::new();
    w.write(&7u64);
    w.write("mid");
    w.write(&Some(false));
    let wire = w.flush().unwrap();

    let mut r = MPackReader::new(&wire);
    assert_eq!(r.read::<u64>().unwrap(), 7);
    assert_eq!(r.read::<String>().unwrap(), "mid");
    assert_eq!(r.read::<Option<bool>>().unwrap(), Some(false));
    assert!(r.is_exhausted());
    assert_eq!(r.consumed(), wire.size());
}

#[test]
fn fresh_reader_restarts_at_byte_zero() {
    let wire = encode_full(&42u8).unwrap();
    for _ in 0..3 {
        let mut r = MPackReader::new(&wire);
        assert_eq!(r.read::<u8>().unwrap(), 42);
    }
}

#[test]
fn nested_aggregates() {
    let v: Vec<Vec<Option<u16>>> = vec![vec![Some(1), None], vec![], vec![Some(65535)]];
    let wire = encode_full(&v).unwrap();
    let back: Vec<Vec<Option<u16>>> = decode_full(&wire).unwrap();
    assert_eq!(back, v);

    let mut inner = VecMap::new();
    inner.insert(1u8, vec![true, false]);
    let t = (inner.clone(), "tail".to_string());
    let wire = encode_full(&t).unwrap();
    let back: (VecMap<u8, Vec<bool>>, String) = decode_full(&wire).unwrap();
    assert_eq!(back, (inner, "tail".to_string()));
}
