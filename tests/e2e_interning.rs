//! End-to-end interning tests.
//!
//! These drive a full encoder/decoder pair over real wire bytes, verifying
//! the two dictionaries stay in lockstep from byte order alone.

use hex_literal::hex;
use internpack::{Decoder, Encoder, PackError, Value, WireConfig, MAX_DICT_ENTRIES};
use std::io::Cursor;

/// Repeated eligible string: one literal, then references, exact bytes.
#[test]
fn test_scenario_repeated_string_sequence() {
    let input = ["abcdef", "xy", "abcdef", "abcdef"];

    let mut enc = Encoder::new(Vec::new());
    for s in input {
        enc.encode_interned_str(s).unwrap();
    }
    assert_eq!(enc.dict_len(), 1);
    let wire = enc.into_inner();

    // literal "abcdef" (index 0), literal "xy" (too short), ref(0), ref(0)
    assert_eq!(wire, hex!("a6616263646566 a27879 d48000 d48000"));

    let mut dec = Decoder::new(Cursor::new(wire));
    for expected in input {
        assert_eq!(dec.decode_interned_str().unwrap(), expected);
    }
    assert_eq!(dec.dict_len(), 1);
}

/// Nil round-trips to an empty string and leaves both dictionaries alone.
#[test]
fn test_scenario_nil_value() {
    let mut enc = Encoder::new(Vec::new());
    enc.encode_interned_value(None).unwrap();
    assert_eq!(enc.dict_len(), 0);
    let wire = enc.into_inner();
    assert_eq!(wire, hex!("c0"));

    let mut dec = Decoder::new(Cursor::new(wire));
    assert_eq!(dec.decode_interned_str().unwrap(), "");
    assert_eq!(dec.dict_len(), 0);
}

/// Strings below the length threshold stay literal no matter how often
/// they repeat.
#[test]
fn test_short_strings_stay_literal() {
    let mut enc = Encoder::new(Vec::new());
    for _ in 0..50 {
        enc.encode_interned_str("ab").unwrap();
    }
    assert_eq!(enc.dict_len(), 0);
    let wire = enc.into_inner();
    assert_eq!(wire.len(), 50 * 3);

    let mut dec = Decoder::new(Cursor::new(wire));
    for _ in 0..50 {
        assert_eq!(dec.decode_interned_str().unwrap(), "ab");
    }
    assert_eq!(dec.dict_len(), 0);
}

/// Mixed stream through the interface-typed entry points: non-string
/// values delegate to the generic codec without byte loss or duplication.
#[test]
fn test_interface_typed_mixed_stream() {
    let values = [
        Value::Int(500),
        Value::from("abcdef"),
        Value::Bool(true),
        Value::from("abcdef"),
        Value::Array(vec![Value::Int(1), Value::Int(2)]),
        Value::from("abcdef"),
        Value::Float(1.5),
    ];

    let mut enc = Encoder::new(Vec::new());
    for v in &values {
        enc.encode_interned_value(Some(v)).unwrap();
    }
    assert_eq!(enc.dict_len(), 1);

    let mut dec = Decoder::new(Cursor::new(enc.into_inner()));
    for v in &values {
        assert_eq!(&dec.decode_interned_value().unwrap(), v);
    }
    assert_eq!(dec.dict_len(), 1);
}

/// A reference appearing as a map value inside a generic container
/// resolves through the dictionary, because the reserved extension decoder
/// is registered in the configuration.
#[test]
fn test_reference_inside_generic_container() {
    let mut dec = Decoder::new(Cursor::new(
        // literal "abcdef" interned at index 0, then {"k": ref(0)}
        hex!("a6616263646566 81a16b d48000").to_vec(),
    ));
    assert_eq!(dec.decode_interned_str().unwrap(), "abcdef");
    assert_eq!(
        dec.decode_value().unwrap(),
        Value::Map(vec![(Value::from("k"), Value::from("abcdef"))])
    );
}

/// Without the interning registration, reserved-id envelopes decode as
/// opaque extension payloads.
#[test]
fn test_unregistered_config_leaves_references_opaque() {
    let mut dec = Decoder::with_config(
        Cursor::new(hex!("d48000").to_vec()),
        WireConfig::without_string_interning(),
    );
    assert_eq!(dec.decode_value().unwrap(), Value::Ext(i8::MIN, vec![0]));
}

/// A dangling reference is a well-typed error, never a wrong string.
#[test]
fn test_dangling_reference_is_error() {
    let mut dec = Decoder::new(Cursor::new(hex!("d48002").to_vec()));
    assert!(matches!(
        dec.decode_interned_str(),
        Err(PackError::IndexOutOfRange(2))
    ));
}

/// The dictionary survives across top-level calls on the same instance:
/// a literal from call one is referenced in call two.
#[test]
fn test_dictionary_spans_encode_calls() {
    let mut enc = Encoder::new(Vec::new());
    enc.encode_interned_str("session-key").unwrap();
    // second top-level call on the same encoder
    enc.encode_interned_str("session-key").unwrap();
    let wire = enc.into_inner();
    assert_eq!(wire[wire.len() - 3..], hex!("d48000"));
}

/// Indices grow past one byte: index 256 must ride a fixext2 envelope.
#[test]
fn test_two_byte_reference_width() {
    let mut enc = Encoder::new(Vec::new());
    for i in 0..=256 {
        enc.encode_interned_str(&format!("key-{i:04}")).unwrap();
    }
    enc.encode_interned_str("key-0256").unwrap();
    assert_eq!(enc.dict_len(), 257);
    let wire = enc.into_inner();
    assert_eq!(wire[wire.len() - 4..], hex!("d5800100"));

    let mut dec = Decoder::new(Cursor::new(wire));
    for i in 0..=256 {
        assert_eq!(dec.decode_interned_str().unwrap(), format!("key-{i:04}"));
    }
    assert_eq!(dec.decode_interned_str().unwrap(), "key-0256");
}

/// Once 65 535 distinct strings are interned, the next distinct eligible
/// string never enters the dictionary and stays literal on the wire even
/// when it recurs.
#[test]
fn test_dictionary_cap_is_permanent() {
    let mut enc = Encoder::new(Vec::new());
    for i in 0..MAX_DICT_ENTRIES {
        enc.encode_interned_str(&format!("key-{i:05}")).unwrap();
    }
    assert_eq!(enc.dict_len(), MAX_DICT_ENTRIES);

    let overflow_mark = {
        let mut probe = Encoder::new(Vec::new());
        probe.encode_interned_str("straggler").unwrap();
        probe.into_inner().len()
    };

    let before = enc.dict_len();
    enc.encode_interned_str("straggler").unwrap();
    enc.encode_interned_str("straggler").unwrap();
    assert_eq!(enc.dict_len(), before);
    let wire = enc.into_inner();
    // both occurrences are full literals, not references
    let tail = &wire[wire.len() - 2 * overflow_mark..];
    assert_eq!(tail[..overflow_mark], tail[overflow_mark..]);
    assert_eq!(tail[0], 0xa9); // fixstr of length 9

    // Earlier entries still reference fine, and the decode side honors the
    // same cap.
    let mut dec = Decoder::new(Cursor::new(wire));
    for i in 0..MAX_DICT_ENTRIES {
        assert_eq!(dec.decode_interned_str().unwrap(), format!("key-{i:05}"));
    }
    assert_eq!(dec.dict_len(), MAX_DICT_ENTRIES);
    assert_eq!(dec.decode_interned_str().unwrap(), "straggler");
    assert_eq!(dec.decode_interned_str().unwrap(), "straggler");
    assert_eq!(dec.dict_len(), MAX_DICT_ENTRIES);
}
