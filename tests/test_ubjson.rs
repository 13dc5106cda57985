extern crate env_logger;
extern crate esprima_ast;
extern crate tempdir;

use esprima_ast::ubjson::{self, UbjsonReader, UbjsonWriter};
use esprima_ast::value::Value;
use esprima_ast::StructuredWriter;

use std::fs::File;
use std::io::{BufReader, BufWriter};

fn encode(value: &Value) -> Vec<u8> {
    ubjson::to_vec(value).expect("Could not encode value")
}

#[test]
fn test_scenarios() {
    let _ = env_logger::try_init();

    assert_eq!(encode(&Value::Null), vec![0x5A]);
    assert_eq!(encode(&Value::Bool(true)), vec![0x54]);
    assert_eq!(encode(&Value::Bool(false)), vec![0x46]);
    assert_eq!(encode(&Value::Integer(5)), vec![b'l', 0x05, 0x00, 0x00, 0x00]);
    assert_eq!(encode(&"a".into()), vec![0x43, 0x61]);
    assert_eq!(
        encode(&"hi".into()),
        vec![b'S', b'l', 0x02, 0x00, 0x00, 0x00, 0x68, 0x69]
    );
    assert_eq!(encode(&Value::Float(std::f64::INFINITY)), vec![0x5A]);
    assert_eq!(encode(&Value::Float(std::f64::NEG_INFINITY)), vec![0x5A]);
}

#[test]
fn test_single_char_boundary() {
    let _ = env_logger::try_init();

    for c in &["\u{0}", "\u{7f}", "z"] {
        let bytes = encode(&(*c).into());
        assert_eq!(bytes.len(), 2, "{:?}", c);
        assert_eq!(bytes[0], b'C');
    }
    for s in &["\u{80}", "é", "\u{1F600}", "", "ab"] {
        let bytes = encode(&(*s).into());
        assert_eq!(bytes[0], b'S', "{:?}", s);
        assert_eq!(bytes[1], b'l');
        assert_eq!(bytes.len(), 6 + s.len());
    }
}

#[test]
fn test_member_names_use_string_rule() {
    let value = Value::Object(vec![
        ("x".to_string(), Value::Null),
        ("yz".to_string(), Value::Bool(true)),
    ]);
    assert_eq!(
        encode(&value),
        vec![
            b'{', b'C', b'x', b'Z', b'S', b'l', 2, 0, 0, 0, b'y', b'z', b'T', b'}'
        ]
    );
}

#[test]
fn test_value_roundtrip() {
    let _ = env_logger::try_init();

    let samples = vec![
        Value::Null,
        Value::Bool(true),
        Value::Bool(false),
        Value::Integer(0),
        Value::Integer(i64::from(std::i32::MIN)),
        Value::Integer(i64::from(std::i32::MAX)),
        Value::Integer(i64::from(std::i32::MAX) + 1),
        Value::Integer(std::i64::MIN),
        Value::Integer(std::i64::MAX),
        Value::Float(0.5),
        Value::Float(-1e300),
        Value::Float(std::f64::MIN_POSITIVE),
        "".into(),
        "a".into(),
        "\u{80}".into(),
        "Hello, world!".into(),
        Value::Array(vec![]),
        Value::Object(vec![]),
        Value::Array(vec![
            Value::Integer(1),
            Value::Object(vec![("key".to_string(), Value::Array(vec![Value::Null]))]),
            "nested".into(),
        ]),
    ];
    for sample in samples {
        let bytes = encode(&sample);
        let decoded = ubjson::from_slice(&bytes).expect("Could not decode value");
        assert_eq!(decoded, sample);
    }

    for infinity in &[std::f64::INFINITY, std::f64::NEG_INFINITY] {
        let bytes = encode(&Value::Float(*infinity));
        assert_eq!(ubjson::from_slice(&bytes).unwrap(), Value::Null);
    }
}

#[test]
fn test_json_to_ubjson() {
    let json: serde_json::Value =
        serde_json::from_str(r#"{"name": "x", "values": [1, 2.5, null, true], "n": -5000000000}"#)
            .expect("Could not parse JSON");

    let mut writer = UbjsonWriter::new(Vec::new());
    esprima_ast::value::write_json(&json, &mut writer).expect("Could not encode JSON");
    let bytes = writer.done().unwrap();

    assert_eq!(ubjson::from_slice(&bytes).unwrap(), Value::from(json));
}

#[test]
fn test_file_sink() {
    let _ = env_logger::try_init();

    let dir = tempdir::TempDir::new("test_file_sink").expect("Could not create temporary directory");
    let path = dir.path().join("out.ubj");

    {
        let file = File::create(&path).expect("Could not create file");
        let mut writer = UbjsonWriter::new(BufWriter::new(file));
        writer.start_array().unwrap();
        for i in 0..1000 {
            writer.integer(i * 1_000_000).unwrap();
        }
        writer.string(&"long string ".repeat(100)).unwrap();
        writer.end_array().unwrap();
        writer.done().expect("Could not flush file");
    }

    let file = File::open(&path).expect("Could not open file");
    let mut reader = UbjsonReader::new(BufReader::new(file));
    match reader.read_value().expect("Could not decode file") {
        Value::Array(items) => {
            assert_eq!(items.len(), 1001);
            assert_eq!(items[999], Value::Integer(999_000_000));
            assert_eq!(items[1000], Value::String("long string ".repeat(100)));
        }
        other => panic!("Unexpected value {:?}", other),
    }
}

#[test]
fn test_sequence_of_values() {
    let mut bytes = encode(&Value::Integer(1));
    bytes.extend(encode(&"second".into()));

    let mut reader = UbjsonReader::new(&bytes[..]);
    assert_eq!(reader.read_value().unwrap(), Value::Integer(1));
    assert_eq!(reader.read_value().unwrap(), Value::from("second"));
    assert!(reader.read_value().is_err());
}
