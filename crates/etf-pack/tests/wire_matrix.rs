use etf_pack::{decode, encode, EtfDecoder, EtfEncoder, TermValue};

fn obj(fields: &[(&str, TermValue)]) -> TermValue {
    TermValue::Object(
        fields
            .iter()
            .map(|(k, v)| ((*k).to_owned(), v.clone()))
            .collect(),
    )
}

/// What a value is expected to look like after one encode/decode cycle:
/// integers whose magnitude needs more than 4 digit bytes come back as
/// decimal strings, everything else is unchanged.
fn expected_after_roundtrip(value: &TermValue) -> TermValue {
    match value {
        TermValue::Integer(i) if i.unsigned_abs() > u32::MAX as u64 => {
            TermValue::Str(i.to_string())
        }
        TermValue::UInteger(u) if *u > u32::MAX as u64 => TermValue::Str(u.to_string()),
        TermValue::UInteger(u) => TermValue::Integer(*u as i64),
        TermValue::Array(arr) => {
            TermValue::Array(arr.iter().map(expected_after_roundtrip).collect())
        }
        TermValue::Object(obj) => TermValue::Object(
            obj.iter()
                .map(|(k, v)| (k.clone(), expected_after_roundtrip(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}

#[test]
fn encoder_wire_matrix() {
    let mut encoder = EtfEncoder::new();

    assert_eq!(
        encoder.encode(&TermValue::Null).unwrap(),
        vec![131, 115, 3, b'n', b'i', b'l']
    );
    assert_eq!(
        encoder.encode(&TermValue::Bool(true)).unwrap(),
        vec![131, 115, 4, b't', b'r', b'u', b'e']
    );
    assert_eq!(
        encoder.encode(&TermValue::Bool(false)).unwrap(),
        vec![131, 115, 5, b'f', b'a', b'l', b's', b'e']
    );
    assert_eq!(
        encoder.encode(&TermValue::Integer(0)).unwrap(),
        vec![131, 97, 0]
    );
    assert_eq!(
        encoder.encode(&TermValue::Integer(255)).unwrap(),
        vec![131, 97, 255]
    );
    // 256 no longer fits the 1-byte form
    assert_eq!(
        encoder.encode(&TermValue::Integer(256)).unwrap(),
        vec![131, 98, 0, 0, 1, 0]
    );
    assert_eq!(
        encoder.encode(&TermValue::Integer(-1)).unwrap(),
        vec![131, 98, 0xff, 0xff, 0xff, 0xff]
    );

    let mut float_wire = vec![131, 70];
    float_wire.extend_from_slice(&1.25f64.to_be_bytes());
    assert_eq!(encoder.encode(&TermValue::Float(1.25)).unwrap(), float_wire);

    assert_eq!(
        encoder.encode(&TermValue::Str("foo".into())).unwrap(),
        vec![131, 109, 0, 0, 0, 3, b'f', b'o', b'o']
    );
    assert_eq!(
        encoder.encode(&TermValue::Array(vec![])).unwrap(),
        vec![131, 106]
    );
    assert_eq!(
        encoder
            .encode(&TermValue::Array(vec![TermValue::Integer(1)]))
            .unwrap(),
        vec![131, 108, 0, 0, 0, 1, 97, 1, 106]
    );
}

#[test]
fn small_big_wire_form() {
    let mut encoder = EtfEncoder::new();

    // -1 as a big integer: digit count 1, sign 1, digit 1 — and it decodes
    // back to -1 even though the encoder itself would use the integer tag.
    assert_eq!(decode(&[131, 110, 1, 1, 1]).unwrap(), TermValue::Integer(-1));

    let wire = encoder
        .encode(&TermValue::Integer(-4_807_526_976))
        .unwrap();
    assert_eq!(wire[1], 110);
    assert_eq!(wire[3], 1); // sign byte
    assert_eq!(
        decode(&wire).unwrap(),
        TermValue::Str("-4807526976".into())
    );
}

#[test]
fn roundtrip_matrix() {
    let mut encoder = EtfEncoder::new();
    let mut decoder = EtfDecoder::new();

    let values = vec![
        TermValue::Null,
        TermValue::Bool(true),
        TermValue::Bool(false),
        TermValue::Integer(0),
        TermValue::Integer(255),
        TermValue::Integer(256),
        TermValue::Integer(-32),
        TermValue::Integer(i32::MIN as i64),
        TermValue::Integer(i32::MAX as i64),
        TermValue::Integer(-4_807_526_976),
        TermValue::Integer(i64::MAX),
        TermValue::UInteger(u64::MAX),
        TermValue::Float(3_456.123_456_789_022_4),
        TermValue::Float(-0.0),
        TermValue::Str("".into()),
        TermValue::Str("abc".into()),
        TermValue::Str("a".repeat(4096)),
        TermValue::Str("héllo wörld".into()),
        TermValue::Bytes(vec![0xff, 0xfe, 0x00]),
        TermValue::Array(vec![
            TermValue::Integer(1),
            TermValue::Array(vec![TermValue::Integer(2)]),
            obj(&[("k", TermValue::Bool(true))]),
        ]),
        obj(&[
            ("foo", TermValue::Str("bar".into())),
            ("baz", TermValue::Array(vec![TermValue::Null])),
        ]),
    ];

    for value in values {
        let encoded = encoder.encode(&value).unwrap();
        let decoded = decoder.decode(&encoded).unwrap();
        assert_eq!(
            decoded,
            expected_after_roundtrip(&value),
            "round-trip mismatch for {:?}",
            value
        );
    }
}

#[test]
fn one_shot_helpers_match_instances() {
    let value = obj(&[("n", TermValue::Integer(300))]);
    let mut encoder = EtfEncoder::new();
    assert_eq!(encode(&value).unwrap(), encoder.encode(&value).unwrap());
    assert_eq!(decode(&encode(&value).unwrap()).unwrap(), value);
}

#[test]
fn tuples_are_decode_only() {
    // The encoder never produces tuple tags, but both arities decode.
    let small = [131, 104, 3, 97, 1, 97, 2, 97, 3];
    assert_eq!(
        decode(&small).unwrap(),
        TermValue::Array(vec![
            TermValue::Integer(1),
            TermValue::Integer(2),
            TermValue::Integer(3),
        ])
    );
    let large = [131, 105, 0, 0, 0, 2, 115, 2, b'o', b'k', 97, 0];
    assert_eq!(
        decode(&large).unwrap(),
        TermValue::Array(vec![TermValue::Str("ok".into()), TermValue::Integer(0)])
    );
}

#[test]
fn string_ext_decodes_as_text() {
    let payload = [131, 107, 0, 2, b'h', b'i'];
    assert_eq!(decode(&payload).unwrap(), TermValue::Str("hi".into()));
}
