use etf_pack::{encode, EtfDecoder, EtfError, EtfToJsonConverter, TermValue};

fn decode(payload: &[u8]) -> Result<TermValue, EtfError> {
    EtfDecoder::new().decode(payload)
}

fn convert(payload: &[u8]) -> Result<Vec<u8>, EtfError> {
    EtfToJsonConverter::new().convert(payload)
}

#[test]
fn framing_errors() {
    for decoder_result in [
        decode(&[]).err(),
        decode(&[130]).err(),
        decode(&[0, 97, 1]).err(),
        convert(&[]).err(),
        convert(&[132, 97, 1]).err(),
    ] {
        assert_eq!(decoder_result, Some(EtfError::InvalidFormat));
    }
}

#[test]
fn unknown_tags_fail_in_both_decoders() {
    for tag in [0u8, 1, 42, 99, 112, 255] {
        let payload = [131, tag];
        assert_eq!(decode(&payload), Err(EtfError::UnsupportedTag(tag)));
        assert_eq!(convert(&payload), Err(EtfError::UnsupportedTag(tag)));
    }
}

#[test]
fn bad_list_tail_fails_in_both_decoders() {
    // declared terminator is a small integer tag instead of nil
    let payload = [131, 108, 0, 0, 0, 1, 97, 1, 97];
    assert_eq!(decode(&payload), Err(EtfError::ListTailMissing));
    assert_eq!(convert(&payload), Err(EtfError::ListTailMissing));
}

#[test]
fn unsupported_key_tags_fail_in_both_decoders() {
    // list as a map key
    let payload = [131, 116, 0, 0, 0, 1, 106, 97, 1];
    assert_eq!(decode(&payload), Err(EtfError::UnsupportedKeyTag(106)));
    assert_eq!(convert(&payload), Err(EtfError::UnsupportedKeyTag(106)));
}

#[test]
fn big_int_magnitude_limit() {
    let mut payload = vec![131, 110, 9, 0];
    payload.extend_from_slice(&[1; 9]);
    assert_eq!(decode(&payload), Err(EtfError::BigIntTooLarge));
    assert_eq!(convert(&payload), Err(EtfError::BigIntTooLarge));

    // 8 digits is still in range
    let mut payload = vec![131, 110, 8, 0];
    payload.extend_from_slice(&[1; 8]);
    assert!(decode(&payload).is_ok());
}

#[test]
fn truncation_never_panics_and_always_errors() {
    // A payload exercising every common tag: map with atom key, nested
    // list, float, binary, big integer.
    let value = TermValue::Object(vec![
        ("list".into(), TermValue::Array(vec![
            TermValue::Integer(1),
            TermValue::Integer(70000),
            TermValue::Float(2.5),
        ])),
        ("s".into(), TermValue::Str("hello".into())),
        ("big".into(), TermValue::Integer(1 << 40)),
        ("none".into(), TermValue::Null),
    ]);
    let payload = encode(&value).unwrap();
    assert!(decode(&payload).is_ok());

    for cut in 1..payload.len() {
        let truncated = &payload[..cut];
        assert_eq!(
            decode(truncated).err(),
            Some(EtfError::UnexpectedEof),
            "tree decode of {} byte prefix",
            cut
        );
        assert_eq!(
            convert(truncated).err(),
            Some(EtfError::UnexpectedEof),
            "text decode of {} byte prefix",
            cut
        );
    }
}

#[test]
fn declared_length_past_buffer_end() {
    // binary claims 100 bytes, provides 2
    let payload = [131, 109, 0, 0, 0, 100, b'a', b'b'];
    assert_eq!(decode(&payload), Err(EtfError::UnexpectedEof));
    assert_eq!(convert(&payload), Err(EtfError::UnexpectedEof));
}
