// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.


use test_helpers::{prefix, test_roundtrip};
use tiny_core::{Encoder, Error, SerializationKind, Settings, StringEncoding, TextCodec};

fn encoder_with(encoding: StringEncoding) -> Encoder {
    Encoder::new(Settings {
        default_string_encoding: encoding,
        ..Settings::default()
    })
}

#[test]
fn test_null_and_empty() {
    let mut encoder = Encoder::default();
    assert_eq!(
        encoder.serialize(&None::<String>).unwrap(),
        [0xFF, 0xFF, 0xFF, 0xFF]
    );
    assert_eq!(encoder.serialize(&String::new()).unwrap(), [0, 0, 0, 0]);
    assert_eq!(
        encoder.serialize(&Some(String::new())).unwrap(),
        [0, 0, 0, 0]
    );

    test_roundtrip(&mut encoder, None::<String>);
    test_roundtrip(&mut encoder, Some(String::new()));
    test_roundtrip(&mut encoder, String::new());
}

#[test]
fn test_null_into_plain_string() {
    let encoder = Encoder::default();
    assert!(matches!(
        encoder.deserialize::<String>(&prefix(-1)),
        Err(Error::InvalidData(_))
    ));
    // Any negative length is a null string.
    assert_eq!(
        encoder.deserialize::<Option<String>>(&prefix(-7)).unwrap(),
        None
    );
}

#[test]
fn test_raw_byte() {
    let mut encoder = encoder_with(StringEncoding::RawByte);
    let bytes = encoder.serialize(&"ab".to_string()).unwrap();
    let mut expected = prefix(2).to_vec();
    expected.extend_from_slice(b"ab");
    assert_eq!(bytes, expected);
    test_roundtrip(&mut encoder, "ab".to_string());
    test_roundtrip(&mut encoder, "héllo".to_string());

    // Code units above 0xFF keep only their low byte.
    let bytes = encoder.serialize(&"€".to_string()).unwrap();
    assert_eq!(&bytes[4..], [0xAC]);
    assert_eq!(encoder.deserialize::<String>(&bytes).unwrap(), "\u{AC}");
}

#[test]
fn test_native_char() {
    let mut encoder = Encoder::default();
    let bytes = encoder.serialize(&"ab".to_string()).unwrap();
    let mut expected = prefix(2).to_vec();
    expected.extend_from_slice(&(b'a' as u16).to_ne_bytes());
    expected.extend_from_slice(&(b'b' as u16).to_ne_bytes());
    assert_eq!(bytes, expected);

    // The prefix counts UTF-16 code units, so a surrogate pair counts twice.
    let bytes = encoder.serialize(&"😀".to_string()).unwrap();
    assert_eq!(bytes[..4], prefix(2));
    assert_eq!(bytes.len(), 8);

    for text in ["", "plain ascii", "日本語テキスト", "mixed 🦀 text"] {
        test_roundtrip(&mut encoder, text.to_string());
    }
}

#[test]
fn test_native_char_lone_surrogate() {
    let encoder = Encoder::default();
    let mut bytes = prefix(1).to_vec();
    bytes.extend_from_slice(&0xD800u16.to_ne_bytes());
    assert!(matches!(
        encoder.deserialize::<String>(&bytes),
        Err(Error::EncodingError(_))
    ));
}

#[test]
fn test_text_codecs() {
    let text = "héllo wörld 🦀".to_string();
    for codec in [
        TextCodec::Utf8,
        TextCodec::Utf16Le,
        TextCodec::Utf16Be,
        TextCodec::Utf32Le,
    ] {
        let mut encoder = encoder_with(StringEncoding::Text(codec));
        let bytes = encoder.serialize(&text).unwrap();
        assert_eq!(bytes[..4], prefix(codec.byte_count(&text) as i32));
        test_roundtrip(&mut encoder, text.clone());
        test_roundtrip(&mut encoder, None::<String>);
    }

    let mut encoder = encoder_with(StringEncoding::Text(TextCodec::Utf8));
    let bytes = encoder.serialize(&"héllo".to_string()).unwrap();
    assert_eq!(bytes[..4], prefix(6));
    assert_eq!(&bytes[4..], "héllo".as_bytes());
}

#[test]
fn test_narrow_codecs() {
    let mut encoder = encoder_with(StringEncoding::Text(TextCodec::Ascii));
    let bytes = encoder.serialize(&"naïve".to_string()).unwrap();
    assert_eq!(&bytes[4..], b"na?ve");

    let mut encoder = encoder_with(StringEncoding::Text(TextCodec::from_name("latin1").unwrap()));
    test_roundtrip(&mut encoder, "ÀÉÎÕÜ".to_string());
}

#[test]
fn test_truncated_payload() {
    let encoder = encoder_with(StringEncoding::RawByte);
    let mut bytes = prefix(10).to_vec();
    bytes.extend_from_slice(b"abc");
    assert!(matches!(
        encoder.deserialize::<String>(&bytes),
        Err(Error::BufferOutOfBound(4, 10, 7))
    ));
}

#[test]
fn test_string_kind() {
    let encoder = Encoder::default();
    assert_eq!(encoder.classify::<String>().kind, SerializationKind::String);
    let descriptor = encoder.classify::<Option<String>>();
    assert_eq!(descriptor.kind, SerializationKind::String);
    assert!(!descriptor.is_value_type);
}
