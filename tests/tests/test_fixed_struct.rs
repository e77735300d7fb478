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


use test_helpers::{init_logger, test_roundtrip};
use tiny_core::{
    Bounds, Color, Encoder, Error, Quaternion, Ray, Rect, RectInt, SerializationKind, Vector2,
    Vector2Int, Vector3, Vector3Int, Vector4,
};
use tiny_derive::TinyObject;

fn floats(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(4)
        .map(|c| f32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
        .collect()
}

#[test]
fn test_geometry_kinds() {
    let encoder = Encoder::default();
    let expected = [
        (encoder.classify::<Vector2>().kind, SerializationKind::FixedStruct2F, 8),
        (encoder.classify::<Vector3>().kind, SerializationKind::FixedStruct3F, 12),
        (encoder.classify::<Vector4>().kind, SerializationKind::FixedStruct4F, 16),
        (encoder.classify::<Quaternion>().kind, SerializationKind::FixedStruct4F, 16),
        (encoder.classify::<Color>().kind, SerializationKind::FixedStruct4F, 16),
        (encoder.classify::<Rect>().kind, SerializationKind::FixedStruct4F, 16),
        (encoder.classify::<Bounds>().kind, SerializationKind::FixedStruct6F, 24),
        (encoder.classify::<Ray>().kind, SerializationKind::FixedStruct6F, 24),
        (encoder.classify::<Vector2Int>().kind, SerializationKind::FixedStruct2I, 8),
        (encoder.classify::<Vector3Int>().kind, SerializationKind::FixedStruct3I, 12),
        (encoder.classify::<RectInt>().kind, SerializationKind::FixedStruct4I, 16),
    ];
    for (actual, kind, size) in expected {
        assert_eq!(actual, kind);
        assert_eq!(actual.primitive_size(), size);
    }
}

#[test]
fn test_geometry_layout() {
    let mut encoder = Encoder::default();
    let bytes = encoder.serialize(&Rect::new(1.0, 2.0, 30.0, 40.0)).unwrap();
    assert_eq!(floats(&bytes), [1.0, 2.0, 30.0, 40.0]);

    let ray = Ray::new(Vector3::new(0.0, 1.0, 2.0), Vector3::new(0.0, 0.0, -1.0));
    let bytes = encoder.serialize(&ray).unwrap();
    assert_eq!(floats(&bytes), [0.0, 1.0, 2.0, 0.0, 0.0, -1.0]);

    let bytes = encoder.serialize(&Vector3Int::new(-1, 0, i32::MAX)).unwrap();
    let mut expected = Vec::new();
    for v in [-1i32, 0, i32::MAX] {
        expected.extend_from_slice(&v.to_ne_bytes());
    }
    assert_eq!(bytes, expected);

    test_roundtrip(&mut encoder, Quaternion::IDENTITY);
    test_roundtrip(&mut encoder, Color::new(1.0, 0.5, 0.25, 0.0));
    test_roundtrip(
        &mut encoder,
        Bounds::new(Vector3::new(1.0, 1.0, 1.0), Vector3::new(f32::MAX, 0.0, f32::MIN)),
    );
    test_roundtrip(&mut encoder, RectInt::new(i32::MIN, 0, 640, 480));
    test_roundtrip(&mut encoder, Vector4::new(f32::INFINITY, -0.0, 1.0, 2.0));
}

#[derive(TinyObject, Debug, Default, Clone, Copy, PartialEq)]
#[tiny(fixed)]
pub struct Velocity {
    pub dx: f32,
    pub dy: f32,
    pub dz: f32,
}

#[derive(TinyObject, Debug, Default, Clone, Copy, PartialEq)]
#[tiny(fixed)]
pub struct Tile(pub i32, pub i32);

#[derive(TinyObject, Debug, Default, Clone, Copy, PartialEq)]
#[tiny(fixed)]
pub struct Box5 {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
}

#[test]
fn test_derived_fixed_structs() {
    init_logger();
    let mut encoder = Encoder::default();
    assert_eq!(encoder.classify::<Velocity>().kind, SerializationKind::FixedStruct3F);
    assert_eq!(encoder.classify::<Tile>().kind, SerializationKind::FixedStruct2I);
    assert_eq!(encoder.classify::<Box5>().kind, SerializationKind::FixedStruct5F);

    let velocity = Velocity {
        dx: 1.0,
        dy: -2.0,
        dz: 0.5,
    };
    let bytes = encoder.serialize(&velocity).unwrap();
    assert_eq!(floats(&bytes), [1.0, -2.0, 0.5]);
    assert_eq!(
        bytes,
        encoder.serialize(&Vector3::new(1.0, -2.0, 0.5)).unwrap()
    );

    test_roundtrip(&mut encoder, velocity);
    test_roundtrip(&mut encoder, Tile(-3, 9));
    test_roundtrip(
        &mut encoder,
        Box5 {
            a: 1.0,
            b: 2.0,
            c: 3.0,
            d: 4.0,
            e: 5.0,
        },
    );
    test_roundtrip(&mut encoder, vec![Tile(1, 2), Tile(3, 4)]);
    test_roundtrip(&mut encoder, Some(velocity));
}

#[derive(TinyObject, Debug, Default, PartialEq)]
#[tiny(fixed)]
pub struct Mixed {
    pub x: f32,
    pub n: i32,
}

#[derive(TinyObject, Debug, Default, PartialEq)]
#[tiny(fixed)]
pub struct TooWide {
    pub a: i32,
    pub b: i32,
    pub c: i32,
    pub d: i32,
    pub e: i32,
}

#[derive(TinyObject, Debug, Default, PartialEq)]
#[tiny(fixed, class)]
pub struct Handle {
    pub x: f32,
    pub y: f32,
}

#[test]
fn test_invalid_fixed_layouts_are_objects() {
    init_logger();
    let mut encoder = Encoder::default();
    assert_eq!(encoder.classify::<Mixed>().kind, SerializationKind::Object);
    assert_eq!(encoder.classify::<TooWide>().kind, SerializationKind::Object);
    assert_eq!(encoder.classify::<Handle>().kind, SerializationKind::Object);
    assert!(matches!(
        encoder.serialize(&Mixed::default()),
        Err(Error::UnsupportedKind(_))
    ));
}

#[derive(TinyObject, Debug, Default, PartialEq)]
#[tiny(fixed)]
pub struct Anchor {
    pub u: f32,
    #[tiny(skip)]
    pub cached: f32,
    v: f32,
}

#[test]
fn test_fixed_layout_uses_declared_members() {
    let mut encoder = Encoder::default();
    assert_eq!(encoder.classify::<Anchor>().kind, SerializationKind::FixedStruct2F);

    let anchor = Anchor {
        u: 0.25,
        cached: 99.0,
        v: 0.75,
    };
    // Private members take part in the layout; skipped ones do not.
    let bytes = encoder.serialize(&anchor).unwrap();
    assert_eq!(floats(&bytes), [0.25, 0.75]);
    let decoded: Anchor = encoder.deserialize(&bytes).unwrap();
    assert_eq!(
        decoded,
        Anchor {
            u: 0.25,
            cached: 0.0,
            v: 0.75,
        }
    );
}
