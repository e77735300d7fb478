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


use std::any::{Any, TypeId};
use std::sync::Arc;
use test_helpers::{prefix, test_roundtrip};
use tiny_core::buffer::Reader;
use tiny_core::{CustomResolver, DynResolver, Encoder, Error, SerializationKind, Vector2};
use tiny_derive::TinyObject;

#[derive(TinyObject, Debug, Default, Clone, Copy, PartialEq)]
#[tiny(fixed)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Writes a point as two bytes, clamping each coordinate.
struct CompactPoint;

impl CustomResolver<Point> for CompactPoint {
    fn size(&self, _: &Point) -> Result<usize, Error> {
        Ok(2)
    }

    fn encode(&self, value: &Point, dst: &mut [u8]) -> Result<(), Error> {
        dst[0] = value.x.clamp(0, 255) as u8;
        dst[1] = value.y.clamp(0, 255) as u8;
        Ok(())
    }

    fn decode(&self, reader: &mut Reader) -> Result<Point, Error> {
        let bytes = reader.read_bytes(2)?;
        Ok(Point {
            x: i32::from(bytes[0]),
            y: i32::from(bytes[1]),
        })
    }
}

/// Same as `CompactPoint` but swaps the coordinates.
struct SwappedPoint;

impl CustomResolver<Point> for SwappedPoint {
    fn size(&self, _: &Point) -> Result<usize, Error> {
        Ok(2)
    }

    fn encode(&self, value: &Point, dst: &mut [u8]) -> Result<(), Error> {
        dst[0] = value.y as u8;
        dst[1] = value.x as u8;
        Ok(())
    }

    fn decode(&self, reader: &mut Reader) -> Result<Point, Error> {
        let y = reader.read_u8()?;
        let x = reader.read_u8()?;
        Ok(Point {
            x: i32::from(x),
            y: i32::from(y),
        })
    }
}

#[test]
fn test_resolver_takes_precedence() {
    let mut encoder = Encoder::default();
    assert_eq!(
        encoder.classify::<Point>().kind,
        SerializationKind::FixedStruct2I
    );
    assert_eq!(encoder.serialize(&Point { x: 3, y: 4 }).unwrap().len(), 8);

    encoder.register_resolver::<Point, _>(CompactPoint);
    assert!(encoder.resolvers().contains::<Point>());
    let bytes = encoder.serialize(&Point { x: 3, y: 400 }).unwrap();
    assert_eq!(bytes, [3, 255]);
    assert_eq!(
        encoder.deserialize::<Point>(&bytes).unwrap(),
        Point { x: 3, y: 255 }
    );
    // Classification is untouched by registration.
    assert_eq!(
        encoder.classify::<Point>().kind,
        SerializationKind::FixedStruct2I
    );
}

#[test]
fn test_resolver_applies_to_exact_type_only() {
    let mut encoder = Encoder::default();
    encoder.register_resolver::<Point, _>(CompactPoint);

    // Elements of a list still use the fixed layout.
    let bytes = encoder.serialize(&vec![Point { x: 1, y: 2 }]).unwrap();
    let mut expected = prefix(1).to_vec();
    expected.extend_from_slice(&1i32.to_ne_bytes());
    expected.extend_from_slice(&2i32.to_ne_bytes());
    assert_eq!(bytes, expected);

    let bytes = encoder.serialize(&Some(Point { x: 1, y: 2 })).unwrap();
    assert_eq!(bytes.len(), 9);
    test_roundtrip(&mut encoder, Some(Point { x: -1, y: 9 }));
}

#[test]
fn test_replacement_keeps_position() {
    let mut encoder = Encoder::default();
    encoder.register_resolver::<Point, _>(CompactPoint);
    encoder.register_resolver::<Vector2, _>(PackedVector);
    encoder.register_resolver::<Point, _>(SwappedPoint);

    assert_eq!(encoder.resolvers().len(), 2);
    let names: Vec<_> = encoder.resolvers().type_names().collect();
    assert_eq!(
        names,
        [
            std::any::type_name::<Point>(),
            std::any::type_name::<Vector2>()
        ]
    );
    assert_eq!(encoder.serialize(&Point { x: 3, y: 4 }).unwrap(), [4, 3]);
}

struct PackedVector;

impl CustomResolver<Vector2> for PackedVector {
    fn size(&self, _: &Vector2) -> Result<usize, Error> {
        Ok(4)
    }

    fn encode(&self, value: &Vector2, dst: &mut [u8]) -> Result<(), Error> {
        let x = half::f16::from_f32(value.x).to_bits().to_ne_bytes();
        let y = half::f16::from_f32(value.y).to_bits().to_ne_bytes();
        dst[..2].copy_from_slice(&x);
        dst[2..].copy_from_slice(&y);
        Ok(())
    }

    fn decode(&self, reader: &mut Reader) -> Result<Vector2, Error> {
        let x = half::f16::from_bits(reader.read_u16()?).to_f32();
        let y = half::f16::from_bits(reader.read_u16()?).to_f32();
        Ok(Vector2::new(x, y))
    }
}

#[test]
fn test_resolver_for_geometry_type() {
    let mut encoder = Encoder::default();
    encoder.register_resolver::<Vector2, _>(PackedVector);
    test_roundtrip(&mut encoder, Vector2::new(0.5, -2.0));
    assert_eq!(encoder.serialize(&Vector2::new(1.0, 1.0)).unwrap().len(), 4);
}

#[derive(TinyObject, Debug, Default, PartialEq)]
pub struct Person {
    pub name: String,
    pub age: u8,
}

/// Age byte followed by the name as a length-prefixed UTF-8 string.
struct PersonResolver;

impl CustomResolver<Person> for PersonResolver {
    fn size(&self, value: &Person) -> Result<usize, Error> {
        Ok(1 + 4 + value.name.len())
    }

    fn encode(&self, value: &Person, dst: &mut [u8]) -> Result<(), Error> {
        let len = i32::try_from(value.name.len())
            .map_err(|_| Error::invalid_argument("name too long"))?;
        dst[0] = value.age;
        dst[1..5].copy_from_slice(&len.to_ne_bytes());
        dst[5..].copy_from_slice(value.name.as_bytes());
        Ok(())
    }

    fn decode(&self, reader: &mut Reader) -> Result<Person, Error> {
        let age = reader.read_u8()?;
        let len = reader.read_i32()?;
        let len = usize::try_from(len).map_err(|_| Error::invalid_data("negative name length"))?;
        let name = std::str::from_utf8(reader.read_bytes(len)?)
            .map_err(|e| Error::encoding_error(e.to_string()))?
            .to_string();
        Ok(Person { name, age })
    }
}

#[test]
fn test_resolver_makes_object_encodable() {
    let mut encoder = Encoder::default();
    assert_eq!(encoder.classify::<Person>().kind, SerializationKind::Object);
    let ada = Person {
        name: "Ada".to_string(),
        age: 36,
    };
    assert!(matches!(
        encoder.serialize(&ada),
        Err(Error::UnsupportedKind(_))
    ));

    encoder.register_resolver::<Person, _>(PersonResolver);
    let bytes = encoder.serialize(&ada).unwrap();
    assert_eq!(bytes[0], 36);
    assert_eq!(&bytes[5..], b"Ada");
    test_roundtrip(&mut encoder, ada);

    // Containers of a resolved type are still object kinds.
    assert!(matches!(
        encoder.serialize(&vec![Person::default()]),
        Err(Error::UnsupportedKind(_))
    ));
}

#[test]
fn test_resolver_decode_past_end() {
    let mut encoder = Encoder::default();
    encoder.register_resolver::<Person, _>(PersonResolver);
    let mut bytes = encoder
        .serialize(&Person {
            name: "Grace".to_string(),
            age: 85,
        })
        .unwrap();
    bytes.truncate(7);
    assert!(matches!(
        encoder.deserialize::<Person>(&bytes),
        Err(Error::BufferOutOfBound(5, 5, 7))
    ));
}

#[test]
fn test_resolver_encode_at_offset() {
    let mut encoder = Encoder::default();
    encoder.register_resolver::<Point, _>(CompactPoint);
    let end = encoder.encode_at(&Point { x: 7, y: 8 }, 10).unwrap();
    assert_eq!(end, 12);
    assert_eq!(encoder.len(), 12);
    assert_eq!(&encoder.as_bytes()[10..], [7, 8]);

    let (point, end) = encoder.decode_at::<Point>(encoder.as_bytes(), 10).unwrap();
    assert_eq!(point, Point { x: 7, y: 8 });
    assert_eq!(end, 12);
}

/// Type-erased resolver for `u16` that writes it big-endian.
struct BigEndianU16;

impl DynResolver for BigEndianU16 {
    fn target_type(&self) -> TypeId {
        TypeId::of::<u16>()
    }

    fn size(&self, _: &dyn Any) -> Result<usize, Error> {
        Ok(2)
    }

    fn encode(&self, value: &dyn Any, dst: &mut [u8]) -> Result<(), Error> {
        let value = value
            .downcast_ref::<u16>()
            .ok_or_else(|| Error::invalid_argument("expected u16"))?;
        dst.copy_from_slice(&value.to_be_bytes());
        Ok(())
    }

    fn decode(&self, reader: &mut Reader) -> Result<Box<dyn Any>, Error> {
        let bytes = reader.read_bytes(2)?;
        Ok(Box::new(u16::from_be_bytes([bytes[0], bytes[1]])))
    }
}

#[test]
fn test_dyn_resolver() {
    let mut encoder = Encoder::default();
    encoder
        .register_dyn_resolver::<u16>(Arc::new(BigEndianU16))
        .unwrap();
    assert_eq!(encoder.serialize(&0x0102u16).unwrap(), [1, 2]);
    test_roundtrip(&mut encoder, 0xbeefu16);
}

#[test]
fn test_dyn_resolver_target_mismatch() {
    let mut encoder = Encoder::default();
    let result = encoder.register_dyn_resolver::<u32>(Arc::new(BigEndianU16));
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
    assert!(encoder.resolvers().is_empty());
}
