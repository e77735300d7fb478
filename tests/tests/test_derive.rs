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

#![allow(deprecated)]


use test_helpers::{prefix, test_roundtrip};
use tiny_core::{
    Encoder, Error, MemberKind, SerializationKind, Serializer, Settings, Visibility,
};
use tiny_derive::TinyObject;

#[derive(TinyObject, Debug, Default, PartialEq)]
pub struct Profile {
    pub name: String,
    pub age: i32,
    #[tiny(property)]
    pub score: f64,
    secret: u64,
    #[deprecated]
    pub legacy_id: i32,
    #[tiny(skip)]
    pub scratch: Vec<u8>,
}

fn names<T: Serializer>(encoder: &Encoder) -> Vec<&'static str> {
    encoder.members::<T>().iter().map(|m| m.name()).collect()
}

#[test]
fn test_member_descriptors() {
    let members = Profile::tiny_members();
    let names: Vec<_> = members.iter().map(|m| m.name()).collect();
    assert_eq!(names, ["name", "age", "score", "secret", "legacy_id"]);

    assert_eq!(members[0].kind(), MemberKind::Field);
    assert_eq!(members[2].kind(), MemberKind::Property);
    assert_eq!(members[3].visibility(), Visibility::Private);
    assert_eq!(members[1].visibility(), Visibility::Public);
    assert!(members[4].is_obsolete());
    assert!(!members[0].is_obsolete());
    assert_eq!(members[0].shape().name, std::any::type_name::<String>());
}

#[test]
fn test_member_filtering() {
    let encoder = Encoder::default();
    assert_eq!(names::<Profile>(&encoder), ["name", "age", "score"]);

    let encoder = Encoder::default().serialize_properties(false);
    assert_eq!(names::<Profile>(&encoder), ["name", "age"]);

    let encoder = Encoder::default().serialize_fields(false);
    assert_eq!(names::<Profile>(&encoder), ["score"]);

    let encoder = Encoder::new(Settings {
        allow_private_members: true,
        ignore_obsolete_members: false,
        ..Settings::default()
    });
    assert_eq!(
        names::<Profile>(&encoder),
        ["name", "age", "score", "secret", "legacy_id"]
    );
}

#[test]
fn test_bound_accessors() {
    let members = Profile::tiny_members();
    let mut profile = Profile::default();

    let age = members.iter().find(|m| m.name() == "age").unwrap();
    age.load(&mut profile, &41i32.to_ne_bytes()).unwrap();
    assert_eq!(profile.age, 41);
    let mut slot = [0u8; 4];
    age.store(&profile, &mut slot).unwrap();
    assert_eq!(slot, 41i32.to_ne_bytes());

    // A string member has no fixed-layout image.
    let name = &members[0];
    assert!(matches!(
        name.store(&profile, &mut slot),
        Err(Error::UnsupportedKind(_))
    ));
}

#[test]
fn test_object_kinds_are_unsupported() {
    let mut encoder = Encoder::default();
    let descriptor = encoder.classify::<Profile>();
    assert_eq!(descriptor.kind, SerializationKind::Object);
    assert!(descriptor.is_value_type);
    assert!(!descriptor.is_primitive);

    assert!(matches!(
        encoder.serialize(&Profile::default()),
        Err(Error::UnsupportedKind(_))
    ));
    assert!(matches!(
        encoder.serialize(&vec![Profile::default()]),
        Err(Error::UnsupportedKind(_))
    ));
    assert!(matches!(
        encoder.serialize(&Some(Profile::default())),
        Err(Error::UnsupportedKind(_))
    ));
    assert!(matches!(
        encoder.deserialize::<Profile>(&[]),
        Err(Error::UnsupportedKind(_))
    ));
    assert_eq!(
        encoder.classify::<Vec<Profile>>().kind,
        SerializationKind::ObjectList
    );
    assert_eq!(
        encoder.classify::<Option<Profile>>().kind,
        SerializationKind::ObjectNullable
    );
    assert_eq!(
        encoder.classify::<Box<[Profile]>>().kind,
        SerializationKind::ObjectArray
    );
    assert!(encoder.is_empty());
}

#[derive(TinyObject, Debug, Default, PartialEq)]
#[tiny(class)]
pub struct Node {
    pub id: u32,
    pub children: Vec<Node>,
}

#[test]
fn test_class_shapes() {
    let encoder = Encoder::default();
    let descriptor = encoder.classify::<Node>();
    assert_eq!(descriptor.kind, SerializationKind::Object);
    assert!(!descriptor.is_value_type);
    // A reference type admits absence itself, so the option keeps its kind.
    assert_eq!(
        encoder.classify::<Option<Node>>().kind,
        SerializationKind::Object
    );
    assert_eq!(
        encoder.classify::<Vec<Node>>().element_kind,
        SerializationKind::Object
    );
}

#[derive(TinyObject, Debug, Clone, Copy, PartialEq)]
#[repr(u8)]
pub enum Level {
    Low = 1,
    High = 7,
}

#[derive(TinyObject, Debug, Clone, Copy, PartialEq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

#[test]
fn test_enums_use_underlying_integer() {
    let mut encoder = Encoder::default();
    assert_eq!(encoder.classify::<Level>().kind, SerializationKind::U8);
    assert_eq!(encoder.classify::<Direction>().kind, SerializationKind::I32);
    assert_eq!(encoder.classify::<Level>().primitive_size, 1);

    assert_eq!(encoder.serialize(&Level::High).unwrap(), [7]);
    assert_eq!(encoder.serialize(&Direction::South).unwrap(), 2i32.to_ne_bytes());
    test_roundtrip(&mut encoder, Direction::West);
    test_roundtrip(&mut encoder, Some(Level::Low));
    test_roundtrip(&mut encoder, None::<Level>);

    let bytes = encoder.serialize(&vec![Level::Low, Level::High]).unwrap();
    let mut expected = prefix(2).to_vec();
    expected.extend_from_slice(&[1, 7]);
    assert_eq!(bytes, expected);

    assert!(matches!(
        encoder.deserialize::<Level>(&[3]),
        Err(Error::InvalidData(_))
    ));
}

#[derive(TinyObject, Debug, Default, Clone, Copy, PartialEq)]
#[tiny(fixed)]
pub struct Pair<T> {
    pub first: T,
    pub second: T,
}

#[test]
fn test_generic_fixed_struct() {
    let mut encoder = Encoder::default();
    assert_eq!(
        encoder.classify::<Pair<f32>>().kind,
        SerializationKind::FixedStruct2F
    );
    assert_eq!(
        encoder.classify::<Pair<i32>>().kind,
        SerializationKind::FixedStruct2I
    );
    assert_eq!(encoder.classify::<Pair<u8>>().kind, SerializationKind::Object);
    test_roundtrip(&mut encoder, Pair { first: 1.5f32, second: -1.5 });
    test_roundtrip(&mut encoder, Pair { first: 7i32, second: 8 });
}
