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


use chrono::{NaiveDateTime, TimeDelta};
use std::any::TypeId;
use std::sync::Arc;
use tiny_core::{classifier, Encoder, Error, SerializationKind, Vector3};
use tiny_derive::TinyObject;

#[derive(TinyObject, Debug, Default, PartialEq)]
pub struct Person {
    pub name: String,
    pub age: u8,
}

#[derive(TinyObject, Debug, Clone, Copy, PartialEq)]
#[repr(i64)]
pub enum Epoch {
    Before = -1,
    After = 1,
}

#[test]
fn test_classification_is_cached() {
    test_helpers::init_logger();
    let first = classifier().classify::<Vec<Vector3>>();
    let second = classifier().classify::<Vec<Vector3>>();
    assert!(Arc::ptr_eq(&first, &second));

    // The descriptor is shared through the element path too.
    let element = classifier().classify::<Vector3>();
    let again = classifier().classify::<Vector3>();
    assert!(Arc::ptr_eq(&element, &again));
    assert_eq!(first.element_type, Some(TypeId::of::<Vector3>()));
    assert!(classifier().cached_count() >= 2);
}

#[test]
fn test_scalar_descriptors() {
    let encoder = Encoder::default();
    let cases = [
        (encoder.classify::<bool>(), SerializationKind::Bool, 1),
        (encoder.classify::<i64>(), SerializationKind::I64, 8),
        (encoder.classify::<half::f16>(), SerializationKind::Half, 2),
        (encoder.classify::<char>(), SerializationKind::Char, 4),
        (encoder.classify::<rust_decimal::Decimal>(), SerializationKind::Decimal, 16),
        (encoder.classify::<NaiveDateTime>(), SerializationKind::DateTime, 8),
        (encoder.classify::<TimeDelta>(), SerializationKind::TimeSpan, 8),
    ];
    for (descriptor, kind, size) in cases {
        assert_eq!(descriptor.kind, kind, "{}", descriptor.type_name);
        assert!(descriptor.is_primitive);
        assert!(descriptor.is_value_type);
        assert_eq!(descriptor.primitive_size, size);
        assert!(!descriptor.is_array);
        assert_eq!(descriptor.element_kind, SerializationKind::None);
    }
}

#[test]
fn test_enum_uses_underlying_kind() {
    let descriptor = classifier().classify::<Epoch>();
    assert_eq!(descriptor.kind, SerializationKind::I64);
    assert_eq!(descriptor.primitive_size, 8);
    assert_eq!(descriptor.type_id, TypeId::of::<Epoch>());
    assert!(!classifier().is_well_known(TypeId::of::<Epoch>()));

    let mut encoder = Encoder::default();
    assert_eq!(
        encoder.serialize(&Epoch::Before).unwrap(),
        (-1i64).to_ne_bytes()
    );
}

#[test]
fn test_array_descriptors() {
    let descriptor = classifier().classify::<Box<[f64]>>();
    assert_eq!(descriptor.kind, SerializationKind::PrimitiveArray);
    assert!(descriptor.is_array);
    assert_eq!(descriptor.array_rank, 1);
    assert!(!descriptor.is_value_type);
    assert_eq!(descriptor.element_kind, SerializationKind::F64);
    assert_eq!(descriptor.element_primitive_size, 8);
    assert_eq!(descriptor.primitive_size, 0);

    let descriptor = classifier().classify::<[u16; 3]>();
    assert_eq!(descriptor.kind, SerializationKind::PrimitiveArray);

    let descriptor = classifier().classify::<Box<[[i32; 2]]>>();
    assert_eq!(descriptor.kind, SerializationKind::ObjectArray);
    assert_eq!(descriptor.element_kind, SerializationKind::PrimitiveArray);

    let descriptor = classifier().classify::<Box<[[i32; 2]; 2]>>();
    assert_eq!(descriptor.kind, SerializationKind::ObjectArray);
    assert_eq!(descriptor.array_rank, 2);
    assert_eq!(descriptor.element_kind, SerializationKind::I32);
}

#[test]
fn test_object_container_descriptors() {
    let descriptor = classifier().classify::<Vec<String>>();
    assert_eq!(descriptor.kind, SerializationKind::ObjectList);
    assert!(descriptor.is_generic);
    assert!(!descriptor.element_is_primitive);

    let descriptor = classifier().classify::<Option<Person>>();
    assert_eq!(descriptor.kind, SerializationKind::ObjectNullable);
    assert_eq!(descriptor.element_kind, SerializationKind::Object);

    let descriptor = classifier().classify::<Box<[String]>>();
    assert_eq!(descriptor.kind, SerializationKind::ObjectArray);
}

#[test]
fn test_object_kinds_fail_both_ways() {
    let mut encoder = Encoder::default();
    let unsupported = |result: Result<Vec<u8>, Error>| {
        assert!(matches!(result, Err(Error::UnsupportedKind(_))));
    };
    unsupported(encoder.serialize(&Person::default()));
    unsupported(encoder.serialize(&vec!["a".to_string()]));
    unsupported(encoder.serialize(&Some(Person::default())));
    unsupported(encoder.serialize(&vec![[1i32, 2]].into_boxed_slice()));

    assert!(matches!(
        encoder.deserialize::<Vec<String>>(&0i32.to_ne_bytes()),
        Err(Error::UnsupportedKind(_))
    ));
    assert!(matches!(
        encoder.deserialize::<Option<Person>>(&[0]),
        Err(Error::UnsupportedKind(_))
    ));
}

#[test]
fn test_kind_catalog() {
    assert_eq!(u8::from(SerializationKind::None), 0);
    assert_eq!(u8::from(SerializationKind::ObjectNullable), 33);
    assert_eq!(
        SerializationKind::try_from(21u8).unwrap(),
        SerializationKind::FixedStruct3F
    );
    assert!(SerializationKind::try_from(34u8).is_err());
    assert!(!SerializationKind::Object.is_encodable());
    assert!(SerializationKind::PrimitiveList.is_encodable());
}
