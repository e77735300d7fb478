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


use std::sync::Arc;
use std::thread;
use tiny_core::{classifier, Encoder, SerializationKind, Vector4};
use tiny_derive::TinyObject;

#[derive(TinyObject, Debug, Default, Clone, Copy, PartialEq)]
#[tiny(fixed)]
pub struct Sample {
    pub t: f32,
    pub value: f32,
    pub weight: f32,
}

#[test]
fn test_concurrent_classification_shares_descriptor() {
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| classifier().classify::<Vec<Sample>>()))
        .collect();
    let descriptors: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    for descriptor in &descriptors {
        assert!(Arc::ptr_eq(descriptor, &descriptors[0]));
    }
    assert_eq!(descriptors[0].kind, SerializationKind::PrimitiveList);
    assert_eq!(descriptors[0].element_kind, SerializationKind::FixedStruct3F);
}

#[test]
fn test_one_encoder_per_thread() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            thread::spawn(move || {
                let mut encoder = Encoder::default();
                let samples: Vec<Sample> = (0..64)
                    .map(|n| Sample {
                        t: n as f32,
                        value: i as f32,
                        weight: 0.5,
                    })
                    .collect();
                let bytes = encoder.serialize(&samples).unwrap();
                assert_eq!(bytes.len(), 4 + 64 * 12);
                let decoded: Vec<Sample> = encoder.deserialize(&bytes).unwrap();
                assert_eq!(decoded, samples);

                let color = Some(Vector4::new(i as f32, 0.0, 0.0, 1.0));
                let bytes = encoder.serialize(&color).unwrap();
                assert_eq!(encoder.deserialize::<Option<Vector4>>(&bytes).unwrap(), color);
                bytes
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let bytes = handle.join().unwrap();
        assert_eq!(bytes.len(), 17);
        assert_eq!(bytes[1..5], (i as f32).to_ne_bytes());
    }
}

#[test]
fn test_encoder_moves_between_threads() {
    let mut encoder = Encoder::default();
    encoder.serialize(&1u8).unwrap();
    let encoder = thread::spawn(move || {
        let mut encoder = encoder;
        encoder.serialize(&"moved".to_string()).unwrap();
        encoder
    })
    .join()
    .unwrap();
    assert_eq!(encoder.len(), 4 + 10);
}
