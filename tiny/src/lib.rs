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

//! # Tiny
//!
//! A compact binary serializer that writes values straight into a packed
//! byte buffer. Each type is classified once into a serialization kind; after
//! that, encoding a value is a direct, type-specialized write with no
//! intermediate object model and no boxing.
//!
//! ## Quick start
//!
//! ```rust
//! use tiny::{Encoder, Settings};
//!
//! let mut encoder = Encoder::new(Settings::default());
//!
//! let bytes = encoder.serialize(&-12345i32).unwrap();
//! assert_eq!(bytes, (-12345i32).to_ne_bytes());
//!
//! let value: i32 = encoder.deserialize(&bytes).unwrap();
//! assert_eq!(value, -12345);
//! ```
//!
//! ## What can be encoded
//!
//! | Rust type                                        | kind                          |
//! |--------------------------------------------------|-------------------------------|
//! | `bool`, integers, `f16`, `f32`, `f64`, `char`    | scalar                        |
//! | `rust_decimal::Decimal`                          | `Decimal` (16 bytes)          |
//! | `NaiveDateTime`, `DateTime<Utc>`, `TimeDelta`    | 64-bit ticks of 100 ns        |
//! | [`Vector2`], [`Vector3`], [`Rect`], [`Bounds`] ... | fixed-layout struct         |
//! | `#[derive(TinyObject)] #[tiny(fixed)]` structs   | fixed-layout struct           |
//! | `#[derive(TinyObject)]` unit-only enums          | their integer representation  |
//! | `String`                                         | `String`                      |
//! | `Vec<T>`, `Box<[T]>`, `[T; N]` of the above      | primitive list / array        |
//! | `Option<T>` of a fixed-layout `T`                | primitive nullable            |
//!
//! `Option` of a string, list or array keeps the container kind and writes
//! `None` as the length prefix `-1`, so a null string and an empty one stay
//! distinct:
//!
//! ```rust
//! use tiny::Encoder;
//!
//! let mut encoder = Encoder::default();
//! assert_eq!(encoder.serialize(&None::<String>).unwrap(), (-1i32).to_ne_bytes());
//! assert_eq!(encoder.serialize(&String::new()).unwrap(), 0i32.to_ne_bytes());
//! ```
//!
//! A nullable bool packs presence and value into one byte:
//!
//! ```rust
//! use tiny::Encoder;
//!
//! let mut encoder = Encoder::default();
//! assert_eq!(encoder.serialize(&None::<bool>).unwrap(), [0]);
//! assert_eq!(encoder.serialize(&Some(false)).unwrap(), [1]);
//! assert_eq!(encoder.serialize(&Some(true)).unwrap(), [2]);
//! ```
//!
//! Structs without a fixed layout, and lists, arrays or options of them,
//! classify as object kinds. They have no encoding and fail with
//! [`Error::UnsupportedKind`]; register a [`CustomResolver`] to give such a
//! type an encoding of your own.
//!
//! ## Fixed-layout structs
//!
//! ```rust
//! use tiny::{Encoder, SerializationKind, TinyObject};
//!
//! #[derive(TinyObject, Debug, Default, PartialEq)]
//! #[tiny(fixed)]
//! pub struct Cell {
//!     pub column: i32,
//!     pub row: i32,
//! }
//!
//! let mut encoder = Encoder::default();
//! assert_eq!(encoder.classify::<Cell>().kind, SerializationKind::FixedStruct2I);
//!
//! let cells = vec![Cell { column: 1, row: 2 }, Cell { column: 3, row: 4 }];
//! let bytes = encoder.serialize(&cells).unwrap();
//! let decoded: Vec<Cell> = encoder.deserialize(&bytes).unwrap();
//! assert_eq!(decoded, cells);
//! ```
//!
//! ## Strings
//!
//! Strings are a 4-byte length prefix and a payload in the encoder's
//! [`StringEncoding`]: UTF-16 code units in host order (the default), one
//! truncated byte per code unit, or a named [`TextCodec`].
//!
//! ```rust
//! use tiny::{Encoder, Settings, StringEncoding, TextCodec};
//!
//! let codec = TextCodec::from_name("utf-8").unwrap();
//! let mut encoder = Encoder::new(Settings {
//!     default_string_encoding: StringEncoding::Text(codec),
//!     ..Settings::default()
//! });
//! let bytes = encoder.serialize(&"héllo".to_string()).unwrap();
//! assert_eq!(bytes.len(), 4 + 6);
//! ```
//!
//! ## Concurrency
//!
//! Classification is cached process-wide and safe to trigger from any
//! thread. An [`Encoder`] owns its buffer and takes `&mut self` to encode;
//! give each thread its own encoder.

pub use tiny_core::{
    buffer::Reader, classifier, Bounds, Color, CustomResolver, DynResolver, EncodeBuffer, Encoder,
    Error, MemberDescriptor, MemberKind, Quaternion, Ray, Rect, RectInt, SerializationKind,
    Serializer, Settings, ShapeCategory, StringEncoding, TextCodec, TypeDescriptor, TypeShape,
    Vector2, Vector2Int, Vector3, Vector3Int, Vector4, Visibility,
};
pub use tiny_derive::TinyObject;
