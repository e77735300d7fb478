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

//! # Tiny Core
//!
//! Core engine of the tiny binary serializer. It classifies a Rust type once
//! into a [`SerializationKind`], caches that classification for the life of
//! the process, and then writes values of the type straight into a growable
//! byte buffer with a routine specialized for the kind.
//!
//! ## Architecture
//!
//! - **`encoder`**: the [`Encoder`], owner of the buffer, settings and custom resolvers
//! - **`buffer`**: [`EncodeBuffer`] with power-of-two growth and the bounds-checked [`Reader`]
//! - **`serializer`**: the [`Serializer`] trait, its impls and the per-kind routines
//! - **`resolver`**: the type classifier, the custom resolver registry and the read/write contexts
//! - **`meta`**: type shapes, member descriptors and text codecs
//! - **`types`**: the kind catalog and wire constants
//! - **`geometry`**: built-in fixed-layout vector types
//! - **`config`**: [`Settings`]
//! - **`error`**: [`Error`]
//!
//! ## Wire format
//!
//! Everything is host byte order. There is no header and no type
//! information in the output; reader and writer must agree on the type.
//!
//! | kind                         | layout                                              |
//! |------------------------------|-----------------------------------------------------|
//! | scalars                      | raw value, fixed width                              |
//! | `Half`                       | 16-bit pattern                                      |
//! | date, time, duration         | 64-bit count of 100 ns ticks                        |
//! | fixed-layout structs         | 2 to 6 components back to back, no padding          |
//! | string                       | 4-byte length (`-1` for null) + encoded payload     |
//! | primitive array and list     | 4-byte length (`-1` for null) + elements            |
//! | primitive nullable           | 1-byte presence flag + payload when present         |
//!
//! Object kinds (structs without a fixed layout and containers of them) are
//! classified but have no routine; encoding one fails with
//! [`Error::UnsupportedKind`].
//!
//! ## Usage
//!
//! ```rust
//! use tiny_core::{Encoder, SerializationKind, Vector3};
//!
//! let mut encoder = Encoder::default();
//! assert_eq!(encoder.classify::<Vector3>().kind, SerializationKind::FixedStruct3F);
//!
//! let points = vec![Vector3::new(1.0, 2.0, 3.0), Vector3::new(4.0, 5.0, 6.0)];
//! let bytes = encoder.serialize(&points).unwrap();
//! assert_eq!(bytes.len(), 4 + 2 * 12);
//!
//! let decoded: Vec<Vector3> = encoder.deserialize(&bytes).unwrap();
//! assert_eq!(decoded, points);
//! ```

pub mod buffer;
pub mod config;
pub mod encoder;
pub mod error;
pub mod geometry;
pub mod meta;
pub mod resolver;
pub mod serializer;
pub mod types;

pub use buffer::{EncodeBuffer, Reader};
pub use config::{Settings, StringEncoding};
pub use encoder::Encoder;
pub use error::Error;
pub use geometry::{
    Bounds, Color, Quaternion, Ray, Rect, RectInt, Vector2, Vector2Int, Vector3, Vector3Int,
    Vector4,
};
pub use meta::{MemberDescriptor, MemberKind, ShapeCategory, TextCodec, TypeShape, Visibility};
pub use resolver::classifier::{classifier, TypeClassifier, TypeDescriptor};
pub use resolver::custom_resolver::{CustomResolver, CustomResolverRegistry, DynResolver};
pub use serializer::Serializer;
pub use types::SerializationKind;
