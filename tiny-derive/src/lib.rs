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

//! Derive macro for the tiny binary serializer.
//!
//! `#[derive(TinyObject)]` implements `tiny_core::Serializer` for a struct
//! or a unit-only enum. For a struct it generates one member descriptor per
//! field, each carrying a `store`/`load` pair monomorphized for that field's
//! type, so member access never needs runtime reflection.
//!
//! ## Struct attributes
//!
//! - `#[tiny(fixed)]`: lay the struct out as a fixed sequence of numbers.
//!   The struct classifies as a fixed-layout kind when its fields are 2 to 6
//!   `f32` or 2 to 4 `i32`, and as `Object` otherwise. Fields must implement
//!   `Default`.
//! - `#[tiny(class)]`: the struct is a reference type. `Option<Self>` then
//!   keeps the struct's own kind instead of becoming a nullable wrapper.
//!
//! ## Field attributes
//!
//! - `#[tiny(property)]`: report the field as a property rather than a field.
//! - `#[tiny(skip)]`: leave the field out of the member list.
//! - `#[deprecated]`: mark the member obsolete.
//!
//! ```rust
//! use tiny_core::{Encoder, SerializationKind};
//! use tiny_derive::TinyObject;
//!
//! #[derive(TinyObject, Debug, Default, PartialEq)]
//! #[tiny(fixed)]
//! struct Size {
//!     pub width: f32,
//!     pub height: f32,
//! }
//!
//! let mut encoder = Encoder::default();
//! assert_eq!(encoder.classify::<Size>().kind, SerializationKind::FixedStruct2F);
//! let bytes = encoder.serialize(&Size { width: 3.0, height: 4.0 }).unwrap();
//! assert_eq!(bytes.len(), 8);
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod object;

#[proc_macro_derive(TinyObject, attributes(tiny))]
pub fn proc_macro_derive_tiny_object(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    object::derive_serializer(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
