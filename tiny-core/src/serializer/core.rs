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

use crate::error::Error;
use crate::meta::{MemberDescriptor, TypeShape};

/// A type the tiny encoder can classify and, for the supported kinds, encode.
///
/// The encoder decides what to do from the classified kind of `Self`; the
/// hooks below are the per-kind views it uses. A type only implements the
/// hooks its kind needs. The defaults report an unsupported kind, which is
/// what dispatch surfaces when it lands on a hook the type does not provide.
///
/// | kind                              | hooks                                        |
/// |-----------------------------------|----------------------------------------------|
/// | scalars, fixed-layout structs     | `tiny_store` / `tiny_load`                   |
/// | `String`                          | `tiny_text` / `tiny_from_text`               |
/// | primitive arrays and lists        | `tiny_items` / `tiny_from_items`             |
/// | primitive nullable                | `tiny_is_none` / `tiny_none` + inner layout  |
pub trait Serializer: Sized + 'static {
    /// Element type for arrays and lists. Value types use `Self`.
    type Element: Serializer;

    /// Shape of `Self`, the input of classification.
    fn tiny_shape() -> TypeShape;

    /// Members with bound accessors, in declaration order.
    fn tiny_members() -> Vec<MemberDescriptor<Self>> {
        Vec::new()
    }

    /// Writes the host-layout image of `self`. `dst` is exactly the kind's size.
    #[allow(unused_variables)]
    fn tiny_store(&self, dst: &mut [u8]) -> Result<(), Error> {
        Err(Error::unsupported_type::<Self>("fixed-layout encoding"))
    }

    /// Reads a value from its host-layout image. `src` is exactly the kind's size.
    #[allow(unused_variables)]
    fn tiny_load(src: &[u8]) -> Result<Self, Error> {
        Err(Error::unsupported_type::<Self>("fixed-layout decoding"))
    }

    /// `Ok(None)` for an absent string.
    fn tiny_text(&self) -> Result<Option<&str>, Error> {
        Err(Error::unsupported_type::<Self>("string encoding"))
    }

    #[allow(unused_variables)]
    fn tiny_from_text(text: Option<String>) -> Result<Self, Error> {
        Err(Error::unsupported_type::<Self>("string decoding"))
    }

    /// `Ok(None)` for an absent array or list.
    fn tiny_items(&self) -> Result<Option<&[Self::Element]>, Error> {
        Err(Error::unsupported_type::<Self>("sequence encoding"))
    }

    #[allow(unused_variables)]
    fn tiny_from_items(items: Option<Vec<Self::Element>>) -> Result<Self, Error> {
        Err(Error::unsupported_type::<Self>("sequence decoding"))
    }

    /// Whether `Self` is an `Option`.
    #[inline(always)]
    fn tiny_is_option() -> bool {
        false
    }

    #[inline(always)]
    fn tiny_is_none(&self) -> bool {
        false
    }

    fn tiny_none() -> Result<Self, Error> {
        Err(Error::invalid_data(format!(
            "`{}` cannot hold an absent value",
            std::any::type_name::<Self>()
        )))
    }
}
