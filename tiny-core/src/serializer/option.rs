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
use crate::meta::{ShapeCategory, TypeShape};
use crate::serializer::Serializer;

/// `Option<T>` is how absence is spelled.
///
/// For a value type it is the nullable wrapper, a presence flag in front of
/// the inner layout. A reference shape (string, array, list, class) already
/// has a null encoding, so `Option` of one keeps the inner kind and maps
/// `None` to the null length prefix. That null encoding is spent once: an
/// `Option` of an `Option` is always a nullable wrapper.
impl<T: Serializer> Serializer for Option<T> {
    type Element = T::Element;

    fn tiny_shape() -> TypeShape {
        let inner = T::tiny_shape();
        if inner.is_reference() && !T::tiny_is_option() {
            TypeShape::of::<Self>(inner.category)
        } else {
            TypeShape::of::<Self>(ShapeCategory::Nullable {
                element: T::tiny_shape,
            })
        }
    }

    #[inline(always)]
    fn tiny_is_option() -> bool {
        true
    }

    #[inline(always)]
    fn tiny_store(&self, dst: &mut [u8]) -> Result<(), Error> {
        match self {
            Some(value) => value.tiny_store(dst),
            None => Err(Error::invalid_argument(format!(
                "absent `{}` has no fixed-layout image",
                std::any::type_name::<T>()
            ))),
        }
    }

    #[inline(always)]
    fn tiny_load(src: &[u8]) -> Result<Self, Error> {
        Ok(Some(T::tiny_load(src)?))
    }

    fn tiny_text(&self) -> Result<Option<&str>, Error> {
        match self {
            Some(value) => value.tiny_text(),
            None => Ok(None),
        }
    }

    fn tiny_from_text(text: Option<String>) -> Result<Self, Error> {
        match text {
            Some(text) => Ok(Some(T::tiny_from_text(Some(text))?)),
            None => Ok(None),
        }
    }

    fn tiny_items(&self) -> Result<Option<&[T::Element]>, Error> {
        match self {
            Some(value) => value.tiny_items(),
            None => Ok(None),
        }
    }

    fn tiny_from_items(items: Option<Vec<T::Element>>) -> Result<Self, Error> {
        match items {
            Some(items) => Ok(Some(T::tiny_from_items(Some(items))?)),
            None => Ok(None),
        }
    }

    #[inline(always)]
    fn tiny_is_none(&self) -> bool {
        self.is_none()
    }

    #[inline(always)]
    fn tiny_none() -> Result<Self, Error> {
        Ok(None)
    }
}
