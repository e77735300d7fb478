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

fn null_array<T>() -> Error {
    Error::invalid_data(format!(
        "null array where `{}` was expected",
        std::any::type_name::<T>()
    ))
}

impl<T: Serializer> Serializer for Box<[T]> {
    type Element = T;

    fn tiny_shape() -> TypeShape {
        TypeShape::of::<Self>(ShapeCategory::Array {
            rank: 1,
            element: T::tiny_shape,
        })
    }

    #[inline(always)]
    fn tiny_items(&self) -> Result<Option<&[T]>, Error> {
        Ok(Some(self))
    }

    fn tiny_from_items(items: Option<Vec<T>>) -> Result<Self, Error> {
        items.map(Vec::into_boxed_slice).ok_or_else(null_array::<Self>)
    }
}

impl<T: Serializer, const N: usize> Serializer for [T; N] {
    type Element = T;

    fn tiny_shape() -> TypeShape {
        TypeShape::of::<Self>(ShapeCategory::Array {
            rank: 1,
            element: T::tiny_shape,
        })
    }

    #[inline(always)]
    fn tiny_items(&self) -> Result<Option<&[T]>, Error> {
        Ok(Some(self.as_slice()))
    }

    fn tiny_from_items(items: Option<Vec<T>>) -> Result<Self, Error> {
        let items = items.ok_or_else(null_array::<Self>)?;
        let len = items.len();
        <[T; N]>::try_from(items).map_err(|_| {
            Error::invalid_data(format!(
                "array of {} elements where `{}` was expected",
                len,
                std::any::type_name::<Self>()
            ))
        })
    }
}

/// A boxed two-dimensional array. Only rank-1 arrays have a flat element
/// layout, so this classifies as an object array and is not encodable.
impl<T: Serializer, const N: usize, const M: usize> Serializer for Box<[[T; N]; M]> {
    type Element = [T; N];

    fn tiny_shape() -> TypeShape {
        TypeShape::of::<Self>(ShapeCategory::Array {
            rank: 2,
            element: T::tiny_shape,
        })
    }
}
