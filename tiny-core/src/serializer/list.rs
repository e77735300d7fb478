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

impl<T: Serializer> Serializer for Vec<T> {
    type Element = T;

    fn tiny_shape() -> TypeShape {
        TypeShape::of::<Self>(ShapeCategory::List {
            element: T::tiny_shape,
        })
    }

    #[inline(always)]
    fn tiny_items(&self) -> Result<Option<&[T]>, Error> {
        Ok(Some(self.as_slice()))
    }

    fn tiny_from_items(items: Option<Vec<T>>) -> Result<Self, Error> {
        items.ok_or_else(|| {
            Error::invalid_data(format!(
                "null list where `{}` was expected",
                std::any::type_name::<Self>()
            ))
        })
    }
}
