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

use std::any::TypeId;

/// Static description of a Rust type as the classifier sees it.
///
/// Every [`Serializer`](crate::serializer::Serializer) reports one through
/// `tiny_shape()`. Shapes are cheap `Copy` values; nested shapes are reached
/// lazily through function pointers so recursive types never build an
/// infinite structure.
#[derive(Clone, Copy, Debug)]
pub struct TypeShape {
    pub name: &'static str,
    pub type_id: TypeId,
    pub category: ShapeCategory,
}

#[derive(Clone, Copy, Debug)]
pub enum ShapeCategory {
    /// A plain value type, resolved through the well-known type table.
    Value,
    /// Unit-only enum stored as its integer representation.
    Enum { underlying: fn() -> TypeShape },
    /// Text.
    Str,
    /// Fixed-size or boxed slice.
    Array {
        rank: u32,
        element: fn() -> TypeShape,
    },
    /// Growable list (`Vec<T>`).
    List { element: fn() -> TypeShape },
    /// Optional value type.
    Nullable { element: fn() -> TypeShape },
    /// User struct. `components` lists the member shapes of a struct that
    /// asks to be laid out as a fixed sequence of numbers.
    Struct {
        value_type: bool,
        components: Option<fn() -> Vec<TypeShape>>,
    },
}

impl TypeShape {
    #[inline(always)]
    pub fn of<T: ?Sized + 'static>(category: ShapeCategory) -> TypeShape {
        TypeShape {
            name: std::any::type_name::<T>(),
            type_id: TypeId::of::<T>(),
            category,
        }
    }

    #[inline(always)]
    pub fn value<T: ?Sized + 'static>() -> TypeShape {
        TypeShape::of::<T>(ShapeCategory::Value)
    }

    /// Reference shapes already admit absence; wrapping them in `Option` does
    /// not create a nullable wrapper kind.
    pub fn is_reference(&self) -> bool {
        match self.category {
            ShapeCategory::Str | ShapeCategory::Array { .. } | ShapeCategory::List { .. } => true,
            ShapeCategory::Struct { value_type, .. } => !value_type,
            _ => false,
        }
    }

    pub fn is_value_type(&self) -> bool {
        !self.is_reference()
    }
}
