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

//! Built-in fixed-layout value types.
//!
//! These are the vector-like structs the classifier knows without any
//! derive: each is a `#[repr(C)]` run of `f32` or `i32` components and
//! serializes as those components back to back, in field order.

use crate::error::Error;
use crate::meta::{MemberDescriptor, MemberKind, TypeShape, Visibility};
use crate::serializer::util::{check_slot, split_slot, split_src};
use crate::serializer::Serializer;
use std::mem;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

/// RGBA color with components in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Axis-aligned box given by its center and half-size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Bounds {
    pub center: Vector3,
    pub extents: Vector3,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Ray {
    pub origin: Vector3,
    pub direction: Vector3,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Vector2Int {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Vector3Int {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct RectInt {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Vector2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Vector2 { x, y }
    }
}

impl Vector3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vector3 { x, y, z }
    }
}

impl Vector4 {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Vector4 { x, y, z, w }
    }
}

impl Quaternion {
    pub const IDENTITY: Quaternion = Quaternion::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Quaternion { x, y, z, w }
    }
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Color { r, g, b, a }
    }
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

impl Bounds {
    pub const fn new(center: Vector3, extents: Vector3) -> Self {
        Bounds { center, extents }
    }
}

impl Ray {
    pub const fn new(origin: Vector3, direction: Vector3) -> Self {
        Ray { origin, direction }
    }
}

impl Vector2Int {
    pub const fn new(x: i32, y: i32) -> Self {
        Vector2Int { x, y }
    }
}

impl Vector3Int {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Vector3Int { x, y, z }
    }
}

impl RectInt {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        RectInt {
            x,
            y,
            width,
            height,
        }
    }
}

macro_rules! impl_geometry_serializer {
    ($name:ident { $($field:ident: $fty:ty),+ $(,)? }) => {
        impl Serializer for $name {
            type Element = Self;

            #[inline(always)]
            fn tiny_shape() -> TypeShape {
                TypeShape::value::<Self>()
            }

            fn tiny_members() -> Vec<MemberDescriptor<Self>> {
                vec![$(
                    MemberDescriptor::new(
                        stringify!($field),
                        MemberKind::Field,
                        Visibility::Public,
                        false,
                        <$fty as Serializer>::tiny_shape,
                        |this: &Self, dst: &mut [u8]| this.$field.tiny_store(dst),
                        |this: &mut Self, src: &[u8]| {
                            this.$field = <$fty as Serializer>::tiny_load(src)?;
                            Ok(())
                        },
                    ),
                )+]
            }

            #[inline]
            fn tiny_store(&self, dst: &mut [u8]) -> Result<(), Error> {
                check_slot::<Self>(dst.len(), mem::size_of::<Self>())?;
                let mut rest = dst;
                $(
                    self.$field.tiny_store(split_slot(&mut rest, mem::size_of::<$fty>()))?;
                )+
                Ok(())
            }

            #[inline]
            fn tiny_load(src: &[u8]) -> Result<Self, Error> {
                check_slot::<Self>(src.len(), mem::size_of::<Self>())?;
                let mut rest = src;
                Ok($name {
                    $(
                        $field: <$fty as Serializer>::tiny_load(
                            split_src(&mut rest, mem::size_of::<$fty>()),
                        )?,
                    )+
                })
            }
        }
    };
}

impl_geometry_serializer!(Vector2 { x: f32, y: f32 });
impl_geometry_serializer!(Vector3 { x: f32, y: f32, z: f32 });
impl_geometry_serializer!(Vector4 { x: f32, y: f32, z: f32, w: f32 });
impl_geometry_serializer!(Quaternion { x: f32, y: f32, z: f32, w: f32 });
impl_geometry_serializer!(Color { r: f32, g: f32, b: f32, a: f32 });
impl_geometry_serializer!(Rect { x: f32, y: f32, width: f32, height: f32 });
impl_geometry_serializer!(Bounds { center: Vector3, extents: Vector3 });
impl_geometry_serializer!(Ray { origin: Vector3, direction: Vector3 });
impl_geometry_serializer!(Vector2Int { x: i32, y: i32 });
impl_geometry_serializer!(Vector3Int { x: i32, y: i32, z: i32 });
impl_geometry_serializer!(RectInt { x: i32, y: i32, width: i32, height: i32 });
