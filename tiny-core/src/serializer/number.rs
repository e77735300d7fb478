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
use crate::meta::TypeShape;
use crate::serializer::util::check_slot;
use crate::serializer::Serializer;
use byteorder::{ByteOrder, NativeEndian};
use half::f16;
use std::mem;

macro_rules! impl_num_serializer {
    ($ty:ty, $writer:expr, $reader:expr) => {
        impl Serializer for $ty {
            type Element = Self;

            #[inline(always)]
            fn tiny_shape() -> TypeShape {
                TypeShape::value::<Self>()
            }

            #[inline(always)]
            fn tiny_store(&self, dst: &mut [u8]) -> Result<(), Error> {
                check_slot::<Self>(dst.len(), mem::size_of::<$ty>())?;
                $writer(dst, *self);
                Ok(())
            }

            #[inline(always)]
            fn tiny_load(src: &[u8]) -> Result<Self, Error> {
                check_slot::<Self>(src.len(), mem::size_of::<$ty>())?;
                Ok($reader(src))
            }
        }
    };
}

#[inline(always)]
fn write_u8(dst: &mut [u8], value: u8) {
    dst[0] = value;
}

#[inline(always)]
fn read_u8(src: &[u8]) -> u8 {
    src[0]
}

#[inline(always)]
fn write_i8(dst: &mut [u8], value: i8) {
    dst[0] = value as u8;
}

#[inline(always)]
fn read_i8(src: &[u8]) -> i8 {
    src[0] as i8
}

#[inline(always)]
fn write_f16(dst: &mut [u8], value: f16) {
    NativeEndian::write_u16(dst, value.to_bits());
}

#[inline(always)]
fn read_f16(src: &[u8]) -> f16 {
    f16::from_bits(NativeEndian::read_u16(src))
}

impl_num_serializer!(i8, write_i8, read_i8);
impl_num_serializer!(u8, write_u8, read_u8);
impl_num_serializer!(i16, NativeEndian::write_i16, NativeEndian::read_i16);
impl_num_serializer!(u16, NativeEndian::write_u16, NativeEndian::read_u16);
impl_num_serializer!(i32, NativeEndian::write_i32, NativeEndian::read_i32);
impl_num_serializer!(u32, NativeEndian::write_u32, NativeEndian::read_u32);
impl_num_serializer!(i64, NativeEndian::write_i64, NativeEndian::read_i64);
impl_num_serializer!(u64, NativeEndian::write_u64, NativeEndian::read_u64);
impl_num_serializer!(f16, write_f16, read_f16);
impl_num_serializer!(f32, NativeEndian::write_f32, NativeEndian::read_f32);
impl_num_serializer!(f64, NativeEndian::write_f64, NativeEndian::read_f64);
