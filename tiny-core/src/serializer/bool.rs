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

impl Serializer for bool {
    type Element = Self;

    #[inline(always)]
    fn tiny_shape() -> TypeShape {
        TypeShape::value::<Self>()
    }

    #[inline(always)]
    fn tiny_store(&self, dst: &mut [u8]) -> Result<(), Error> {
        check_slot::<Self>(dst.len(), 1)?;
        dst[0] = u8::from(*self);
        Ok(())
    }

    #[inline(always)]
    fn tiny_load(src: &[u8]) -> Result<Self, Error> {
        check_slot::<Self>(src.len(), 1)?;
        match src[0] {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(Error::invalid_data(format!(
                "invalid bool byte {:#04x}",
                other
            ))),
        }
    }
}

// A char is a Unicode scalar value and travels as its 32-bit code point.
impl Serializer for char {
    type Element = Self;

    #[inline(always)]
    fn tiny_shape() -> TypeShape {
        TypeShape::value::<Self>()
    }

    #[inline(always)]
    fn tiny_store(&self, dst: &mut [u8]) -> Result<(), Error> {
        check_slot::<Self>(dst.len(), 4)?;
        NativeEndian::write_u32(dst, *self as u32);
        Ok(())
    }

    #[inline(always)]
    fn tiny_load(src: &[u8]) -> Result<Self, Error> {
        check_slot::<Self>(src.len(), 4)?;
        let code = NativeEndian::read_u32(src);
        char::from_u32(code)
            .ok_or_else(|| Error::invalid_data(format!("invalid char code point {:#x}", code)))
    }
}
