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
use rust_decimal::Decimal;

const DECIMAL_SIZE: usize = 16;
const MAX_SCALE: u32 = 28;

impl Serializer for Decimal {
    type Element = Self;

    #[inline(always)]
    fn tiny_shape() -> TypeShape {
        TypeShape::value::<Self>()
    }

    #[inline(always)]
    fn tiny_store(&self, dst: &mut [u8]) -> Result<(), Error> {
        check_slot::<Self>(dst.len(), DECIMAL_SIZE)?;
        dst.copy_from_slice(&self.serialize());
        Ok(())
    }

    fn tiny_load(src: &[u8]) -> Result<Self, Error> {
        check_slot::<Self>(src.len(), DECIMAL_SIZE)?;
        let mut image = [0u8; DECIMAL_SIZE];
        image.copy_from_slice(src);
        // The flags word keeps the scale in bits 16..24; anything beyond 28 is not a decimal.
        let scale = u32::from(image[2]);
        if scale > MAX_SCALE {
            return Err(Error::invalid_data(format!(
                "decimal scale {} exceeds {}",
                scale,
                MAX_SCALE
            )));
        }
        Ok(Decimal::deserialize(image))
    }
}
