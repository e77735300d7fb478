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

use crate::config::StringEncoding;
use crate::error::Error;
use crate::meta::{latin1_to_string, ShapeCategory, TypeShape};
use crate::resolver::context::{ReadContext, WriteContext};
use crate::serializer::{end_of, Serializer};
use crate::types::{LENGTH_PREFIX_SIZE, NULL_LENGTH};
use byteorder::{ByteOrder, NativeEndian};

impl Serializer for String {
    type Element = Self;

    fn tiny_shape() -> TypeShape {
        TypeShape::of::<Self>(ShapeCategory::Str)
    }

    #[inline(always)]
    fn tiny_text(&self) -> Result<Option<&str>, Error> {
        Ok(Some(self.as_str()))
    }

    fn tiny_from_text(text: Option<String>) -> Result<Self, Error> {
        text.ok_or_else(|| Error::invalid_data("null string where `String` was expected"))
    }
}

fn length_prefix(len: usize) -> Result<i32, Error> {
    i32::try_from(len).map_err(|_| {
        Error::invalid_argument(format!("string of {} units exceeds the 4-byte length prefix", len))
    })
}

/// Writes a length-prefixed string at `offset` and returns the offset after it.
///
/// An absent string is the prefix `-1` alone. The prefix counts UTF-16 code
/// units for the char encodings and payload bytes for text codecs.
pub fn write_text(
    text: Option<&str>,
    context: &mut WriteContext,
    offset: usize,
) -> Result<usize, Error> {
    let Some(text) = text else {
        let end = end_of(offset, LENGTH_PREFIX_SIZE, context)?;
        context.buffer.ensure_capacity(end)?;
        context.buffer.put_i32(offset, NULL_LENGTH)?;
        return Ok(end);
    };
    let encoding = context.settings.string_encoding();
    let (count, payload_len) = match encoding {
        StringEncoding::NativeChar => {
            let units = text.encode_utf16().count();
            let bytes = units
                .checked_mul(2)
                .ok_or_else(|| Error::buffer_capacity(usize::MAX, context.buffer.capacity()))?;
            (units, bytes)
        }
        StringEncoding::RawByte => {
            let units = text.encode_utf16().count();
            (units, units)
        }
        StringEncoding::Text(codec) => {
            let bytes = codec.byte_count(text);
            (bytes, bytes)
        }
    };
    let prefix = length_prefix(count)?;
    let payload_offset = end_of(offset, LENGTH_PREFIX_SIZE, context)?;
    let end = end_of(payload_offset, payload_len, context)?;
    context.buffer.ensure_capacity(end)?;
    context.buffer.put_i32(offset, prefix)?;
    let dst = context.buffer.slice_mut(payload_offset, payload_len)?;
    match encoding {
        StringEncoding::NativeChar => {
            for (unit, slot) in text.encode_utf16().zip(dst.chunks_exact_mut(2)) {
                NativeEndian::write_u16(slot, unit);
            }
        }
        StringEncoding::RawByte => {
            for (unit, slot) in text.encode_utf16().zip(dst.iter_mut()) {
                *slot = unit as u8;
            }
        }
        StringEncoding::Text(codec) => codec.encode_into(text, dst)?,
    }
    Ok(end)
}

/// Reads a length-prefixed string; a negative prefix is an absent string.
pub fn read_text(context: &mut ReadContext) -> Result<Option<String>, Error> {
    let len = context.reader.read_i32()?;
    if len < 0 {
        return Ok(None);
    }
    let len = len as usize;
    let text = match context.settings.string_encoding() {
        StringEncoding::NativeChar => {
            let bytes = context.reader.read_bytes(len.saturating_mul(2))?;
            let units: Vec<u16> = bytes.chunks_exact(2).map(NativeEndian::read_u16).collect();
            String::from_utf16(&units)
                .map_err(|e| Error::encoding_error(format!("invalid UTF-16 string: {}", e)))?
        }
        StringEncoding::RawByte => latin1_to_string(context.reader.read_bytes(len)?),
        StringEncoding::Text(codec) => codec.decode(context.reader.read_bytes(len)?)?,
    };
    Ok(Some(text))
}
