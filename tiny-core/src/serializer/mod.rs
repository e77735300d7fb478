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

//! Per-kind encode and decode routines.
//!
//! [`write_value`] and [`read_value`] are the dispatch points: they take the
//! classified [`TypeDescriptor`] of `T` and branch on its kind into the
//! routine for that layout.

use crate::error::Error;
use crate::resolver::classifier::TypeDescriptor;
use crate::resolver::context::{ReadContext, WriteContext};
use crate::types::{
    presence_flag, SerializationKind, LENGTH_PREFIX_SIZE, NULL_LENGTH, PRESENCE_FLAG_SIZE,
};

pub mod array;
pub mod bool;
mod core;
pub mod datetime;
pub mod decimal;
pub mod fixed;
pub mod list;
pub mod number;
pub mod option;
pub mod string;
pub mod util;

pub use self::core::Serializer;

#[cold]
fn unsupported(descriptor: &TypeDescriptor) -> Error {
    Error::unsupported_kind(format!(
        "cannot encode `{}` of kind {:?}",
        descriptor.type_name, descriptor.kind
    ))
}

/// `offset + len`, or a capacity error when it overflows.
pub(crate) fn end_of(offset: usize, len: usize, context: &WriteContext) -> Result<usize, Error> {
    offset
        .checked_add(len)
        .ok_or_else(|| Error::buffer_capacity(usize::MAX, context.buffer.capacity()))
}

/// Encodes `value` at `offset` by its classified kind and returns the offset after it.
pub fn write_value<T: Serializer>(
    value: &T,
    descriptor: &TypeDescriptor,
    context: &mut WriteContext,
    offset: usize,
) -> Result<usize, Error> {
    match descriptor.kind {
        SerializationKind::Bool
        | SerializationKind::I8
        | SerializationKind::U8
        | SerializationKind::I16
        | SerializationKind::U16
        | SerializationKind::I32
        | SerializationKind::U32
        | SerializationKind::I64
        | SerializationKind::U64
        | SerializationKind::Half
        | SerializationKind::F32
        | SerializationKind::F64
        | SerializationKind::Char
        | SerializationKind::Decimal
        | SerializationKind::DateTime
        | SerializationKind::DateTimeOffset
        | SerializationKind::TimeSpan
        | SerializationKind::FixedStruct2F
        | SerializationKind::FixedStruct3F
        | SerializationKind::FixedStruct4F
        | SerializationKind::FixedStruct5F
        | SerializationKind::FixedStruct6F
        | SerializationKind::FixedStruct2I
        | SerializationKind::FixedStruct3I
        | SerializationKind::FixedStruct4I => {
            write_fixed(value, descriptor.primitive_size, context, offset)
        }
        SerializationKind::String => string::write_text(value.tiny_text()?, context, offset),
        SerializationKind::PrimitiveArray | SerializationKind::PrimitiveList => {
            write_items(value, descriptor, context, offset)
        }
        SerializationKind::PrimitiveNullable => write_nullable(value, descriptor, context, offset),
        SerializationKind::None
        | SerializationKind::Object
        | SerializationKind::ObjectArray
        | SerializationKind::ObjectList
        | SerializationKind::ObjectNullable => Err(unsupported(descriptor)),
    }
}

/// Decodes a `T` at the reader's cursor by its classified kind.
pub fn read_value<T: Serializer>(
    descriptor: &TypeDescriptor,
    context: &mut ReadContext,
) -> Result<T, Error> {
    match descriptor.kind {
        SerializationKind::Bool
        | SerializationKind::I8
        | SerializationKind::U8
        | SerializationKind::I16
        | SerializationKind::U16
        | SerializationKind::I32
        | SerializationKind::U32
        | SerializationKind::I64
        | SerializationKind::U64
        | SerializationKind::Half
        | SerializationKind::F32
        | SerializationKind::F64
        | SerializationKind::Char
        | SerializationKind::Decimal
        | SerializationKind::DateTime
        | SerializationKind::DateTimeOffset
        | SerializationKind::TimeSpan
        | SerializationKind::FixedStruct2F
        | SerializationKind::FixedStruct3F
        | SerializationKind::FixedStruct4F
        | SerializationKind::FixedStruct5F
        | SerializationKind::FixedStruct6F
        | SerializationKind::FixedStruct2I
        | SerializationKind::FixedStruct3I
        | SerializationKind::FixedStruct4I => {
            T::tiny_load(context.reader.read_bytes(descriptor.primitive_size)?)
        }
        SerializationKind::String => T::tiny_from_text(string::read_text(context)?),
        SerializationKind::PrimitiveArray | SerializationKind::PrimitiveList => {
            read_items(descriptor, context)
        }
        SerializationKind::PrimitiveNullable => read_nullable(descriptor, context),
        SerializationKind::None
        | SerializationKind::Object
        | SerializationKind::ObjectArray
        | SerializationKind::ObjectList
        | SerializationKind::ObjectNullable => Err(unsupported(descriptor)),
    }
}

#[inline]
fn write_fixed<T: Serializer>(
    value: &T,
    size: usize,
    context: &mut WriteContext,
    offset: usize,
) -> Result<usize, Error> {
    let end = end_of(offset, size, context)?;
    context.buffer.ensure_capacity(end)?;
    value.tiny_store(context.buffer.slice_mut(offset, size)?)?;
    Ok(end)
}

/// Length prefix followed by the elements' fixed layouts back to back.
fn write_items<T: Serializer>(
    value: &T,
    descriptor: &TypeDescriptor,
    context: &mut WriteContext,
    offset: usize,
) -> Result<usize, Error> {
    let Some(items) = value.tiny_items()? else {
        let end = end_of(offset, LENGTH_PREFIX_SIZE, context)?;
        context.buffer.ensure_capacity(end)?;
        context.buffer.put_i32(offset, NULL_LENGTH)?;
        return Ok(end);
    };
    let element_size = descriptor.element_primitive_size;
    if !descriptor.element_kind.is_fixed_layout() || element_size == 0 {
        return Err(Error::unsupported_kind(format!(
            "`{}` has element kind {:?} without a fixed layout",
            descriptor.type_name, descriptor.element_kind
        )));
    }
    let count = i32::try_from(items.len()).map_err(|_| {
        Error::invalid_argument(format!(
            "{} elements exceed the 4-byte length prefix",
            items.len()
        ))
    })?;
    let payload_len = items
        .len()
        .checked_mul(element_size)
        .ok_or_else(|| Error::buffer_capacity(usize::MAX, context.buffer.capacity()))?;
    let payload_offset = end_of(offset, LENGTH_PREFIX_SIZE, context)?;
    let end = end_of(payload_offset, payload_len, context)?;
    context.buffer.ensure_capacity(end)?;
    context.buffer.put_i32(offset, count)?;
    let dst = context.buffer.slice_mut(payload_offset, payload_len)?;
    for (item, slot) in items.iter().zip(dst.chunks_exact_mut(element_size)) {
        item.tiny_store(slot)?;
    }
    Ok(end)
}

fn read_items<T: Serializer>(
    descriptor: &TypeDescriptor,
    context: &mut ReadContext,
) -> Result<T, Error> {
    let len = context.reader.read_i32()?;
    if len < 0 {
        return T::tiny_from_items(None);
    }
    let element_size = descriptor.element_primitive_size;
    if element_size == 0 {
        return Err(Error::unsupported_kind(format!(
            "`{}` has element kind {:?} without a fixed layout",
            descriptor.type_name, descriptor.element_kind
        )));
    }
    let len = len as usize;
    // Checked against the input before allocating, so a corrupt prefix cannot
    // request a huge vector.
    let payload_len = len
        .checked_mul(element_size)
        .filter(|n| *n <= context.reader.remaining())
        .ok_or_else(|| {
            Error::buffer_out_of_bound(
                context.reader.cursor(),
                len.saturating_mul(element_size),
                context.reader.cursor() + context.reader.remaining(),
            )
        })?;
    let bytes = context.reader.read_bytes(payload_len)?;
    let items = bytes
        .chunks_exact(element_size)
        .map(T::Element::tiny_load)
        .collect::<Result<Vec<_>, Error>>()?;
    T::tiny_from_items(Some(items))
}

/// Presence flag, then the inner layout when present. A nullable bool folds
/// its value into the flag.
fn write_nullable<T: Serializer>(
    value: &T,
    descriptor: &TypeDescriptor,
    context: &mut WriteContext,
    offset: usize,
) -> Result<usize, Error> {
    if value.tiny_is_none() {
        let end = end_of(offset, PRESENCE_FLAG_SIZE, context)?;
        context.buffer.ensure_capacity(end)?;
        context.buffer.put_u8(offset, presence_flag::ABSENT)?;
        return Ok(end);
    }
    if descriptor.element_kind == SerializationKind::Bool {
        let mut image = [0u8; 1];
        value.tiny_store(&mut image)?;
        let end = end_of(offset, PRESENCE_FLAG_SIZE, context)?;
        context.buffer.ensure_capacity(end)?;
        context
            .buffer
            .put_u8(offset, presence_flag::BOOL_FALSE + image[0])?;
        return Ok(end);
    }
    let size = descriptor.element_primitive_size;
    let payload_offset = end_of(offset, PRESENCE_FLAG_SIZE, context)?;
    let end = end_of(payload_offset, size, context)?;
    context.buffer.ensure_capacity(end)?;
    context.buffer.put_u8(offset, presence_flag::PRESENT)?;
    value.tiny_store(context.buffer.slice_mut(payload_offset, size)?)?;
    Ok(end)
}

fn read_nullable<T: Serializer>(
    descriptor: &TypeDescriptor,
    context: &mut ReadContext,
) -> Result<T, Error> {
    let flag = context.reader.read_u8()?;
    if descriptor.element_kind == SerializationKind::Bool {
        return match flag {
            presence_flag::ABSENT => T::tiny_none(),
            presence_flag::BOOL_FALSE | presence_flag::BOOL_TRUE => {
                T::tiny_load(&[flag - presence_flag::BOOL_FALSE])
            }
            other => Err(Error::invalid_data(format!(
                "invalid nullable bool flag {}",
                other
            ))),
        };
    }
    match flag {
        presence_flag::ABSENT => T::tiny_none(),
        presence_flag::PRESENT => {
            T::tiny_load(context.reader.read_bytes(descriptor.element_primitive_size)?)
        }
        other => Err(Error::invalid_data(format!(
            "invalid presence flag {} for `{}`",
            other, descriptor.type_name
        ))),
    }
}
