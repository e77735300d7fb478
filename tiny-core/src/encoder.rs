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

use crate::buffer::{EncodeBuffer, Reader};
use crate::config::{Settings, StringEncoding};
use crate::error::Error;
use crate::meta::MemberDescriptor;
use crate::resolver::classifier::{classifier, TypeDescriptor};
use crate::resolver::context::{ReadContext, WriteContext};
use crate::resolver::custom_resolver::{
    CustomResolver, CustomResolverRegistry, DynAdapter, DynResolver,
};
use crate::serializer::{read_value, write_value, Serializer};
use std::sync::Arc;

/// Initial capacity of a fresh encoder's buffer.
const INITIAL_CAPACITY: usize = 256;

/// The tiny serializer: one growable buffer, the settings it was built with
/// and the custom resolvers registered on it.
///
/// An encoder is a single-writer object. Every encode call takes `&mut self`,
/// so one instance cannot be used by two threads at once; use one encoder per
/// thread for parallel work. Classification is shared process-wide, so extra
/// encoders cost only their buffer.
///
/// # Examples
///
/// ```rust
/// use tiny_core::{Encoder, Settings, StringEncoding};
///
/// let mut encoder = Encoder::new(Settings::default())
///     .string_encoding(StringEncoding::RawByte);
/// let bytes = encoder.serialize(&"ab".to_string()).unwrap();
/// assert_eq!(bytes[..4], 2i32.to_ne_bytes());
/// assert_eq!(&bytes[4..], b"ab");
/// let text: String = encoder.deserialize(&bytes).unwrap();
/// assert_eq!(text, "ab");
/// ```
pub struct Encoder {
    settings: Settings,
    buffer: EncodeBuffer,
    resolvers: CustomResolverRegistry,
}

impl Default for Encoder {
    fn default() -> Self {
        Encoder::new(Settings::default())
    }
}

fn warn_reserved(settings: &Settings) {
    if settings.variable_length_prefix {
        log::warn!("variable_length_prefix is reserved; lengths are written as fixed 4-byte prefixes");
    }
    if settings.compress_bool_array {
        log::warn!("compress_bool_array is reserved; bool arrays are written one byte per element");
    }
}

impl Encoder {
    /// Creates an encoder that keeps `settings` for its whole lifetime.
    pub fn new(settings: Settings) -> Encoder {
        warn_reserved(&settings);
        Encoder {
            settings,
            buffer: EncodeBuffer::with_capacity(INITIAL_CAPACITY),
            resolvers: CustomResolverRegistry::new(),
        }
    }

    /// Sets the encoding used for every string payload.
    ///
    /// Builder methods take the encoder by value and clear its buffer, so
    /// output produced under the old settings never shares a buffer with
    /// output produced under the new ones.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tiny_core::{Encoder, StringEncoding, TextCodec};
    ///
    /// let encoder = Encoder::default().string_encoding(StringEncoding::Text(TextCodec::Utf8));
    /// ```
    pub fn string_encoding(mut self, encoding: StringEncoding) -> Self {
        self.settings.default_string_encoding = encoding;
        self.buffer.reset();
        self
    }

    /// Whether plain fields are listed by [`Encoder::members`].
    pub fn serialize_fields(mut self, serialize_fields: bool) -> Self {
        self.settings.serialize_fields = serialize_fields;
        self.buffer.reset();
        self
    }

    /// Whether `#[tiny(property)]` members are listed by [`Encoder::members`].
    pub fn serialize_properties(mut self, serialize_properties: bool) -> Self {
        self.settings.serialize_properties = serialize_properties;
        self.buffer.reset();
        self
    }

    pub fn allow_private_members(mut self, allow_private_members: bool) -> Self {
        self.settings.allow_private_members = allow_private_members;
        self.buffer.reset();
        self
    }

    pub fn ignore_obsolete_members(mut self, ignore_obsolete_members: bool) -> Self {
        self.settings.ignore_obsolete_members = ignore_obsolete_members;
        self.buffer.reset();
        self
    }

    /// Reserved. Lengths are always written as 4-byte prefixes.
    pub fn variable_length_prefix(mut self, variable_length_prefix: bool) -> Self {
        self.settings.variable_length_prefix = variable_length_prefix;
        warn_reserved(&self.settings);
        self.buffer.reset();
        self
    }

    /// Reserved. Bool arrays are always written one byte per element.
    pub fn compress_bool_array(mut self, compress_bool_array: bool) -> Self {
        self.settings.compress_bool_array = compress_bool_array;
        warn_reserved(&self.settings);
        self.buffer.reset();
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Registers a resolver that takes over encoding and decoding of exactly `T`.
    ///
    /// A later registration for the same `T` replaces the earlier one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tiny_core::buffer::Reader;
    /// use tiny_core::error::Error;
    /// use tiny_core::{CustomResolver, Encoder};
    ///
    /// struct Flag;
    ///
    /// impl CustomResolver<bool> for Flag {
    ///     fn size(&self, _: &bool) -> Result<usize, Error> {
    ///         Ok(1)
    ///     }
    ///
    ///     fn encode(&self, value: &bool, dst: &mut [u8]) -> Result<(), Error> {
    ///         dst[0] = if *value { b'Y' } else { b'N' };
    ///         Ok(())
    ///     }
    ///
    ///     fn decode(&self, reader: &mut Reader) -> Result<bool, Error> {
    ///         Ok(reader.read_u8()? == b'Y')
    ///     }
    /// }
    ///
    /// let mut encoder = Encoder::default();
    /// encoder.register_resolver::<bool, _>(Flag);
    /// assert_eq!(encoder.serialize(&true).unwrap(), b"Y");
    /// ```
    pub fn register_resolver<T, R>(&mut self, resolver: R)
    where
        T: Serializer,
        R: CustomResolver<T>,
    {
        self.resolvers.register::<T>(Arc::new(resolver));
    }

    /// Registers a type-erased resolver under `T`.
    ///
    /// Fails with [`Error::InvalidArgument`] when the resolver's
    /// `target_type()` is not `T`.
    pub fn register_dyn_resolver<T: Serializer>(
        &mut self,
        resolver: Arc<dyn DynResolver>,
    ) -> Result<(), Error> {
        let adapter = DynAdapter::<T>::new(resolver)?;
        self.resolvers.register::<T>(Arc::new(adapter));
        Ok(())
    }

    pub fn resolvers(&self) -> &CustomResolverRegistry {
        &self.resolvers
    }

    /// Cached classification of `T`.
    #[inline(always)]
    pub fn classify<T: Serializer>(&self) -> Arc<TypeDescriptor> {
        classifier().classify::<T>()
    }

    /// Members of `T` that these settings include, in declaration order.
    pub fn members<T: Serializer>(&self) -> Vec<MemberDescriptor<T>> {
        classifier()
            .members::<T>()
            .iter()
            .filter(|m| {
                self.settings
                    .includes_member(m.kind(), m.visibility(), m.is_obsolete())
            })
            .copied()
            .collect()
    }

    /// Encodes `value` at `offset` in the buffer and returns the offset just past it.
    ///
    /// The buffer grows as needed; bytes outside the written range are left
    /// alone. The logical length becomes the end of the furthest successful
    /// write; a gap between the old length and `offset` reads as zeros. A failed call leaves the logical length unchanged, but bytes in
    /// the target range may already have been overwritten.
    pub fn encode_at<T: Serializer>(&mut self, value: &T, offset: usize) -> Result<usize, Error> {
        let descriptor = classifier().classify::<T>();
        let end = match self.resolvers.find::<T>()? {
            Some(resolver) => {
                let size = resolver.size(value)?;
                let end = offset
                    .checked_add(size)
                    .ok_or_else(|| Error::buffer_capacity(usize::MAX, self.buffer.capacity()))?;
                self.buffer.ensure_capacity(end)?;
                resolver.encode(value, self.buffer.slice_mut(offset, size)?)?;
                end
            }
            None => {
                let mut context = WriteContext::new(&mut self.buffer, &self.settings);
                write_value(value, &descriptor, &mut context, offset)?
            }
        };
        let len = self.buffer.len();
        if end > len {
            if offset > len {
                self.buffer.slice_mut(len, offset - len)?.fill(0);
            }
            self.buffer.set_len(end);
        }
        Ok(end)
    }

    /// Encodes `value` from the start of a cleared buffer and returns a copy of the bytes.
    pub fn serialize<T: Serializer>(&mut self, value: &T) -> Result<Vec<u8>, Error> {
        self.buffer.reset();
        self.encode_at(value, 0)?;
        Ok(self.buffer.dump())
    }

    /// Encodes `value` and copies the bytes into `dst` at `dst_offset`,
    /// growing `dst` if it is too short. Returns the number of bytes written.
    pub fn serialize_into<T: Serializer>(
        &mut self,
        value: &T,
        dst: &mut Vec<u8>,
        dst_offset: usize,
    ) -> Result<usize, Error> {
        self.buffer.reset();
        self.encode_at(value, 0)?;
        self.buffer.copy_to(dst, dst_offset)
    }

    /// Decodes a `T` starting at `offset` in `bytes`. Returns the value and
    /// the offset just past it.
    pub fn decode_at<T: Serializer>(&self, bytes: &[u8], offset: usize) -> Result<(T, usize), Error> {
        let mut reader = Reader::with_offset(bytes, offset)?;
        if let Some(resolver) = self.resolvers.find::<T>()? {
            let value = resolver.decode(&mut reader)?;
            return Ok((value, reader.cursor()));
        }
        let descriptor = classifier().classify::<T>();
        let mut context = ReadContext::new(reader, &self.settings);
        let value = read_value(&descriptor, &mut context)?;
        Ok((value, context.cursor()))
    }

    /// Decodes a `T` that must span all of `bytes`.
    pub fn deserialize<T: Serializer>(&self, bytes: &[u8]) -> Result<T, Error> {
        let (value, end) = self.decode_at(bytes, 0)?;
        if end != bytes.len() {
            return Err(Error::invalid_data(format!(
                "{} trailing bytes after `{}`",
                bytes.len() - end,
                std::any::type_name::<T>()
            )));
        }
        Ok(value)
    }

    /// Encoded bytes, up to the logical length.
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Clears the logical length. Capacity is kept for the next encode.
    pub fn reset(&mut self) {
        self.buffer.reset();
    }
}
