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
use byteorder::{ByteOrder, NativeEndian};

/// Growable byte buffer owned by one [`Encoder`](crate::encoder::Encoder).
///
/// The backing `Vec` is kept fully initialised: its length is the capacity,
/// and `len` tracks how many bytes hold encoded output. Capacity only grows,
/// and always to a power of two.
#[derive(Default, Debug)]
pub struct EncodeBuffer {
    bf: Vec<u8>,
    len: usize,
}

impl EncodeBuffer {
    pub fn with_capacity(capacity: usize) -> EncodeBuffer {
        let capacity = if capacity == 0 {
            0
        } else {
            capacity.next_power_of_two()
        };
        EncodeBuffer {
            bf: vec![0; capacity],
            len: 0,
        }
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.bf.len()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub(crate) fn set_len(&mut self, len: usize) {
        debug_assert!(len <= self.bf.len());
        self.len = len;
    }

    /// Forgets the encoded bytes but keeps the capacity.
    pub fn reset(&mut self) {
        self.len = 0;
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bf[..self.len]
    }

    pub fn dump(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// Copies the encoded bytes into `dst` starting at `dst_offset`, growing `dst` if needed.
    /// Returns the number of bytes copied, or a capacity error when `dst` cannot
    /// grow that far.
    pub fn copy_to(&self, dst: &mut Vec<u8>, dst_offset: usize) -> Result<usize, Error> {
        let end = dst_offset
            .checked_add(self.len)
            .ok_or_else(|| Error::buffer_capacity(usize::MAX, dst.len()))?;
        if dst.len() < end {
            dst.try_reserve_exact(end - dst.len())
                .map_err(|_| Error::buffer_capacity(end, dst.len()))?;
            dst.resize(end, 0);
        }
        dst[dst_offset..end].copy_from_slice(self.as_bytes());
        Ok(self.len)
    }

    /// Grows the buffer so that `required` bytes are addressable.
    ///
    /// The new capacity is the next power of two >= `required`; existing bytes are kept.
    pub fn ensure_capacity(&mut self, required: usize) -> Result<(), Error> {
        let capacity = self.bf.len();
        if required <= capacity {
            return Ok(());
        }
        let new_capacity = required
            .checked_next_power_of_two()
            .ok_or_else(|| Error::buffer_capacity(required, capacity))?;
        log::debug!(
            "growing encode buffer from {} to {} bytes",
            capacity,
            new_capacity
        );
        self.bf
            .try_reserve_exact(new_capacity - capacity)
            .map_err(|_| Error::buffer_capacity(new_capacity, capacity))?;
        self.bf.resize(new_capacity, 0);
        if required > self.bf.len() {
            return Err(Error::buffer_capacity(required, self.bf.len()));
        }
        Ok(())
    }

    /// Mutable view of `len` bytes at `offset`. The range must already be within capacity.
    #[inline]
    pub fn slice_mut(&mut self, offset: usize, len: usize) -> Result<&mut [u8], Error> {
        let capacity = self.bf.len();
        offset
            .checked_add(len)
            .and_then(|end| self.bf.get_mut(offset..end))
            .ok_or_else(|| Error::buffer_capacity(offset.saturating_add(len), capacity))
    }

    pub fn put_bytes(&mut self, offset: usize, v: &[u8]) -> Result<(), Error> {
        self.slice_mut(offset, v.len())?.copy_from_slice(v);
        Ok(())
    }

    pub fn put_u8(&mut self, offset: usize, value: u8) -> Result<(), Error> {
        self.slice_mut(offset, 1)?[0] = value;
        Ok(())
    }

    pub fn put_u16(&mut self, offset: usize, value: u16) -> Result<(), Error> {
        NativeEndian::write_u16(self.slice_mut(offset, 2)?, value);
        Ok(())
    }

    pub fn put_i32(&mut self, offset: usize, value: i32) -> Result<(), Error> {
        NativeEndian::write_i32(self.slice_mut(offset, 4)?, value);
        Ok(())
    }

    pub fn put_u32(&mut self, offset: usize, value: u32) -> Result<(), Error> {
        NativeEndian::write_u32(self.slice_mut(offset, 4)?, value);
        Ok(())
    }

    pub fn put_i64(&mut self, offset: usize, value: i64) -> Result<(), Error> {
        NativeEndian::write_i64(self.slice_mut(offset, 8)?, value);
        Ok(())
    }
}

/// Bounds-checked cursor over encoded bytes. All multi-byte reads use host byte order.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    bf: &'a [u8],
    cursor: usize,
}

impl<'a> Reader<'a> {
    pub fn new(bf: &'a [u8]) -> Reader<'a> {
        Reader { bf, cursor: 0 }
    }

    /// Starts reading at `offset`, which may equal the input length but not exceed it.
    pub fn with_offset(bf: &'a [u8], offset: usize) -> Result<Reader<'a>, Error> {
        if offset > bf.len() {
            return Err(Error::buffer_out_of_bound(offset, 0, bf.len()));
        }
        Ok(Reader { bf, cursor: offset })
    }

    #[inline(always)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.bf.len() - self.cursor
    }

    pub fn slice_after_cursor(&self) -> &'a [u8] {
        &self.bf[self.cursor..]
    }

    #[inline]
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], Error> {
        let end = self
            .cursor
            .checked_add(len)
            .filter(|end| *end <= self.bf.len())
            .ok_or_else(|| Error::buffer_out_of_bound(self.cursor, len, self.bf.len()))?;
        let s = &self.bf[self.cursor..end];
        self.cursor = end;
        Ok(s)
    }

    pub fn skip(&mut self, len: usize) -> Result<(), Error> {
        self.read_bytes(len).map(|_| ())
    }

    pub fn read_u8(&mut self) -> Result<u8, Error> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_i8(&mut self) -> Result<i8, Error> {
        Ok(self.read_u8()? as i8)
    }

    pub fn read_u16(&mut self) -> Result<u16, Error> {
        Ok(NativeEndian::read_u16(self.read_bytes(2)?))
    }

    pub fn read_i16(&mut self) -> Result<i16, Error> {
        Ok(NativeEndian::read_i16(self.read_bytes(2)?))
    }

    pub fn read_u32(&mut self) -> Result<u32, Error> {
        Ok(NativeEndian::read_u32(self.read_bytes(4)?))
    }

    pub fn read_i32(&mut self) -> Result<i32, Error> {
        Ok(NativeEndian::read_i32(self.read_bytes(4)?))
    }

    pub fn read_u64(&mut self) -> Result<u64, Error> {
        Ok(NativeEndian::read_u64(self.read_bytes(8)?))
    }

    pub fn read_i64(&mut self) -> Result<i64, Error> {
        Ok(NativeEndian::read_i64(self.read_bytes(8)?))
    }

    pub fn read_f32(&mut self) -> Result<f32, Error> {
        Ok(NativeEndian::read_f32(self.read_bytes(4)?))
    }

    pub fn read_f64(&mut self) -> Result<f64, Error> {
        Ok(NativeEndian::read_f64(self.read_bytes(8)?))
    }
}
