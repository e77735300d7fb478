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

/// Checks that a fixed-layout slot has the exact size the type needs.
#[inline(always)]
pub fn check_slot<T: ?Sized + 'static>(len: usize, expected: usize) -> Result<(), Error> {
    if len != expected {
        return Err(slot_mismatch::<T>(len, expected));
    }
    Ok(())
}

#[cold]
#[inline(never)]
fn slot_mismatch<T: ?Sized + 'static>(len: usize, expected: usize) -> Error {
    Error::invalid_argument(format!(
        "`{}` occupies {} bytes, got a {} byte slot",
        std::any::type_name::<T>(),
        expected,
        len
    ))
}

/// Splits the next `len` bytes off a fixed-layout destination.
///
/// Callers check the total slot size first, so `len` never exceeds what is left.
#[inline(always)]
pub fn split_slot<'a>(rest: &mut &'a mut [u8], len: usize) -> &'a mut [u8] {
    let (head, tail) = std::mem::take(rest).split_at_mut(len);
    *rest = tail;
    head
}

#[inline(always)]
pub fn split_src<'a>(rest: &mut &'a [u8], len: usize) -> &'a [u8] {
    let (head, tail) = rest.split_at(len);
    *rest = tail;
    head
}
