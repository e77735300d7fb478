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
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};

/// Day zero of the tick scale.
pub const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(1, 1, 1) {
    None => {
        panic!("Unreachable code")
    }
    Some(epoch) => epoch,
};

/// Number of 100 ns ticks in one second.
pub const TICKS_PER_SECOND: i64 = 10_000_000;
const NANOS_PER_TICK: i64 = 100;
const TICKS_SIZE: usize = 8;

/// Converts a duration to whole ticks, truncating sub-tick nanoseconds toward zero.
pub fn duration_to_ticks(delta: TimeDelta) -> Result<i64, Error> {
    delta
        .num_seconds()
        .checked_mul(TICKS_PER_SECOND)
        .and_then(|ticks| ticks.checked_add(i64::from(delta.subsec_nanos()) / NANOS_PER_TICK))
        .ok_or_else(|| Error::invalid_argument(format!("{} does not fit in 64-bit ticks", delta)))
}

pub fn ticks_to_duration(ticks: i64) -> Result<TimeDelta, Error> {
    let secs = ticks.div_euclid(TICKS_PER_SECOND);
    let nanos = (ticks.rem_euclid(TICKS_PER_SECOND) * NANOS_PER_TICK) as u32;
    TimeDelta::new(secs, nanos)
        .ok_or_else(|| Error::invalid_data(format!("{} ticks is out of duration range", ticks)))
}

fn epoch_datetime() -> NaiveDateTime {
    EPOCH.and_time(NaiveTime::MIN)
}

pub fn datetime_to_ticks(dt: &NaiveDateTime) -> Result<i64, Error> {
    duration_to_ticks(dt.signed_duration_since(epoch_datetime()))
}

pub fn ticks_to_datetime(ticks: i64) -> Result<NaiveDateTime, Error> {
    epoch_datetime()
        .checked_add_signed(ticks_to_duration(ticks)?)
        .ok_or_else(|| Error::invalid_data(format!("{} ticks is out of date range", ticks)))
}

impl Serializer for NaiveDateTime {
    type Element = Self;

    fn tiny_shape() -> TypeShape {
        TypeShape::value::<Self>()
    }

    fn tiny_store(&self, dst: &mut [u8]) -> Result<(), Error> {
        check_slot::<Self>(dst.len(), TICKS_SIZE)?;
        NativeEndian::write_i64(dst, datetime_to_ticks(self)?);
        Ok(())
    }

    fn tiny_load(src: &[u8]) -> Result<Self, Error> {
        check_slot::<Self>(src.len(), TICKS_SIZE)?;
        ticks_to_datetime(NativeEndian::read_i64(src))
    }
}

// Offsets are normalized away: the ticks describe the UTC instant.
impl Serializer for DateTime<Utc> {
    type Element = Self;

    fn tiny_shape() -> TypeShape {
        TypeShape::value::<Self>()
    }

    fn tiny_store(&self, dst: &mut [u8]) -> Result<(), Error> {
        check_slot::<Self>(dst.len(), TICKS_SIZE)?;
        NativeEndian::write_i64(dst, datetime_to_ticks(&self.naive_utc())?);
        Ok(())
    }

    fn tiny_load(src: &[u8]) -> Result<Self, Error> {
        check_slot::<Self>(src.len(), TICKS_SIZE)?;
        let naive = ticks_to_datetime(NativeEndian::read_i64(src))?;
        Ok(DateTime::from_naive_utc_and_offset(naive, Utc))
    }
}

impl Serializer for TimeDelta {
    type Element = Self;

    fn tiny_shape() -> TypeShape {
        TypeShape::value::<Self>()
    }

    fn tiny_store(&self, dst: &mut [u8]) -> Result<(), Error> {
        check_slot::<Self>(dst.len(), TICKS_SIZE)?;
        NativeEndian::write_i64(dst, duration_to_ticks(*self)?);
        Ok(())
    }

    fn tiny_load(src: &[u8]) -> Result<Self, Error> {
        check_slot::<Self>(src.len(), TICKS_SIZE)?;
        ticks_to_duration(NativeEndian::read_i64(src))
    }
}
