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

//! Conversion methods for dates and times.
//!
//! Every conversion returns `None` when the value cannot be represented,
//! rather than wrapping or clamping.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use valuefmt_schema::TimeUnit;

/// Number of seconds in a day
pub const SECONDS_IN_DAY: i64 = 86_400;
/// Number of milliseconds in a day
pub const MILLISECONDS_IN_DAY: i64 = SECONDS_IN_DAY * 1_000;
/// Number of nanoseconds in a second
pub const NANOSECONDS: i64 = 1_000_000_000;
/// Number of days between 0001-01-01 and 1970-01-01
pub const EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// converts a `i32` representing a `date32` to [`NaiveDate`]
#[inline]
pub fn date32_to_date(v: i32) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(EPOCH_DAYS_FROM_CE.checked_add(v)?)
}

/// converts a `i64` representing a `date64` to [`NaiveDate`], flooring to the day
#[inline]
pub fn date64_to_date(v: i64) -> Option<NaiveDate> {
    let days = i32::try_from(v.div_euclid(MILLISECONDS_IN_DAY)).ok()?;
    date32_to_date(days)
}

/// converts a `i64` count of `unit` since the epoch to a UTC [`NaiveDateTime`]
pub fn timestamp_to_datetime(v: i64, unit: TimeUnit) -> Option<NaiveDateTime> {
    let per_second = unit.per_second();
    let secs = v.div_euclid(per_second);
    // rem_euclid keeps the sub-second part positive for pre-epoch values
    let nanos = v.rem_euclid(per_second) * (NANOSECONDS / per_second);
    DateTime::<Utc>::from_timestamp(secs, nanos as u32).map(|t| t.naive_utc())
}

/// converts a `i64` count of `unit` since midnight to [`NaiveTime`]
///
/// Returns `None` for negative values and values of one day or more
pub fn time_to_time(v: i64, unit: TimeUnit) -> Option<NaiveTime> {
    let per_second = unit.per_second();
    if !(0..per_second * SECONDS_IN_DAY).contains(&v) {
        return None;
    }
    NaiveTime::from_num_seconds_from_midnight_opt(
        (v / per_second) as u32,
        (v % per_second * (NANOSECONDS / per_second)) as u32,
    )
}
