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

use std::fmt;

use crate::{Result, ValueError};

/// Logical types understood by the value formatter.
///
/// A [`LogicalType`] describes how the raw payload of a value is to be
/// interpreted: the same 64-bit integer is a count of days, milliseconds or
/// nanoseconds depending on the type it is paired with.
///
/// # Examples
///
/// ```
/// # use valuefmt_schema::{LogicalType, TimeUnit};
/// // a timestamp with nanosecond precision, always interpreted as UTC
/// let data_type = LogicalType::Timestamp(TimeUnit::Nanosecond);
/// assert_eq!(data_type.to_string(), "Timestamp(Nanosecond)");
///
/// // decimal types validate their precision and scale on construction
/// let data_type = LogicalType::try_new_decimal128(37, 2).unwrap();
/// assert_eq!(data_type.to_string(), "Decimal128(37, 2)");
/// assert!(LogicalType::try_new_decimal128(3, 5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogicalType {
    /// Opaque bytes of variable length.
    Binary,
    /// A signed 32-bit date representing the elapsed time since UNIX epoch (1970-01-01)
    /// in days.
    Date32,
    /// A signed 64-bit date representing the elapsed time since UNIX epoch (1970-01-01)
    /// in milliseconds. Values that are not whole days are truncated to the day.
    Date64,
    /// A signed 64-bit count of `TimeUnit` since the UNIX epoch, in UTC.
    Timestamp(TimeUnit),
    /// A signed 32-bit time representing the elapsed time since midnight in the unit of `TimeUnit`.
    /// Must be either seconds or milliseconds.
    Time32(TimeUnit),
    /// A signed 64-bit time representing the elapsed time since midnight in the unit of `TimeUnit`.
    /// Must be either microseconds or nanoseconds.
    Time64(TimeUnit),
    /// Measure of elapsed time in either seconds, milliseconds, microseconds or nanoseconds.
    Duration(TimeUnit),
    /// Exact 128-bit decimal with `(precision, scale)`.
    ///
    /// Prefer [`LogicalType::try_new_decimal128`], which validates both.
    Decimal128(u8, i8),
    /// Exact 256-bit decimal with `(precision, scale)`.
    ///
    /// Prefer [`LogicalType::try_new_decimal256`], which validates both.
    Decimal256(u8, i8),
    /// A 16-bit IEEE 754 floating point number.
    Float16,
}

/// An absolute length of time in seconds, milliseconds, microseconds or nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeUnit {
    /// Time in seconds.
    Second,
    /// Time in milliseconds.
    Millisecond,
    /// Time in microseconds.
    Microsecond,
    /// Time in nanoseconds.
    Nanosecond,
}

impl TimeUnit {
    /// Number of units in one second
    #[inline]
    pub const fn per_second(&self) -> i64 {
        match self {
            TimeUnit::Second => 1,
            TimeUnit::Millisecond => 1_000,
            TimeUnit::Microsecond => 1_000_000,
            TimeUnit::Nanosecond => 1_000_000_000,
        }
    }

    /// The standard abbreviation, as used when printing durations
    pub const fn abbreviation(&self) -> &'static str {
        match self {
            TimeUnit::Second => "s",
            TimeUnit::Millisecond => "ms",
            TimeUnit::Microsecond => "us",
            TimeUnit::Nanosecond => "ns",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl LogicalType {
    /// Creates a [`LogicalType::Decimal128`], returning an error if the
    /// precision or scale is out of range
    pub fn try_new_decimal128(precision: u8, scale: i8) -> Result<Self> {
        validate_decimal("Decimal128", precision, scale, DECIMAL128_MAX_PRECISION)?;
        Ok(Self::Decimal128(precision, scale))
    }

    /// Creates a [`LogicalType::Decimal256`], returning an error if the
    /// precision or scale is out of range
    pub fn try_new_decimal256(precision: u8, scale: i8) -> Result<Self> {
        validate_decimal("Decimal256", precision, scale, DECIMAL256_MAX_PRECISION)?;
        Ok(Self::Decimal256(precision, scale))
    }

    /// Returns the [`TimeUnit`] of a Time32 / Time64 type if it is one its
    /// physical width can carry, `None` otherwise
    pub fn time_of_day_unit(&self) -> Option<TimeUnit> {
        match self {
            LogicalType::Time32(u @ (TimeUnit::Second | TimeUnit::Millisecond)) => Some(*u),
            LogicalType::Time64(u @ (TimeUnit::Microsecond | TimeUnit::Nanosecond)) => Some(*u),
            _ => None,
        }
    }
}

fn validate_decimal(prefix: &str, precision: u8, scale: i8, max_precision: u8) -> Result<()> {
    if precision == 0 || precision > max_precision {
        return Err(ValueError::InvalidPrecision(format!(
            "{prefix} precision {precision} must be between 1 and {max_precision}"
        )));
    }
    if scale > 0 && scale as u8 > precision {
        return Err(ValueError::InvalidScale(format!(
            "{prefix} scale {scale} is greater than precision {precision}"
        )));
    }
    Ok(())
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary => write!(f, "Binary"),
            Self::Date32 => write!(f, "Date32"),
            Self::Date64 => write!(f, "Date64"),
            Self::Timestamp(time_unit) => write!(f, "Timestamp({time_unit})"),
            Self::Time32(time_unit) => write!(f, "Time32({time_unit})"),
            Self::Time64(time_unit) => write!(f, "Time64({time_unit})"),
            Self::Duration(time_unit) => write!(f, "Duration({time_unit})"),
            Self::Decimal128(precision, scale) => write!(f, "Decimal128({precision}, {scale})"),
            Self::Decimal256(precision, scale) => write!(f, "Decimal256({precision}, {scale})"),
            Self::Float16 => write!(f, "Float16"),
        }
    }
}

/// The maximum precision for [LogicalType::Decimal128] values
pub const DECIMAL128_MAX_PRECISION: u8 = 38;

/// The maximum precision for [LogicalType::Decimal256] values
pub const DECIMAL256_MAX_PRECISION: u8 = 76;
