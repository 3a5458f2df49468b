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

use std::fmt::{Display, Formatter};

use valuefmt_buffer::{f16, i256};
use valuefmt_schema::{LogicalType, Result, TimeUnit, ValueError};

use crate::display::{FormatOptions, Rendering, ScalarFormatter};

/// The raw payload of a single value.
///
/// A payload carries no meaning on its own: an `Int64` is a count of
/// milliseconds, nanoseconds or days only once paired with a [`LogicalType`].
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    /// The absence of a value, valid for every type
    Null,
    /// 32-bit payload of Date32 and Time32
    Int32(i32),
    /// 64-bit payload of Date64, Timestamp, Time64 and Duration
    Int64(i64),
    /// 128-bit payload of Decimal128
    Int128(i128),
    /// 256-bit payload of Decimal256
    Int256(i256),
    /// Half precision payload of Float16
    Float16(f16),
    /// Variable length payload of Binary
    Binary(Vec<u8>),
}

impl ScalarValue {
    /// Name of the payload kind, for use in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            ScalarValue::Null => "Null",
            ScalarValue::Int32(_) => "Int32",
            ScalarValue::Int64(_) => "Int64",
            ScalarValue::Int128(_) => "Int128",
            ScalarValue::Int256(_) => "Int256",
            ScalarValue::Float16(_) => "Float16",
            ScalarValue::Binary(_) => "Binary",
        }
    }

    /// Returns true if this is [`ScalarValue::Null`]
    pub fn is_null(&self) -> bool {
        matches!(self, ScalarValue::Null)
    }
}

macro_rules! scalar_from {
    ($($native:ty => $variant:ident),+) => {
        $(impl From<$native> for ScalarValue {
            fn from(v: $native) -> Self {
                ScalarValue::$variant(v)
            }
        })+
    };
}

scalar_from!(
    i32 => Int32,
    i64 => Int64,
    i128 => Int128,
    i256 => Int256,
    f16 => Float16,
    Vec<u8> => Binary
);

impl From<&[u8]> for ScalarValue {
    fn from(v: &[u8]) -> Self {
        ScalarValue::Binary(v.to_vec())
    }
}

/// Checks that `value` is a payload `data_type` can interpret, and that
/// `data_type` itself is well formed
pub(crate) fn validate(data_type: &LogicalType, value: &ScalarValue) -> Result<()> {
    match data_type {
        LogicalType::Time32(_) | LogicalType::Time64(_) if data_type.time_of_day_unit().is_none() => {
            return Err(ValueError::UnsupportedType(format!(
                "{data_type} is not a valid time of day type"
            )));
        }
        LogicalType::Decimal128(precision, scale) => {
            LogicalType::try_new_decimal128(*precision, *scale)?;
        }
        LogicalType::Decimal256(precision, scale) => {
            LogicalType::try_new_decimal256(*precision, *scale)?;
        }
        _ => {}
    }

    let supported = matches!(
        (data_type, value),
        (_, ScalarValue::Null)
            | (LogicalType::Binary, ScalarValue::Binary(_))
            | (LogicalType::Date32 | LogicalType::Time32(_), ScalarValue::Int32(_))
            | (
                LogicalType::Date64
                    | LogicalType::Timestamp(_)
                    | LogicalType::Time64(_)
                    | LogicalType::Duration(_),
                ScalarValue::Int64(_),
            )
            | (LogicalType::Decimal128(_, _), ScalarValue::Int128(_))
            | (
                LogicalType::Decimal256(_, _),
                ScalarValue::Int128(_) | ScalarValue::Int256(_)
            )
            | (LogicalType::Float16, ScalarValue::Float16(_))
    );

    if supported {
        Ok(())
    } else {
        Err(ValueError::UnsupportedType(format!(
            "cannot interpret a {} payload as {data_type}",
            value.kind()
        )))
    }
}

/// A [`ScalarValue`] paired with the [`LogicalType`] that interprets it
///
/// ```
/// # use valuefmt::{Scalar, TimeUnit};
/// let scalar = Scalar::duration(TimeUnit::Nanosecond, 100);
/// assert_eq!(scalar.to_string(), "100ns");
///
/// let scalar = Scalar::decimal128(37, 2, 18446744073709551615).unwrap();
/// assert_eq!(scalar.to_string(), "184467440737095516.15");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Scalar {
    data_type: LogicalType,
    value: ScalarValue,
}

impl Scalar {
    /// Pairs `value` with `data_type`, returning an error if the payload
    /// does not match the type
    pub fn try_new(data_type: LogicalType, value: ScalarValue) -> Result<Self> {
        validate(&data_type, &value)?;
        Ok(Self { data_type, value })
    }

    /// A null of the given type
    pub fn new_null(data_type: LogicalType) -> Result<Self> {
        Self::try_new(data_type, ScalarValue::Null)
    }

    /// A binary value
    pub fn binary(value: impl Into<Vec<u8>>) -> Self {
        Self {
            data_type: LogicalType::Binary,
            value: ScalarValue::Binary(value.into()),
        }
    }

    /// Days since the epoch
    pub fn date32(value: i32) -> Self {
        Self {
            data_type: LogicalType::Date32,
            value: ScalarValue::Int32(value),
        }
    }

    /// Milliseconds since the epoch
    pub fn date64(value: i64) -> Self {
        Self {
            data_type: LogicalType::Date64,
            value: ScalarValue::Int64(value),
        }
    }

    /// `unit`s since the epoch, in UTC
    pub fn timestamp(unit: TimeUnit, value: i64) -> Self {
        Self {
            data_type: LogicalType::Timestamp(unit),
            value: ScalarValue::Int64(value),
        }
    }

    /// `unit`s since midnight, `unit` must be seconds or milliseconds
    pub fn time32(unit: TimeUnit, value: i32) -> Result<Self> {
        Self::try_new(LogicalType::Time32(unit), ScalarValue::Int32(value))
    }

    /// `unit`s since midnight, `unit` must be microseconds or nanoseconds
    pub fn time64(unit: TimeUnit, value: i64) -> Result<Self> {
        Self::try_new(LogicalType::Time64(unit), ScalarValue::Int64(value))
    }

    /// An elapsed count of `unit`
    pub fn duration(unit: TimeUnit, value: i64) -> Self {
        Self {
            data_type: LogicalType::Duration(unit),
            value: ScalarValue::Int64(value),
        }
    }

    /// A 128-bit decimal, validating `precision` and `scale`
    pub fn decimal128(precision: u8, scale: i8, value: i128) -> Result<Self> {
        Ok(Self {
            data_type: LogicalType::try_new_decimal128(precision, scale)?,
            value: ScalarValue::Int128(value),
        })
    }

    /// A 256-bit decimal, validating `precision` and `scale`
    pub fn decimal256(precision: u8, scale: i8, value: i256) -> Result<Self> {
        Ok(Self {
            data_type: LogicalType::try_new_decimal256(precision, scale)?,
            value: ScalarValue::Int256(value),
        })
    }

    /// A half precision float
    pub fn float16(value: f16) -> Self {
        Self {
            data_type: LogicalType::Float16,
            value: ScalarValue::Float16(value),
        }
    }

    /// The logical type of this scalar
    pub fn data_type(&self) -> &LogicalType {
        &self.data_type
    }

    /// The raw payload of this scalar
    pub fn value(&self) -> &ScalarValue {
        &self.value
    }

    /// Renders this scalar with `rendering` and default [`FormatOptions`]
    pub fn render(&self, rendering: Rendering) -> Result<String> {
        let options = FormatOptions::default();
        ScalarFormatter::try_new(self, rendering, &options)?.try_to_string()
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let options = FormatOptions::default().with_display_error(true);
        match ScalarFormatter::try_new(self, Rendering::Default, &options) {
            Ok(formatter) => write!(f, "{formatter}"),
            Err(e) => write!(f, "ERROR: {e}"),
        }
    }
}
