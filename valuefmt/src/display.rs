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

//! Functions for rendering typed values as strings.
//!
//! Every value has a default rendering; some types additionally support
//! the alternates listed on [`Rendering`].

use std::fmt::{Display, Formatter, Write};

use chrono::format::{Fixed, Item, Numeric, Pad};
use tracing::trace;
use valuefmt_buffer::{f16, i256};
use valuefmt_schema::{LogicalType, Result, TimeUnit, ValueError};

use crate::decimal::{format_decimal128, format_decimal256};
use crate::scalar::{validate, Scalar, ScalarValue};
use crate::temporal_conversions::*;

/// Options for formatting values
#[derive(Debug, Clone)]
pub struct FormatOptions<'a> {
    safe: bool,
    null: &'a str,
}

impl<'a> Default for FormatOptions<'a> {
    fn default() -> Self {
        Self {
            safe: false,
            null: "(null)",
        }
    }
}

impl<'a> FormatOptions<'a> {
    /// If set to `true` any formatting errors will be written to the output
    /// instead of being converted into a [`std::fmt::Error`]
    pub fn with_display_error(mut self, safe: bool) -> Self {
        self.safe = safe;
        self
    }

    /// Overrides the string used to represent a null
    ///
    /// Defaults to `"(null)"`
    pub fn with_null(self, null: &'a str) -> Self {
        Self { null, ..self }
    }
}

/// The string form to render a value in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rendering {
    /// The canonical form of the type, supported by every type
    Default,
    /// A time of day with exactly the fractional digits of the given unit,
    /// truncating finer parts
    Precision(TimeUnit),
    /// A timestamp as `YYYY-MM-DDTHH:MM:SSZ`, without sub-second digits
    Rfc3339,
    /// A timestamp as RFC3339 with sub-second digits when non-zero
    Rfc3339Nano,
    /// The underlying integer of a temporal value, printed decimally
    Raw,
    /// Binary values as lower-case hex pairs
    Hex,
}

impl Display for Rendering {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Rendering::Precision(unit) => write!(f, "Precision({unit})"),
            other => write!(f, "{other:?}"),
        }
    }
}

/// Either a [`ValueError`] or [`std::fmt::Error`]
enum FormatError {
    Format(std::fmt::Error),
    Value(ValueError),
}

type FormatResult = std::result::Result<(), FormatError>;

impl From<std::fmt::Error> for FormatError {
    fn from(value: std::fmt::Error) -> Self {
        Self::Format(value)
    }
}

impl From<ValueError> for FormatError {
    fn from(value: ValueError) -> Self {
        Self::Value(value)
    }
}

/// [`Display`] that may fail with a [`ValueError`]
trait DisplayValue {
    fn write(&self, f: &mut dyn Write) -> FormatResult;
}

/// A string formatter for a single typed value
///
/// Construction checks the type, payload and rendering; errors that depend
/// on the magnitude of the value, such as [`ValueError::Overflow`], are
/// reported when the value is written.
pub struct ScalarFormatter<'a> {
    format: Box<dyn DisplayValue + 'a>,
    safe: bool,
}

impl<'a> ScalarFormatter<'a> {
    /// Returns a [`ScalarFormatter`] that renders `scalar` with `rendering`
    pub fn try_new(
        scalar: &'a Scalar,
        rendering: Rendering,
        options: &FormatOptions<'a>,
    ) -> Result<Self> {
        Self::try_from_parts(scalar.data_type(), scalar.value(), rendering, options)
    }

    /// Returns a [`ScalarFormatter`] that renders `value` interpreted as
    /// `data_type` with `rendering`
    pub fn try_from_parts(
        data_type: &LogicalType,
        value: &'a ScalarValue,
        rendering: Rendering,
        options: &FormatOptions<'a>,
    ) -> Result<Self> {
        Ok(Self {
            format: make_formatter(data_type, value, rendering, options)?,
            safe: options.safe,
        })
    }

    /// Writes this value to the provided `String`
    ///
    /// Note: this ignores [`FormatOptions::with_display_error`]
    pub fn write(&self, s: &mut String) -> Result<()> {
        match self.format.write(s) {
            Ok(_) => Ok(()),
            Err(FormatError::Value(e)) => Err(e),
            Err(FormatError::Format(_)) => {
                unreachable!("formatting to string is infallible")
            }
        }
    }

    /// Fallibly converts this to a string
    pub fn try_to_string(&self) -> Result<String> {
        let mut s = String::new();
        self.write(&mut s)?;
        Ok(s)
    }
}

impl<'a> Display for ScalarFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.format.write(f) {
            Ok(()) => Ok(()),
            Err(FormatError::Value(e)) if self.safe => write!(f, "ERROR: {e}"),
            Err(_) => Err(std::fmt::Error),
        }
    }
}

/// Renders `value` interpreted as `data_type` in its default form
///
/// ```
/// # use valuefmt::{format, LogicalType, ScalarValue};
/// assert_eq!(format(&LogicalType::Date32, &ScalarValue::Int32(100)).unwrap(), "1970-04-11");
/// ```
pub fn format(data_type: &LogicalType, value: &ScalarValue) -> Result<String> {
    format_with(data_type, value, Rendering::Default, &FormatOptions::default())
}

/// Renders `value` interpreted as `data_type` with `rendering`
pub fn format_with(
    data_type: &LogicalType,
    value: &ScalarValue,
    rendering: Rendering,
    options: &FormatOptions<'_>,
) -> Result<String> {
    ScalarFormatter::try_from_parts(data_type, value, rendering, options)?.try_to_string()
}

fn make_formatter<'a>(
    data_type: &LogicalType,
    value: &'a ScalarValue,
    rendering: Rendering,
    options: &FormatOptions<'a>,
) -> Result<Box<dyn DisplayValue + 'a>> {
    trace!(%data_type, %rendering, payload = value.kind(), "building formatter");
    validate(data_type, value)?;

    if value.is_null() {
        return Ok(Box::new(NullFormat(options.null)));
    }

    let unsupported = || {
        Err(ValueError::UnsupportedRendering(format!(
            "{rendering} is not supported for {data_type}"
        )))
    };

    let format: Box<dyn DisplayValue + 'a> = match (*data_type, value, rendering) {
        (LogicalType::Binary, ScalarValue::Binary(v), Rendering::Default) => {
            Box::new(BinaryText(v))
        }
        (LogicalType::Binary, ScalarValue::Binary(v), Rendering::Hex) => Box::new(BinaryHex(v)),
        (LogicalType::Date32, ScalarValue::Int32(v), Rendering::Default) => {
            Box::new(DateFormat::Days(*v))
        }
        (LogicalType::Date64, ScalarValue::Int64(v), Rendering::Default) => {
            Box::new(DateFormat::Milliseconds(*v))
        }
        (LogicalType::Timestamp(unit), ScalarValue::Int64(v), Rendering::Default) => {
            Box::new(TimestampFormat::new(*v, unit, DATETIME))
        }
        (LogicalType::Timestamp(unit), ScalarValue::Int64(v), Rendering::Rfc3339) => {
            Box::new(TimestampFormat::new(*v, unit, RFC3339))
        }
        (LogicalType::Timestamp(unit), ScalarValue::Int64(v), Rendering::Rfc3339Nano) => {
            Box::new(TimestampFormat::new(*v, unit, RFC3339_NANO))
        }
        (
            LogicalType::Time32(_) | LogicalType::Time64(_),
            v,
            Rendering::Default | Rendering::Precision(_),
        ) => {
            // validate has already rejected units outside the type's family
            let Some(unit) = data_type.time_of_day_unit() else {
                return unsupported();
            };
            let precision = match rendering {
                Rendering::Precision(precision) => precision,
                _ => unit,
            };
            let value = match v {
                ScalarValue::Int32(v) => *v as i64,
                ScalarValue::Int64(v) => *v,
                _ => return unsupported(),
            };
            Box::new(TimeFormat {
                value,
                unit,
                precision,
            })
        }
        (LogicalType::Duration(unit), ScalarValue::Int64(v), Rendering::Default) => {
            Box::new(DurationFormat { value: *v, unit })
        }
        (LogicalType::Date32 | LogicalType::Time32(_), ScalarValue::Int32(v), Rendering::Raw) => {
            Box::new(RawFormat(*v as i64))
        }
        (
            LogicalType::Date64
            | LogicalType::Timestamp(_)
            | LogicalType::Time64(_)
            | LogicalType::Duration(_),
            ScalarValue::Int64(v),
            Rendering::Raw,
        ) => Box::new(RawFormat(*v)),
        (LogicalType::Decimal128(_, scale), ScalarValue::Int128(v), Rendering::Default) => {
            Box::new(DecimalFormat::Decimal128(*v, scale))
        }
        (LogicalType::Decimal256(_, scale), ScalarValue::Int128(v), Rendering::Default) => {
            Box::new(DecimalFormat::Decimal256(i256::from_i128(*v), scale))
        }
        (LogicalType::Decimal256(_, scale), ScalarValue::Int256(v), Rendering::Default) => {
            Box::new(DecimalFormat::Decimal256(*v, scale))
        }
        (LogicalType::Float16, ScalarValue::Float16(v), Rendering::Default) => {
            Box::new(Float16Format(*v))
        }
        _ => return unsupported(),
    };
    Ok(format)
}

struct NullFormat<'a>(&'a str);

impl<'a> DisplayValue for NullFormat<'a> {
    fn write(&self, f: &mut dyn Write) -> FormatResult {
        f.write_str(self.0)?;
        Ok(())
    }
}

struct BinaryText<'a>(&'a [u8]);

impl<'a> DisplayValue for BinaryText<'a> {
    fn write(&self, f: &mut dyn Write) -> FormatResult {
        f.write_str(&String::from_utf8_lossy(self.0))?;
        Ok(())
    }
}

struct BinaryHex<'a>(&'a [u8]);

impl<'a> DisplayValue for BinaryHex<'a> {
    fn write(&self, f: &mut dyn Write) -> FormatResult {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

enum DateFormat {
    Days(i32),
    Milliseconds(i64),
}

impl DisplayValue for DateFormat {
    fn write(&self, f: &mut dyn Write) -> FormatResult {
        let (date, value, data_type) = match *self {
            DateFormat::Days(v) => (date32_to_date(v), v as i64, LogicalType::Date32),
            DateFormat::Milliseconds(v) => (date64_to_date(v), v, LogicalType::Date64),
        };
        let date = date.ok_or_else(|| {
            ValueError::Overflow(format!("Failed to convert {value} to date for {data_type}"))
        })?;
        write!(f, "{}", date.format_with_items(DATE.iter()))?;
        Ok(())
    }
}

struct TimestampFormat {
    value: i64,
    unit: TimeUnit,
    items: &'static [Item<'static>],
}

impl TimestampFormat {
    fn new(value: i64, unit: TimeUnit, items: &'static [Item<'static>]) -> Self {
        Self { value, unit, items }
    }
}

impl DisplayValue for TimestampFormat {
    fn write(&self, f: &mut dyn Write) -> FormatResult {
        let naive = timestamp_to_datetime(self.value, self.unit).ok_or_else(|| {
            ValueError::Overflow(format!(
                "Failed to convert {} to datetime for {}",
                self.value,
                LogicalType::Timestamp(self.unit)
            ))
        })?;
        write!(f, "{}", naive.format_with_items(self.items.iter()))?;
        Ok(())
    }
}

struct TimeFormat {
    value: i64,
    unit: TimeUnit,
    precision: TimeUnit,
}

impl DisplayValue for TimeFormat {
    fn write(&self, f: &mut dyn Write) -> FormatResult {
        let time = time_to_time(self.value, self.unit).ok_or_else(|| {
            ValueError::Overflow(format!(
                "Failed to convert {} to time of day for {}: value must be within one day",
                self.value, self.unit
            ))
        })?;
        let items = match self.precision {
            TimeUnit::Second => TIME_SECOND,
            TimeUnit::Millisecond => TIME_MILLISECOND,
            TimeUnit::Microsecond => TIME_MICROSECOND,
            TimeUnit::Nanosecond => TIME_NANOSECOND,
        };
        write!(f, "{}", time.format_with_items(items.iter()))?;
        Ok(())
    }
}

struct DurationFormat {
    value: i64,
    unit: TimeUnit,
}

impl DisplayValue for DurationFormat {
    fn write(&self, f: &mut dyn Write) -> FormatResult {
        write!(f, "{}{}", self.value, self.unit.abbreviation())?;
        Ok(())
    }
}

struct RawFormat(i64);

impl DisplayValue for RawFormat {
    fn write(&self, f: &mut dyn Write) -> FormatResult {
        f.write_str(&lexical_to_string(self.0))?;
        Ok(())
    }
}

enum DecimalFormat {
    Decimal128(i128, i8),
    Decimal256(i256, i8),
}

impl DisplayValue for DecimalFormat {
    fn write(&self, f: &mut dyn Write) -> FormatResult {
        let s = match *self {
            DecimalFormat::Decimal128(v, scale) => format_decimal128(v, scale),
            DecimalFormat::Decimal256(v, scale) => format_decimal256(v, scale),
        };
        f.write_str(&s)?;
        Ok(())
    }
}

struct Float16Format(f16);

impl DisplayValue for Float16Format {
    fn write(&self, f: &mut dyn Write) -> FormatResult {
        // f32's Display is the shortest string that round trips
        write!(f, "{}", self.0.to_f32())?;
        Ok(())
    }
}

const DATE: &[Item<'static>] = &[
    Item::Numeric(Numeric::Year, Pad::Zero),
    Item::Literal("-"),
    Item::Numeric(Numeric::Month, Pad::Zero),
    Item::Literal("-"),
    Item::Numeric(Numeric::Day, Pad::Zero),
];

const DATETIME: &[Item<'static>] = &[
    Item::Numeric(Numeric::Year, Pad::Zero),
    Item::Literal("-"),
    Item::Numeric(Numeric::Month, Pad::Zero),
    Item::Literal("-"),
    Item::Numeric(Numeric::Day, Pad::Zero),
    Item::Literal(" "),
    Item::Numeric(Numeric::Hour, Pad::Zero),
    Item::Literal(":"),
    Item::Numeric(Numeric::Minute, Pad::Zero),
    Item::Literal(":"),
    Item::Numeric(Numeric::Second, Pad::Zero),
    Item::Fixed(Fixed::Nanosecond),
];

const RFC3339: &[Item<'static>] = &[
    Item::Numeric(Numeric::Year, Pad::Zero),
    Item::Literal("-"),
    Item::Numeric(Numeric::Month, Pad::Zero),
    Item::Literal("-"),
    Item::Numeric(Numeric::Day, Pad::Zero),
    Item::Literal("T"),
    Item::Numeric(Numeric::Hour, Pad::Zero),
    Item::Literal(":"),
    Item::Numeric(Numeric::Minute, Pad::Zero),
    Item::Literal(":"),
    Item::Numeric(Numeric::Second, Pad::Zero),
    Item::Literal("Z"),
];

const RFC3339_NANO: &[Item<'static>] = &[
    Item::Numeric(Numeric::Year, Pad::Zero),
    Item::Literal("-"),
    Item::Numeric(Numeric::Month, Pad::Zero),
    Item::Literal("-"),
    Item::Numeric(Numeric::Day, Pad::Zero),
    Item::Literal("T"),
    Item::Numeric(Numeric::Hour, Pad::Zero),
    Item::Literal(":"),
    Item::Numeric(Numeric::Minute, Pad::Zero),
    Item::Literal(":"),
    Item::Numeric(Numeric::Second, Pad::Zero),
    Item::Fixed(Fixed::Nanosecond),
    Item::Literal("Z"),
];

const TIME_SECOND: &[Item<'static>] = &[
    Item::Numeric(Numeric::Hour, Pad::Zero),
    Item::Literal(":"),
    Item::Numeric(Numeric::Minute, Pad::Zero),
    Item::Literal(":"),
    Item::Numeric(Numeric::Second, Pad::Zero),
];

const TIME_MILLISECOND: &[Item<'static>] = &[
    Item::Numeric(Numeric::Hour, Pad::Zero),
    Item::Literal(":"),
    Item::Numeric(Numeric::Minute, Pad::Zero),
    Item::Literal(":"),
    Item::Numeric(Numeric::Second, Pad::Zero),
    Item::Fixed(Fixed::Nanosecond3),
];

const TIME_MICROSECOND: &[Item<'static>] = &[
    Item::Numeric(Numeric::Hour, Pad::Zero),
    Item::Literal(":"),
    Item::Numeric(Numeric::Minute, Pad::Zero),
    Item::Literal(":"),
    Item::Numeric(Numeric::Second, Pad::Zero),
    Item::Fixed(Fixed::Nanosecond6),
];

const TIME_NANOSECOND: &[Item<'static>] = &[
    Item::Numeric(Numeric::Hour, Pad::Zero),
    Item::Literal(":"),
    Item::Numeric(Numeric::Minute, Pad::Zero),
    Item::Literal(":"),
    Item::Numeric(Numeric::Second, Pad::Zero),
    Item::Fixed(Fixed::Nanosecond9),
];

/// Converts an integer to a `String`
pub fn lexical_to_string<N: lexical_core::ToLexical>(n: N) -> String {
    let mut buf = vec![0_u8; N::FORMATTED_SIZE_DECIMAL];
    let len = lexical_core::write(n, &mut buf).len();
    buf.truncate(len);
    // lexical_core only ever writes ASCII
    String::from_utf8(buf).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(data_type: LogicalType, value: impl Into<ScalarValue>, rendering: Rendering) -> Result<String> {
        format_with(&data_type, &value.into(), rendering, &FormatOptions::default())
    }

    #[test]
    fn test_binary() {
        let v = ScalarValue::from(b"binary-100".as_slice());
        assert_eq!(format(&LogicalType::Binary, &v).unwrap(), "binary-100");
        assert_eq!(
            render(LogicalType::Binary, vec![0xde_u8, 0xad, 0x01], Rendering::Hex).unwrap(),
            "dead01"
        );
        // invalid utf-8 is replaced rather than dropped
        assert_eq!(
            render(LogicalType::Binary, vec![b'a', 0xff], Rendering::Default).unwrap(),
            "a\u{FFFD}"
        );
    }

    #[test]
    fn test_dates() {
        assert_eq!(render(LogicalType::Date32, 100_i32, Rendering::Default).unwrap(), "1970-04-11");
        assert_eq!(render(LogicalType::Date32, -719_162_i32, Rendering::Default).unwrap(), "0001-01-01");
        assert_eq!(render(LogicalType::Date64, 100_i64, Rendering::Default).unwrap(), "1970-01-01");
        assert_eq!(
            render(LogicalType::Date64, 1_700_000_000_000_i64, Rendering::Default).unwrap(),
            "2023-11-14"
        );
        assert_eq!(render(LogicalType::Date32, 100_i32, Rendering::Raw).unwrap(), "100");

        let err = render(LogicalType::Date32, i32::MAX, Rendering::Default).unwrap_err();
        assert!(matches!(err, ValueError::Overflow(_)), "{err}");
    }

    #[test]
    fn test_timestamps() {
        let ns = LogicalType::Timestamp(TimeUnit::Nanosecond);
        assert_eq!(
            render(ns, 1_000_000_i64, Rendering::Default).unwrap(),
            "1970-01-01 00:00:00.001"
        );
        assert_eq!(
            render(ns, 1_000_000_i64, Rendering::Rfc3339).unwrap(),
            "1970-01-01T00:00:00Z"
        );
        assert_eq!(
            render(ns, 1_000_000_i64, Rendering::Rfc3339Nano).unwrap(),
            "1970-01-01T00:00:00.001Z"
        );
        assert_eq!(render(ns, 1_i64, Rendering::Default).unwrap(), "1970-01-01 00:00:00.000000001");
        assert_eq!(render(ns, 1_000_i64, Rendering::Default).unwrap(), "1970-01-01 00:00:00.000001");
        // the fraction widens to the next group of three digits, keeping its zeros
        assert_eq!(
            render(ns, 1_500_000_i64, Rendering::Default).unwrap(),
            "1970-01-01 00:00:00.001500"
        );
        assert_eq!(
            render(ns, 1_500_000_i64, Rendering::Rfc3339Nano).unwrap(),
            "1970-01-01T00:00:00.001500Z"
        );
        assert_eq!(render(ns, 1_000_000_i64, Rendering::Raw).unwrap(), "1000000");

        let s = LogicalType::Timestamp(TimeUnit::Second);
        assert_eq!(render(s, 0_i64, Rendering::Default).unwrap(), "1970-01-01 00:00:00");
        assert_eq!(render(s, -1_i64, Rendering::Rfc3339).unwrap(), "1969-12-31T23:59:59Z");

        let err = render(s, i64::MAX, Rendering::Default).unwrap_err();
        assert!(matches!(err, ValueError::Overflow(_)), "{err}");
    }

    #[test]
    fn test_time32() {
        let s = LogicalType::Time32(TimeUnit::Second);
        assert_eq!(render(s, 100_i32, Rendering::Default).unwrap(), "00:01:40");
        assert_eq!(render(s, 86_399_i32, Rendering::Default).unwrap(), "23:59:59");
        assert_eq!(
            render(s, 100_i32, Rendering::Precision(TimeUnit::Millisecond)).unwrap(),
            "00:01:40.000"
        );

        let ms = LogicalType::Time32(TimeUnit::Millisecond);
        assert_eq!(render(ms, 100_i32, Rendering::Default).unwrap(), "00:00:00.100");
        assert_eq!(render(ms, 1_999_i32, Rendering::Precision(TimeUnit::Second)).unwrap(), "00:00:01");
        assert_eq!(
            render(ms, 100_i32, Rendering::Precision(TimeUnit::Millisecond)).unwrap(),
            "00:00:00.100"
        );
        assert_eq!(render(ms, 100_i32, Rendering::Raw).unwrap(), "100");
        assert_eq!(render(ms, -7_i32, Rendering::Raw).unwrap(), "-7");
    }

    #[test]
    fn test_time64() {
        let us = LogicalType::Time64(TimeUnit::Microsecond);
        assert_eq!(render(us, 100_i64, Rendering::Default).unwrap(), "00:00:00.000100");

        let ns = LogicalType::Time64(TimeUnit::Nanosecond);
        assert_eq!(render(ns, 100_i64, Rendering::Default).unwrap(), "00:00:00.000000100");
        assert_eq!(
            render(ns, 3_723_123_456_789_i64, Rendering::Precision(TimeUnit::Microsecond)).unwrap(),
            "01:02:03.123456"
        );
    }

    #[test]
    fn test_time_of_day_rejects_out_of_range() {
        let s = LogicalType::Time32(TimeUnit::Second);
        let err = render(s, 86_400_i32, Rendering::Default).unwrap_err();
        assert!(matches!(err, ValueError::Overflow(_)), "{err}");

        let err = render(s, -1_i32, Rendering::Default).unwrap_err();
        assert!(matches!(err, ValueError::Overflow(_)), "{err}");

        let ns = LogicalType::Time64(TimeUnit::Nanosecond);
        let err = render(ns, 86_400_000_000_000_i64, Rendering::Default).unwrap_err();
        assert!(matches!(err, ValueError::Overflow(_)), "{err}");

        // the raw integer is still available
        assert_eq!(render(s, 86_400_i32, Rendering::Raw).unwrap(), "86400");
    }

    #[test]
    fn test_duration() {
        let ns = LogicalType::Duration(TimeUnit::Nanosecond);
        assert_eq!(render(ns, 100_i64, Rendering::Default).unwrap(), "100ns");
        assert_eq!(render(ns, 100_i64, Rendering::Raw).unwrap(), "100");
        assert_eq!(
            render(LogicalType::Duration(TimeUnit::Microsecond), -5_i64, Rendering::Default).unwrap(),
            "-5us"
        );
        assert_eq!(
            render(LogicalType::Duration(TimeUnit::Second), 5_i64, Rendering::Default).unwrap(),
            "5s"
        );
    }

    #[test]
    fn test_decimal() {
        let d = LogicalType::Decimal128(37, 2);
        assert_eq!(
            render(d, 18446744073709551615_i128, Rendering::Default).unwrap(),
            "184467440737095516.15"
        );
        let d = LogicalType::Decimal256(76, 4);
        assert_eq!(
            render(d, i256::from_parts(u64::MAX as u128, 0), Rendering::Default).unwrap(),
            "1844674407370955.1615"
        );
        assert_eq!(render(d, -15_i128, Rendering::Default).unwrap(), "-0.0015");
    }

    #[test]
    fn test_float16() {
        let v = f16::from_f32(1.234);
        assert_eq!(render(LogicalType::Float16, v, Rendering::Default).unwrap(), "1.234375");
        assert_eq!(render(LogicalType::Float16, f16::from_f32(1.5), Rendering::Default).unwrap(), "1.5");
        assert_eq!(render(LogicalType::Float16, f16::MAX, Rendering::Default).unwrap(), "65504");
        assert_eq!(render(LogicalType::Float16, f16::NEG_INFINITY, Rendering::Default).unwrap(), "-inf");
    }

    #[test]
    fn test_unsupported_rendering() {
        let cases = [
            (LogicalType::Binary, ScalarValue::from(vec![1_u8]), Rendering::Raw),
            (LogicalType::Date32, ScalarValue::Int32(1), Rendering::Rfc3339),
            (LogicalType::Duration(TimeUnit::Second), ScalarValue::Int64(1), Rendering::Precision(TimeUnit::Second)),
            (LogicalType::Float16, ScalarValue::Float16(f16::ONE), Rendering::Raw),
            (LogicalType::Decimal128(10, 2), ScalarValue::Int128(1), Rendering::Hex),
        ];
        for (data_type, value, rendering) in cases {
            let err = format_with(&data_type, &value, rendering, &FormatOptions::default()).unwrap_err();
            assert!(matches!(err, ValueError::UnsupportedRendering(_)), "{err}");
        }

        let err = render(LogicalType::Date32, 1_i32, Rendering::Rfc3339).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported rendering: Rfc3339 is not supported for Date32");
    }

    #[test]
    fn test_unsupported_type() {
        let err = render(LogicalType::Time32(TimeUnit::Nanosecond), 1_i32, Rendering::Default).unwrap_err();
        assert!(matches!(err, ValueError::UnsupportedType(_)), "{err}");

        let err = render(LogicalType::Float16, 1_i64, Rendering::Default).unwrap_err();
        assert!(matches!(err, ValueError::UnsupportedType(_)), "{err}");
    }

    #[test]
    fn test_null_options() {
        let data_type = LogicalType::Date32;
        assert_eq!(format(&data_type, &ScalarValue::Null).unwrap(), "(null)");

        let options = FormatOptions::default().with_null("NULL");
        let s = format_with(&data_type, &ScalarValue::Null, Rendering::Raw, &options).unwrap();
        assert_eq!(s, "NULL");
    }

    #[test]
    fn test_display_error() {
        let scalar = Scalar::time32(TimeUnit::Second, 90_000).unwrap();

        let options = FormatOptions::default().with_display_error(true);
        let formatter = ScalarFormatter::try_new(&scalar, Rendering::Default, &options).unwrap();
        assert_eq!(
            formatter.to_string(),
            "ERROR: Overflow: Failed to convert 90000 to time of day for Second: value must be within one day"
        );

        let options = FormatOptions::default();
        let formatter = ScalarFormatter::try_new(&scalar, Rendering::Default, &options).unwrap();
        let mut s = String::new();
        assert!(write!(s, "{formatter}").is_err());
        assert!(formatter.try_to_string().is_err());
    }

    #[test]
    fn test_lexical_to_string() {
        assert_eq!(lexical_to_string(0_i64), "0");
        assert_eq!(lexical_to_string(i64::MIN), "-9223372036854775808");
    }
}
