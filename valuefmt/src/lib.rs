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

//! Canonical string rendering of typed scalar values.
//!
//! A value is a raw payload ([`ScalarValue`]) paired with the [`LogicalType`]
//! that gives it meaning. [`format`] renders the pair to its default string,
//! [`format_with`] selects one of the alternate [`Rendering`]s.
//!
//! ```
//! # use valuefmt::{format, format_with, FormatOptions, LogicalType, Rendering, ScalarValue, TimeUnit};
//! let time = LogicalType::Time32(TimeUnit::Millisecond);
//! let value = ScalarValue::Int32(100);
//! assert_eq!(format(&time, &value).unwrap(), "00:00:00.100");
//!
//! let options = FormatOptions::default();
//! let second = Rendering::Precision(TimeUnit::Second);
//! assert_eq!(format_with(&time, &value, second, &options).unwrap(), "00:00:00");
//! ```

#![warn(missing_docs)]

pub mod decimal;
pub mod display;
mod scalar;
pub mod temporal_conversions;

pub use display::{format, format_with, FormatOptions, Rendering, ScalarFormatter};
pub use scalar::{Scalar, ScalarValue};

pub use valuefmt_buffer::{f16, i256};
pub use valuefmt_schema::{LogicalType, Result, TimeUnit, ValueError};
