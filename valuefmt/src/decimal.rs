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

//! Exact decimal rendering of scaled integers

use valuefmt_buffer::i256;

/// Formats a 128-bit decimal with the provided scale
pub fn format_decimal128(value: i128, scale: i8) -> String {
    format_decimal_str(&value.to_string(), scale)
}

/// Formats a 256-bit decimal with the provided scale
pub fn format_decimal256(value: i256, scale: i8) -> String {
    format_decimal_str(&value.to_string(), scale)
}

/// Inserts a decimal point `scale` digits from the right of the integer
/// string `value_str`, padding with zeros as required
///
/// A negative scale multiplies by `10^-scale`, appending zeros.
pub fn format_decimal_str(value_str: &str, scale: i8) -> String {
    let (sign, rest) = match value_str.strip_prefix('-') {
        Some(stripped) => ("-", stripped),
        None => ("", value_str),
    };

    if scale == 0 || (rest == "0" && scale < 0) {
        value_str.to_string()
    } else if scale < 0 {
        let padding = value_str.len() + scale.unsigned_abs() as usize;
        format!("{:0<width$}", value_str, width = padding)
    } else {
        let scale = scale as usize;
        // at least one digit before the point
        let digits = format!("{:0>width$}", rest, width = scale + 1);
        let (whole, fraction) = digits.split_at(digits.len() - scale);
        format!("{sign}{whole}.{fraction}")
    }
}
