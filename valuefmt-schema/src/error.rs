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

//! Defines `ValueError` for representing failures to construct or format values

use std::error::Error;

/// Result type for operations that could result in a [`ValueError`]
pub type Result<T> = std::result::Result<T, ValueError>;

/// Errors produced while constructing or formatting typed values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The logical type, or the pairing of logical type and payload, cannot be formatted
    UnsupportedType(String),
    /// The requested rendering is not defined for the logical type
    UnsupportedRendering(String),
    /// A decimal scale exceeds its precision
    InvalidScale(String),
    /// A decimal precision is zero or larger than the type allows
    InvalidPrecision(String),
    /// A value lies outside the range representable by its string form
    Overflow(String),
}

impl std::fmt::Display for ValueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueError::UnsupportedType(message) => {
                write!(f, "Unsupported type: {message}")
            }
            ValueError::UnsupportedRendering(message) => {
                write!(f, "Unsupported rendering: {message}")
            }
            ValueError::InvalidScale(message) => {
                write!(f, "Invalid scale: {message}")
            }
            ValueError::InvalidPrecision(message) => {
                write!(f, "Invalid precision: {message}")
            }
            ValueError::Overflow(message) => write!(f, "Overflow: {message}"),
        }
    }
}

impl Error for ValueError {}
