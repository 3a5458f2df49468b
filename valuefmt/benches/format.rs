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

use criterion::*;
use valuefmt::{format, i256, LogicalType, ScalarValue, TimeUnit};

fn criterion_benchmark(c: &mut Criterion) {
    let cases = [
        ("date32", LogicalType::Date32, ScalarValue::Int32(19_000)),
        (
            "timestamp_ns",
            LogicalType::Timestamp(TimeUnit::Nanosecond),
            ScalarValue::Int64(1_700_000_000_123_456_789),
        ),
        (
            "time64_us",
            LogicalType::Time64(TimeUnit::Microsecond),
            ScalarValue::Int64(45_296_000_001),
        ),
        (
            "decimal128",
            LogicalType::Decimal128(38, 10),
            ScalarValue::Int128(-123_456_789_012_345_678_901_234),
        ),
        (
            "decimal256",
            LogicalType::Decimal256(76, 20),
            ScalarValue::Int256(i256::MAX),
        ),
        (
            "duration_ns",
            LogicalType::Duration(TimeUnit::Nanosecond),
            ScalarValue::Int64(1_000),
        ),
    ];

    for (name, data_type, value) in &cases {
        c.bench_function(name, |b| {
            b.iter(|| format(black_box(data_type), black_box(value)).unwrap());
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
