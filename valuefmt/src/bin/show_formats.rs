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

//! Prints the default and alternate renderings of one value of each
//! supported logical type.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use valuefmt::{f16, i256, Rendering, Scalar, TimeUnit};

/// Logging CLI config.
#[derive(Debug, Parser)]
pub struct LoggingArgs {
    /// Log verbosity.
    ///
    /// Defaults to "warn".
    ///
    /// Use `-v` for "info", `-vv` for "debug", `-vvv` for "trace".
    ///
    /// Note you can also set logging level using `RUST_LOG` environment variable:
    /// `RUST_LOG=debug`.
    #[clap(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
    )]
    log_verbose_count: u8,
}

#[derive(Debug, Parser)]
#[clap(version, about)]
struct Args {
    /// Logging args.
    #[clap(flatten)]
    logging_args: LoggingArgs,

    /// Value used for the binary, date, time and duration examples.
    #[clap(long, default_value_t = 100)]
    start: i64,

    /// Nanoseconds since the epoch used for the timestamp example.
    #[clap(long, default_value_t = 1_000_000)]
    timestamp_start: i64,
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.logging_args)?;
    debug!(start = args.start, timestamp_start = args.timestamp_start, "showing formats");

    let start32 = i32::try_from(args.start).context("start must fit in 32 bits")?;
    let u64_max = u64::MAX as i128;

    let examples = [
        ("float16", Scalar::float16(f16::from_f32(1.234)), vec![("default", Rendering::Default)]),
        (
            "binary",
            Scalar::binary(format!("binary-{}", args.start)),
            vec![("default", Rendering::Default)],
        ),
        ("date32", Scalar::date32(start32), vec![("default", Rendering::Default)]),
        ("date64", Scalar::date64(args.start), vec![("default", Rendering::Default)]),
        (
            "timestamp_ns",
            Scalar::timestamp(TimeUnit::Nanosecond, args.timestamp_start),
            vec![("default", Rendering::Default), ("RFC3339", Rendering::Rfc3339)],
        ),
        (
            "time32s",
            Scalar::time32(TimeUnit::Second, start32)?,
            vec![("default", Rendering::Default)],
        ),
        (
            "time32ms",
            Scalar::time32(TimeUnit::Millisecond, start32)?,
            vec![
                ("default", Rendering::Default),
                ("Second", Rendering::Precision(TimeUnit::Second)),
                ("Millisecond", Rendering::Precision(TimeUnit::Millisecond)),
                ("Value", Rendering::Raw),
            ],
        ),
        (
            "time64us",
            Scalar::time64(TimeUnit::Microsecond, args.start)?,
            vec![("default", Rendering::Default)],
        ),
        (
            "time64ns",
            Scalar::time64(TimeUnit::Nanosecond, args.start)?,
            vec![("default", Rendering::Default)],
        ),
        (
            "decimal128",
            Scalar::decimal128(37, 2, u64_max)?,
            vec![("default", Rendering::Default)],
        ),
        (
            "decimal256",
            Scalar::decimal256(76, 4, i256::from_i128(u64_max))?,
            vec![("default", Rendering::Default)],
        ),
        (
            "durationNs",
            Scalar::duration(TimeUnit::Nanosecond, args.start),
            vec![("default", Rendering::Default), ("Value", Rendering::Raw)],
        ),
    ];

    for (label, scalar, renderings) in &examples {
        for (name, rendering) in renderings {
            let s = scalar
                .render(*rendering)
                .with_context(|| format!("render {label}[{name}] of {}", scalar.data_type()))?;
            println!("{label}[{name}]: {s}");
        }
    }
    info!(count = examples.len(), "printed examples");

    Ok(())
}

fn setup_logging(args: LoggingArgs) -> Result<()> {
    use tracing_subscriber::{util::SubscriberInitExt, EnvFilter, FmtSubscriber};

    let filter = match args.log_verbose_count {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter))
        .context("set up log env filter")?;

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    subscriber.try_init().context("init logging subscriber")?;

    Ok(())
}
