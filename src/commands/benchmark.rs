// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Device score benchmark command

use std::io::Write;

use crate::benchmark::{self, DEFAULT_QUERY};
use crate::cli::{BenchmarkArgs, OutputFormat};
use crate::display;
use crate::error::Result;

/// Query point from the arguments; missing metrics fall back to the defaults
pub fn query(args: &BenchmarkArgs) -> [f64; 3] {
    let [cpu, fps, gyro] = DEFAULT_QUERY;
    [
        args.cpu.unwrap_or(cpu),
        args.fps.unwrap_or(fps),
        args.gyro.unwrap_or(gyro),
    ]
}

/// Execute the benchmark command
pub fn execute<W: Write>(args: &BenchmarkArgs, format: &OutputFormat, out: &mut W) -> Result<()> {
    let score = benchmark::estimate(query(args))?;

    if super::is_json(format) {
        writeln!(out, "{}", serde_json::to_string_pretty(&score)?)?;
        return Ok(());
    }

    write!(out, "{}", display::format_device_score(&score))?;
    Ok(())
}
