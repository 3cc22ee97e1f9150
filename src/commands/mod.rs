// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Subcommand implementations
//!
//! Each command writes to a caller-supplied writer so it can be driven
//! from `main` with stdout or from tests with a buffer.

pub mod benchmark;
pub mod generate;
pub mod session;
pub mod settings;
pub mod show;
pub mod training;

use crate::cli::OutputFormat;
use crate::config::{ChartConfig, Settings};

/// Chart settings to use, or `None` when the chart is switched off
pub(crate) fn chart_config<'a>(settings: &'a Settings, no_chart: bool) -> Option<&'a ChartConfig> {
    (settings.chart.enabled && !no_chart).then_some(&settings.chart)
}

pub(crate) fn is_json(format: &OutputFormat) -> bool {
    matches!(format, OutputFormat::Json)
}
