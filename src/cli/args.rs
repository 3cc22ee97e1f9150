// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for ffsens.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::benchmark;
use crate::sensitivity::PlayStyle;

/// ffsens - Free Fire sensitivity generator
#[derive(Parser, Debug)]
#[command(name = "ffsens")]
#[command(version, about = "Free Fire sensitivity generator for your terminal")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a sensitivity profile
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Start an interactive session (default when no command given)
    Session,

    /// Show the estimated device score
    #[command(alias = "bench")]
    Benchmark(BenchmarkArgs),

    /// Aim training mode (coming soon)
    Training,

    /// Validate and display an exported profile
    Show(ShowArgs),

    /// Inspect configuration
    #[command(alias = "config")]
    Settings(SettingsArgs),
}

/// Arguments for the generate subcommand
#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// Play style (Rusher, Mid-range, Sniper)
    #[arg(short, long)]
    pub style: PlayStyle,

    /// Device or platform, e.g. "Poco X3" (optional)
    #[arg(short, long, default_value = "")]
    pub device: String,

    /// Write the JSON export, optionally into DIR
    #[arg(short, long, value_name = "DIR", num_args = 0..=1)]
    pub export: Option<Option<PathBuf>>,

    /// Skip the bar chart preview
    #[arg(long)]
    pub no_chart: bool,
}

/// Arguments for the benchmark subcommand
#[derive(clap::Args, Debug, Default)]
pub struct BenchmarkArgs {
    /// CPU strength (0-100)
    #[arg(long, value_parser = parse_metric)]
    pub cpu: Option<f64>,

    /// FPS stability (0-100)
    #[arg(long, value_parser = parse_metric)]
    pub fps: Option<f64>,

    /// Gyro smoothness (0-100)
    #[arg(long, value_parser = parse_metric)]
    pub gyro: Option<f64>,
}

fn parse_metric(raw: &str) -> Result<f64, String> {
    let value: f64 = raw.parse().map_err(|e: std::num::ParseFloatError| e.to_string())?;
    benchmark::check_metric("value", value).map_err(|e| e.to_string())
}

/// Arguments for the show subcommand
#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Exported JSON file
    pub file: PathBuf,

    /// Skip the bar chart preview
    #[arg(long)]
    pub no_chart: bool,
}

/// Arguments for settings/config
#[derive(clap::Args, Debug)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: SettingsCommands,
}

/// Settings subcommands
#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Show the effective configuration
    Show,

    /// Print the settings file path
    Path,
}

/// Output format for responses
#[derive(ValueEnum, Clone, Debug, Default, PartialEq)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Text,

    /// JSON output
    Json,
}
