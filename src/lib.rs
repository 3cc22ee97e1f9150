// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! ffsens - Free Fire sensitivity generator.
//!
//! This crate exposes the shared runtime used by the `ffsens` CLI
//! (`src/main.rs`) and its interactive session.
//!
//! Architecture highlights:
//! - `sensitivity`: play styles, device classification and the pure calculator
//! - `session`: caller-owned state holding the last generated profile
//! - `export`: the JSON export document and its file naming
//! - `chart`, `display`: text rendering of profiles and scores
//! - `benchmark`, `training`: the device score estimate and training placeholder
//! - `config`, `cli`, `commands`: settings, argument parsing and subcommands

pub mod benchmark;
pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod sensitivity;
pub mod session;
pub mod training;

pub use error::{FfsensError, Result};
