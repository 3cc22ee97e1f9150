// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for ffsens
//!
//! This module defines all error types used throughout the application.

use thiserror::Error;

/// Main error type for ffsens operations
#[derive(Error, Debug)]
pub enum FfsensError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Export file errors
    #[error("Export error: {0}")]
    Export(String),

    /// Device score model errors
    #[error("Benchmark error: {0}")]
    Benchmark(String),
}

/// Result type alias for ffsens operations
pub type Result<T> = std::result::Result<T, FfsensError>;

impl From<toml::de::Error> for FfsensError {
    fn from(err: toml::de::Error) -> Self {
        FfsensError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for FfsensError {
    fn from(err: toml::ser::Error) -> Self {
        FfsensError::Toml(err.to_string())
    }
}
