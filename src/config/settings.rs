// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for ffsens
//!
//! Handles loading settings from ~/.ffsens/settings.toml

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::sensitivity::DeviceRules;

mod io;
mod validation;

/// Main settings structure, stored in ~/.ffsens/settings.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Settings {
    /// Export file settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Chart preview settings
    #[serde(default)]
    pub chart: ChartConfig,

    /// Device classification table
    #[serde(default)]
    pub device: DeviceRules,
}

/// Export file settings
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ExportConfig {
    /// Directory exports are written to when none is given (current directory if unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,

    /// Pretty-print exported JSON
    #[serde(default)]
    pub pretty: bool,
}

impl ExportConfig {
    /// Directory to export into, preferring an explicit one
    pub fn resolve_dir(&self, explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| self.directory.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Chart preview settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartConfig {
    /// Show the chart after generating
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Columns per bar
    #[serde(default = "default_bar_width")]
    pub bar_width: u16,

    /// Total chart rows including the border
    #[serde(default = "default_chart_height")]
    pub height: u16,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            bar_width: default_bar_width(),
            height: default_chart_height(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_bar_width() -> u16 {
    12
}

fn default_chart_height() -> u16 {
    14
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensitivity::DeviceTier;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert!(settings.export.directory.is_none());
        assert!(!settings.export.pretty);
        assert!(settings.chart.enabled);
        assert_eq!(settings.chart.bar_width, 12);
        assert_eq!(settings.chart.height, 14);
        assert_eq!(settings.device.rules.len(), 2);
        assert_eq!(settings.device.fallback_factor, 0.95);
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_chart_section() {
        let settings: Settings = toml::from_str("[chart]\nheight = 20\n").unwrap();
        assert_eq!(settings.chart.height, 20);
        assert_eq!(settings.chart.bar_width, 12);
        assert!(settings.chart.enabled);
    }

    #[test]
    fn test_device_rules_from_toml() {
        let content = r#"
[device]
fallback_factor = 1.0

[[device.rules]]
tier = "flagship"
factor = 1.1
keywords = ["rog", "oneplus"]
"#;
        let settings: Settings = toml::from_str(content).unwrap();
        assert_eq!(settings.device.fallback_factor, 1.0);
        assert_eq!(settings.device.rules.len(), 1);
        assert_eq!(settings.device.rules[0].tier, DeviceTier::Flagship);
        assert_eq!(settings.device.rules[0].keywords, vec!["rog", "oneplus"]);
    }

    #[test]
    fn test_settings_toml_roundtrip() {
        let settings = Settings::default();
        let content = toml::to_string(&settings).unwrap();
        let parsed: Settings = toml::from_str(&content).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_resolve_dir_precedence() {
        let config = ExportConfig {
            directory: Some(PathBuf::from("/tmp/exports")),
            pretty: false,
        };
        assert_eq!(
            config.resolve_dir(Some(PathBuf::from("out"))),
            PathBuf::from("out")
        );
        assert_eq!(config.resolve_dir(None), PathBuf::from("/tmp/exports"));
        assert_eq!(
            ExportConfig::default().resolve_dir(None),
            PathBuf::from(".")
        );
    }
}
