// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Display formatting for terminal output
//!
//! Functions return formatted strings rather than writing directly to
//! stdout so both the one-shot commands and the interactive session can
//! share them, and tests can inspect them.

use crate::benchmark::{DeviceScore, FEATURES, SCORE_FACTORS};
use crate::chart;
use crate::config::ChartConfig;
use crate::error::Result;
use crate::export;
use crate::sensitivity::{DeviceClass, DeviceName, SavedProfile};

/// Shown when the session has nothing saved yet
pub const NO_SAVED_PROFILE: &str = "No saved sensitivity yet!";

/// One-line description of the device and the factor it maps to
pub fn format_device_info(device: &DeviceName, class: &DeviceClass) -> String {
    let label = if device.is_known() {
        format!("Detected Device: {}", device)
    } else {
        format!("Device: {}", device)
    };

    match &class.matched {
        Some(keyword) => format!(
            "{} [{}, x{} via '{}']",
            label,
            class.tier.description(),
            class.factor,
            keyword
        ),
        None => format!("{} [{}, x{}]", label, class.tier.description(), class.factor),
    }
}

/// Aligned `label: value` table of the profile
pub fn format_profile_table(saved: &SavedProfile) -> String {
    let mut out = String::new();
    for (field, value) in saved.profile.iter() {
        out.push_str(&format!("  {:<13}{:>4}\n", format!("{}:", field), value));
    }
    out
}

/// Full report for a generated or loaded profile: chart, table and JSON
pub fn format_profile_report(
    saved: &SavedProfile,
    chart_config: Option<&ChartConfig>,
    pretty: bool,
) -> Result<String> {
    let mut out = format!(
        "\n=== {} Sensitivity for {} ===\n\n",
        saved.play_style, saved.device
    );

    if let Some(config) = chart_config {
        out.push_str(&chart::render_text(saved, config));
        out.push('\n');
    }

    out.push_str(&format_profile_table(saved));
    out.push('\n');
    out.push_str(&export::to_json(saved, pretty)?);
    out.push('\n');
    Ok(out)
}

/// Benchmark view text
pub fn format_device_score(score: &DeviceScore) -> String {
    let mut out = String::from("\n=== Device Performance Benchmark ===\n\n");
    out.push_str("The device score is estimated from:\n");
    for factor in SCORE_FACTORS {
        out.push_str(&format!("  • {}\n", factor));
    }
    let inputs = [
        score.cpu_strength,
        score.fps_stability,
        score.gyro_smoothness,
    ];
    out.push('\n');
    for (feature, value) in FEATURES.iter().zip(inputs) {
        out.push_str(&format!("  {:<17}{:>6}\n", format!("{}:", feature), value));
    }
    out.push_str(&format!("AI Estimated Device Score: {} / 100\n", score.score));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensitivity::{Calculator, DeviceRules, PlayStyle};

    #[test]
    fn test_device_info_known_device() {
        let device = DeviceName::new("Poco X3");
        let class = DeviceRules::default().classify(&device);
        let info = format_device_info(&device, &class);
        assert!(info.starts_with("Detected Device: Poco X3"));
        assert!(info.contains("x1.08"));
        assert!(info.contains("'poco'"));
    }

    #[test]
    fn test_device_info_unknown_device() {
        let device = DeviceName::unknown();
        let class = DeviceRules::default().classify(&device);
        let info = format_device_info(&device, &class);
        assert!(info.starts_with("Device: Unknown Device"));
        assert!(info.contains("x0.95"));
        assert!(!info.contains("via"));
    }

    #[test]
    fn test_profile_table_lists_fields_in_order() {
        let saved = Calculator::default().calculate(PlayStyle::Sniper, DeviceName::unknown());
        let table = format_profile_table(&saved);
        let lines: Vec<_> = table.lines().map(str::trim).collect();
        assert_eq!(
            lines,
            vec![
                "General:      114",
                "Red Dot:      104",
                "2X Scope:      99",
                "4X Scope:      95",
                "Sniper Scope: 152",
            ]
        );
    }

    #[test]
    fn test_profile_report_without_chart() {
        let saved = Calculator::default().calculate(PlayStyle::Rusher, DeviceName::new("Poco X3"));
        let report = format_profile_report(&saved, None, false).unwrap();
        assert!(report.contains("=== Rusher Sensitivity for Poco X3 ==="));
        assert!(report.contains(r#""Device":"Poco X3""#));
        assert!(!report.contains('┌'));
    }

    #[test]
    fn test_profile_report_with_chart() {
        let saved = Calculator::default().calculate(PlayStyle::Rusher, DeviceName::new("Poco X3"));
        let report = format_profile_report(&saved, Some(&ChartConfig::default()), true).unwrap();
        assert!(report.contains('┌'));
        assert!(report.contains("\"Device\": \"Poco X3\""));
    }

    #[test]
    fn test_device_score_text() {
        let score = crate::benchmark::default_estimate().unwrap();
        let text = format_device_score(&score);
        assert!(text.contains("AI Estimated Device Score: 71 / 100"));
        assert!(text.contains("Touch Latency"));
        assert!(text.contains("CPU Strength:        65"));
        assert!(text.contains("Gyro Smoothness:     78"));
    }
}
