// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use crate::chart::MAX_BAR_WIDTH;
use crate::error::{FfsensError, Result};

use super::Settings;

/// Smallest chart that still fits border, bars and labels
const MIN_CHART_HEIGHT: u16 = 5;

const MAX_CHART_HEIGHT: u16 = 60;

impl Settings {
    /// Check values serde cannot constrain on its own.
    pub fn validate(&self) -> Result<()> {
        let device = &self.device;

        check_factor("device.fallback_factor", device.fallback_factor)?;

        for (i, rule) in device.rules.iter().enumerate() {
            check_factor(&format!("device.rules[{}].factor", i), rule.factor)?;

            if rule.keywords.is_empty() {
                return Err(FfsensError::Config(format!(
                    "device.rules[{}] has no keywords",
                    i
                )));
            }
            if rule.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(FfsensError::Config(format!(
                    "device.rules[{}] contains a blank keyword",
                    i
                )));
            }
        }

        if self.chart.bar_width == 0 || self.chart.bar_width > MAX_BAR_WIDTH {
            return Err(FfsensError::Config(format!(
                "chart.bar_width must be between 1 and {}",
                MAX_BAR_WIDTH
            )));
        }
        if !(MIN_CHART_HEIGHT..=MAX_CHART_HEIGHT).contains(&self.chart.height) {
            return Err(FfsensError::Config(format!(
                "chart.height must be between {} and {}",
                MIN_CHART_HEIGHT, MAX_CHART_HEIGHT
            )));
        }

        Ok(())
    }
}

fn check_factor(name: &str, factor: f64) -> Result<()> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(FfsensError::Config(format!(
            "{} must be a positive number, got {}",
            name, factor
        )));
    }
    Ok(())
}
