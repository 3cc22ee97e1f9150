// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Aim training mode placeholder

/// Features planned for the training mode
pub const PLANNED_FEATURES: [&str; 4] = [
    "Moving crosshair tracking",
    "Drag accuracy test",
    "Recoil pattern trainer",
    "AI feedback on your drag speed",
];

pub const STATUS: &str = "Training Mode is under development.";

/// Text shown for the training mode
pub fn render_text() -> String {
    let mut out = String::from("=== AI Training Mode ===\n\nComing soon features:\n");
    for feature in PLANNED_FEATURES {
        out.push_str("  • ");
        out.push_str(feature);
        out.push('\n');
    }
    out.push('\n');
    out.push_str(STATUS);
    out.push('\n');
    out
}
