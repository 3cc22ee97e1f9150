// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Sensitivity calculation
//!
//! A profile is the play style's base table scaled by the device factor,
//! truncated toward zero and clamped to [`MAX_SENSITIVITY`](super::MAX_SENSITIVITY).

use serde::{Deserialize, Serialize};

use super::device::{DeviceClass, DeviceName, DeviceRules};
use super::profile::SensitivityProfile;
use super::style::PlayStyle;

/// A generated profile together with the inputs that produced it.
///
/// Serializes as the export document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SavedProfile {
    #[serde(rename = "Device")]
    pub device: DeviceName,
    #[serde(rename = "Gameplay")]
    pub play_style: PlayStyle,
    #[serde(rename = "Sensitivity")]
    pub profile: SensitivityProfile,
}

/// Computes sensitivity profiles from a device rule table
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    rules: DeviceRules,
}

impl Calculator {
    pub fn new(rules: DeviceRules) -> Self {
        Self { rules }
    }

    /// Classify the device without computing a profile
    pub fn classify(&self, device: &DeviceName) -> DeviceClass {
        self.rules.classify(device)
    }

    /// Compute the profile for a play style and device.
    ///
    /// Pure: the caller decides whether to keep the result.
    pub fn calculate(&self, play_style: PlayStyle, device: DeviceName) -> SavedProfile {
        let class = self.rules.classify(&device);
        let profile = scale(play_style.base_values(), class.factor);

        tracing::debug!(
            device = %device,
            play_style = %play_style,
            tier = %class.tier,
            factor = class.factor,
            values = ?profile.values(),
            "calculated sensitivity profile"
        );

        SavedProfile {
            device,
            play_style,
            profile,
        }
    }
}

/// Scale each base value, truncating toward zero.
///
/// Float-to-int `as` saturates, so negative or NaN products become 0.
fn scale(base: [u8; 5], factor: f64) -> SensitivityProfile {
    SensitivityProfile::clamped(base.map(|x| (f64::from(x) * factor) as u32))
}
