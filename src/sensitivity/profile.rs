// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! The five-field sensitivity vector

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{FfsensError, Result};

/// Upper bound of every sensitivity slider in game
pub const MAX_SENSITIVITY: u8 = 200;

/// Named sensitivity slider, in the order the game lists them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensitivityField {
    General,
    RedDot,
    TwoXScope,
    FourXScope,
    SniperScope,
}

impl SensitivityField {
    /// All fields in fixed output order
    pub const ALL: [SensitivityField; 5] = [
        SensitivityField::General,
        SensitivityField::RedDot,
        SensitivityField::TwoXScope,
        SensitivityField::FourXScope,
        SensitivityField::SniperScope,
    ];

    /// Label used in charts and exported JSON keys
    pub fn label(&self) -> &'static str {
        match self {
            SensitivityField::General => "General",
            SensitivityField::RedDot => "Red Dot",
            SensitivityField::TwoXScope => "2X Scope",
            SensitivityField::FourXScope => "4X Scope",
            SensitivityField::SniperScope => "Sniper Scope",
        }
    }
}

impl fmt::Display for SensitivityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sensitivity values for every field, each within `0..=MAX_SENSITIVITY`.
///
/// Serializes as a JSON object keyed by field label in fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProfile")]
pub struct SensitivityProfile {
    #[serde(rename = "General")]
    general: u8,
    #[serde(rename = "Red Dot")]
    red_dot: u8,
    #[serde(rename = "2X Scope")]
    two_x: u8,
    #[serde(rename = "4X Scope")]
    four_x: u8,
    #[serde(rename = "Sniper Scope")]
    sniper_scope: u8,
}

impl SensitivityProfile {
    /// Build a profile from values in field order.
    pub fn from_values(values: [u8; 5]) -> Result<Self> {
        if let Some((field, value)) = SensitivityField::ALL
            .iter()
            .zip(values)
            .find(|(_, v)| *v > MAX_SENSITIVITY)
        {
            return Err(FfsensError::InvalidInput(format!(
                "{} sensitivity {} exceeds {}",
                field, value, MAX_SENSITIVITY
            )));
        }
        let [general, red_dot, two_x, four_x, sniper_scope] = values;
        Ok(Self {
            general,
            red_dot,
            two_x,
            four_x,
            sniper_scope,
        })
    }

    /// Build a profile clamping each value to `MAX_SENSITIVITY`.
    pub(crate) fn clamped(values: [u32; 5]) -> Self {
        let [general, red_dot, two_x, four_x, sniper_scope] =
            values.map(|v| v.min(u32::from(MAX_SENSITIVITY)) as u8);
        Self {
            general,
            red_dot,
            two_x,
            four_x,
            sniper_scope,
        }
    }

    pub fn get(&self, field: SensitivityField) -> u8 {
        match field {
            SensitivityField::General => self.general,
            SensitivityField::RedDot => self.red_dot,
            SensitivityField::TwoXScope => self.two_x,
            SensitivityField::FourXScope => self.four_x,
            SensitivityField::SniperScope => self.sniper_scope,
        }
    }

    /// Values in field order
    pub fn values(&self) -> [u8; 5] {
        [
            self.general,
            self.red_dot,
            self.two_x,
            self.four_x,
            self.sniper_scope,
        ]
    }

    /// Iterate `(field, value)` pairs in field order
    pub fn iter(&self) -> impl Iterator<Item = (SensitivityField, u8)> + '_ {
        SensitivityField::ALL.iter().map(move |f| (*f, self.get(*f)))
    }
}

/// Unvalidated wire form; wide integers so out-of-range input is reported, not truncated
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawProfile {
    #[serde(rename = "General")]
    general: i64,
    #[serde(rename = "Red Dot")]
    red_dot: i64,
    #[serde(rename = "2X Scope")]
    two_x: i64,
    #[serde(rename = "4X Scope")]
    four_x: i64,
    #[serde(rename = "Sniper Scope")]
    sniper_scope: i64,
}

impl TryFrom<RawProfile> for SensitivityProfile {
    type Error = String;

    fn try_from(raw: RawProfile) -> std::result::Result<Self, Self::Error> {
        let raw_values = [
            raw.general,
            raw.red_dot,
            raw.two_x,
            raw.four_x,
            raw.sniper_scope,
        ];
        let mut values = [0u8; 5];
        let fields = values.iter_mut().zip(raw_values).zip(SensitivityField::ALL);
        for ((slot, raw_value), field) in fields {
            *slot = u8::try_from(raw_value)
                .ok()
                .filter(|v| *v <= MAX_SENSITIVITY)
                .ok_or_else(|| {
                    format!(
                        "{} sensitivity {} is outside 0..={}",
                        field, raw_value, MAX_SENSITIVITY
                    )
                })?;
        }

        let [general, red_dot, two_x, four_x, sniper_scope] = values;
        Ok(SensitivityProfile {
            general,
            red_dot,
            two_x,
            four_x,
            sniper_scope,
        })
    }
}
