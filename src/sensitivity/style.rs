// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Play style classification and base sensitivity tables

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FfsensError;

/// Gameplay archetype selecting a base sensitivity table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayStyle {
    /// Close-range aggression, fast general and red dot aim
    Rusher,
    /// Balanced engagements at medium distance
    #[serde(rename = "Mid-range")]
    MidRange,
    /// Long-range play, slow scopes with a fast sniper scope
    Sniper,
}

impl PlayStyle {
    /// All play styles in menu order
    pub const ALL: [PlayStyle; 3] = [PlayStyle::Rusher, PlayStyle::MidRange, PlayStyle::Sniper];

    /// Canonical display name, also used in exported files
    pub fn name(&self) -> &'static str {
        match self {
            PlayStyle::Rusher => "Rusher",
            PlayStyle::MidRange => "Mid-range",
            PlayStyle::Sniper => "Sniper",
        }
    }

    /// Base values before device scaling, in field order
    /// (General, Red Dot, 2X Scope, 4X Scope, Sniper Scope)
    pub fn base_values(&self) -> [u8; 5] {
        match self {
            PlayStyle::Rusher => [180, 170, 160, 140, 120],
            PlayStyle::MidRange => [150, 140, 135, 130, 140],
            PlayStyle::Sniper => [120, 110, 105, 100, 160],
        }
    }
}

impl fmt::Display for PlayStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlayStyle {
    type Err = FfsensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rusher" => Ok(PlayStyle::Rusher),
            "mid-range" | "midrange" | "mid_range" | "mid" => Ok(PlayStyle::MidRange),
            "sniper" => Ok(PlayStyle::Sniper),
            other => Err(FfsensError::InvalidInput(format!(
                "unknown play style '{}' (expected Rusher, Mid-range or Sniper)",
                other
            ))),
        }
    }
}
