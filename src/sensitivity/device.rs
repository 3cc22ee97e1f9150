// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Device naming and keyword-based device tier classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name used when the user leaves the device blank
pub const UNKNOWN_DEVICE: &str = "Unknown Device";

/// Free-text device name, trimmed, never empty
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct DeviceName(String);

impl DeviceName {
    /// Trim the raw input, substituting `UNKNOWN_DEVICE` when nothing is left.
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Self(UNKNOWN_DEVICE.to_string())
        } else {
            Self(trimmed.to_string())
        }
    }

    pub fn unknown() -> Self {
        Self(UNKNOWN_DEVICE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the user supplied a name
    pub fn is_known(&self) -> bool {
        self.0 != UNKNOWN_DEVICE
    }
}

impl Default for DeviceName {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for DeviceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DeviceName {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for DeviceName {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<DeviceName> for String {
    fn from(name: DeviceName) -> Self {
        name.0
    }
}

/// Approximate hardware tier inferred from the device name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceTier {
    /// High-refresh flagship or gaming phones
    Flagship,
    /// Mainstream mid-range phones
    Midrange,
    /// Anything not matched by a rule
    Unlisted,
}

impl DeviceTier {
    pub fn description(&self) -> &'static str {
        match self {
            DeviceTier::Flagship => "Flagship / gaming device",
            DeviceTier::Midrange => "Mid-range device",
            DeviceTier::Unlisted => "Unlisted device",
        }
    }
}

impl fmt::Display for DeviceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceTier::Flagship => write!(f, "flagship"),
            DeviceTier::Midrange => write!(f, "midrange"),
            DeviceTier::Unlisted => write!(f, "unlisted"),
        }
    }
}

/// One row of the classification table: any keyword hit selects `factor`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceRule {
    pub tier: DeviceTier,
    pub factor: f64,
    pub keywords: Vec<String>,
}

impl DeviceRule {
    pub fn new(tier: DeviceTier, factor: f64, keywords: &[&str]) -> Self {
        Self {
            tier,
            factor,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// First keyword contained in the already lower-cased device name
    fn matching_keyword(&self, lowered_name: &str) -> Option<&str> {
        self.keywords
            .iter()
            .map(String::as_str)
            .find(|kw| lowered_name.contains(&kw.to_lowercase()))
    }
}

/// Result of classifying a device name
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceClass {
    pub tier: DeviceTier,
    pub factor: f64,
    /// Keyword that selected the rule, `None` for the fallback
    pub matched: Option<String>,
}

/// Ordered classification table; earlier rules take precedence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceRules {
    /// Factor applied when no rule matches
    #[serde(default = "default_fallback_factor")]
    pub fallback_factor: f64,

    #[serde(default = "default_rules")]
    pub rules: Vec<DeviceRule>,
}

fn default_rules() -> Vec<DeviceRule> {
    vec![
        DeviceRule::new(DeviceTier::Flagship, 1.08, &["poco", "iphone", "samsung"]),
        DeviceRule::new(DeviceTier::Midrange, 1.03, &["realme", "redmi", "vivo"]),
    ]
}

fn default_fallback_factor() -> f64 {
    0.95
}

impl Default for DeviceRules {
    fn default() -> Self {
        Self {
            fallback_factor: default_fallback_factor(),
            rules: default_rules(),
        }
    }
}

impl DeviceRules {
    /// Classify a device by case-insensitive substring match, first rule wins.
    pub fn classify(&self, device: &DeviceName) -> DeviceClass {
        let lowered = device.as_str().to_lowercase();

        for rule in &self.rules {
            if let Some(keyword) = rule.matching_keyword(&lowered) {
                tracing::trace!(device = %device, keyword, tier = %rule.tier, "device rule matched");
                return DeviceClass {
                    tier: rule.tier,
                    factor: rule.factor,
                    matched: Some(keyword.to_string()),
                };
            }
        }

        tracing::trace!(device = %device, "no device rule matched, using fallback");
        DeviceClass {
            tier: DeviceTier::Unlisted,
            factor: self.fallback_factor,
            matched: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_name_trims() {
        assert_eq!(DeviceName::new("  Poco X3 \n").as_str(), "Poco X3");
    }

    #[test]
    fn test_device_name_blank_defaults() {
        assert_eq!(DeviceName::new("").as_str(), UNKNOWN_DEVICE);
        assert_eq!(DeviceName::new(" \t ").as_str(), UNKNOWN_DEVICE);
        assert!(!DeviceName::new("   ").is_known());
        assert!(DeviceName::new("iPhone 13").is_known());
    }

    #[test]
    fn test_device_name_serde_normalizes() {
        let name: DeviceName = serde_json::from_str("\"  \"").unwrap();
        assert_eq!(name, DeviceName::unknown());
        assert_eq!(
            serde_json::to_string(&DeviceName::new(" Poco X3 ")).unwrap(),
            "\"Poco X3\""
        );
    }

    #[test]
    fn test_device_name_default() {
        assert_eq!(DeviceName::default(), DeviceName::unknown());
    }

    #[test]
    fn test_classify_flagship() {
        let rules = DeviceRules::default();
        let class = rules.classify(&DeviceName::new("Poco X3"));
        assert_eq!(class.tier, DeviceTier::Flagship);
        assert_eq!(class.factor, 1.08);
        assert_eq!(class.matched.as_deref(), Some("poco"));
    }

    #[test]
    fn test_classify_midrange() {
        let rules = DeviceRules::default();
        let class = rules.classify(&DeviceName::new("Redmi Note 12"));
        assert_eq!(class.tier, DeviceTier::Midrange);
        assert_eq!(class.factor, 1.03);
        assert_eq!(class.matched.as_deref(), Some("redmi"));
    }

    #[test]
    fn test_classify_fallback() {
        let rules = DeviceRules::default();
        let class = rules.classify(&DeviceName::unknown());
        assert_eq!(class.tier, DeviceTier::Unlisted);
        assert_eq!(class.factor, 0.95);
        assert!(class.matched.is_none());
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        let rules = DeviceRules::default();
        assert_eq!(
            rules.classify(&DeviceName::new("SAMSUNG Galaxy S23")).tier,
            DeviceTier::Flagship
        );
        assert_eq!(
            rules.classify(&DeviceName::new("ViVo Y21")).tier,
            DeviceTier::Midrange
        );
    }

    #[test]
    fn test_classify_matches_substrings() {
        let rules = DeviceRules::default();
        // "vivo" inside a longer word still counts
        assert_eq!(
            rules.classify(&DeviceName::new("vivobook")).tier,
            DeviceTier::Midrange
        );
    }

    #[test]
    fn test_first_rule_wins() {
        let rules = DeviceRules::default();
        let class = rules.classify(&DeviceName::new("iPhone Redmi Case"));
        assert_eq!(class.tier, DeviceTier::Flagship);
        assert_eq!(class.factor, 1.08);
    }

    #[test]
    fn test_uppercase_keywords_still_match() {
        let rules = DeviceRules {
            rules: vec![DeviceRule::new(DeviceTier::Flagship, 1.2, &["ROG"])],
            fallback_factor: 1.0,
        };
        assert_eq!(rules.classify(&DeviceName::new("Asus rog phone")).factor, 1.2);
    }

    #[test]
    fn test_tier_display() {
        assert_eq!(DeviceTier::Flagship.to_string(), "flagship");
        assert_eq!(DeviceTier::Midrange.to_string(), "midrange");
        assert_eq!(DeviceTier::Unlisted.to_string(), "unlisted");
    }
}
