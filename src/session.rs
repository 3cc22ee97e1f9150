// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Interactive session state
//!
//! A `Session` is owned by whoever drives the interaction and holds the
//! current selections plus the last generated profile. Nothing here touches
//! the filesystem.

use std::path::PathBuf;

use crate::error::{FfsensError, Result};
use crate::sensitivity::{Calculator, DeviceName, PlayStyle, SavedProfile};

/// Per-run state: device, selected style, last saved profile
#[derive(Debug, Clone, Default)]
pub struct Session {
    calculator: Calculator,
    device: DeviceName,
    play_style: Option<PlayStyle>,
    saved: Option<SavedProfile>,
}

impl Session {
    pub fn new(calculator: Calculator) -> Self {
        Self {
            calculator,
            device: DeviceName::unknown(),
            play_style: None,
            saved: None,
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn device(&self) -> &DeviceName {
        &self.device
    }

    /// Replace the device name; blank input resets it to the default.
    pub fn set_device(&mut self, raw: &str) -> &DeviceName {
        self.device = DeviceName::new(raw);
        &self.device
    }

    pub fn play_style(&self) -> Option<PlayStyle> {
        self.play_style
    }

    pub fn select_style(&mut self, style: PlayStyle) {
        self.play_style = Some(style);
    }

    /// Generate a profile for the current selections and keep it as the saved one.
    pub fn generate(&mut self) -> Result<&SavedProfile> {
        let style = self
            .play_style
            .ok_or_else(|| FfsensError::InvalidInput("select a play style first".to_string()))?;

        let saved = self.calculator.calculate(style, self.device.clone());
        Ok(&*self.saved.insert(saved))
    }

    /// Last generated profile, if any
    pub fn saved(&self) -> Option<&SavedProfile> {
        self.saved.as_ref()
    }
}

/// A line typed at the interactive prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Set (or clear, when empty) the device name
    Device(String),
    /// Select a play style
    Style(PlayStyle),
    Generate,
    /// Show the saved profile
    Saved,
    /// Write the saved profile to a directory (current one if omitted)
    Export(Option<PathBuf>),
    Benchmark,
    Training,
    Help,
    Quit,
}

impl SessionCommand {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_lowercase().as_str() {
            "device" => SessionCommand::Device(rest.to_string()),
            "style" => {
                if rest.is_empty() {
                    return Err(FfsensError::InvalidInput(
                        "usage: style <Rusher|Mid-range|Sniper>".to_string(),
                    ));
                }
                SessionCommand::Style(rest.parse()?)
            }
            "generate" | "gen" => SessionCommand::Generate,
            "saved" => SessionCommand::Saved,
            "export" => {
                SessionCommand::Export((!rest.is_empty()).then(|| PathBuf::from(rest)))
            }
            "benchmark" => SessionCommand::Benchmark,
            "training" => SessionCommand::Training,
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" => SessionCommand::Quit,
            other => {
                return Err(FfsensError::InvalidInput(format!(
                    "unknown command '{}' (type 'help')",
                    other
                )))
            }
        };

        Ok(Some(command))
    }
}
