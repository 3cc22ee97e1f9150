// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings inspection command

use std::io::Write;
use std::path::Path;

use crate::cli::{OutputFormat, SettingsArgs, SettingsCommands};
use crate::config::Settings;
use crate::error::Result;

/// Execute the settings command
pub fn execute<W: Write>(
    args: &SettingsArgs,
    settings: &Settings,
    config_path: Option<&Path>,
    format: &OutputFormat,
    out: &mut W,
) -> Result<()> {
    match args.command {
        SettingsCommands::Show => {
            if super::is_json(format) {
                writeln!(out, "{}", serde_json::to_string_pretty(settings)?)?;
            } else {
                write!(out, "{}", settings.to_toml()?)?;
            }
        }
        SettingsCommands::Path => {
            let path = config_path
                .map(Path::to_path_buf)
                .unwrap_or_else(Settings::default_path);
            writeln!(out, "{}", path.display())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_toml() {
        let args = SettingsArgs {
            command: SettingsCommands::Show,
        };
        let mut out = Vec::new();
        execute(&args, &Settings::default(), None, &OutputFormat::Text, &mut out).unwrap();

        let parsed: Settings = toml::from_str(&String::from_utf8(out).unwrap()).unwrap();
        assert_eq!(parsed, Settings::default());
    }

    #[test]
    fn test_show_json() {
        let args = SettingsArgs {
            command: SettingsCommands::Show,
        };
        let mut out = Vec::new();
        execute(&args, &Settings::default(), None, &OutputFormat::Json, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["chart"]["bar_width"], 12);
        assert_eq!(value["device"]["rules"][0]["tier"], "flagship");
    }

    #[test]
    fn test_path_prefers_explicit_config() {
        let args = SettingsArgs {
            command: SettingsCommands::Path,
        };
        let mut out = Vec::new();
        execute(
            &args,
            &Settings::default(),
            Some(Path::new("/etc/ffsens.toml")),
            &OutputFormat::Text,
            &mut out,
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "/etc/ffsens.toml\n");
    }
}
