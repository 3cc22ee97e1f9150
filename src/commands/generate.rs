// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! One-shot sensitivity generation command

use std::io::Write;

use crate::cli::{GenerateArgs, OutputFormat};
use crate::config::Settings;
use crate::display;
use crate::error::Result;
use crate::export;
use crate::sensitivity::{Calculator, DeviceName};

/// Execute the generate command
pub fn execute<W: Write>(
    args: &GenerateArgs,
    settings: &Settings,
    format: &OutputFormat,
    out: &mut W,
) -> Result<()> {
    let calculator = Calculator::new(settings.device.clone());
    let device = DeviceName::new(&args.device);
    let class = calculator.classify(&device);
    let saved = calculator.calculate(args.style, device);

    let exported = match &args.export {
        Some(dir) => {
            let dir = settings.export.resolve_dir(dir.clone());
            Some(export::write_to_dir(&saved, &dir, settings.export.pretty)?)
        }
        None => None,
    };

    // JSON output
    if super::is_json(format) {
        writeln!(out, "{}", export::to_json(&saved, settings.export.pretty)?)?;
        return Ok(());
    }

    writeln!(out, "{}", display::format_device_info(&saved.device, &class))?;
    writeln!(out, "Gameplay Style: {}", saved.play_style)?;
    write!(
        out,
        "{}",
        display::format_profile_report(
            &saved,
            super::chart_config(settings, args.no_chart),
            settings.export.pretty
        )?
    )?;

    match exported {
        Some(path) => writeln!(out, "\nSaved to {} ({})", path.display(), export::MEDIA_TYPE)?,
        None => writeln!(out, "\nRun with --export to save as {}", export::file_name(&saved))?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensitivity::PlayStyle;

    fn args(style: PlayStyle, device: &str) -> GenerateArgs {
        GenerateArgs {
            style,
            device: device.to_string(),
            export: None,
            no_chart: true,
        }
    }

    #[test]
    fn test_text_output() {
        let mut out = Vec::new();
        execute(
            &args(PlayStyle::Rusher, "Poco X3"),
            &Settings::default(),
            &OutputFormat::Text,
            &mut out,
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Detected Device: Poco X3"));
        assert!(text.contains("Gameplay Style: Rusher"));
        assert!(text.contains("General:      194"));
        assert!(text.contains("Poco X3_FF_sensitivity.json"));
    }

    #[test]
    fn test_json_output_is_only_the_document() {
        let mut out = Vec::new();
        execute(
            &args(PlayStyle::Sniper, ""),
            &Settings::default(),
            &OutputFormat::Json,
            &mut out,
        )
        .unwrap();

        let saved = export::from_json(&String::from_utf8(out).unwrap()).unwrap();
        assert_eq!(saved.device.as_str(), "Unknown Device");
        assert_eq!(saved.profile.values(), [114, 104, 99, 95, 152]);
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut generate = args(PlayStyle::MidRange, "Redmi Note 12");
        generate.export = Some(Some(dir.path().to_path_buf()));

        let mut out = Vec::new();
        execute(&generate, &Settings::default(), &OutputFormat::Text, &mut out).unwrap();

        let path = dir.path().join("Redmi Note 12_FF_sensitivity.json");
        let saved = export::read_file(&path).unwrap();
        assert_eq!(saved.profile.values(), [154, 144, 139, 133, 144]);
        assert!(String::from_utf8(out).unwrap().contains("Saved to"));
    }

    #[test]
    fn test_export_uses_configured_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = Settings::default();
        settings.export.directory = Some(dir.path().join("nested"));

        let mut generate = args(PlayStyle::Rusher, "");
        generate.export = Some(None);

        let mut out = Vec::new();
        execute(&generate, &settings, &OutputFormat::Text, &mut out).unwrap();

        assert!(dir
            .path()
            .join("nested")
            .join("Unknown Device_FF_sensitivity.json")
            .exists());
    }
}
