// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Display a previously exported profile

use std::io::Write;

use crate::cli::{OutputFormat, ShowArgs};
use crate::config::Settings;
use crate::display;
use crate::error::Result;
use crate::export;

/// Execute the show command
pub fn execute<W: Write>(
    args: &ShowArgs,
    settings: &Settings,
    format: &OutputFormat,
    out: &mut W,
) -> Result<()> {
    let saved = export::read_file(&args.file)?;

    if super::is_json(format) {
        writeln!(out, "{}", export::to_json(&saved, settings.export.pretty)?)?;
        return Ok(());
    }

    write!(
        out,
        "{}",
        display::format_profile_report(
            &saved,
            super::chart_config(settings, args.no_chart),
            true
        )?
    )?;
    Ok(())
}
