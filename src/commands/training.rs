// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Training mode command

use std::io::Write;

use crate::error::Result;
use crate::training;

/// Execute the training command
pub fn execute<W: Write>(out: &mut W) -> Result<()> {
    write!(out, "{}", training::render_text())?;
    Ok(())
}
