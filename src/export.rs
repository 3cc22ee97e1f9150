// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! JSON export of saved sensitivity profiles
//!
//! The exported document is exactly the serde form of [`SavedProfile`]:
//! `Device`, `Gameplay` and `Sensitivity` keys, nothing else.

use std::path::{Path, PathBuf};

use crate::error::{FfsensError, Result};
use crate::sensitivity::SavedProfile;

/// Media type of exported files
pub const MEDIA_TYPE: &str = "application/json";

/// Suffix appended to the device name to form the file name
pub const FILE_SUFFIX: &str = "_FF_sensitivity.json";

/// `{Device}_FF_sensitivity.json`, with the device name reduced to a single
/// path component.
pub fn file_name(saved: &SavedProfile) -> String {
    let device: String = saved
        .device
        .as_str()
        .chars()
        .map(|c| {
            if matches!(c, '/' | '\\' | ':') || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();

    // "." and ".." would otherwise form relative path components on their own
    let device = if device.chars().all(|c| c == '.') {
        device.replace('.', "_")
    } else {
        device
    };

    format!("{}{}", device, FILE_SUFFIX)
}

/// Serialize the export document.
pub fn to_json(saved: &SavedProfile, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(saved)?
    } else {
        serde_json::to_string(saved)?
    };
    Ok(json)
}

/// Parse and validate an export document.
pub fn from_json(content: &str) -> Result<SavedProfile> {
    Ok(serde_json::from_str(content)?)
}

/// Write the export document into `dir`, creating it if needed.
/// Returns the path of the written file.
pub fn write_to_dir(saved: &SavedProfile, dir: &Path, pretty: bool) -> Result<PathBuf> {
    if dir.exists() && !dir.is_dir() {
        return Err(FfsensError::Export(format!(
            "{} is not a directory",
            dir.display()
        )));
    }
    std::fs::create_dir_all(dir)?;

    let path = dir.join(file_name(saved));
    std::fs::write(&path, to_json(saved, pretty)?)?;

    tracing::info!(path = %path.display(), device = %saved.device, "exported sensitivity profile");
    Ok(path)
}

/// Read an export document from disk.
pub fn read_file(path: &Path) -> Result<SavedProfile> {
    let content = std::fs::read_to_string(path)?;
    let saved = from_json(&content)?;
    tracing::debug!(path = %path.display(), "loaded sensitivity export");
    Ok(saved)
}
