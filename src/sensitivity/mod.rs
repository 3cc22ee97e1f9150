// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Sensitivity generation
//!
//! Maps a play style and a free-text device name to a five-field
//! sensitivity profile. Everything here is pure and deterministic.

pub mod calculator;
pub mod device;
pub mod profile;
pub mod style;

pub use calculator::*;
pub use device::*;
pub use profile::*;
pub use style::*;
