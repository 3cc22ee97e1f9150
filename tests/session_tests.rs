// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::io::Cursor;

use ffsens::commands::session::{run_loop, Colors};
use ffsens::config::Settings;
use ffsens::sensitivity::{Calculator, DeviceName, PlayStyle};
use ffsens::session::Session;

#[test]
fn test_saved_equals_just_generated() {
    let mut session = Session::default();
    session.set_device("Poco X3");
    session.select_style(PlayStyle::Rusher);

    let generated = session.generate().unwrap().clone();
    let expected = Calculator::default().calculate(PlayStyle::Rusher, DeviceName::new("Poco X3"));

    assert_eq!(generated, expected);
    assert_eq!(session.saved(), Some(&expected));
}

#[test]
fn test_sessions_are_independent() {
    let mut first = Session::default();
    let second = Session::default();

    first.select_style(PlayStyle::Sniper);
    first.generate().unwrap();

    assert!(first.saved().is_some());
    assert!(second.saved().is_none());
}

#[test]
fn test_loop_ends_at_eof() {
    let mut settings = Settings::default();
    settings.chart.enabled = false;

    let mut out = Vec::new();
    let session = run_loop(
        Session::default(),
        &settings,
        Cursor::new(b"style Mid-range\ndevice realme 10\ngenerate".to_vec()),
        &mut out,
        Colors::Off,
    )
    .unwrap();

    let saved = session.saved().unwrap();
    assert_eq!(saved.device.as_str(), "realme 10");
    assert_eq!(saved.profile.values(), [154, 144, 139, 133, 144]);
}
