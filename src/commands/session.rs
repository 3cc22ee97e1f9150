// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Interactive session loop
//!
//! Reads one command per line, keeps the last generated profile in a
//! [`Session`] for the lifetime of the loop and never persists it unless
//! the user exports.

use std::io::{self, BufRead, IsTerminal, Write};

use crossterm::{
    style::{Color, ResetColor, SetForegroundColor},
    ExecutableCommand,
};

use crate::benchmark;
use crate::config::Settings;
use crate::display;
use crate::error::Result;
use crate::export;
use crate::sensitivity::{Calculator, PlayStyle};
use crate::session::{Session, SessionCommand};
use crate::training;

const HELP: &str = "\
Commands:
  device [name]     set the device (blank resets to Unknown Device)
  style <name>      choose Rusher, Mid-range or Sniper
  generate          generate and save a sensitivity profile
  saved             show the saved profile
  export [dir]      write the saved profile as JSON
  benchmark         show the estimated device score
  training          aim training mode
  help              show this help
  quit              leave the session
";

/// Whether control lines are colored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colors {
    On,
    Off,
}

/// Execute the session command against stdin/stdout
pub fn execute(settings: &Settings) -> Result<()> {
    let stdout = io::stdout();
    let colors = if stdout.is_terminal() {
        Colors::On
    } else {
        Colors::Off
    };

    let session = Session::new(Calculator::new(settings.device.clone()));
    run_loop(session, settings, io::stdin().lock(), stdout.lock(), colors)?;
    Ok(())
}

/// Drive a session from `input` until `quit` or end of input.
/// Returns the session so callers can inspect the final state.
pub fn run_loop<R: BufRead, W: Write>(
    mut session: Session,
    settings: &Settings,
    mut input: R,
    mut out: W,
    colors: Colors,
) -> Result<Session> {
    print_welcome(&mut out, colors)?;

    loop {
        print_prompt(&mut out, colors)?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        let command = match SessionCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                print_error(&mut out, colors, &e.to_string())?;
                continue;
            }
        };

        tracing::debug!(?command, "session command");
        if command == SessionCommand::Quit {
            break;
        }

        if let Err(e) = handle_command(&mut session, settings, command, &mut out) {
            print_error(&mut out, colors, &e.to_string())?;
        }
    }

    out.flush()?;
    Ok(session)
}

fn handle_command<W: Write>(
    session: &mut Session,
    settings: &Settings,
    command: SessionCommand,
    out: &mut W,
) -> Result<()> {
    match command {
        SessionCommand::Device(raw) => {
            let device = session.set_device(&raw).clone();
            let class = session.calculator().classify(&device);
            writeln!(out, "{}", display::format_device_info(&device, &class))?;
        }
        SessionCommand::Style(style) => {
            session.select_style(style);
            writeln!(out, "Gameplay Style: {}", style)?;
        }
        SessionCommand::Generate => {
            let saved = session.generate()?.clone();
            let chart = super::chart_config(settings, false);
            write!(
                out,
                "{}",
                display::format_profile_report(&saved, chart, settings.export.pretty)?
            )?;
        }
        SessionCommand::Saved => match session.saved() {
            Some(saved) => writeln!(out, "{}", export::to_json(saved, true)?)?,
            None => writeln!(out, "{}", display::NO_SAVED_PROFILE)?,
        },
        SessionCommand::Export(dir) => match session.saved() {
            Some(saved) => {
                let dir = settings.export.resolve_dir(dir);
                let path = export::write_to_dir(saved, &dir, settings.export.pretty)?;
                writeln!(out, "Saved to {} ({})", path.display(), export::MEDIA_TYPE)?;
            }
            None => writeln!(out, "{}", display::NO_SAVED_PROFILE)?,
        },
        SessionCommand::Benchmark => {
            let score = benchmark::default_estimate()?;
            write!(out, "{}", display::format_device_score(&score))?;
        }
        SessionCommand::Training => write!(out, "{}", training::render_text())?,
        SessionCommand::Help => write!(out, "{}", HELP)?,
        SessionCommand::Quit => {}
    }
    Ok(())
}

fn print_welcome<W: Write>(out: &mut W, colors: Colors) -> Result<()> {
    if colors == Colors::On {
        out.execute(SetForegroundColor(Color::Red))?;
    }
    writeln!(out, "FF Sensitivity Generator")?;
    if colors == Colors::On {
        out.execute(ResetColor)?;
    }

    let styles: Vec<_> = PlayStyle::ALL.iter().map(|s| s.name()).collect();
    writeln!(
        out,
        "Play styles: {}. Type 'help' for commands.\n",
        styles.join(", ")
    )?;
    Ok(())
}

fn print_prompt<W: Write>(out: &mut W, colors: Colors) -> Result<()> {
    if colors == Colors::On {
        out.execute(SetForegroundColor(Color::Green))?;
    }
    write!(out, "ffsens> ")?;
    if colors == Colors::On {
        out.execute(ResetColor)?;
    }
    out.flush()?;
    Ok(())
}

fn print_error<W: Write>(out: &mut W, colors: Colors, message: &str) -> Result<()> {
    if colors == Colors::On {
        out.execute(SetForegroundColor(Color::Red))?;
    }
    writeln!(out, "error: {}", message)?;
    if colors == Colors::On {
        out.execute(ResetColor)?;
    }
    Ok(())
}
