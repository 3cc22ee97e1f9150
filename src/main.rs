// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! ffsens - Free Fire sensitivity generator
//!
//! Entry point for the ffsens CLI application.

use std::io::{self, Write};

use clap::Parser;

use ffsens::cli::{Cli, Commands};
use ffsens::commands;
use ffsens::config::Settings;
use ffsens::error::Result;

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // `-v` enables crate diagnostics without knowing target names; `RUST_LOG` still applies.
    let directive = match cli.verbose {
        0 => None,
        1 => Some("ffsens=debug"),
        _ => Some("ffsens=trace"),
    };
    if let Some(directive) = directive {
        if let Ok(parsed) = directive.parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    // Load settings
    let settings = Settings::load_or_default(cli.config.as_deref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Dispatch to appropriate command
    match cli.command {
        None | Some(Commands::Session) => {
            drop(out);
            commands::session::execute(&settings)?;
            return Ok(());
        }
        Some(Commands::Generate(args)) => {
            commands::generate::execute(&args, &settings, &cli.format, &mut out)?;
        }
        Some(Commands::Benchmark(args)) => {
            commands::benchmark::execute(&args, &cli.format, &mut out)?;
        }
        Some(Commands::Training) => {
            commands::training::execute(&mut out)?;
        }
        Some(Commands::Show(args)) => {
            commands::show::execute(&args, &settings, &cli.format, &mut out)?;
        }
        Some(Commands::Settings(args)) => {
            commands::settings::execute(
                &args,
                &settings,
                cli.config.as_deref(),
                &cli.format,
                &mut out,
            )?;
        }
    }

    out.flush()?;
    Ok(())
}
