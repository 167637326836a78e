// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use wordy::cli::{Cli, Command};
use wordy::config::ConfigError;
use wordy::error::ExitCode;

mod cmd_build;
mod cmd_demo;

fn main() -> std::process::ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("wordy: {e:#}");
            let code = if e.downcast_ref::<ConfigError>().is_some() {
                ExitCode::ConfigError
            } else {
                ExitCode::InternalError
            };
            code.into()
        }
    }
}

/// Log to stderr, filtered by `WORDY_LOG` (or `RUST_LOG`), warnings by default.
fn init_logging() {
    let filter = EnvFilter::try_from_env("WORDY_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    match &cli.command {
        Command::Demo(args) => cmd_demo::run(cli.config.as_deref(), args),
        Command::Escape(args) => Ok(cmd_build::escape(args)),
        Command::Charset(args) => Ok(cmd_build::charset(args)),
    }
}
