// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::demos::Demo;

/// Build regular expressions from named operations
#[derive(Parser)]
#[command(name = "wordy")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "WORDY_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run a built-in pattern against its sample text or a file
    Demo(DemoArgs),
    /// Print the escaped pattern for a literal string
    Escape(EscapeArgs),
    /// Print a bracket expression
    Charset(CharsetArgs),
}

#[derive(clap::Args)]
pub struct DemoArgs {
    /// Demo to run
    #[arg(value_name = "NAME", required_unless_present = "list")]
    pub name: Option<Demo>,

    /// List available demos
    #[arg(long)]
    pub list: bool,

    /// Search this file instead of the demo's sample text
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Print the generated pattern and compile options to stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[derive(clap::Args)]
pub struct EscapeArgs {
    /// Text to match literally
    pub text: String,
}

#[derive(clap::Args)]
pub struct CharsetArgs {
    /// Extra literal characters
    #[arg(default_value = "")]
    pub extra: String,

    /// Include 0-9
    #[arg(long)]
    pub digit: bool,

    /// Include a-z
    #[arg(long)]
    pub lower: bool,

    /// Include A-Z
    #[arg(long)]
    pub upper: bool,

    /// Include 0-9a-zA-Z (overrides --digit/--lower/--upper)
    #[arg(long)]
    pub alphanum: bool,

    /// Negate the set
    #[arg(long)]
    pub reverse: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
