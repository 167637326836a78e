// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `wordy demo` command implementation.
//!
//! Builds a demo pattern, compiles it with the configured options and prints
//! every match in the sample text or an input file.

use std::path::Path;

use anyhow::Context;

use wordy::cli::DemoArgs;
use wordy::config;
use wordy::demos::Demo;
use wordy::error::ExitCode;
use wordy::find_spans;
use wordy::report::{self, MatchFormatter, MatchReport};
use wordy::verbose::VerboseLogger;

/// Run the `wordy demo` command.
pub fn run(config_path: Option<&Path>, args: &DemoArgs) -> anyhow::Result<ExitCode> {
    if args.list {
        for demo in Demo::ALL {
            println!("{:<22}{}", demo.name(), demo.description());
        }
        return Ok(ExitCode::Success);
    }
    let Some(demo) = args.name else {
        anyhow::bail!("no demo given (use --list to see them)");
    };

    let config = config::load(config_path, &std::env::current_dir()?)?;
    let options = config.compile.options();
    let verbose = VerboseLogger::new(args.verbose);

    let pattern = demo.pattern()?;
    verbose.section("Pattern");
    verbose.log(pattern.as_str());
    verbose.section("Compile");
    verbose.log(&format!("flags: {:?}", options.flags));
    if let Some(limit) = options.backtrack_limit {
        verbose.log(&format!("backtrack_limit: {limit}"));
    }

    let regex = pattern.compile_with(&options)?;

    let haystack = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => demo.sample().to_string(),
    };

    let spans = find_spans(&regex, &haystack)?;
    let report = MatchReport {
        name: demo.name().to_string(),
        pattern: regex.as_str().to_string(),
        spans,
    };
    print!("{}", report::formatter(args.output).format(&report)?);

    Ok(if report.spans.is_empty() { ExitCode::NoMatch } else { ExitCode::Success })
}
