// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match report output.
//!
//! Formats the spans found by a demo search in text or JSON.

mod json;
mod text;

use crate::cli::OutputFormat;
use crate::pattern::Span;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Result of running one pattern over one haystack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReport {
    /// Demo name or other label.
    pub name: String,
    /// Pattern text as handed to the engine.
    pub pattern: String,
    pub spans: Vec<Span>,
}

/// Renders a [`MatchReport`].
pub trait MatchFormatter {
    fn format(&self, report: &MatchReport) -> anyhow::Result<String>;
}

/// Formatter for an output format.
pub fn formatter(format: OutputFormat) -> Box<dyn MatchFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
