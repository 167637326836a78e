// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.

use std::fmt::Write;

use super::{MatchFormatter, MatchReport};

/// One line per match: `(start, end) text`, then a count.
pub struct TextFormatter;

impl MatchFormatter for TextFormatter {
    fn format(&self, report: &MatchReport) -> anyhow::Result<String> {
        let mut out = String::new();
        writeln!(out, "{}: {}", report.name, report.pattern)?;
        for span in &report.spans {
            writeln!(out, "({}, {}) {}", span.start, span.end, span.text)?;
        }
        let noun = if report.spans.len() == 1 { "match" } else { "matches" };
        writeln!(out, "{} {}", report.spans.len(), noun)?;
        Ok(out)
    }
}
