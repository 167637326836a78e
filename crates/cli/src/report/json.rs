// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use serde_json::json;

use super::{MatchFormatter, MatchReport};

/// JSON format report formatter.
pub struct JsonFormatter;

impl MatchFormatter for JsonFormatter {
    fn format(&self, report: &MatchReport) -> anyhow::Result<String> {
        let value = json!({
            "name": report.name,
            "pattern": report.pattern,
            "matches": report.spans,
        });
        let mut out = serde_json::to_string_pretty(&value)?;
        out.push('\n');
        Ok(out)
    }
}
