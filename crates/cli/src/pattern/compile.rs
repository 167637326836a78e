// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Hand-off to the host engine.
//!
//! This is the only place generated text meets [`fancy_regex`]. Syntax
//! problems (unbalanced groups, unknown backreference names) surface here as
//! [`CompileError`], never earlier.

use fancy_regex::{Regex, RegexBuilder};
use serde::Serialize;

use super::Pattern;
use crate::error::{CompileError, Error};

bitflags::bitflags! {
    /// Engine flags, emitted as an inline flag group in front of the pattern.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Flags: u8 {
        /// `i`
        const IGNORE_CASE = 1;
        /// `m`: `^`/`$` match at line boundaries.
        const MULTI_LINE = 1 << 1;
        /// `s`: `.` matches newline.
        const DOT_ALL = 1 << 2;
        /// `x`: whitespace and `#` comments are ignored.
        const VERBOSE = 1 << 3;
    }
}

impl Flags {
    /// Inline flag group such as `(?im)`, or empty when no flag is set.
    pub fn inline_prefix(self) -> String {
        if self.is_empty() {
            return String::new();
        }
        let mut letters = String::with_capacity(4);
        for (flag, letter) in [
            (Flags::IGNORE_CASE, 'i'),
            (Flags::MULTI_LINE, 'm'),
            (Flags::DOT_ALL, 's'),
            (Flags::VERBOSE, 'x'),
        ] {
            if self.contains(flag) {
                letters.push(letter);
            }
        }
        format!("(?{letters})")
    }
}

/// Flags plus engine resource limits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileOptions {
    pub flags: Flags,
    /// Max backtracking steps per search; engine default when `None`.
    pub backtrack_limit: Option<usize>,
    /// Size limit for the delegated automaton; engine default when `None`.
    pub delegate_size_limit: Option<usize>,
}

impl Pattern {
    /// Compile with `flags` and default limits.
    pub fn compile(&self, flags: Flags) -> Result<Regex, CompileError> {
        self.compile_with(&CompileOptions { flags, ..Default::default() })
    }

    pub fn compile_with(&self, options: &CompileOptions) -> Result<Regex, CompileError> {
        let source = format!("{}{}", options.flags.inline_prefix(), self.as_str());
        tracing::debug!(
            pattern = %source,
            backtrack_limit = ?options.backtrack_limit,
            delegate_size_limit = ?options.delegate_size_limit,
            "compiling pattern"
        );

        let mut builder = RegexBuilder::new(&source);
        if let Some(limit) = options.backtrack_limit {
            builder.backtrack_limit(limit);
        }
        if let Some(limit) = options.delegate_size_limit {
            builder.delegate_size_limit(limit);
        }

        builder
            .build()
            .map_err(|e| CompileError { pattern: source, source: Box::new(e) })
    }
}

/// One match: byte offsets into the haystack and the matched text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// All non-overlapping matches of `regex` in `haystack`, in order.
pub fn find_spans(regex: &Regex, haystack: &str) -> Result<Vec<Span>, Error> {
    let mut spans = Vec::new();
    for found in regex.find_iter(haystack) {
        let m = found?;
        spans.push(Span { start: m.start(), end: m.end(), text: m.as_str().to_string() });
    }
    tracing::trace!(count = spans.len(), "search finished");
    Ok(spans)
}

#[cfg(test)]
#[path = "compile_tests.rs"]
mod tests;
