// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bracket expressions and predefined character classes.

use crate::pattern::escape::escape_bracket;
use crate::pattern::{Fragment, Pattern};

/// `\d`
pub const DIGIT: Pattern = Pattern::raw_static(r"\d");
/// `\D`
pub const NON_DIGIT: Pattern = Pattern::raw_static(r"\D");
/// `\s`
pub const SPACE: Pattern = Pattern::raw_static(r"\s");
/// `\S`
pub const NON_SPACE: Pattern = Pattern::raw_static(r"\S");
/// `\w`
pub const WORD_CHAR: Pattern = Pattern::raw_static(r"\w");
/// `\W`
pub const NON_WORD_CHAR: Pattern = Pattern::raw_static(r"\W");

/// Builder for a bracket expression such as `[0-9a-z_]` or `[^a-z]`.
///
/// Ranges come out in digit, lower, upper order, followed by the escaped
/// extra characters. `alphanum` covers all three ranges and overrides the
/// individual flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharSet {
    extra: String,
    digit: bool,
    lower: bool,
    upper: bool,
    alphanum: bool,
    reverse: bool,
}

impl CharSet {
    /// A set containing the literal characters in `extra`.
    pub fn new(extra: impl Into<String>) -> Self {
        Self { extra: extra.into(), ..Self::default() }
    }

    /// Add `0-9`.
    pub fn digit(mut self) -> Self {
        self.digit = true;
        self
    }

    /// Add `a-z`.
    pub fn lower(mut self) -> Self {
        self.lower = true;
        self
    }

    /// Add `A-Z`.
    pub fn upper(mut self) -> Self {
        self.upper = true;
        self
    }

    /// Add `0-9a-zA-Z`.
    pub fn alphanum(mut self) -> Self {
        self.alphanum = true;
        self
    }

    /// Negate the set.
    pub fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    pub fn build(&self) -> Pattern {
        let mut expr = String::from("[");
        if self.reverse {
            expr.push('^');
        }
        if self.alphanum {
            expr.push_str("0-9a-zA-Z");
        } else {
            if self.digit {
                expr.push_str("0-9");
            }
            if self.lower {
                expr.push_str("a-z");
            }
            if self.upper {
                expr.push_str("A-Z");
            }
        }
        expr.push_str(&escape_bracket(&self.extra));
        expr.push(']');
        Pattern::raw(expr)
    }
}

impl From<CharSet> for Pattern {
    fn from(set: CharSet) -> Self {
        set.build()
    }
}

impl From<CharSet> for Fragment {
    fn from(set: CharSet) -> Self {
        Fragment::Raw(set.build())
    }
}

#[cfg(test)]
#[path = "charset_tests.rs"]
mod tests;
