// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Anchors, boundaries and the wildcard.

use crate::pattern::Pattern;

/// Start of the haystack, `\A`.
pub const STR_START: Pattern = Pattern::raw_static(r"\A");
/// End of the haystack, `\z`.
pub const STR_END: Pattern = Pattern::raw_static(r"\z");
/// `^`
pub const LINE_START: Pattern = Pattern::raw_static("^");
/// `$`
pub const LINE_END: Pattern = Pattern::raw_static("$");
/// `\b`
pub const WORD_BOUNDARY: Pattern = Pattern::raw_static(r"\b");
/// `\B`
pub const NON_WORD_BOUNDARY: Pattern = Pattern::raw_static(r"\B");
/// Any character except newline (unless `DOT_ALL`), `.`.
pub const ANY_CHAR: Pattern = Pattern::raw_static(".");
