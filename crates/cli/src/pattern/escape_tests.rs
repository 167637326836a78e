// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::borrow::Cow;

use proptest::prelude::*;
use yare::parameterized;

use super::*;
use crate::pattern::{Flags, Pattern};

// =============================================================================
// escape_literal
// =============================================================================

#[test]
fn plain_text_is_borrowed() {
    assert!(matches!(escape_literal("hello_world123"), Cow::Borrowed(_)));
}

#[parameterized(
    space = { "hello world", r"hello\ world" },
    dot = { "a.b", r"a\.b" },
    groups = { "(a|b)", r"\(a\|b\)" },
    classes = { "[^x]", r"\[\^x\]" },
    braces = { "{1,2}", r"\{1,2\}" },
    quantifiers = { "*+?", r"\*\+\?" },
    anchors = { "^$", r"\^\$" },
    backslash = { r"a\d", r"a\\d" },
    hash_and_tilde = { "#~&-", r"\#\~\&\-" },
    tab_newline = { "a\tb\nc\r", r"a\tb\nc\r" },
    vertical_tab_form_feed = { "\x0B\x0C", r"\x0B\x0C" },
    unicode_untouched = { "grüße", "grüße" },
    punctuation_untouched = { "!@%,:;<>=\"'/", "!@%,:;<>=\"'/" },
)]
fn escape_literal_cases(input: &str, expected: &str) {
    assert_eq!(escape_literal(input), expected);
}

// =============================================================================
// escape_bracket
// =============================================================================

#[parameterized(
    plain = { "_", "_" },
    specials = { "-^_", r"\-\^_" },
    close_bracket = { "]", r"\]" },
    open_bracket = { "[", r"\[" },
    set_operators = { "&~", r"\&\~" },
    backslash_once = { r"\", r"\\" },
    backslash_before_special = { r"\-", r"\\\-" },
    dot_untouched = { ".", "." },
)]
fn escape_bracket_cases(input: &str, expected: &str) {
    assert_eq!(escape_bracket(input), expected);
}

// =============================================================================
// Literal patterns match exactly their input
// =============================================================================

fn literal_text() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[ -~\t\n\räß€]{0,16}").expect("valid regex")
}

fn is_full_match(pattern: &Pattern, haystack: &str) -> bool {
    is_full_match_with(pattern, haystack, Flags::empty())
}

fn is_full_match_with(pattern: &Pattern, haystack: &str, flags: Flags) -> bool {
    let anchored = Pattern::raw(r"\A").then(pattern).then(Pattern::raw(r"\z"));
    anchored.compile(flags).unwrap().is_match(haystack).unwrap()
}

proptest! {
    #[test]
    fn literal_matches_itself(text in literal_text()) {
        prop_assert!(is_full_match(&Pattern::literal(&text), &text));
    }

    #[test]
    fn literal_matches_nothing_else(text in literal_text(), other in literal_text()) {
        prop_assume!(text != other);
        prop_assert!(!is_full_match(&Pattern::literal(&text), &other));
    }

    #[test]
    fn literal_survives_verbose_flag(text in literal_text()) {
        prop_assert!(is_full_match_with(&Pattern::literal(&text), &text, Flags::VERBOSE));
    }
}

#[parameterized(
    space = { "a b", "ab" },
    hash = { "x # note", "x" },
    tab_newline = { "a\tb\nc", "abc" },
)]
fn verbose_flag_keeps_whitespace_and_hash(text: &str, stripped: &str) {
    let p = Pattern::literal(text);
    assert!(is_full_match_with(&p, text, Flags::VERBOSE));
    assert!(!is_full_match_with(&p, stripped, Flags::VERBOSE));
}

#[test]
fn literal_does_not_widen_with_metacharacters() {
    // Unescaped, `a.c` would also match `abc`.
    let p = Pattern::literal("a.c");
    assert!(is_full_match(&p, "a.c"));
    assert!(!is_full_match(&p, "abc"));

    let p = Pattern::literal("x+");
    assert!(!is_full_match(&p, "xx"));
}
