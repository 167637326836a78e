// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Escaping rules for literal text and bracket expressions.

use std::borrow::Cow;

/// Characters with special meaning outside a bracket expression.
/// Space and `#` are included so patterns stay literal under the verbose flag.
const LITERAL_SPECIAL: &[char] = &[
    '(', ')', '[', ']', '{', '}', '?', '*', '+', '-', '|', '^', '$', '\\', '.', '&', '~', '#', ' ',
];

/// Characters that must be escaped inside a bracket expression, after `\`.
const BRACKET_SPECIAL: &[char] = &['^', '-', ']', '[', '&', '~'];

fn needs_escape(ch: char) -> bool {
    LITERAL_SPECIAL.contains(&ch) || matches!(ch, '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// Escape `text` so it matches itself literally.
///
/// Returns the input unchanged when nothing needs escaping.
pub fn escape_literal(text: &str) -> Cow<'_, str> {
    if !text.chars().any(needs_escape) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() * 2);
    for ch in text.chars() {
        match ch {
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\x0B' => out.push_str("\\x0B"),
            '\x0C' => out.push_str("\\x0C"),
            c if LITERAL_SPECIAL.contains(&c) => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Escape `text` for use inside `[...]`.
///
/// Backslashes are doubled first so the escapes added for the other special
/// characters are not escaped again.
pub fn escape_bracket(text: &str) -> String {
    let mut out = text.replace('\\', "\\\\");
    for ch in BRACKET_SPECIAL {
        out = out.replace(*ch, &format!("\\{ch}"));
    }
    out
}

#[cfg(test)]
#[path = "escape_tests.rs"]
mod tests;
