// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in demo patterns and their sample texts.
//!
//! Each demo is assembled purely from builder operations, never from raw
//! regex text, and comes with a sample to search.

use clap::ValueEnum;

use crate::charset::{self, CharSet};
use crate::error::ArgumentError;
use crate::pattern::{Pattern, Repeat};
use crate::special;

/// Signed integers and floats, space separated.
pub const NUMBERS: &str =
    "345 -345 +678 2.56 -1e3 +3.4563E8 -8.2 +3124 +3.1415 -0.4782377E-8";

/// A few lines of prose.
pub const PROSE: &str = "Hello World!
That is what we say, we programmers.
Whenever we learn something new,
and we do that quite often
0 1 2 3 4 5
Did you notice that zero?
We don't forget that zero,
that is the amount of life we have";

/// One address per line; `BOOM@abc.k-x.de` has a one-letter label and is
/// deliberately not matched.
pub const EMAILS: &str = "
hello8799@gmail.com
mail-me@hotmail.co.uk
Big_Bang@t-online.de
BOOM@abc.k-x.de
ding.dong@mmm-NN.CO.in
";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    /// Lines starting with a lowercase letter
    LineStartLower,
    /// A comma at the end of a line
    CommaLineEnd,
    /// First word of the text
    FirstWord,
    /// Last word of the text
    LastWord,
    /// Email addresses
    Email,
    /// Integers with optional sign
    SignedInt,
    /// Integers with optional sign, only as whole words
    SignedIntWordlike,
}

impl Demo {
    pub const ALL: [Demo; 7] = [
        Demo::LineStartLower,
        Demo::CommaLineEnd,
        Demo::FirstWord,
        Demo::LastWord,
        Demo::Email,
        Demo::SignedInt,
        Demo::SignedIntWordlike,
    ];

    /// Name as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Demo::LineStartLower => "line-start-lower",
            Demo::CommaLineEnd => "comma-line-end",
            Demo::FirstWord => "first-word",
            Demo::LastWord => "last-word",
            Demo::Email => "email",
            Demo::SignedInt => "signed-int",
            Demo::SignedIntWordlike => "signed-int-wordlike",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Demo::LineStartLower => "lines starting with a lowercase letter",
            Demo::CommaLineEnd => "a comma at the end of a line",
            Demo::FirstWord => "first word of the text",
            Demo::LastWord => "last word of the text",
            Demo::Email => "email addresses",
            Demo::SignedInt => "integers with optional sign",
            Demo::SignedIntWordlike => "integers with optional sign, only as whole words",
        }
    }

    /// Text searched when no input file is given.
    pub fn sample(self) -> &'static str {
        match self {
            Demo::LineStartLower | Demo::CommaLineEnd | Demo::FirstWord | Demo::LastWord => PROSE,
            Demo::Email => EMAILS,
            Demo::SignedInt | Demo::SignedIntWordlike => NUMBERS,
        }
    }

    pub fn pattern(self) -> Result<Pattern, ArgumentError> {
        let pattern = match self {
            Demo::LineStartLower => special::LINE_START
                .then(CharSet::new("").lower().build().then(charset::NON_SPACE.zero_or_more())),
            Demo::CommaLineEnd => Pattern::literal(",").line_end(),
            Demo::FirstWord => special::STR_START
                .then(charset::SPACE.zero_or_more())
                .then(charset::NON_SPACE.one_or_more())
                .then(special::WORD_BOUNDARY),
            Demo::LastWord => special::WORD_BOUNDARY
                .then(charset::NON_SPACE.one_or_more())
                .then(special::STR_END),
            Demo::Email => email()?,
            Demo::SignedInt => signed_int(),
            Demo::SignedIntWordlike => wordlike(&signed_int()),
        };
        Ok(pattern)
    }
}

fn email() -> Result<Pattern, ArgumentError> {
    // gmail, t-online, ...
    let domain_main = CharSet::new("_-").alphanum().build().one_or_more();
    // .com, .co.uk, .de, ...
    let domain_rest = Pattern::literal(".")
        .then(CharSet::new("").alphanum().build().repeat(Repeat::between(2, 4))?)
        .group()
        .one_or_more();
    let username = CharSet::new("-_.").alphanum().build().one_or_more();
    Ok(username.then("@").then(domain_main).then(domain_rest))
}

fn signed_int() -> Pattern {
    let sign = CharSet::new("+-").build().optional();
    sign.then(charset::DIGIT.one_or_more())
}

/// Restrict `pattern` to whole space-separated words.
///
/// The match must start at a line start or after a space, and end at a line
/// end or before a space. The surrounding spaces are not consumed.
pub fn wordlike(pattern: &Pattern) -> Pattern {
    let start =
        Pattern::any_of([special::LINE_START, Pattern::empty().preceded_by(charset::SPACE)], true);
    let end =
        Pattern::any_of([special::LINE_END, Pattern::empty().succeeded_by(charset::SPACE)], true);
    start.then(pattern).then(end)
}

#[cfg(test)]
#[path = "demos_tests.rs"]
mod tests;
