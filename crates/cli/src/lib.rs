// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wordy: build regular expressions from named operations.
//!
//! A [`Pattern`] is an immutable wrapper around regex source text. Every
//! composition method returns a new `Pattern`; plain strings passed to those
//! methods are escaped, other patterns are embedded verbatim. Matching is
//! delegated to [`fancy_regex`] through [`Pattern::compile`].
//!
//! ```ignore
//! use wordy::{CharSet, Flags};
//!
//! let domain = CharSet::new("_-").alphanum().build().one_or_more();
//! let email = CharSet::new("-_.").alphanum().build().one_or_more().then("@").then(domain);
//! let regex = email.compile(Flags::MULTI_LINE)?;
//! ```

pub mod charset;
pub mod cli;
pub mod config;
pub mod demos;
pub mod error;
pub mod pattern;
pub mod report;
pub mod special;
pub mod verbose;

pub use charset::CharSet;
pub use error::{ArgumentError, CompileError, Error};
pub use pattern::{CompileOptions, Flags, Fragment, Pattern, Repeat, Span, find_spans};

#[cfg(test)]
pub mod test_utils;
