// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Immutable pattern values and their composition operations.
//!
//! A [`Pattern`] owns regex source text in host-engine syntax. Operations never
//! edit a pattern in place: each one returns a new value built from the current
//! text plus a fragment. Fragments come from a plain string (escaped) or from
//! another pattern (embedded verbatim), see [`Fragment`].

mod compile;
pub mod escape;

use std::borrow::Cow;
use std::fmt;

use crate::error::ArgumentError;

pub use compile::{CompileOptions, Flags, Span, find_spans};

/// Regex source text, never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Pattern {
    text: Cow<'static, str>,
}

/// Something that can be embedded into a pattern.
///
/// `Literal` text is escaped on coercion; `Raw` patterns are used as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Literal(String),
    Raw(Pattern),
}

impl Fragment {
    /// Regex text for this fragment.
    pub fn coerce(&self) -> Cow<'_, str> {
        match self {
            Fragment::Literal(text) => escape::escape_literal(text),
            Fragment::Raw(pattern) => Cow::Borrowed(pattern.as_str()),
        }
    }
}

impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        Fragment::Literal(text.to_string())
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Fragment::Literal(text)
    }
}

impl From<&String> for Fragment {
    fn from(text: &String) -> Self {
        Fragment::Literal(text.clone())
    }
}

impl From<char> for Fragment {
    fn from(ch: char) -> Self {
        Fragment::Literal(ch.to_string())
    }
}

impl From<Pattern> for Fragment {
    fn from(pattern: Pattern) -> Self {
        Fragment::Raw(pattern)
    }
}

impl From<&Pattern> for Fragment {
    fn from(pattern: &Pattern) -> Self {
        Fragment::Raw(pattern.clone())
    }
}

/// Bounds for [`Pattern::repeat`].
///
/// `exact` wins over `min`/`max`. An omitted bound is unbounded on that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repeat {
    pub exact: Option<u32>,
    pub min: Option<u32>,
    pub max: Option<u32>,
    pub greedy: bool,
}

impl Default for Repeat {
    fn default() -> Self {
        Self { exact: None, min: None, max: None, greedy: true }
    }
}

impl Repeat {
    pub fn exactly(count: u32) -> Self {
        Self { exact: Some(count), ..Self::default() }
    }

    pub fn between(min: u32, max: u32) -> Self {
        Self { min: Some(min), max: Some(max), ..Self::default() }
    }

    pub fn at_least(min: u32) -> Self {
        Self { min: Some(min), ..Self::default() }
    }

    pub fn at_most(max: u32) -> Self {
        Self { max: Some(max), ..Self::default() }
    }

    /// Match as few repetitions as possible. Has no effect on `exact`.
    pub fn lazy(self) -> Self {
        Self { greedy: false, ..self }
    }

    /// The quantifier suffix, e.g. `{3}`, `{2,4}?`, `{1,}`.
    fn suffix(&self) -> Result<String, ArgumentError> {
        if let (Some(min), Some(max)) = (self.min, self.max)
            && min >= max
        {
            return Err(ArgumentError::InvalidRepeatRange { min, max });
        }
        if let Some(exact) = self.exact {
            return Ok(format!("{{{exact}}}"));
        }
        let min = self.min.unwrap_or(0);
        let max = self.max.map(|m| m.to_string()).unwrap_or_default();
        let lazy = if self.greedy { "" } else { "?" };
        Ok(format!("{{{min},{max}}}{lazy}"))
    }
}

impl Pattern {
    /// Pattern matching `text` verbatim; every metacharacter is escaped.
    pub fn literal(text: &str) -> Self {
        Self::from_string(escape::escape_literal(text).into_owned())
    }

    /// Pattern from regex text that is NOT escaped.
    ///
    /// The caller is responsible for `text` being valid host syntax. Prefer
    /// [`Pattern::literal`] and the composition methods for user input.
    pub fn raw(text: impl Into<String>) -> Self {
        Self::from_string(text.into())
    }

    /// Unescaped pattern usable in `const` position.
    pub const fn raw_static(text: &'static str) -> Self {
        Self { text: Cow::Borrowed(text) }
    }

    /// The empty pattern (matches the empty string everywhere).
    pub const fn empty() -> Self {
        Self::raw_static("")
    }

    fn from_string(text: String) -> Self {
        Self { text: Cow::Owned(text) }
    }

    /// Regex source text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text.into_owned()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Concatenate `other` after this pattern.
    pub fn then(&self, other: impl Into<Fragment>) -> Pattern {
        let other: Fragment = other.into();
        Self::from_string(format!("{}{}", self.text, other.coerce()))
    }

    /// Anchor at line start (`^` prepended).
    pub fn line_start(&self) -> Pattern {
        Self::from_string(format!("^{}", self.text))
    }

    /// Anchor at line end (`$` appended).
    pub fn line_end(&self) -> Pattern {
        Self::from_string(format!("{}$", self.text))
    }

    /// Require `other` to follow, without consuming it.
    pub fn succeeded_by(&self, other: impl Into<Fragment>) -> Pattern {
        self.then(Self::look("?=", other))
    }

    /// Require `other` not to follow, without consuming it.
    pub fn succeeded_by_not(&self, other: impl Into<Fragment>) -> Pattern {
        self.then(Self::look("?!", other))
    }

    /// Require `other` to come right before this pattern.
    ///
    /// The lookbehind is prepended: `world` preceded by `hello ` becomes
    /// `(?<=hello\ )world`. On the empty pattern this is the bare assertion.
    pub fn preceded_by(&self, other: impl Into<Fragment>) -> Pattern {
        Self::look("?<=", other).then(self)
    }

    /// Require `other` not to come right before this pattern.
    pub fn preceded_by_not(&self, other: impl Into<Fragment>) -> Pattern {
        Self::look("?<!", other).then(self)
    }

    fn look(marker: &str, other: impl Into<Fragment>) -> Pattern {
        let other: Fragment = other.into();
        Self::from_string(format!("({marker}{})", other.coerce()))
    }

    /// Capturing group.
    pub fn group(&self) -> Pattern {
        Self::from_string(format!("({})", self.text))
    }

    /// Named capturing group, `(?P<name>...)`.
    pub fn named_group(&self, name: &str) -> Pattern {
        Self::from_string(format!("(?P<{name}>{})", self.text))
    }

    /// Non-capturing group, `(?:...)`.
    pub fn non_capturing(&self) -> Pattern {
        Self::from_string(format!("(?:{})", self.text))
    }

    /// General grouping.
    ///
    /// An empty name counts as no name. Naming a non-capturing group is an
    /// error rather than being ignored.
    pub fn group_with(&self, name: Option<&str>, capture: bool) -> Result<Pattern, ArgumentError> {
        let name = name.filter(|n| !n.is_empty());
        match (name, capture) {
            (Some(name), false) => {
                Err(ArgumentError::NamedNonCapturingGroup { name: name.to_string() })
            }
            (None, false) => Ok(self.non_capturing()),
            (Some(name), true) => Ok(self.named_group(name)),
            (None, true) => Ok(self.group()),
        }
    }

    /// Match the text captured by the group called `name`.
    ///
    /// Whether that group exists is checked by the engine at compile time.
    pub fn backref_by_name(name: &str) -> Pattern {
        Self::from_string(format!("(?P={name})"))
    }

    /// Match the text captured by group number `id`.
    pub fn backref_by_id(id: usize) -> Pattern {
        Self::from_string(format!("\\{id}"))
    }

    /// `if_set` when group `name` took part in the match, `if_unset` otherwise.
    ///
    /// Pass `""` for an empty `if_unset` branch.
    pub fn cond_group_match(
        name: &str,
        if_set: impl Into<Fragment>,
        if_unset: impl Into<Fragment>,
    ) -> Pattern {
        let (if_set, if_unset): (Fragment, Fragment) = (if_set.into(), if_unset.into());
        Self::from_string(format!("(?(<{name}>){}|{})", if_set.coerce(), if_unset.coerce()))
    }

    // Quantifiers apply to whatever precedes them. Multi-character fragments
    // must be grouped first; nothing here wraps them automatically.

    fn quantify(&self, quantifier: char, greedy: bool) -> Pattern {
        let lazy = if greedy { "" } else { "?" };
        Self::from_string(format!("{}{quantifier}{lazy}", self.text))
    }

    pub fn zero_or_more(&self) -> Pattern {
        self.quantify('*', true)
    }

    pub fn zero_or_more_lazy(&self) -> Pattern {
        self.quantify('*', false)
    }

    pub fn one_or_more(&self) -> Pattern {
        self.quantify('+', true)
    }

    pub fn one_or_more_lazy(&self) -> Pattern {
        self.quantify('+', false)
    }

    pub fn zero_or_one(&self) -> Pattern {
        self.quantify('?', true)
    }

    pub fn zero_or_one_lazy(&self) -> Pattern {
        self.quantify('?', false)
    }

    /// Alias for [`Pattern::zero_or_one`].
    pub fn optional(&self) -> Pattern {
        self.zero_or_one()
    }

    /// Alias for [`Pattern::zero_or_one_lazy`].
    pub fn optional_lazy(&self) -> Pattern {
        self.zero_or_one_lazy()
    }

    /// Bounded repetition, see [`Repeat`].
    ///
    /// Fails when both bounds are set and `min >= max`.
    pub fn repeat(&self, repeat: Repeat) -> Result<Pattern, ArgumentError> {
        let suffix = repeat.suffix()?;
        Ok(Self::from_string(format!("{}{suffix}", self.text)))
    }

    /// Alternation of `parts`, wrapped in a capturing group when `group` is set.
    pub fn any_of<I>(parts: I, group: bool) -> Pattern
    where
        I: IntoIterator,
        I::Item: Into<Fragment>,
    {
        let joined = parts
            .into_iter()
            .map(|part| Into::<Fragment>::into(part).coerce().into_owned())
            .collect::<Vec<_>>()
            .join("|");
        let joined = Self::from_string(joined);
        if group { joined.group() } else { joined }
    }

    /// Concatenation of `parts`; same as chaining [`Pattern::then`].
    pub fn seq<I>(parts: I) -> Pattern
    where
        I: IntoIterator,
        I::Item: Into<Fragment>,
    {
        let text: String = parts
            .into_iter()
            .map(|part| Into::<Fragment>::into(part).coerce().into_owned())
            .collect();
        Self::from_string(text)
    }
}

impl From<&str> for Pattern {
    fn from(text: &str) -> Self {
        Pattern::literal(text)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
