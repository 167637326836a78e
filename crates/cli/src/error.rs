// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.

/// Invalid use of a builder operation.
///
/// Raised at composition time, never deferred to compilation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    /// A name was supplied for a non-capturing group.
    #[error("cannot name a non-capturing group (name `{name}`)")]
    NamedNonCapturingGroup { name: String },

    /// Both repeat bounds were given and `min` is not below `max`.
    #[error("repeat bounds must satisfy min < max, got min={min} max={max}")]
    InvalidRepeatRange { min: u32, max: u32 },
}

/// The host engine rejected the generated pattern text.
#[derive(Debug, thiserror::Error)]
#[error("failed to compile pattern `{pattern}`: {source}")]
pub struct CompileError {
    /// Text handed to the engine, inline flags included.
    pub pattern: String,
    #[source]
    pub source: Box<fancy_regex::Error>,
}

/// Any failure from building, compiling or running a pattern.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error(transparent)]
    Compile(#[from] CompileError),

    /// The engine gave up while searching (e.g. backtrack limit).
    #[error("match failed: {0}")]
    Match(#[from] fancy_regex::Error),
}

/// Exit codes for the `wordy` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// At least one match (or a non-search command succeeded).
    Success = 0,
    /// The search ran but found nothing.
    NoMatch = 1,
    /// Anything else. (2 is left to clap for usage errors.)
    InternalError = 3,
    /// Config file could not be loaded.
    ConfigError = 4,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}
