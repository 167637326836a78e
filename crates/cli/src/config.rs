// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `wordy.toml` configuration.
//!
//! ```toml
//! version = 1
//!
//! [compile]
//! flags = ["multi_line"]
//! backtrack_limit = 1000000
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::pattern::{CompileOptions, Flags};

/// File name searched for by [`discover`].
pub const CONFIG_FILE: &str = "wordy.toml";

/// The only supported config version.
pub const CONFIG_VERSION: u32 = 1;

/// Keys accepted at each level; anything else is warned about.
const KNOWN_TOP_LEVEL: &[&str] = &["version", "compile"];
const KNOWN_COMPILE: &[&str] = &["flags", "backtrack_limit", "delegate_size_limit"];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unsupported config version {found} (expected {expected})", expected = CONFIG_VERSION)]
    UnsupportedVersion { found: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    pub version: u32,

    #[serde(default)]
    pub compile: CompileConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self { version: CONFIG_VERSION, compile: CompileConfig::default() }
    }
}

/// Options used when the CLI compiles a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompileConfig {
    /// Engine flags (default: multi_line).
    #[serde(default = "CompileConfig::default_flags")]
    pub flags: Vec<FlagName>,

    #[serde(default)]
    pub backtrack_limit: Option<usize>,

    #[serde(default)]
    pub delegate_size_limit: Option<usize>,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self { flags: Self::default_flags(), backtrack_limit: None, delegate_size_limit: None }
    }
}

impl CompileConfig {
    pub(crate) fn default_flags() -> Vec<FlagName> {
        vec![FlagName::MultiLine]
    }

    pub fn options(&self) -> CompileOptions {
        CompileOptions {
            flags: self.flags.iter().fold(Flags::empty(), |acc, name| acc | name.flag()),
            backtrack_limit: self.backtrack_limit,
            delegate_size_limit: self.delegate_size_limit,
        }
    }
}

/// Flag names as written in `wordy.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagName {
    IgnoreCase,
    MultiLine,
    DotAll,
    Verbose,
}

impl FlagName {
    pub fn flag(self) -> Flags {
        match self {
            FlagName::IgnoreCase => Flags::IGNORE_CASE,
            FlagName::MultiLine => Flags::MULTI_LINE,
            FlagName::DotAll => Flags::DOT_ALL,
            FlagName::Verbose => Flags::VERBOSE,
        }
    }
}

/// Parse config text. `path` is only used in error messages.
pub fn parse(content: &str, path: &Path) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)
        .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
    if config.version != CONFIG_VERSION {
        return Err(ConfigError::UnsupportedVersion { found: config.version });
    }
    Ok(config)
}

/// Load a config file, logging a warning for each unknown key.
pub fn load_with_warnings(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;

    for key in unknown_keys(&content) {
        tracing::warn!("unknown key `{}` in {}", key, path.display());
    }

    let config = parse(&content, path)?;
    tracing::debug!("loaded config from {}: {:?}", path.display(), config);
    Ok(config)
}

/// Nearest wordy.toml at or above `start_dir`.
///
/// The walk stops after the first directory containing `.git`.
pub fn discover(start_dir: &Path) -> Option<PathBuf> {
    start_dir
        .ancestors()
        .find_map(|dir| {
            let candidate = dir.join(CONFIG_FILE);
            if candidate.is_file() {
                Some(Some(candidate))
            } else if dir.join(".git").exists() {
                Some(None)
            } else {
                None
            }
        })
        .flatten()
}

/// Config for a run: `explicit` when given, else discovered from
/// `start_dir`, else defaults.
///
/// An explicit path that does not exist is an error, never a silent default.
pub fn load(explicit: Option<&Path>, start_dir: &Path) -> Result<Config, ConfigError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match discover(start_dir) {
            Some(found) => {
                tracing::debug!("discovered config at {}", found.display());
                found
            }
            None => {
                tracing::debug!("no {} above {}, using defaults", CONFIG_FILE, start_dir.display());
                return Ok(Config::default());
            }
        },
    };
    load_with_warnings(&path)
}

/// Dotted paths of keys not recognized by [`Config`].
fn unknown_keys(content: &str) -> Vec<String> {
    let Ok(table) = toml::from_str::<toml::Table>(content) else {
        // Syntax errors are reported by `parse`.
        return Vec::new();
    };

    let mut unknown = Vec::new();
    for (key, value) in &table {
        if !KNOWN_TOP_LEVEL.contains(&key.as_str()) {
            unknown.push(key.clone());
            continue;
        }
        if key == "compile"
            && let toml::Value::Table(compile) = value
        {
            for sub in compile.keys() {
                if !KNOWN_COMPILE.contains(&sub.as_str()) {
                    unknown.push(format!("compile.{sub}"));
                }
            }
        }
    }
    unknown
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
