// define-env-rs: Environment Constant Injection for Build Pipelines
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!          DefineEnvError (~24 bytes)
//!                  |
//!   +-------+------+--+--------+-------+
//!   |       |         |        |       |
//!   v       v         v        v       v
//! Config   Rule      Fs    Pipeline  Other
//!  Box     Box      Box      Box    Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Config    ParseError, InvalidValue, NotFound
//!   Rule      InvalidFlag, DuplicateFlag, Syntax
//!   Fs        NotFound, IoError
//!   Pipeline  EncodeFailed
//! ```
//!
//! Selection itself never fails: malformed rules degrade to "no match".
//! Everything here belongs to the surrounding layers (config, CLI, pipeline).

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`DefineEnvError`].
pub type DefineEnvResult<T> = std::result::Result<T, DefineEnvError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum DefineEnvError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Rule construction error (strict constructors only).
    #[error("rule error: {0}")]
    Rule(#[from] Box<RuleError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// Build pipeline error.
    #[error("pipeline error: {0}")]
    Pipeline(#[from] Box<PipelineError>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for DefineEnvError {
                fn from(err: $error) -> Self {
                    DefineEnvError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    RuleError => Rule,
    FsError => Fs,
    PipelineError => Pipeline,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}

// --- Rule Errors ---

/// Errors raised when a pattern rule cannot be compiled.
///
/// Lenient constructors turn these into a rule that never matches; only the
/// strict constructors hand them to the caller.
#[derive(Debug, Error)]
pub enum RuleError {
    /// Flag letter outside `gimsuy`.
    #[error("invalid pattern flag '{flag}' in '{flags}'")]
    InvalidFlag { flag: char, flags: String },

    /// Flag letter given more than once.
    #[error("duplicate pattern flag '{flag}' in '{flags}'")]
    DuplicateFlag { flag: char, flags: String },

    /// Pattern source does not compile.
    #[error("invalid pattern '{pattern}': {source}")]
    Syntax {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Pipeline Errors ---

/// Errors raised by the in-process build pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A definition value could not be encoded as a source literal.
    #[error("failed to encode definition '{name}': {source}")]
    EncodeFailed {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}
