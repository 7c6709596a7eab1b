// define-env-rs: Environment Constant Injection for Build Pipelines
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. define-env.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. DEFINE_ENV_* env vars
//! 5. CLI rule flags (--include, --exclude, ...)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! DEFINE_ENV_GLOBAL__LOG_LEVEL=4        → global.log_level = 4
//! DEFINE_ENV_SELECTION__INCLUDE=CI      → selection.include = "CI"
//! ```
//!
//! # Selection
//!
//! ```toml
//! [selection]
//! include = ["GITHUB_ACTIONS", "GITHUB_OWNER"]
//! exclude = { pattern = "owner$", flags = "i" }
//! ```
//!
//! Without a `[selection]` table every variable is injected. With one, only
//! variables matched by `include` are.

pub mod loader;


use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::logging::LogLevel;
use crate::rule::spec::RuleSpec;
use crate::selector::SelectionConfig;

use loader::ConfigLoader;

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "define-env.toml";

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "DEFINE_ENV";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Include/exclude rules; `None` injects everything.
    pub selection: Option<SelectionSection>,
}

/// `[global]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Console log level (0-5).
    pub log_level: LogLevel,
    /// Optional log file.
    pub log_file: Option<PathBuf>,
}

/// `[selection]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectionSection {
    pub include: Option<RuleSpec>,
    pub exclude: Option<RuleSpec>,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use define_env_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file("ci/define-env.toml")
    ///     .add_toml_file_optional("define-env.toml")
    ///     .with_env_prefix("DEFINE_ENV")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, contains invalid TOML, or does
    /// not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Classifies the `[selection]` rules.
    ///
    /// Returns `None` when no `[selection]` table was given.
    #[must_use]
    pub fn selection_config(&self) -> Option<SelectionConfig> {
        self.selection.clone().map(|section| SelectionConfig {
            include: section.include.map(Into::into),
            exclude: section.exclude.map(Into::into),
        })
    }
}
