// define-env-rs: Environment Constant Injection for Build Pipelines
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE           ← Additional config files (can repeat)
//! --include KEY           ← Include set (can repeat)
//! --include-pattern /RE/f ← Include pattern
//! --exclude KEY           ← Exclude set (can repeat)
//! --exclude-pattern /RE/f ← Exclude pattern
//! --log-level N           ← Console verbosity (0-5)
//!
//! Precedence: CLI flags > --config > define-env.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::error::Result;
use crate::rule::Rule;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append, global = true)]
    pub configs: Vec<PathBuf>,

    /// Disables loading `define-env.toml` from the current directory.
    #[arg(long = "no-default-config", global = true)]
    pub no_default_config: bool,

    /// Variable to include. Can be specified multiple times.
    #[arg(short = 'i', long = "include", value_name = "KEY", action = clap::ArgAction::Append,
        conflicts_with = "include_pattern", global = true)]
    pub include: Vec<String>,

    /// Include variables whose name matches a pattern such as `/^CI_/i`.
    #[arg(long = "include-pattern", value_name = "PATTERN", global = true)]
    pub include_pattern: Option<String>,

    /// Variable to exclude. Can be specified multiple times.
    #[arg(short = 'e', long = "exclude", value_name = "KEY", action = clap::ArgAction::Append,
        conflicts_with = "exclude_pattern", global = true)]
    pub exclude: Vec<String>,

    /// Exclude variables whose name matches a pattern such as `/token$/i`.
    #[arg(long = "exclude-pattern", value_name = "PATTERN", global = true)]
    pub exclude_pattern: Option<String>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5), global = true)]
    pub log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// Include rule given on the command line, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if `--include-pattern` is not a valid pattern.
    pub fn include_rule(&self) -> Result<Option<Rule>> {
        rule_from_args(&self.include, self.include_pattern.as_deref())
    }

    /// Exclude rule given on the command line, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if `--exclude-pattern` is not a valid pattern.
    pub fn exclude_rule(&self) -> Result<Option<Rule>> {
        rule_from_args(&self.exclude, self.exclude_pattern.as_deref())
    }
}

/// A single key becomes an exact rule, several keys a set rule.
fn rule_from_args(keys: &[String], pattern: Option<&str>) -> Result<Option<Rule>> {
    if let Some(pattern) = pattern {
        return Ok(Some(Rule::try_pattern_literal(pattern)?));
    }
    Ok(match keys {
        [] => None,
        [key] => Some(Rule::exact(key.as_str())),
        keys => Some(Rule::set(keys.iter().cloned())),
    })
}
