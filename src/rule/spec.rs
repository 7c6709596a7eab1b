// define-env-rs: Environment Constant Injection for Build Pipelines
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Rule values as written in configuration files.
//!
//! ```toml
//! include = "GITHUB_ACTIONS"                    # Exact
//! include = ["GITHUB_ACTIONS", "GITHUB_OWNER"]  # Set
//! include = { pattern = "owner$", flags = "i" } # Pattern
//! include = 42                                  # Unrecognized
//! ```

use serde::Deserialize;
use serde::de::IgnoredAny;

use super::Rule;

/// A rule before classification.
///
/// Deserialization never fails: any value that is not one of the known
/// shapes lands in [`RuleSpec::Unrecognized`].
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RuleSpec {
    Exact(String),
    Set(Vec<String>),
    Pattern {
        pattern: String,
        #[serde(default)]
        flags: String,
    },
    Unrecognized(IgnoredAny),
}

impl From<RuleSpec> for Rule {
    fn from(spec: RuleSpec) -> Self {
        match spec {
            RuleSpec::Exact(key) => Self::Exact(key),
            RuleSpec::Set(keys) => Self::Set(keys),
            RuleSpec::Pattern { pattern, flags } => Self::pattern(&pattern, &flags),
            RuleSpec::Unrecognized(_) => {
                tracing::warn!("rule has an unrecognized shape and will never match");
                Self::Unrecognized
            }
        }
    }
}
