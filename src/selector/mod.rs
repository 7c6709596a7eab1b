// define-env-rs: Environment Constant Injection for Build Pipelines
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Selection engine.
//!
//! ```text
//! for (key, value) in snapshot:
//!   config absent            --> inject
//!   config present:
//!     inject = include?(key)     (false when include is absent)
//!     exclude?(key) --> inject = false   (exclude always wins)
//!   inject --> map["process.env.<key>"] = value
//! ```
//!
//! A config that carries only `exclude` selects nothing: inclusion is the
//! only way a key becomes selected once a config is given.

pub mod map;

#[cfg(test)]
mod tests;

use crate::env::snapshot::EnvSnapshot;
use crate::rule::Rule;

pub use map::{ENV_NAMESPACE, InjectionMap};

/// Include/exclude rules applied to every key of a snapshot.
#[derive(Debug, Clone, Default)]
pub struct SelectionConfig {
    pub include: Option<Rule>,
    pub exclude: Option<Rule>,
}

impl SelectionConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include: None,
            exclude: None,
        }
    }

    #[must_use]
    pub fn include(mut self, rule: impl Into<Rule>) -> Self {
        self.include = Some(rule.into());
        self
    }

    #[must_use]
    pub fn exclude(mut self, rule: impl Into<Rule>) -> Self {
        self.exclude = Some(rule.into());
        self
    }

    /// Decides whether a single key is injected.
    #[must_use]
    pub fn selects(&self, key: &str) -> bool {
        let included = self.include.as_ref().is_some_and(|rule| rule.matches(key));
        let excluded = self.exclude.as_ref().is_some_and(|rule| rule.matches(key));
        included && !excluded
    }
}

/// Computes the injection map once and holds it.
#[derive(Debug, Clone)]
pub struct Selector {
    map: InjectionMap,
}

impl Selector {
    /// Classifies every key of `snapshot`.
    ///
    /// With no config every key is selected. Never fails.
    #[must_use]
    pub fn new(snapshot: &EnvSnapshot, config: Option<&SelectionConfig>) -> Self {
        let mut map = InjectionMap::default();
        let mut skipped = 0usize;

        for (key, value) in snapshot.iter() {
            let inject = config.is_none_or(|c| c.selects(key));
            if inject {
                map.insert(key, value.map(str::to_owned));
            } else {
                skipped += 1;
            }
        }

        tracing::debug!(
            include = config.and_then(|c| c.include.as_ref()).map_or("none", Rule::kind),
            exclude = config.and_then(|c| c.exclude.as_ref()).map_or("none", Rule::kind),
            selected = map.len(),
            skipped,
            "environment selection complete"
        );

        Self { map }
    }

    /// The computed injection map.
    #[must_use]
    pub const fn injection_map(&self) -> &InjectionMap {
        &self.map
    }

    #[must_use]
    pub fn into_injection_map(self) -> InjectionMap {
        self.map
    }
}
