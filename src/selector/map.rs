// define-env-rs: Environment Constant Injection for Build Pipelines
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Selected variables keyed by their constant name.

use std::collections::BTreeMap;

use serde::Serialize;

/// Prefix of every constant name produced by selection.
pub const ENV_NAMESPACE: &str = "process.env.";

/// Constant name (`process.env.<KEY>`) to value.
///
/// `None` marks a variable that exists without a value; it is encoded as the
/// bare `undefined` token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InjectionMap {
    entries: BTreeMap<String, Option<String>>,
}

impl InjectionMap {
    pub(crate) fn insert(&mut self, key: &str, value: Option<String>) {
        self.entries.insert(format!("{ENV_NAMESPACE}{key}"), value);
    }

    /// Looks up a constant by its full name, e.g. `process.env.HOME`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.entries.get(name).map(Option::as_deref)
    }

    /// Looks up a constant by environment key, e.g. `HOME`.
    #[must_use]
    pub fn get_env(&self, key: &str) -> Option<Option<&str>> {
        self.get(&format!("{ENV_NAMESPACE}{key}"))
    }

    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterates over `(constant name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// Iterates over constant names in name order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
