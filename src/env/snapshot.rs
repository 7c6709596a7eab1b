// define-env-rs: Environment Constant Injection for Build Pipelines
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Immutable environment snapshot.
//!
//! ```text
//! EnvSnapshot
//! vars: Arc<[(String, Option<String>)]>
//! clone shares the Arc, nothing is ever written after capture
//! ```

use std::sync::Arc;

/// A single captured variable: the key and its value, if it has one.
pub type EnvEntry = (String, Option<String>);

/// An immutable, ordered copy of environment variables.
///
/// Cloning is cheap: all clones share the same storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: Arc<[EnvEntry]>,
}

impl EnvSnapshot {
    /// Creates a snapshot with no variables.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a snapshot from key/value pairs where every key has a value.
    #[must_use]
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::from_entries(pairs.into_iter().map(|(k, v)| (k.into(), Some(v.into()))))
    }

    /// Creates a snapshot from entries that may carry absent values.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = EnvEntry>) -> Self {
        Self {
            vars: entries.into_iter().collect(),
        }
    }

    /// Looks up a key.
    ///
    /// Returns `None` when the key is not in the snapshot and `Some(None)` when
    /// the key exists without a value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.vars
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_deref())
    }

    /// Returns true if the key was captured.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.vars.iter().any(|(k, _)| k == key)
    }

    /// Returns an iterator over entries in capture order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// Returns an iterator over keys in capture order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.vars.iter().map(|(k, _)| k.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns true if no variables were captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Returns true if both snapshots share the same storage.
    #[must_use]
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.vars, &other.vars)
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}
