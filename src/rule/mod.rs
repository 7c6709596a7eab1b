// define-env-rs: Environment Constant Injection for Build Pipelines
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Selection rules.
//!
//! # Architecture
//!
//! ```text
//! boundary (API / TOML)          evaluation
//!   &str, String    --> Exact      key == s
//!   [&str], Vec     --> Set        set.contains(key)
//!   Fn(&str)->bool  --> Predicate  f(key)
//!   Regex, {pattern} --> Pattern   re.is_match(key)
//!   anything else   --> Unrecognized  false
//! ```
//!
//! Shapes are classified once, when the rule is built. [`Rule::matches`]
//! never inspects types again and never panics.

pub mod flags;
pub mod spec;

#[cfg(test)]
mod tests;

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::error::RuleError;
use flags::PatternFlags;

/// A shared key predicate.
pub type Predicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// A matcher over environment keys.
#[derive(Clone)]
pub enum Rule {
    /// Matches a key equal to the string.
    Exact(String),
    /// Matches a key contained in the list.
    Set(Vec<String>),
    /// Matches when the predicate returns true for the key.
    Predicate(Predicate),
    /// Matches when the pattern finds a match anywhere in the key.
    Pattern(Regex),
    /// A value of unknown shape. Never matches.
    Unrecognized,
}

impl Rule {
    #[must_use]
    pub fn exact(key: impl Into<String>) -> Self {
        Self::Exact(key.into())
    }

    #[must_use]
    pub fn set<S: Into<String>>(keys: impl IntoIterator<Item = S>) -> Self {
        Self::Set(keys.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(f))
    }

    /// Builds a pattern rule from a source and JavaScript-style flag letters.
    ///
    /// A pattern that fails to compile becomes [`Rule::Unrecognized`], which
    /// never matches. Use [`Rule::try_pattern`] to get the error instead.
    #[must_use]
    pub fn pattern(source: &str, flags: &str) -> Self {
        Self::try_pattern(source, flags).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring pattern rule");
            Self::Unrecognized
        })
    }

    /// Builds a pattern rule, returning an error for bad flags or syntax.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError`] if `flags` contains an unknown or repeated letter,
    /// or if `source` is not a valid regular expression.
    pub fn try_pattern(source: &str, flags: &str) -> Result<Self, RuleError> {
        let flags = PatternFlags::parse(flags)?;
        flags.compile(source).map(Self::Pattern)
    }

    /// Parses a pattern written as a regex literal, `/source/flags`.
    ///
    /// Text without the surrounding slashes is taken as the source with no
    /// flags.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError`] for bad flags or syntax.
    pub fn try_pattern_literal(literal: &str) -> Result<Self, RuleError> {
        match literal
            .strip_prefix('/')
            .and_then(|rest| rest.rsplit_once('/'))
        {
            Some((source, flags)) => Self::try_pattern(source, flags),
            None => Self::try_pattern(literal, ""),
        }
    }

    /// Returns true if the rule matches the key.
    #[must_use]
    pub fn matches(&self, key: &str) -> bool {
        match self {
            Self::Exact(expected) => expected == key,
            Self::Set(keys) => keys.iter().any(|k| k == key),
            Self::Predicate(f) => f(key),
            Self::Pattern(re) => re.is_match(key),
            Self::Unrecognized => false,
        }
    }

    /// Short name of the rule shape, for logging.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Exact(_) => "exact",
            Self::Set(_) => "set",
            Self::Predicate(_) => "predicate",
            Self::Pattern(_) => "pattern",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(key) => f.debug_tuple("Exact").field(key).finish(),
            Self::Set(keys) => f.debug_tuple("Set").field(keys).finish(),
            Self::Predicate(_) => f.write_str("Predicate(<fn>)"),
            Self::Pattern(re) => f.debug_tuple("Pattern").field(&re.as_str()).finish(),
            Self::Unrecognized => f.write_str("Unrecognized"),
        }
    }
}

impl From<&str> for Rule {
    fn from(key: &str) -> Self {
        Self::exact(key)
    }
}

impl From<String> for Rule {
    fn from(key: String) -> Self {
        Self::Exact(key)
    }
}

impl From<Vec<String>> for Rule {
    fn from(keys: Vec<String>) -> Self {
        Self::Set(keys)
    }
}

impl From<&[&str]> for Rule {
    fn from(keys: &[&str]) -> Self {
        Self::set(keys.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for Rule {
    fn from(keys: [&str; N]) -> Self {
        Self::set(keys)
    }
}

impl From<Regex> for Rule {
    fn from(re: Regex) -> Self {
        Self::Pattern(re)
    }
}
