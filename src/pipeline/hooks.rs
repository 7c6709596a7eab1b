// define-env-rs: Environment Constant Injection for Build Pipelines
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Synchronous hooks.
//!
//! ```text
//! tap("A", f) tap("B", g)
//!        |
//!        v call(&mut arg)
//!   f(arg)? --> g(arg)?   (stops at the first error)
//! ```

use std::fmt;

use crate::error::DefineEnvResult;

type Callback<T> = Box<dyn Fn(&mut T) -> DefineEnvResult<()> + Send + Sync>;

struct Tap<T> {
    name: String,
    callback: Callback<T>,
}

/// An ordered list of named callbacks over `&mut T`.
pub struct SyncHook<T> {
    taps: Vec<Tap<T>>,
}

impl<T> Default for SyncHook<T> {
    fn default() -> Self {
        Self { taps: Vec::new() }
    }
}

impl<T> fmt::Debug for SyncHook<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncHook")
            .field("taps", &self.tap_names().collect::<Vec<_>>())
            .finish()
    }
}

impl<T> SyncHook<T> {
    /// Registers a callback. Callbacks run in registration order.
    pub fn tap<F>(&mut self, name: impl Into<String>, callback: F)
    where
        F: Fn(&mut T) -> DefineEnvResult<()> + Send + Sync + 'static,
    {
        self.taps.push(Tap {
            name: name.into(),
            callback: Box::new(callback),
        });
    }

    /// Runs every callback against `arg`.
    ///
    /// # Errors
    ///
    /// Returns the first callback error; later callbacks do not run.
    pub fn call(&self, arg: &mut T) -> DefineEnvResult<()> {
        for tap in &self.taps {
            tracing::trace!(tap = %tap.name, "calling hook tap");
            (tap.callback)(arg)?;
        }
        Ok(())
    }

    /// Names of registered taps, in order.
    pub fn tap_names(&self) -> impl Iterator<Item = &str> {
        self.taps.iter().map(|t| t.name.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.taps.is_empty()
    }
}
