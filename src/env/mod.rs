// define-env-rs: Environment Constant Injection for Build Pipelines
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment snapshots.
//!
//! # Architecture
//!
//! ```text
//! EnvSnapshot (shared Arc<[EnvEntry]>)
//! Sources: current_env(), EnvSnapshot::from_pairs(), EnvSnapshot::empty()
//! Ops: iter/get/keys/len
//! ```
//!
//! - **Immutable**: captured once, clones share the same storage
//! - **Ordered**: entries keep the order they were observed in
//! - **Absent values**: a key may exist without a usable value (`None`)

pub mod snapshot;


use std::ffi::OsString;

use snapshot::EnvSnapshot;

/// Captures the current process environment.
///
/// Values that are not valid UTF-8 are kept as absent (`None`) so the key is
/// still visible to selection rules.
#[must_use]
pub fn current_env() -> EnvSnapshot {
    EnvSnapshot::from_entries(std::env::vars_os().map(decode_entry))
}

fn decode_entry((key, value): (OsString, OsString)) -> (String, Option<String>) {
    let key = key.to_string_lossy().into_owned();
    let value = value.into_string().map_or_else(
        |_| {
            tracing::trace!(key = %key, "environment value is not valid UTF-8, treating as absent");
            None
        },
        Some,
    );
    (key, value)
}
