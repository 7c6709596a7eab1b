// define-env-rs: Environment Constant Injection for Build Pipelines
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The environment define plugin.
//!
//! ```text
//! DefineEnvPlugin::new(options)
//!   snapshot + SelectionConfig --> Selector --> Arc<InjectionMap>
//!
//! apply(compiler)
//!   hooks.this_compilation.tap("DefineEnvPlugin")
//!        |
//!        v  per compilation
//!   encode values (serde_json / `undefined`)
//!   compilation.define_plugin()
//!     Some(sink) --> sink.extend(encoded)     overwrite collisions
//!     None       --> DefinePlugin::new(encoded).register(compilation)
//! ```


use std::sync::Arc;

use crate::env::{current_env, snapshot::EnvSnapshot};
use crate::error::{DefineEnvResult, PipelineError};
use crate::pipeline::define::{DefinePlugin, Definitions};
use crate::pipeline::{Compilation, Compiler, Plugin};
use crate::selector::{InjectionMap, SelectionConfig, Selector};

/// Name used when tapping hooks.
pub const PLUGIN_NAME: &str = "DefineEnvPlugin";

/// Source token for a variable that exists without a value.
pub const UNDEFINED_TOKEN: &str = "undefined";

/// Injects selected environment variables as `process.env.*` constants.
///
/// The selection is computed once, at construction, and reused for every
/// compilation.
#[derive(Debug, Clone)]
pub struct DefineEnvPlugin {
    map: Arc<InjectionMap>,
}

impl DefineEnvPlugin {
    /// Captures the current process environment and selects from it.
    #[must_use]
    pub fn new(options: Option<SelectionConfig>) -> Self {
        Self::with_snapshot(&current_env(), options.as_ref())
    }

    /// Selects from an explicit snapshot.
    #[must_use]
    pub fn with_snapshot(snapshot: &EnvSnapshot, options: Option<&SelectionConfig>) -> Self {
        let map = Selector::new(snapshot, options).into_injection_map();
        tracing::info!(count = map.len(), "selected environment variables for injection");
        Self { map: Arc::new(map) }
    }

    /// The selected variables.
    #[must_use]
    pub fn injection_map(&self) -> &InjectionMap {
        &self.map
    }

    /// The definitions handed to the define sink.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::EncodeFailed`] if a value cannot be encoded.
    pub fn definitions(&self) -> DefineEnvResult<Definitions> {
        encode_definitions(&self.map)
    }
}

impl Default for DefineEnvPlugin {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Plugin for DefineEnvPlugin {
    fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    fn apply(&self, compiler: &mut Compiler) {
        let map = Arc::clone(&self.map);
        compiler
            .hooks
            .this_compilation
            .tap(PLUGIN_NAME, move |compilation| inject(&map, compilation));
    }
}

fn inject(map: &InjectionMap, compilation: &mut Compilation) -> DefineEnvResult<()> {
    let definitions = encode_definitions(map)?;
    let count = definitions.len();

    if let Some(define) = compilation.define_plugin() {
        define.extend(definitions);
        tracing::debug!(count, "extended existing define plugin");
    } else {
        DefinePlugin::new(definitions).register(compilation);
        tracing::debug!(count, "registered new define plugin");
    }

    Ok(())
}

/// Encodes every value as a source literal.
///
/// # Errors
///
/// Returns [`PipelineError::EncodeFailed`] if a value cannot be encoded.
pub fn encode_definitions(map: &InjectionMap) -> DefineEnvResult<Definitions> {
    map.iter()
        .map(|(name, value)| -> DefineEnvResult<(String, String)> {
            Ok((name.to_string(), encode_value(name, value)?))
        })
        .collect()
}

/// JSON-encodes a value; an absent value becomes [`UNDEFINED_TOKEN`].
///
/// # Errors
///
/// Returns [`PipelineError::EncodeFailed`] if serialization fails.
pub fn encode_value(name: &str, value: Option<&str>) -> Result<String, PipelineError> {
    value.map_or_else(
        || Ok(UNDEFINED_TOKEN.to_string()),
        |v| {
            serde_json::to_string(v).map_err(|source| PipelineError::EncodeFailed {
                name: name.to_string(),
                source,
            })
        },
    )
}
