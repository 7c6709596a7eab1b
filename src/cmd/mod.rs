// define-env-rs: Environment Constant Injection for Build Pipelines
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! Config + GlobalOptions --> resolve_selection() --> DefineEnvPlugin
//!   list, definitions, build
//! ```

pub mod build;
pub mod list;


use crate::cli::global::GlobalOptions;
use crate::config::Config;
use crate::env::current_env;
use crate::error::Result;
use crate::plugin::DefineEnvPlugin;
use crate::selector::SelectionConfig;

/// Merges the `[selection]` table with rule flags from the command line.
///
/// A rule flag replaces the same side from the config files and turns
/// selection on even if no `[selection]` table was given.
///
/// # Errors
///
/// Returns an error if a command-line pattern is invalid.
pub fn resolve_selection(config: &Config, global: &GlobalOptions) -> Result<Option<SelectionConfig>> {
    let include = global.include_rule()?;
    let exclude = global.exclude_rule()?;
    let mut selection = config.selection_config();

    if include.is_some() || exclude.is_some() {
        let section = selection.get_or_insert_with(SelectionConfig::default);
        if include.is_some() {
            section.include = include;
        }
        if exclude.is_some() {
            section.exclude = exclude;
        }
    }

    Ok(selection)
}

/// Builds the plugin from the live process environment.
///
/// # Errors
///
/// Returns an error if a command-line pattern is invalid.
pub fn build_plugin(config: &Config, global: &GlobalOptions) -> Result<DefineEnvPlugin> {
    let selection = resolve_selection(config, global)?;
    Ok(DefineEnvPlugin::with_snapshot(&current_env(), selection.as_ref()))
}
