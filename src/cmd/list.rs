// define-env-rs: Environment Constant Injection for Build Pipelines
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `list` and `definitions` command implementations.

use crate::error::Result;
use crate::plugin::DefineEnvPlugin;

/// Renders the selected variables as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_list(plugin: &DefineEnvPlugin) -> Result<String> {
    Ok(serde_json::to_string_pretty(plugin.injection_map())?)
}

/// Renders the encoded definitions as pretty JSON.
///
/// # Errors
///
/// Returns an error if a value cannot be encoded.
pub fn render_definitions(plugin: &DefineEnvPlugin) -> Result<String> {
    Ok(serde_json::to_string_pretty(&plugin.definitions()?)?)
}

/// Main handler for the list command.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn run_list_command(plugin: &DefineEnvPlugin) -> Result<()> {
    println!("{}", render_list(plugin)?);
    Ok(())
}

/// Main handler for the definitions command.
///
/// # Errors
///
/// Returns an error if a value cannot be encoded.
pub fn run_definitions_command(plugin: &DefineEnvPlugin) -> Result<()> {
    println!("{}", render_definitions(plugin)?);
    Ok(())
}
