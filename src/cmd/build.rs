// define-env-rs: Environment Constant Injection for Build Pipelines
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build command implementation.
//!
//! ```text
//! read INPUT --> Compiler[DefineEnvPlugin].compile() --> OUTPUT | stdout
//! ```

use std::io::Write;
use std::path::Path;

use crate::cli::BuildArgs;
use crate::error::{FsError, Result};
use crate::pipeline::Compiler;
use crate::plugin::DefineEnvPlugin;

/// Compiles `source` with the plugin applied and returns the output.
///
/// # Errors
///
/// Returns an error if a hook fails.
pub fn compile_source(plugin: &DefineEnvPlugin, source: &str) -> Result<String> {
    let mut compiler = Compiler::with_plugins(&[plugin]);
    let compilation = compiler.compile(source)?;
    Ok(compilation.output().unwrap_or_default().to_string())
}

/// Main handler for the build command.
///
/// # Errors
///
/// Returns an error if the input cannot be read, compilation fails, or the
/// output cannot be written.
pub fn run_build_command(args: &BuildArgs, plugin: &DefineEnvPlugin) -> Result<()> {
    let source = read_source(&args.input)?;
    let output = compile_source(plugin, &source)?;

    match &args.output {
        Some(path) => {
            write_output(path, &output)?;
            tracing::info!(output = %path.display(), "wrote compiled source");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn read_source(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(FsError::NotFound(path.display().to_string()).into());
    }
    std::fs::read_to_string(path).map_err(|source| {
        FsError::IoError {
            path: path.display().to_string(),
            source,
        }
        .into()
    })
}

fn write_output(path: &Path, output: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|source| FsError::IoError {
            path: parent.display().to_string(),
            source,
        })?;
    }
    std::fs::write(path, output).map_err(|source| FsError::IoError {
        path: path.display().to_string(),
        source,
    })?;
    Ok(())
}
