// define-env-rs: Environment Constant Injection for Build Pipelines
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! define-env [global options] <command>
//! list          selected variables as JSON
//! definitions   encoded definitions as JSON
//! build INPUT   run one compilation, print or write the output
//! version
//! ```

pub mod global;


use crate::cli::global::GlobalOptions;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Environment constant injection for build pipelines
///
/// Selects environment variables with include/exclude rules and injects them
/// as `process.env.*` constants.
#[derive(Debug, Parser)]
#[command(
    name = "define-env",
    author,
    version,
    about = "Inject environment variables as compile-time constants",
    after_help = "CONFIG FILES:\n\n\
                  define-env looks for `define-env.toml` in the current directory\n\
                  unless --no-default-config is given. Files passed with --config are\n\
                  loaded afterwards and override it. Rule flags on the command line\n\
                  override the matching side (include or exclude) of the files.\n\n\
                  Without any rule, every variable is injected. Once a rule is given,\n\
                  only variables matched by the include rule are injected."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Prints the selected variables as JSON.
    List,

    /// Prints the encoded definitions handed to the define plugin.
    Definitions,

    /// Substitutes constants in a source file.
    Build(BuildArgs),
}

/// Arguments for the `build` command.
#[derive(Debug, Clone, Args)]
pub struct BuildArgs {
    /// Source file to compile.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (stdout if omitted).
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}
