// define-env-rs: Environment Constant Injection for Build Pipelines
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> config --> Logging --> Command Dispatch
//!   Version | List | Definitions | Build
//! ```

use std::process::ExitCode;

use define_env_rs::cli::global::GlobalOptions;
use define_env_rs::cli::{self, Command};
use define_env_rs::cmd::build::run_build_command;
use define_env_rs::cmd::build_plugin;
use define_env_rs::cmd::list::{run_definitions_command, run_list_command};
use define_env_rs::config::loader::ConfigLoader;
use define_env_rs::config::{Config, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use define_env_rs::logging::{LogConfig, LogLevel, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&cli.global, &config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config)
}

fn build_log_config(global: &GlobalOptions, config: &Config) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(config.global.log_level);

    let log_file = global
        .log_file
        .as_ref()
        .or(config.global.log_file.as_ref())
        .map(|p| p.display().to_string());

    LogConfig::builder()
        .with_console_level(console_level)
        .maybe_with_log_file(log_file)
        .build()
}

fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(Command::List) => {
            build_plugin(config, &cli.global).and_then(|plugin| run_list_command(&plugin))
        }
        Some(Command::Definitions) => {
            build_plugin(config, &cli.global).and_then(|plugin| run_definitions_command(&plugin))
        }
        Some(Command::Build(args)) => {
            build_plugin(config, &cli.global).and_then(|plugin| run_build_command(args, &plugin))
        }
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(global: &GlobalOptions) -> define_env_rs::error::Result<Config> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
    }
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader.with_env_prefix(ENV_PREFIX).build()
}
