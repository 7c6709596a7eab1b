// define-env-rs: Environment Constant Injection for Build Pipelines
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file(req)
//!   .add_toml_file_optional(opt)
//!   .add_toml_str()
//!   .with_env_prefix()
//!        |
//!        v
//!    build() --> Config
//! ```
//!
//! Only `<PREFIX>_GLOBAL__*` and `<PREFIX>_SELECTION__*` variables are read.
//! Other variables under the prefix are left alone, since the process
//! environment is also this tool's input.

use std::path::PathBuf;

use super::Config;
use crate::error::{ConfigError, Result};

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    env_vars: Option<Vec<(String, String)>>,
    files: Vec<(String, PathBuf)>,
    missing: Vec<PathBuf>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            env_vars: None,
            files: Vec::new(),
            missing: Vec::new(),
        }
    }

    /// Adds a required TOML configuration file.
    ///
    /// A missing file makes `build()` fail with [`ConfigError::NotFound`].
    #[must_use]
    pub fn add_toml_file<P: AsRef<std::path::Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        if !p.is_file() {
            self.missing.push(p.to_path_buf());
            return self;
        }
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(true));
        self.files.push(("file".to_string(), p.to_path_buf()));
        self
    }

    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<std::path::Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(false));
        if p.exists() {
            self.files.push(("optional".to_string(), p.to_path_buf()));
        }
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.files
            .push(("string".to_string(), PathBuf::from("<string>")));
        self
    }

    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Reads overrides from `vars` instead of the process environment.
    #[must_use]
    pub fn with_env_vars<K, V>(mut self, vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.env_vars = Some(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Builds the configuration from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A required configuration file is missing.
    /// - A configuration file has invalid TOML syntax.
    /// - The merged configuration cannot be deserialized into `Config`.
    pub fn build(self) -> Result<Config> {
        if let Some(missing) = self.missing.first() {
            return Err(ConfigError::NotFound(missing.display().to_string()).into());
        }

        let sources = self.describe_sources();
        let Self {
            builder,
            env_prefix,
            env_vars,
            ..
        } = self;

        let builder = match env_prefix {
            Some(prefix) => {
                let vars = env_vars.unwrap_or_else(|| {
                    std::env::vars_os()
                        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
                        .collect()
                });
                builder.add_source(
                    config::Environment::with_prefix(&prefix)
                        .prefix_separator("_")
                        .separator("__")
                        .try_parsing(true)
                        .source(Some(section_vars(&prefix, vars))),
                )
            }
            None => builder,
        };

        let parse_error = |e: config::ConfigError| ConfigError::ParseError {
            path: sources.clone(),
            message: e.to_string(),
        };
        let cfg = builder.build().map_err(parse_error)?;
        let config: Config = cfg.try_deserialize().map_err(parse_error)?;

        tracing::debug!(sources = %sources, "configuration loaded");
        Ok(config)
    }

    #[must_use]
    pub fn loaded_files(&self) -> Vec<(String, PathBuf)> {
        self.files.clone()
    }

    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.files
            .iter()
            .enumerate()
            .map(|(i, (source, path))| format!("{}. [{}] {}", i + 1, source, path.display()))
            .collect()
    }

    fn describe_sources(&self) -> String {
        let mut sources: Vec<String> = self
            .files
            .iter()
            .map(|(_, path)| path.display().to_string())
            .collect();
        if let Some(prefix) = &self.env_prefix {
            sources.push(format!("<env {prefix}_*>"));
        }
        if sources.is_empty() {
            return "<defaults>".to_string();
        }
        sources.join(", ")
    }
}

/// Keeps the variables that name a config section under `prefix`.
fn section_vars(prefix: &str, vars: Vec<(String, String)>) -> config::Map<String, String> {
    let head = format!("{prefix}_").to_ascii_lowercase();
    vars.into_iter()
        .filter(|(key, _)| {
            let key = key.to_ascii_lowercase();
            let known = key
                .strip_prefix(&head)
                .is_some_and(|rest| rest.starts_with("global__") || rest.starts_with("selection__"));
            if !known && key.starts_with(&head) {
                tracing::trace!(key = %key, "ignoring variable outside config sections");
            }
            known
        })
        .collect()
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
