// define-env-rs: Environment Constant Injection for Build Pipelines
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |        list / definitions / build
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, [selection] rules |
//!              '-------------+-------------'
//!                            v
//!   env::current_env() --> plugin::DefineEnvPlugin
//!        EnvSnapshot          |            |
//!                     selector::Selector   apply()
//!                     rule::Rule           |
//!                      InjectionMap        v
//!                              pipeline: Compiler --this_compilation-->
//!                                        Compilation --> DefinePlugin
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```
//!
//! # Example
//!
//! ```
//! use define_env_rs::env::snapshot::EnvSnapshot;
//! use define_env_rs::pipeline::Compiler;
//! use define_env_rs::plugin::DefineEnvPlugin;
//! use define_env_rs::rule::Rule;
//! use define_env_rs::selector::SelectionConfig;
//!
//! let env = EnvSnapshot::from_pairs([("GITHUB_OWNER", "hankliu62"), ("HOME", "/root")]);
//! let options = SelectionConfig::new().include(Rule::pattern("OWNER$", ""));
//! let plugin = DefineEnvPlugin::with_snapshot(&env, Some(&options));
//!
//! let mut compiler = Compiler::with_plugins(&[&plugin]);
//! let compilation = compiler.compile("log(process.env.GITHUB_OWNER)")?;
//! assert_eq!(compilation.output(), Some(r#"log("hankliu62")"#));
//! # Ok::<(), define_env_rs::error::DefineEnvError>(())
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod env;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod plugin;
pub mod rule;
pub mod selector;
