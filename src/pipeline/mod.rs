// define-env-rs: Environment Constant Injection for Build Pipelines
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Minimal in-process build pipeline.
//!
//! ```text
//! Compiler
//!   plugins --apply()--> hooks.this_compilation taps
//!   define  (DefinePlugin registered on the compiler, optional)
//!        |
//!        v compile(source)
//! Compilation #n  (starts with a copy of the compiler's define sink)
//!   1. this_compilation taps, in registration order
//!   2. seal: DefinePlugin::substitute(source)
//!        |
//!        v
//!   output()
//! ```

pub mod define;
pub mod hooks;

#[cfg(test)]
mod tests;

use crate::error::DefineEnvResult;
use define::DefinePlugin;
use hooks::SyncHook;

/// A plugin that hooks into a [`Compiler`].
pub trait Plugin {
    /// Name used for hook taps and logging.
    fn name(&self) -> &'static str;

    /// Registers the plugin's hooks on the compiler.
    fn apply(&self, compiler: &mut Compiler);
}

/// Hooks exposed by a [`Compiler`].
#[derive(Debug, Default)]
pub struct CompilerHooks {
    /// Called right after a compilation is created, before any other work.
    pub this_compilation: SyncHook<Compilation>,
}

/// Drives compilations and owns the registered hooks.
#[derive(Debug, Default)]
pub struct Compiler {
    pub hooks: CompilerHooks,
    define: Option<DefinePlugin>,
    compilations: u64,
}

impl Compiler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a compiler and applies every plugin in order.
    #[must_use]
    pub fn with_plugins(plugins: &[&dyn Plugin]) -> Self {
        let mut compiler = Self::new();
        for plugin in plugins {
            compiler.apply(*plugin);
        }
        compiler
    }

    /// Applies a single plugin.
    pub fn apply(&mut self, plugin: &dyn Plugin) -> &mut Self {
        tracing::debug!(plugin = plugin.name(), "applying plugin");
        plugin.apply(self);
        self
    }

    /// The define sink registered on the compiler itself, if any.
    #[must_use]
    pub const fn define_plugin(&self) -> Option<&DefinePlugin> {
        self.define.as_ref()
    }

    pub(crate) fn register_define(&mut self, plugin: DefinePlugin) {
        match &mut self.define {
            Some(existing) => existing.extend(plugin.into_definitions()),
            None => self.define = Some(plugin),
        }
    }

    /// Runs one compilation over `source`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a `this_compilation` tap.
    pub fn compile(&mut self, source: impl Into<String>) -> DefineEnvResult<Compilation> {
        self.compilations += 1;
        let mut compilation = Compilation {
            id: self.compilations,
            source: source.into(),
            define: self.define.clone(),
            output: None,
        };

        let _span = tracing::debug_span!("compilation", id = compilation.id).entered();
        self.hooks.this_compilation.call(&mut compilation)?;
        compilation.seal();
        Ok(compilation)
    }
}

/// A single build pass over one source text.
#[derive(Debug, Clone)]
pub struct Compilation {
    id: u64,
    source: String,
    define: Option<DefinePlugin>,
    output: Option<String>,
}

impl Compilation {
    /// Sequence number, starting at 1 for the compiler's first compilation.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The define sink registered for this compilation, if any.
    pub const fn define_plugin(&mut self) -> Option<&mut DefinePlugin> {
        self.define.as_mut()
    }

    /// Read-only view of the define sink.
    #[must_use]
    pub const fn define(&self) -> Option<&DefinePlugin> {
        self.define.as_ref()
    }

    pub(crate) fn register_define(&mut self, plugin: DefinePlugin) {
        match &mut self.define {
            Some(existing) => existing.extend(plugin.into_definitions()),
            None => self.define = Some(plugin),
        }
    }

    /// Substituted source; `None` until the compilation is sealed.
    #[must_use]
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    fn seal(&mut self) {
        let output = match &self.define {
            Some(define) => define.substitute(&self.source),
            None => self.source.clone(),
        };
        self.output = Some(output);
    }
}
