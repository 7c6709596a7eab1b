// define-env-rs: Environment Constant Injection for Build Pipelines
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global constant definitions and the substitution pass.
//!
//! ```text
//! definitions: { "process.env.NODE_ENV": "\"production\"" }
//!
//! if (process.env.NODE_ENV === "production")
//!     ^^^^^^^^^^^^^^^^^^^^ longest defined dotted prefix
//! if ("production" === "production")
//! ```
//!
//! Member chains preceded by `.` are left alone (`a.process.env.X`), as are
//! comments and the contents of strings, regex literals and template text.
//! Code inside a template's `${ ... }` is substituted.

use std::collections::BTreeMap;

use super::{Compilation, Compiler, Plugin};

/// Name used when tapping hooks.
pub const DEFINE_PLUGIN_NAME: &str = "DefinePlugin";

/// Constant name to replacement source code.
pub type Definitions = BTreeMap<String, String>;

/// Substitutes defined constants with literal source code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefinePlugin {
    definitions: Definitions,
}

impl DefinePlugin {
    #[must_use]
    pub fn new<K, V>(definitions: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            definitions: definitions
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    #[must_use]
    pub const fn definitions(&self) -> &Definitions {
        &self.definitions
    }

    pub const fn definitions_mut(&mut self) -> &mut Definitions {
        &mut self.definitions
    }

    #[must_use]
    pub fn into_definitions(self) -> Definitions {
        self.definitions
    }

    /// Adds or replaces one definition.
    pub fn define(&mut self, name: impl Into<String>, code: impl Into<String>) -> &mut Self {
        self.definitions.insert(name.into(), code.into());
        self
    }

    /// Adds definitions, overwriting colliding names.
    pub fn extend(&mut self, definitions: impl IntoIterator<Item = (String, String)>) {
        self.definitions.extend(definitions);
    }

    /// Registers this sink on a single compilation.
    ///
    /// If the compilation already has a sink, the definitions are merged into it.
    pub fn register(self, compilation: &mut Compilation) {
        compilation.register_define(self);
    }

    /// Replaces every defined member chain in `source`.
    #[must_use]
    pub fn substitute(&self, source: &str) -> String {
        if self.definitions.is_empty() {
            return source.to_string();
        }

        let mut out = String::with_capacity(source.len());
        // One entry per open `${`, counting the `{` opened inside it.
        let mut templates: Vec<usize> = Vec::new();
        let mut pos = 0;

        while let Some(c) = source[pos..].chars().next() {
            let rest = &source[pos..];

            if c == '`' || (c == '}' && templates.last() == Some(&0)) {
                if c == '}' {
                    templates.pop();
                }
                let (len, interpolation) = template_chunk_len(&rest[1..]);
                if interpolation {
                    templates.push(0);
                }
                out.push_str(&rest[..=len]);
                pos += 1 + len;
                continue;
            }

            let regex_allowed = out.trim_end().chars().next_back().is_none_or(starts_operand);
            if let Some(len) = skipped_len(rest, regex_allowed) {
                out.push_str(&rest[..len]);
                pos += len;
                continue;
            }

            let prev = out.chars().next_back();
            if is_ident_start(c) && !prev.is_some_and(|p| p == '.' || is_ident_part(p)) {
                let (chain_len, segment_ends) = member_chain(rest);
                let chain = &rest[..chain_len];
                let replaced = segment_ends
                    .iter()
                    .rev()
                    .find_map(|&end| self.definitions.get(&chain[..end]).map(|code| (end, code)));

                match replaced {
                    Some((end, code)) => {
                        out.push_str(code);
                        out.push_str(&chain[end..]);
                    }
                    None => out.push_str(chain),
                }
                pos += chain_len;
                continue;
            }

            if let Some(depth) = templates.last_mut() {
                match c {
                    '{' => *depth += 1,
                    '}' => *depth = depth.saturating_sub(1),
                    _ => {}
                }
            }

            out.push(c);
            pos += c.len_utf8();
        }

        out
    }
}

impl Plugin for DefinePlugin {
    fn name(&self) -> &'static str {
        DEFINE_PLUGIN_NAME
    }

    /// Registers the definitions on the compiler; every later compilation
    /// starts with a copy of them.
    fn apply(&self, compiler: &mut Compiler) {
        compiler.register_define(self.clone());
    }
}

const fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

const fn is_ident_part(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

fn ident_len(s: &str) -> usize {
    s.char_indices()
        .find(|&(_, c)| !is_ident_part(c))
        .map_or(s.len(), |(i, _)| i)
}

/// Length of the dotted identifier chain at the start of `s` and the end
/// offset of each segment.
fn member_chain(s: &str) -> (usize, Vec<usize>) {
    let mut end = ident_len(s);
    let mut ends = vec![end];

    while s[end..].starts_with('.')
        && s[end + 1..].chars().next().is_some_and(is_ident_start)
    {
        end += 1 + ident_len(&s[end + 1..]);
        ends.push(end);
    }

    (end, ends)
}

/// True if a `/` after `c` starts a regex literal rather than a division.
const fn starts_operand(c: char) -> bool {
    matches!(
        c,
        '(' | ',' | '=' | ':' | '[' | '!' | '&' | '|' | '?' | '{' | ';' | '+' | '-' | '*' | '%'
            | '<' | '>' | '~' | '^'
    )
}

/// Length of a comment, string or regex literal starting at `s`, if one does.
fn skipped_len(s: &str, regex_allowed: bool) -> Option<usize> {
    if s.starts_with("//") {
        return Some(s.find('\n').unwrap_or(s.len()));
    }
    if s.starts_with("/*") {
        return Some(s[2..].find("*/").map_or(s.len(), |i| i + 4));
    }
    if regex_allowed && s.starts_with('/') {
        return Some(regex_literal_len(s));
    }

    let quote = s.chars().next().filter(|&c| matches!(c, '"' | '\''))?;
    let mut escaped = false;
    for (i, c) in s.char_indices().skip(1) {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            return Some(i + 1);
        }
    }
    Some(s.len())
}

/// Length of the regex literal at the start of `s`, flags included.
///
/// An unterminated literal stops at the end of the line.
fn regex_literal_len(s: &str) -> usize {
    let mut escaped = false;
    let mut in_class = false;
    for (i, c) in s.char_indices().skip(1) {
        match c {
            '\n' => return i,
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '[' => in_class = true,
            ']' => in_class = false,
            '/' if !in_class => return i + 1 + ident_len(&s[i + 1..]),
            _ => {}
        }
    }
    s.len()
}

/// Length of template text up to and including the closing backtick or the
/// next `${`. The flag is true when the text stopped at `${`.
fn template_chunk_len(s: &str) -> (usize, bool) {
    let mut escaped = false;
    for (i, c) in s.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '`' {
            return (i + 1, false);
        } else if c == '$' && s[i + 1..].starts_with('{') {
            return (i + 2, true);
        }
    }
    (s.len(), false)
}
