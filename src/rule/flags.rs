// define-env-rs: Environment Constant Injection for Build Pipelines
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pattern flags, written as JavaScript regex flag letters.
//!
//! ```text
//! g  GLOBAL       accepted, matching is stateless
//! i  IGNORE_CASE  case_insensitive(true)
//! m  MULTI_LINE   multi_line(true)
//! s  DOT_ALL      dot_matches_new_line(true)
//! u  UNICODE      accepted, the engine is Unicode-aware already
//! y  STICKY       match must start at offset 0
//! ```

use std::borrow::Cow;

use bitflags::bitflags;
use regex::{Regex, RegexBuilder};

use crate::error::RuleError;

bitflags! {
    /// Flags controlling how a pattern rule is compiled.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PatternFlags: u8 {
        const GLOBAL = 1 << 0;
        const IGNORE_CASE = 1 << 1;
        const MULTI_LINE = 1 << 2;
        const DOT_ALL = 1 << 3;
        const UNICODE = 1 << 4;
        const STICKY = 1 << 5;
    }
}

impl PatternFlags {
    /// Parses flag letters such as `"i"` or `"gim"`.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::InvalidFlag`] for letters outside `gimsuy` and
    /// [`RuleError::DuplicateFlag`] for repeated letters.
    pub fn parse(letters: &str) -> Result<Self, RuleError> {
        let mut flags = Self::empty();
        for c in letters.chars() {
            let flag = Self::from_letter(c).ok_or_else(|| RuleError::InvalidFlag {
                flag: c,
                flags: letters.to_string(),
            })?;
            if flags.contains(flag) {
                return Err(RuleError::DuplicateFlag {
                    flag: c,
                    flags: letters.to_string(),
                });
            }
            flags |= flag;
        }
        Ok(flags)
    }

    const fn from_letter(c: char) -> Option<Self> {
        match c {
            'g' => Some(Self::GLOBAL),
            'i' => Some(Self::IGNORE_CASE),
            'm' => Some(Self::MULTI_LINE),
            's' => Some(Self::DOT_ALL),
            'u' => Some(Self::UNICODE),
            'y' => Some(Self::STICKY),
            _ => None,
        }
    }

    /// Compiles `source` with these flags.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::Syntax`] if the pattern does not compile.
    pub fn compile(self, source: &str) -> Result<Regex, RuleError> {
        let pattern: Cow<'_, str> = if self.contains(Self::STICKY) {
            Cow::Owned(format!(r"\A(?:{source})"))
        } else {
            Cow::Borrowed(source)
        };

        RegexBuilder::new(&pattern)
            .case_insensitive(self.contains(Self::IGNORE_CASE))
            .multi_line(self.contains(Self::MULTI_LINE))
            .dot_matches_new_line(self.contains(Self::DOT_ALL))
            .build()
            .map_err(|source_err| RuleError::Syntax {
                pattern: source.to_string(),
                source: source_err,
            })
    }

    /// Returns the flags as canonical letters in `gimsuy` order.
    #[must_use]
    pub fn letters(self) -> String {
        [
            (Self::GLOBAL, 'g'),
            (Self::IGNORE_CASE, 'i'),
            (Self::MULTI_LINE, 'm'),
            (Self::DOT_ALL, 's'),
            (Self::UNICODE, 'u'),
            (Self::STICKY, 'y'),
        ]
        .into_iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, c)| c)
        .collect()
    }
}
