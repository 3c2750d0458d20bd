//! Three-zone match rules.
//!
//! A [`Pattern`] locates one kind of secret in a file's text: a `prefix`
//! (key name and delimiter), a `value` zone holding the secret, and a
//! `suffix` (closing delimiter). Only the value zone is ever rewritten.

use std::fmt;

use regex::{Captures, Regex};

use crate::core::constants::MASK;
use crate::error::{PatternError, Result};

/// A compiled prefix/value/suffix rule.
///
/// Each fragment is a regex. The fragments are joined into a single regex
/// with named groups, plus a *masked form* whose value zone only matches
/// the literal mask token.
#[derive(Debug, Clone)]
pub struct Pattern {
    prefix: String,
    value: String,
    suffix: String,
    regex: Regex,
    masked: Regex,
}

impl Pattern {
    /// Compile a pattern from its three fragments.
    ///
    /// # Errors
    ///
    /// Returns `PatternError::Invalid` if the fragments don't form a valid regex.
    pub fn new(prefix: &str, value: &str, suffix: &str) -> Result<Self> {
        let regex = compile(prefix, value, suffix)?;
        let masked = compile(prefix, &regex::escape(MASK), suffix)?;

        Ok(Self {
            prefix: prefix.to_string(),
            value: value.to_string(),
            suffix: suffix.to_string(),
            regex,
            masked,
        })
    }

    /// Regex matching any value in the value zone.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Regex matching only zones that currently hold the mask token.
    pub fn masked_form(&self) -> &Regex {
        &self.masked
    }

    /// The prefix fragment.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})({})({})", self.prefix, self.value, self.suffix)
    }
}

fn compile(prefix: &str, value: &str, suffix: &str) -> Result<Regex> {
    let source = format!("(?P<prefix>{prefix})(?P<value>{value})(?P<suffix>{suffix})");
    Regex::new(&source).map_err(|source_err| {
        PatternError::Invalid {
            pattern: source,
            source: source_err,
        }
        .into()
    })
}

/// The three zones of one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zones<'t> {
    pub prefix: &'t str,
    pub value: &'t str,
    pub suffix: &'t str,
}

impl<'t> Zones<'t> {
    /// Split a match of a [`Pattern`] regex into its zones.
    pub fn from_captures(caps: &Captures<'t>) -> Self {
        let zone = |name: &str| caps.name(name).map_or("", |m| m.as_str());
        Self {
            prefix: zone("prefix"),
            value: zone("value"),
            suffix: zone("suffix"),
        }
    }

    /// Whether the value zone already holds the mask token.
    pub fn is_masked(&self) -> bool {
        self.value == MASK
    }
}
