//! Mask and unmask transforms over in-memory text.
//!
//! Both directions walk the patterns in table order and, within a pattern,
//! the matches left to right. That order is the only link between a mask
//! token in the file and its entry in the store, so it must be identical
//! in both directions.

use std::collections::VecDeque;

use regex::Regex;

use crate::core::constants::MASK;
use crate::core::pattern::{Pattern, Zones};
use crate::core::types::SecretValue;

/// Result of masking one file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Masked {
    pub content: String,
    /// Captured originals in scan order.
    pub secrets: Vec<SecretValue>,
}

/// Result of unmasking one file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unmasked {
    pub content: String,
    /// Number of mask tokens replaced.
    pub restored: usize,
    /// Stored values left over after every mask token was consumed.
    pub remaining: VecDeque<SecretValue>,
}

/// Replace every unmasked value zone with the mask token.
///
/// Zones that already hold the mask token are left alone and not captured,
/// so masking twice is the same as masking once.
pub fn mask(content: &str, patterns: &[Pattern]) -> Masked {
    let (content, secrets) = patterns.iter().fold(
        (content.to_string(), Vec::new()),
        |(text, secrets), pattern| {
            rewrite(pattern.regex(), &text, secrets, |mut secrets, zones| {
                if zones.is_masked() {
                    return (secrets, None);
                }
                secrets.push(zones.value.to_string());
                (secrets, Some(MASK.to_string()))
            })
        },
    );

    Masked { content, secrets }
}

/// Put stored values back in place of mask tokens, front of the queue first.
///
/// Once the queue runs dry, any further mask tokens stay as they are.
pub fn unmask(content: &str, patterns: &[Pattern], secrets: VecDeque<SecretValue>) -> Unmasked {
    let stored = secrets.len();
    let (content, remaining) = patterns.iter().fold(
        (content.to_string(), secrets),
        |(text, queue), pattern| {
            rewrite(pattern.masked_form(), &text, queue, |mut queue, _| {
                let value = queue.pop_front();
                (queue, value)
            })
        },
    );

    Unmasked {
        content,
        restored: stored - remaining.len(),
        remaining,
    }
}

/// Number of mask tokens the patterns would try to restore.
pub fn count_masked(content: &str, patterns: &[Pattern]) -> usize {
    patterns
        .iter()
        .map(|pattern| pattern.masked_form().find_iter(content).count())
        .sum()
}

/// Rebuild `text`, letting `step` decide each match's new value zone.
///
/// `step` receives the accumulator and the match zones and returns the
/// updated accumulator plus either a replacement value (prefix and suffix
/// are kept) or `None` to leave the match untouched.
fn rewrite<S>(
    regex: &Regex,
    text: &str,
    init: S,
    step: impl Fn(S, Zones<'_>) -> (S, Option<String>),
) -> (String, S) {
    let (mut out, tail, state) = regex.captures_iter(text).fold(
        (String::with_capacity(text.len()), 0, init),
        |(mut out, last, state), caps| {
            let Some(whole) = caps.get(0) else {
                return (out, last, state);
            };
            let zones = Zones::from_captures(&caps);
            let (state, replacement) = step(state, zones);

            out.push_str(&text[last..whole.start()]);
            match replacement {
                Some(value) => {
                    out.push_str(zones.prefix);
                    out.push_str(&value);
                    out.push_str(zones.suffix);
                }
                None => out.push_str(whole.as_str()),
            }
            (out, whole.end(), state)
        },
    );
    out.push_str(&text[tail..]);
    (out, state)
}
