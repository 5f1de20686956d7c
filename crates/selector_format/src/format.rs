//! Selector formatting.
//!
//! Each [`ArgumentKey`] maps to one rule in a closed table ([`rule_for`]).
//! A rule turns the key's value into zero or more segments, or rejects a
//! value of the wrong shape with [`SelectorError::MalformedArgument`].
//!
//! [`Fragments`] assembles segments into the final text:
//!
//! ```text
//! @<kind>                      no arguments
//! @<kind>[<seg>,<seg>,...]     at least one key present
//! ```
//!
//! A key present with zero segments (an empty `scores` map) still opens the
//! brackets, so `@a` with only `scores={}` formats as `@a[]`.
//!
//! [`Selector::format`] is the concatenation of [`Selector::format_streaming`];
//! the two cannot disagree.

use std::borrow::Cow;
use std::io;
use std::iter::FusedIterator;

use indexmap::IndexMap;
use indexmap::map::Iter;
use tracing::{debug, trace};

use crate::argument::{ArgumentKey, ArgumentValue};
use crate::error::SelectorError;
use crate::selector::Selector;

/// A formatting rule: `(key name, value) -> segments`.
pub type Rule = fn(&ArgumentKey, &ArgumentValue) -> Result<Vec<String>, SelectorError>;

/// Looks up the formatting rule for a key.
#[must_use]
pub fn rule_for(key: &ArgumentKey) -> Rule {
    match key {
        ArgumentKey::X
        | ArgumentKey::Y
        | ArgumentKey::Z
        | ArgumentKey::Dx
        | ArgumentKey::Dy
        | ArgumentKey::Dz
        | ArgumentKey::Distance
        | ArgumentKey::Limit
        | ArgumentKey::Sort => format_scalar,
        ArgumentKey::Scores => format_scores,
        ArgumentKey::Level | ArgumentKey::XRotation | ArgumentKey::YRotation => format_range,
        ArgumentKey::Team
        | ArgumentKey::Gamemode
        | ArgumentKey::Name
        | ArgumentKey::Type
        | ArgumentKey::Tag
        | ArgumentKey::Predicate => format_flags,
        ArgumentKey::Advancements => format_advancements,
        ArgumentKey::Nbt => format_nbt,
        ArgumentKey::Other(_) => format_verbatim,
    }
}

/// Formats one argument into its segments.
///
/// # Errors
///
/// Returns [`SelectorError::MalformedArgument`] if `value` does not have a
/// shape the key's rule accepts.
pub fn key_segments(
    key: &ArgumentKey,
    value: &ArgumentValue,
) -> Result<Vec<String>, SelectorError> {
    rule_for(key)(key, value)
}

fn malformed(key: &ArgumentKey) -> SelectorError {
    SelectorError::malformed(key.as_str(), key.expected_shape())
}

fn format_scalar(key: &ArgumentKey, value: &ArgumentValue) -> Result<Vec<String>, SelectorError> {
    match value {
        ArgumentValue::Float(v) if !v.is_finite() => Err(malformed(key)),
        ArgumentValue::Range(range) if !range.is_finite() => Err(malformed(key)),
        ArgumentValue::Int(_)
        | ArgumentValue::Float(_)
        | ArgumentValue::Text(_)
        | ArgumentValue::Range(_) => Ok(vec![format!("{key}={value}")]),
        _ => Err(malformed(key)),
    }
}

fn format_scores(key: &ArgumentKey, value: &ArgumentValue) -> Result<Vec<String>, SelectorError> {
    match value {
        ArgumentValue::Scores(scores) if scores.values().any(|r| !r.is_finite()) => {
            Err(malformed(key))
        }
        ArgumentValue::Scores(scores) if scores.is_empty() => Ok(Vec::new()),
        ArgumentValue::Scores(_) => Ok(vec![format!("{key}={value}")]),
        _ => Err(malformed(key)),
    }
}

fn format_range(key: &ArgumentKey, value: &ArgumentValue) -> Result<Vec<String>, SelectorError> {
    match value {
        ArgumentValue::Range(range) if range.is_finite() => Ok(vec![format!("{key}={range}")]),
        _ => Err(malformed(key)),
    }
}

fn format_flags(key: &ArgumentKey, value: &ArgumentValue) -> Result<Vec<String>, SelectorError> {
    match value {
        ArgumentValue::Flags(flags) => Ok(flag_segments(key.as_str(), flags)),
        _ => Err(malformed(key)),
    }
}

/// `{a: true, b: false}` under `tag` becomes `tag=a`, `tag=!b`.
fn flag_segments(key: &str, flags: &IndexMap<String, bool>) -> Vec<String> {
    flags
        .iter()
        .map(|(name, matches)| {
            let negate = if *matches { "" } else { "!" };
            format!("{key}={negate}{name}")
        })
        .collect()
}

fn format_advancements(
    key: &ArgumentKey,
    value: &ArgumentValue,
) -> Result<Vec<String>, SelectorError> {
    match value {
        ArgumentValue::Advancements(map) if map.is_empty() => Ok(Vec::new()),
        ArgumentValue::Advancements(_) => Ok(vec![format!("{key}={value}")]),
        _ => Err(malformed(key)),
    }
}

fn format_nbt(key: &ArgumentKey, value: &ArgumentValue) -> Result<Vec<String>, SelectorError> {
    match value {
        ArgumentValue::Nbt(nbt) => Ok(vec![format!("{key}={nbt}")]),
        _ => Err(malformed(key)),
    }
}

// Unknown keys are passed through rather than rejected, so new interpreter
// arguments work without a release. Typos are not caught, and neither are
// non-finite numbers.
fn format_verbatim(
    key: &ArgumentKey,
    value: &ArgumentValue,
) -> Result<Vec<String>, SelectorError> {
    debug!(key = key.as_str(), "formatting unrecognised selector argument verbatim");
    Ok(vec![format!("{key}={value}")])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Target,
    Open,
    Body,
    Done,
}

/// Lazily produced selector fragments.
///
/// Yields, in order: the target (`@a`), `[` when any argument key is
/// present, each segment with `,` between segments, and `]`. A key's
/// segments are computed only when the stream reaches that key.
///
/// On a malformed argument the iterator yields the error once and then
/// ends. Fragments already yielded for that selector must be discarded.
#[derive(Debug)]
pub struct Fragments<'a> {
    selector: &'a Selector,
    stage: Stage,
    keys: Iter<'a, ArgumentKey, ArgumentValue>,
    pending: std::vec::IntoIter<String>,
    held: Option<String>,
    wrote_segment: bool,
}

impl<'a> Fragments<'a> {
    fn new(selector: &'a Selector) -> Self {
        Self {
            selector,
            stage: Stage::Target,
            keys: selector.arguments.iter(),
            pending: Vec::new().into_iter(),
            held: None,
            wrote_segment: false,
        }
    }

    fn next_body(&mut self) -> Option<Result<Cow<'static, str>, SelectorError>> {
        loop {
            if let Some(segment) = self.held.take() {
                return Some(Ok(Cow::Owned(segment)));
            }
            if let Some(segment) = self.pending.next() {
                if self.wrote_segment {
                    self.held = Some(segment);
                    return Some(Ok(Cow::Borrowed(",")));
                }
                self.wrote_segment = true;
                return Some(Ok(Cow::Owned(segment)));
            }
            let Some((key, value)) = self.keys.next() else {
                self.stage = Stage::Done;
                return Some(Ok(Cow::Borrowed("]")));
            };
            match key_segments(key, value) {
                Ok(segments) => {
                    if segments.is_empty() {
                        debug!(key = key.as_str(), "selector argument produced no segments");
                    }
                    self.pending = segments.into_iter();
                }
                Err(e) => {
                    self.stage = Stage::Done;
                    return Some(Err(e));
                }
            }
        }
    }
}

impl Iterator for Fragments<'_> {
    type Item = Result<Cow<'static, str>, SelectorError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.stage {
            Stage::Target => {
                self.stage = if self.selector.arguments.is_empty() {
                    Stage::Done
                } else {
                    Stage::Open
                };
                Some(Ok(Cow::Owned(format!("@{}", self.selector.target))))
            }
            Stage::Open => {
                self.stage = Stage::Body;
                Some(Ok(Cow::Borrowed("[")))
            }
            Stage::Body => self.next_body(),
            Stage::Done => None,
        }
    }
}

impl FusedIterator for Fragments<'_> {}

impl Selector {
    /// Formats the whole selector into one string.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::MalformedArgument`] naming the first key
    /// whose value has the wrong shape. No partial output is returned.
    pub fn format(&self) -> Result<String, SelectorError> {
        trace!(
            target_kind = %self.target,
            arguments = self.arguments.len(),
            "formatting selector"
        );
        self.format_streaming().collect()
    }

    /// Starts a fresh fragment stream for this selector.
    ///
    /// Concatenating every fragment equals [`Selector::format`].
    #[must_use]
    pub fn format_streaming(&self) -> Fragments<'_> {
        Fragments::new(self)
    }

    /// Formats every argument into its segments, in output order, without
    /// the target or brackets.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::MalformedArgument`] for the first malformed
    /// argument.
    pub fn segments(&self) -> Result<Vec<String>, SelectorError> {
        let mut out = Vec::new();
        for (key, value) in &self.arguments {
            out.extend(key_segments(key, value)?);
        }
        Ok(out)
    }

    /// Streams fragments into `writer` as they are produced.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::MalformedArgument`] on a malformed argument
    /// (fragments before it have already been written) or
    /// [`SelectorError::Io`] if the writer fails.
    pub fn write_to<W: io::Write>(&self, mut writer: W) -> Result<(), SelectorError> {
        for fragment in self.format_streaming() {
            writer.write_all(fragment?.as_bytes())?;
        }
        Ok(())
    }
}
