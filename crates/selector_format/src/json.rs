//! Loading selectors from JSON documents.
//!
//! A document mirrors the selector's shape:
//!
//! ```json
//! {
//!   "target": "a",
//!   "arguments": {
//!     "distance": { "max": 5 },
//!     "tag": { "vip": true },
//!     "limit": 1,
//!     "sort": "nearest"
//!   }
//! }
//! ```
//!
//! Argument order in the document is the output order. Each recognised key
//! converts its JSON value into the single shape its formatting rule
//! accepts; anything else is [`SelectorError::MalformedArgument`].

use indexmap::IndexMap;
use selector_types::{Nbt, Range, Target};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::argument::{Advancement, ArgumentKey, ArgumentValue, Arguments};
use crate::error::SelectorError;
use crate::selector::Selector;

#[derive(Debug, Deserialize)]
struct SelectorDocument {
    target: String,
    #[serde(default)]
    arguments: Map<String, Value>,
}

impl Selector {
    /// Parses a single selector document.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::Json`] for invalid JSON,
    /// [`SelectorError::Target`] for an unknown target tag and
    /// [`SelectorError::MalformedArgument`] for a value of the wrong shape.
    pub fn from_json_str(json: &str) -> Result<Self, SelectorError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json_value(value)
    }

    /// Converts an already-parsed selector document.
    ///
    /// # Errors
    ///
    /// See [`Selector::from_json_str`].
    pub fn from_json_value(value: Value) -> Result<Self, SelectorError> {
        let doc: SelectorDocument = serde_json::from_value(value)?;
        let target: Target = doc.target.parse()?;
        let mut arguments = Arguments::with_capacity(doc.arguments.len());
        for (name, value) in &doc.arguments {
            let key = ArgumentKey::parse(name);
            let value = argument_from_json(&key, value)?;
            arguments.insert(key, value);
        }
        Ok(Selector::with_arguments(target, arguments))
    }
}

/// Parses either one selector document or an array of them.
///
/// # Errors
///
/// See [`Selector::from_json_str`]; the first failing document aborts.
pub fn selectors_from_json_str(json: &str) -> Result<Vec<Selector>, SelectorError> {
    match serde_json::from_str::<Value>(json)? {
        Value::Array(docs) => docs.into_iter().map(Selector::from_json_value).collect(),
        doc => Ok(vec![Selector::from_json_value(doc)?]),
    }
}

/// Converts a JSON value into the shape `key` accepts.
///
/// # Errors
///
/// Returns [`SelectorError::MalformedArgument`] naming `key` when the value
/// has the wrong shape.
pub fn argument_from_json(key: &ArgumentKey, value: &Value) -> Result<ArgumentValue, SelectorError> {
    let malformed = || SelectorError::malformed(key.as_str(), key.expected_shape());
    match key {
        ArgumentKey::X
        | ArgumentKey::Y
        | ArgumentKey::Z
        | ArgumentKey::Dx
        | ArgumentKey::Dy
        | ArgumentKey::Dz
        | ArgumentKey::Distance
        | ArgumentKey::Limit
        | ArgumentKey::Sort => match value {
            Value::Object(_) => range_from_json(value)
                .map(ArgumentValue::Range)
                .ok_or_else(malformed),
            other => scalar_from_json(other).ok_or_else(malformed),
        },
        ArgumentKey::Scores => {
            let object = value.as_object().ok_or_else(malformed)?;
            let mut scores = IndexMap::with_capacity(object.len());
            for (objective, range) in object {
                scores.insert(objective.clone(), range_from_json(range).ok_or_else(malformed)?);
            }
            Ok(ArgumentValue::Scores(scores))
        }
        ArgumentKey::Level | ArgumentKey::XRotation | ArgumentKey::YRotation => range_from_json(value)
            .map(ArgumentValue::Range)
            .ok_or_else(malformed),
        ArgumentKey::Team
        | ArgumentKey::Gamemode
        | ArgumentKey::Name
        | ArgumentKey::Type
        | ArgumentKey::Tag
        | ArgumentKey::Predicate => flags_from_json(value)
            .map(ArgumentValue::Flags)
            .ok_or_else(malformed),
        ArgumentKey::Advancements => {
            let object = value.as_object().ok_or_else(malformed)?;
            let mut advancements = IndexMap::with_capacity(object.len());
            for (name, state) in object {
                let state = match state {
                    Value::Bool(done) => Advancement::Done(*done),
                    other => Advancement::Criteria(flags_from_json(other).ok_or_else(malformed)?),
                };
                advancements.insert(name.clone(), state);
            }
            Ok(ArgumentValue::Advancements(advancements))
        }
        ArgumentKey::Nbt => match value {
            Value::Object(_) => nbt_from_json(value)
                .map(ArgumentValue::Nbt)
                .ok_or_else(malformed),
            _ => Err(malformed()),
        },
        ArgumentKey::Other(_) => match value {
            Value::Object(_) => flags_from_json(value)
                .map(ArgumentValue::Flags)
                .ok_or_else(malformed),
            Value::Bool(b) => Ok(ArgumentValue::Bool(*b)),
            other => scalar_from_json(other).ok_or_else(malformed),
        },
    }
}

fn scalar_from_json(value: &Value) -> Option<ArgumentValue> {
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(ArgumentValue::Int(i)),
            None => n.as_f64().map(ArgumentValue::Float),
        },
        Value::String(s) => Some(ArgumentValue::Text(s.clone())),
        _ => None,
    }
}

fn range_from_json(value: &Value) -> Option<Range> {
    Range::deserialize(value).ok()
}

fn flags_from_json(value: &Value) -> Option<IndexMap<String, bool>> {
    value
        .as_object()?
        .iter()
        .map(|(name, v)| v.as_bool().map(|b| (name.clone(), b)))
        .collect()
}

fn nbt_from_json(value: &Value) -> Option<Nbt> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(Nbt::from(*b)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i32::try_from(i).map_or(Nbt::Long(i), Nbt::Int))
            } else {
                n.as_f64().map(Nbt::Double)
            }
        }
        Value::String(s) => Some(Nbt::String(s.clone())),
        Value::Array(items) => items.iter().map(nbt_from_json).collect::<Option<Vec<_>>>().map(Nbt::List),
        Value::Object(fields) => fields
            .iter()
            .map(|(k, v)| nbt_from_json(v).map(|v| (k.clone(), v)))
            .collect::<Option<IndexMap<_, _>>>()
            .map(Nbt::Compound),
    }
}
