//! Selector argument keys and value shapes.
//!
//! Every recognised key accepts exactly one family of [`ArgumentValue`]
//! shapes (see [`ArgumentKey::expected_shape`]). Unknown keys are kept as
//! [`ArgumentKey::Other`] and formatted verbatim.

use std::fmt;

use indexmap::IndexMap;
use selector_types::{Gamemode, Nbt, Range, Sort, canonical_number};

/// The argument map of a selector. Iteration order is insertion order and
/// is the order arguments appear in the formatted output.
pub type Arguments = IndexMap<ArgumentKey, ArgumentValue>;

/// The name of a selector argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArgumentKey {
    X,
    Y,
    Z,
    Dx,
    Dy,
    Dz,
    Distance,
    Limit,
    Sort,
    Scores,
    Level,
    XRotation,
    YRotation,
    Team,
    Gamemode,
    Name,
    Type,
    Tag,
    Predicate,
    Advancements,
    Nbt,
    /// Any key outside the recognised set.
    Other(OtherKey),
}

/// The name of an unrecognised argument.
///
/// Only [`ArgumentKey::parse`] builds one, so it never holds a recognised
/// name and cannot collide with a recognised key in an [`Arguments`] map.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OtherKey(String);

impl OtherKey {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OtherKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl ArgumentKey {
    /// Maps a wire name to its key. Unknown names become [`ArgumentKey::Other`].
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "x" => ArgumentKey::X,
            "y" => ArgumentKey::Y,
            "z" => ArgumentKey::Z,
            "dx" => ArgumentKey::Dx,
            "dy" => ArgumentKey::Dy,
            "dz" => ArgumentKey::Dz,
            "distance" => ArgumentKey::Distance,
            "limit" => ArgumentKey::Limit,
            "sort" => ArgumentKey::Sort,
            "scores" => ArgumentKey::Scores,
            "level" => ArgumentKey::Level,
            "x_rotation" => ArgumentKey::XRotation,
            "y_rotation" => ArgumentKey::YRotation,
            "team" => ArgumentKey::Team,
            "gamemode" => ArgumentKey::Gamemode,
            "name" => ArgumentKey::Name,
            "type" => ArgumentKey::Type,
            "tag" => ArgumentKey::Tag,
            "predicate" => ArgumentKey::Predicate,
            "advancements" => ArgumentKey::Advancements,
            "nbt" => ArgumentKey::Nbt,
            other => ArgumentKey::Other(OtherKey(other.to_string())),
        }
    }

    /// The wire name written before `=`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            ArgumentKey::X => "x",
            ArgumentKey::Y => "y",
            ArgumentKey::Z => "z",
            ArgumentKey::Dx => "dx",
            ArgumentKey::Dy => "dy",
            ArgumentKey::Dz => "dz",
            ArgumentKey::Distance => "distance",
            ArgumentKey::Limit => "limit",
            ArgumentKey::Sort => "sort",
            ArgumentKey::Scores => "scores",
            ArgumentKey::Level => "level",
            ArgumentKey::XRotation => "x_rotation",
            ArgumentKey::YRotation => "y_rotation",
            ArgumentKey::Team => "team",
            ArgumentKey::Gamemode => "gamemode",
            ArgumentKey::Name => "name",
            ArgumentKey::Type => "type",
            ArgumentKey::Tag => "tag",
            ArgumentKey::Predicate => "predicate",
            ArgumentKey::Advancements => "advancements",
            ArgumentKey::Nbt => "nbt",
            ArgumentKey::Other(name) => name.as_str(),
        }
    }

    /// Human-readable description of the value shape this key accepts,
    /// reported in [`SelectorError::MalformedArgument`](crate::SelectorError::MalformedArgument).
    #[must_use]
    pub fn expected_shape(&self) -> &'static str {
        match self {
            ArgumentKey::X
            | ArgumentKey::Y
            | ArgumentKey::Z
            | ArgumentKey::Dx
            | ArgumentKey::Dy
            | ArgumentKey::Dz
            | ArgumentKey::Distance
            | ArgumentKey::Limit
            | ArgumentKey::Sort => "a finite number, string or range",
            ArgumentKey::Scores => "a map of objective to finite range",
            ArgumentKey::Level | ArgumentKey::XRotation | ArgumentKey::YRotation => "a finite range",
            ArgumentKey::Team
            | ArgumentKey::Gamemode
            | ArgumentKey::Name
            | ArgumentKey::Type
            | ArgumentKey::Tag
            | ArgumentKey::Predicate => "a map of name to boolean",
            ArgumentKey::Advancements => {
                "a map of advancement to boolean or map of criterion to boolean"
            }
            ArgumentKey::Nbt => "an NBT compound",
            ArgumentKey::Other(_) => "a scalar or map of name to boolean",
        }
    }
}

impl fmt::Display for ArgumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ArgumentKey {
    fn from(name: &str) -> Self {
        ArgumentKey::parse(name)
    }
}

impl From<String> for ArgumentKey {
    fn from(name: String) -> Self {
        ArgumentKey::parse(&name)
    }
}

/// The state an advancement is matched against.
#[derive(Debug, Clone, PartialEq)]
pub enum Advancement {
    /// The whole advancement is (or is not) completed.
    Done(bool),
    /// Individual criteria are (or are not) met.
    Criteria(IndexMap<String, bool>),
}

impl fmt::Display for Advancement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advancement::Done(done) => write!(f, "{done}"),
            Advancement::Criteria(criteria) => write_braced(f, criteria),
        }
    }
}

/// A selector argument value.
///
/// The variant decides which formatting rules accept the value; see
/// [`ArgumentKey::expected_shape`].
#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentValue {
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
    Range(Range),
    /// Names mapped to match (`true`) or negated match (`false`).
    Flags(IndexMap<String, bool>),
    /// Scoreboard objectives mapped to the score range they must fall in.
    Scores(IndexMap<String, Range>),
    Advancements(IndexMap<String, Advancement>),
    Nbt(Nbt),
}

/// Writes `{k=v,k=v}`.
pub(crate) fn write_braced<V: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    entries: &IndexMap<String, V>,
) -> fmt::Result {
    f.write_str("{")?;
    for (i, (name, value)) in entries.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{name}={value}")?;
    }
    f.write_str("}")
}

impl fmt::Display for ArgumentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentValue::Int(v) => write!(f, "{v}"),
            ArgumentValue::Float(v) => write!(f, "{}", canonical_number(*v)),
            ArgumentValue::Text(v) => f.write_str(v),
            ArgumentValue::Bool(v) => write!(f, "{v}"),
            ArgumentValue::Range(v) => write!(f, "{v}"),
            ArgumentValue::Flags(map) => write_braced(f, map),
            ArgumentValue::Scores(map) => write_braced(f, map),
            ArgumentValue::Advancements(map) => write_braced(f, map),
            ArgumentValue::Nbt(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for ArgumentValue {
    fn from(v: i64) -> Self {
        ArgumentValue::Int(v)
    }
}

impl From<i32> for ArgumentValue {
    fn from(v: i32) -> Self {
        ArgumentValue::Int(i64::from(v))
    }
}

impl From<u32> for ArgumentValue {
    fn from(v: u32) -> Self {
        ArgumentValue::Int(i64::from(v))
    }
}

impl From<f64> for ArgumentValue {
    fn from(v: f64) -> Self {
        ArgumentValue::Float(v)
    }
}

impl From<bool> for ArgumentValue {
    fn from(v: bool) -> Self {
        ArgumentValue::Bool(v)
    }
}

impl From<&str> for ArgumentValue {
    fn from(v: &str) -> Self {
        ArgumentValue::Text(v.to_string())
    }
}

impl From<String> for ArgumentValue {
    fn from(v: String) -> Self {
        ArgumentValue::Text(v)
    }
}

impl From<Range> for ArgumentValue {
    fn from(v: Range) -> Self {
        ArgumentValue::Range(v)
    }
}

impl From<Nbt> for ArgumentValue {
    fn from(v: Nbt) -> Self {
        ArgumentValue::Nbt(v)
    }
}

impl From<Sort> for ArgumentValue {
    fn from(v: Sort) -> Self {
        ArgumentValue::Text(v.as_str().to_string())
    }
}

impl From<Gamemode> for ArgumentValue {
    fn from(v: Gamemode) -> Self {
        ArgumentValue::Text(v.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_parse_roundtrip() {
        for name in [
            "x", "y", "z", "dx", "dy", "dz", "distance", "limit", "sort", "scores", "level",
            "x_rotation", "y_rotation", "team", "gamemode", "name", "type", "tag", "predicate",
            "advancements", "nbt",
        ] {
            let key = ArgumentKey::parse(name);
            assert!(!matches!(key, ArgumentKey::Other(_)), "{name} should be recognised");
            assert_eq!(key.as_str(), name);
        }
    }

    #[test]
    fn test_unknown_key_kept_verbatim() {
        let key = ArgumentKey::from("r");
        assert!(matches!(&key, ArgumentKey::Other(name) if name.as_str() == "r"));
        assert_eq!(key.to_string(), "r");
    }

    #[test]
    fn test_recognised_name_never_becomes_other() {
        assert_eq!(ArgumentKey::from("limit"), ArgumentKey::Limit);
        assert_eq!(ArgumentKey::from("limit".to_string()), ArgumentKey::Limit);
    }

    #[test]
    fn test_value_display() {
        assert_eq!(ArgumentValue::from(3).to_string(), "3");
        assert_eq!(ArgumentValue::from(1.5).to_string(), "1.5");
        assert_eq!(ArgumentValue::from(-0.0).to_string(), "0");
        assert_eq!(ArgumentValue::from(Sort::Random).to_string(), "random");
        assert_eq!(ArgumentValue::from(Range::between(1, 2)).to_string(), "1..2");

        let flags = IndexMap::from([("a".to_string(), true), ("b".to_string(), false)]);
        assert_eq!(ArgumentValue::Flags(flags).to_string(), "{a=true,b=false}");
    }

    #[test]
    fn test_advancement_display() {
        let criteria = IndexMap::from([("c1".to_string(), true)]);
        assert_eq!(Advancement::Done(false).to_string(), "false");
        assert_eq!(Advancement::Criteria(criteria).to_string(), "{c1=true}");
    }
}
