//! NBT values and their SNBT text form.
//!
//! The selector formatter treats [`Nbt`] as opaque: it only ever writes the
//! value's `Display` output after `nbt=`. The text follows stringified NBT:
//!
//! ```text
//! {Health:20.0f,Tags:["a","b"],Pos:[I;1,2,3],Name:"Steve"}
//! ```

use std::fmt;

use indexmap::IndexMap;

/// A structured NBT value.
#[derive(Debug, Clone, PartialEq)]
pub enum Nbt {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    List(Vec<Nbt>),
    /// Named fields, written in insertion order.
    Compound(IndexMap<String, Nbt>),
    ByteArray(Vec<i8>),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl Nbt {
    /// An empty compound, ready for [`Nbt::with`].
    #[must_use]
    pub fn compound() -> Self {
        Nbt::Compound(IndexMap::new())
    }

    /// Adds a field to a compound, replacing any previous field of the same
    /// name in place. Non-compound values are returned unchanged.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Nbt>) -> Self {
        if let Nbt::Compound(fields) = &mut self {
            fields.insert(key.into(), value.into());
        }
        self
    }
}

impl From<i8> for Nbt {
    fn from(v: i8) -> Self {
        Nbt::Byte(v)
    }
}

impl From<i16> for Nbt {
    fn from(v: i16) -> Self {
        Nbt::Short(v)
    }
}

impl From<i32> for Nbt {
    fn from(v: i32) -> Self {
        Nbt::Int(v)
    }
}

impl From<i64> for Nbt {
    fn from(v: i64) -> Self {
        Nbt::Long(v)
    }
}

impl From<f32> for Nbt {
    fn from(v: f32) -> Self {
        Nbt::Float(v)
    }
}

impl From<f64> for Nbt {
    fn from(v: f64) -> Self {
        Nbt::Double(v)
    }
}

impl From<bool> for Nbt {
    fn from(v: bool) -> Self {
        Nbt::Byte(i8::from(v))
    }
}

impl From<&str> for Nbt {
    fn from(v: &str) -> Self {
        Nbt::String(v.to_string())
    }
}

impl From<String> for Nbt {
    fn from(v: String) -> Self {
        Nbt::String(v)
    }
}

impl From<Vec<Nbt>> for Nbt {
    fn from(v: Vec<Nbt>) -> Self {
        Nbt::List(v)
    }
}

fn is_bare_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '+'))
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            _ => write!(f, "{c}")?,
        }
    }
    f.write_str("\"")
}

fn write_array<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    prefix: char,
    suffix: &str,
    items: &[T],
) -> fmt::Result {
    write!(f, "[{prefix};")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{item}{suffix}")?;
    }
    f.write_str("]")
}

impl fmt::Display for Nbt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nbt::Byte(v) => write!(f, "{v}b"),
            Nbt::Short(v) => write!(f, "{v}s"),
            Nbt::Int(v) => write!(f, "{v}"),
            Nbt::Long(v) => write!(f, "{v}L"),
            Nbt::Float(v) => write!(f, "{v}f"),
            Nbt::Double(v) => write!(f, "{v}d"),
            Nbt::String(s) => write_quoted(f, s),
            Nbt::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Nbt::Compound(fields) => {
                f.write_str("{")?;
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    if is_bare_key(key) {
                        f.write_str(key)?;
                    } else {
                        write_quoted(f, key)?;
                    }
                    write!(f, ":{value}")?;
                }
                f.write_str("}")
            }
            Nbt::ByteArray(items) => write_array(f, 'B', "b", items),
            Nbt::IntArray(items) => write_array(f, 'I', "", items),
            Nbt::LongArray(items) => write_array(f, 'L', "L", items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_suffixes() {
        assert_eq!(Nbt::Byte(1).to_string(), "1b");
        assert_eq!(Nbt::Short(-3).to_string(), "-3s");
        assert_eq!(Nbt::Int(42).to_string(), "42");
        assert_eq!(Nbt::Long(7).to_string(), "7L");
        assert_eq!(Nbt::Float(0.5).to_string(), "0.5f");
        assert_eq!(Nbt::Double(20.0).to_string(), "20d");
    }

    #[test]
    fn test_string_escaping() {
        assert_eq!(Nbt::from(r#"say "hi" \o/"#).to_string(), r#""say \"hi\" \\o/""#);
    }

    #[test]
    fn test_compound_preserves_order_and_quotes_keys() {
        let nbt = Nbt::compound()
            .with("OnGround", true)
            .with("custom name", "Bob")
            .with("Tags", vec![Nbt::from("a"), Nbt::from("b")]);
        assert_eq!(nbt.to_string(), r#"{OnGround:1b,"custom name":"Bob",Tags:["a","b"]}"#);
    }

    #[test]
    fn test_with_replaces_in_place() {
        let nbt = Nbt::compound().with("a", 1).with("b", 2).with("a", 3);
        assert_eq!(nbt.to_string(), "{a:3,b:2}");
    }

    #[test]
    fn test_typed_arrays() {
        assert_eq!(Nbt::ByteArray(vec![1, 2]).to_string(), "[B;1b,2b]");
        assert_eq!(Nbt::IntArray(vec![1, -2, 3]).to_string(), "[I;1,-2,3]");
        assert_eq!(Nbt::LongArray(vec![]).to_string(), "[L;]");
    }

    #[test]
    fn test_nested_compound() {
        let nbt = Nbt::compound().with("Item", Nbt::compound().with("id", "minecraft:diamond"));
        assert_eq!(nbt.to_string(), r#"{Item:{id:"minecraft:diamond"}}"#);
    }
}
