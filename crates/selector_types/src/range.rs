//! Numeric ranges.
//!
//! A [`Range`] is either an exact value or an interval with at least one
//! bound. Its canonical text is what the command interpreter expects:
//!
//! ```text
//! Exact(5)        -> 5
//! Between(5, 10)  -> 5..10
//! AtLeast(5)      -> 5..
//! AtMost(10)      -> ..10
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// An exact value or an interval with at least one bound.
///
/// In JSON a range is either a bare number (exact) or an object with
/// optional `min` and `max` fields, at least one of which must be present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RangeRepr", into = "RangeRepr")]
pub enum Range {
    /// A single value.
    Exact(f64),
    /// Both bounds, inclusive.
    Between(f64, f64),
    /// Lower bound only.
    AtLeast(f64),
    /// Upper bound only.
    AtMost(f64),
}

impl Range {
    /// A range matching exactly `value`.
    #[must_use]
    pub fn exact(value: impl Into<f64>) -> Self {
        Range::Exact(value.into())
    }

    /// A range from `min` to `max` inclusive.
    #[must_use]
    pub fn between(min: impl Into<f64>, max: impl Into<f64>) -> Self {
        Range::Between(min.into(), max.into())
    }

    /// A range with only a lower bound.
    #[must_use]
    pub fn at_least(min: impl Into<f64>) -> Self {
        Range::AtLeast(min.into())
    }

    /// A range with only an upper bound.
    #[must_use]
    pub fn at_most(max: impl Into<f64>) -> Self {
        Range::AtMost(max.into())
    }

    /// Builds a range from optional bounds.
    ///
    /// Equal bounds collapse to [`Range::Exact`]. Returns `None` when both
    /// bounds are absent.
    #[must_use]
    pub fn from_bounds(min: Option<f64>, max: Option<f64>) -> Option<Self> {
        match (min, max) {
            (Some(lo), Some(hi)) if lo == hi => Some(Range::Exact(lo)),
            (Some(lo), Some(hi)) => Some(Range::Between(lo, hi)),
            (Some(lo), None) => Some(Range::AtLeast(lo)),
            (None, Some(hi)) => Some(Range::AtMost(hi)),
            (None, None) => None,
        }
    }

    /// Lower bound, if any.
    #[must_use]
    pub fn min(self) -> Option<f64> {
        match self {
            Range::Exact(v) | Range::AtLeast(v) | Range::Between(v, _) => Some(v),
            Range::AtMost(_) => None,
        }
    }

    /// Upper bound, if any.
    #[must_use]
    pub fn max(self) -> Option<f64> {
        match self {
            Range::Exact(v) | Range::AtMost(v) | Range::Between(_, v) => Some(v),
            Range::AtLeast(_) => None,
        }
    }

    /// Returns `true` if every bound is finite. Infinite or NaN bounds have
    /// no command text; the selector formatter rejects them.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.min().is_none_or(f64::is_finite) && self.max().is_none_or(f64::is_finite)
    }
}

/// Maps `-0.0` to `0.0` so it prints as `0`.
///
/// `f64`'s Display already drops the fractional part of integral values
/// (`5.0` prints as `5`), which is the form the interpreter wants.
#[must_use]
pub fn canonical_number(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Range::Exact(v) => write!(f, "{}", canonical_number(v)),
            Range::Between(lo, hi) => {
                write!(f, "{}..{}", canonical_number(lo), canonical_number(hi))
            }
            Range::AtLeast(lo) => write!(f, "{}..", canonical_number(lo)),
            Range::AtMost(hi) => write!(f, "..{}", canonical_number(hi)),
        }
    }
}

impl From<i32> for Range {
    fn from(value: i32) -> Self {
        Range::exact(value)
    }
}

impl From<f64> for Range {
    fn from(value: f64) -> Self {
        Range::Exact(value)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RangeRepr {
    Exact(f64),
    Bounds {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
    },
}

impl TryFrom<RangeRepr> for Range {
    type Error = TypeError;

    fn try_from(repr: RangeRepr) -> Result<Self, Self::Error> {
        match repr {
            RangeRepr::Exact(v) => Ok(Range::Exact(v)),
            RangeRepr::Bounds { min, max } => {
                Range::from_bounds(min, max).ok_or(TypeError::EmptyRange)
            }
        }
    }
}

impl From<Range> for RangeRepr {
    fn from(range: Range) -> Self {
        match range {
            Range::Exact(v) => RangeRepr::Exact(v),
            other => RangeRepr::Bounds {
                min: other.min(),
                max: other.max(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_forms() {
        assert_eq!(Range::exact(5).to_string(), "5");
        assert_eq!(Range::between(5, 10).to_string(), "5..10");
        assert_eq!(Range::at_least(5).to_string(), "5..");
        assert_eq!(Range::at_most(10).to_string(), "..10");
    }

    #[test]
    fn test_fractional_and_negative_bounds() {
        assert_eq!(Range::between(-90, 0.5).to_string(), "-90..0.5");
        assert_eq!(Range::at_most(2.25).to_string(), "..2.25");
    }

    #[test]
    fn test_negative_zero_prints_as_zero() {
        assert_eq!(Range::exact(-0.0).to_string(), "0");
        assert_eq!(Range::between(-0.0, 1).to_string(), "0..1");
        assert_eq!(canonical_number(-0.0).to_string(), "0");
    }

    #[test]
    fn test_is_finite() {
        assert!(Range::between(-5, 5).is_finite());
        assert!(Range::at_most(10).is_finite());
        assert!(!Range::at_most(f64::NEG_INFINITY).is_finite());
        assert!(!Range::at_least(f64::NAN).is_finite());
        assert!(!Range::between(0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_from_bounds() {
        assert_eq!(Range::from_bounds(Some(3.0), Some(3.0)), Some(Range::Exact(3.0)));
        assert_eq!(Range::from_bounds(None, Some(10.0)), Some(Range::AtMost(10.0)));
        assert_eq!(Range::from_bounds(Some(1.0), None), Some(Range::AtLeast(1.0)));
        assert_eq!(Range::from_bounds(None, None), None);
    }

    #[test]
    fn test_json_shapes() {
        let exact: Range = serde_json::from_str("7").unwrap();
        assert_eq!(exact, Range::Exact(7.0));

        let upper: Range = serde_json::from_str(r#"{"max": 5}"#).unwrap();
        assert_eq!(upper.to_string(), "..5");

        let both: Range = serde_json::from_str(r#"{"min": 1, "max": 4}"#).unwrap();
        assert_eq!(both, Range::Between(1.0, 4.0));

        assert_eq!(serde_json::to_string(&Range::at_least(2)).unwrap(), r#"{"min":2.0}"#);
    }

    #[test]
    fn test_json_rejects_unbounded() {
        let result: Result<Range, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }
}
