//! Selector formatting and loading errors.

use selector_types::TypeError;

/// Errors that can occur while formatting or loading a selector.
///
/// An unrecognised argument key is deliberately not an error: it is
/// formatted verbatim as `key=value`.
#[derive(Debug, thiserror::Error)]
pub enum SelectorError {
    /// The value stored under a recognised key does not have the shape that
    /// key's formatting rule accepts.
    #[error("malformed argument `{key}`: expected {expected}")]
    MalformedArgument {
        /// Wire name of the offending key.
        key: String,
        /// Description of the accepted shape.
        expected: &'static str,
    },

    /// A selector document named an unknown target kind.
    #[error(transparent)]
    Target(#[from] TypeError),

    /// A selector document is not valid JSON or has the wrong layout.
    #[error("invalid selector document: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing streamed fragments to the sink failed.
    #[error("failed to write selector: {0}")]
    Io(#[from] std::io::Error),
}

impl SelectorError {
    pub(crate) fn malformed(key: &str, expected: &'static str) -> Self {
        SelectorError::MalformedArgument {
            key: key.to_string(),
            expected,
        }
    }
}
