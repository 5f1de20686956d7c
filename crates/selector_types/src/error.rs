//! Construction errors for selector value types.

/// Errors raised when a value type cannot be built from its textual or
/// serialised form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    /// The selector kind tag is not one of `p`, `r`, `a`, `e`, `s`.
    #[error("unknown selector target: {0:?}")]
    UnknownTarget(String),

    /// The entity type identifier is not a known vanilla entity.
    #[error("unknown entity type: {0:?}")]
    UnknownEntity(String),

    /// The sort order is not one of `nearest`, `furthest`, `random`, `arbitrary`.
    #[error("unknown sort order: {0:?}")]
    UnknownSort(String),

    /// The gamemode is not one of the four vanilla gamemodes.
    #[error("unknown gamemode: {0:?}")]
    UnknownGamemode(String),

    /// A range was given with neither a lower nor an upper bound.
    #[error("range must have at least one bound")]
    EmptyRange,
}
