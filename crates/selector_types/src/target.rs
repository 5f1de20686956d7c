//! Selector target kinds.
//!
//! A [`Target`] is the single-letter tag following `@` in a selector. The set
//! is closed: anything else is rejected here, at construction, so the
//! formatter never has to reformat an unknown tag.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// The broad query category of a selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    /// `@p` — the nearest player.
    #[serde(rename = "p")]
    Nearest,
    /// `@r` — a random player.
    #[serde(rename = "r")]
    Random,
    /// `@a` — all players.
    #[serde(rename = "a")]
    Player,
    /// `@e` — all entities.
    #[serde(rename = "e")]
    Entity,
    /// `@s` — the entity executing the command.
    #[serde(rename = "s")]
    Executor,
}

impl Target {
    /// All target kinds, in tag order `p r a e s`.
    pub const ALL: [Target; 5] = [
        Target::Nearest,
        Target::Random,
        Target::Player,
        Target::Entity,
        Target::Executor,
    ];

    /// Returns the single-letter tag for this target.
    #[must_use]
    pub const fn tag(self) -> char {
        match self {
            Target::Nearest => 'p',
            Target::Random => 'r',
            Target::Player => 'a',
            Target::Entity => 'e',
            Target::Executor => 's',
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Target {
    type Err = TypeError;

    /// Parses `"a"` or `"@a"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix('@').unwrap_or(s) {
            "p" => Ok(Target::Nearest),
            "r" => Ok(Target::Random),
            "a" => Ok(Target::Player),
            "e" => Ok(Target::Entity),
            "s" => Ok(Target::Executor),
            _ => Err(TypeError::UnknownTarget(s.to_string())),
        }
    }
}
