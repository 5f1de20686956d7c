//! Enumerated selector argument values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Ordering applied before `limit` truncates the match list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sort {
    Nearest,
    Furthest,
    Random,
    Arbitrary,
}

impl Sort {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Sort::Nearest => "nearest",
            Sort::Furthest => "furthest",
            Sort::Random => "random",
            Sort::Arbitrary => "arbitrary",
        }
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sort {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nearest" => Ok(Sort::Nearest),
            "furthest" => Ok(Sort::Furthest),
            "random" => Ok(Sort::Random),
            "arbitrary" => Ok(Sort::Arbitrary),
            _ => Err(TypeError::UnknownSort(s.to_string())),
        }
    }
}

/// A player gamemode, as matched by the `gamemode` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gamemode {
    Spectator,
    Adventure,
    Creative,
    Survival,
}

impl Gamemode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Gamemode::Spectator => "spectator",
            Gamemode::Adventure => "adventure",
            Gamemode::Creative => "creative",
            Gamemode::Survival => "survival",
        }
    }
}

impl fmt::Display for Gamemode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gamemode {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spectator" => Ok(Gamemode::Spectator),
            "adventure" => Ok(Gamemode::Adventure),
            "creative" => Ok(Gamemode::Creative),
            "survival" => Ok(Gamemode::Survival),
            _ => Err(TypeError::UnknownGamemode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_text() {
        assert_eq!(Sort::Nearest.to_string(), "nearest");
        assert_eq!("arbitrary".parse::<Sort>(), Ok(Sort::Arbitrary));
        assert_eq!(
            "closest".parse::<Sort>(),
            Err(TypeError::UnknownSort("closest".to_string()))
        );
    }

    #[test]
    fn test_gamemode_text() {
        assert_eq!(Gamemode::Spectator.to_string(), "spectator");
        assert_eq!("survival".parse::<Gamemode>(), Ok(Gamemode::Survival));
        assert!("hardcore".parse::<Gamemode>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Sort::Furthest).unwrap(), "\"furthest\"");
        let mode: Gamemode = serde_json::from_str("\"creative\"").unwrap();
        assert_eq!(mode, Gamemode::Creative);
    }
}
