//! The [`Selector`] value and its builder methods.

use indexmap::IndexMap;
use selector_types::{EntityId, Gamemode, Nbt, Range, Sort, Target};

use crate::argument::{Advancement, ArgumentKey, ArgumentValue, Arguments};

/// A target selector: a kind tag plus an ordered set of arguments.
///
/// Formatting borrows the selector immutably, so one value can be formatted
/// any number of times and from several threads at once.
///
/// Setting a key that is already present replaces its value in place: the
/// last write wins and the key keeps its original position.
#[derive(Debug, Clone, PartialEq)]
pub struct Selector {
    /// The selector kind (`@p`, `@a`, ...).
    pub target: Target,
    /// Arguments in output order.
    pub arguments: Arguments,
}

impl Selector {
    /// A selector with no arguments.
    #[must_use]
    pub fn new(target: Target) -> Self {
        Self {
            target,
            arguments: IndexMap::new(),
        }
    }

    /// A selector with a prepared argument map.
    #[must_use]
    pub fn with_arguments(target: Target, arguments: Arguments) -> Self {
        Self { target, arguments }
    }

    /// Sets an argument, replacing any previous value for the key.
    #[must_use]
    pub fn with_argument(
        mut self,
        key: impl Into<ArgumentKey>,
        value: impl Into<ArgumentValue>,
    ) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn x(self, x: f64) -> Self {
        self.with_argument(ArgumentKey::X, x)
    }

    #[must_use]
    pub fn y(self, y: f64) -> Self {
        self.with_argument(ArgumentKey::Y, y)
    }

    #[must_use]
    pub fn z(self, z: f64) -> Self {
        self.with_argument(ArgumentKey::Z, z)
    }

    /// Sets the search volume extents `dx`, `dy`, `dz`.
    #[must_use]
    pub fn volume(self, dx: f64, dy: f64, dz: f64) -> Self {
        self.with_argument(ArgumentKey::Dx, dx)
            .with_argument(ArgumentKey::Dy, dy)
            .with_argument(ArgumentKey::Dz, dz)
    }

    #[must_use]
    pub fn distance(self, distance: Range) -> Self {
        self.with_argument(ArgumentKey::Distance, distance)
    }

    #[must_use]
    pub fn limit(self, limit: u32) -> Self {
        self.with_argument(ArgumentKey::Limit, limit)
    }

    #[must_use]
    pub fn sort(self, sort: Sort) -> Self {
        self.with_argument(ArgumentKey::Sort, sort)
    }

    /// Requires the score for `objective` to fall in `range`.
    #[must_use]
    pub fn score(mut self, objective: impl Into<String>, range: Range) -> Self {
        let entry = self
            .arguments
            .entry(ArgumentKey::Scores)
            .or_insert_with(|| ArgumentValue::Scores(IndexMap::new()));
        match entry {
            ArgumentValue::Scores(scores) => {
                scores.insert(objective.into(), range);
            }
            other => *other = ArgumentValue::Scores(IndexMap::from([(objective.into(), range)])),
        }
        self
    }

    #[must_use]
    pub fn level(self, level: Range) -> Self {
        self.with_argument(ArgumentKey::Level, level)
    }

    #[must_use]
    pub fn x_rotation(self, rotation: Range) -> Self {
        self.with_argument(ArgumentKey::XRotation, rotation)
    }

    #[must_use]
    pub fn y_rotation(self, rotation: Range) -> Self {
        self.with_argument(ArgumentKey::YRotation, rotation)
    }

    #[must_use]
    pub fn team(self, team: impl Into<String>, matches: bool) -> Self {
        self.flag(ArgumentKey::Team, team.into(), matches)
    }

    #[must_use]
    pub fn gamemode(self, gamemode: Gamemode, matches: bool) -> Self {
        self.flag(ArgumentKey::Gamemode, gamemode.as_str().to_string(), matches)
    }

    #[must_use]
    pub fn name(self, name: impl Into<String>, matches: bool) -> Self {
        self.flag(ArgumentKey::Name, name.into(), matches)
    }

    #[must_use]
    pub fn entity_type(self, entity: EntityId, matches: bool) -> Self {
        self.flag(ArgumentKey::Type, entity.to_string(), matches)
    }

    #[must_use]
    pub fn tag(self, tag: impl Into<String>, matches: bool) -> Self {
        self.flag(ArgumentKey::Tag, tag.into(), matches)
    }

    #[must_use]
    pub fn predicate(self, predicate: impl Into<String>, matches: bool) -> Self {
        self.flag(ArgumentKey::Predicate, predicate.into(), matches)
    }

    /// Requires the advancement to be completed (`true`) or not (`false`).
    #[must_use]
    pub fn advancement(self, advancement: impl Into<String>, done: bool) -> Self {
        self.map_advancements(|map| {
            map.insert(advancement.into(), Advancement::Done(done));
        })
    }

    /// Requires a single criterion of an advancement to be met or unmet.
    /// Replaces a whole-advancement requirement for the same advancement.
    #[must_use]
    pub fn advancement_criterion(
        self,
        advancement: impl Into<String>,
        criterion: impl Into<String>,
        met: bool,
    ) -> Self {
        self.map_advancements(|map| {
            let entry = map
                .entry(advancement.into())
                .or_insert_with(|| Advancement::Criteria(IndexMap::new()));
            match entry {
                Advancement::Criteria(criteria) => {
                    criteria.insert(criterion.into(), met);
                }
                done => *done = Advancement::Criteria(IndexMap::from([(criterion.into(), met)])),
            }
        })
    }

    #[must_use]
    pub fn nbt(self, nbt: Nbt) -> Self {
        self.with_argument(ArgumentKey::Nbt, nbt)
    }

    fn flag(mut self, key: ArgumentKey, name: String, matches: bool) -> Self {
        let entry = self
            .arguments
            .entry(key)
            .or_insert_with(|| ArgumentValue::Flags(IndexMap::new()));
        match entry {
            ArgumentValue::Flags(flags) => {
                flags.insert(name, matches);
            }
            other => *other = ArgumentValue::Flags(IndexMap::from([(name, matches)])),
        }
        self
    }

    fn map_advancements(mut self, f: impl FnOnce(&mut IndexMap<String, Advancement>)) -> Self {
        let entry = self
            .arguments
            .entry(ArgumentKey::Advancements)
            .or_insert_with(|| ArgumentValue::Advancements(IndexMap::new()));
        if !matches!(entry, ArgumentValue::Advancements(_)) {
            *entry = ArgumentValue::Advancements(IndexMap::new());
        }
        if let ArgumentValue::Advancements(map) = entry {
            f(map);
        }
        self
    }
}
