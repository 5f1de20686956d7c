//! # selector_types
//!
//! Value types consumed by the selector formatter. Each type owns its
//! canonical string form; the formatter only ever calls `Display` on them.
//!
//! This crate provides:
//!
//! - [`Target`] — the closed set of selector kind tags (`@p`, `@a`, ...).
//! - [`Range`] — exact values and open/closed numeric intervals.
//! - [`Nbt`] — structured NBT values rendered as SNBT.
//! - [`EntityId`] — the vanilla entity type identifiers.
//! - [`Sort`] and [`Gamemode`] — typed helpers for enumerated arguments.
//! - [`TypeError`] — construction errors for all of the above.

pub mod entity_id;
pub mod error;
pub mod nbt;
pub mod options;
pub mod range;
pub mod target;

pub use entity_id::EntityId;
pub use error::TypeError;
pub use nbt::Nbt;
pub use options::{Gamemode, Sort};
pub use range::{Range, canonical_number};
pub use target::Target;
