//! # selector_format
//!
//! Serialises target selectors (`@a[tag=vip,limit=1]`) into the exact text a
//! command interpreter consumes.
//!
//! This crate provides:
//!
//! - [`Selector`] — a target kind plus an insertion-ordered argument map,
//!   with typed builder methods for every recognised argument.
//! - [`ArgumentKey`] / [`ArgumentValue`] — the argument names and the value
//!   shapes they carry.
//! - [`format`] — the per-key formatting table and the two production modes:
//!   [`Selector::format`] (whole string) and [`Selector::format_streaming`]
//!   (one fragment at a time). Both run the same algorithm, so concatenating
//!   the stream always equals the eager result.
//! - [`json`] — loading selectors from JSON documents.
//! - [`SelectorError`] — formatting and loading errors.
//!
//! ## Usage
//!
//! ```rust
//! use selector_format::Selector;
//! use selector_types::{Range, Sort, Target};
//!
//! let selector = Selector::new(Target::Player)
//!     .distance(Range::at_most(5))
//!     .tag("vip", true)
//!     .limit(1)
//!     .sort(Sort::Nearest);
//!
//! assert_eq!(
//!     selector.format().unwrap(),
//!     "@a[distance=..5,tag=vip,limit=1,sort=nearest]"
//! );
//! ```

pub mod argument;
pub mod error;
pub mod format;
pub mod json;
pub mod selector;

pub use argument::{Advancement, ArgumentKey, ArgumentValue, Arguments, OtherKey};
pub use error::SelectorError;
pub use format::Fragments;
pub use json::selectors_from_json_str;
pub use selector::Selector;
