//! Conflict-aware merging of utility class tokens.
//!
//! This crate is the leaf of the stylecraft workspace. It turns an ordered
//! sequence of utility class tokens into a single class string in which:
//!
//! - every property group (height, background color, ...) appears at most once
//! - the *last* token of a group wins, at the position where the group first
//!   appeared
//! - property-less tokens (structural or custom classes) are kept in order,
//!   with exact duplicates removed
//!
//! # Quick Start
//!
//! ```rust
//! use stylecraft_merge::merge;
//!
//! let class = merge(["inline-flex h-10 px-4 text-base", "h-8 text-sm"]);
//! assert_eq!(class, "inline-flex h-8 px-4 text-sm");
//! ```
//!
//! # Property groups
//!
//! Group membership comes from a [`GroupTable`], an explicit data table keyed
//! by utility stem. [`GroupTable::builtin`] covers the common utility families;
//! custom tables can be built in code or loaded from YAML and handed to
//! [`Merger::with_table`].
//!
//! # Modifiers
//!
//! Tokens are parsed into modifiers, an important marker and the utility (see
//! [`Token`]). Modifiers and the important marker are part of the conflict
//! key, so `hover:bg-a` only conflicts with other `hover:` background tokens.

mod defaults;
mod merge;
mod table;
mod token;

pub use merge::Merger;
pub use table::{GroupCase, GroupRule, GroupTable, TableError, ValueKind};
pub use token::Token;

/// Merges token groups with the built-in group table.
///
/// Shorthand for [`Merger::new`] followed by [`Merger::merge`].
pub fn merge<I>(groups: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Merger::new().merge(groups)
}

/// Merges a caller-supplied class string over resolved styles.
///
/// Tokens in `class_name` win over conflicting tokens in `styles`. A missing
/// class name leaves the styles as they are (apart from deduplication).
///
/// ```rust
/// use stylecraft_merge::compose;
///
/// assert_eq!(compose(Some("rounded-full"), "rounded-md h-8 w-8"), "rounded-full h-8 w-8");
/// ```
pub fn compose(class_name: Option<&str>, styles: &str) -> String {
    Merger::new().compose(class_name, styles)
}
