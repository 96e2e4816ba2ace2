//! Single-pass, last-token-wins class merging.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::table::{GroupTable, TableError};

static BUILTIN_TABLE: Lazy<Arc<GroupTable>> = Lazy::new(|| Arc::new(GroupTable::builtin()));

/// Merges ordered class tokens into a conflict-free class string.
///
/// Tokens are scanned left to right. For tokens that belong to a property
/// group, a later token replaces the earlier winner *in place*: the group keeps
/// the position where it first appeared. A token of a broader group (`p`,
/// `size`, `rounded`) also removes earlier winners of the narrower groups its
/// table case lists. Property-less tokens are kept in first-seen order with
/// exact duplicates removed.
///
/// The merger is cheap to clone and safe to share across threads; it holds
/// its [`GroupTable`] behind an [`Arc`].
///
/// # Example
///
/// ```rust
/// use stylecraft_merge::Merger;
///
/// let merger = Merger::new();
/// assert_eq!(merger.merge(["h-10 rounded-md", "h-8"]), "h-8 rounded-md");
/// assert_eq!(merger.merge(["px-2 px-2 custom custom"]), "px-2 custom");
/// assert_eq!(merger.merge(["h-6 w-6", "size-4"]), "size-4");
/// ```
#[derive(Debug, Clone)]
pub struct Merger {
    table: Arc<GroupTable>,
}

impl Merger {
    /// Creates a merger using the built-in group table.
    pub fn new() -> Self {
        Self {
            table: Arc::clone(&BUILTIN_TABLE),
        }
    }

    /// Creates a merger with a custom group table.
    ///
    /// # Errors
    ///
    /// Returns an error if the table contains malformed rules.
    pub fn with_table(table: GroupTable) -> Result<Self, TableError> {
        table.validate()?;
        Ok(Self {
            table: Arc::new(table),
        })
    }

    /// Returns the group table in use.
    pub fn table(&self) -> &GroupTable {
        &self.table
    }

    /// Merges token groups into a single class string.
    ///
    /// Each item may hold several whitespace-separated tokens. Empty input
    /// produces an empty string.
    pub fn merge<I>(&self, groups: I) -> String
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut merged = Merged::default();
        for group in groups {
            for token in group.as_ref().split_whitespace() {
                merged.push(token, self.table.override_keys(token));
            }
        }
        merged.finish()
    }

    /// Merges a caller class string over already-resolved styles.
    ///
    /// Tokens in `class_name` win over conflicting tokens in `styles`.
    ///
    /// ```rust
    /// use stylecraft_merge::Merger;
    ///
    /// let merger = Merger::new();
    /// assert_eq!(merger.compose(Some("rounded-full"), "rounded-md h-8"), "rounded-full h-8");
    /// assert_eq!(merger.compose(None, "rounded-md h-8"), "rounded-md h-8");
    /// ```
    pub fn compose(&self, class_name: Option<&str>, styles: &str) -> String {
        self.merge([styles, class_name.unwrap_or_default()])
    }

    /// Returns the conflict key of a token, or `None` if it is property-less.
    pub fn explain(&self, token: &str) -> Option<String> {
        self.table.conflict_key(token)
    }
}

impl Default for Merger {
    fn default() -> Self {
        Self::new()
    }
}

/// Accumulator for one merge pass.
///
/// Removed tokens leave a `None` behind so the recorded positions stay valid.
#[derive(Default)]
struct Merged {
    out: Vec<Option<String>>,
    grouped: HashMap<String, usize>,
    plain: HashSet<String>,
}

impl Merged {
    fn push(&mut self, token: &str, keys: Option<(String, Vec<String>)>) {
        let Some((key, overrides)) = keys else {
            if self.plain.insert(token.to_string()) {
                self.out.push(Some(token.to_string()));
            }
            return;
        };

        match self.grouped.get(&key) {
            Some(&index) => {
                if let Some(previous) = self.out[index].as_deref().filter(|p| *p != token) {
                    tracing::trace!(
                        replaced = previous,
                        by = token,
                        group = %key,
                        "conflicting token overridden"
                    );
                }
                self.out[index] = Some(token.to_string());
            }
            None => {
                self.grouped.insert(key, self.out.len());
                self.out.push(Some(token.to_string()));
            }
        }

        for narrower in overrides {
            if let Some(index) = self.grouped.remove(&narrower) {
                if let Some(removed) = self.out[index].take() {
                    tracing::trace!(
                        removed = %removed,
                        by = token,
                        group = %narrower,
                        "narrower token overridden"
                    );
                }
            }
        }
    }

    fn finish(self) -> String {
        self.out.into_iter().flatten().collect::<Vec<_>>().join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::GroupRule;

    #[test]
    fn test_merge_empty() {
        let merger = Merger::new();
        assert_eq!(merger.merge(Vec::<String>::new()), "");
        assert_eq!(merger.merge([""]), "");
        assert_eq!(merger.merge(["   "]), "");
    }

    #[test]
    fn test_merge_last_wins_at_first_position() {
        let merger = Merger::new();
        assert_eq!(merger.merge(["h-10", "rounded-md", "h-8"]), "h-8 rounded-md");
    }

    #[test]
    fn test_merge_repeated_overrides_keep_first_slot() {
        let merger = Merger::new();
        assert_eq!(
            merger.merge(["p-1 m-1", "p-2", "m-2", "p-3"]),
            "p-3 m-2"
        );
    }

    #[test]
    fn test_merge_plain_tokens_dedup() {
        let merger = Merger::new();
        assert_eq!(
            merger.merge(["outline-none custom custom fade-in", "custom"]),
            "outline-none custom fade-in"
        );
    }

    #[test]
    fn test_merge_modifiers_are_separate_groups() {
        let merger = Merger::new();
        assert_eq!(
            merger.merge(["bg-primary hover:bg-primary-hover", "bg-danger"]),
            "bg-danger hover:bg-primary-hover"
        );
    }

    #[test]
    fn test_merge_important_is_separate_group() {
        let merger = Merger::new();
        assert_eq!(merger.merge(["h-10 !h-12 h-8"]), "h-8 !h-12");
    }

    #[test]
    fn test_merge_text_size_and_color_coexist() {
        let merger = Merger::new();
        assert_eq!(
            merger.merge(["text-base text-body", "text-sm text-muted"]),
            "text-sm text-muted"
        );
    }

    #[test]
    fn test_merge_border_width_and_color_coexist() {
        let merger = Merger::new();
        assert_eq!(
            merger.merge(["border border-main", "border-2 border-input"]),
            "border-2 border-input"
        );
    }

    #[test]
    fn test_merge_normalizes_whitespace() {
        let merger = Merger::new();
        assert_eq!(merger.merge(["  flex\t gap-2\n", " items-center "]), "flex gap-2 items-center");
    }

    // =========================================================================
    // Broader group tests
    // =========================================================================

    #[test]
    fn test_merge_broader_padding_clears_sides() {
        let merger = Merger::new();
        assert_eq!(merger.merge(["px-2 pt-1", "p-4"]), "p-4");
        assert_eq!(merger.merge(["p-4", "px-2"]), "p-4 px-2");
        assert_eq!(merger.merge(["mx-auto mb-2 m-0"]), "m-0");
    }

    #[test]
    fn test_merge_size_clears_width() {
        let merger = Merger::new();
        assert_eq!(merger.merge(["h-6 w-6", "size-4"]), "size-4");
        assert_eq!(merger.merge(["w-6 gap-1 h-6", "size-4"]), "gap-1 size-4");
        assert_eq!(merger.merge(["size-4", "w-6"]), "size-4 w-6");
    }

    #[test]
    fn test_merge_rounded_clears_corners() {
        let merger = Merger::new();
        assert_eq!(merger.merge(["rounded-t-md", "rounded-none"]), "rounded-none");
        assert_eq!(merger.merge(["rounded-tl-sm rounded-t-md"]), "rounded-t-md");
    }

    #[test]
    fn test_merge_inset_and_border_width() {
        let merger = Merger::new();
        assert_eq!(merger.merge(["top-0 left-2", "inset-0"]), "inset-0");
        assert_eq!(merger.merge(["border-b-2 border-b-main", "border"]), "border-b-main border");
    }

    #[test]
    fn test_merge_broader_respects_modifiers() {
        let merger = Merger::new();
        assert_eq!(
            merger.merge(["px-2 hover:px-4", "hover:p-1"]),
            "px-2 hover:p-1"
        );
    }

    #[test]
    fn test_merge_cleared_group_can_return() {
        let merger = Merger::new();
        assert_eq!(merger.merge(["px-2 p-4 px-3"]), "p-4 px-3");
    }

    #[test]
    fn test_merge_custom_table() {
        let table = GroupTable::new().rule(GroupRule::single("tone", "tone"));
        let merger = Merger::with_table(table).unwrap();
        assert_eq!(merger.merge(["tone-a h-1", "tone-b h-2"]), "tone-b h-1 h-2");
    }

    #[test]
    fn test_with_table_rejects_invalid() {
        let table = GroupTable::new().rule(GroupRule::new("tone"));
        assert!(Merger::with_table(table).is_err());
    }

    #[test]
    fn test_compose_caller_wins() {
        let merger = Merger::new();
        assert_eq!(
            merger.compose(Some("w-full rounded-none"), "flex w-56 rounded-lg"),
            "flex w-full rounded-none"
        );
    }

    #[test]
    fn test_explain() {
        let merger = Merger::new();
        assert_eq!(merger.explain("h-10").as_deref(), Some("height"));
        assert_eq!(merger.explain("custom"), None);
    }
}
