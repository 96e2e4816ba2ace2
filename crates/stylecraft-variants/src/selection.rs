//! Caller choices for one resolution.

use std::collections::BTreeMap;

use crate::tokens::Tokens;

/// What the caller chose for one render: axis options, override classes and
/// an optional slot.
///
/// Option values are stored as strings. Anything implementing [`ToString`]
/// can be passed, so boolean axes take `true`/`false` directly.
///
/// # Example
///
/// ```rust
/// use stylecraft_variants::Selection;
///
/// let selection = Selection::new()
///     .with("size", "sm")
///     .with("isSelected", true)
///     .with_class("w-full");
///
/// assert_eq!(selection.option("isSelected"), Some("true"));
/// assert_eq!(selection.classes(), &["w-full"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    options: BTreeMap<String, String>,
    classes: Vec<String>,
    slot: Option<String>,
    slot_classes: BTreeMap<String, Vec<String>>,
}

impl Selection {
    /// Creates an empty selection: every axis uses its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Chooses an option for an axis, replacing any earlier choice.
    pub fn with(mut self, axis: impl Into<String>, option: impl ToString) -> Self {
        self.options.insert(axis.into(), option.to_string());
        self
    }

    /// Chooses an option if one is given; `None` leaves the axis unset.
    pub fn with_opt<T: ToString>(self, axis: impl Into<String>, option: Option<T>) -> Self {
        match option {
            Some(option) => self.with(axis, option),
            None => self,
        }
    }

    /// Appends override classes applied to every resolved slot.
    pub fn with_class(mut self, tokens: impl Into<Tokens>) -> Self {
        self.classes.extend(tokens.into().into_vec());
        self
    }

    /// Restricts resolution to a single slot.
    pub fn with_slot(mut self, slot: impl Into<String>) -> Self {
        self.slot = Some(slot.into());
        self
    }

    /// Appends override classes applied only to `slot`.
    ///
    /// They come after the shared overrides, so they win over them.
    pub fn with_slot_class(mut self, slot: impl Into<String>, tokens: impl Into<Tokens>) -> Self {
        self.slot_classes
            .entry(slot.into())
            .or_default()
            .extend(tokens.into().into_vec());
        self
    }

    /// The chosen option for an axis.
    pub fn option(&self, axis: &str) -> Option<&str> {
        self.options.get(axis).map(String::as_str)
    }

    /// Iterates over `(axis, option)` choices, sorted by axis name.
    pub fn options(&self) -> impl Iterator<Item = (&str, &str)> {
        self.options.iter().map(|(a, o)| (a.as_str(), o.as_str()))
    }

    /// Override classes shared by every slot.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// The slot resolution is restricted to, if any.
    pub fn slot(&self) -> Option<&str> {
        self.slot.as_deref()
    }

    /// Override classes for one slot.
    pub fn slot_classes(&self, slot: &str) -> &[String] {
        self.slot_classes
            .get(slot)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Slot names that carry slot-specific overrides.
    pub(crate) fn override_slots(&self) -> impl Iterator<Item = &str> {
        self.slot_classes.keys().map(String::as_str)
    }
}
