//! Resolution of a [`Selection`] against a [`StyleDefinition`].
//!
//! Resolution runs in two stages. [`Resolver::resolve_tokens`] produces the
//! ordered, unmerged token sequence of every requested slot:
//!
//! 1. the part's base tokens
//! 2. for each axis in declared order, the tokens of the chosen option (or the
//!    default; axes with neither contribute nothing)
//! 3. the selection's shared override classes
//! 4. the selection's override classes for that slot
//!
//! [`Resolver::resolve`] then hands each sequence to the [`Merger`].
//!
//! Unslotted definitions resolve to a single entry keyed `""`. Slotted
//! definitions resolve every slot in declaration order unless the selection
//! names one.

use std::collections::BTreeSet;

use serde::ser::{Serialize, SerializeMap, Serializer};
use stylecraft_merge::Merger;

use crate::definition::StyleDefinition;
use crate::error::InvalidVariantError;
use crate::selection::Selection;

/// Resolves selections and merges the resulting token sequences.
///
/// Holds no per-call state; a single resolver can serve any number of
/// concurrent resolutions.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    merger: Merger,
}

impl Resolver {
    /// Creates a resolver with the built-in group table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a resolver that merges with `merger`.
    pub fn with_merger(merger: Merger) -> Self {
        Self { merger }
    }

    /// The merger used for the final step.
    pub fn merger(&self) -> &Merger {
        &self.merger
    }

    /// Computes the ordered token sequence of each requested slot, without
    /// merging.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidVariantError`] if the selection names an undeclared
    /// axis, an option its axis does not declare, or an undeclared slot.
    pub fn resolve_tokens(
        &self,
        definition: &StyleDefinition,
        selection: &Selection,
    ) -> Result<ResolvedTokens, InvalidVariantError> {
        check_selection(definition, selection)?;

        let parts = match selection.slot() {
            Some(slot) => {
                let part = definition
                    .part(slot)
                    .ok_or_else(|| InvalidVariantError::UnknownSlot {
                        slot: slot.to_string(),
                    })?;
                vec![(slot, part)]
            }
            None => definition.parts(),
        };

        let mut entries = Vec::with_capacity(parts.len());
        for (name, part) in parts {
            entries.push((name.to_string(), collect(name, part, selection)?));
        }
        Ok(ResolvedTokens { entries })
    }

    /// Resolves a selection into merged class strings.
    ///
    /// # Errors
    ///
    /// See [`Self::resolve_tokens`]. Nothing is returned for any slot if one
    /// slot fails.
    pub fn resolve(
        &self,
        definition: &StyleDefinition,
        selection: &Selection,
    ) -> Result<ResolvedStyle, InvalidVariantError> {
        let tokens = self.resolve_tokens(definition, selection)?;
        let entries: Vec<(String, String)> = tokens
            .entries
            .into_iter()
            .map(|(slot, tokens)| {
                let class = self.merger.merge(&tokens);
                (slot, class)
            })
            .collect();
        tracing::debug!(
            slot = selection.slot().unwrap_or("*"),
            parts = entries.len(),
            "selection resolved"
        );
        Ok(ResolvedStyle { entries })
    }
}

/// Resolves a selection with the built-in group table.
///
/// # Example
///
/// ```rust
/// use stylecraft_variants::{resolve, Axis, Selection, StyleDefinition};
///
/// let definition = StyleDefinition::builder()
///     .base("rounded-md")
///     .variant(Axis::new("size").option("sm", "h-8").option("md", "h-10"))
///     .default_variant("size", "md")
///     .build()
///     .unwrap();
///
/// let style = resolve(&definition, &Selection::new()).unwrap();
/// assert_eq!(style.class(), "rounded-md h-10");
///
/// let style = resolve(&definition, &Selection::new().with("size", "sm")).unwrap();
/// assert_eq!(style.class(), "rounded-md h-8");
/// ```
///
/// # Errors
///
/// See [`Resolver::resolve_tokens`].
pub fn resolve(
    definition: &StyleDefinition,
    selection: &Selection,
) -> Result<ResolvedStyle, InvalidVariantError> {
    Resolver::new().resolve(definition, selection)
}

/// Rejects choices and slot overrides the definition does not declare.
///
/// An axis is accepted if the top level or any slot declares it, and an
/// option if at least one of those axes declares it.
fn check_selection(
    definition: &StyleDefinition,
    selection: &Selection,
) -> Result<(), InvalidVariantError> {
    for (axis, option) in selection.options() {
        let mut declared = definition.axes_named(axis).peekable();
        if declared.peek().is_none() {
            return Err(InvalidVariantError::UnknownAxis {
                axis: axis.to_string(),
                option: option.to_string(),
            });
        }
        let mut available = Vec::new();
        let mut seen = BTreeSet::new();
        for candidate in declared {
            if candidate.has_option(option) {
                available.clear();
                break;
            }
            for name in candidate.option_names() {
                if seen.insert(name) {
                    available.push(name.to_string());
                }
            }
        }
        if !available.is_empty() {
            return Err(InvalidVariantError::UnknownOption {
                axis: axis.to_string(),
                option: option.to_string(),
                available,
            });
        }
    }

    for slot in selection.override_slots() {
        if definition.part(slot).is_none() {
            return Err(InvalidVariantError::UnknownSlot {
                slot: slot.to_string(),
            });
        }
    }
    Ok(())
}

fn collect(
    slot: &str,
    part: &StyleDefinition,
    selection: &Selection,
) -> Result<Vec<String>, InvalidVariantError> {
    let mut tokens: Vec<String> = part.base().iter().map(str::to_string).collect();

    for axis in part.variants() {
        let Some(option) = selection
            .option(axis.name())
            .or_else(|| part.default_for(axis.name()))
        else {
            continue;
        };
        let chosen = axis
            .get(option)
            .ok_or_else(|| InvalidVariantError::UnknownOption {
                axis: axis.name().to_string(),
                option: option.to_string(),
                available: axis.option_names().map(str::to_string).collect(),
            })?;
        tokens.extend(chosen.iter().map(str::to_string));
    }

    tokens.extend(selection.classes().iter().cloned());
    tokens.extend(selection.slot_classes(slot).iter().cloned());
    Ok(tokens)
}

/// Ordered, unmerged tokens per resolved slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTokens {
    entries: Vec<(String, Vec<String>)>,
}

impl ResolvedTokens {
    /// Tokens for one slot (`""` for an unslotted definition).
    pub fn get(&self, slot: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == slot)
            .map(|(_, tokens)| tokens.as_slice())
    }

    /// Iterates over `(slot, tokens)` in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, tokens)| (name.as_str(), tokens.as_slice()))
    }

    /// Number of resolved slots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was resolved.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Final class strings, one per resolved slot.
///
/// Serializes as a map from slot name to class string, in resolution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedStyle {
    entries: Vec<(String, String)>,
}

impl ResolvedStyle {
    /// The class string of one slot (`""` for an unslotted definition).
    pub fn get(&self, slot: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == slot)
            .map(|(_, class)| class.as_str())
    }

    /// The class string of the first resolved part.
    ///
    /// For unslotted definitions and single-slot selections this is the only
    /// class string. Empty if nothing was resolved.
    pub fn class(&self) -> &str {
        self.entries
            .first()
            .map(|(_, class)| class.as_str())
            .unwrap_or_default()
    }

    /// Returns true if the style came from a slotted definition.
    pub fn is_slotted(&self) -> bool {
        !(self.entries.len() == 1 && self.entries[0].0.is_empty())
    }

    /// Iterates over `(slot, class)` in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, class)| (name.as_str(), class.as_str()))
    }

    /// Number of class strings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no class strings.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for ResolvedStyle {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Serialize for ResolvedStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (slot, class) in &self.entries {
            map.serialize_entry(slot, class)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::{Axis, BASE_SLOT};

    fn button() -> StyleDefinition {
        StyleDefinition::builder()
            .base("inline-flex rounded-md")
            .variant(
                Axis::new("variant")
                    .option("primary", "bg-primary text-on-primary")
                    .option("outline", "border bg-transparent"),
            )
            .variant(
                Axis::new("size")
                    .option("sm", "h-8 px-3")
                    .option("md", "h-10 px-4"),
            )
            .default_variant("variant", "primary")
            .default_variant("size", "md")
            .build()
            .unwrap()
    }

    fn select() -> StyleDefinition {
        StyleDefinition::builder()
            .slot_base("trigger", "border-input h-10")
            .slot_base("popover", "shadow-lg")
            .build()
            .unwrap()
    }

    // =========================================================================
    // Token order tests
    // =========================================================================

    #[test]
    fn test_tokens_in_precedence_order() {
        let sel = Selection::new().with("size", "sm").with_class("h-6");
        let tokens = Resolver::new().resolve_tokens(&button(), &sel).unwrap();
        assert_eq!(
            tokens.get("").unwrap(),
            &[
                "inline-flex",
                "rounded-md",
                "bg-primary",
                "text-on-primary",
                "h-8",
                "px-3",
                "h-6"
            ]
        );
    }

    #[test]
    fn test_axis_without_default_or_choice_is_skipped() {
        let def = StyleDefinition::builder()
            .base("block")
            .variant(Axis::new("tone").option("loud", "font-bold"))
            .build()
            .unwrap();
        let style = resolve(&def, &Selection::new()).unwrap();
        assert_eq!(style.class(), "block");
    }

    #[test]
    fn test_unslotted_key_is_empty() {
        let style = resolve(&button(), &Selection::new()).unwrap();
        assert_eq!(style.len(), 1);
        assert!(!style.is_slotted());
        assert_eq!(
            style.get(""),
            Some("inline-flex rounded-md bg-primary text-on-primary h-10 px-4")
        );
    }

    // =========================================================================
    // Error tests
    // =========================================================================

    #[test]
    fn test_unknown_axis() {
        let err = resolve(&button(), &Selection::new().with("tone", "loud")).unwrap_err();
        assert_eq!(
            err,
            InvalidVariantError::UnknownAxis {
                axis: "tone".to_string(),
                option: "loud".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_option_lists_declared_options() {
        let err = resolve(&button(), &Selection::new().with("size", "xl")).unwrap_err();
        assert_eq!(
            err,
            InvalidVariantError::UnknownOption {
                axis: "size".to_string(),
                option: "xl".to_string(),
                available: vec!["sm".to_string(), "md".to_string()]
            }
        );
    }

    #[test]
    fn test_slot_on_unslotted_definition() {
        let err = resolve(&button(), &Selection::new().with_slot("trigger")).unwrap_err();
        assert!(matches!(err, InvalidVariantError::UnknownSlot { .. }));
    }

    #[test]
    fn test_unknown_slot() {
        let err = resolve(&select(), &Selection::new().with_slot("footer")).unwrap_err();
        assert_eq!(
            err,
            InvalidVariantError::UnknownSlot {
                slot: "footer".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_slot_override() {
        let sel = Selection::new().with_slot_class("footer", "p-2");
        let err = resolve(&select(), &sel).unwrap_err();
        assert!(matches!(err, InvalidVariantError::UnknownSlot { ref slot } if slot == "footer"));
    }

    // =========================================================================
    // Slot tests
    // =========================================================================

    #[test]
    fn test_all_slots_resolved_in_order() {
        let style = resolve(&select(), &Selection::new().with_class("h-12")).unwrap();
        assert!(style.is_slotted());
        assert_eq!(
            style.iter().collect::<Vec<_>>(),
            vec![
                ("trigger", "border-input h-12"),
                ("popover", "shadow-lg h-12")
            ]
        );
    }

    #[test]
    fn test_single_slot() {
        let style = resolve(&select(), &Selection::new().with_slot("popover")).unwrap();
        assert_eq!(style.len(), 1);
        assert_eq!(style.class(), "shadow-lg");
    }

    #[test]
    fn test_slot_classes_only_reach_their_slot() {
        let sel = Selection::new()
            .with_class("h-12")
            .with_slot_class("trigger", "h-14");
        let style = resolve(&select(), &sel).unwrap();
        assert_eq!(style.get("trigger"), Some("border-input h-14"));
        assert_eq!(style.get("popover"), Some("shadow-lg h-12"));
    }

    #[test]
    fn test_slot_axes_are_independent() {
        let def = StyleDefinition::builder()
            .slot(
                "track",
                StyleDefinition::builder()
                    .variant(
                        Axis::new("isSelected")
                            .option(false, "bg-disabled")
                            .option(true, "bg-primary"),
                    )
                    .default_variant("isSelected", false),
            )
            .slot_base("label", "text-sm")
            .build()
            .unwrap();

        let style = resolve(&def, &Selection::new()).unwrap();
        assert_eq!(style.get("track"), Some("bg-disabled"));
        assert_eq!(style.get("label"), Some("text-sm"));

        let style = resolve(&def, &Selection::new().with("isSelected", true)).unwrap();
        assert_eq!(style.get("track"), Some("bg-primary"));
        assert_eq!(style.get("label"), Some("text-sm"));
    }

    #[test]
    fn test_top_level_styles_become_base_slot() {
        let def = StyleDefinition::builder()
            .base("flex flex-col")
            .slot_base("label", "text-sm")
            .build()
            .unwrap();
        let style = resolve(&def, &Selection::new()).unwrap();
        assert_eq!(style.get(BASE_SLOT), Some("flex flex-col"));
        assert_eq!(style.get("label"), Some("text-sm"));
    }

    #[test]
    fn test_failing_slot_fails_whole_resolution() {
        let def = StyleDefinition::builder()
            .slot(
                "a",
                StyleDefinition::builder()
                    .variant(Axis::new("size").option("sm", "h-8").option("lg", "h-12")),
            )
            .slot(
                "b",
                StyleDefinition::builder().variant(Axis::new("size").option("sm", "h-4")),
            )
            .build()
            .unwrap();
        let err = resolve(&def, &Selection::new().with("size", "lg")).unwrap_err();
        assert!(matches!(err, InvalidVariantError::UnknownOption { ref option, .. } if option == "lg"));
    }

    // =========================================================================
    // Output tests
    // =========================================================================

    #[test]
    fn test_serialize_as_map() {
        let style = resolve(&select(), &Selection::new()).unwrap();
        let json = serde_json::to_string(&style).unwrap();
        assert_eq!(json, r#"{"trigger":"border-input h-10","popover":"shadow-lg"}"#);
    }

    #[test]
    fn test_from_iterator() {
        let style: ResolvedStyle = vec![
            ("root".to_string(), "flex".to_string()),
            ("track".to_string(), "h-6".to_string()),
        ]
        .into_iter()
        .collect();
        assert_eq!(style.get("track"), Some("h-6"));
        assert_eq!(style.class(), "flex");
    }
}
