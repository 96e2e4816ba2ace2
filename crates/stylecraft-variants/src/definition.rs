//! Style definitions: base tokens, variant axes, defaults and slots.
//!
//! A [`StyleDefinition`] describes how one component kind is styled:
//!
//! - **base** tokens that always apply
//! - **variant axes** ([`Axis`]), each a named dimension with mutually
//!   exclusive options (`size` with `sm`/`md`/`lg`)
//! - **defaults** naming the option used when a selection leaves an axis unset
//! - optional **slots**, named sub-parts (a select's `trigger` and `popover`)
//!   that each carry their own base, axes and defaults
//!
//! Definitions are validated once when built and are immutable afterwards.

use crate::error::ConfigError;
use crate::tokens::Tokens;

/// Slot name under which a slotted definition exposes its own top-level
/// base and variants.
pub const BASE_SLOT: &str = "base";

/// A named option of an [`Axis`] and the tokens it contributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantOption {
    name: String,
    tokens: Tokens,
}

impl VariantOption {
    /// The option name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The tokens appended when this option is selected.
    pub fn tokens(&self) -> &Tokens {
        &self.tokens
    }
}

/// A named style dimension with mutually exclusive options.
///
/// Option names are stored as strings; boolean axes use `"true"` and
/// `"false"`.
///
/// # Example
///
/// ```rust
/// use stylecraft_variants::Axis;
///
/// let size = Axis::new("size")
///     .option("sm", "h-8 px-3 text-sm")
///     .option("md", "h-10 px-4 text-base")
///     .option("lg", "h-12 px-6 text-lg");
///
/// assert_eq!(size.option_names().collect::<Vec<_>>(), vec!["sm", "md", "lg"]);
///
/// let selected = Axis::new("isSelected")
///     .option(false, "bg-disabled")
///     .option(true, "bg-primary");
/// assert!(selected.get("true").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Axis {
    name: String,
    options: Vec<VariantOption>,
}

impl Axis {
    /// Creates an axis with no options.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
        }
    }

    /// Adds an option, returning the updated axis for chaining.
    pub fn option(mut self, name: impl ToString, tokens: impl Into<Tokens>) -> Self {
        self.options.push(VariantOption {
            name: name.to_string(),
            tokens: tokens.into(),
        });
        self
    }

    /// The axis name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the tokens of an option.
    pub fn get(&self, option: &str) -> Option<&Tokens> {
        self.options
            .iter()
            .find(|o| o.name == option)
            .map(|o| &o.tokens)
    }

    /// Returns true if the axis declares `option`.
    pub fn has_option(&self, option: &str) -> bool {
        self.get(option).is_some()
    }

    /// Iterates over option names in declaration order.
    pub fn option_names(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|o| o.name.as_str())
    }

    /// Iterates over options in declaration order.
    pub fn options(&self) -> impl Iterator<Item = &VariantOption> {
        self.options.iter()
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns true if the axis has no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.options.is_empty() {
            return Err(ConfigError::EmptyAxis {
                axis: self.name.clone(),
            });
        }
        for (i, option) in self.options.iter().enumerate() {
            if self.options[..i].iter().any(|o| o.name == option.name) {
                return Err(ConfigError::DuplicateOption {
                    axis: self.name.clone(),
                    option: option.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Returns true if both axes declare the same set of option names.
    fn same_options(&self, other: &Axis) -> bool {
        self.options.len() == other.options.len()
            && self.option_names().all(|name| other.has_option(name))
    }

    fn owned_option_names(&self) -> Vec<String> {
        self.option_names().map(str::to_string).collect()
    }
}

/// An immutable, validated style definition.
///
/// Build one with [`StyleDefinition::builder`] or [`define`]; load one from
/// YAML/JSON with [`crate::config`].
///
/// # Example
///
/// ```rust
/// use stylecraft_variants::{Axis, StyleDefinition};
///
/// let button = StyleDefinition::builder()
///     .base("rounded-md")
///     .variant(
///         Axis::new("size")
///             .option("sm", "h-8")
///             .option("md", "h-10")
///             .option("lg", "h-12"),
///     )
///     .default_variant("size", "md")
///     .build()
///     .unwrap();
///
/// assert_eq!(button.default_for("size"), Some("md"));
/// assert!(!button.is_slotted());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDefinition {
    base: Tokens,
    variants: Vec<Axis>,
    defaults: Vec<(String, String)>,
    slots: Vec<(String, StyleDefinition)>,
}

impl StyleDefinition {
    /// Starts building a definition.
    pub fn builder() -> StyleDefinitionBuilder {
        StyleDefinitionBuilder::default()
    }

    /// Base tokens, applied before any variant tokens.
    pub fn base(&self) -> &Tokens {
        &self.base
    }

    /// Variant axes in declaration order.
    pub fn variants(&self) -> &[Axis] {
        &self.variants
    }

    /// Looks up a top-level axis.
    pub fn axis(&self, name: &str) -> Option<&Axis> {
        self.variants.iter().find(|a| a.name == name)
    }

    /// Returns the default option of a top-level axis.
    pub fn default_for(&self, axis: &str) -> Option<&str> {
        self.defaults
            .iter()
            .find(|(a, _)| a == axis)
            .map(|(_, option)| option.as_str())
    }

    /// Iterates over `(axis, default option)` pairs in declaration order.
    pub fn defaults(&self) -> impl Iterator<Item = (&str, &str)> {
        self.defaults
            .iter()
            .map(|(axis, option)| (axis.as_str(), option.as_str()))
    }

    /// Returns true if the definition is split into slots.
    pub fn is_slotted(&self) -> bool {
        !self.slots.is_empty()
    }

    /// Iterates over declared slots in declaration order.
    ///
    /// The implicit [`BASE_SLOT`] is not included; see [`Self::slot_names`].
    pub fn slots(&self) -> impl Iterator<Item = (&str, &StyleDefinition)> {
        self.slots.iter().map(|(name, def)| (name.as_str(), def))
    }

    /// Names of every slot a resolution can produce, in output order.
    ///
    /// For a slotted definition with its own base or variants, this starts
    /// with [`BASE_SLOT`]. Unslotted definitions have no slot names.
    pub fn slot_names(&self) -> Vec<&str> {
        if !self.is_slotted() {
            return Vec::new();
        }
        self.parts().into_iter().map(|(name, _)| name).collect()
    }

    /// Returns true if the top level or any slot declares `axis`.
    pub fn declares_axis(&self, axis: &str) -> bool {
        self.axis(axis).is_some() || self.slots.iter().any(|(_, s)| s.axis(axis).is_some())
    }

    /// Returns every axis named `axis`, at the top level and in slots.
    pub(crate) fn axes_named<'a>(&'a self, axis: &'a str) -> impl Iterator<Item = &'a Axis> + 'a {
        self.axis(axis)
            .into_iter()
            .chain(self.slots.iter().filter_map(move |(_, s)| s.axis(axis)))
    }

    fn has_own_styles(&self) -> bool {
        !self.base.is_empty() || !self.variants.is_empty()
    }

    /// The independently resolved parts of this definition.
    ///
    /// Unslotted definitions have a single part named `""`.
    pub(crate) fn parts(&self) -> Vec<(&str, &StyleDefinition)> {
        if !self.is_slotted() {
            return vec![("", self)];
        }
        let mut parts = Vec::with_capacity(self.slots.len() + 1);
        if self.has_own_styles() {
            parts.push((BASE_SLOT, self));
        }
        parts.extend(self.slots());
        parts
    }

    /// Returns the part resolved for `slot`, if the definition declares it.
    pub(crate) fn part(&self, slot: &str) -> Option<&StyleDefinition> {
        if !self.is_slotted() {
            return None;
        }
        self.parts()
            .into_iter()
            .find(|(name, _)| *name == slot)
            .map(|(_, def)| def)
    }

    fn validated(
        base: Tokens,
        variants: Vec<Axis>,
        defaults: Vec<(String, String)>,
        slots: Vec<(String, StyleDefinition)>,
    ) -> Result<Self, ConfigError> {
        for (i, axis) in variants.iter().enumerate() {
            axis.validate()?;
            if variants[..i].iter().any(|a| a.name == axis.name) {
                return Err(ConfigError::DuplicateAxis {
                    axis: axis.name.clone(),
                });
            }
        }

        // later defaults for the same axis replace earlier ones
        let mut normalized: Vec<(String, String)> = Vec::with_capacity(defaults.len());
        for (axis_name, option) in defaults {
            let axis = variants
                .iter()
                .find(|a| a.name == axis_name)
                .ok_or_else(|| ConfigError::UnknownDefaultAxis {
                    axis: axis_name.clone(),
                })?;
            if !axis.has_option(&option) {
                return Err(ConfigError::UnknownDefaultOption {
                    axis: axis_name,
                    option,
                });
            }
            normalized.retain(|(a, _)| *a != axis_name);
            normalized.push((axis_name, option));
        }

        let definition = Self {
            base,
            variants,
            defaults: normalized,
            slots: Vec::new(),
        };
        let own_styles = definition.has_own_styles();

        for (i, (name, slot)) in slots.iter().enumerate() {
            if slots[..i].iter().any(|(n, _)| n == name) || (own_styles && name == BASE_SLOT) {
                return Err(ConfigError::DuplicateSlot { slot: name.clone() });
            }
            if slot.is_slotted() {
                return Err(ConfigError::NestedSlots { slot: name.clone() });
            }
            for slot_axis in &slot.variants {
                if let Some(top) = definition.axis(&slot_axis.name) {
                    if !top.same_options(slot_axis) {
                        return Err(ConfigError::IncompatibleSlotAxis {
                            slot: name.clone(),
                            axis: slot_axis.name.clone(),
                            slot_options: slot_axis.owned_option_names(),
                            top_options: top.owned_option_names(),
                        });
                    }
                }
            }
        }

        let definition = Self { slots, ..definition };
        tracing::debug!(
            base = definition.base.len(),
            axes = definition.variants.len(),
            slots = definition.slots.len(),
            "style definition built"
        );
        Ok(definition)
    }
}

/// Builds a validated definition from its parts.
///
/// `slots` holds already-built slot definitions; pass `None` for an unslotted
/// definition. Later entries in `default_variants` replace earlier entries for
/// the same axis.
///
/// # Errors
///
/// Returns a [`ConfigError`] if an axis is empty or repeats an option, a
/// default references an undeclared axis or option, a slot name repeats, a
/// slot has slots of its own, or a slot redeclares a top-level axis with a
/// different set of options.
///
/// # Example
///
/// ```rust
/// use stylecraft_variants::{define, Axis, ConfigError};
///
/// let err = define(
///     "rounded-md",
///     vec![Axis::new("size").option("sm", "h-8")],
///     vec![("size".to_string(), "xl".to_string())],
///     None,
/// )
/// .unwrap_err();
///
/// assert!(matches!(err, ConfigError::UnknownDefaultOption { .. }));
/// ```
pub fn define(
    base: impl Into<Tokens>,
    variants: Vec<Axis>,
    default_variants: Vec<(String, String)>,
    slots: Option<Vec<(String, StyleDefinition)>>,
) -> Result<StyleDefinition, ConfigError> {
    StyleDefinition::validated(
        base.into(),
        variants,
        default_variants,
        slots.unwrap_or_default(),
    )
}

/// Fluent builder for [`StyleDefinition`].
///
/// Nothing is validated until [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct StyleDefinitionBuilder {
    base: Tokens,
    variants: Vec<Axis>,
    defaults: Vec<(String, String)>,
    slots: Vec<(String, StyleDefinitionBuilder)>,
}

impl StyleDefinitionBuilder {
    /// Appends base tokens.
    pub fn base(mut self, tokens: impl Into<Tokens>) -> Self {
        self.base.extend_from(&tokens.into());
        self
    }

    /// Adds a variant axis.
    pub fn variant(mut self, axis: Axis) -> Self {
        self.variants.push(axis);
        self
    }

    /// Sets the default option for an axis.
    pub fn default_variant(mut self, axis: impl Into<String>, option: impl ToString) -> Self {
        let axis = axis.into();
        self.defaults.retain(|(a, _)| *a != axis);
        self.defaults.push((axis, option.to_string()));
        self
    }

    /// Adds a slot described by its own builder.
    pub fn slot(mut self, name: impl Into<String>, slot: StyleDefinitionBuilder) -> Self {
        self.slots.push((name.into(), slot));
        self
    }

    /// Adds a slot that only has base tokens.
    pub fn slot_base(self, name: impl Into<String>, tokens: impl Into<Tokens>) -> Self {
        self.slot(name, StyleDefinitionBuilder::default().base(tokens))
    }

    /// Validates and builds the definition.
    ///
    /// # Errors
    ///
    /// See [`define`].
    pub fn build(self) -> Result<StyleDefinition, ConfigError> {
        let mut slots = Vec::with_capacity(self.slots.len());
        for (name, builder) in self.slots {
            if !builder.slots.is_empty() {
                return Err(ConfigError::NestedSlots { slot: name });
            }
            let slot = builder.build()?;
            slots.push((name, slot));
        }
        StyleDefinition::validated(self.base, self.variants, self.defaults, slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size_axis() -> Axis {
        Axis::new("size")
            .option("sm", "h-8")
            .option("md", "h-10")
            .option("lg", "h-12")
    }

    // =========================================================================
    // Axis tests
    // =========================================================================

    #[test]
    fn test_axis_lookup() {
        let axis = size_axis();
        assert_eq!(axis.name(), "size");
        assert_eq!(axis.len(), 3);
        assert_eq!(axis.get("md").unwrap().as_slice(), &["h-10"]);
        assert!(axis.get("xl").is_none());
    }

    #[test]
    fn test_axis_bool_options() {
        let axis = Axis::new("isSelected")
            .option(false, "bg-disabled")
            .option(true, "bg-primary");
        assert_eq!(
            axis.option_names().collect::<Vec<_>>(),
            vec!["false", "true"]
        );
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn test_build_valid() {
        let def = StyleDefinition::builder()
            .base("rounded-md")
            .variant(size_axis())
            .default_variant("size", "md")
            .build()
            .unwrap();
        assert_eq!(def.base().as_slice(), &["rounded-md"]);
        assert_eq!(def.variants().len(), 1);
        assert_eq!(def.default_for("size"), Some("md"));
        assert_eq!(def.default_for("tone"), None);
    }

    #[test]
    fn test_empty_axis_rejected() {
        let err = StyleDefinition::builder()
            .variant(Axis::new("size"))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::EmptyAxis {
                axis: "size".to_string()
            }
        );
    }

    #[test]
    fn test_duplicate_option_rejected() {
        let err = StyleDefinition::builder()
            .variant(Axis::new("size").option("sm", "h-8").option("sm", "h-9"))
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateOption { ref option, .. } if option == "sm"));
    }

    #[test]
    fn test_duplicate_axis_rejected() {
        let err = StyleDefinition::builder()
            .variant(size_axis())
            .variant(size_axis())
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateAxis { .. }));
    }

    #[test]
    fn test_default_unknown_axis_rejected() {
        let err = StyleDefinition::builder()
            .variant(size_axis())
            .default_variant("tone", "loud")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownDefaultAxis {
                axis: "tone".to_string()
            }
        );
    }

    #[test]
    fn test_default_unknown_option_rejected() {
        let err = StyleDefinition::builder()
            .variant(size_axis())
            .default_variant("size", "xl")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownDefaultOption {
                axis: "size".to_string(),
                option: "xl".to_string()
            }
        );
    }

    #[test]
    fn test_default_variant_replaces() {
        let def = StyleDefinition::builder()
            .variant(size_axis())
            .default_variant("size", "sm")
            .default_variant("size", "lg")
            .build()
            .unwrap();
        assert_eq!(def.defaults().collect::<Vec<_>>(), vec![("size", "lg")]);
    }

    #[test]
    fn test_define_later_default_wins() {
        let def = define(
            "",
            vec![size_axis()],
            vec![
                ("size".to_string(), "sm".to_string()),
                ("size".to_string(), "lg".to_string()),
            ],
            None,
        )
        .unwrap();
        assert_eq!(def.default_for("size"), Some("lg"));
    }

    // =========================================================================
    // Slot tests
    // =========================================================================

    #[test]
    fn test_slots_in_order() {
        let def = StyleDefinition::builder()
            .slot_base("trigger", "border-input")
            .slot_base("popover", "shadow-lg")
            .build()
            .unwrap();
        assert!(def.is_slotted());
        assert_eq!(def.slot_names(), vec!["trigger", "popover"]);
    }

    #[test]
    fn test_slotted_with_own_base_exposes_base_slot() {
        let def = StyleDefinition::builder()
            .base("flex")
            .slot_base("label", "text-sm")
            .build()
            .unwrap();
        assert_eq!(def.slot_names(), vec![BASE_SLOT, "label"]);
    }

    #[test]
    fn test_base_slot_name_clash_rejected() {
        let err = StyleDefinition::builder()
            .base("flex")
            .slot_base(BASE_SLOT, "text-sm")
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateSlot { .. }));
    }

    #[test]
    fn test_duplicate_slot_rejected() {
        let err = StyleDefinition::builder()
            .slot_base("label", "text-sm")
            .slot_base("label", "text-lg")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::DuplicateSlot {
                slot: "label".to_string()
            }
        );
    }

    #[test]
    fn test_nested_slots_rejected() {
        let err = StyleDefinition::builder()
            .slot(
                "outer",
                StyleDefinition::builder().slot_base("inner", "p-1"),
            )
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::NestedSlots { ref slot } if slot == "outer"));
    }

    #[test]
    fn test_nested_slots_rejected_through_define() {
        let inner = StyleDefinition::builder()
            .slot_base("inner", "p-1")
            .build()
            .unwrap();
        let err = define("", vec![], vec![], Some(vec![("outer".to_string(), inner)])).unwrap_err();
        assert!(matches!(err, ConfigError::NestedSlots { .. }));
    }

    #[test]
    fn test_slot_axis_compatible_with_top_level() {
        let def = StyleDefinition::builder()
            .variant(size_axis())
            .slot(
                "icon",
                StyleDefinition::builder().variant(
                    Axis::new("size")
                        .option("lg", "size-6")
                        .option("sm", "size-3")
                        .option("md", "size-4"),
                ),
            )
            .build();
        assert!(def.is_ok());
    }

    #[test]
    fn test_slot_axis_incompatible_with_top_level() {
        let err = StyleDefinition::builder()
            .variant(size_axis())
            .slot(
                "icon",
                StyleDefinition::builder().variant(Axis::new("size").option("sm", "size-3")),
            )
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::IncompatibleSlotAxis { ref slot, ref axis, .. }
                if slot == "icon" && axis == "size"
        ));
    }

    #[test]
    fn test_slot_errors_propagate() {
        let err = StyleDefinition::builder()
            .slot(
                "icon",
                StyleDefinition::builder().default_variant("size", "sm"),
            )
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownDefaultAxis { .. }));
    }

    #[test]
    fn test_declares_axis_searches_slots() {
        let def = StyleDefinition::builder()
            .slot(
                "track",
                StyleDefinition::builder()
                    .variant(Axis::new("isSelected").option(false, "a").option(true, "b")),
            )
            .slot_base("label", "text-sm")
            .build()
            .unwrap();
        assert!(def.declares_axis("isSelected"));
        assert!(!def.declares_axis("size"));
    }
}
