//! YAML and JSON definition documents.
//!
//! A definition document mirrors the builder API:
//!
//! ```yaml
//! base: inline-flex items-center rounded-md
//! variants:
//!   variant:
//!     primary: bg-primary text-on-primary
//!     outline: [border-2 border-main, bg-transparent]
//!   size:
//!     sm: h-8 px-3
//!     md: h-10 px-4
//! defaultVariants:
//!   variant: primary
//!   size: md
//! ```
//!
//! # Token lists
//!
//! Wherever tokens are expected, either a single whitespace-separated string
//! or a list of such strings is accepted.
//!
//! # Ordering
//!
//! Axes, options and slots keep document order, which is the order the
//! resolver applies them in.
//!
//! # Scalar keys
//!
//! Option names and default values may be written as YAML booleans or
//! numbers (`true:`, `isSelected: false`); they are normalized to strings.
//!
//! # Slots
//!
//! A slot is either a token list (base tokens only) or a nested definition
//! without slots of its own:
//!
//! ```yaml
//! slots:
//!   trigger: border-input h-10
//!   thumb:
//!     base: size-5 rounded-full
//!     variants:
//!       isDragging:
//!         true: bg-primary-pressed
//!         false: bg-primary
//! ```
//!
//! A *collection* document maps definition names to definitions and is what
//! [`crate::StyleRegistry::add_yaml_document`] reads.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};

use crate::definition::{Axis, StyleDefinition, StyleDefinitionBuilder};
use crate::error::{ConfigError, LoadError};
use crate::tokens::Tokens;

/// Deserialized form of one definition, before validation.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct DefinitionSpec {
    #[serde(default)]
    base: TokenList,
    #[serde(default)]
    variants: OrderedMap<OrderedMap<TokenList>>,
    #[serde(default, alias = "default_variants")]
    default_variants: OrderedMap<ScalarString>,
    #[serde(default)]
    slots: OrderedMap<SlotSpec>,
}

impl DefinitionSpec {
    /// Validates the document and builds the definition.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] under the same rules as
    /// [`crate::define`].
    pub fn into_definition(self) -> Result<StyleDefinition, ConfigError> {
        self.into_builder().build()
    }

    fn into_builder(self) -> StyleDefinitionBuilder {
        let mut builder = StyleDefinition::builder().base(self.base.into_tokens());
        for (name, options) in self.variants.0 {
            let axis = options
                .0
                .into_iter()
                .fold(Axis::new(name), |axis, (option, tokens)| {
                    axis.option(option, tokens.into_tokens())
                });
            builder = builder.variant(axis);
        }
        for (axis, option) in self.default_variants.0 {
            builder = builder.default_variant(axis, option.0);
        }
        for (name, slot) in self.slots.0 {
            let slot = match slot {
                SlotSpec::Tokens(tokens) => StyleDefinition::builder().base(tokens.into_tokens()),
                SlotSpec::Definition(spec) => spec.into_builder(),
            };
            builder = builder.slot(name, slot);
        }
        builder
    }
}

/// A token string or a list of token strings.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(untagged)]
enum TokenList {
    One(String),
    Many(Vec<String>),
}

impl Default for TokenList {
    fn default() -> Self {
        TokenList::Many(Vec::new())
    }
}

impl TokenList {
    fn into_tokens(self) -> Tokens {
        match self {
            TokenList::One(group) => Tokens::from(group),
            TokenList::Many(groups) => Tokens::from(groups),
        }
    }
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(untagged)]
enum SlotSpec {
    Tokens(TokenList),
    Definition(DefinitionSpec),
}

/// String that also accepts booleans and numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ScalarString(String);

impl<'de> Deserialize<'de> for ScalarString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScalarVisitor;

        impl Visitor<'_> for ScalarVisitor {
            type Value = ScalarString;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a string, boolean or number")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(ScalarString(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(ScalarString(v))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
                Ok(ScalarString(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(ScalarString(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(ScalarString(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(ScalarString(v.to_string()))
            }
        }

        deserializer.deserialize_any(ScalarVisitor)
    }
}

/// Map that keeps document order and accepts scalar keys.
#[derive(Debug, Clone)]
struct OrderedMap<T>(Vec<(String, T)>);

impl<T> Default for OrderedMap<T> {
    fn default() -> Self {
        OrderedMap(Vec::new())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for OrderedMap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for OrderedVisitor<T> {
            type Value = OrderedMap<T>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a mapping")
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(OrderedMap::default())
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<ScalarString, T>()? {
                    entries.push((key.0, value));
                }
                Ok(OrderedMap(entries))
            }
        }

        deserializer.deserialize_any(OrderedVisitor(PhantomData))
    }
}

/// Parses and validates a single YAML definition.
///
/// # Example
///
/// ```rust
/// use stylecraft_variants::{config, resolve, Selection};
///
/// let definition = config::definition_from_yaml(
///     "base: rounded-md\nvariants:\n  size:\n    sm: h-8\n    md: h-10\ndefaultVariants:\n  size: md\n",
/// )
/// .unwrap();
///
/// assert_eq!(resolve(&definition, &Selection::new()).unwrap().class(), "rounded-md h-10");
/// ```
///
/// # Errors
///
/// Returns [`LoadError::Yaml`] if the document does not parse and
/// [`LoadError::Invalid`] if the definition does not validate.
pub fn definition_from_yaml(source: &str) -> Result<StyleDefinition, LoadError> {
    let spec: DefinitionSpec = serde_yaml::from_str(source)?;
    Ok(spec.into_definition()?)
}

/// Parses and validates a single JSON definition.
///
/// # Errors
///
/// Returns [`LoadError::Json`] if the document does not parse and
/// [`LoadError::Invalid`] if the definition does not validate.
pub fn definition_from_json(source: &str) -> Result<StyleDefinition, LoadError> {
    let spec: DefinitionSpec = serde_json::from_str(source)?;
    Ok(spec.into_definition()?)
}

/// Parses and validates a YAML collection of named definitions, in document
/// order.
///
/// # Errors
///
/// Returns [`LoadError::Config`] naming the first definition that fails to
/// validate.
pub fn definitions_from_yaml(source: &str) -> Result<Vec<(String, StyleDefinition)>, LoadError> {
    let specs: OrderedMap<DefinitionSpec> = serde_yaml::from_str(source)?;
    build_all(specs)
}

/// Parses and validates a JSON collection of named definitions, in document
/// order.
///
/// # Errors
///
/// See [`definitions_from_yaml`].
pub fn definitions_from_json(source: &str) -> Result<Vec<(String, StyleDefinition)>, LoadError> {
    let specs: OrderedMap<DefinitionSpec> = serde_json::from_str(source)?;
    build_all(specs)
}

fn build_all(
    specs: OrderedMap<DefinitionSpec>,
) -> Result<Vec<(String, StyleDefinition)>, LoadError> {
    specs
        .0
        .into_iter()
        .map(|(name, spec)| match spec.into_definition() {
            Ok(definition) => Ok((name, definition)),
            Err(source) => Err(LoadError::Config { name, source }),
        })
        .collect()
}
