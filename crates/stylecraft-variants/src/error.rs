//! Definition, resolution and loading errors.

use std::path::PathBuf;

/// Error returned when a style definition is malformed.
///
/// Raised only while a definition is being built, never during resolution.
/// A definition that fails to build cannot be used until its configuration is
/// fixed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An axis declares no options.
    #[error("variant axis '{axis}' declares no options")]
    EmptyAxis { axis: String },

    /// Two axes share a name.
    #[error("variant axis '{axis}' is declared more than once")]
    DuplicateAxis { axis: String },

    /// An axis declares the same option twice.
    #[error("option '{option}' is declared more than once on axis '{axis}'")]
    DuplicateOption { axis: String, option: String },

    /// A default names an axis that is not declared.
    #[error("default variant references undeclared axis '{axis}'")]
    UnknownDefaultAxis { axis: String },

    /// A default names an option its axis does not declare.
    #[error("default option '{option}' is not declared on axis '{axis}'")]
    UnknownDefaultOption { axis: String, option: String },

    /// Two slots share a name.
    #[error("slot '{slot}' is declared more than once")]
    DuplicateSlot { slot: String },

    /// A slot definition declares slots of its own.
    #[error("slot '{slot}' declares nested slots")]
    NestedSlots { slot: String },

    /// A slot and the top level declare the same axis with different options.
    #[error(
        "axis '{axis}' in slot '{slot}' has options [{}] but the top-level axis has [{}]",
        .slot_options.join(", "),
        .top_options.join(", ")
    )]
    IncompatibleSlotAxis {
        slot: String,
        axis: String,
        slot_options: Vec<String>,
        top_options: Vec<String>,
    },
}

/// Error returned when a selection does not fit the definition it is resolved against.
///
/// The resolver never guesses: callers decide whether to reject the render or
/// retry with the axis default.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidVariantError {
    /// The selection names an axis the definition does not declare.
    #[error("unknown variant axis '{axis}' (selected option '{option}')")]
    UnknownAxis { axis: String, option: String },

    /// The selection names an option its axis does not declare.
    #[error(
        "unknown option '{option}' for axis '{axis}' (expected one of: {})",
        .available.join(", ")
    )]
    UnknownOption {
        axis: String,
        option: String,
        available: Vec<String>,
    },

    /// The selection targets a slot the definition does not declare.
    #[error("unknown slot '{slot}'")]
    UnknownSlot { slot: String },
}

impl InvalidVariantError {
    /// The axis the error is about, if any.
    pub fn axis(&self) -> Option<&str> {
        match self {
            InvalidVariantError::UnknownAxis { axis, .. }
            | InvalidVariantError::UnknownOption { axis, .. } => Some(axis),
            InvalidVariantError::UnknownSlot { .. } => None,
        }
    }
}

/// Error returned by [`crate::StyleRegistry`] lookups and insertions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Two sources define the same name.
    #[error(
        "style definition collision for \"{name}\":\n  - {existing_source}\n  - {conflicting_source}"
    )]
    Collision {
        name: String,
        existing_source: String,
        conflicting_source: String,
    },

    /// No definition is registered under the name.
    #[error("style definition not found: \"{name}\"")]
    NotFound { name: String },
}

/// Error returned while reading definition documents.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The YAML document does not parse.
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The JSON document does not parse.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A file or directory could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A single definition failed validation.
    #[error("invalid style definition: {0}")]
    Invalid(#[from] ConfigError),

    /// A named definition failed validation.
    #[error("invalid style definition '{name}': {source}")]
    Config {
        name: String,
        #[source]
        source: ConfigError,
    },

    /// A file does not have a definition extension.
    #[error("unsupported definition file: {} (expected .yaml, .yml or .json)", .path.display())]
    UnsupportedExtension { path: PathBuf },

    /// A loaded definition clashes with a registered one.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
