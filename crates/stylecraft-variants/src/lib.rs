//! Variant-based style definitions resolved into merged class strings.
//!
//! A component's styling is declared once as a [`StyleDefinition`]: base
//! tokens, named variant axes with mutually exclusive options, default options
//! and optional slots. At render time a [`Selection`] (the caller's axis
//! choices and override classes) is resolved against the definition, and the
//! resulting token sequence is merged by [`stylecraft_merge::Merger`] so that
//! later tokens win per property group.
//!
//! # Quick Start
//!
//! ```rust
//! use stylecraft_variants::{resolve, Axis, Selection, StyleDefinition};
//!
//! let button = StyleDefinition::builder()
//!     .base("inline-flex items-center rounded-md")
//!     .variant(
//!         Axis::new("size")
//!             .option("sm", "h-8 px-3 text-sm")
//!             .option("md", "h-10 px-4 text-base"),
//!     )
//!     .default_variant("size", "md")
//!     .build()?;
//!
//! let style = resolve(&button, &Selection::new().with_class("px-6"))?;
//! assert_eq!(style.class(), "inline-flex items-center rounded-md h-10 px-6 text-base");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Precedence
//!
//! Tokens are applied in this order, later winning:
//!
//! 1. base tokens
//! 2. axis option tokens, in axis declaration order
//! 3. the selection's override classes
//! 4. the selection's override classes for the slot being resolved
//!
//! # Slots
//!
//! Slotted definitions resolve every slot independently with the same
//! selection, producing one class string per slot:
//!
//! ```rust
//! use stylecraft_variants::{resolve, Selection, StyleDefinition};
//!
//! let select = StyleDefinition::builder()
//!     .slot_base("trigger", "border-input")
//!     .slot_base("popover", "shadow-lg")
//!     .build()?;
//!
//! let style = resolve(&select, &Selection::new())?;
//! assert_eq!(style.get("trigger"), Some("border-input"));
//! assert_eq!(style.get("popover"), Some("shadow-lg"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Axes declared inside a slot belong to that slot. A selection may choose an
//! option for any axis declared at the top level or in a slot.
//!
//! # Loading definitions
//!
//! Definitions can also be written as YAML or JSON documents ([`config`]) and
//! collected in a [`StyleRegistry`], including from a directory of files.
//!
//! # Errors
//!
//! - [`ConfigError`]: a definition is malformed. Raised when it is built.
//! - [`InvalidVariantError`]: a selection does not fit its definition. Raised
//!   when resolving; the resolver never falls back on its own.
//! - [`RegistryError`] and [`LoadError`]: registry lookups and document loading.

pub mod config;
mod definition;
mod error;
mod registry;
mod resolve;
mod selection;
mod tokens;

pub use definition::{
    define, Axis, StyleDefinition, StyleDefinitionBuilder, VariantOption, BASE_SLOT,
};
pub use error::{ConfigError, InvalidVariantError, LoadError, RegistryError};
pub use registry::{walk_definition_dir, DefinitionFile, StyleRegistry, DEFINITION_EXTENSIONS};
pub use resolve::{resolve, ResolvedStyle, ResolvedTokens, Resolver};
pub use selection::Selection;
pub use tokens::Tokens;

pub use stylecraft_merge::{compose, merge, Merger};
