//! # Stylecraft - Variant-Based Component Styles
//!
//! Stylecraft maps a component's declarative style configuration (base
//! classes, variant axes, defaults and slots) plus call-site choices into
//! final, conflict-free utility class strings.
//!
//! ## Crates
//!
//! - [`stylecraft_merge`]: token parsing, the property-group table and the
//!   last-token-wins [`Merger`]
//! - [`stylecraft_variants`]: [`StyleDefinition`], [`Selection`], the
//!   [`Resolver`] and definition loading
//! - this crate: the built-in component [`Catalog`] and typed component props
//!
//! ## Quick Start
//!
//! ```rust
//! use stylecraft::prelude::*;
//!
//! let catalog = Catalog::builtin()?;
//!
//! let button = Button::new()
//!     .variant(ButtonVariant::Outline)
//!     .size(ButtonSize::Lg)
//!     .class(&catalog)?;
//! assert!(button.contains("h-12 px-6 text-lg"));
//!
//! let switch = Switch::new().selected(true).resolve(&catalog)?;
//! assert!(switch.get("handle").unwrap().ends_with("translate-x-5"));
//! # Ok::<(), stylecraft::Error>(())
//! ```
//!
//! ## Custom definitions
//!
//! Definitions need not come from the catalog:
//!
//! ```rust
//! use stylecraft::{resolve, Axis, Selection, StyleDefinition};
//!
//! let badge = StyleDefinition::builder()
//!     .base("inline-flex rounded-full px-2 text-xs")
//!     .variant(Axis::new("tone").option("info", "bg-info").option("warn", "bg-warning"))
//!     .default_variant("tone", "info")
//!     .build()?;
//!
//! let class = resolve(&badge, &Selection::new().with_class("px-3"))?.class().to_string();
//! assert_eq!(class, "inline-flex rounded-full px-3 text-xs bg-info");
//! # Ok::<(), stylecraft::Error>(())
//! ```

pub mod catalog;
pub mod components;
mod error;

pub use catalog::{Catalog, BUILTIN_STYLES};
pub use error::{Error, Result};

pub use stylecraft_merge::{
    compose, merge, GroupCase, GroupRule, GroupTable, Merger, TableError, Token, ValueKind,
};
pub use stylecraft_variants::{
    config, define, resolve, Axis, ConfigError, InvalidVariantError, LoadError, RegistryError,
    ResolvedStyle, ResolvedTokens, Resolver, Selection, StyleDefinition, StyleDefinitionBuilder,
    StyleRegistry, Tokens, BASE_SLOT,
};

/// Everything needed to resolve components.
pub mod prelude {
    pub use crate::catalog::Catalog;
    pub use crate::components::{
        Button, ButtonSize, ButtonVariant, ColorPicker, ColorSwatch, Component, Input,
        Orientation, Select, SelectItem, Slider, SwatchShape, SwatchSize, Switch, Tab, TabList,
        TabPanel, Tabs,
    };
    pub use crate::error::{Error, Result};
    pub use stylecraft_variants::{Selection, StyleDefinition};
}
