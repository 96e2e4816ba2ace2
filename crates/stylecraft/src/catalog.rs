//! The component style catalog.
//!
//! A [`Catalog`] pairs a [`StyleRegistry`] of component definitions with the
//! [`Resolver`] used to turn selections into class strings. The built-in
//! catalog is parsed from an embedded YAML document at construction; nothing
//! is read from disk.
//!
//! Build the catalog once at startup and pass it by reference to the code that
//! renders components.

use stylecraft_merge::{GroupTable, Merger};
use stylecraft_variants::{
    RegistryError, ResolvedStyle, Resolver, Selection, StyleDefinition, StyleRegistry,
};

use crate::error::Result;

/// Built-in component definitions.
pub const BUILTIN_STYLES: &str = include_str!("../styles/components.yaml");

/// Component definitions plus the resolver that applies them.
///
/// # Example
///
/// ```rust
/// use stylecraft::{Catalog, Selection};
///
/// let catalog = Catalog::builtin()?;
/// let class = catalog.class("color-swatch", &Selection::new().with("shape", "circle"))?;
/// assert_eq!(class, "rounded-full border-secondary shadow-sm h-8 w-8");
/// # Ok::<(), stylecraft::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    registry: StyleRegistry,
    resolver: Resolver,
}

impl Catalog {
    /// Creates the catalog of built-in component styles.
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded document is invalid.
    pub fn builtin() -> Result<Self> {
        let mut registry = StyleRegistry::new();
        registry.add_yaml_document(BUILTIN_STYLES)?;
        tracing::debug!(components = registry.len(), "built-in catalog loaded");
        Ok(Self::from_registry(registry))
    }

    /// Creates a catalog over an existing registry.
    pub fn from_registry(registry: StyleRegistry) -> Self {
        Self {
            registry,
            resolver: Resolver::new(),
        }
    }

    /// Replaces the resolver.
    pub fn with_resolver(mut self, resolver: Resolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Replaces the property-group table used for merging.
    ///
    /// # Errors
    ///
    /// Returns an error if the table does not validate.
    pub fn with_table(self, table: GroupTable) -> Result<Self> {
        let merger = Merger::with_table(table)?;
        Ok(self.with_resolver(Resolver::with_merger(merger)))
    }

    /// The registered definitions.
    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    /// The resolver.
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Looks up a component definition.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] for unknown names.
    pub fn definition(&self, name: &str) -> std::result::Result<&StyleDefinition, RegistryError> {
        self.registry.get(name)
    }

    /// Resolves a selection against a named component.
    ///
    /// # Errors
    ///
    /// Returns an error if the component is unknown or the selection does not
    /// fit its definition.
    pub fn resolve(&self, name: &str, selection: &Selection) -> Result<ResolvedStyle> {
        let definition = self.registry.get(name)?;
        let style = self.resolver.resolve(definition, selection)?;
        tracing::debug!(component = name, parts = style.len(), "component resolved");
        Ok(style)
    }

    /// Resolves a named component and returns its first class string.
    ///
    /// # Errors
    ///
    /// See [`Self::resolve`].
    pub fn class(&self, name: &str, selection: &Selection) -> Result<String> {
        Ok(self.resolve(name, selection)?.class().to_string())
    }

    /// Merges a caller class string over resolved styles with this catalog's
    /// merger.
    pub fn compose(&self, class_name: Option<&str>, styles: &str) -> String {
        self.resolver.merger().compose(class_name, styles)
    }
}
