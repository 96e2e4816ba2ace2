use stylecraft_merge::TableError;
use stylecraft_variants::{ConfigError, InvalidVariantError, LoadError, RegistryError};

/// Any error raised while building a catalog or resolving a component.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A style definition is malformed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A selection does not fit its definition.
    #[error(transparent)]
    InvalidVariant(#[from] InvalidVariantError),

    /// A component name is unknown or registered twice.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// A definition document could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// A property-group table is malformed.
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
