//! Typed props for the built-in components.
//!
//! Each props struct mirrors what a caller can choose for one component: its
//! variant axes as enums (unset fields fall back to the definition's
//! defaults) and an optional extra class string. [`Component`] turns the
//! props into a [`Selection`] and resolves it against a [`Catalog`].
//!
//! ```rust
//! use stylecraft::components::{Button, ButtonSize, Component};
//! use stylecraft::Catalog;
//!
//! let catalog = Catalog::builtin()?;
//! let class = Button::new().size(ButtonSize::Sm).with_class("w-full").class(&catalog)?;
//! assert!(class.ends_with("h-8 px-3 text-sm w-full"));
//! # Ok::<(), stylecraft::Error>(())
//! ```

mod button;
mod color;
mod field;
mod slider;
mod switch;
mod tabs;

use stylecraft_variants::{ResolvedStyle, Selection};

use crate::catalog::Catalog;
use crate::error::Result;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use color::{ColorPicker, ColorSwatch, SwatchShape, SwatchSize};
pub use field::{Input, Select, SelectItem};
pub use slider::Slider;
pub use switch::Switch;
pub use tabs::{Orientation, Tab, TabList, TabPanel, Tabs};

/// A component whose styles live in a [`Catalog`].
pub trait Component {
    /// Name of the component's definition in the catalog.
    const NAME: &'static str;

    /// The selection these props describe.
    fn selection(&self) -> Selection;

    /// Resolves the component's class strings.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog lacks the component or its definition
    /// does not accept the selection.
    fn resolve(&self, catalog: &Catalog) -> Result<ResolvedStyle> {
        catalog.resolve(Self::NAME, &self.selection())
    }

    /// Resolves the component and returns its first class string.
    ///
    /// # Errors
    ///
    /// See [`Component::resolve`].
    fn class(&self, catalog: &Catalog) -> Result<String> {
        Ok(self.resolve(catalog)?.class().to_string())
    }
}

fn with_class(selection: Selection, class: Option<&str>) -> Selection {
    match class {
        Some(class) => selection.with_class(class),
        None => selection,
    }
}

fn with_slot_class(selection: Selection, slot: &str, class: Option<&str>) -> Selection {
    match class {
        Some(class) => selection.with_slot_class(slot, class),
        None => selection,
    }
}
