//! Color picker and swatch.

use std::fmt;

use stylecraft_variants::{ResolvedStyle, Selection};

use super::Component;
use crate::catalog::Catalog;
use crate::error::Result;

/// Props of a color picker.
///
/// The picker has no options of its own; it resolves its ten slots (`trigger`,
/// `swatch`, `popover`, `color-area`, `color-thumb`, `slider-track`,
/// `slider-output`, `hex-field`, `hex-label`, `hex-input`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorPicker;

impl ColorPicker {
    /// Creates the picker props.
    pub fn new() -> Self {
        Self
    }
}

impl Component for ColorPicker {
    const NAME: &'static str = "color-picker";

    fn selection(&self) -> Selection {
        Selection::new()
    }
}

/// Size of a [`ColorSwatch`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SwatchSize {
    /// 24px square.
    Sm,
    /// 32px square.
    #[default]
    Md,
    /// 40px square.
    Lg,
}

impl SwatchSize {
    /// The option name in the definition.
    pub fn as_str(self) -> &'static str {
        match self {
            SwatchSize::Sm => "sm",
            SwatchSize::Md => "md",
            SwatchSize::Lg => "lg",
        }
    }
}

impl fmt::Display for SwatchSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Corner shape of a [`ColorSwatch`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SwatchShape {
    /// Slightly rounded corners.
    #[default]
    Square,
    /// Fully rounded.
    Circle,
}

impl SwatchShape {
    /// The option name in the definition.
    pub fn as_str(self) -> &'static str {
        match self {
            SwatchShape::Square => "square",
            SwatchShape::Circle => "circle",
        }
    }
}

impl fmt::Display for SwatchShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Props of a color swatch.
///
/// The caller class is composed over the resolved swatch styles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorSwatch {
    /// Size; unset uses the definition default.
    pub size: Option<SwatchSize>,
    /// Corner shape; unset uses the definition default.
    pub shape: Option<SwatchShape>,
    /// Extra classes; they win over the component's own.
    pub class: Option<String>,
}

impl ColorSwatch {
    /// Creates props with nothing chosen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Chooses the size.
    pub fn size(mut self, size: SwatchSize) -> Self {
        self.size = Some(size);
        self
    }

    /// Chooses the corner shape.
    pub fn shape(mut self, shape: SwatchShape) -> Self {
        self.shape = Some(shape);
        self
    }

    /// Sets extra classes that win over the component's own.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl Component for ColorSwatch {
    const NAME: &'static str = "color-swatch";

    fn selection(&self) -> Selection {
        Selection::new()
            .with_opt("size", self.size)
            .with_opt("shape", self.shape)
    }

    fn resolve(&self, catalog: &Catalog) -> Result<ResolvedStyle> {
        let styles = catalog.class(Self::NAME, &self.selection())?;
        let class = catalog.compose(self.class.as_deref(), &styles);
        Ok(std::iter::once((String::new(), class)).collect())
    }
}
