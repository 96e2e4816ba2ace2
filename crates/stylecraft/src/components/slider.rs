use stylecraft_variants::{ResolvedStyle, Selection};

use super::Component;
use crate::catalog::Catalog;
use crate::error::Result;

/// Props of a slider.
///
/// Resolves the slots `root`, `header`, `label`, `output`, `track`,
/// `track-background`, `track-fill` and `thumb`. The caller class is composed
/// over `root`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slider {
    /// Extra classes for the `root` slot.
    pub class: Option<String>,
}

impl Slider {
    /// Creates props with nothing chosen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets extra classes composed over the `root` slot.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl Component for Slider {
    const NAME: &'static str = "slider";

    fn selection(&self) -> Selection {
        Selection::new()
    }

    fn resolve(&self, catalog: &Catalog) -> Result<ResolvedStyle> {
        let style = catalog.resolve(Self::NAME, &self.selection())?;
        Ok(style
            .iter()
            .map(|(slot, class)| {
                let class = if slot == "root" {
                    catalog.compose(self.class.as_deref(), class)
                } else {
                    class.to_string()
                };
                (slot.to_string(), class)
            })
            .collect())
    }
}
