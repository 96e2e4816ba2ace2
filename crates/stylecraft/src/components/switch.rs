use stylecraft_variants::{ResolvedStyle, Selection};

use super::{with_class, Component};
use crate::catalog::Catalog;
use crate::error::Result;

const TRACK: &str = "switch-track";
const HANDLE: &str = "switch-handle";

/// Props of a switch.
///
/// A switch is styled by three definitions: the labelled `root`, the `track`
/// and the sliding `handle`. [`Component::resolve`] returns all three, keyed by
/// those names. The caller class applies to the root; `selected` drives the
/// track and handle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Switch {
    /// Whether the switch is on.
    pub selected: bool,
    /// Extra classes for the root.
    pub class: Option<String>,
}

impl Switch {
    /// Creates props with nothing chosen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the switch is on.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Sets extra classes for the labelled root.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl Component for Switch {
    const NAME: &'static str = "switch";

    fn selection(&self) -> Selection {
        with_class(Selection::new(), self.class.as_deref())
    }

    fn resolve(&self, catalog: &Catalog) -> Result<ResolvedStyle> {
        let state = Selection::new().with("isSelected", self.selected);
        let root = catalog.class(Self::NAME, &self.selection())?;
        let track = catalog.class(TRACK, &state)?;
        let handle = catalog.class(HANDLE, &state)?;
        Ok([
            ("root".to_string(), root),
            ("track".to_string(), track),
            ("handle".to_string(), handle),
        ]
        .into_iter()
        .collect())
    }
}
