use std::fmt;

use stylecraft_variants::Selection;

use super::{with_class, Component};

/// Layout direction of [`Tabs`] and [`TabList`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Tabs in a row above the panel.
    #[default]
    Horizontal,
    /// Tabs in a column beside the panel.
    Vertical,
}

impl Orientation {
    /// The option name in the definition.
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Props of the tabs container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tabs {
    /// Layout direction.
    pub orientation: Orientation,
    /// Extra classes; they win over the component's own.
    pub class: Option<String>,
}

impl Tabs {
    /// Creates props with the horizontal orientation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Chooses the layout direction.
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets extra classes that win over the component's own.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl Component for Tabs {
    const NAME: &'static str = "tabs";

    fn selection(&self) -> Selection {
        let selection = Selection::new().with("orientation", self.orientation);
        with_class(selection, self.class.as_deref())
    }
}

/// Props of the row (or column) of tab buttons.
///
/// Unset orientation uses the definition default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabList {
    /// Layout direction; unset uses the definition default.
    pub orientation: Option<Orientation>,
    /// Extra classes; they win over the component's own.
    pub class: Option<String>,
}

impl TabList {
    /// Creates props with nothing chosen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Chooses the layout direction.
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    /// Sets extra classes that win over the component's own.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl Component for TabList {
    const NAME: &'static str = "tab-list";

    fn selection(&self) -> Selection {
        let selection = Selection::new().with_opt("orientation", self.orientation);
        with_class(selection, self.class.as_deref())
    }
}

/// Props of a single tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tab {
    /// Extra classes; they win over the component's own.
    pub class: Option<String>,
}

impl Tab {
    /// Creates props with nothing chosen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the extra classes.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl Component for Tab {
    const NAME: &'static str = "tab";

    fn selection(&self) -> Selection {
        with_class(Selection::new(), self.class.as_deref())
    }
}

/// Props of the panel shown for the selected tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabPanel {
    /// Extra classes; they win over the component's own.
    pub class: Option<String>,
}

impl TabPanel {
    /// Creates props with nothing chosen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the extra classes.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl Component for TabPanel {
    const NAME: &'static str = "tab-panel";

    fn selection(&self) -> Selection {
        with_class(Selection::new(), self.class.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Catalog;

    #[test]
    fn test_tabs_orientation() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(Tabs::new().class(&catalog).unwrap(), "flex flex-col");
        assert_eq!(
            Tabs::new()
                .orientation(Orientation::Vertical)
                .class(&catalog)
                .unwrap(),
            "flex flex-row gap-4"
        );
    }

    #[test]
    fn test_tab_list_orientation() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(
            TabList::new().class(&catalog).unwrap(),
            "flex flex-row border-b border-main"
        );
        assert_eq!(
            TabList::new()
                .orientation(Orientation::Vertical)
                .class(&catalog)
                .unwrap(),
            "flex flex-col border-r border-main"
        );
    }

    #[test]
    fn test_tab_negative_margin_overridden() {
        let catalog = Catalog::builtin().unwrap();
        let class = Tab::new().with_class("mb-0").class(&catalog).unwrap();
        assert!(class.split(' ').any(|t| t == "mb-0"));
        assert!(!class.split(' ').any(|t| t == "-mb-px"));
    }

    #[test]
    fn test_tab_panel() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(
            TabPanel::new().with_class("pt-2").class(&catalog).unwrap(),
            "pt-2 outline-none focus-visible:ring-2 focus-visible:ring-focus-ring"
        );
    }
}
