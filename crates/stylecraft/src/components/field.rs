//! Form fields: text input and select.

use stylecraft_variants::Selection;

use super::{with_class, with_slot_class, Component};

/// Props of a text input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Input {
    /// Extra classes; they win over the component's own.
    pub class: Option<String>,
}

impl Input {
    /// Creates props with nothing chosen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets extra classes that win over the component's own.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl Component for Input {
    const NAME: &'static str = "input";

    fn selection(&self) -> Selection {
        with_class(Selection::new(), self.class.as_deref())
    }
}

/// Props of a select field.
///
/// Resolves every slot (`root`, `label`, `trigger`, `popover`, `listbox`,
/// `description`, `error`). The caller class only reaches `root`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Select {
    /// Extra classes for the `root` slot.
    pub class: Option<String>,
}

impl Select {
    /// Creates props with nothing chosen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets extra classes for the `root` slot.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl Component for Select {
    const NAME: &'static str = "select";

    fn selection(&self) -> Selection {
        with_slot_class(Selection::new(), "root", self.class.as_deref())
    }
}

/// Props of one option inside a [`Select`] list box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectItem {
    /// Extra classes; they win over the component's own.
    pub class: Option<String>,
}

impl SelectItem {
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

impl Component for SelectItem {
    const NAME: &'static str = "select-item";

    fn selection(&self) -> Selection {
        with_class(Selection::new(), self.class.as_deref())
    }
}
