use std::fmt;

use stylecraft_variants::Selection;

use super::{with_class, Component};

/// Visual emphasis of a [`Button`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    /// Solid brand color.
    #[default]
    Primary,
    /// Muted solid color.
    Secondary,
    /// Bordered with a transparent background.
    Outline,
    /// Danger color for irreversible actions.
    Destructive,
    /// Styled as an inline link.
    Link,
}

impl ButtonVariant {
    /// The option name in the button definition.
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Destructive => "destructive",
            ButtonVariant::Link => "link",
        }
    }
}

impl fmt::Display for ButtonVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Height and padding scale of a [`Button`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ButtonSize {
    /// 32px high.
    Sm,
    /// 40px high.
    #[default]
    Md,
    /// 48px high.
    Lg,
}

impl ButtonSize {
    /// The option name in the button definition.
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonSize::Sm => "sm",
            ButtonSize::Md => "md",
            ButtonSize::Lg => "lg",
        }
    }
}

impl fmt::Display for ButtonSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Props of a button.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Button {
    /// Visual emphasis; unset uses the definition default.
    pub variant: Option<ButtonVariant>,
    /// Size; unset uses the definition default.
    pub size: Option<ButtonSize>,
    /// Extra classes; they win over the button's own.
    pub class: Option<String>,
}

impl Button {
    /// Creates props with nothing chosen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Chooses the visual emphasis.
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Chooses the size.
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets extra classes that win over the component's own.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl Component for Button {
    const NAME: &'static str = "button";

    fn selection(&self) -> Selection {
        let selection = Selection::new()
            .with_opt("variant", self.variant)
            .with_opt("size", self.size);
        with_class(selection, self.class.as_deref())
    }
}
