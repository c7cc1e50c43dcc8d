//! Icon visibility derived from the current theme.

use crate::theme::Theme;

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

/// Inline `display` value written to an icon element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconDisplay {
    InlineBlock,
    Hidden,
}

impl IconDisplay {
    /// CSS value for the element's inline `display` property.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::InlineBlock => "inline-block",
            Self::Hidden => "none",
        }
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        self == Self::InlineBlock
    }
}

/// Display state for the light/dark icon pair.
///
/// Always computed from a [`Theme`], never toggled in place, so the two
/// icons cannot drift apart: exactly one of them is visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconVisibility {
    pub light: IconDisplay,
    pub dark: IconDisplay,
}

impl IconVisibility {
    #[must_use]
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self { light: IconDisplay::InlineBlock, dark: IconDisplay::Hidden },
            Theme::Dark => Self { light: IconDisplay::Hidden, dark: IconDisplay::InlineBlock },
        }
    }
}
