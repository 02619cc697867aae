//! Light/dark theme slice.
//!
//! DESIGN
//! ======
//! The slice is the single owner of the theme; `util::theme_dom` only mirrors
//! it onto the `<html>` element. Persisted under the `theme` storage key.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::{Deserialize, Serialize};

/// Color scheme applied to the whole app.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value for the `data-theme` attribute.
    #[must_use]
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeState {
    pub theme: Theme,
}

impl ThemeState {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    #[must_use]
    pub fn toggled(&self) -> Self {
        Self { theme: self.theme.toggled() }
    }

    #[must_use]
    pub fn with_theme(&self, theme: Theme) -> Self {
        Self { theme }
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.theme == Theme::Dark
    }
}
