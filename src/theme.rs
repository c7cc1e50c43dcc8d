//! The two-valued theme preference.
//!
//! `Theme` is the only piece of state in the crate. Its string form is what
//! lands in both the persistent store and the document root attribute.

use std::fmt;
use std::str::FromStr;

use crate::error::ThemeError;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Light or dark document appearance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Serialized form used for storage and the root attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite variant.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError::InvalidTheme(other.to_owned())),
        }
    }
}
