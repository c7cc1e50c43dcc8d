//! Names and options the controller uses to find its storage key and
//! DOM elements.
//!
//! Defaults match the markup the toggle ships with. A host page can override
//! any subset with an inline JSON element:
//!
//! ```html
//! <script type="application/json" id="theme-switcher-config">
//!   {"storage_key": "site-theme"}
//! </script>
//! ```

use serde::Deserialize;

use crate::error::ThemeError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Id of the optional inline element holding a JSON [`ThemeConfig`].
pub const CONFIG_ELEMENT_ID: &str = "theme-switcher-config";

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_ROOT_ATTRIBUTE: &str = "data-theme";
pub const DEFAULT_SWITCHER_ID: &str = "theme-switcher";
pub const DEFAULT_LIGHT_ICON_ID: &str = "theme-switcher-light";
pub const DEFAULT_DARK_ICON_ID: &str = "theme-switcher-dark";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Key under which the theme string is persisted.
    pub storage_key: String,
    /// Attribute set on the document root element.
    pub root_attribute: String,
    /// Id of the clickable toggle control.
    pub switcher_id: String,
    pub light_icon_id: String,
    pub dark_icon_id: String,
    /// When nothing is stored, start from the system color-scheme preference
    /// instead of `light`.
    pub follow_system_preference: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            root_attribute: DEFAULT_ROOT_ATTRIBUTE.to_owned(),
            switcher_id: DEFAULT_SWITCHER_ID.to_owned(),
            light_icon_id: DEFAULT_LIGHT_ICON_ID.to_owned(),
            dark_icon_id: DEFAULT_DARK_ICON_ID.to_owned(),
            follow_system_preference: false,
        }
    }
}

impl ThemeConfig {
    /// Parse a (possibly partial) JSON object. Missing fields keep their
    /// defaults; unknown fields are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Config`] when `raw` is not a valid config object.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(raw)?)
    }
}
