//! Seams between the controller and its environment.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller only ever writes to the persistent store and the document;
//! it never reads the DOM back to recover state. Keeping both behind traits
//! lets the same controller run against `web_sys` in the browser and against
//! the in-memory types below in host tests.

use std::collections::{HashMap, HashSet};

use crate::display::IconDisplay;
use crate::error::ThemeError;

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// Persistent key-value store surviving page reloads.
pub trait ThemeStore {
    /// Read the value stored under `key`, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error when the store is unavailable or the read throws.
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError>;

    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the store is unavailable or rejects the write.
    fn save(&mut self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// The parts of the document the controller projects the theme onto.
pub trait ThemeDom {
    /// Set `name` on the document root element.
    ///
    /// # Errors
    ///
    /// Returns an error when there is no root element or the write fails.
    fn set_root_attribute(&mut self, name: &str, value: &str) -> Result<(), ThemeError>;

    /// Set the inline display of the element with `id`.
    ///
    /// Returns `Ok(false)` when no such element exists.
    ///
    /// # Errors
    ///
    /// Returns an error when the element exists but cannot be styled.
    fn set_display(&mut self, id: &str, display: IconDisplay) -> Result<bool, ThemeError>;

    /// Whether an element with `id` exists.
    fn has_element(&self, id: &str) -> bool;

    /// Whether the environment reports a dark color-scheme preference.
    fn prefers_dark(&self) -> bool {
        false
    }
}

/// In-memory [`ThemeStore`].
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    unavailable: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_owned(), value.to_owned());
        store
    }

    /// A store whose every operation fails, like storage disabled by the
    /// browser's privacy settings.
    #[must_use]
    pub fn unavailable() -> Self {
        Self { entries: HashMap::new(), unavailable: true }
    }

    /// Raw stored value, bypassing the availability flag.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl ThemeStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        if self.unavailable {
            return Err(ThemeError::StorageUnavailable);
        }
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        if self.unavailable {
            return Err(ThemeError::StorageUnavailable);
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// In-memory [`ThemeDom`]: a root attribute map plus a set of element ids.
#[derive(Clone, Debug, Default)]
pub struct MemoryDom {
    root_attributes: HashMap<String, String>,
    elements: HashSet<String>,
    displays: HashMap<String, IconDisplay>,
    prefers_dark: bool,
}

impl MemoryDom {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element with `id` to the document.
    #[must_use]
    pub fn with_element(mut self, id: &str) -> Self {
        self.elements.insert(id.to_owned());
        self
    }

    #[must_use]
    pub fn with_dark_preference(mut self, prefers_dark: bool) -> Self {
        self.prefers_dark = prefers_dark;
        self
    }

    #[must_use]
    pub fn root_attribute(&self, name: &str) -> Option<&str> {
        self.root_attributes.get(name).map(String::as_str)
    }

    /// Inline display last written to `id`, `None` if never written or the
    /// element does not exist.
    #[must_use]
    pub fn display(&self, id: &str) -> Option<IconDisplay> {
        self.displays.get(id).copied()
    }
}

impl ThemeDom for MemoryDom {
    fn set_root_attribute(&mut self, name: &str, value: &str) -> Result<(), ThemeError> {
        self.root_attributes.insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn set_display(&mut self, id: &str, display: IconDisplay) -> Result<bool, ThemeError> {
        if !self.elements.contains(id) {
            return Ok(false);
        }
        self.displays.insert(id.to_owned(), display);
        Ok(true)
    }

    fn has_element(&self, id: &str) -> bool {
        self.elements.contains(id)
    }

    fn prefers_dark(&self) -> bool {
        self.prefers_dark
    }
}
