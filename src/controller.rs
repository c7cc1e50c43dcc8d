//! The theme controller: owns the current [`Theme`] and keeps the document
//! root attribute, the persistent store and the icon pair in step with it.
//!
//! DESIGN
//! ======
//! The theme lives in an explicit field. The root attribute and the stored
//! value are projections written on every transition and never read back,
//! so a stale or hand-edited attribute cannot change what `toggle` does.
//! Environment failures are logged and skipped; nothing here panics.

use log::{debug, warn};

use crate::config::ThemeConfig;
use crate::display::{IconDisplay, IconVisibility};
use crate::page::{ThemeDom, ThemeStore};
use crate::theme::Theme;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Result of [`ThemeController::on_ready`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadyOutcome {
    pub theme: Theme,
    /// `false` when the toggle control is absent; no listener is attached.
    pub attach_toggle: bool,
}

pub struct ThemeController<S, D> {
    theme: Theme,
    store: S,
    dom: D,
    config: ThemeConfig,
}

impl<S: ThemeStore, D: ThemeDom> ThemeController<S, D> {
    /// Create a controller in the `light` state. Nothing is written until
    /// [`initialize`](Self::initialize) or [`toggle`](Self::toggle).
    #[must_use]
    pub fn new(store: S, dom: D, config: ThemeConfig) -> Self {
        Self { theme: Theme::default(), store, dom, config }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn dom(&self) -> &D {
        &self.dom
    }

    /// Apply the persisted theme (or the fallback) to the document.
    ///
    /// Does not write to the store.
    pub fn initialize(&mut self) -> Theme {
        let theme = self.stored_theme().unwrap_or_else(|| self.fallback_theme());
        debug!("theme: initialize -> {theme}");
        self.theme = theme;
        self.apply_root_attribute();
        self.sync_display(theme);
        theme
    }

    /// Run the page-ready step: [`initialize`](Self::initialize), then report
    /// whether the toggle control exists and should get a click listener.
    pub fn on_ready(&mut self) -> ReadyOutcome {
        let theme = self.initialize();
        let id = &self.config.switcher_id;
        let attach_toggle = self.dom.has_element(id);
        if !attach_toggle {
            debug!("theme: no #{id}, toggle disabled");
        }
        ReadyOutcome { theme, attach_toggle }
    }

    /// Flip the current theme, persist it and re-apply it.
    pub fn toggle(&mut self) -> Theme {
        self.set_theme(self.theme.toggled())
    }

    /// Switch to `theme` through the same path as [`toggle`](Self::toggle).
    pub fn set_theme(&mut self, theme: Theme) -> Theme {
        debug!("theme: {} -> {theme}", self.theme);
        self.theme = theme;
        self.apply_root_attribute();
        if let Err(e) = self.store.save(&self.config.storage_key, theme.as_str()) {
            warn!("theme: failed to persist {theme}: {e}");
        }
        self.sync_display(theme);
        theme
    }

    /// Show the icon matching `theme` and hide the other. Missing icons
    /// are skipped.
    pub fn sync_display(&mut self, theme: Theme) {
        let vis = IconVisibility::for_theme(theme);
        set_icon(&mut self.dom, &self.config.light_icon_id, vis.light);
        set_icon(&mut self.dom, &self.config.dark_icon_id, vis.dark);
    }

    fn apply_root_attribute(&mut self) {
        let name = &self.config.root_attribute;
        if let Err(e) = self.dom.set_root_attribute(name, self.theme.as_str()) {
            warn!("theme: failed to set {name}: {e}");
        }
    }

    fn stored_theme(&self) -> Option<Theme> {
        let key = &self.config.storage_key;
        let raw = match self.store.load(key) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("theme: failed to read {key:?}: {e}");
                return None;
            }
        };
        // Anything stored other than "light" means dark.
        match raw.parse::<Theme>() {
            Ok(theme) => Some(theme),
            Err(e) => {
                warn!("theme: {e}, treating as dark");
                Some(Theme::Dark)
            }
        }
    }

    fn fallback_theme(&self) -> Theme {
        if self.config.follow_system_preference && self.dom.prefers_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

fn set_icon<D: ThemeDom>(dom: &mut D, id: &str, display: IconDisplay) {
    match dom.set_display(id, display) {
        Ok(true) => {}
        Ok(false) => debug!("theme: icon #{id} not found"),
        Err(e) => warn!("theme: failed to update icon #{id}: {e}"),
    }
}
