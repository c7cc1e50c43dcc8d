//! # theme-switcher
//!
//! Light/dark theme toggle for a static site, compiled to WebAssembly.
//!
//! On page load the persisted preference (default `light`) is written to the
//! `data-theme` attribute of `<html>` and one of two icons is shown. Clicking
//! `#theme-switcher` flips the theme, persists it to `localStorage` under
//! `theme`, and re-applies it.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | The [`theme::Theme`] value and its string form |
//! | [`display`] | Icon visibility derived from a theme |
//! | [`config`] | Storage key, attribute name and element ids |
//! | [`page`] | Store/document seams and in-memory implementations |
//! | [`controller`] | [`controller::ThemeController`]: initialize and toggle |
//! | `browser` | `web_sys` bindings and event wiring (`hydrate` feature) |

pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod page;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod browser;

pub use controller::ThemeController;
pub use error::ThemeError;
pub use theme::Theme;
