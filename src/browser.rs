//! Browser bindings: `localStorage`, the live document, and event wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only module that touches `web_sys`. It builds one
//! [`ThemeController`] per page, shares it between the load and click
//! closures through `Rc<RefCell<_>>`, and never holds a borrow across
//! handlers. Compiled only with the `hydrate` feature.

use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Event, HtmlElement, Window};

use crate::config::{CONFIG_ELEMENT_ID, ThemeConfig};
use crate::controller::ThemeController;
use crate::display::IconDisplay;
use crate::error::ThemeError;
use crate::page::{ThemeDom, ThemeStore};

type PageController = ThemeController<LocalStorageStore, BrowserDocument>;

/// [`ThemeStore`] backed by `window.localStorage`.
pub struct LocalStorageStore {
    window: Window,
}

impl LocalStorageStore {
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    fn storage(&self) -> Result<web_sys::Storage, ThemeError> {
        self.window
            .local_storage()
            .ok()
            .flatten()
            .ok_or(ThemeError::StorageUnavailable)
    }
}

impl ThemeStore for LocalStorageStore {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| ThemeError::Storage(js_message(&e)))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| ThemeError::Storage(js_message(&e)))
    }
}

/// [`ThemeDom`] over the page's live `document`.
pub struct BrowserDocument {
    window: Window,
    document: Document,
}

impl BrowserDocument {
    #[must_use]
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }
}

impl ThemeDom for BrowserDocument {
    fn set_root_attribute(&mut self, name: &str, value: &str) -> Result<(), ThemeError> {
        let root = self
            .document
            .document_element()
            .ok_or_else(|| ThemeError::Dom("document has no root element".into()))?;
        root.set_attribute(name, value)
            .map_err(|e| ThemeError::Dom(js_message(&e)))
    }

    fn set_display(&mut self, id: &str, display: IconDisplay) -> Result<bool, ThemeError> {
        let Some(el) = self.document.get_element_by_id(id) else {
            return Ok(false);
        };
        let el = el
            .dyn_into::<HtmlElement>()
            .map_err(|_| ThemeError::Dom(format!("#{id} is not an html element")))?;
        el.style()
            .set_property("display", display.as_css())
            .map_err(|e| ThemeError::Dom(js_message(&e)))?;
        Ok(true)
    }

    fn has_element(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn prefers_dark(&self) -> bool {
        self.window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }
}

/// Entry point run when the wasm module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    init_logging();
    if let Err(e) = mount() {
        warn!("theme: mount failed: {e}");
    }
}

/// Build the page's controller and run it once the DOM is ready.
///
/// If the document is past `loading` the ready step runs immediately;
/// otherwise a one-shot `DOMContentLoaded` listener is registered.
///
/// # Errors
///
/// Returns [`ThemeError::Dom`] when there is no window or document, or the
/// ready listener cannot be attached.
pub fn mount() -> Result<(), ThemeError> {
    let window = web_sys::window().ok_or_else(|| ThemeError::Dom("no window".into()))?;
    let document = window.document().ok_or_else(|| ThemeError::Dom("no document".into()))?;
    let config = page_config(&document);

    let store = LocalStorageStore::new(window.clone());
    let dom = BrowserDocument::new(window, document.clone());
    let controller = Rc::new(RefCell::new(ThemeController::new(store, dom, config)));

    if document.ready_state() != "loading" {
        on_ready(&controller, &document);
        return Ok(());
    }

    let target = document.clone();
    let on_ready_cb = Closure::once_into_js(move || on_ready(&controller, &document));
    let opts = AddEventListenerOptions::new();
    opts.set_once(true);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            on_ready_cb.unchecked_ref(),
            &opts,
        )
        .map_err(|e| ThemeError::Dom(js_message(&e)))
}

/// Config from the inline JSON element, or the defaults when the element is
/// absent or invalid.
fn page_config(document: &Document) -> ThemeConfig {
    let Some(el) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return ThemeConfig::default();
    };
    let raw = el.text_content().unwrap_or_default();
    ThemeConfig::from_json(&raw).unwrap_or_else(|e| {
        warn!("theme: #{CONFIG_ELEMENT_ID}: {e}, using defaults");
        ThemeConfig::default()
    })
}

fn on_ready(controller: &Rc<RefCell<PageController>>, document: &Document) {
    let outcome = controller.borrow_mut().on_ready();
    info!("theme: applied {}", outcome.theme);
    if !outcome.attach_toggle {
        return;
    }

    let switcher_id = controller.borrow().config().switcher_id.clone();
    let Some(switcher) = document.get_element_by_id(&switcher_id) else {
        return;
    };

    let controller = Rc::clone(controller);
    let on_click = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        ev.prevent_default();
        controller.borrow_mut().toggle();
    });
    if let Err(e) = switcher.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
        warn!("theme: failed to attach click listener: {}", js_message(&e));
        return;
    }
    // The listener lives for the rest of the page session.
    on_click.forget();
}

fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

fn js_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}
