use super::*;

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_load_missing_key_is_none() {
    let store = MemoryStore::new();
    assert_eq!(store.load("theme").unwrap(), None);
}

#[test]
fn memory_store_save_then_load() {
    let mut store = MemoryStore::new();
    store.save("theme", "dark").unwrap();
    assert_eq!(store.load("theme").unwrap().as_deref(), Some("dark"));
    assert_eq!(store.get("theme"), Some("dark"));
}

#[test]
fn unavailable_store_fails_both_ways() {
    let mut store = MemoryStore::unavailable();
    assert!(matches!(store.load("theme"), Err(ThemeError::StorageUnavailable)));
    assert!(matches!(store.save("theme", "dark"), Err(ThemeError::StorageUnavailable)));
    assert_eq!(store.get("theme"), None);
}

// =============================================================
// MemoryDom
// =============================================================

#[test]
fn memory_dom_set_display_on_missing_element_reports_false() {
    let mut dom = MemoryDom::new();
    assert!(!dom.set_display("nope", IconDisplay::Hidden).unwrap());
    assert_eq!(dom.display("nope"), None);
}

#[test]
fn memory_dom_records_display_for_present_element() {
    let mut dom = MemoryDom::new().with_element("icon");
    assert!(dom.set_display("icon", IconDisplay::InlineBlock).unwrap());
    assert_eq!(dom.display("icon"), Some(IconDisplay::InlineBlock));
}

#[test]
fn memory_dom_has_element_only_for_added_ids() {
    let dom = MemoryDom::new().with_element("theme-switcher");
    assert!(dom.has_element("theme-switcher"));
    assert!(!dom.has_element("theme-switcher-light"));
}

#[test]
fn memory_dom_root_attribute_roundtrip() {
    let mut dom = MemoryDom::new();
    assert_eq!(dom.root_attribute("data-theme"), None);
    dom.set_root_attribute("data-theme", "dark").unwrap();
    assert_eq!(dom.root_attribute("data-theme"), Some("dark"));
}

#[test]
fn memory_dom_dark_preference_defaults_off() {
    assert!(!MemoryDom::new().prefers_dark());
    assert!(MemoryDom::new().with_dark_preference(true).prefers_dark());
}
