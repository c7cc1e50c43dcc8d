use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn defaults_match_shipped_markup() {
    let cfg = ThemeConfig::default();
    assert_eq!(cfg.storage_key, "theme");
    assert_eq!(cfg.root_attribute, "data-theme");
    assert_eq!(cfg.switcher_id, "theme-switcher");
    assert_eq!(cfg.light_icon_id, "theme-switcher-light");
    assert_eq!(cfg.dark_icon_id, "theme-switcher-dark");
    assert!(!cfg.follow_system_preference);
}

// =============================================================
// JSON parsing
// =============================================================

#[test]
fn empty_object_yields_defaults() {
    assert_eq!(ThemeConfig::from_json("{}").unwrap(), ThemeConfig::default());
}

#[test]
fn partial_object_overrides_named_fields_only() {
    let cfg = ThemeConfig::from_json(r#"{"storage_key":"site-theme","follow_system_preference":true}"#).unwrap();
    assert_eq!(cfg.storage_key, "site-theme");
    assert!(cfg.follow_system_preference);
    assert_eq!(cfg.root_attribute, DEFAULT_ROOT_ATTRIBUTE);
    assert_eq!(cfg.switcher_id, DEFAULT_SWITCHER_ID);
}

#[test]
fn unknown_field_is_rejected() {
    let err = ThemeConfig::from_json(r#"{"storage":"x"}"#).unwrap_err();
    assert!(matches!(err, ThemeError::Config(_)));
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = ThemeConfig::from_json("not json").unwrap_err();
    assert!(err.to_string().starts_with("invalid theme config"));
}
