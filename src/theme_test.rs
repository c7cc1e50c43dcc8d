use super::*;

// =============================================================
// Parsing
// =============================================================

#[test]
fn parses_both_variants() {
    assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
    assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
}

#[test]
fn parse_is_case_sensitive() {
    let err = "Dark".parse::<Theme>().unwrap_err();
    assert!(matches!(err, ThemeError::InvalidTheme(ref v) if v == "Dark"));
}

#[test]
fn parse_rejects_empty_and_padded_values() {
    assert!("".parse::<Theme>().is_err());
    assert!(" light".parse::<Theme>().is_err());
}

// =============================================================
// Toggle / defaults
// =============================================================

#[test]
fn default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn toggled_flips_and_is_an_involution() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

#[test]
fn display_matches_stored_form() {
    assert_eq!(Theme::Dark.to_string(), "dark");
    assert_eq!(Theme::Light.to_string(), Theme::Light.as_str());
}
