use super::*;

#[test]
fn light_theme_shows_light_icon_only() {
    let vis = IconVisibility::for_theme(Theme::Light);
    assert_eq!(vis.light, IconDisplay::InlineBlock);
    assert_eq!(vis.dark, IconDisplay::Hidden);
}

#[test]
fn dark_theme_shows_dark_icon_only() {
    let vis = IconVisibility::for_theme(Theme::Dark);
    assert_eq!(vis.light.as_css(), "none");
    assert_eq!(vis.dark.as_css(), "inline-block");
}

#[test]
fn exactly_one_icon_is_visible_for_every_theme() {
    for theme in [Theme::Light, Theme::Dark] {
        let vis = IconVisibility::for_theme(theme);
        assert_ne!(vis.light.is_visible(), vis.dark.is_visible(), "{theme}");
    }
}
