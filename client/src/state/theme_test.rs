use super::*;

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
    assert!(!ThemeState::default().is_dark());
}

#[test]
fn toggled_flips_both_ways() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert!(ThemeState::default().toggled().is_dark());
    assert!(!ThemeState::default().toggled().toggled().is_dark());
}

#[test]
fn with_theme_replaces_value() {
    let state = ThemeState::default().with_theme(Theme::Dark);
    assert_eq!(state, ThemeState::new(Theme::Dark));
}

#[test]
fn attr_values_match_css_selectors() {
    assert_eq!(Theme::Light.as_attr(), "light");
    assert_eq!(Theme::Dark.as_attr(), "dark");
}

#[test]
fn theme_state_json_shape() {
    let json = serde_json::to_string(&ThemeState::new(Theme::Dark)).expect("json");
    assert_eq!(json, r#"{"theme":"dark"}"#);
}
