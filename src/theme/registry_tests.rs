//! Tests for theme/registry

use super::*;
use crate::theme::{DEFAULT_THEME, style_map};

#[test]
fn test_with_builtins_has_default_theme() {
    let registry = ThemeRegistry::with_builtins();
    assert!(registry.contains(DEFAULT_THEME));
    assert_eq!(registry.names(), vec!["kodama", "white_tiger"]);
}

#[test]
fn test_builtin_kodama_item_colors() {
    let registry = ThemeRegistry::with_builtins();
    let theme = registry.lookup("kodama").unwrap();
    assert_eq!(
        theme.styles.item_title.get("color").map(String::as_str),
        Some("rgb(220,200,120)")
    );
    assert_eq!(
        theme.styles.item_value.get("color").map(String::as_str),
        Some("rgb(234,224,184)")
    );
}

#[test]
fn test_white_tiger_carries_default_options() {
    let registry = ThemeRegistry::with_builtins();
    let theme = registry.lookup("white_tiger").unwrap();
    assert_eq!(theme.options.fade_out_duration, Some(300));
    assert_eq!(theme.options.distance, None);
}

#[test]
fn test_register_and_lookup() {
    let mut registry = ThemeRegistry::new();
    let styles = StyleBundle {
        title: style_map([("color", "red")]),
        ..StyleBundle::default()
    };

    assert!(!registry.register("alert", styles.clone()));
    assert_eq!(registry.lookup("alert").unwrap().styles, styles);
}

#[test]
fn test_register_existing_name_replaces() {
    let mut registry = ThemeRegistry::new();
    registry.register("alert", StyleBundle::default());

    let replacement = StyleBundle {
        frame: style_map([("background", "black")]),
        ..StyleBundle::default()
    };
    assert!(registry.register("alert", replacement.clone()));
    assert_eq!(registry.lookup("alert").unwrap().styles, replacement);
}

#[test]
fn test_lookup_unknown_is_none_and_get_is_error() {
    let registry = ThemeRegistry::with_builtins();
    assert!(registry.lookup("neon").is_none());
    assert!(matches!(
        registry.get("neon"),
        Err(KodamaError::UnknownTheme(ref name)) if name == "neon"
    ));
}
