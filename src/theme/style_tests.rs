//! Tests for theme/style

use super::*;
use crate::theme::style_map;

#[test]
fn test_parse_color_rgb() {
    assert_eq!(parse_color("rgb(220,200,120)").unwrap(), Color::Rgb(220, 200, 120));
    assert_eq!(parse_color(" rgb(234, 224, 184) ").unwrap(), Color::Rgb(234, 224, 184));
}

#[test]
fn test_parse_color_hex_and_names() {
    assert_eq!(parse_color("#ff0080").unwrap(), Color::Rgb(255, 0, 128));
    assert_eq!(parse_color("red").unwrap(), Color::Red);
    assert_eq!(parse_color("white").unwrap(), Color::White);
}

#[test]
fn test_parse_color_invalid() {
    assert!(matches!(parse_color("rgb(1,2)"), Err(KodamaError::InvalidColor(_))));
    assert!(parse_color("rgb(300,0,0)").is_err());
    assert!(parse_color("not-a-color").is_err());
}

#[test]
fn test_resolve_style_colors_and_modifiers() {
    let map = style_map([
        ("color", "rgb(1,2,3)"),
        ("background-color", "black"),
        ("font-weight", "bold"),
        ("font-style", "italic"),
        ("text-decoration", "underline"),
    ]);

    let style = resolve_style(&map);
    assert_eq!(style.fg, Some(Color::Rgb(1, 2, 3)));
    assert_eq!(style.bg, Some(Color::Black));
    assert!(style.add_modifier.contains(Modifier::BOLD));
    assert!(style.add_modifier.contains(Modifier::ITALIC));
    assert!(style.add_modifier.contains(Modifier::UNDERLINED));
}

#[test]
fn test_resolve_style_ignores_bad_values_and_unknown_keys() {
    let map = style_map([("color", "chartreuse-ish"), ("padding", "4px")]);
    assert_eq!(resolve_style(&map), Style::default());
}

#[test]
fn test_border_style_uses_border_color() {
    let map = style_map([("background", "black"), ("border-color", "yellow")]);
    let style = border_style(&map);
    assert_eq!(style.fg, Some(Color::Yellow));
    assert_eq!(style.bg, Some(Color::Black));
}

#[test]
fn test_text_align() {
    let map = style_map([("text-align", "right")]);
    assert_eq!(text_align(&map, Alignment::Left), Alignment::Right);
    assert_eq!(text_align(&StyleMap::new(), Alignment::Center), Alignment::Center);
}
