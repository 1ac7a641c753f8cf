use std::str::FromStr;

use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};

use crate::error::KodamaError;

use super::StyleMap;

/// Parses `rgb(r, g, b)`, `#rrggbb`, or a ratatui color name.
pub fn parse_color(value: &str) -> Result<Color, KodamaError> {
    let value = value.trim();
    let invalid = || KodamaError::InvalidColor(value.to_string());

    if let Some(body) = value
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let channels: Vec<u8> = body
            .split(',')
            .map(|part| part.trim().parse::<u8>())
            .collect::<Result<_, _>>()
            .map_err(|_| invalid())?;

        return match channels[..] {
            [r, g, b] => Ok(Color::Rgb(r, g, b)),
            _ => Err(invalid()),
        };
    }

    Color::from_str(value).map_err(|_| invalid())
}

fn color_property(map: &StyleMap, keys: &[&str]) -> Option<Color> {
    let (key, value) = keys
        .iter()
        .find_map(|key| map.get(*key).map(|value| (*key, value)))?;

    match parse_color(value) {
        Ok(color) => Some(color),
        Err(e) => {
            log::warn!("Ignoring style property {}: {}", key, e);
            None
        }
    }
}

/// Resolves text properties: `color`, `background` / `background-color`,
/// `font-weight`, `font-style`, `text-decoration`. Unknown properties and
/// unparseable values are ignored.
pub fn resolve_style(map: &StyleMap) -> Style {
    let mut style = Style::default();

    if let Some(fg) = color_property(map, &["color"]) {
        style = style.fg(fg);
    }
    if let Some(bg) = color_property(map, &["background", "background-color"]) {
        style = style.bg(bg);
    }

    match map.get("font-weight").map(String::as_str) {
        Some("bold" | "bolder" | "700" | "800" | "900") => style = style.add_modifier(Modifier::BOLD),
        Some("lighter" | "100" | "200" | "300") => style = style.add_modifier(Modifier::DIM),
        _ => {}
    }
    if map.get("font-style").is_some_and(|v| v == "italic") {
        style = style.add_modifier(Modifier::ITALIC);
    }
    if map.get("text-decoration").is_some_and(|v| v == "underline") {
        style = style.add_modifier(Modifier::UNDERLINED);
    }

    style
}

/// Border style for the frame: `border-color` on top of the frame's own style.
pub fn border_style(map: &StyleMap) -> Style {
    let style = resolve_style(map);
    match color_property(map, &["border-color"]) {
        Some(color) => style.fg(color),
        None => style,
    }
}

pub fn text_align(map: &StyleMap, fallback: Alignment) -> Alignment {
    match map.get("text-align").map(String::as_str) {
        Some("left") => Alignment::Left,
        Some("center") => Alignment::Center,
        Some("right") => Alignment::Right,
        _ => fallback,
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod style_tests;
