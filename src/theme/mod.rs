//! Themes
//!
//! A theme is a named bundle of style maps (frame, title, item title, item
//! value) plus optional default options. Style maps use CSS-like property
//! names and are resolved to terminal styles at render time.

mod builtin;
mod registry;
mod style;

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::options::TooltipOptions;

pub use builtin::{DEFAULT_THEME, builtin_themes};
pub use registry::ThemeRegistry;
pub use style::{border_style, parse_color, resolve_style, text_align};

/// Style property name → value, e.g. `color` → `rgb(220,200,120)`.
pub type StyleMap = BTreeMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StyleBundle {
    #[serde(default)]
    pub frame: StyleMap,
    #[serde(default)]
    pub title: StyleMap,
    #[serde(default)]
    pub item_title: StyleMap,
    #[serde(default)]
    pub item_value: StyleMap,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Theme {
    pub name: String,
    #[serde(flatten)]
    pub styles: StyleBundle,
    /// Seeded before explicit options whenever this theme is selected.
    #[serde(default)]
    pub options: TooltipOptions,
}

impl Theme {
    pub fn new(name: impl Into<String>, styles: StyleBundle) -> Self {
        Self {
            name: name.into(),
            styles,
            options: TooltipOptions::default(),
        }
    }

    pub fn with_options(mut self, options: TooltipOptions) -> Self {
        self.options = options;
        self
    }
}

/// Builds a [`StyleMap`] from literal pairs.
pub fn style_map<const N: usize>(pairs: [(&str, &str); N]) -> StyleMap {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}
