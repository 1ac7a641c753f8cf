use std::collections::HashMap;

use crate::error::KodamaError;

use super::{StyleBundle, Theme, builtin_themes};

/// Themes keyed by name. Registered themes are never mutated in place;
/// registering an existing name swaps in the new theme.
#[derive(Debug, Clone, Default)]
pub struct ThemeRegistry {
    themes: HashMap<String, Theme>,
}

impl ThemeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for theme in builtin_themes() {
            registry.register_theme(theme);
        }
        registry
    }

    /// Registers `styles` under `name`. Returns true if an earlier theme was replaced.
    pub fn register(&mut self, name: impl Into<String>, styles: StyleBundle) -> bool {
        self.register_theme(Theme::new(name, styles))
    }

    pub fn register_theme(&mut self, theme: Theme) -> bool {
        let replaced = self.themes.insert(theme.name.clone(), theme).is_some();
        if replaced {
            log::debug!("Replaced registered theme");
        }
        replaced
    }

    pub fn lookup(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Strict lookup for callers that want to reject unknown names up front.
    pub fn get(&self, name: &str) -> Result<&Theme, KodamaError> {
        self.lookup(name)
            .ok_or_else(|| KodamaError::UnknownTheme(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod registry_tests;
