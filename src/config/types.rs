// Configuration type definitions

use serde::Deserialize;

use crate::options::TooltipOptions;
use crate::theme::{Theme, ThemeRegistry};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    /// Default options for every tooltip.
    #[serde(default)]
    pub tooltip: TooltipOptions,
    /// User themes, registered after the built-ins.
    #[serde(default)]
    pub themes: Vec<Theme>,
}

impl Config {
    /// Registers the configured themes. A user theme with a built-in name
    /// replaces the built-in.
    pub fn register_themes(&self, registry: &mut ThemeRegistry) {
        for theme in &self.themes {
            if registry.register_theme(theme.clone()) {
                log::debug!("Config theme '{}' replaced an existing theme", theme.name);
            }
        }
    }
}
