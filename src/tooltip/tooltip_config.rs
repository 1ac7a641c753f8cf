use std::time::Duration;

use crate::direction::Direction;
use crate::geometry::Bounds;
use crate::options::TooltipOptions;
use crate::theme::{DEFAULT_THEME, ThemeRegistry};

pub const DEFAULT_DISTANCE: f64 = 25.0;
pub const DEFAULT_FADE_OUT: Duration = Duration::from_millis(500);

/// Resolved settings of one tooltip instance.
///
/// Every explicitly set value (builder call, options object, payload keys)
/// is remembered, so re-resolving against a theme only fills the fields
/// nobody set.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipConfig {
    /// Gap between anchor and tooltip, in host units.
    pub distance: f64,
    pub gravity: Direction,
    /// Which point of `target` to anchor to. Unused without a target.
    pub by: Direction,
    pub theme: String,
    /// Anchor to this element instead of the pointer.
    pub target: Option<Bounds>,
    pub hold_duration: Duration,
    pub fade_in_duration: Duration,
    pub fade_out_duration: Duration,
    explicit: TooltipOptions,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            distance: DEFAULT_DISTANCE,
            gravity: Direction::Top,
            by: Direction::Top,
            theme: DEFAULT_THEME.to_string(),
            target: None,
            hold_duration: Duration::ZERO,
            fade_in_duration: Duration::ZERO,
            fade_out_duration: DEFAULT_FADE_OUT,
            explicit: TooltipOptions::default(),
        }
    }
}

impl TooltipConfig {
    /// Explicit settings recorded so far.
    pub fn explicit(&self) -> &TooltipOptions {
        &self.explicit
    }

    /// Records explicit settings without consulting a theme registry. The
    /// selected theme's defaults are filled in by the next [`resolve`].
    ///
    /// [`resolve`]: TooltipConfig::resolve
    pub fn set_explicit(&mut self, options: &TooltipOptions) {
        self.explicit.merge(options);
        if let Some(name) = &options.theme {
            self.theme.clone_from(name);
        }
        self.apply_fields(options);
    }

    /// Records `options` as explicit, then re-resolves. An unregistered
    /// theme name is ignored.
    pub fn apply_options(&mut self, options: &TooltipOptions, themes: &ThemeRegistry) {
        match &options.theme {
            Some(name) if !themes.contains(name) => {
                log::warn!("Ignoring unregistered theme '{}'", name);
                let without_theme = TooltipOptions {
                    theme: None,
                    ..options.clone()
                };
                self.explicit.merge(&without_theme);
            }
            _ => self.explicit.merge(options),
        }

        self.resolve(themes);
    }

    /// Rebuilds every setting: global defaults, then the selected theme's
    /// defaults, then the explicit settings. The target is kept.
    pub fn resolve(&mut self, themes: &ThemeRegistry) {
        let explicit = std::mem::take(&mut self.explicit);
        let target = self.target;
        *self = Self::default();
        self.target = target;

        if let Some(name) = &explicit.theme {
            self.theme.clone_from(name);
        }
        match themes.lookup(&self.theme) {
            Some(theme) => self.apply_fields(&theme.options),
            None => log::warn!("Theme '{}' is not registered, no theme defaults applied", self.theme),
        }

        self.apply_fields(&explicit);
        self.explicit = explicit;
    }

    fn apply_fields(&mut self, options: &TooltipOptions) {
        if let Some(gravity) = options.gravity {
            self.gravity = gravity;
        }
        if let Some(by) = options.by {
            self.by = by;
        }
        if let Some(distance) = options.distance {
            self.distance = distance;
        }
        if let Some(ms) = options.hold_duration {
            self.hold_duration = Duration::from_millis(ms);
        }
        if let Some(ms) = options.fade_in_duration {
            self.fade_in_duration = Duration::from_millis(ms);
        }
        if let Some(ms) = options.fade_out_duration {
            self.fade_out_duration = Duration::from_millis(ms);
        }
    }
}

#[cfg(test)]
#[path = "tooltip_config_tests.rs"]
mod tooltip_config_tests;
