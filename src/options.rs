//! Tooltip options
//!
//! A partial set of tooltip settings. Options come from three places, in
//! increasing precedence: global defaults, the selected theme's defaults,
//! and explicit keys (builder calls, config file, or keys embedded in a
//! display payload).

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::direction::Direction;

/// JSON keys recognized in a payload. Anything else is ignored.
pub const OPTION_KEYS: [&str; 10] = [
    "theme",
    "gravity",
    "by",
    "distance",
    "holdDuration",
    "hold_duration",
    "fadeInDuration",
    "fade_in_duration",
    "fadeOutDuration",
    "fade_out_duration",
];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TooltipOptions {
    pub theme: Option<String>,
    pub gravity: Option<Direction>,
    pub by: Option<Direction>,
    pub distance: Option<f64>,
    /// Milliseconds.
    #[serde(alias = "holdDuration")]
    pub hold_duration: Option<u64>,
    #[serde(alias = "fadeInDuration")]
    pub fade_in_duration: Option<u64>,
    #[serde(alias = "fadeOutDuration")]
    pub fade_out_duration: Option<u64>,
}

impl TooltipOptions {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overwrites every field that `other` sets.
    pub fn merge(&mut self, other: &TooltipOptions) {
        if other.theme.is_some() {
            self.theme.clone_from(&other.theme);
        }
        self.gravity = other.gravity.or(self.gravity);
        self.by = other.by.or(self.by);
        self.distance = other.distance.or(self.distance);
        self.hold_duration = other.hold_duration.or(self.hold_duration);
        self.fade_in_duration = other.fade_in_duration.or(self.fade_in_duration);
        self.fade_out_duration = other.fade_out_duration.or(self.fade_out_duration);
    }

    /// Lenient extraction from a JSON object: unknown keys are skipped, and
    /// a recognized key with an unusable value is skipped with a warning.
    pub fn from_json_map(map: &Map<String, Value>) -> Self {
        let mut options = Self::default();

        for (key, value) in map.iter().filter(|(key, _)| OPTION_KEYS.contains(&key.as_str())) {
            match key.as_str() {
                "theme" => options.theme = json_string(key, value).or(options.theme.take()),
                "gravity" => options.gravity = json_direction(key, value).or(options.gravity),
                "by" => options.by = json_direction(key, value).or(options.by),
                "distance" => options.distance = json_distance(key, value).or(options.distance),
                "holdDuration" | "hold_duration" => {
                    options.hold_duration = json_millis(key, value).or(options.hold_duration)
                }
                "fadeInDuration" | "fade_in_duration" => {
                    options.fade_in_duration = json_millis(key, value).or(options.fade_in_duration)
                }
                "fadeOutDuration" | "fade_out_duration" => {
                    options.fade_out_duration = json_millis(key, value).or(options.fade_out_duration)
                }
                _ => {}
            }
        }

        options
    }
}

fn json_string(key: &str, value: &Value) -> Option<String> {
    let parsed = value.as_str().map(str::to_string);
    if parsed.is_none() {
        log::warn!("Ignoring option {}: expected a string, got {}", key, value);
    }
    parsed
}

fn json_direction(key: &str, value: &Value) -> Option<Direction> {
    let name = json_string(key, value)?;
    match name.parse() {
        Ok(direction) => Some(direction),
        Err(e) => {
            log::warn!("Ignoring option {}: {}", key, e);
            None
        }
    }
}

fn json_distance(key: &str, value: &Value) -> Option<f64> {
    match value.as_f64() {
        Some(distance) if distance.is_finite() && distance >= 0.0 => Some(distance),
        _ => {
            log::warn!("Ignoring option {}: expected a non-negative number, got {}", key, value);
            None
        }
    }
}

fn json_millis(key: &str, value: &Value) -> Option<u64> {
    let millis = value
        .as_u64()
        .or_else(|| value.as_f64().filter(|v| *v >= 0.0 && v.is_finite()).map(|v| v.round() as u64));
    if millis.is_none() {
        log::warn!("Ignoring option {}: expected milliseconds >= 0, got {}", key, value);
    }
    millis
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod options_tests;
