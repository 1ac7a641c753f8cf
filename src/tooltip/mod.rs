//! Tooltip module
//!
//! A tooltip instance holds its configuration (gravity, distance, theme,
//! durations, target, formatter) and decides when the shared overlay must
//! rebuild, move, fade in, or fade out.

mod memo;
mod tooltip_config;
mod tooltip_events;
mod tooltip_state;

pub use tooltip_config::{DEFAULT_DISTANCE, DEFAULT_FADE_OUT, TooltipConfig};
pub use tooltip_events::PointerEvent;
pub use tooltip_state::{FormatFn, Tooltip};
