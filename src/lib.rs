//! kodama
//!
//! Pointer-following tooltip overlay for ratatui visualizations: an
//! edge-avoiding placement engine, a hold/fade visibility lifecycle and
//! named style themes.

pub mod binding;
pub mod config;
pub mod direction;
pub mod error;
pub mod geometry;
pub mod lifecycle;
pub mod options;
pub mod overlay;
pub mod payload;
pub mod placement;
pub mod render;
pub mod theme;
pub mod tooltip;
pub mod widgets;


pub use binding::{BoundSelection, Element, Selection, fixed_tooltip};
pub use direction::Direction;
pub use error::KodamaError;
pub use geometry::{Bounds, Point, Size};
pub use options::TooltipOptions;
pub use overlay::Overlay;
pub use payload::{DisplayPayload, Item, TooltipSource};
pub use theme::{Theme, ThemeRegistry};
pub use tooltip::{PointerEvent, Tooltip};
