//! Binding tooltips to on-screen elements
//!
//! A [`Selection`] is a set of hit-testable regions, each carrying the data
//! its tooltip shows. Binding a [`Tooltip`](crate::tooltip::Tooltip) to one
//! turns raw terminal mouse events into over/move/out/down/up transitions.

mod bound_selection;
mod fixed;
mod selection;

pub use bound_selection::BoundSelection;
pub use fixed::{FIXED_TOOLTIP_CLASS, bind_fixed, fixed_tooltip};
pub use selection::{Element, Selection};
