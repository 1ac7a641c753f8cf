//! Visibility lifecycle
//!
//! The overlay moves through `hidden → activating → visible → fading-out`.
//! All transitions happen synchronously inside pointer handlers or the
//! host's per-frame `tick`; the single-slot [`Timer`] guarantees at most one
//! pending activation.

mod timer;
mod visibility;

pub use timer::Timer;
pub use visibility::{Visibility, VisibilityState};
