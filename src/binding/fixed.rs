use std::rc::Rc;

use crate::geometry::Bounds;
use crate::payload::DisplayPayload;
use crate::tooltip::Tooltip;

use super::bound_selection::BoundSelection;
use super::selection::Selection;

/// Class attribute stamped on holders built by [`fixed_tooltip`].
pub const FIXED_TOOLTIP_CLASS: &str = "katana_tooltip";

/// A tooltip that always shows `payload`. Options embedded in the payload
/// are applied on every build.
pub fn fixed_tooltip(payload: DisplayPayload) -> Tooltip<()> {
    Tooltip::with_format(move |_: &(), _| Some(payload.clone())).attr("class", FIXED_TOOLTIP_CLASS)
}

/// Binds one fixed payload to every region.
pub fn bind_fixed(regions: impl IntoIterator<Item = Bounds>, payload: DisplayPayload) -> BoundSelection<()> {
    let shared = Rc::new(());
    let selection: Selection<()> = regions
        .into_iter()
        .map(|bounds| (bounds, Rc::clone(&shared)))
        .collect();
    fixed_tooltip(payload).bind(selection)
}

#[cfg(test)]
#[path = "fixed_tests.rs"]
mod fixed_tests;
