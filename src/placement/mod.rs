//! Placement engine
//!
//! Decides where the tooltip goes. The fade layer is centered on an anchor
//! (the pointer, or a point on the target element), and the content holder
//! is shifted into one of 9 quadrants around it. The quadrant is the one
//! closest to the configured gravity that keeps the tooltip inside the
//! viewport.

mod hysteresis;
mod offsets;
mod quadrant;

pub use hysteresis::{HolderOffset, OFFSET_TRANSITION, OffsetSwitch, ease_cubic_out};
pub use offsets::OffsetTable;
pub use quadrant::{AxisRange, Quadrant, feasible_axis, feasible_quadrants, select_quadrant};

use crate::direction::Direction;
use crate::geometry::{Bounds, Point, Size};

/// Everything the engine needs for one placement decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementInput {
    pub pointer: Point,
    pub target: Option<Bounds>,
    pub by: Direction,
    pub size: Size,
    pub viewport: Bounds,
    pub distance: f64,
    pub gravity: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub anchor: Point,
    /// Top-left corner of the fade layer (the tooltip centered on the anchor).
    pub origin: Point,
    pub quadrant: Quadrant,
}

/// The pointer itself, or the point of `target` that `by` names: `Top` is
/// the middle of the top edge, `BottomRight` the bottom-right corner, and
/// `Center` the middle.
pub fn anchor_point(pointer: Point, target: Option<Bounds>, by: Direction) -> Point {
    let Some(target) = target else {
        return pointer;
    };

    let (bx, by) = by.vector();
    Point::new(
        target.x + (f64::from(bx) + 1.0) / 2.0 * target.width,
        target.y + (f64::from(by) + 1.0) / 2.0 * target.height,
    )
}

pub fn place(input: &PlacementInput) -> Placement {
    let anchor = anchor_point(input.pointer, input.target, input.by);
    let half = input.size.half();
    let origin = Point::new(anchor.x - half.width, anchor.y - half.height);

    let feasible = feasible_quadrants(anchor, input.size, input.viewport, input.distance);
    let quadrant = select_quadrant(feasible, input.gravity);

    Placement {
        anchor,
        origin,
        quadrant,
    }
}
