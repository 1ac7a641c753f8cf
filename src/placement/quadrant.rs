use std::fmt;

use crate::direction::Direction;
use crate::geometry::{Bounds, Point, Size};

/// Score every candidate must beat to be selected. Manhattan distances
/// between unit vectors never exceed 4.
const SCORE_THRESHOLD: i8 = 5;

/// Which of the 9 offset cells the content holder shifts into, relative to
/// the anchor. Components are in `{-1, 0, 1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Quadrant {
    pub x: i8,
    pub y: i8,
}

impl Quadrant {
    pub const CENTER: Quadrant = Quadrant { x: 0, y: 0 };

    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    pub fn is_center(self) -> bool {
        self == Self::CENTER
    }

    fn manhattan_to(self, (x, y): (i8, i8)) -> i8 {
        (self.x - x).abs() + (self.y - y).abs()
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.x, self.y)
    }
}

/// Inclusive range of allowed quadrant indices on one axis. Empty when
/// `min > max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisRange {
    pub min: i8,
    pub max: i8,
}

impl AxisRange {
    pub const FULL: AxisRange = AxisRange { min: -1, max: 1 };

    pub fn contains(self, index: i8) -> bool {
        self.min <= index && index <= self.max
    }

    pub fn is_empty(self) -> bool {
        self.min > self.max
    }
}

/// Restricts one axis based on how close `anchor` sits to each viewport edge.
///
/// Within half the tooltip plus `distance` of an edge, both the centered
/// cell and the cell toward the edge would clip, so only the far side
/// remains. Within the full tooltip plus twice `distance`, only the cell
/// toward the edge is dropped.
pub fn feasible_axis(anchor: f64, low_edge: f64, high_edge: f64, dim: f64, distance: f64) -> AxisRange {
    let half = dim / 2.0;
    let to_low = anchor - low_edge;
    let to_high = high_edge - anchor;

    let min = if to_low < half + distance {
        1
    } else if to_low < dim + 2.0 * distance {
        0
    } else {
        -1
    };

    let max = if to_high < half + distance {
        -1
    } else if to_high < dim + 2.0 * distance {
        0
    } else {
        1
    };

    AxisRange { min, max }
}

/// Per-axis feasible ranges for a tooltip of `size` anchored at `anchor`.
pub fn feasible_quadrants(
    anchor: Point,
    size: Size,
    viewport: Bounds,
    distance: f64,
) -> (AxisRange, AxisRange) {
    (
        feasible_axis(anchor.x, viewport.x, viewport.right(), size.width, distance),
        feasible_axis(anchor.y, viewport.y, viewport.bottom(), size.height, distance),
    )
}

/// Picks the feasible quadrant closest (Manhattan) to `gravity`.
///
/// The centered cell is only eligible when gravity is `Center`. Ties keep
/// the first candidate in column-major order. Falls back to the center when
/// nothing is feasible.
pub fn select_quadrant((x_range, y_range): (AxisRange, AxisRange), gravity: Direction) -> Quadrant {
    let target = gravity.vector();
    let allow_center = target == (0, 0);

    let mut best = None;
    let mut best_score = SCORE_THRESHOLD;

    for i in -1..=1 {
        for j in -1..=1 {
            if !x_range.contains(i) || !y_range.contains(j) {
                continue;
            }
            let candidate = Quadrant::new(i, j);
            if candidate.is_center() && !allow_center {
                continue;
            }
            let score = candidate.manhattan_to(target);
            if score < best_score {
                best_score = score;
                best = Some(candidate);
            }
        }
    }

    best.unwrap_or(Quadrant::CENTER)
}

#[cfg(test)]
#[path = "quadrant_tests.rs"]
mod quadrant_tests;
