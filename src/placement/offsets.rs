use crate::geometry::{Point, Size};

use super::quadrant::Quadrant;

/// Holder offsets for all 9 quadrants, precomputed from the measured holder
/// size whenever content is rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OffsetTable {
    cells: [[Point; 3]; 3],
}

impl OffsetTable {
    pub fn compute(holder: Size, distance: f64) -> Self {
        let half = holder.half();
        let mut cells = [[Point::ORIGIN; 3]; 3];

        for i in -1i8..=1 {
            for j in -1i8..=1 {
                cells[(i + 1) as usize][(j + 1) as usize] = Point::new(
                    f64::from(i) * (half.width + distance),
                    f64::from(j) * (half.height + distance),
                );
            }
        }

        Self { cells }
    }

    pub fn get(&self, quadrant: Quadrant) -> Point {
        let i = (quadrant.x.clamp(-1, 1) + 1) as usize;
        let j = (quadrant.y.clamp(-1, 1) + 1) as usize;
        self.cells[i][j]
    }
}

#[cfg(test)]
#[path = "offsets_tests.rs"]
mod offsets_tests;
