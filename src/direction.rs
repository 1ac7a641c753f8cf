//! Direction vocabulary
//!
//! Gravity and anchor ("by") directions share one vocabulary: 21 accepted
//! names that map onto 9 unit vectors. Matching ignores case, hyphens,
//! underscores and whitespace, so `Top-Left`, `top_left` and `topleft` are
//! the same direction.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::KodamaError;

/// One of the 8 compass directions, or the center.
///
/// Screen coordinates: `x` grows to the right, `y` grows downward, so
/// `Top` is `(0, -1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Direction {
    Center,
    #[default]
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Accepted names, in display form.
const DIRECTION_NAMES: [(&str, Direction); 21] = [
    ("center", Direction::Center),
    ("top", Direction::Top),
    ("bottom", Direction::Bottom),
    ("left", Direction::Left),
    ("right", Direction::Right),
    ("top-left", Direction::TopLeft),
    ("top-right", Direction::TopRight),
    ("bottom-left", Direction::BottomLeft),
    ("bottom-right", Direction::BottomRight),
    ("north", Direction::Top),
    ("south", Direction::Bottom),
    ("west", Direction::Left),
    ("east", Direction::Right),
    ("north-west", Direction::TopLeft),
    ("north-east", Direction::TopRight),
    ("south-west", Direction::BottomLeft),
    ("south-east", Direction::BottomRight),
    ("n", Direction::Top),
    ("s", Direction::Bottom),
    ("w", Direction::Left),
    ("e", Direction::Right),
];

pub fn direction_names() -> Vec<&'static str> {
    DIRECTION_NAMES.iter().map(|(name, _)| *name).collect()
}

fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_') && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

impl Direction {
    /// Unit vector `(x, y)` with components in `{-1, 0, 1}`.
    pub const fn vector(self) -> (i8, i8) {
        match self {
            Direction::Center => (0, 0),
            Direction::Top => (0, -1),
            Direction::Bottom => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::TopLeft => (-1, -1),
            Direction::TopRight => (1, -1),
            Direction::BottomLeft => (-1, 1),
            Direction::BottomRight => (1, 1),
        }
    }

    /// Lenient lookup: `None` for names outside the vocabulary.
    pub fn lookup(name: &str) -> Option<Self> {
        let wanted = normalize_name(name);
        DIRECTION_NAMES
            .iter()
            .find(|(candidate, _)| normalize_name(candidate) == wanted)
            .map(|(_, direction)| *direction)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Direction::Center => "center",
            Direction::Top => "top",
            Direction::Bottom => "bottom",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::TopLeft => "top-left",
            Direction::TopRight => "top-right",
            Direction::BottomLeft => "bottom-left",
            Direction::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = KodamaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::lookup(s).ok_or_else(|| KodamaError::UnknownDirection(s.to_string()))
    }
}

impl TryFrom<String> for Direction {
    type Error = KodamaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
#[path = "direction_tests.rs"]
mod direction_tests;
