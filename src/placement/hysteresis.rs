use std::time::{Duration, Instant};

use crate::geometry::Point;

use super::quadrant::Quadrant;

/// How long the holder takes to slide into a new quadrant.
pub const OFFSET_TRANSITION: Duration = Duration::from_millis(250);

/// Remembers the last quadrant switch so that jitter near a quadrant
/// boundary does not keep re-animating the holder.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OffsetSwitch {
    key: Quadrant,
    at: Point,
}

impl OffsetSwitch {
    pub fn key(&self) -> Quadrant {
        self.key
    }

    pub fn switched_at(&self) -> Point {
        self.at
    }

    /// A fresh build always switches. Otherwise the key must change and the
    /// pointer must have travelled more than `distance` since the last switch.
    pub fn should_switch(&self, key: Quadrant, pointer: Point, distance: f64, just_rebuilt: bool) -> bool {
        just_rebuilt || (key != self.key && pointer.chebyshev_distance(self.at) > distance)
    }

    pub fn record(&mut self, key: Quadrant, pointer: Point) {
        self.key = key;
        self.at = pointer;
    }
}

pub fn ease_cubic_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    let rest = 1.0 - t;
    1.0 - rest * rest * rest
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct OffsetAnimation {
    from: Point,
    to: Point,
    start: Instant,
    duration: Duration,
}

impl OffsetAnimation {
    fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    fn position_at(&self, now: Instant) -> Point {
        let eased = ease_cubic_out(self.progress(now));
        Point::new(
            self.from.x + (self.to.x - self.from.x) * eased,
            self.from.y + (self.to.y - self.from.y) * eased,
        )
    }
}

/// The holder's displayed offset, either at rest or sliding toward a target.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HolderOffset {
    settled: Point,
    animation: Option<OffsetAnimation>,
}

impl HolderOffset {
    pub fn current(&self, now: Instant) -> Point {
        match &self.animation {
            Some(animation) => animation.position_at(now),
            None => self.settled,
        }
    }

    /// Where the holder ends up once any running animation completes.
    pub fn target(&self) -> Point {
        self.animation.map_or(self.settled, |animation| animation.to)
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Starts a slide from wherever the holder is right now, so an
    /// interrupted slide continues without a jump.
    pub fn animate_to(&mut self, to: Point, now: Instant) {
        let from = self.current(now);
        self.animation = Some(OffsetAnimation {
            from,
            to,
            start: now,
            duration: OFFSET_TRANSITION,
        });
    }

    /// Drops a finished animation. Returns true if one finished.
    pub fn settle(&mut self, now: Instant) -> bool {
        match self.animation {
            Some(animation) if animation.progress(now) >= 1.0 => {
                self.settled = animation.to;
                self.animation = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "hysteresis_tests.rs"]
mod hysteresis_tests;
