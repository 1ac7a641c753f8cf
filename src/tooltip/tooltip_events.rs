use std::rc::Rc;
use std::time::Instant;

use crate::geometry::Point;
use crate::overlay::Overlay;

use super::tooltip_state::Tooltip;

/// Pointer events a bound element forwards to its tooltip.
#[derive(Debug)]
pub enum PointerEvent<D> {
    Over {
        data: Option<Rc<D>>,
        key: usize,
        position: Point,
    },
    Move {
        position: Point,
    },
    Down,
    Up,
    Out,
}

impl<D: 'static> Tooltip<D> {
    pub fn handle(&mut self, overlay: &mut Overlay, event: PointerEvent<D>, now: Instant) {
        match event {
            PointerEvent::Over {
                data,
                key,
                position,
            } => {
                overlay.set_pointer(position);
                self.show(overlay, data, key, now);
            }
            PointerEvent::Move { position } => {
                overlay.set_pointer(position);
                self.update(overlay, now);
            }
            PointerEvent::Down | PointerEvent::Up | PointerEvent::Out => {
                self.deactivate(overlay, now);
            }
        }
    }
}

#[cfg(test)]
#[path = "tooltip_events_tests.rs"]
mod tooltip_events_tests;
