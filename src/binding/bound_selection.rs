use std::rc::Rc;
use std::time::Instant;

use ratatui::crossterm::event::{MouseEvent, MouseEventKind};

use crate::geometry::Point;
use crate::overlay::Overlay;
use crate::tooltip::{PointerEvent, Tooltip};

use super::selection::{Element, Selection};

/// A tooltip wired to a selection of elements.
pub struct BoundSelection<D> {
    tooltip: Tooltip<D>,
    selection: Selection<D>,
    hovered: Option<usize>,
    anchor_to_elements: bool,
}

impl<D: 'static> Tooltip<D> {
    /// Binds this tooltip to `selection`. The tooltip is shared by every
    /// element in it.
    pub fn bind(self, selection: Selection<D>) -> BoundSelection<D> {
        BoundSelection {
            tooltip: self,
            selection,
            hovered: None,
            anchor_to_elements: false,
        }
    }
}

impl<D: 'static> BoundSelection<D> {
    /// Anchors the tooltip to the hovered element's bounds instead of the
    /// pointer.
    pub fn anchor_to_elements(mut self, enabled: bool) -> Self {
        self.anchor_to_elements = enabled;
        self
    }

    pub fn tooltip(&self) -> &Tooltip<D> {
        &self.tooltip
    }

    pub fn tooltip_mut(&mut self) -> &mut Tooltip<D> {
        &mut self.tooltip
    }

    pub fn selection(&self) -> &Selection<D> {
        &self.selection
    }

    /// Swaps in new elements, e.g. after a resize. Hover restarts with the
    /// next pointer move.
    pub fn set_selection(&mut self, selection: Selection<D>) {
        self.selection = selection;
        self.hovered = None;
    }

    pub fn hovered(&self) -> Option<&Element<D>> {
        self.hovered.and_then(|index| self.selection.get(index))
    }

    /// Hit-tests a terminal mouse event and forwards the resulting
    /// transitions to the tooltip. Returns true if anything was forwarded.
    pub fn handle_mouse(&mut self, overlay: &mut Overlay, mouse: MouseEvent, now: Instant) -> bool {
        let position = Point::new(f64::from(mouse.column), f64::from(mouse.row));

        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.pointer_moved(overlay, position, now)
            }
            MouseEventKind::Down(_) if self.hovered.is_some() => {
                self.tooltip.handle(overlay, PointerEvent::Down, now);
                true
            }
            MouseEventKind::Up(_) if self.hovered.is_some() => {
                self.tooltip.handle(overlay, PointerEvent::Up, now);
                true
            }
            _ => false,
        }
    }

    /// Over/move/out transitions for a pointer at `position`.
    pub fn pointer_moved(&mut self, overlay: &mut Overlay, position: Point, now: Instant) -> bool {
        let hit = self.selection.hit(position);

        match (self.hovered, hit) {
            (Some(current), Some(index)) if current == index => {
                self.tooltip
                    .handle(overlay, PointerEvent::Move { position }, now);
            }
            (previous, Some(index)) => {
                if previous.is_some() {
                    self.tooltip.handle(overlay, PointerEvent::Out, now);
                }
                self.enter(overlay, index, position, now);
            }
            (Some(_), None) => {
                self.hovered = None;
                self.tooltip.handle(overlay, PointerEvent::Out, now);
                if self.anchor_to_elements {
                    self.tooltip.set_target(None);
                }
            }
            (None, None) => return false,
        }

        true
    }

    fn enter(&mut self, overlay: &mut Overlay, index: usize, position: Point, now: Instant) {
        let Some(element) = self.selection.get(index) else {
            return;
        };
        let data = Rc::clone(&element.data);
        let key = element.key;
        let bounds = element.bounds;

        self.hovered = Some(index);
        if self.anchor_to_elements {
            self.tooltip.set_target(Some(bounds));
        }

        log::debug!("Pointer entered element {}", key);
        self.tooltip.handle(
            overlay,
            PointerEvent::Over {
                data: Some(data),
                key,
                position,
            },
            now,
        );
    }
}

#[cfg(test)]
#[path = "bound_selection_tests.rs"]
mod bound_selection_tests;
