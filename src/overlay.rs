//! Overlay context
//!
//! The shared surface every tooltip instance draws into: a container that
//! is shown or hidden, a fade layer that follows the anchor, and a content
//! holder that slides between quadrants. One overlay also owns the theme
//! registry and the host's last pointer position, so independent overlays
//! (and tests) never share state.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use crate::geometry::{Bounds, Point, Size};
use crate::lifecycle::{Visibility, VisibilityState};
use crate::payload::DisplayPayload;
use crate::placement::{HolderOffset, OffsetSwitch, OffsetTable, Placement, Quadrant};
use crate::render::measure_payload;
use crate::theme::{StyleBundle, ThemeRegistry};

/// Measures built content in host units.
pub type Measurer = Box<dyn Fn(&DisplayPayload) -> Size>;

/// Identifies the tooltip instance that built the overlay's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceId(u64);

impl InstanceId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// What the holder currently displays.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltContent {
    pub payload: DisplayPayload,
    pub styles: StyleBundle,
    pub attrs: BTreeMap<String, String>,
}

pub struct Overlay {
    root: Bounds,
    themes: ThemeRegistry,
    pointer: Point,
    visibility: Visibility,
    tip_origin: Point,
    content: Option<BuiltContent>,
    owner: Option<InstanceId>,
    holder_size: Size,
    offsets: OffsetTable,
    switch: OffsetSwitch,
    holder_offset: HolderOffset,
    build_count: u64,
    measure: Measurer,
}

impl Overlay {
    /// Creates an overlay over `root` with the built-in themes registered.
    pub fn create(root: Bounds) -> Self {
        Self {
            root,
            themes: ThemeRegistry::with_builtins(),
            pointer: Point::ORIGIN,
            visibility: Visibility::new(),
            tip_origin: Point::ORIGIN,
            content: None,
            owner: None,
            holder_size: Size::default(),
            offsets: OffsetTable::default(),
            switch: OffsetSwitch::default(),
            holder_offset: HolderOffset::default(),
            build_count: 0,
            measure: Box::new(measure_payload),
        }
    }

    /// Replaces the content measurer, for hosts whose units are not terminal cells.
    pub fn with_measurer(mut self, measure: impl Fn(&DisplayPayload) -> Size + 'static) -> Self {
        self.measure = Box::new(measure);
        self
    }

    /// Tears down all content and visibility state and attaches to a new
    /// root. Registered themes and the measurer survive.
    pub fn reinit(&mut self, root: Bounds) {
        log::debug!("Reinitializing overlay");
        let themes = std::mem::take(&mut self.themes);
        let measure = std::mem::replace(&mut self.measure, Box::new(measure_payload));
        *self = Self::create(root);
        self.themes = themes;
        self.measure = measure;
    }

    pub fn dispose(self) {
        log::debug!("Disposing overlay after {} builds", self.build_count);
    }

    pub fn root(&self) -> Bounds {
        self.root
    }

    /// Follows a host resize without discarding content.
    pub fn set_root(&mut self, root: Bounds) {
        self.root = root;
    }

    pub fn themes(&self) -> &ThemeRegistry {
        &self.themes
    }

    pub fn themes_mut(&mut self) -> &mut ThemeRegistry {
        &mut self.themes
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    pub fn set_pointer(&mut self, pointer: Point) {
        self.pointer = pointer;
    }

    pub fn state(&self) -> VisibilityState {
        self.visibility.state()
    }

    pub fn is_container_visible(&self) -> bool {
        self.visibility.is_container_visible()
    }

    pub fn opacity(&self, now: Instant) -> f64 {
        self.visibility.opacity(now)
    }

    pub fn activate_after(&mut self, hold: Duration, fade_in: Duration, now: Instant) {
        self.visibility.activate_after(hold, fade_in, now);
    }

    pub fn fade_in(&mut self, duration: Duration, now: Instant) {
        self.visibility.fade_in(duration, now);
    }

    pub fn fade_out(&mut self, duration: Duration, now: Instant) {
        self.visibility.fade_out(duration, now);
    }

    /// Advances timers and animations. Returns true if a redraw is due.
    pub fn tick(&mut self, now: Instant) -> bool {
        let visibility_changed = self.visibility.tick(now);
        let offset_settled = self.holder_offset.settle(now);
        visibility_changed || offset_settled || self.is_animating(now)
    }

    /// True while a fade or holder slide is in flight.
    pub fn is_animating(&self, now: Instant) -> bool {
        let opacity = self.visibility.opacity(now);
        let fading = matches!(
            self.visibility.state(),
            VisibilityState::Visible | VisibilityState::FadingOut
        ) && opacity > 0.0
            && opacity < 1.0;
        fading || self.holder_offset.is_animating()
    }

    pub fn content(&self) -> Option<&BuiltContent> {
        self.content.as_ref()
    }

    pub fn is_owned_by(&self, id: InstanceId) -> bool {
        self.owner == Some(id)
    }

    /// Number of content rebuilds since creation.
    pub fn build_count(&self) -> u64 {
        self.build_count
    }

    pub fn holder_size(&self) -> Size {
        self.holder_size
    }

    pub fn offset_key(&self) -> Quadrant {
        self.switch.key()
    }

    pub fn holder_offset(&self, now: Instant) -> Point {
        self.holder_offset.current(now)
    }

    /// Offset the holder is heading to (or resting at).
    pub fn holder_target_offset(&self) -> Point {
        self.holder_offset.target()
    }

    pub fn tip_origin(&self) -> Point {
        self.tip_origin
    }

    /// Where the tooltip box is drawn right now, if there is content.
    pub fn tooltip_bounds(&self, now: Instant) -> Option<Bounds> {
        self.content.as_ref()?;
        let origin = self.tip_origin.offset(self.holder_offset.current(now));
        Some(Bounds::from_origin(origin, self.holder_size))
    }

    pub(crate) fn rebuild(&mut self, owner: InstanceId, content: BuiltContent, distance: f64) {
        self.holder_size = (self.measure)(&content.payload);
        self.offsets = OffsetTable::compute(self.holder_size, distance);
        self.content = Some(content);
        self.owner = Some(owner);
        self.build_count += 1;
        log::debug!(
            "Rebuilt tooltip content ({}x{})",
            self.holder_size.width,
            self.holder_size.height
        );
    }

    /// Moves the fade layer unconditionally; slides the holder only when
    /// the hysteresis rule allows a quadrant switch.
    pub(crate) fn reposition(&mut self, placement: &Placement, distance: f64, just_rebuilt: bool, now: Instant) {
        self.tip_origin = placement.origin;

        if self
            .switch
            .should_switch(placement.quadrant, self.pointer, distance, just_rebuilt)
        {
            if placement.quadrant != self.switch.key() {
                log::debug!("Tooltip quadrant {} -> {}", self.switch.key(), placement.quadrant);
            }
            self.switch.record(placement.quadrant, self.pointer);
            self.holder_offset
                .animate_to(self.offsets.get(placement.quadrant), now);
        }
    }
}

impl fmt::Debug for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Overlay")
            .field("root", &self.root)
            .field("pointer", &self.pointer)
            .field("visibility", &self.visibility)
            .field("tip_origin", &self.tip_origin)
            .field("owner", &self.owner)
            .field("holder_size", &self.holder_size)
            .field("offset_key", &self.switch.key())
            .field("build_count", &self.build_count)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "overlay_tests.rs"]
mod overlay_tests;
