use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::direction::Direction;
use crate::geometry::{Bounds, Point};
use crate::options::TooltipOptions;
use crate::overlay::{BuiltContent, InstanceId, Overlay};
use crate::payload::{DisplayPayload, TooltipSource};
use crate::placement::{self, PlacementInput};
use crate::theme::{DEFAULT_THEME, StyleBundle, StyleMap};

use super::memo::ShowMemo;
use super::tooltip_config::TooltipConfig;

/// Turns caller data (and its key, usually an index) into what is shown.
/// `None` hides the tooltip.
pub type FormatFn<D> = Rc<dyn Fn(&D, usize) -> Option<DisplayPayload>>;

/// One configured tooltip. Many elements usually share one instance, and
/// many instances may share one [`Overlay`].
pub struct Tooltip<D> {
    id: InstanceId,
    config: TooltipConfig,
    format: FormatFn<D>,
    attrs: BTreeMap<String, String>,
    holder_style: StyleMap,
    memo: ShowMemo<D>,
    payload: Option<DisplayPayload>,
    last_pointer: Point,
}

impl<D: TooltipSource + 'static> Tooltip<D> {
    /// A tooltip that shows the data as-is.
    pub fn new() -> Self {
        Self::with_format(|data: &D, _| data.to_payload())
    }
}

impl<D: TooltipSource + 'static> Default for Tooltip<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: 'static> Tooltip<D> {
    pub fn with_format(format: impl Fn(&D, usize) -> Option<DisplayPayload> + 'static) -> Self {
        Self {
            id: InstanceId::next(),
            config: TooltipConfig::default(),
            format: Rc::new(format),
            attrs: BTreeMap::new(),
            holder_style: StyleMap::new(),
            memo: ShowMemo::new(),
            payload: None,
            last_pointer: Point::ORIGIN,
        }
    }

    pub fn distance(mut self, distance: f64) -> Self {
        self.set(TooltipOptions {
            distance: Some(distance),
            ..TooltipOptions::default()
        });
        self
    }

    pub fn gravity(mut self, gravity: Direction) -> Self {
        self.set(TooltipOptions {
            gravity: Some(gravity),
            ..TooltipOptions::default()
        });
        self
    }

    pub fn by(mut self, by: Direction) -> Self {
        self.set(TooltipOptions {
            by: Some(by),
            ..TooltipOptions::default()
        });
        self
    }

    /// Selects a theme by name. Its default options fill in whatever has
    /// not been set explicitly once the tooltip resolves against the
    /// overlay's registry (on [`Tooltip::options`] or the next build).
    pub fn theme(mut self, name: impl Into<String>) -> Self {
        self.set(TooltipOptions {
            theme: Some(name.into()),
            ..TooltipOptions::default()
        });
        self
    }

    pub fn target(mut self, target: Option<Bounds>) -> Self {
        self.config.target = target;
        self
    }

    pub fn hold_duration(mut self, duration: Duration) -> Self {
        self.set(TooltipOptions {
            hold_duration: Some(millis(duration)),
            ..TooltipOptions::default()
        });
        self
    }

    pub fn fade_in_duration(mut self, duration: Duration) -> Self {
        self.set(TooltipOptions {
            fade_in_duration: Some(millis(duration)),
            ..TooltipOptions::default()
        });
        self
    }

    pub fn fade_out_duration(mut self, duration: Duration) -> Self {
        self.set(TooltipOptions {
            fade_out_duration: Some(millis(duration)),
            ..TooltipOptions::default()
        });
        self
    }

    pub fn format(mut self, format: impl Fn(&D, usize) -> Option<DisplayPayload> + 'static) -> Self {
        self.format = Rc::new(format);
        self
    }

    /// Shares an existing formatter. Reusing the same `Rc` keeps the
    /// rebuild check from firing.
    pub fn format_rc(mut self, format: FormatFn<D>) -> Self {
        self.format = format;
        self
    }

    /// Stamps an attribute (e.g. `class`) on the content holder when built.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Holder styles for this instance, laid over the theme's frame styles
    /// on every build. Replaces any earlier holder styles.
    pub fn style(mut self, styles: StyleMap) -> Self {
        self.holder_style = styles;
        self
    }

    pub fn options(mut self, options: &TooltipOptions, overlay: &Overlay) -> Self {
        self.config.apply_options(options, overlay.themes());
        self
    }

    pub fn set_target(&mut self, target: Option<Bounds>) {
        self.config.target = target;
    }

    pub fn id(&self) -> InstanceId {
        self.id
    }

    pub fn config(&self) -> &TooltipConfig {
        &self.config
    }

    pub fn format_fn(&self) -> &FormatFn<D> {
        &self.format
    }

    pub fn attrs(&self) -> &BTreeMap<String, String> {
        &self.attrs
    }

    pub fn holder_style(&self) -> &StyleMap {
        &self.holder_style
    }

    /// The payload currently shown, if any.
    pub fn payload(&self) -> Option<&DisplayPayload> {
        self.payload.as_ref()
    }

    pub fn last_pointer(&self) -> Point {
        self.last_pointer
    }

    /// Shows `data` at the overlay's current pointer position.
    ///
    /// Content is rebuilt only if `data` or the formatter is a different
    /// `Rc` than last time (or another instance has drawn since). A payload
    /// of `None` fades the tooltip out instead.
    pub fn show(&mut self, overlay: &mut Overlay, data: Option<Rc<D>>, key: usize, now: Instant) {
        let dirty =
            !self.memo.matches(data.as_ref(), &self.format) || !overlay.is_owned_by(self.id);

        if dirty {
            self.memo.record(data.clone(), &self.format);
            self.payload = data.as_deref().and_then(|d| (self.format)(d, key));

            let Some(payload) = self.payload.clone() else {
                overlay.fade_out(self.config.fade_out_duration, now);
                return;
            };

            self.config.apply_options(&payload.options, overlay.themes());
            self.build(overlay, payload, now);
        } else {
            self.reposition(overlay, now, false);
        }

        if self.payload.is_some() {
            overlay.activate_after(
                self.config.hold_duration,
                self.config.fade_in_duration,
                now,
            );
        }
    }

    /// Follows the pointer (or target) without touching content.
    pub fn update(&mut self, overlay: &mut Overlay, now: Instant) {
        self.reposition(overlay, now, false);
    }

    /// Forgets what was shown and fades out.
    pub fn deactivate(&mut self, overlay: &mut Overlay, now: Instant) {
        self.memo.clear();
        overlay.fade_out(self.config.fade_out_duration, now);
    }

    fn set(&mut self, options: TooltipOptions) {
        self.config.set_explicit(&options);
    }

    fn build(&mut self, overlay: &mut Overlay, payload: DisplayPayload, now: Instant) {
        let mut styles = resolve_theme_styles(overlay, &self.config.theme);
        styles
            .frame
            .extend(self.holder_style.iter().map(|(k, v)| (k.clone(), v.clone())));
        overlay.rebuild(
            self.id,
            BuiltContent {
                payload,
                styles,
                attrs: self.attrs.clone(),
            },
            self.config.distance,
        );
        self.reposition(overlay, now, true);
    }

    fn reposition(&mut self, overlay: &mut Overlay, now: Instant, just_rebuilt: bool) {
        if self.payload.is_none() {
            return;
        }

        self.last_pointer = overlay.pointer();
        let placement = placement::place(&PlacementInput {
            pointer: self.last_pointer,
            target: self.config.target,
            by: self.config.by,
            size: overlay.holder_size(),
            viewport: overlay.root(),
            distance: self.config.distance,
            gravity: self.config.gravity,
        });

        overlay.reposition(&placement, self.config.distance, just_rebuilt, now);
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn resolve_theme_styles(overlay: &Overlay, name: &str) -> StyleBundle {
    if let Some(theme) = overlay.themes().lookup(name) {
        return theme.styles.clone();
    }

    log::warn!("Theme '{}' is not registered, using '{}'", name, DEFAULT_THEME);
    overlay
        .themes()
        .lookup(DEFAULT_THEME)
        .map(|theme| theme.styles.clone())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "tooltip_state_tests.rs"]
mod tooltip_state_tests;
