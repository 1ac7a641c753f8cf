use std::time::{Duration, Instant};

use super::timer::Timer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityState {
    Hidden,
    /// Hold delay running; the container is not visible yet.
    Activating,
    /// Fading in or fully shown.
    Visible,
    FadingOut,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Fade {
    from: f64,
    to: f64,
    start: Instant,
    duration: Duration,
}

impl Fade {
    fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    fn opacity_at(&self, now: Instant) -> f64 {
        self.from + (self.to - self.from) * self.progress(now)
    }

    fn is_done(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Activation {
    fade_in: Duration,
}

/// Show/hide state of the overlay: hold delay, fades, and activation.
///
/// Fades are linear in opacity and proportional: fading toward a target
/// from a partially faded state takes `duration * |target - opacity|`.
#[derive(Debug, Clone, PartialEq)]
pub struct Visibility {
    state: VisibilityState,
    activated: bool,
    container_visible: bool,
    opacity: f64,
    fade: Option<Fade>,
    timer: Timer<Activation>,
}

impl Visibility {
    pub fn new() -> Self {
        Self {
            state: VisibilityState::Hidden,
            activated: false,
            container_visible: false,
            opacity: 0.0,
            fade: None,
            timer: Timer::new(),
        }
    }

    pub fn state(&self) -> VisibilityState {
        self.state
    }

    pub fn is_activated(&self) -> bool {
        self.activated
    }

    pub fn is_container_visible(&self) -> bool {
        self.container_visible
    }

    pub fn has_pending_activation(&self) -> bool {
        self.timer.is_pending()
    }

    pub fn opacity(&self, now: Instant) -> f64 {
        self.fade.map_or(self.opacity, |fade| fade.opacity_at(now))
    }

    /// Cancels any pending transition, then either fades in right away (the
    /// overlay is still activated from a recent hover) or waits `hold` first.
    pub fn activate_after(&mut self, hold: Duration, fade_in: Duration, now: Instant) {
        self.timer.cancel();

        if self.activated || hold.is_zero() {
            self.fade_in(fade_in, now);
            return;
        }

        self.state = VisibilityState::Activating;
        self.timer.schedule(now + hold, Activation { fade_in });
    }

    pub fn fade_in(&mut self, duration: Duration, now: Instant) {
        if self.state == VisibilityState::Visible {
            return;
        }

        self.timer.cancel();
        let current = self.opacity(now);
        self.activated = true;
        self.container_visible = true;
        self.state = VisibilityState::Visible;
        self.start_fade(current, 1.0, duration, now);
    }

    pub fn fade_out(&mut self, duration: Duration, now: Instant) {
        match self.state {
            VisibilityState::Hidden | VisibilityState::FadingOut => return,
            VisibilityState::Activating => {
                self.timer.cancel();
                self.finish_fade_out();
                return;
            }
            VisibilityState::Visible => {}
        }

        let current = self.opacity(now);
        self.state = VisibilityState::FadingOut;
        self.start_fade(current, 0.0, duration, now);
        if self.fade.is_none() {
            self.finish_fade_out();
        }
    }

    /// Fires a due activation and completes finished fades. Returns true if
    /// anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if let Some((deadline, activation)) = self.timer.take_due(now) {
            self.fade_in(activation.fade_in, deadline);
            changed = true;
        }

        if let Some(fade) = self.fade
            && fade.is_done(now)
        {
            self.opacity = fade.to;
            self.fade = None;
            if self.state == VisibilityState::FadingOut {
                self.finish_fade_out();
            }
            changed = true;
        }

        changed
    }

    fn start_fade(&mut self, from: f64, to: f64, duration: Duration, now: Instant) {
        let scaled = duration.mul_f64((to - from).abs());
        if scaled.is_zero() {
            self.opacity = to;
            self.fade = None;
        } else {
            self.opacity = from;
            self.fade = Some(Fade {
                from,
                to,
                start: now,
                duration: scaled,
            });
        }
    }

    fn finish_fade_out(&mut self) {
        self.state = VisibilityState::Hidden;
        self.activated = false;
        self.container_visible = false;
        self.opacity = 0.0;
        self.fade = None;
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "visibility_tests.rs"]
mod visibility_tests;
