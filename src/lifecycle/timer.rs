use std::time::Instant;

/// A single-slot timer. Scheduling replaces whatever was pending, so at most
/// one transition is ever outstanding.
#[derive(Debug, Clone, PartialEq)]
pub struct Timer<T> {
    pending: Option<(Instant, T)>,
}

impl<T> Timer<T> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    pub fn schedule(&mut self, deadline: Instant, action: T) {
        self.pending = Some((deadline, action));
    }

    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    /// Removes and returns the pending action once its deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> Option<(Instant, T)> {
        match &self.pending {
            Some((deadline, _)) if *deadline <= now => self.pending.take(),
            _ => None,
        }
    }
}

impl<T> Default for Timer<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "timer_tests.rs"]
mod timer_tests;
