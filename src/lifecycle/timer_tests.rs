//! Tests for lifecycle/timer

use std::time::Duration;

use super::*;

#[test]
fn test_take_due_waits_for_deadline() {
    let start = Instant::now();
    let mut timer = Timer::new();
    timer.schedule(start + Duration::from_millis(100), "activate");

    assert!(timer.take_due(start).is_none());
    assert!(timer.is_pending());

    let fired = timer.take_due(start + Duration::from_millis(100));
    assert_eq!(fired, Some((start + Duration::from_millis(100), "activate")));
    assert!(!timer.is_pending());
}

#[test]
fn test_schedule_replaces_pending() {
    let start = Instant::now();
    let mut timer = Timer::new();
    timer.schedule(start + Duration::from_millis(100), 1);
    timer.schedule(start + Duration::from_millis(300), 2);

    assert!(timer.take_due(start + Duration::from_millis(200)).is_none());
    assert_eq!(timer.deadline(), Some(start + Duration::from_millis(300)));
    assert_eq!(timer.take_due(start + Duration::from_millis(300)).map(|(_, v)| v), Some(2));
}

#[test]
fn test_cancel_reports_whether_anything_was_pending() {
    let mut timer: Timer<()> = Timer::default();
    assert!(!timer.cancel());

    timer.schedule(Instant::now(), ());
    assert!(timer.cancel());
    assert!(timer.take_due(Instant::now()).is_none());
}
