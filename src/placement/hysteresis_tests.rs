//! Tests for placement/hysteresis

use super::*;
use proptest::prelude::*;

#[test]
fn test_rebuild_always_switches() {
    let switch = OffsetSwitch::default();
    assert!(switch.should_switch(Quadrant::CENTER, Point::ORIGIN, 25.0, true));
}

#[test]
fn test_same_key_never_switches() {
    let mut switch = OffsetSwitch::default();
    switch.record(Quadrant::new(0, -1), Point::new(100.0, 100.0));

    assert!(!switch.should_switch(Quadrant::new(0, -1), Point::new(500.0, 500.0), 25.0, false));
}

#[test]
fn test_key_change_needs_movement_beyond_distance() {
    let mut switch = OffsetSwitch::default();
    switch.record(Quadrant::new(0, -1), Point::new(100.0, 100.0));

    assert!(!switch.should_switch(Quadrant::new(1, -1), Point::new(120.0, 110.0), 25.0, false));
    assert!(!switch.should_switch(Quadrant::new(1, -1), Point::new(125.0, 100.0), 25.0, false));
    assert!(switch.should_switch(Quadrant::new(1, -1), Point::new(126.0, 100.0), 25.0, false));
}

#[test]
fn test_record_updates_key_and_point() {
    let mut switch = OffsetSwitch::default();
    switch.record(Quadrant::new(1, 1), Point::new(3.0, 4.0));
    assert_eq!(switch.key(), Quadrant::new(1, 1));
    assert_eq!(switch.switched_at(), Point::new(3.0, 4.0));
}

#[test]
fn test_ease_cubic_out_endpoints() {
    assert_eq!(ease_cubic_out(0.0), 0.0);
    assert_eq!(ease_cubic_out(1.0), 1.0);
    assert!(ease_cubic_out(0.5) > 0.5);
    assert_eq!(ease_cubic_out(2.0), 1.0);
}

#[test]
fn test_holder_offset_slides_and_settles() {
    let start = Instant::now();
    let mut offset = HolderOffset::default();
    offset.animate_to(Point::new(0.0, -45.0), start);

    assert!(offset.is_animating());
    assert_eq!(offset.current(start), Point::ORIGIN);
    assert_eq!(offset.target(), Point::new(0.0, -45.0));

    let midway = offset.current(start + Duration::from_millis(125));
    assert!(midway.y < -22.5 && midway.y > -45.0);

    assert!(!offset.settle(start + Duration::from_millis(100)));
    assert!(offset.settle(start + OFFSET_TRANSITION));
    assert!(!offset.is_animating());
    assert_eq!(offset.current(start), Point::new(0.0, -45.0));
}

#[test]
fn test_interrupted_slide_continues_from_current_position() {
    let start = Instant::now();
    let mut offset = HolderOffset::default();
    offset.animate_to(Point::new(100.0, 0.0), start);

    let interrupt_at = start + Duration::from_millis(100);
    let before = offset.current(interrupt_at);
    offset.animate_to(Point::new(-100.0, 0.0), interrupt_at);

    assert_eq!(offset.current(interrupt_at), before);
}

// Jitter that never travels farther than `distance` from the last switch
// point must not re-trigger the slide, whatever keys it produces.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_small_jitter_never_switches(
        distance in 5.0f64..60.0,
        moves in prop::collection::vec((-1.0f64..=1.0, -1.0f64..=1.0, -1i8..=1, -1i8..=1), 1..40),
    ) {
        let origin = Point::new(400.0, 300.0);
        let mut switch = OffsetSwitch::default();
        switch.record(Quadrant::new(0, -1), origin);

        for (dx, dy, kx, ky) in moves {
            let pointer = Point::new(origin.x + dx * distance, origin.y + dy * distance);
            let key = Quadrant::new(kx, ky);
            prop_assert!(!switch.should_switch(key, pointer, distance, false));
        }
    }
}
