//! Tests for tooltip/tooltip_events

use super::*;
use crate::lifecycle::VisibilityState;
use crate::test_utils::test_helpers::*;
use serde_json::Value;

fn over(data: Rc<Value>, x: f64, y: f64) -> PointerEvent<Value> {
    PointerEvent::Over {
        data: Some(data),
        key: 0,
        position: Point::new(x, y),
    }
}

#[test]
fn test_over_shows_and_records_pointer() {
    let start = Instant::now();
    let mut overlay = pixel_overlay();
    let mut tooltip: Tooltip<Value> = Tooltip::new();

    tooltip.handle(&mut overlay, over(city("Hanoi", 1), 200.0, 200.0), start);

    assert_eq!(overlay.pointer(), Point::new(200.0, 200.0));
    assert_eq!(overlay.state(), VisibilityState::Visible);
    assert_eq!(overlay.build_count(), 1);
}

#[test]
fn test_move_repositions_without_rebuild() {
    let start = Instant::now();
    let mut overlay = pixel_overlay();
    let mut tooltip: Tooltip<Value> = Tooltip::new();

    tooltip.handle(&mut overlay, over(city("Hanoi", 1), 200.0, 200.0), start);
    tooltip.handle(
        &mut overlay,
        PointerEvent::Move {
            position: Point::new(210.0, 205.0),
        },
        later(start, 16),
    );

    assert_eq!(overlay.build_count(), 1);
    assert_eq!(overlay.tip_origin(), Point::new(160.0, 185.0));
}

#[test]
fn test_down_up_out_each_deactivate() {
    for event in [PointerEvent::Down, PointerEvent::Up, PointerEvent::Out] {
        let start = Instant::now();
        let mut overlay = pixel_overlay();
        let mut tooltip: Tooltip<Value> = Tooltip::new();
        let data = city("Lima", 1);

        tooltip.handle(&mut overlay, over(Rc::clone(&data), 100.0, 100.0), start);
        tooltip.handle(&mut overlay, event, later(start, 10));
        assert_eq!(overlay.state(), VisibilityState::FadingOut);

        // Memo was cleared, so hovering the same element rebuilds.
        tooltip.handle(&mut overlay, over(data, 100.0, 100.0), later(start, 20));
        assert_eq!(overlay.build_count(), 2);
    }
}

#[test]
fn test_over_with_no_data_does_not_panic() {
    let start = Instant::now();
    let mut overlay = pixel_overlay();
    let mut tooltip: Tooltip<Value> = Tooltip::new();

    tooltip.handle(
        &mut overlay,
        PointerEvent::Over {
            data: None,
            key: 0,
            position: Point::new(1.0, 1.0),
        },
        start,
    );

    assert_eq!(overlay.state(), VisibilityState::Hidden);
}
