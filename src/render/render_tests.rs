//! Tests for render

use super::*;
use crate::geometry::{Bounds, Point};
use crate::test_utils::test_helpers::*;
use crate::direction::Direction;
use crate::theme::style_map;
use crate::tooltip::Tooltip;
use insta::assert_snapshot;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::style::Color;
use std::rc::Rc;

fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).unwrap()
}

/// Settled overlay in a 30x9 terminal with `sample_payload` hovered at `pointer`.
fn render_sample_at(tooltip: &mut Tooltip<DisplayPayload>, pointer: Point) -> String {
    let start = Instant::now();
    let mut overlay = Overlay::create(Bounds::new(0.0, 0.0, 30.0, 9.0));
    overlay.set_pointer(pointer);
    tooltip.show(&mut overlay, Some(Rc::new(sample_payload())), 0, start);

    let mut terminal = create_test_terminal(30, 9);
    terminal
        .draw(|f| render_overlay(f, &overlay, later(start, 250)))
        .unwrap();
    terminal.backend().to_string()
}

fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol().to_string())
        .collect()
}

/// Terminal overlay with `sample_payload` shown at (40, 12).
fn shown_overlay(tooltip: &mut Tooltip<DisplayPayload>, now: Instant) -> Overlay {
    let mut overlay = Overlay::create(Bounds::new(0.0, 0.0, 80.0, 24.0));
    overlay.set_pointer(Point::new(40.0, 12.0));
    tooltip.show(&mut overlay, Some(Rc::new(sample_payload())), 0, now);
    overlay
}

#[test]
fn test_measure_title_and_items() {
    // "population:" (11) + gap (2) + "19059856" (8) = 21, plus border and padding.
    assert_eq!(measure_payload(&sample_payload()), Size::new(25.0, 5.0));
}

#[test]
fn test_measure_title_only() {
    let payload = DisplayPayload::new().title("Hello");
    assert_eq!(measure_payload(&payload), Size::new(9.0, 3.0));
}

#[test]
fn test_measure_uses_display_width() {
    let payload = DisplayPayload::new().title("東京");
    assert_eq!(measure_payload(&payload).width, 8.0);
}

#[test]
fn test_measure_blank_payload() {
    assert_eq!(measure_payload(&DisplayPayload::new()), Size::new(4.0, 2.0));
}

#[test]
fn test_content_lines_right_align_labels() {
    let content = BuiltContent {
        payload: DisplayPayload::new().item("a", 1).item("longer", 2),
        styles: crate::theme::ThemeRegistry::with_builtins()
            .lookup("kodama")
            .unwrap()
            .styles
            .clone(),
        attrs: Default::default(),
    };

    let lines = content_lines(&content, false);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].spans[0].content, "     a:");
    assert_eq!(lines[1].spans[0].content, "longer:");
    assert_eq!(lines[1].spans[2].content, "2");
}

#[test]
fn snapshot_tooltip_above_pointer() {
    let mut tooltip = Tooltip::new().distance(1.0);
    let output = render_sample_at(&mut tooltip, Point::new(15.0, 7.0));
    assert_snapshot!(output, @r#"
    "                              "
    "   ┌───────────────────────┐  "
    "   │         Osaka         │  "
    "   │ population:  19059856 │  "
    "   │ prefecture:  Osaka    │  "
    "   └───────────────────────┘  "
    "                              "
    "                              "
    "                              "
    "#);
}

#[test]
fn snapshot_tooltip_flips_away_from_top_right_corner() {
    let mut tooltip = Tooltip::new().distance(1.0).gravity(Direction::Top);
    let output = render_sample_at(&mut tooltip, Point::new(27.0, 2.0));
    assert_snapshot!(output, @r#"
    "                              "
    "                              "
    "                              "
    " ┌───────────────────────┐    "
    " │         Osaka         │    "
    " │ population:  19059856 │    "
    " │ prefecture:  Osaka    │    "
    " └───────────────────────┘    "
    "                              "
    "#);
}

#[test]
fn test_render_draws_title_and_items_above_pointer() {
    let start = Instant::now();
    let mut tooltip = Tooltip::new().distance(1.0);
    let overlay = shown_overlay(&mut tooltip, start);

    let mut terminal = create_test_terminal(80, 24);
    terminal
        .draw(|f| render_overlay(f, &overlay, later(start, 250)))
        .unwrap();
    let buffer = terminal.backend().buffer();

    // Box is 25x5 centered on (40, 12), then shifted up by 2.5 + 1.
    assert!(row_text(buffer, 6).contains('┌'));
    assert!(row_text(buffer, 7).contains("Osaka"));
    assert!(row_text(buffer, 10).contains('└'));
}

#[test]
fn test_holder_style_changes_rendered_border() {
    let start = Instant::now();
    let mut plain = Tooltip::new().distance(1.0);
    let mut styled = Tooltip::new()
        .distance(1.0)
        .style(style_map([("border-color", "red")]));
    let settled = later(start, 250);

    let plain_overlay = shown_overlay(&mut plain, start);
    let styled_overlay = shown_overlay(&mut styled, start);

    let mut terminal = create_test_terminal(80, 24);
    terminal
        .draw(|f| render_overlay(f, &plain_overlay, settled))
        .unwrap();
    assert_ne!(terminal.backend().buffer()[(28, 6)].fg, Color::Red);

    let mut terminal = create_test_terminal(80, 24);
    terminal
        .draw(|f| render_overlay(f, &styled_overlay, settled))
        .unwrap();
    let corner = &terminal.backend().buffer()[(28, 6)];
    assert_eq!(corner.symbol(), "┌");
    assert_eq!(corner.fg, Color::Red);
}

#[test]
fn test_render_nothing_when_hidden() {
    let start = Instant::now();
    let mut tooltip = Tooltip::new().distance(1.0);
    let mut overlay = shown_overlay(&mut tooltip, start);
    tooltip.deactivate(&mut overlay, start);
    overlay.tick(later(start, 1000));

    let mut terminal = create_test_terminal(80, 24);
    terminal
        .draw(|f| render_overlay(f, &overlay, later(start, 1000)))
        .unwrap();

    let output = terminal.backend().to_string();
    assert!(!output.contains("Osaka"));
}

#[test]
fn test_render_dims_while_mostly_transparent() {
    let start = Instant::now();
    let mut tooltip = Tooltip::new()
        .distance(1.0)
        .fade_in_duration(ms(200));
    let overlay = shown_overlay(&mut tooltip, start);

    let mut terminal = create_test_terminal(80, 24);
    let early = later(start, 50);
    terminal
        .draw(|f| render_overlay(f, &overlay, early))
        .unwrap();
    let buffer = terminal.backend().buffer();

    // The holder is still sliding, so locate the title row from the live bounds.
    let title_row = overlay.tooltip_bounds(early).unwrap().y.round() as u16 + 1;
    let row = row_text(buffer, title_row);
    let column = row.chars().position(|c| c == 'O').expect("title should be drawn") as u16;
    assert!(buffer[(column, title_row)].modifier.contains(Modifier::DIM));
}

#[test]
fn test_render_not_dimmed_when_opaque() {
    let start = Instant::now();
    let mut tooltip = Tooltip::new().distance(1.0);
    let overlay = shown_overlay(&mut tooltip, start);

    let mut terminal = create_test_terminal(80, 24);
    let settled = later(start, 250);
    terminal
        .draw(|f| render_overlay(f, &overlay, settled))
        .unwrap();
    let buffer = terminal.backend().buffer();

    let row = row_text(buffer, 7);
    let column = row.chars().position(|c| c == 'O').expect("title should be drawn") as u16;
    assert!(!buffer[(column, 7)].modifier.contains(Modifier::DIM));
    assert!(buffer[(column, 7)].modifier.contains(Modifier::BOLD));
}
