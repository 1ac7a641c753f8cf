//! Tooltip rendering
//!
//! Draws the overlay's built content onto a ratatui frame: a bordered box
//! with a centered title and a two-column item table.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::geometry::Size;
use crate::overlay::{BuiltContent, Overlay};
use crate::payload::DisplayPayload;
use crate::theme::{border_style, resolve_style, text_align};
use crate::widgets::popup;

// Tooltip box constants
pub const BORDER_SIZE: u16 = 2; // one cell each side
pub const HORIZONTAL_PADDING: u16 = 2;
pub const ITEM_GAP: usize = 2;
/// Below this opacity the tooltip is drawn dimmed.
pub const DIM_THRESHOLD: f64 = 0.5;

fn item_label(title: &str) -> String {
    format!("{}:", title)
}

fn label_width(payload: &DisplayPayload) -> usize {
    payload
        .items
        .iter()
        .map(|item| item_label(&item.title).width())
        .max()
        .unwrap_or(0)
}

/// Size of the tooltip box in terminal cells, borders included.
pub fn measure_payload(payload: &DisplayPayload) -> Size {
    let title_width = payload.title.as_deref().map_or(0, UnicodeWidthStr::width);
    let row_width = if payload.items.is_empty() {
        0
    } else {
        let value_width = payload
            .items
            .iter()
            .map(|item| item.value.width())
            .max()
            .unwrap_or(0);
        label_width(payload) + ITEM_GAP + value_width
    };

    let inner_width = title_width.max(row_width);
    let inner_height = usize::from(payload.title.is_some()) + payload.items.len();

    Size::new(
        (inner_width + usize::from(BORDER_SIZE + HORIZONTAL_PADDING)) as f64,
        (inner_height + usize::from(BORDER_SIZE)) as f64,
    )
}

fn dimmed(style: Style, dim: bool) -> Style {
    if dim {
        style.add_modifier(Modifier::DIM)
    } else {
        style
    }
}

/// Title line followed by one line per item.
pub fn content_lines(content: &BuiltContent, dim: bool) -> Vec<Line<'static>> {
    let payload = &content.payload;
    let styles = &content.styles;
    let mut lines = Vec::with_capacity(payload.items.len() + 1);

    if let Some(title) = &payload.title {
        let title_style = dimmed(resolve_style(&styles.title), dim);
        lines.push(
            Line::from(Span::styled(title.clone(), title_style))
                .alignment(text_align(&styles.title, Alignment::Center)),
        );
    }

    let label_width = label_width(payload);
    let label_style = dimmed(resolve_style(&styles.item_title), dim);
    let value_style = dimmed(resolve_style(&styles.item_value), dim);
    let right_aligned = text_align(&styles.item_title, Alignment::Right) == Alignment::Right;

    for item in &payload.items {
        let label = item_label(&item.title);
        let padding = " ".repeat(label_width.saturating_sub(label.width()));
        let padded = if right_aligned {
            format!("{}{}", padding, label)
        } else {
            format!("{}{}", label, padding)
        };

        lines.push(Line::from(vec![
            Span::styled(padded, label_style),
            Span::raw(" ".repeat(ITEM_GAP)),
            Span::styled(item.value.clone(), value_style),
        ]));
    }

    lines
}

/// Draws the tooltip if the overlay has content and is not fully transparent.
pub fn render_overlay(frame: &mut Frame, overlay: &Overlay, now: Instant) {
    let opacity = overlay.opacity(now);
    if opacity <= 0.0 || !overlay.is_container_visible() {
        return;
    }

    let (Some(content), Some(bounds)) = (overlay.content(), overlay.tooltip_bounds(now)) else {
        return;
    };
    let Some(area) = popup::clip_to_area(bounds, frame.area()) else {
        return;
    };

    let dim = opacity < DIM_THRESHOLD;
    let frame_style = dimmed(resolve_style(&content.styles.frame), dim);
    let frame_border = dimmed(border_style(&content.styles.frame), dim);

    // Clear the background for floating effect
    popup::clear_area(frame, area);

    let tooltip = Paragraph::new(content_lines(content, dim)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(frame_border)
            .style(frame_style)
            .padding(Padding::horizontal(HORIZONTAL_PADDING / 2)),
    );

    frame.render_widget(tooltip, area);
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
