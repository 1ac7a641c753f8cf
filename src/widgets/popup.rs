use ratatui::{Frame, layout::Rect, widgets::Clear};

use crate::geometry::Bounds;

/// Snaps `bounds` to whole cells and clips it to `area`. `None` when
/// nothing of it is visible.
pub fn clip_to_area(bounds: Bounds, area: Rect) -> Option<Rect> {
    let left = bounds.x.round();
    let top = bounds.y.round();
    let right = left + bounds.width.round();
    let bottom = top + bounds.height.round();

    let left = left.max(f64::from(area.x));
    let top = top.max(f64::from(area.y));
    let right = right.min(f64::from(area.right()));
    let bottom = bottom.min(f64::from(area.bottom()));

    if right <= left || bottom <= top {
        return None;
    }

    Some(Rect {
        x: left as u16,
        y: top as u16,
        width: (right - left) as u16,
        height: (bottom - top) as u16,
    })
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
