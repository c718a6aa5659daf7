//! Screen layout for the slideshow TUI.

use ratatui::layout::{Constraint, Layout, Rect};

/// The main screen areas, top to bottom.
pub struct AppLayout {
    pub title_area: Rect,
    pub stage_area: Rect,
    pub status_area: Rect,
    pub footer_area: Rect,
}

impl AppLayout {
    pub fn calculate(area: Rect) -> Self {
        let [title_area, stage_area, status_area, footer_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(8),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .areas(area);

        Self {
            title_area,
            stage_area,
            status_area,
            footer_area,
        }
    }
}

/// A centered rect of fixed size, clamped to the containing area.
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
