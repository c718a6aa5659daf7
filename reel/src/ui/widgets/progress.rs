//! Footer widgets: progress dots and the Live countdown bar.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget},
};

use crate::ui::theme::CinemaTheme;

/// One dot per slide, the current one lit.
pub struct ProgressWidget<'a> {
    position: usize,
    len: usize,
    theme: &'a CinemaTheme,
}

impl<'a> ProgressWidget<'a> {
    pub fn new(position: usize, len: usize, theme: &'a CinemaTheme) -> Self {
        Self {
            position,
            len,
            theme,
        }
    }
}

impl Widget for ProgressWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // A full deck does not fit a narrow terminal; fall back to a
        // plain counter when it would overflow.
        if self.len * 2 > area.width as usize {
            let counter = Line::from(Span::styled(
                format!("{} / {}", self.position + 1, self.len),
                self.theme.muted_style(),
            ))
            .alignment(Alignment::Center);
            Paragraph::new(counter).render(area, buf);
            return;
        }

        let mut spans = Vec::with_capacity(self.len);
        for index in 0..self.len {
            let span = if index == self.position {
                Span::styled("● ", self.theme.marquee_style())
            } else {
                Span::styled("· ", self.theme.muted_style())
            };
            spans.push(span);
        }
        Paragraph::new(Line::from(spans).alignment(Alignment::Center)).render(area, buf);
    }
}

/// Looping countdown bar for Live mode.
pub struct CountdownWidget<'a> {
    ratio: f64,
    theme: &'a CinemaTheme,
}

impl<'a> CountdownWidget<'a> {
    pub fn new(ratio: f64, theme: &'a CinemaTheme) -> Self {
        Self { ratio, theme }
    }
}

impl Widget for CountdownWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Gauge::default()
            .gauge_style(self.theme.accent_style())
            .ratio(self.ratio.clamp(0.0, 1.0))
            .label("⏵ LIVE SESSION")
            .render(area, buf);
    }
}
