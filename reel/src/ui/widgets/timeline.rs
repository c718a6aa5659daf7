//! Tense-shift timeline widget.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use reel_core::TenseShift;

use crate::ui::theme::CinemaTheme;

/// Widget rendering an exercise's tense transition: the source tense,
/// the target tense, and a direct/reported example pair with the
/// changed chunk highlighted.
pub struct TenseShiftWidget<'a> {
    shift: &'a TenseShift,
    title: &'a str,
    theme: &'a CinemaTheme,
}

impl<'a> TenseShiftWidget<'a> {
    pub fn new(shift: &'a TenseShift, title: &'a str, theme: &'a CinemaTheme) -> Self {
        Self { shift, title, theme }
    }

    /// Build a line from example text, highlighting `[bracketed]`
    /// chunks.
    fn example_line(&self, label: &'a str, text: &'a str) -> Line<'a> {
        let mut spans = vec![Span::styled(format!("{label:<10}"), self.theme.muted_style())];

        let mut rest = text;
        while let Some(open) = rest.find('[') {
            let (before, tail) = rest.split_at(open);
            spans.push(Span::styled(before.to_string(), self.theme.text_style()));
            match tail.find(']') {
                Some(close) => {
                    spans.push(Span::styled(
                        tail[..=close].to_string(),
                        self.theme.marquee_style(),
                    ));
                    rest = &tail[close + 1..];
                }
                None => {
                    spans.push(Span::styled(tail.to_string(), self.theme.text_style()));
                    rest = "";
                }
            }
        }
        if !rest.is_empty() {
            spans.push(Span::styled(rest.to_string(), self.theme.text_style()));
        }

        Line::from(spans)
    }
}

impl Widget for TenseShiftWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} — Timeline ", self.title))
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false));
        let inner = block.inner(area);
        block.render(area, buf);

        let transition = Line::from(vec![
            Span::styled(self.shift.from.clone(), self.theme.accent_style()),
            Span::styled("  ────▶  ", self.theme.muted_style()),
            Span::styled(self.shift.to.clone(), self.theme.marquee_style()),
        ])
        .alignment(Alignment::Center);

        let lines = vec![
            Line::default(),
            transition,
            Line::default(),
            self.example_line("DIRECT", &self.shift.direct),
            Line::default(),
            self.example_line("REPORTED", &self.shift.reported),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
