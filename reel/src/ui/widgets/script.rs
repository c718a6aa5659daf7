//! Scene script display widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use reel_core::ScriptLine;

use crate::ui::theme::CinemaTheme;

/// Widget rendering a scene's dialogue with the studied verbs
/// highlighted.
pub struct ScriptWidget<'a> {
    lines: &'a [ScriptLine],
    title: &'a str,
    theme: &'a CinemaTheme,
}

impl<'a> ScriptWidget<'a> {
    pub fn new(lines: &'a [ScriptLine], title: &'a str, theme: &'a CinemaTheme) -> Self {
        Self { lines, title, theme }
    }

    fn render_line(&self, line: &ScriptLine) -> Line<'a> {
        let mut spans = vec![
            Span::styled(format!("{}: ", line.speaker), self.theme.speaker_style()),
        ];

        let verbs = verb_words(line.verbs.as_deref());
        for (index, word) in line.text.split(' ').enumerate() {
            if index > 0 {
                spans.push(Span::raw(" "));
            }
            let bare: String = word
                .chars()
                .filter(|c| c.is_alphanumeric() || *c == '\'' || *c == '’')
                .collect();
            if !bare.is_empty() && verbs.iter().any(|v| v.eq_ignore_ascii_case(&bare)) {
                spans.push(Span::styled(word.to_string(), self.theme.verb_style()));
            } else {
                spans.push(Span::styled(word.to_string(), self.theme.text_style()));
            }
        }

        Line::from(spans)
    }
}

/// Split a comma-separated verb list into matchable words.
///
/// Multi-word entries ("are looking") match each of their words, so
/// both halves light up in the rendered line.
fn verb_words(verbs: Option<&str>) -> Vec<String> {
    match verbs {
        Some(list) => list
            .split(',')
            .flat_map(|entry| entry.split_whitespace())
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    }
}

impl Widget for ScriptWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} — Script ", self.title))
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = Vec::with_capacity(self.lines.len() * 2);
        for line in self.lines {
            lines.push(self.render_line(line));
            lines.push(Line::default());
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
