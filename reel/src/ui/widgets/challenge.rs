//! Fill-in-the-blank challenge widget.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use reel_core::{split_prompt, Feedback};

use crate::ui::theme::CinemaTheme;

/// Widget rendering one challenge: the prompt with its blank, the
/// word bank, and the current feedback.
pub struct ChallengeWidget<'a> {
    exercise_title: &'a str,
    prompt: &'a str,
    answer: &'a str,
    options: &'a [String],
    number: usize,
    total: usize,

    selection: usize,
    feedback: Feedback,
    submitted: Option<&'a str>,
    /// Teacher mode: reveal the canonical answer.
    reveal: bool,

    theme: &'a CinemaTheme,
}

impl<'a> ChallengeWidget<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        exercise_title: &'a str,
        prompt: &'a str,
        answer: &'a str,
        options: &'a [String],
        number: usize,
        total: usize,
        theme: &'a CinemaTheme,
    ) -> Self {
        Self {
            exercise_title,
            prompt,
            answer,
            options,
            number,
            total,
            selection: 0,
            feedback: Feedback::Neutral,
            submitted: None,
            reveal: false,
            theme,
        }
    }

    pub fn selection(mut self, selection: usize) -> Self {
        self.selection = selection;
        self
    }

    pub fn feedback(mut self, feedback: Feedback) -> Self {
        self.feedback = feedback;
        self
    }

    pub fn submitted(mut self, submitted: Option<&'a str>) -> Self {
        self.submitted = submitted;
        self
    }

    pub fn reveal(mut self, reveal: bool) -> Self {
        self.reveal = reveal;
        self
    }

    /// The prompt line, with the blank filled by the submitted value
    /// once there is one.
    fn prompt_line(&self) -> Line<'a> {
        let (prefix, suffix) = split_prompt(self.prompt);

        let blank_span = match self.submitted {
            Some(value) => Span::styled(
                format!(" {value} "),
                self.theme.feedback_style(self.feedback),
            ),
            None => Span::styled("______", self.theme.marquee_style()),
        };

        Line::from(vec![
            Span::styled(prefix.to_string(), self.theme.text_style()),
            blank_span,
            Span::styled(suffix.to_string(), self.theme.text_style()),
        ])
    }

    fn options_line(&self) -> Line<'a> {
        let mut spans = Vec::with_capacity(self.options.len() * 2);
        for (index, option) in self.options.iter().enumerate() {
            if index > 0 {
                spans.push(Span::raw("   "));
            }
            let label = format!(" {} {} ", index + 1, option);
            let style = if self.submitted == Some(option.as_str())
                && self.feedback != Feedback::Neutral
            {
                self.theme.feedback_style(self.feedback)
            } else if index == self.selection {
                self.theme.selection_style()
            } else {
                self.theme.text_style()
            };
            spans.push(Span::styled(label, style));
        }
        Line::from(spans).alignment(Alignment::Center)
    }

    fn feedback_line(&self) -> Line<'a> {
        let (text, style) = match self.feedback {
            Feedback::Correct => ("★ Correct! Rolling on...", self.theme.feedback_style(self.feedback)),
            Feedback::Incorrect => ("✗ Not quite. Try again.", self.theme.feedback_style(self.feedback)),
            Feedback::Neutral => (
                "Pick a word with ↑/↓ or 1-4, then press Enter.",
                self.theme.muted_style(),
            ),
        };
        Line::from(Span::styled(text, style)).alignment(Alignment::Center)
    }
}

impl Widget for ChallengeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(
                " {} — Take {}/{} ",
                self.exercise_title, self.number, self.total
            ))
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::default(),
            self.prompt_line(),
            Line::default(),
            self.options_line(),
            Line::default(),
            self.feedback_line(),
        ];

        if self.reveal {
            lines.push(Line::default());
            lines.push(
                Line::from(Span::styled(
                    format!("Answer: {}", self.answer),
                    self.theme.muted_style(),
                ))
                .alignment(Alignment::Center),
            );
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
