//! Color theme and styling for the slideshow TUI.

use ratatui::style::{Color, Modifier, Style};

use reel_core::Feedback;

/// Cinema palette: gold marquee lettering, red velvet accents, a dark
/// stage.
#[derive(Debug, Clone)]
pub struct CinemaTheme {
    pub marquee: Color,
    pub accent: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,

    pub speaker: Color,
    pub verb: Color,

    pub correct: Color,
    pub incorrect: Color,
}

impl Default for CinemaTheme {
    fn default() -> Self {
        Self {
            marquee: Color::Yellow,
            accent: Color::Red,
            foreground: Color::White,
            muted: Color::DarkGray,
            border: Color::DarkGray,

            speaker: Color::Cyan,
            verb: Color::Yellow,

            correct: Color::Green,
            incorrect: Color::Red,
        }
    }
}

impl CinemaTheme {
    /// Style for marquee titles.
    pub fn marquee_style(&self) -> Style {
        Style::default()
            .fg(self.marquee)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for red-accent text (badges, the countdown bar).
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Style for normal stage text.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.foreground)
    }

    /// Style for secondary text (translations, hints).
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted).add_modifier(Modifier::DIM)
    }

    /// Style for speaker names in the script.
    pub fn speaker_style(&self) -> Style {
        Style::default()
            .fg(self.speaker)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for highlighted verbs in script lines.
    pub fn verb_style(&self) -> Style {
        Style::default()
            .fg(self.verb)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Style for the selected word-bank option.
    pub fn selection_style(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.marquee)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for answer feedback text.
    pub fn feedback_style(&self, feedback: Feedback) -> Style {
        match feedback {
            Feedback::Correct => Style::default()
                .fg(self.correct)
                .add_modifier(Modifier::BOLD),
            Feedback::Incorrect => Style::default()
                .fg(self.incorrect)
                .add_modifier(Modifier::BOLD),
            Feedback::Neutral => self.text_style(),
        }
    }

    /// Border style; overlays get the marquee color.
    pub fn border_style(&self, highlighted: bool) -> Style {
        Style::default().fg(if highlighted { self.marquee } else { self.border })
    }
}
