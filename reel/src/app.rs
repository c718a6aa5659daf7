//! Application state for the slideshow TUI.

use reel_core::{Feedback, LessonSession, Slide, SlideId};

use crate::ui::theme::CinemaTheme;
use crate::ui::Overlay;

/// Length of one Live-mode countdown sweep.
pub const LIVE_CYCLE_MS: u64 = 10_000;

/// Presentation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StudyMode {
    /// Learner answers the challenges.
    #[default]
    Student,
    /// Answers are revealed on challenge slides.
    Teacher,
    /// Classroom projection with a looping countdown bar.
    Live,
}

impl StudyMode {
    pub fn label(self) -> &'static str {
        match self {
            StudyMode::Student => "STUDENT",
            StudyMode::Teacher => "TEACHER",
            StudyMode::Live => "LIVE",
        }
    }

    pub fn next(self) -> Self {
        match self {
            StudyMode::Student => StudyMode::Teacher,
            StudyMode::Teacher => StudyMode::Live,
            StudyMode::Live => StudyMode::Student,
        }
    }
}

/// Main application state.
pub struct App {
    pub session: LessonSession,
    pub mode: StudyMode,
    pub theme: CinemaTheme,

    overlay: Option<Overlay>,
    pub menu_cursor: usize,

    /// Word-bank selection index on challenge slides.
    pub selection: usize,

    status_message: Option<String>,

    // Slide-change tracking for selection reset and the Live countdown.
    last_slide: SlideId,
    slide_changed_at_ms: u64,
    live_ratio: f64,
}

impl App {
    pub fn new(session: LessonSession) -> Self {
        let last_slide = session.current().id();
        Self {
            session,
            mode: StudyMode::default(),
            theme: CinemaTheme::default(),
            overlay: None,
            menu_cursor: 0,
            selection: 0,
            status_message: None,
            last_slide,
            slide_changed_at_ms: 0,
            live_ratio: 1.0,
        }
    }

    pub fn with_mode(mut self, mode: StudyMode) -> Self {
        self.mode = mode;
        self
    }

    /// Drive the session clock and the cosmetic Live countdown.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let changed = self.session.tick(now_ms);
        self.sync_slide(now_ms);

        let elapsed = (now_ms.saturating_sub(self.slide_changed_at_ms)) % LIVE_CYCLE_MS;
        self.live_ratio = 1.0 - elapsed as f64 / LIVE_CYCLE_MS as f64;

        changed
    }

    /// Reset per-slide UI state when the cursor has moved since the
    /// last call, by whatever means it moved.
    pub fn sync_slide(&mut self, now_ms: u64) {
        let current = self.session.current().id();
        if current != self.last_slide {
            self.last_slide = current;
            self.selection = 0;
            self.status_message = None;
            self.slide_changed_at_ms = now_ms;
        }
    }

    /// Remaining fraction of the Live countdown sweep.
    pub fn live_ratio(&self) -> f64 {
        self.live_ratio.clamp(0.0, 1.0)
    }

    // =========================================================================
    // Navigation commands
    // =========================================================================

    pub fn try_advance(&mut self) {
        if !self.session.advance() && self.session.current().is_challenge() {
            self.set_status("Answer the challenge to continue (the menu can skip scenes).");
        }
    }

    pub fn retreat(&mut self) {
        self.session.retreat();
    }

    pub fn restart(&mut self) {
        self.session.restart();
    }

    pub fn cycle_mode(&mut self) {
        self.mode = self.mode.next();
        self.set_status(format!("{} mode", self.mode.label()));
    }

    // =========================================================================
    // Word-bank selection
    // =========================================================================

    fn options_len(&self) -> usize {
        match self.session.current() {
            Slide::Challenge { options, .. } => options.len(),
            _ => 0,
        }
    }

    /// Whether the current challenge still accepts input.
    fn accepting_answers(&self) -> bool {
        self.session.current().is_challenge() && self.session.feedback() != Feedback::Correct
    }

    pub fn select_next(&mut self) {
        let len = self.options_len();
        if len > 0 {
            self.selection = (self.selection + 1) % len;
        }
    }

    pub fn select_prev(&mut self) {
        let len = self.options_len();
        if len > 0 {
            self.selection = (self.selection + len - 1) % len;
        }
    }

    /// Submit the currently selected word-bank option.
    pub fn submit_selection(&mut self, now_ms: u64) {
        if !self.accepting_answers() {
            return;
        }
        let option = match self.session.current() {
            Slide::Challenge { options, .. } => options.get(self.selection).cloned(),
            _ => None,
        };
        if let Some(option) = option {
            self.session.submit_answer(&option, now_ms);
        }
    }

    /// Select an option by index and submit it immediately.
    pub fn select_and_submit(&mut self, index: usize, now_ms: u64) {
        if index < self.options_len() {
            self.selection = index;
            self.submit_selection(now_ms);
        }
    }

    // =========================================================================
    // Overlays
    // =========================================================================

    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    pub fn toggle_help(&mut self) {
        if matches!(self.overlay, Some(Overlay::Help)) {
            self.overlay = None;
        } else {
            self.overlay = Some(Overlay::Help);
        }
    }

    pub fn open_menu(&mut self) {
        self.menu_cursor = 0;
        self.overlay = Some(Overlay::SceneMenu);
    }

    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    pub fn menu_next(&mut self) {
        let len = self.session.playbook().scene_titles().len();
        if len > 0 {
            self.menu_cursor = (self.menu_cursor + 1) % len;
        }
    }

    pub fn menu_prev(&mut self) {
        let len = self.session.playbook().scene_titles().len();
        if len > 0 {
            self.menu_cursor = (self.menu_cursor + len - 1) % len;
        }
    }

    /// Jump to the scene under the menu cursor and close the menu.
    pub fn menu_select(&mut self) {
        let title = self
            .session
            .playbook()
            .scene_titles()
            .get(self.menu_cursor)
            .map(|title| title.to_string());
        if let Some(title) = title {
            self.session.jump_to_scene(&title);
        }
        self.overlay = None;
    }

    // =========================================================================
    // Status line
    // =========================================================================

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}
