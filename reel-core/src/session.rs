//! Lesson session: the cursor over a playbook plus per-slide
//! interaction state and timed transitions.
//!
//! The session is the sole mutator of navigation state. Time is
//! caller-supplied milliseconds: the front end feeds its clock into
//! [`LessonSession::tick`], and tests control time directly.

use log::debug;

use crate::lesson::answer_matches;
use crate::playbook::{Playbook, Slide, SlideId};

/// Delay before auto-advancing past a correctly answered challenge.
pub const DEFAULT_ADVANCE_DELAY_MS: u64 = 1000;

/// Delay before clearing feedback after an incorrect answer.
pub const DEFAULT_RETRY_DELAY_MS: u64 = 1500;

/// Timing configuration for a session.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    pub advance_delay_ms: u64,
    pub retry_delay_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            advance_delay_ms: DEFAULT_ADVANCE_DELAY_MS,
            retry_delay_ms: DEFAULT_RETRY_DELAY_MS,
        }
    }
}

/// Feedback state of the current slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Feedback {
    #[default]
    Neutral,
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingAction {
    /// Move to the next slide (scheduled by a correct answer).
    Advance,
    /// Reset feedback and the submitted value for a retry.
    ClearFeedback,
}

/// A delayed transition, keyed to the slide it was scheduled on.
///
/// The key is what makes these safe: a transition whose slide is no
/// longer showing is dropped, never fired.
#[derive(Debug, Clone, Copy)]
struct ScheduledTransition {
    fire_at_ms: u64,
    slide: SlideId,
    action: PendingAction,
}

/// Navigation and answer-check state machine over a playbook.
#[derive(Debug)]
pub struct LessonSession {
    playbook: Playbook,
    config: SessionConfig,
    cursor: usize,
    feedback: Feedback,
    submitted: Option<String>,
    scheduled: Option<ScheduledTransition>,
}

impl LessonSession {
    /// Create a session positioned on the first slide.
    ///
    /// The playbook builder always emits at least the outro slide, so a
    /// playbook is never empty.
    pub fn new(playbook: Playbook) -> Self {
        Self::with_config(playbook, SessionConfig::default())
    }

    pub fn with_config(playbook: Playbook, config: SessionConfig) -> Self {
        debug_assert!(!playbook.is_empty(), "a playbook always has an outro slide");
        Self {
            playbook,
            config,
            cursor: 0,
            feedback: Feedback::Neutral,
            submitted: None,
            scheduled: None,
        }
    }

    pub fn playbook(&self) -> &Playbook {
        &self.playbook
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// The slide under the cursor.
    pub fn current(&self) -> &Slide {
        &self.playbook.slides()[self.cursor]
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.playbook.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playbook.is_empty()
    }

    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    pub fn submitted(&self) -> Option<&str> {
        self.submitted.as_deref()
    }

    /// Whether a manual advance would move the cursor.
    ///
    /// Manual forward navigation is gated on challenge slides: the
    /// learner cannot skip a question without answering it correctly.
    /// The scene menu's jump is the one unrestricted way past.
    pub fn can_advance(&self) -> bool {
        if self.cursor + 1 >= self.playbook.len() {
            return false;
        }
        match self.current() {
            Slide::Challenge { .. } => self.feedback == Feedback::Correct,
            _ => true,
        }
    }

    /// Manual advance. No-op at the last slide and on an unanswered
    /// challenge; returns whether the cursor moved.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.move_cursor(self.cursor + 1);
        true
    }

    /// Manual retreat. No-op at the first slide.
    pub fn retreat(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.move_cursor(self.cursor - 1);
        true
    }

    /// Unconditional jump to a slide index.
    ///
    /// An out-of-range target is a programming fault: it asserts in
    /// debug builds and is rejected as a no-op in release builds.
    pub fn jump(&mut self, index: usize) -> bool {
        if index >= self.playbook.len() {
            debug_assert!(false, "jump target {index} out of range");
            return false;
        }
        self.move_cursor(index);
        true
    }

    /// Jump to the intro slide of the scene with the given title.
    pub fn jump_to_scene(&mut self, title: &str) -> bool {
        match self.playbook.scene_intro_index(title) {
            Some(index) => self.jump(index),
            None => false,
        }
    }

    /// Back to the first slide.
    pub fn restart(&mut self) {
        self.move_cursor(0);
    }

    /// Submit an answer for the current challenge slide.
    ///
    /// Meaningless on any other slide (returns the unchanged feedback).
    /// A correct answer schedules an auto-advance; an incorrect one
    /// schedules a feedback reset so the learner can retry. Retries are
    /// unlimited.
    pub fn submit_answer(&mut self, value: &str, now_ms: u64) -> Feedback {
        let (slide, canonical) = match self.current() {
            Slide::Challenge { id, answer, .. } => (*id, answer.clone()),
            _ => return self.feedback,
        };

        self.submitted = Some(value.to_string());
        if answer_matches(value, &canonical) {
            self.feedback = Feedback::Correct;
            self.scheduled = Some(ScheduledTransition {
                fire_at_ms: now_ms + self.config.advance_delay_ms,
                slide,
                action: PendingAction::Advance,
            });
        } else {
            self.feedback = Feedback::Incorrect;
            self.scheduled = Some(ScheduledTransition {
                fire_at_ms: now_ms + self.config.retry_delay_ms,
                slide,
                action: PendingAction::ClearFeedback,
            });
        }
        debug!("answer {value:?} on {slide}: {:?}", self.feedback);
        self.feedback
    }

    /// Fire the scheduled transition if it is due. Returns whether
    /// session state changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let transition = match self.scheduled {
            Some(t) if now_ms >= t.fire_at_ms => t,
            _ => return false,
        };
        self.scheduled = None;

        if transition.slide != self.current().id() {
            // Scheduled against a slide that is no longer showing.
            debug!("dropping stale transition for {}", transition.slide);
            return false;
        }

        match transition.action {
            PendingAction::Advance => {
                if self.cursor + 1 < self.playbook.len() {
                    self.move_cursor(self.cursor + 1);
                    true
                } else {
                    false
                }
            }
            PendingAction::ClearFeedback => {
                self.feedback = Feedback::Neutral;
                self.submitted = None;
                true
            }
        }
    }

    /// Every cursor change runs through here: feedback, the pending
    /// value, and any scheduled transition reset unconditionally.
    fn move_cursor(&mut self, index: usize) {
        if index == self.cursor {
            return;
        }
        self.cursor = index;
        self.feedback = Feedback::Neutral;
        self.submitted = None;
        self.scheduled = None;
        debug!("cursor at {index} ({})", self.current().kind());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lesson::create_sample_lesson;
    use crate::playbook::{build_playbook_with_rng, SlideKind};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session() -> LessonSession {
        let playbook =
            build_playbook_with_rng(&create_sample_lesson(), &mut StdRng::seed_from_u64(1));
        LessonSession::new(playbook)
    }

    /// Index of the first challenge slide in the sample playbook.
    const FIRST_CHALLENGE: usize = 4;

    #[test]
    fn test_retreat_at_start_is_noop() {
        let mut session = session();
        assert!(!session.retreat());
        assert_eq!(session.position(), 0);
    }

    #[test]
    fn test_advance_at_end_is_noop() {
        let mut session = session();
        let last = session.len() - 1;
        session.jump(last);
        assert!(!session.advance());
        assert_eq!(session.position(), last);
    }

    #[test]
    fn test_advance_blocked_on_unanswered_challenge() {
        let mut session = session();
        session.jump(FIRST_CHALLENGE);
        assert_eq!(session.current().kind(), SlideKind::Challenge);

        assert!(!session.can_advance());
        assert!(!session.advance());
        assert_eq!(session.position(), FIRST_CHALLENGE);

        // A wrong answer does not unlock it either.
        session.submit_answer("wrong", 0);
        assert!(!session.advance());

        session.submit_answer("was", 10);
        assert!(session.can_advance());
        assert!(session.advance());
        assert_eq!(session.position(), FIRST_CHALLENGE + 1);
    }

    #[test]
    fn test_correct_answer_auto_advances_after_delay() {
        let mut session = session();
        session.jump(FIRST_CHALLENGE);

        assert_eq!(session.submit_answer("was", 1_000), Feedback::Correct);
        // Not yet due.
        assert!(!session.tick(1_500));
        assert_eq!(session.position(), FIRST_CHALLENGE);

        assert!(session.tick(2_000));
        assert_eq!(session.position(), FIRST_CHALLENGE + 1);
        assert_eq!(session.feedback(), Feedback::Neutral);
        assert_eq!(session.submitted(), None);
    }

    #[test]
    fn test_incorrect_answer_clears_after_delay() {
        let mut session = session();
        session.jump(FIRST_CHALLENGE);

        assert_eq!(session.submit_answer("is", 0), Feedback::Incorrect);
        assert_eq!(session.submitted(), Some("is"));

        assert!(!session.tick(1_000));
        assert_eq!(session.feedback(), Feedback::Incorrect);

        assert!(session.tick(1_500));
        assert_eq!(session.feedback(), Feedback::Neutral);
        assert_eq!(session.submitted(), None);
        assert_eq!(session.position(), FIRST_CHALLENGE);
    }

    #[test]
    fn test_cursor_change_cancels_scheduled_advance() {
        let mut session = session();
        session.jump(FIRST_CHALLENGE);
        session.submit_answer("was", 0);

        // Leave the slide before the delayed advance fires.
        assert!(session.retreat());
        assert!(!session.tick(10_000));
        assert_eq!(session.position(), FIRST_CHALLENGE - 1);
    }

    #[test]
    fn test_any_cursor_change_resets_interaction_state() {
        let mut session = session();
        session.jump(FIRST_CHALLENGE);
        session.submit_answer("is", 0);
        assert_eq!(session.feedback(), Feedback::Incorrect);

        session.retreat();
        assert_eq!(session.feedback(), Feedback::Neutral);
        assert_eq!(session.submitted(), None);

        session.jump(FIRST_CHALLENGE);
        session.submit_answer("is", 0);
        session.restart();
        assert_eq!(session.position(), 0);
        assert_eq!(session.feedback(), Feedback::Neutral);
        assert_eq!(session.submitted(), None);
    }

    #[test]
    fn test_noop_moves_leave_state_untouched() {
        let mut session = session();
        session.jump(FIRST_CHALLENGE);
        session.submit_answer("is", 0);

        // Blocked advance is a no-op, so feedback survives.
        assert!(!session.advance());
        assert_eq!(session.feedback(), Feedback::Incorrect);
        assert_eq!(session.submitted(), Some("is"));
    }

    #[test]
    fn test_jump_out_of_range_rejected() {
        let mut session = session();
        let len = session.len();
        session.jump(2);

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            session.jump(len)
        }));
        if let Ok(moved) = result {
            // Release build: rejected as a no-op.
            assert!(!moved);
            assert_eq!(session.position(), 2);
        }
    }

    #[test]
    fn test_jump_to_scene() {
        let mut session = session();
        session.jump(FIRST_CHALLENGE);
        assert!(session.jump_to_scene("Scene 2: The Door"));
        assert_eq!(session.current().kind(), SlideKind::Intro);
        assert!(!session.jump_to_scene("No Such Scene"));
    }

    #[test]
    fn test_submit_ignored_off_challenge_slides() {
        let mut session = session();
        assert_eq!(session.submit_answer("was", 0), Feedback::Neutral);
        assert_eq!(session.submitted(), None);
        assert!(!session.tick(100_000));
    }

    #[test]
    fn test_scene_jump_is_unrestricted_by_gating() {
        let mut session = session();
        session.jump(FIRST_CHALLENGE);
        assert!(!session.can_advance());
        // Menu-driven jumps ignore the challenge gate.
        assert!(session.jump_to_scene("Scene 1: The Interview"));
        assert_eq!(session.position(), 0);
    }
}
