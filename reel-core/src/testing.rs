//! Testing utilities for lesson sessions.
//!
//! `SessionHarness` wraps a session built from the sample lesson with a
//! controllable clock, so scenarios read as "submit, advance time,
//! assert" without touching real timers. Playbooks are built from a
//! seeded RNG for reproducible word banks.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::lesson::{create_sample_lesson, Lesson};
use crate::playbook::{build_playbook_with_rng, SlideKind};
use crate::session::{Feedback, LessonSession, SessionConfig};

/// Seed used for harness playbooks.
const HARNESS_SEED: u64 = 0xC1AE;

/// Test harness: a session plus a manually advanced clock.
pub struct SessionHarness {
    pub session: LessonSession,
    now_ms: u64,
}

impl SessionHarness {
    /// Harness over the sample lesson with default timing.
    pub fn new() -> Self {
        Self::with_lesson(&create_sample_lesson())
    }

    pub fn with_lesson(lesson: &Lesson) -> Self {
        Self::with_lesson_and_config(lesson, SessionConfig::default())
    }

    pub fn with_lesson_and_config(lesson: &Lesson, config: SessionConfig) -> Self {
        let playbook = build_playbook_with_rng(lesson, &mut StdRng::seed_from_u64(HARNESS_SEED));
        Self {
            session: LessonSession::with_config(playbook, config),
            now_ms: 0,
        }
    }

    /// The harness clock, in milliseconds.
    pub fn now(&self) -> u64 {
        self.now_ms
    }

    /// Submit an answer at the current clock time.
    pub fn submit(&mut self, answer: &str) -> Feedback {
        self.session.submit_answer(answer, self.now_ms)
    }

    /// Advance the clock and tick the session. Returns whether the
    /// session changed.
    pub fn advance_time(&mut self, ms: u64) -> bool {
        self.now_ms += ms;
        self.session.tick(self.now_ms)
    }

    /// Manually advance until the cursor sits on a challenge slide.
    ///
    /// Panics if none is reachable; only call on playbooks known to
    /// contain one.
    pub fn advance_to_challenge(&mut self) -> usize {
        while self.session.current().kind() != SlideKind::Challenge {
            assert!(
                self.session.advance(),
                "no challenge slide reachable from {}",
                self.session.position()
            );
        }
        self.session.position()
    }
}

impl Default for SessionHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Assert the cursor position.
#[track_caller]
pub fn assert_position(harness: &SessionHarness, expected: usize) {
    assert_eq!(
        harness.session.position(),
        expected,
        "expected cursor at {expected}, got {}",
        harness.session.position()
    );
}

/// Assert the current feedback state.
#[track_caller]
pub fn assert_feedback(harness: &SessionHarness, expected: Feedback) {
    assert_eq!(
        harness.session.feedback(),
        expected,
        "expected feedback {expected:?}, got {:?}",
        harness.session.feedback()
    );
}

/// Assert the kind of the slide under the cursor.
#[track_caller]
pub fn assert_slide_kind(harness: &SessionHarness, expected: SlideKind) {
    assert_eq!(
        harness.session.current().kind(),
        expected,
        "expected a {expected} slide, got {}",
        harness.session.current().kind()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_walkthrough() {
        let mut harness = SessionHarness::new();
        assert_slide_kind(&harness, SlideKind::Intro);

        let challenge = harness.advance_to_challenge();
        assert_slide_kind(&harness, SlideKind::Challenge);

        harness.submit("was");
        assert_feedback(&harness, Feedback::Correct);
        harness.advance_time(1_000);
        assert_position(&harness, challenge + 1);
    }

    #[test]
    fn test_harness_clock_accumulates() {
        let mut harness = SessionHarness::new();
        harness.advance_time(300);
        harness.advance_time(300);
        assert_eq!(harness.now(), 600);
    }
}
