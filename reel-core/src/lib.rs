//! Reported-speech lesson engine.
//!
//! This crate provides:
//! - The lesson data model and answer validation
//! - The playbook builder: lessons flatten into a linear slide deck
//! - The session state machine: navigation, answer checks, and timed
//!   transitions
//! - A built-in three-scene lesson and versioned lesson files
//!
//! # Quick Start
//!
//! ```
//! use reel_core::catalog::REPORTED_SPEECH;
//! use reel_core::{build_playbook, Feedback, LessonSession, Slide};
//!
//! let playbook = build_playbook(&REPORTED_SPEECH);
//! let mut session = LessonSession::new(playbook);
//!
//! // Walk to the first challenge and answer it.
//! while !session.current().is_challenge() {
//!     session.advance();
//! }
//! let correct = match session.current() {
//!     Slide::Challenge { answer, .. } => answer.split('/').next().unwrap().trim().to_string(),
//!     _ => unreachable!(),
//! };
//! assert_eq!(session.submit_answer(&correct, 0), Feedback::Correct);
//! // The auto-advance fires once its delay elapses.
//! assert!(session.tick(1_000));
//! ```

pub mod catalog;
pub mod lesson;
pub mod persist;
pub mod playbook;
pub mod session;
pub mod testing;

// Primary public API
pub use lesson::{
    answer_matches, create_sample_lesson, split_prompt, Exercise, Lesson, LocalizedText, Question,
    Scene, ScriptLine, TenseShift, BLANK,
};
pub use persist::{load_lesson, LessonError, LessonFile, LESSON_FORMAT_VERSION};
pub use playbook::{build_playbook, build_playbook_with_rng, Playbook, Slide, SlideId, SlideKind};
pub use session::{Feedback, LessonSession, SessionConfig};
pub use testing::SessionHarness;
