//! End-to-end QA for the navigation and answer-check state machine.

use reel_core::catalog::REPORTED_SPEECH;
use reel_core::testing::{assert_feedback, assert_position, assert_slide_kind, SessionHarness};
use reel_core::{Feedback, SessionConfig, Slide, SlideKind};

/// Answer the current challenge correctly, reading the canonical answer
/// off the slide.
fn answer_correctly(harness: &mut SessionHarness) -> Feedback {
    let answer = match harness.session.current() {
        Slide::Challenge { answer, .. } => {
            answer.split('/').next().unwrap().trim().to_string()
        }
        other => panic!("expected a challenge slide, got {}", other.kind()),
    };
    harness.submit(&answer)
}

#[test]
fn full_lesson_walkthrough() {
    let mut harness = SessionHarness::with_lesson(&REPORTED_SPEECH);
    let len = harness.session.len();

    // Every slide is reachable by answering challenges correctly and
    // advancing through everything else.
    let mut steps = 0;
    while harness.session.position() < len - 1 {
        if harness.session.current().is_challenge() {
            assert_eq!(answer_correctly(&mut harness), Feedback::Correct);
            assert!(harness.advance_time(1_000));
        } else {
            assert!(harness.session.advance());
        }
        steps += 1;
        assert!(steps < 10_000, "walkthrough did not terminate");
    }

    assert_slide_kind(&harness, SlideKind::Outro);
    assert!(!harness.session.advance());
}

#[test]
fn correct_answer_advances_exactly_one_slide_after_the_delay() {
    let mut harness = SessionHarness::new();
    let challenge = harness.advance_to_challenge();

    answer_correctly(&mut harness);
    assert_feedback(&harness, Feedback::Correct);

    // Nothing happens until the delay elapses.
    assert!(!harness.advance_time(999));
    assert_position(&harness, challenge);

    assert!(harness.advance_time(1));
    assert_position(&harness, challenge + 1);
    assert_feedback(&harness, Feedback::Neutral);
}

#[test]
fn incorrect_answer_allows_retry_after_reset() {
    let mut harness = SessionHarness::new();
    let challenge = harness.advance_to_challenge();

    assert_eq!(harness.submit("certainly wrong"), Feedback::Incorrect);
    assert_eq!(harness.session.submitted(), Some("certainly wrong"));
    assert_position(&harness, challenge);

    // Feedback holds until the retry delay, then resets in place.
    assert!(!harness.advance_time(1_000));
    assert_feedback(&harness, Feedback::Incorrect);
    assert!(harness.advance_time(500));
    assert_feedback(&harness, Feedback::Neutral);
    assert_eq!(harness.session.submitted(), None);
    assert_position(&harness, challenge);

    // Retries are unlimited.
    assert_eq!(harness.submit("still wrong"), Feedback::Incorrect);
    harness.advance_time(1_500);
    answer_correctly(&mut harness);
    assert_feedback(&harness, Feedback::Correct);
}

#[test]
fn leaving_a_slide_invalidates_its_timers() {
    let mut harness = SessionHarness::new();
    let challenge = harness.advance_to_challenge();

    answer_correctly(&mut harness);
    assert!(harness.session.retreat());

    // The delayed advance was scheduled on the challenge slide; it must
    // not fire against the slide we retreated to.
    assert!(!harness.advance_time(60_000));
    assert_position(&harness, challenge - 1);
    assert_feedback(&harness, Feedback::Neutral);
}

#[test]
fn menu_jump_from_anywhere_returns_to_scene_intro() {
    let mut harness = SessionHarness::with_lesson(&REPORTED_SPEECH);
    harness.advance_to_challenge();

    let first_scene = REPORTED_SPEECH.scenes[0].title.clone();
    let last_scene = REPORTED_SPEECH.scenes[2].title.clone();

    assert!(harness.session.jump_to_scene(&last_scene));
    assert_slide_kind(&harness, SlideKind::Intro);

    assert!(harness.session.jump_to_scene(&first_scene));
    assert_position(&harness, 0);
}

#[test]
fn restart_returns_to_the_first_slide_with_clean_state() {
    let mut harness = SessionHarness::new();
    harness.advance_to_challenge();
    harness.submit("wrong");

    harness.session.restart();
    assert_position(&harness, 0);
    assert_feedback(&harness, Feedback::Neutral);
    assert_eq!(harness.session.submitted(), None);
    assert!(!harness.advance_time(60_000));
}

#[test]
fn custom_delays_are_honored() {
    let config = SessionConfig {
        advance_delay_ms: 50,
        retry_delay_ms: 80,
    };
    let mut harness =
        SessionHarness::with_lesson_and_config(&reel_core::create_sample_lesson(), config);
    let challenge = harness.advance_to_challenge();

    harness.submit("wrong");
    assert!(!harness.advance_time(79));
    assert!(harness.advance_time(1));
    assert_feedback(&harness, Feedback::Neutral);

    answer_correctly(&mut harness);
    assert!(!harness.advance_time(49));
    assert!(harness.advance_time(1));
    assert_position(&harness, challenge + 1);
}

#[test]
fn validation_is_case_and_whitespace_insensitive_end_to_end() {
    let mut harness = SessionHarness::new();
    harness.advance_to_challenge();

    // First sample challenge expects "was".
    assert_eq!(harness.submit("  WAS "), Feedback::Correct);
}
