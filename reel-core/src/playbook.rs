//! Playbook construction: flattening a lesson into a linear slide deck.
//!
//! The playbook is built once, at load time. Slides are immutable after
//! construction; all randomized content (challenge word banks) is
//! pre-computed here so navigation never re-rolls anything.

use std::fmt;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::lesson::{Lesson, LocalizedText, Question, ScriptLine, TenseShift};

/// Filler vocabulary used to top up a challenge word bank when the
/// exercise itself yields fewer than three distractors.
const FILLER_WORDS: [&str; 6] = ["is", "was", "had", "would", "told", "asked"];

/// Escape-valve filler when no distinct filler is left to draw.
const FALLBACK_FILLER: &str = "did";

/// Distractors accompanying the correct option in every word bank.
const DISTRACTOR_COUNT: usize = 3;

/// Identifier of a slide, unique within one playbook build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlideId(u32);

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slide-{}", self.0)
    }
}

/// The variant of a slide, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideKind {
    Intro,
    Script,
    ExerciseIntro,
    Timeline,
    Challenge,
    Outro,
}

impl fmt::Display for SlideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SlideKind::Intro => "intro",
            SlideKind::Script => "script",
            SlideKind::ExerciseIntro => "exercise",
            SlideKind::Timeline => "timeline",
            SlideKind::Challenge => "challenge",
            SlideKind::Outro => "outro",
        };
        write!(f, "{name}")
    }
}

/// One unit of linear presentation.
///
/// Each variant carries only the fields relevant to it; the presentation
/// layer reads them and must never mutate a slide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Slide {
    /// Scene opener: title card with the teaser text.
    Intro {
        id: SlideId,
        scene_title: String,
        description: String,
        notes: Option<LocalizedText>,
    },
    /// The scene's dialogue.
    Script {
        id: SlideId,
        scene_title: String,
        lines: Vec<ScriptLine>,
    },
    /// Exercise opener: the rule being practiced.
    ExerciseIntro {
        id: SlideId,
        scene_title: String,
        title: String,
        description: String,
        rule: String,
        teaching: Option<LocalizedText>,
    },
    /// Animated tense-shift diagram for an exercise.
    Timeline {
        id: SlideId,
        exercise_title: String,
        shift: TenseShift,
    },
    /// Fill-in-the-blank quiz slide.
    Challenge {
        id: SlideId,
        exercise_title: String,
        prompt: String,
        /// Canonical answer string, alternatives included.
        answer: String,
        /// Shuffled word bank: the correct entry plus three distractors.
        options: Vec<String>,
        /// 1-based question number within the exercise.
        number: usize,
        /// Question count of the exercise.
        total: usize,
    },
    /// Closing slide.
    Outro { id: SlideId, lesson_title: String },
}

impl Slide {
    pub fn id(&self) -> SlideId {
        match self {
            Slide::Intro { id, .. }
            | Slide::Script { id, .. }
            | Slide::ExerciseIntro { id, .. }
            | Slide::Timeline { id, .. }
            | Slide::Challenge { id, .. }
            | Slide::Outro { id, .. } => *id,
        }
    }

    pub fn kind(&self) -> SlideKind {
        match self {
            Slide::Intro { .. } => SlideKind::Intro,
            Slide::Script { .. } => SlideKind::Script,
            Slide::ExerciseIntro { .. } => SlideKind::ExerciseIntro,
            Slide::Timeline { .. } => SlideKind::Timeline,
            Slide::Challenge { .. } => SlideKind::Challenge,
            Slide::Outro { .. } => SlideKind::Outro,
        }
    }

    pub fn is_challenge(&self) -> bool {
        matches!(self, Slide::Challenge { .. })
    }
}

/// The flattened, ordered slide sequence derived from a lesson.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playbook {
    slides: Vec<Slide>,
}

impl Playbook {
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Scene titles in playbook order, one per intro slide.
    pub fn scene_titles(&self) -> Vec<&str> {
        self.slides
            .iter()
            .filter_map(|slide| match slide {
                Slide::Intro { scene_title, .. } => Some(scene_title.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Index of the intro slide whose scene title matches.
    ///
    /// This is how menu-driven scene selection resolves jump targets.
    pub fn scene_intro_index(&self, title: &str) -> Option<usize> {
        self.slides.iter().position(|slide| {
            matches!(slide, Slide::Intro { scene_title, .. } if scene_title == title)
        })
    }

    pub fn challenge_count(&self) -> usize {
        self.slides.iter().filter(|slide| slide.is_challenge()).count()
    }
}

/// Build the playbook for a lesson with a fresh thread-local RNG.
pub fn build_playbook(lesson: &Lesson) -> Playbook {
    build_playbook_with_rng(lesson, &mut rand::thread_rng())
}

/// Build the playbook with a caller-supplied RNG (useful for testing).
///
/// The slide sequence is exactly: per scene one intro and one script
/// slide; per exercise one intro slide, a timeline slide if the exercise
/// has tense-shift metadata, and one challenge slide per question; a
/// single outro terminates the deck. Malformed input is not validated;
/// a prompt without a blank marker simply renders with an empty suffix.
pub fn build_playbook_with_rng<R: Rng>(lesson: &Lesson, rng: &mut R) -> Playbook {
    let mut slides = Vec::new();
    let mut next_id = 0u32;
    let mut alloc = move || {
        let id = SlideId(next_id);
        next_id += 1;
        id
    };

    for scene in &lesson.scenes {
        slides.push(Slide::Intro {
            id: alloc(),
            scene_title: scene.title.clone(),
            description: scene.description.clone(),
            notes: scene.notes.clone(),
        });
        slides.push(Slide::Script {
            id: alloc(),
            scene_title: scene.title.clone(),
            lines: scene.script.clone(),
        });

        for exercise in &scene.exercises {
            slides.push(Slide::ExerciseIntro {
                id: alloc(),
                scene_title: scene.title.clone(),
                title: exercise.title.clone(),
                description: exercise.description.clone(),
                rule: exercise.rule.clone(),
                teaching: exercise.teaching.clone(),
            });
            if let Some(shift) = &exercise.shift {
                slides.push(Slide::Timeline {
                    id: alloc(),
                    exercise_title: exercise.title.clone(),
                    shift: shift.clone(),
                });
            }

            // Answer pool for distractors: every question's answer label
            // in this exercise.
            let pool: Vec<&str> = exercise
                .questions
                .iter()
                .map(Question::primary_alternative)
                .collect();
            let total = exercise.questions.len();

            for (index, question) in exercise.questions.iter().enumerate() {
                slides.push(Slide::Challenge {
                    id: alloc(),
                    exercise_title: exercise.title.clone(),
                    prompt: question.prompt.clone(),
                    answer: question.answer.clone(),
                    options: word_bank(question, &pool, rng),
                    number: index + 1,
                    total,
                });
            }
        }
    }

    slides.push(Slide::Outro {
        id: alloc(),
        lesson_title: lesson.title.clone(),
    });

    debug!(
        "built playbook: {} slides, {} challenges",
        slides.len(),
        slides.iter().filter(|s| s.is_challenge()).count()
    );

    Playbook { slides }
}

/// Assemble the four-entry word bank for one question.
///
/// Distractors come from the other answers of the same exercise
/// (deduplicated, shuffled, up to three), then from the filler
/// vocabulary. Drawing stops at the `did` escape valve when nothing
/// distinct is left, so a pathological lesson can show a duplicate
/// label; the bank length is always four.
fn word_bank<R: Rng>(question: &Question, pool: &[&str], rng: &mut R) -> Vec<String> {
    let correct = question.primary_alternative();

    let mut candidates: Vec<&str> = Vec::new();
    for entry in pool.iter().copied() {
        if !entry.eq_ignore_ascii_case(correct)
            && !candidates.iter().any(|c| c.eq_ignore_ascii_case(entry))
        {
            candidates.push(entry);
        }
    }
    candidates.shuffle(rng);
    candidates.truncate(DISTRACTOR_COUNT);

    let mut distractors: Vec<String> = candidates.into_iter().map(str::to_string).collect();
    while distractors.len() < DISTRACTOR_COUNT {
        let open: Vec<&str> = FILLER_WORDS
            .iter()
            .copied()
            .filter(|filler| {
                !filler.eq_ignore_ascii_case(correct)
                    && !distractors.iter().any(|d| d.eq_ignore_ascii_case(filler))
            })
            .collect();
        match open.choose(rng) {
            Some(filler) => distractors.push((*filler).to_string()),
            None => distractors.push(FALLBACK_FILLER.to_string()),
        }
    }

    let mut options = Vec::with_capacity(DISTRACTOR_COUNT + 1);
    options.push(correct.to_string());
    options.append(&mut distractors);
    options.shuffle(rng);
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lesson::{create_sample_lesson, Exercise, Lesson, Scene};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_slide_order_for_sample_lesson() {
        let playbook = build_playbook_with_rng(&create_sample_lesson(), &mut seeded());

        let kinds: Vec<SlideKind> = playbook.slides().iter().map(Slide::kind).collect();
        assert_eq!(
            kinds,
            vec![
                // Scene 1: intro, script, exercise 1 (with timeline, 2
                // questions), exercise 2 (1 question).
                SlideKind::Intro,
                SlideKind::Script,
                SlideKind::ExerciseIntro,
                SlideKind::Timeline,
                SlideKind::Challenge,
                SlideKind::Challenge,
                SlideKind::ExerciseIntro,
                SlideKind::Challenge,
                // Scene 2: intro, script, exercise (2 questions).
                SlideKind::Intro,
                SlideKind::Script,
                SlideKind::ExerciseIntro,
                SlideKind::Challenge,
                SlideKind::Challenge,
                SlideKind::Outro,
            ]
        );
    }

    #[test]
    fn test_slide_ids_unique_and_monotonic() {
        let playbook = build_playbook_with_rng(&create_sample_lesson(), &mut seeded());
        let ids: Vec<SlideId> = playbook.slides().iter().map(Slide::id).collect();

        let mut deduped = ids.clone();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
        for window in ids.windows(2) {
            assert!(window[0] != window[1]);
        }
    }

    #[test]
    fn test_every_word_bank_has_four_options_with_answer() {
        let playbook = build_playbook_with_rng(&create_sample_lesson(), &mut seeded());

        for slide in playbook.slides() {
            if let Slide::Challenge { answer, options, .. } = slide {
                assert_eq!(options.len(), 4);
                let label = answer.split('/').next().unwrap().trim();
                assert!(
                    options.iter().any(|o| o == label),
                    "bank {options:?} is missing {label}"
                );
            }
        }
    }

    #[test]
    fn test_word_bank_fills_from_vocabulary_when_pool_is_small() {
        // A single-question exercise has no pool distractors at all.
        let lesson = Lesson::new("Tiny").with_scene(
            Scene::new("Scene", "A scene").with_exercise(
                Exercise::new("Exercise", "Sub", "Rule")
                    .with_question("He said he ____ ready.", "felt"),
            ),
        );
        let playbook = build_playbook_with_rng(&lesson, &mut seeded());

        let Slide::Challenge { options, .. } = &playbook.slides()[3] else {
            panic!("expected a challenge slide");
        };
        assert_eq!(options.len(), 4);
        assert!(options.iter().any(|o| o == "felt"));
        for option in options {
            assert!(option == "felt" || FILLER_WORDS.contains(&option.as_str()));
        }
    }

    #[test]
    fn test_word_bank_skips_filler_equal_to_answer() {
        let question = Question::new("It ____ broken.", "was");
        let mut rng = seeded();
        for _ in 0..50 {
            let options = word_bank(&question, &["was"], &mut rng);
            assert_eq!(options.len(), 4);
            assert_eq!(options.iter().filter(|o| o.as_str() == "was").count(), 1);
        }
    }

    #[test]
    fn test_word_bank_deduplicates_repeated_pool_answers() {
        let question = Question::new("It ____ broken.", "was");
        let pool = ["was", "is", "is", "is", "is"];
        let mut rng = seeded();
        for _ in 0..50 {
            let options = word_bank(&question, &pool, &mut rng);
            assert_eq!(options.iter().filter(|o| o.as_str() == "is").count(), 1);
        }
    }

    #[test]
    fn test_same_seed_builds_identical_banks() {
        let lesson = create_sample_lesson();
        let first = build_playbook_with_rng(&lesson, &mut StdRng::seed_from_u64(7));
        let second = build_playbook_with_rng(&lesson, &mut StdRng::seed_from_u64(7));

        for (a, b) in first.slides().iter().zip(second.slides()) {
            if let (
                Slide::Challenge { options: left, .. },
                Slide::Challenge { options: right, .. },
            ) = (a, b)
            {
                assert_eq!(left, right);
            }
        }
    }

    #[test]
    fn test_scene_lookup() {
        let playbook = build_playbook_with_rng(&create_sample_lesson(), &mut seeded());
        assert_eq!(
            playbook.scene_titles(),
            vec!["Scene 1: The Interview", "Scene 2: The Door"]
        );
        assert_eq!(playbook.scene_intro_index("Scene 2: The Door"), Some(8));
        assert_eq!(playbook.scene_intro_index("No Such Scene"), None);
    }

    #[test]
    fn test_challenge_numbering() {
        let playbook = build_playbook_with_rng(&create_sample_lesson(), &mut seeded());
        let Slide::Challenge { number, total, .. } = &playbook.slides()[5] else {
            panic!("expected a challenge slide");
        };
        assert_eq!((*number, *total), (2, 2));
    }
}
