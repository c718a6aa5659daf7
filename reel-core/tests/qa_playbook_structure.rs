//! Structural QA for playbook building.

use rand::rngs::StdRng;
use rand::SeedableRng;

use reel_core::catalog::REPORTED_SPEECH;
use reel_core::{
    build_playbook, build_playbook_with_rng, create_sample_lesson, Exercise, Lesson, Scene, Slide,
    SlideKind,
};

/// The slide count every playbook must satisfy: one intro + one script
/// per scene, one exercise intro (+ optional timeline) per exercise,
/// one challenge per question, one outro.
fn expected_len(lesson: &Lesson) -> usize {
    1 + lesson
        .scenes
        .iter()
        .map(|scene| {
            2 + scene
                .exercises
                .iter()
                .map(|exercise| {
                    1 + usize::from(exercise.shift.is_some()) + exercise.questions.len()
                })
                .sum::<usize>()
        })
        .sum::<usize>()
}

#[test]
fn playbook_length_matches_formula() {
    for lesson in [create_sample_lesson(), REPORTED_SPEECH.clone()] {
        let playbook = build_playbook(&lesson);
        assert_eq!(playbook.len(), expected_len(&lesson));
    }
}

#[test]
fn playbook_starts_with_intro_and_ends_with_one_outro() {
    let playbook = build_playbook(&REPORTED_SPEECH);
    assert_eq!(playbook.slides()[0].kind(), SlideKind::Intro);

    let outros = playbook
        .slides()
        .iter()
        .filter(|slide| slide.kind() == SlideKind::Outro)
        .count();
    assert_eq!(outros, 1);
    assert_eq!(
        playbook.slides().last().map(Slide::kind),
        Some(SlideKind::Outro)
    );
}

#[test]
fn minimal_lesson_produces_six_slides() {
    // 1 scene, 1 exercise, 2 questions, no timeline:
    // Intro + Script + ExerciseIntro + 2 Challenges + Outro.
    let lesson = Lesson::new("Minimal").with_scene(
        Scene::new("Only Scene", "One scene only.")
            .with_line("A", "Hello.")
            .with_exercise(
                Exercise::new("Only Exercise", "Sub", "Rule")
                    .with_question("He ____ (say) hello.", "said")
                    .with_question("She ____ (wave) back.", "waved"),
            ),
    );

    let playbook = build_playbook(&lesson);
    assert_eq!(playbook.len(), 6);
    let kinds: Vec<SlideKind> = playbook.slides().iter().map(Slide::kind).collect();
    assert_eq!(
        kinds,
        vec![
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
fn catalog_word_banks_always_carry_the_answer_label() {
    // Randomized content, so exercise several seeds.
    for seed in 0..20 {
        let playbook =
            build_playbook_with_rng(&REPORTED_SPEECH, &mut StdRng::seed_from_u64(seed));
        for slide in playbook.slides() {
            if let Slide::Challenge { answer, options, .. } = slide {
                assert_eq!(options.len(), 4, "bank size for {answer:?}");
                let label = answer.split('/').next().unwrap().trim();
                assert!(
                    options.iter().any(|option| option == label),
                    "seed {seed}: bank {options:?} is missing {label:?}"
                );
            }
        }
    }
}

#[test]
fn catalog_word_banks_have_distinct_entries() {
    // The catalog's answers never collide with the escape-valve filler,
    // so its banks are always four distinct labels.
    let playbook = build_playbook_with_rng(&REPORTED_SPEECH, &mut StdRng::seed_from_u64(3));
    for slide in playbook.slides() {
        if let Slide::Challenge { options, .. } = slide {
            let mut sorted = options.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), options.len(), "duplicate label in {options:?}");
        }
    }
}

#[test]
fn rebuilding_preserves_structure_but_not_necessarily_banks() {
    let first = build_playbook(&REPORTED_SPEECH);
    let second = build_playbook(&REPORTED_SPEECH);

    assert_eq!(first.len(), second.len());
    for (a, b) in first.slides().iter().zip(second.slides()) {
        assert_eq!(a.kind(), b.kind());
    }
}

#[test]
fn scene_intro_lookup_resolves_every_scene() {
    let playbook = build_playbook(&REPORTED_SPEECH);
    for (scene_index, scene) in REPORTED_SPEECH.scenes.iter().enumerate() {
        let index = playbook
            .scene_intro_index(&scene.title)
            .unwrap_or_else(|| panic!("no intro slide for {}", scene.title));
        assert_eq!(playbook.slides()[index].kind(), SlideKind::Intro);
        if scene_index == 0 {
            assert_eq!(index, 0);
        }
    }
}
