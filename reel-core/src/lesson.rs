//! Lesson data model for reported-speech training.
//!
//! A lesson is an ordered set of movie scenes. Each scene carries the
//! dialogue under study (the script) and a set of exercises whose
//! questions are fill-in-the-blank prompts with a canonical answer.

use serde::{Deserialize, Serialize};

/// Marker for the blank in a question prompt.
pub const BLANK: &str = "____";

/// Delimiter between accepted answer alternatives in a canonical answer.
const ALTERNATIVE_DELIMITER: char = '/';

/// A complete lesson: the static input everything else derives from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    /// Lesson title, shown on the closing slide.
    pub title: String,
    /// Scenes in presentation order.
    pub scenes: Vec<Scene>,
}

/// One movie scene with its script and exercises.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub title: String,
    /// One-line teaser shown on the scene's intro slide.
    pub description: String,
    /// Learner-language notes for the description.
    #[serde(default)]
    pub notes: Option<LocalizedText>,
    pub script: Vec<ScriptLine>,
    pub exercises: Vec<Exercise>,
}

/// A single line of scene dialogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptLine {
    pub speaker: String,
    pub text: String,
    /// Comma-separated verb forms to highlight in the line, if any.
    #[serde(default)]
    pub verbs: Option<String>,
}

/// A grammar exercise: a rule plus its practice questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub title: String,
    /// Short subtitle (e.g. "Statements: Present → Past").
    pub description: String,
    /// The rule being practiced, in the learner's target language.
    pub rule: String,
    /// Learner-language teaching notes.
    #[serde(default)]
    pub teaching: Option<LocalizedText>,
    /// Tense-transition metadata, rendered as a timeline slide.
    #[serde(default)]
    pub shift: Option<TenseShift>,
    pub questions: Vec<Question>,
}

/// Tense-transition metadata for an exercise.
///
/// `direct` and `reported` are example sentences with the changed chunk
/// wrapped in square brackets (e.g. "I [am] Barry Allen.").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenseShift {
    pub from: String,
    pub to: String,
    pub direct: String,
    pub reported: String,
}

/// A fill-in-the-blank question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Prompt text containing one `____` blank marker.
    pub prompt: String,
    /// Canonical answer; may encode alternatives separated by `/`
    /// (e.g. "if / whether").
    pub answer: String,
}

/// A pair of learner-language translations (Russian and Uzbek).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalizedText {
    pub ru: String,
    pub uz: String,
}

impl Lesson {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            scenes: Vec::new(),
        }
    }

    pub fn with_scene(mut self, scene: Scene) -> Self {
        self.scenes.push(scene);
        self
    }
}

impl Scene {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            notes: None,
            script: Vec::new(),
            exercises: Vec::new(),
        }
    }

    pub fn with_notes(mut self, ru: impl Into<String>, uz: impl Into<String>) -> Self {
        self.notes = Some(LocalizedText {
            ru: ru.into(),
            uz: uz.into(),
        });
        self
    }

    pub fn with_line(mut self, speaker: impl Into<String>, text: impl Into<String>) -> Self {
        self.script.push(ScriptLine {
            speaker: speaker.into(),
            text: text.into(),
            verbs: None,
        });
        self
    }

    /// Add a script line with verb forms to highlight.
    pub fn with_line_verbs(
        mut self,
        speaker: impl Into<String>,
        text: impl Into<String>,
        verbs: impl Into<String>,
    ) -> Self {
        self.script.push(ScriptLine {
            speaker: speaker.into(),
            text: text.into(),
            verbs: Some(verbs.into()),
        });
        self
    }

    pub fn with_exercise(mut self, exercise: Exercise) -> Self {
        self.exercises.push(exercise);
        self
    }
}

impl Exercise {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            rule: rule.into(),
            teaching: None,
            shift: None,
            questions: Vec::new(),
        }
    }

    pub fn with_teaching(mut self, ru: impl Into<String>, uz: impl Into<String>) -> Self {
        self.teaching = Some(LocalizedText {
            ru: ru.into(),
            uz: uz.into(),
        });
        self
    }

    pub fn with_shift(
        mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        direct: impl Into<String>,
        reported: impl Into<String>,
    ) -> Self {
        self.shift = Some(TenseShift {
            from: from.into(),
            to: to.into(),
            direct: direct.into(),
            reported: reported.into(),
        });
        self
    }

    pub fn with_question(mut self, prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        self.questions.push(Question {
            prompt: prompt.into(),
            answer: answer.into(),
        });
        self
    }
}

impl Question {
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
        }
    }

    /// All accepted alternatives, trimmed, in canonical order.
    ///
    /// A stray delimiter produces an empty alternative; that is a
    /// legitimate (if degenerate) accepted answer.
    pub fn alternatives(&self) -> Vec<&str> {
        self.answer.split(ALTERNATIVE_DELIMITER).map(str::trim).collect()
    }

    /// The first alternative; this is the label shown in word banks.
    pub fn primary_alternative(&self) -> &str {
        self.alternatives()[0]
    }

    /// Check a submission against this question's canonical answer.
    pub fn accepts(&self, submitted: &str) -> bool {
        answer_matches(submitted, &self.answer)
    }
}

/// Check a submitted answer against a canonical answer string.
///
/// The canonical answer is split on `/` into alternatives; the match is
/// case-insensitive exact equality after trimming both sides. No fuzzy
/// matching, no partial credit.
pub fn answer_matches(submitted: &str, canonical: &str) -> bool {
    let submitted = submitted.trim().to_lowercase();
    canonical
        .split(ALTERNATIVE_DELIMITER)
        .any(|alternative| alternative.trim().to_lowercase() == submitted)
}

/// Split a prompt into the text before and after its blank marker.
///
/// A prompt without a marker degrades to `(whole prompt, "")`. A prompt
/// with several markers splits at the first; the rest stays in the
/// suffix.
pub fn split_prompt(prompt: &str) -> (&str, &str) {
    match prompt.split_once(BLANK) {
        Some((prefix, suffix)) => (prefix, suffix),
        None => (prompt, ""),
    }
}

/// Create a small two-scene lesson for tests.
pub fn create_sample_lesson() -> Lesson {
    Lesson::new("Sample: Reported Speech")
        .with_scene(
            Scene::new("Scene 1: The Interview", "Two strangers talk in the dark.")
                .with_line("Alex", "Who are you?")
                .with_line_verbs("Sam", "I am nobody. I work here.", "am, work")
                .with_exercise(
                    Exercise::new(
                        "Exercise 1: Backshift",
                        "Statements: Present → Past",
                        "Move the tense one step back when reporting.",
                    )
                    .with_shift(
                        "Present Simple",
                        "Past Simple",
                        "I [am] nobody.",
                        "He said he [was] nobody.",
                    )
                    .with_question("Sam said that he ____ (be) nobody.", "was")
                    .with_question("Sam explained that he ____ (work) there.", "worked"),
                )
                .with_exercise(
                    Exercise::new(
                        "Exercise 2: Yes/No Questions",
                        "If / Whether",
                        "Use 'if' or 'whether' to report yes/no questions.",
                    )
                    .with_question("Alex asked ____ Sam worked there.", "if / whether"),
                ),
        )
        .with_scene(
            Scene::new("Scene 2: The Door", "A short argument about a door.")
                .with_line("Alex", "Close the door!")
                .with_line("Sam", "It is already closed.")
                .with_exercise(
                    Exercise::new(
                        "Exercise 1: Commands",
                        "Infinitives: (not) to + verb",
                        "Commands are reported with tell + object + to + infinitive.",
                    )
                    .with_question("Alex told Sam ____ (close) the door.", "to close")
                    .with_question("Sam insisted that the door ____ (be) already closed.", "was"),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_matches_trims_and_folds_case() {
        assert!(answer_matches(" WAS ", "was"));
        assert!(answer_matches("Was", "was"));
        assert!(!answer_matches("were", "was"));
    }

    #[test]
    fn test_answer_matches_alternatives() {
        assert!(answer_matches("if", "if / whether"));
        assert!(answer_matches("whether", "if / whether"));
        assert!(!answer_matches("would", "if / whether"));
    }

    #[test]
    fn test_answer_matches_empty_alternative() {
        // A stray delimiter leaves an empty alternative, which an empty
        // submission legitimately matches.
        assert!(answer_matches("", "was /"));
        assert!(answer_matches("was", "was /"));
    }

    #[test]
    fn test_split_prompt_around_marker() {
        let (prefix, suffix) = split_prompt("He said he ____ (be) tired.");
        assert_eq!(prefix, "He said he ");
        assert_eq!(suffix, " (be) tired.");
    }

    #[test]
    fn test_split_prompt_without_marker() {
        let (prefix, suffix) = split_prompt("No blank here.");
        assert_eq!(prefix, "No blank here.");
        assert_eq!(suffix, "");
    }

    #[test]
    fn test_split_prompt_multiple_markers() {
        let (prefix, suffix) = split_prompt("He asked ____ he ____ stay.");
        assert_eq!(prefix, "He asked ");
        assert_eq!(suffix, " he ____ stay.");
    }

    #[test]
    fn test_alternatives_trimmed() {
        let question = Question::new("____", "if / whether");
        assert_eq!(question.alternatives(), vec!["if", "whether"]);
        assert_eq!(question.primary_alternative(), "if");
    }

    #[test]
    fn test_question_accepts() {
        let question = Question::new("He asked ____ it worked.", "if / whether");
        assert!(question.accepts("IF"));
        assert!(question.accepts(" whether "));
        assert!(!question.accepts("that"));
    }

    #[test]
    fn test_sample_lesson_shape() {
        let lesson = create_sample_lesson();
        assert_eq!(lesson.scenes.len(), 2);
        assert_eq!(lesson.scenes[0].exercises.len(), 2);
        assert!(lesson.scenes[0].exercises[0].shift.is_some());
        assert!(lesson.scenes[0].exercises[1].shift.is_none());
    }
}
