//! Lesson file persistence.
//!
//! Custom lessons load from versioned JSON files; the built-in catalog
//! can be exported to the same format as a starting point for authors.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::lesson::Lesson;

/// Errors from lesson file operations.
#[derive(Debug, Error)]
pub enum LessonError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
}

/// Current lesson file format version.
pub const LESSON_FORMAT_VERSION: u32 = 1;

/// A lesson file: format version plus the lesson itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonFile {
    /// Format version for compatibility checking.
    pub version: u32,
    pub lesson: Lesson,
}

impl LessonFile {
    pub fn new(lesson: Lesson) -> Self {
        Self {
            version: LESSON_FORMAT_VERSION,
            lesson,
        }
    }

    /// Save to a JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), LessonError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Load from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, LessonError> {
        let content = fs::read_to_string(path)?;
        let file: Self = serde_json::from_str(&content)?;

        if file.version != LESSON_FORMAT_VERSION {
            return Err(LessonError::VersionMismatch {
                expected: LESSON_FORMAT_VERSION,
                found: file.version,
            });
        }

        Ok(file)
    }
}

/// Load just the lesson out of a lesson file.
pub fn load_lesson(path: impl AsRef<Path>) -> Result<Lesson, LessonError> {
    Ok(LessonFile::load_json(path)?.lesson)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lesson::create_sample_lesson;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("sample.json");

        let file = LessonFile::new(create_sample_lesson());
        file.save_json(&path).expect("Save should succeed");

        let loaded = load_lesson(&path).expect("Load should succeed");
        assert_eq!(loaded.title, "Sample: Reported Speech");
        assert_eq!(loaded.scenes.len(), 2);
        assert_eq!(
            loaded.scenes[0].exercises[1].questions[0].answer,
            "if / whether"
        );
    }

    #[test]
    fn test_version_mismatch_rejected() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("old.json");

        let mut file = LessonFile::new(create_sample_lesson());
        file.version = 99;
        let content = serde_json::to_string(&file).expect("Serialize should succeed");
        fs::write(&path, content).expect("Write should succeed");

        let result = LessonFile::load_json(&path);
        assert!(matches!(
            result,
            Err(LessonError::VersionMismatch {
                expected: LESSON_FORMAT_VERSION,
                found: 99
            })
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_lesson("/no/such/lesson.json");
        assert!(matches!(result, Err(LessonError::Io(_))));
    }

    #[test]
    fn test_optional_fields_default_when_absent() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("minimal.json");

        let content = r#"{
            "version": 1,
            "lesson": {
                "title": "Minimal",
                "scenes": [{
                    "title": "Scene",
                    "description": "A scene",
                    "script": [{"speaker": "A", "text": "Hello."}],
                    "exercises": [{
                        "title": "Exercise",
                        "description": "Sub",
                        "rule": "Rule",
                        "questions": [{"prompt": "He ____ (say) hi.", "answer": "said"}]
                    }]
                }]
            }
        }"#;
        fs::write(&path, content).expect("Write should succeed");

        let lesson = load_lesson(&path).expect("Load should succeed");
        let scene = &lesson.scenes[0];
        assert!(scene.notes.is_none());
        assert!(scene.script[0].verbs.is_none());
        assert!(scene.exercises[0].shift.is_none());
        assert!(scene.exercises[0].teaching.is_none());
    }
}
