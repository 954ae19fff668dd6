//! Contract models for the levels module
//!
//! These models are transport-agnostic.
//! NO serde derives - these are pure domain models.

use chrono::NaiveDate;

/// A circuit level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    /// Identifier, assigned by storage on create
    pub id: i32,
    /// Serialized circuit
    pub circuit: String,
    /// Date of the last save
    pub creation_date: NaiveDate,
    /// Difficulty, unique across all levels
    pub difficulty: i32,
}

/// Input for creating or fully replacing a level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLevel {
    pub circuit: String,
    /// Falls back to the configured default difficulty when absent
    pub difficulty: Option<i32>,
}

/// Partial level update; `None` keeps the stored value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelPatch {
    pub circuit: Option<String>,
    pub difficulty: Option<i32>,
}

/// A level extended with the parts offered to the player and the labels
/// whose values the finished circuit must produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuidedLevel {
    /// Parent level; its id is also the guided level's id
    pub level: Level,
    /// Predefined parts
    pub parts: String,
    /// Expected labels
    pub labels: String,
}

impl GuidedLevel {
    pub fn id(&self) -> i32 {
        self.level.id
    }
}

/// Input for creating or fully replacing a guided level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGuidedLevel {
    pub level: NewLevel,
    pub parts: String,
    pub labels: String,
}

/// Partial guided level update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuidedLevelPatch {
    pub level: LevelPatch,
    pub parts: Option<String>,
    pub labels: Option<String>,
}

/// A quiz question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: i32,
    pub question: String,
    /// Date of the last save
    pub creation_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionPatch {
    pub question: Option<String>,
}

/// An answer choice belonging to a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub id: i32,
    pub question_id: i32,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChoice {
    pub question_id: i32,
    pub answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoicePatch {
    pub question_id: Option<i32>,
    pub answer: Option<String>,
}

/// Pagination window for list operations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Maximum number of records; clamped to the configured page size
    pub limit: Option<u64>,
    /// Number of records to skip
    pub offset: Option<u64>,
}
