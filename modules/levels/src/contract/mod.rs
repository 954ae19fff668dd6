//! Contract layer - transport-agnostic models and errors
//!
//! NO serde derives on models - these are pure domain types.

pub mod error;
pub mod model;

pub use error::LevelsError;
pub use model::{
    Choice, ChoicePatch, GuidedLevel, GuidedLevelPatch, Level, LevelPatch, ListParams, NewChoice,
    NewGuidedLevel, NewLevel, NewQuestion, Question, QuestionPatch,
};
