//! Levels Module
//!
//! Catalog of circuit puzzles for the circuit designer: plain levels, guided
//! levels (a level plus predefined parts and expected labels) and the quiz
//! questions with their answer choices.

// Public exports
pub mod contract;
pub use contract::{
    Choice, ChoicePatch, GuidedLevel, GuidedLevelPatch, Level, LevelPatch, LevelsError,
    ListParams, NewChoice, NewGuidedLevel, NewLevel, NewQuestion, Question, QuestionPatch,
};

pub mod module;
pub use module::LevelsModule;

pub mod config;
pub use config::Config;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
