//! Repository traits for data access
//!
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{Choice, GuidedLevel, Level, Question};
use anyhow::Result;
use async_trait::async_trait;

/// Repository for levels
#[async_trait]
pub trait LevelsRepository: Send + Sync {
    /// Insert a level; `level.id` is ignored and assigned by storage
    async fn create(&self, level: &Level) -> Result<Level>;

    /// Find a level by id
    async fn find_by_id(&self, id: i32) -> Result<Option<Level>>;

    /// Find the level holding a difficulty value
    async fn find_by_difficulty(&self, difficulty: i32) -> Result<Option<Level>>;

    /// List levels ordered by id
    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<Level>>;

    /// Overwrite all fields of an existing level
    async fn update(&self, level: &Level) -> Result<Level>;

    /// Delete a level; returns false when nothing was deleted
    async fn delete(&self, id: i32) -> Result<bool>;
}

/// Repository for guided levels
///
/// Every guided level owns a parent row in the levels table sharing its id.
#[async_trait]
pub trait GuidedLevelsRepository: Send + Sync {
    /// Insert the parent level and the guided level atomically
    async fn create(&self, guided: &GuidedLevel) -> Result<GuidedLevel>;

    async fn find_by_id(&self, id: i32) -> Result<Option<GuidedLevel>>;

    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<GuidedLevel>>;

    /// Update the parent level and the guided level atomically
    async fn update(&self, guided: &GuidedLevel) -> Result<GuidedLevel>;

    /// Delete a guided level together with its parent level
    async fn delete(&self, id: i32) -> Result<bool>;
}

/// Repository for quiz questions
#[async_trait]
pub trait QuestionsRepository: Send + Sync {
    async fn create(&self, question: &Question) -> Result<Question>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Question>>;

    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<Question>>;

    async fn update(&self, question: &Question) -> Result<Question>;

    /// Delete a question; its choices are removed by cascade
    async fn delete(&self, id: i32) -> Result<bool>;
}

/// Repository for answer choices
#[async_trait]
pub trait ChoicesRepository: Send + Sync {
    async fn create(&self, choice: &Choice) -> Result<Choice>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Choice>>;

    /// List choices ordered by id, optionally restricted to one question
    async fn list(&self, question_id: Option<i32>, limit: u64, offset: u64)
        -> Result<Vec<Choice>>;

    async fn update(&self, choice: &Choice) -> Result<Choice>;

    async fn delete(&self, id: i32) -> Result<bool>;
}
