//! Domain service - business logic orchestration

use super::repository::{
    ChoicesRepository, GuidedLevelsRepository, LevelsRepository, QuestionsRepository,
};
use super::validation::{
    validate_text, ANSWER_MAX_LENGTH, CIRCUIT_MAX_LENGTH, LABELS_MAX_LENGTH, PARTS_MAX_LENGTH,
    QUESTION_MAX_LENGTH,
};
use crate::config::Config;
use crate::contract::{
    Choice, ChoicePatch, GuidedLevel, GuidedLevelPatch, Level, LevelPatch, LevelsError,
    ListParams, NewChoice, NewGuidedLevel, NewLevel, NewQuestion, Question, QuestionPatch,
};
use chrono::NaiveDate;
use sea_orm::{DbErr, SqlErr};
use std::sync::Arc;

/// Largest window bound the database accepts (signed 64-bit)
const MAX_ROWS: u64 = i64::MAX as u64;

const DUPLICATE_DIFFICULTY: &str = "levels with this difficulty already exists.";

/// Domain service for levels, guided levels, questions and choices
pub struct Service {
    levels_repo: Arc<dyn LevelsRepository>,
    guided_repo: Arc<dyn GuidedLevelsRepository>,
    questions_repo: Arc<dyn QuestionsRepository>,
    choices_repo: Arc<dyn ChoicesRepository>,
    config: Config,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        levels_repo: Arc<dyn LevelsRepository>,
        guided_repo: Arc<dyn GuidedLevelsRepository>,
        questions_repo: Arc<dyn QuestionsRepository>,
        choices_repo: Arc<dyn ChoicesRepository>,
        config: Config,
    ) -> Self {
        Self {
            levels_repo,
            guided_repo,
            questions_repo,
            choices_repo,
            config,
        }
    }

    // ===== Level Operations =====

    pub async fn list_levels(&self, params: ListParams) -> Result<Vec<Level>, LevelsError> {
        let (limit, offset) = self.page(params);
        tracing::debug!(limit, offset, "Listing levels");
        self.levels_repo
            .list(limit, offset)
            .await
            .map_err(map_storage_error)
    }

    pub async fn get_level(&self, id: i32) -> Result<Level, LevelsError> {
        self.levels_repo
            .find_by_id(id)
            .await
            .map_err(map_storage_error)?
            .ok_or_else(|| LevelsError::not_found("level", id))
    }

    pub async fn create_level(&self, new: NewLevel) -> Result<Level, LevelsError> {
        let difficulty = new.difficulty.unwrap_or(self.config.default_difficulty);
        let level = self.build_level(0, new.circuit, difficulty, None).await?;

        let created = self
            .levels_repo
            .create(&level)
            .await
            .map_err(map_storage_error)?;

        tracing::info!(level_id = created.id, difficulty, "Level created");
        Ok(created)
    }

    /// Replace a level; an omitted difficulty keeps the stored one
    pub async fn update_level(&self, id: i32, new: NewLevel) -> Result<Level, LevelsError> {
        let existing = self.get_level(id).await?;
        let difficulty = new.difficulty.unwrap_or(existing.difficulty);
        let level = self.build_level(id, new.circuit, difficulty, Some(id)).await?;
        self.save_level(level).await
    }

    pub async fn patch_level(&self, id: i32, patch: LevelPatch) -> Result<Level, LevelsError> {
        let existing = self.get_level(id).await?;
        let level = self.apply_level_patch(existing, patch).await?;
        self.save_level(level).await
    }

    pub async fn delete_level(&self, id: i32) -> Result<(), LevelsError> {
        let deleted = self
            .levels_repo
            .delete(id)
            .await
            .map_err(map_storage_error)?;

        if !deleted {
            return Err(LevelsError::not_found("level", id));
        }

        tracing::info!(level_id = id, "Level deleted");
        Ok(())
    }

    // ===== Guided Level Operations =====

    pub async fn list_guided_levels(
        &self,
        params: ListParams,
    ) -> Result<Vec<GuidedLevel>, LevelsError> {
        let (limit, offset) = self.page(params);
        tracing::debug!(limit, offset, "Listing guided levels");
        self.guided_repo
            .list(limit, offset)
            .await
            .map_err(map_storage_error)
    }

    pub async fn get_guided_level(&self, id: i32) -> Result<GuidedLevel, LevelsError> {
        self.guided_repo
            .find_by_id(id)
            .await
            .map_err(map_storage_error)?
            .ok_or_else(|| LevelsError::not_found("guided_level", id))
    }

    pub async fn create_guided_level(
        &self,
        new: NewGuidedLevel,
    ) -> Result<GuidedLevel, LevelsError> {
        validate_guided_fields(&new.parts, &new.labels)?;

        let difficulty = new.level.difficulty.unwrap_or(self.config.default_difficulty);
        let level = self
            .build_level(0, new.level.circuit, difficulty, None)
            .await?;
        let guided = GuidedLevel {
            level,
            parts: new.parts,
            labels: new.labels,
        };

        let created = self
            .guided_repo
            .create(&guided)
            .await
            .map_err(map_storage_error)?;

        tracing::info!(level_id = created.id(), difficulty, "Guided level created");
        Ok(created)
    }

    pub async fn update_guided_level(
        &self,
        id: i32,
        new: NewGuidedLevel,
    ) -> Result<GuidedLevel, LevelsError> {
        let existing = self.get_guided_level(id).await?;
        validate_guided_fields(&new.parts, &new.labels)?;

        let difficulty = new.level.difficulty.unwrap_or(existing.level.difficulty);
        let level = self
            .build_level(id, new.level.circuit, difficulty, Some(id))
            .await?;

        self.save_guided_level(GuidedLevel {
            level,
            parts: new.parts,
            labels: new.labels,
        })
        .await
    }

    pub async fn patch_guided_level(
        &self,
        id: i32,
        patch: GuidedLevelPatch,
    ) -> Result<GuidedLevel, LevelsError> {
        let existing = self.get_guided_level(id).await?;
        let parts = patch.parts.unwrap_or(existing.parts);
        let labels = patch.labels.unwrap_or(existing.labels);
        validate_guided_fields(&parts, &labels)?;

        let level = self.apply_level_patch(existing.level, patch.level).await?;
        self.save_guided_level(GuidedLevel {
            level,
            parts,
            labels,
        })
        .await
    }

    pub async fn delete_guided_level(&self, id: i32) -> Result<(), LevelsError> {
        let deleted = self
            .guided_repo
            .delete(id)
            .await
            .map_err(map_storage_error)?;

        if !deleted {
            return Err(LevelsError::not_found("guided_level", id));
        }

        tracing::info!(level_id = id, "Guided level deleted");
        Ok(())
    }

    // ===== Question Operations =====

    pub async fn list_questions(&self, params: ListParams) -> Result<Vec<Question>, LevelsError> {
        let (limit, offset) = self.page(params);
        self.questions_repo
            .list(limit, offset)
            .await
            .map_err(map_storage_error)
    }

    pub async fn get_question(&self, id: i32) -> Result<Question, LevelsError> {
        self.questions_repo
            .find_by_id(id)
            .await
            .map_err(map_storage_error)?
            .ok_or_else(|| LevelsError::not_found("question", id))
    }

    pub async fn create_question(&self, new: NewQuestion) -> Result<Question, LevelsError> {
        validate_text("question", &new.question, QUESTION_MAX_LENGTH)?;

        let question = Question {
            id: 0,
            question: new.question,
            creation_date: today(),
        };
        let created = self
            .questions_repo
            .create(&question)
            .await
            .map_err(map_storage_error)?;

        tracing::info!(question_id = created.id, "Question created");
        Ok(created)
    }

    pub async fn update_question(
        &self,
        id: i32,
        new: NewQuestion,
    ) -> Result<Question, LevelsError> {
        self.patch_question(
            id,
            QuestionPatch {
                question: Some(new.question),
            },
        )
        .await
    }

    pub async fn patch_question(
        &self,
        id: i32,
        patch: QuestionPatch,
    ) -> Result<Question, LevelsError> {
        let existing = self.get_question(id).await?;
        let question = patch.question.unwrap_or(existing.question);
        validate_text("question", &question, QUESTION_MAX_LENGTH)?;

        self.questions_repo
            .update(&Question {
                id,
                question,
                creation_date: today(),
            })
            .await
            .map_err(map_storage_error)
    }

    /// Delete a question together with all of its choices
    pub async fn delete_question(&self, id: i32) -> Result<(), LevelsError> {
        let deleted = self
            .questions_repo
            .delete(id)
            .await
            .map_err(map_storage_error)?;

        if !deleted {
            return Err(LevelsError::not_found("question", id));
        }

        tracing::info!(question_id = id, "Question deleted");
        Ok(())
    }

    // ===== Choice Operations =====

    pub async fn list_choices(
        &self,
        question_id: Option<i32>,
        params: ListParams,
    ) -> Result<Vec<Choice>, LevelsError> {
        let (limit, offset) = self.page(params);
        self.choices_repo
            .list(question_id, limit, offset)
            .await
            .map_err(map_storage_error)
    }

    pub async fn get_choice(&self, id: i32) -> Result<Choice, LevelsError> {
        self.choices_repo
            .find_by_id(id)
            .await
            .map_err(map_storage_error)?
            .ok_or_else(|| LevelsError::not_found("choice", id))
    }

    pub async fn create_choice(&self, new: NewChoice) -> Result<Choice, LevelsError> {
        validate_text("answer", &new.answer, ANSWER_MAX_LENGTH)?;
        self.ensure_question_exists(new.question_id).await?;

        let created = self
            .choices_repo
            .create(&Choice {
                id: 0,
                question_id: new.question_id,
                answer: new.answer,
            })
            .await
            .map_err(map_storage_error)?;

        tracing::info!(
            choice_id = created.id,
            question_id = created.question_id,
            "Choice created"
        );
        Ok(created)
    }

    pub async fn update_choice(&self, id: i32, new: NewChoice) -> Result<Choice, LevelsError> {
        self.patch_choice(
            id,
            ChoicePatch {
                question_id: Some(new.question_id),
                answer: Some(new.answer),
            },
        )
        .await
    }

    pub async fn patch_choice(&self, id: i32, patch: ChoicePatch) -> Result<Choice, LevelsError> {
        let existing = self.get_choice(id).await?;
        let answer = patch.answer.unwrap_or(existing.answer);
        validate_text("answer", &answer, ANSWER_MAX_LENGTH)?;

        let question_id = match patch.question_id {
            Some(question_id) if question_id != existing.question_id => {
                self.ensure_question_exists(question_id).await?;
                question_id
            }
            _ => existing.question_id,
        };

        self.choices_repo
            .update(&Choice {
                id,
                question_id,
                answer,
            })
            .await
            .map_err(map_storage_error)
    }

    pub async fn delete_choice(&self, id: i32) -> Result<(), LevelsError> {
        let deleted = self
            .choices_repo
            .delete(id)
            .await
            .map_err(map_storage_error)?;

        if !deleted {
            return Err(LevelsError::not_found("choice", id));
        }
        Ok(())
    }

    // ===== Helper Methods =====

    /// Resolve the pagination window against the configured page size
    fn page(&self, params: ListParams) -> (u64, u64) {
        let max = self.config.max_page_size.min(MAX_ROWS);
        let limit = params.limit.unwrap_or(max).min(max);
        let offset = params.offset.unwrap_or(0).min(MAX_ROWS);
        (limit, offset)
    }

    /// Validate level fields and stamp the save date
    async fn build_level(
        &self,
        id: i32,
        circuit: String,
        difficulty: i32,
        own_id: Option<i32>,
    ) -> Result<Level, LevelsError> {
        validate_text("circuit", &circuit, CIRCUIT_MAX_LENGTH)?;
        self.ensure_difficulty_available(difficulty, own_id).await?;

        Ok(Level {
            id,
            circuit,
            creation_date: today(),
            difficulty,
        })
    }

    async fn apply_level_patch(
        &self,
        existing: Level,
        patch: LevelPatch,
    ) -> Result<Level, LevelsError> {
        let circuit = patch.circuit.unwrap_or(existing.circuit);
        let difficulty = patch.difficulty.unwrap_or(existing.difficulty);
        self.build_level(existing.id, circuit, difficulty, Some(existing.id))
            .await
    }

    async fn save_level(&self, level: Level) -> Result<Level, LevelsError> {
        let updated = self
            .levels_repo
            .update(&level)
            .await
            .map_err(map_storage_error)?;

        tracing::info!(level_id = updated.id, "Level updated");
        Ok(updated)
    }

    async fn save_guided_level(&self, guided: GuidedLevel) -> Result<GuidedLevel, LevelsError> {
        let updated = self
            .guided_repo
            .update(&guided)
            .await
            .map_err(map_storage_error)?;

        tracing::info!(level_id = updated.id(), "Guided level updated");
        Ok(updated)
    }

    /// Difficulty must be unique across all levels, guided ones included
    async fn ensure_difficulty_available(
        &self,
        difficulty: i32,
        own_id: Option<i32>,
    ) -> Result<(), LevelsError> {
        let holder = self
            .levels_repo
            .find_by_difficulty(difficulty)
            .await
            .map_err(map_storage_error)?;

        match holder {
            Some(level) if Some(level.id) != own_id => Err(LevelsError::Conflict {
                reason: DUPLICATE_DIFFICULTY.to_string(),
            }),
            _ => Ok(()),
        }
    }

    async fn ensure_question_exists(&self, question_id: i32) -> Result<(), LevelsError> {
        let question = self
            .questions_repo
            .find_by_id(question_id)
            .await
            .map_err(map_storage_error)?;

        if question.is_none() {
            return Err(LevelsError::validation(
                "question",
                format!("Invalid pk \"{question_id}\" - object does not exist."),
            ));
        }
        Ok(())
    }
}

fn validate_guided_fields(parts: &str, labels: &str) -> Result<(), LevelsError> {
    validate_text("parts", parts, PARTS_MAX_LENGTH)?;
    validate_text("labels", labels, LABELS_MAX_LENGTH)
}

fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

/// Unique violations surface as conflicts, anything else is internal
fn map_storage_error(error: anyhow::Error) -> LevelsError {
    if let Some(SqlErr::UniqueConstraintViolation(_)) =
        error.downcast_ref::<DbErr>().and_then(DbErr::sql_err)
    {
        return LevelsError::Conflict {
            reason: DUPLICATE_DIFFICULTY.to_string(),
        };
    }

    tracing::error!("Levels storage error: {:?}", error);
    LevelsError::Internal
}
