//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity::{choice, guided_level, level, question};
use crate::contract::{Choice, GuidedLevel, Level, Question};
use sea_orm::ActiveValue::{NotSet, Set};

// ===== Level Conversions =====

impl From<level::Model> for Level {
    fn from(entity: level::Model) -> Self {
        Self {
            id: entity.id,
            circuit: entity.circuit,
            creation_date: entity.creation_date,
            difficulty: entity.difficulty,
        }
    }
}

impl From<&Level> for level::ActiveModel {
    fn from(model: &Level) -> Self {
        Self {
            id: Set(model.id),
            circuit: Set(model.circuit.clone()),
            creation_date: Set(model.creation_date),
            difficulty: Set(model.difficulty),
        }
    }
}

/// Active model for an insert; the id is left to the database
pub fn new_level(model: &Level) -> level::ActiveModel {
    level::ActiveModel {
        id: NotSet,
        ..model.into()
    }
}

// ===== Guided Level Conversions =====

impl TryFrom<(guided_level::Model, Option<level::Model>)> for GuidedLevel {
    type Error = anyhow::Error;

    fn try_from(
        (guided, parent): (guided_level::Model, Option<level::Model>),
    ) -> Result<Self, Self::Error> {
        let parent = parent.ok_or_else(|| {
            anyhow::anyhow!("guided level {} has no parent level", guided.levels_ptr_id)
        })?;

        Ok(Self {
            level: parent.into(),
            parts: guided.parts,
            labels: guided.labels,
        })
    }
}

impl From<&GuidedLevel> for guided_level::ActiveModel {
    fn from(model: &GuidedLevel) -> Self {
        Self {
            levels_ptr_id: Set(model.level.id),
            parts: Set(model.parts.clone()),
            labels: Set(model.labels.clone()),
        }
    }
}

// ===== Question Conversions =====

impl From<question::Model> for Question {
    fn from(entity: question::Model) -> Self {
        Self {
            id: entity.id,
            question: entity.question,
            creation_date: entity.creation_date,
        }
    }
}

impl From<&Question> for question::ActiveModel {
    fn from(model: &Question) -> Self {
        Self {
            id: Set(model.id),
            question: Set(model.question.clone()),
            creation_date: Set(model.creation_date),
        }
    }
}

pub fn new_question(model: &Question) -> question::ActiveModel {
    question::ActiveModel {
        id: NotSet,
        ..model.into()
    }
}

// ===== Choice Conversions =====

impl From<choice::Model> for Choice {
    fn from(entity: choice::Model) -> Self {
        Self {
            id: entity.id,
            question_id: entity.question_id,
            answer: entity.answer,
        }
    }
}

impl From<&Choice> for choice::ActiveModel {
    fn from(model: &Choice) -> Self {
        Self {
            id: Set(model.id),
            answer: Set(model.answer.clone()),
            question_id: Set(model.question_id),
        }
    }
}

pub fn new_choice(model: &Choice) -> choice::ActiveModel {
    choice::ActiveModel {
        id: NotSet,
        ..model.into()
    }
}
