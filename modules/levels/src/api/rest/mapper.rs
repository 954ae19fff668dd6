//! Mapper implementations for converting between DTOs and contract models

use super::dto::*;
use crate::contract;

// ===== Level conversions =====

impl From<contract::Level> for LevelDto {
    fn from(level: contract::Level) -> Self {
        Self {
            id: level.id,
            circuit: level.circuit,
            creation_date: level.creation_date,
            difficulty: level.difficulty,
        }
    }
}

impl From<LevelRequest> for contract::NewLevel {
    fn from(req: LevelRequest) -> Self {
        Self {
            circuit: req.circuit,
            difficulty: req.difficulty,
        }
    }
}

impl From<LevelPatchRequest> for contract::LevelPatch {
    fn from(req: LevelPatchRequest) -> Self {
        Self {
            circuit: req.circuit,
            difficulty: req.difficulty,
        }
    }
}

// ===== Guided Level conversions =====

impl From<contract::GuidedLevel> for GuidedLevelDto {
    fn from(guided: contract::GuidedLevel) -> Self {
        Self {
            id: guided.level.id,
            circuit: guided.level.circuit,
            creation_date: guided.level.creation_date,
            difficulty: guided.level.difficulty,
            parts: guided.parts,
            labels: guided.labels,
        }
    }
}

impl From<GuidedLevelRequest> for contract::NewGuidedLevel {
    fn from(req: GuidedLevelRequest) -> Self {
        Self {
            level: contract::NewLevel {
                circuit: req.circuit,
                difficulty: req.difficulty,
            },
            parts: req.parts,
            labels: req.labels,
        }
    }
}

impl From<GuidedLevelPatchRequest> for contract::GuidedLevelPatch {
    fn from(req: GuidedLevelPatchRequest) -> Self {
        Self {
            level: contract::LevelPatch {
                circuit: req.circuit,
                difficulty: req.difficulty,
            },
            parts: req.parts,
            labels: req.labels,
        }
    }
}

// ===== Question conversions =====

impl From<contract::Question> for QuestionDto {
    fn from(question: contract::Question) -> Self {
        Self {
            id: question.id,
            question: question.question,
            creation_date: question.creation_date,
        }
    }
}

impl From<QuestionRequest> for contract::NewQuestion {
    fn from(req: QuestionRequest) -> Self {
        Self {
            question: req.question,
        }
    }
}

impl From<QuestionPatchRequest> for contract::QuestionPatch {
    fn from(req: QuestionPatchRequest) -> Self {
        Self {
            question: req.question,
        }
    }
}

// ===== Choice conversions =====

impl From<contract::Choice> for ChoiceDto {
    fn from(choice: contract::Choice) -> Self {
        Self {
            id: choice.id,
            question: choice.question_id,
            answer: choice.answer,
        }
    }
}

impl From<ChoiceRequest> for contract::NewChoice {
    fn from(req: ChoiceRequest) -> Self {
        Self {
            question_id: req.question,
            answer: req.answer,
        }
    }
}

impl From<ChoicePatchRequest> for contract::ChoicePatch {
    fn from(req: ChoicePatchRequest) -> Self {
        Self {
            question_id: req.question,
            answer: req.answer,
        }
    }
}

// ===== Query conversions =====

impl From<&ListQuery> for contract::ListParams {
    fn from(query: &ListQuery) -> Self {
        Self {
            limit: query.limit,
            offset: query.offset,
        }
    }
}

impl From<&ChoiceListQuery> for contract::ListParams {
    fn from(query: &ChoiceListQuery) -> Self {
        Self {
            limit: query.limit,
            offset: query.offset,
        }
    }
}
