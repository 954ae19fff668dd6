//! REST DTOs with serde derives for HTTP API
//!
//! Response DTOs list exactly the fields each resource exposes. Read-only
//! fields (`id`, `creation_date`) are absent from request DTOs and ignored
//! when sent.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

// ===== Level DTOs =====

/// Level response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LevelDto {
    pub id: i32,

    /// Serialized circuit
    pub circuit: String,

    /// Date of the last save
    pub creation_date: NaiveDate,

    /// Unique difficulty
    #[schema(example = 3)]
    pub difficulty: i32,
}

/// Create or replace a level
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LevelRequest {
    pub circuit: String,

    /// Defaults to the configured difficulty on create, kept on replace
    #[serde(default)]
    pub difficulty: Option<i32>,
}

/// Partially update a level
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct LevelPatchRequest {
    #[serde(default)]
    pub circuit: Option<String>,
    #[serde(default)]
    pub difficulty: Option<i32>,
}

// ===== Guided Level DTOs =====

/// Guided level response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GuidedLevelDto {
    pub id: i32,
    pub circuit: String,
    pub creation_date: NaiveDate,
    pub difficulty: i32,

    /// Predefined parts
    pub parts: String,

    /// Labels whose values the circuit must produce
    pub labels: String,
}

/// Create or replace a guided level
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct GuidedLevelRequest {
    pub circuit: String,
    #[serde(default)]
    pub difficulty: Option<i32>,
    pub parts: String,
    pub labels: String,
}

/// Partially update a guided level
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct GuidedLevelPatchRequest {
    #[serde(default)]
    pub circuit: Option<String>,
    #[serde(default)]
    pub difficulty: Option<i32>,
    #[serde(default)]
    pub parts: Option<String>,
    #[serde(default)]
    pub labels: Option<String>,
}

// ===== Question DTOs =====

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionDto {
    pub id: i32,
    pub question: String,
    pub creation_date: NaiveDate,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct QuestionRequest {
    pub question: String,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct QuestionPatchRequest {
    #[serde(default)]
    pub question: Option<String>,
}

// ===== Choice DTOs =====

/// Choice response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChoiceDto {
    pub id: i32,

    /// Owning question id
    pub question: i32,

    pub answer: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ChoiceRequest {
    pub question: i32,
    pub answer: String,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ChoicePatchRequest {
    #[serde(default)]
    pub question: Option<i32>,
    #[serde(default)]
    pub answer: Option<String>,
}

// ===== Query DTOs =====

/// Pagination parameters
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Maximum number of records
    pub limit: Option<u64>,
    /// Number of records to skip
    pub offset: Option<u64>,
}

/// Choice list parameters
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ChoiceListQuery {
    /// Only choices of this question
    pub question: Option<i32>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}
