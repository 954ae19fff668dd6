//! REST DTOs with serde derives for HTTP API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

// ===== Chain DTOs =====

/// Chain response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChainDto {
    pub id: i32,
    #[schema(example = "Corner Grocers")]
    pub name: String,
    pub description: String,
    pub slogan: String,

    /// Free-form founding date
    #[schema(example = "1962")]
    pub founded_date: String,

    #[schema(example = "https://www.example.com")]
    pub website: String,
}

/// Create or replace a chain
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ChainRequest {
    pub name: String,
    pub description: String,
    pub slogan: String,
    pub founded_date: String,
    pub website: String,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ChainPatchRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub slogan: Option<String>,
    #[serde(default)]
    pub founded_date: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

// ===== Store DTOs =====

/// Store response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StoreDto {
    pub id: i32,

    /// Owning chain id
    pub chain: i32,

    pub number: String,
    pub address: String,
    pub opening_date: DateTime<Utc>,

    /// Opening hour, 0 to 23
    #[schema(example = 8)]
    pub business_hours_start: i32,

    /// Closing hour, 0 to 23
    #[schema(example = 17)]
    pub business_hours_end: i32,
}

/// Create or replace a store
///
/// Omitted optional fields take their defaults on create and keep their
/// stored values on replace.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct StoreRequest {
    pub chain: i32,
    pub number: String,
    pub address: String,
    #[serde(default)]
    pub opening_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub business_hours_start: Option<i32>,
    #[serde(default)]
    pub business_hours_end: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct StorePatchRequest {
    #[serde(default)]
    pub chain: Option<i32>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub opening_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub business_hours_start: Option<i32>,
    #[serde(default)]
    pub business_hours_end: Option<i32>,
}

// ===== Employee DTOs =====

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EmployeeDto {
    pub id: i32,

    /// Store the employee works at
    pub store: i32,

    pub number: String,
    pub first_name: String,
    pub last_name: String,
    pub hired_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct EmployeeRequest {
    pub store: i32,
    pub number: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub hired_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct EmployeePatchRequest {
    #[serde(default)]
    pub store: Option<i32>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub hired_date: Option<DateTime<Utc>>,
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

/// Store list parameters
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StoreListQuery {
    /// Only stores of this chain
    pub chain: Option<i32>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// Employee list parameters
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmployeeListQuery {
    /// Only employees of this store
    pub store: Option<i32>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}
