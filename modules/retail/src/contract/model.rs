//! Contract models for the retail module
//!
//! NO serde derives - these are pure domain models.

use chrono::{DateTime, Utc};

/// A retail chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub slogan: String,
    /// Free-form founding date, e.g. "1962" or "July 2, 1962"
    pub founded_date: String,
    pub website: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChain {
    pub name: String,
    pub description: String,
    pub slogan: String,
    pub founded_date: String,
    pub website: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub slogan: Option<String>,
    pub founded_date: Option<String>,
    pub website: Option<String>,
}

/// A store belonging to a chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    pub id: i32,
    pub chain_id: i32,
    pub number: String,
    pub address: String,
    pub opening_date: DateTime<Utc>,
    /// Opening hour, 0..=23
    pub business_hours_start: i32,
    /// Closing hour, 0..=23
    pub business_hours_end: i32,
}

/// Input for creating or replacing a store
///
/// Omitted optional fields take their defaults on create and keep the stored
/// value on replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStore {
    pub chain_id: i32,
    pub number: String,
    pub address: String,
    pub opening_date: Option<DateTime<Utc>>,
    pub business_hours_start: Option<i32>,
    pub business_hours_end: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorePatch {
    pub chain_id: Option<i32>,
    pub number: Option<String>,
    pub address: Option<String>,
    pub opening_date: Option<DateTime<Utc>>,
    pub business_hours_start: Option<i32>,
    pub business_hours_end: Option<i32>,
}

/// An employee working at a store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: i32,
    pub store_id: i32,
    pub number: String,
    pub first_name: String,
    pub last_name: String,
    pub hired_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub store_id: i32,
    pub number: String,
    pub first_name: String,
    pub last_name: String,
    pub hired_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeePatch {
    pub store_id: Option<i32>,
    pub number: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub hired_date: Option<DateTime<Utc>>,
}

/// Pagination window for list operations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListParams {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}
