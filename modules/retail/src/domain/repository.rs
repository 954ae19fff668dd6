//! Repository traits for data access
//!
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{Chain, Employee, Store};
use anyhow::Result;
use async_trait::async_trait;

/// Repository for chains
#[async_trait]
pub trait ChainsRepository: Send + Sync {
    /// Insert a chain; `chain.id` is ignored and assigned by storage
    async fn create(&self, chain: &Chain) -> Result<Chain>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Chain>>;

    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<Chain>>;

    async fn update(&self, chain: &Chain) -> Result<Chain>;

    /// Delete a chain; its stores and their employees go with it
    async fn delete(&self, id: i32) -> Result<bool>;
}

/// Repository for stores
#[async_trait]
pub trait StoresRepository: Send + Sync {
    async fn create(&self, store: &Store) -> Result<Store>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Store>>;

    /// List stores ordered by id, optionally restricted to one chain
    async fn list(&self, chain_id: Option<i32>, limit: u64, offset: u64) -> Result<Vec<Store>>;

    async fn update(&self, store: &Store) -> Result<Store>;

    /// Delete a store; its employees go with it
    async fn delete(&self, id: i32) -> Result<bool>;
}

/// Repository for employees
#[async_trait]
pub trait EmployeesRepository: Send + Sync {
    async fn create(&self, employee: &Employee) -> Result<Employee>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>>;

    /// List employees ordered by id, optionally restricted to one store
    async fn list(&self, store_id: Option<i32>, limit: u64, offset: u64)
        -> Result<Vec<Employee>>;

    async fn update(&self, employee: &Employee) -> Result<Employee>;

    async fn delete(&self, id: i32) -> Result<bool>;
}
