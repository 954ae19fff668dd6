//! SeaORM repository implementations

use crate::contract::{Chain, Employee, Store};
use crate::domain::repository::{ChainsRepository, EmployeesRepository, StoresRepository};
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use std::sync::Arc;

use super::entity::{chain, employee, store};
use super::mapper;

// ===== Chains Repository =====

pub struct SeaOrmChainsRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmChainsRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ChainsRepository for SeaOrmChainsRepository {
    async fn create(&self, chain: &Chain) -> Result<Chain> {
        let result = chain::Entity::insert(mapper::new_chain(chain))
            .exec_with_returning(&*self.db)
            .await?;

        Ok(result.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Chain>> {
        let result = chain::Entity::find_by_id(id).one(&*self.db).await?;
        Ok(result.map(Into::into))
    }

    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<Chain>> {
        let results = chain::Entity::find()
            .order_by_asc(chain::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn update(&self, chain: &Chain) -> Result<Chain> {
        let active: chain::ActiveModel = chain.into();
        let result = chain::Entity::update(active).exec(&*self.db).await?;
        Ok(result.into())
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let result = chain::Entity::delete_by_id(id).exec(&*self.db).await?;
        Ok(result.rows_affected > 0)
    }
}

// ===== Stores Repository =====

pub struct SeaOrmStoresRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmStoresRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StoresRepository for SeaOrmStoresRepository {
    async fn create(&self, store: &Store) -> Result<Store> {
        let result = store::Entity::insert(mapper::new_store(store))
            .exec_with_returning(&*self.db)
            .await?;

        Ok(result.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Store>> {
        let result = store::Entity::find_by_id(id).one(&*self.db).await?;
        Ok(result.map(Into::into))
    }

    async fn list(&self, chain_id: Option<i32>, limit: u64, offset: u64) -> Result<Vec<Store>> {
        let mut query = store::Entity::find();

        if let Some(cid) = chain_id {
            query = query.filter(store::Column::ChainId.eq(cid));
        }

        let results = query
            .order_by_asc(store::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn update(&self, store: &Store) -> Result<Store> {
        let active: store::ActiveModel = store.into();
        let result = store::Entity::update(active).exec(&*self.db).await?;
        Ok(result.into())
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let result = store::Entity::delete_by_id(id).exec(&*self.db).await?;
        Ok(result.rows_affected > 0)
    }
}

// ===== Employees Repository =====

pub struct SeaOrmEmployeesRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmEmployeesRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeesRepository for SeaOrmEmployeesRepository {
    async fn create(&self, employee: &Employee) -> Result<Employee> {
        let result = employee::Entity::insert(mapper::new_employee(employee))
            .exec_with_returning(&*self.db)
            .await?;

        Ok(result.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>> {
        let result = employee::Entity::find_by_id(id).one(&*self.db).await?;
        Ok(result.map(Into::into))
    }

    async fn list(
        &self,
        store_id: Option<i32>,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<Employee>> {
        let mut query = employee::Entity::find();

        if let Some(sid) = store_id {
            query = query.filter(employee::Column::StoreId.eq(sid));
        }

        let results = query
            .order_by_asc(employee::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn update(&self, employee: &Employee) -> Result<Employee> {
        let active: employee::ActiveModel = employee.into();
        let result = employee::Entity::update(active).exec(&*self.db).await?;
        Ok(result.into())
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let result = employee::Entity::delete_by_id(id).exec(&*self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
