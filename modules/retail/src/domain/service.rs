//! Domain service - business logic orchestration

use super::repository::{ChainsRepository, EmployeesRepository, StoresRepository};
use super::validation::{
    validate_hour, validate_text, validate_url, ADDRESS_MAX_LENGTH, DESCRIPTION_MAX_LENGTH,
    FOUNDED_DATE_MAX_LENGTH, NAME_MAX_LENGTH, NUMBER_MAX_LENGTH, SLOGAN_MAX_LENGTH,
};
use crate::config::Config;
use crate::contract::{
    Chain, ChainPatch, Employee, EmployeePatch, ListParams, NewChain, NewEmployee, NewStore,
    RetailError, Store, StorePatch,
};
use chrono::Utc;
use sea_orm::{DbErr, SqlErr};
use std::sync::Arc;

/// Largest window bound the database accepts (signed 64-bit)
const MAX_ROWS: u64 = i64::MAX as u64;

/// Domain service for chains, stores and employees
pub struct Service {
    chains_repo: Arc<dyn ChainsRepository>,
    stores_repo: Arc<dyn StoresRepository>,
    employees_repo: Arc<dyn EmployeesRepository>,
    config: Config,
}

impl Service {
    pub fn new(
        chains_repo: Arc<dyn ChainsRepository>,
        stores_repo: Arc<dyn StoresRepository>,
        employees_repo: Arc<dyn EmployeesRepository>,
        config: Config,
    ) -> Self {
        Self {
            chains_repo,
            stores_repo,
            employees_repo,
            config,
        }
    }

    // ===== Chain Operations =====

    pub async fn list_chains(&self, params: ListParams) -> Result<Vec<Chain>, RetailError> {
        let (limit, offset) = self.page(params);
        tracing::debug!(limit, offset, "Listing chains");
        self.chains_repo
            .list(limit, offset)
            .await
            .map_err(map_storage_error)
    }

    pub async fn get_chain(&self, id: i32) -> Result<Chain, RetailError> {
        self.chains_repo
            .find_by_id(id)
            .await
            .map_err(map_storage_error)?
            .ok_or_else(|| RetailError::not_found("chain", id))
    }

    pub async fn create_chain(&self, new: NewChain) -> Result<Chain, RetailError> {
        let chain = Chain {
            id: 0,
            name: new.name,
            description: new.description,
            slogan: new.slogan,
            founded_date: new.founded_date,
            website: new.website,
        };
        validate_chain(&chain)?;

        let created = self
            .chains_repo
            .create(&chain)
            .await
            .map_err(map_storage_error)?;

        tracing::info!(chain_id = created.id, name = %created.name, "Chain created");
        Ok(created)
    }

    pub async fn update_chain(&self, id: i32, new: NewChain) -> Result<Chain, RetailError> {
        self.patch_chain(
            id,
            ChainPatch {
                name: Some(new.name),
                description: Some(new.description),
                slogan: Some(new.slogan),
                founded_date: Some(new.founded_date),
                website: Some(new.website),
            },
        )
        .await
    }

    pub async fn patch_chain(&self, id: i32, patch: ChainPatch) -> Result<Chain, RetailError> {
        let existing = self.get_chain(id).await?;
        let chain = Chain {
            id,
            name: patch.name.unwrap_or(existing.name),
            description: patch.description.unwrap_or(existing.description),
            slogan: patch.slogan.unwrap_or(existing.slogan),
            founded_date: patch.founded_date.unwrap_or(existing.founded_date),
            website: patch.website.unwrap_or(existing.website),
        };
        validate_chain(&chain)?;

        let updated = self
            .chains_repo
            .update(&chain)
            .await
            .map_err(map_storage_error)?;

        tracing::info!(chain_id = id, "Chain updated");
        Ok(updated)
    }

    /// Delete a chain together with its stores and their employees
    pub async fn delete_chain(&self, id: i32) -> Result<(), RetailError> {
        let deleted = self
            .chains_repo
            .delete(id)
            .await
            .map_err(map_storage_error)?;

        if !deleted {
            return Err(RetailError::not_found("chain", id));
        }

        tracing::info!(chain_id = id, "Chain deleted");
        Ok(())
    }

    // ===== Store Operations =====

    pub async fn list_stores(
        &self,
        chain_id: Option<i32>,
        params: ListParams,
    ) -> Result<Vec<Store>, RetailError> {
        let (limit, offset) = self.page(params);
        tracing::debug!(?chain_id, limit, offset, "Listing stores");
        self.stores_repo
            .list(chain_id, limit, offset)
            .await
            .map_err(map_storage_error)
    }

    pub async fn get_store(&self, id: i32) -> Result<Store, RetailError> {
        self.stores_repo
            .find_by_id(id)
            .await
            .map_err(map_storage_error)?
            .ok_or_else(|| RetailError::not_found("store", id))
    }

    pub async fn create_store(&self, new: NewStore) -> Result<Store, RetailError> {
        let store = Store {
            id: 0,
            chain_id: new.chain_id,
            number: new.number,
            address: new.address,
            opening_date: new.opening_date.unwrap_or_else(Utc::now),
            business_hours_start: new
                .business_hours_start
                .unwrap_or(self.config.default_business_hours_start),
            business_hours_end: new
                .business_hours_end
                .unwrap_or(self.config.default_business_hours_end),
        };
        validate_store(&store)?;
        self.ensure_chain_exists(store.chain_id).await?;

        let created = self
            .stores_repo
            .create(&store)
            .await
            .map_err(map_storage_error)?;

        tracing::info!(
            store_id = created.id,
            chain_id = created.chain_id,
            "Store created"
        );
        Ok(created)
    }

    /// Replace a store; omitted optional fields keep their stored values
    pub async fn update_store(&self, id: i32, new: NewStore) -> Result<Store, RetailError> {
        self.patch_store(
            id,
            StorePatch {
                chain_id: Some(new.chain_id),
                number: Some(new.number),
                address: Some(new.address),
                opening_date: new.opening_date,
                business_hours_start: new.business_hours_start,
                business_hours_end: new.business_hours_end,
            },
        )
        .await
    }

    pub async fn patch_store(&self, id: i32, patch: StorePatch) -> Result<Store, RetailError> {
        let existing = self.get_store(id).await?;
        let store = Store {
            id,
            chain_id: patch.chain_id.unwrap_or(existing.chain_id),
            number: patch.number.unwrap_or(existing.number),
            address: patch.address.unwrap_or(existing.address),
            opening_date: patch.opening_date.unwrap_or(existing.opening_date),
            business_hours_start: patch
                .business_hours_start
                .unwrap_or(existing.business_hours_start),
            business_hours_end: patch
                .business_hours_end
                .unwrap_or(existing.business_hours_end),
        };
        validate_store(&store)?;
        if store.chain_id != existing.chain_id {
            self.ensure_chain_exists(store.chain_id).await?;
        }

        let updated = self
            .stores_repo
            .update(&store)
            .await
            .map_err(map_storage_error)?;

        tracing::info!(store_id = id, "Store updated");
        Ok(updated)
    }

    /// Delete a store together with its employees
    pub async fn delete_store(&self, id: i32) -> Result<(), RetailError> {
        let deleted = self
            .stores_repo
            .delete(id)
            .await
            .map_err(map_storage_error)?;

        if !deleted {
            return Err(RetailError::not_found("store", id));
        }

        tracing::info!(store_id = id, "Store deleted");
        Ok(())
    }

    // ===== Employee Operations =====

    pub async fn list_employees(
        &self,
        store_id: Option<i32>,
        params: ListParams,
    ) -> Result<Vec<Employee>, RetailError> {
        let (limit, offset) = self.page(params);
        self.employees_repo
            .list(store_id, limit, offset)
            .await
            .map_err(map_storage_error)
    }

    pub async fn get_employee(&self, id: i32) -> Result<Employee, RetailError> {
        self.employees_repo
            .find_by_id(id)
            .await
            .map_err(map_storage_error)?
            .ok_or_else(|| RetailError::not_found("employee", id))
    }

    pub async fn create_employee(&self, new: NewEmployee) -> Result<Employee, RetailError> {
        let employee = Employee {
            id: 0,
            store_id: new.store_id,
            number: new.number,
            first_name: new.first_name,
            last_name: new.last_name,
            hired_date: new.hired_date.unwrap_or_else(Utc::now),
        };
        validate_employee(&employee)?;
        self.ensure_store_exists(employee.store_id).await?;

        let created = self
            .employees_repo
            .create(&employee)
            .await
            .map_err(map_storage_error)?;

        tracing::info!(
            employee_id = created.id,
            store_id = created.store_id,
            "Employee created"
        );
        Ok(created)
    }

    pub async fn update_employee(
        &self,
        id: i32,
        new: NewEmployee,
    ) -> Result<Employee, RetailError> {
        self.patch_employee(
            id,
            EmployeePatch {
                store_id: Some(new.store_id),
                number: Some(new.number),
                first_name: Some(new.first_name),
                last_name: Some(new.last_name),
                hired_date: new.hired_date,
            },
        )
        .await
    }

    pub async fn patch_employee(
        &self,
        id: i32,
        patch: EmployeePatch,
    ) -> Result<Employee, RetailError> {
        let existing = self.get_employee(id).await?;
        let employee = Employee {
            id,
            store_id: patch.store_id.unwrap_or(existing.store_id),
            number: patch.number.unwrap_or(existing.number),
            first_name: patch.first_name.unwrap_or(existing.first_name),
            last_name: patch.last_name.unwrap_or(existing.last_name),
            hired_date: patch.hired_date.unwrap_or(existing.hired_date),
        };
        validate_employee(&employee)?;
        if employee.store_id != existing.store_id {
            self.ensure_store_exists(employee.store_id).await?;
        }

        self.employees_repo
            .update(&employee)
            .await
            .map_err(map_storage_error)
    }

    pub async fn delete_employee(&self, id: i32) -> Result<(), RetailError> {
        let deleted = self
            .employees_repo
            .delete(id)
            .await
            .map_err(map_storage_error)?;

        if !deleted {
            return Err(RetailError::not_found("employee", id));
        }
        Ok(())
    }

    // ===== Helper Methods =====

    fn page(&self, params: ListParams) -> (u64, u64) {
        let max = self.config.max_page_size.min(MAX_ROWS);
        let limit = params.limit.unwrap_or(max).min(max);
        let offset = params.offset.unwrap_or(0).min(MAX_ROWS);
        (limit, offset)
    }

    async fn ensure_chain_exists(&self, chain_id: i32) -> Result<(), RetailError> {
        let chain = self
            .chains_repo
            .find_by_id(chain_id)
            .await
            .map_err(map_storage_error)?;

        match chain {
            Some(_) => Ok(()),
            None => Err(invalid_pk("chain", chain_id)),
        }
    }

    async fn ensure_store_exists(&self, store_id: i32) -> Result<(), RetailError> {
        let store = self
            .stores_repo
            .find_by_id(store_id)
            .await
            .map_err(map_storage_error)?;

        match store {
            Some(_) => Ok(()),
            None => Err(invalid_pk("store", store_id)),
        }
    }
}

fn validate_chain(chain: &Chain) -> Result<(), RetailError> {
    validate_text("name", &chain.name, NAME_MAX_LENGTH)?;
    validate_text("description", &chain.description, DESCRIPTION_MAX_LENGTH)?;
    validate_text("slogan", &chain.slogan, SLOGAN_MAX_LENGTH)?;
    validate_text("founded_date", &chain.founded_date, FOUNDED_DATE_MAX_LENGTH)?;
    validate_url("website", &chain.website)
}

fn validate_store(store: &Store) -> Result<(), RetailError> {
    validate_text("number", &store.number, NUMBER_MAX_LENGTH)?;
    validate_text("address", &store.address, ADDRESS_MAX_LENGTH)?;
    validate_hour("business_hours_start", store.business_hours_start)?;
    validate_hour("business_hours_end", store.business_hours_end)
}

fn validate_employee(employee: &Employee) -> Result<(), RetailError> {
    validate_text("number", &employee.number, NUMBER_MAX_LENGTH)?;
    validate_text("first_name", &employee.first_name, NAME_MAX_LENGTH)?;
    validate_text("last_name", &employee.last_name, NAME_MAX_LENGTH)
}

fn invalid_pk(field: &str, id: i32) -> RetailError {
    RetailError::validation(field, format!("Invalid pk \"{id}\" - object does not exist."))
}

/// A parent removed between the existence check and the write is a conflict
fn map_storage_error(error: anyhow::Error) -> RetailError {
    if let Some(SqlErr::ForeignKeyConstraintViolation(detail)) =
        error.downcast_ref::<DbErr>().and_then(DbErr::sql_err)
    {
        tracing::warn!(%detail, "Retail write lost its parent record");
        return RetailError::Conflict {
            reason: "The referenced record no longer exists.".to_string(),
        };
    }

    tracing::error!("Retail storage error: {:?}", error);
    RetailError::Internal
}
