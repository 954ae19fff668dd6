//! Module declaration: wiring of storage, service and REST surface

use crate::api::rest::{openapi::RetailApiDoc, routes};
use crate::config::Config;
use crate::domain::Service;
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::repositories::{
    SeaOrmChainsRepository, SeaOrmEmployeesRepository, SeaOrmStoresRepository,
};
use anyhow::Result;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;
use utoipa::OpenApi;

/// Retail module
pub struct RetailModule {
    db: Arc<DatabaseConnection>,
    service: Arc<Service>,
}

impl RetailModule {
    /// Validate the configuration and build the service on top of a database handle
    pub fn new(db: DatabaseConnection, config: Config) -> Result<Self> {
        config.validate()?;
        let db = Arc::new(db);

        let service = Arc::new(Service::new(
            Arc::new(SeaOrmChainsRepository::new(db.clone())),
            Arc::new(SeaOrmStoresRepository::new(db.clone())),
            Arc::new(SeaOrmEmployeesRepository::new(db.clone())),
            config,
        ));

        tracing::info!("Retail module initialized");
        Ok(Self { db, service })
    }

    /// Apply pending schema migrations
    pub async fn migrate(&self) -> Result<()> {
        Migrator::up(&*self.db, None).await?;
        tracing::info!("Retail migrations completed");
        Ok(())
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    pub fn register_rest(&self, router: axum::Router) -> axum::Router {
        tracing::info!("Registering retail REST routes");
        routes::register_routes(router, self.service.clone())
    }

    pub fn openapi() -> utoipa::openapi::OpenApi {
        RetailApiDoc::openapi()
    }
}
