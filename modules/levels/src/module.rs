//! Module declaration: wiring of storage, service and REST surface

use crate::api::rest::{openapi::LevelsApiDoc, routes};
use crate::config::Config;
use crate::domain::Service;
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::repositories::{
    SeaOrmChoicesRepository, SeaOrmGuidedLevelsRepository, SeaOrmLevelsRepository,
    SeaOrmQuestionsRepository,
};
use anyhow::Result;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;
use utoipa::OpenApi;

/// Levels module
pub struct LevelsModule {
    db: Arc<DatabaseConnection>,
    service: Arc<Service>,
}

impl LevelsModule {
    /// Validate the configuration and build the service on top of a database handle
    pub fn new(db: DatabaseConnection, config: Config) -> Result<Self> {
        config.validate()?;
        let db = Arc::new(db);

        let service = Arc::new(Service::new(
            Arc::new(SeaOrmLevelsRepository::new(db.clone())),
            Arc::new(SeaOrmGuidedLevelsRepository::new(db.clone())),
            Arc::new(SeaOrmQuestionsRepository::new(db.clone())),
            Arc::new(SeaOrmChoicesRepository::new(db.clone())),
            config,
        ));

        tracing::info!("Levels module initialized");
        Ok(Self { db, service })
    }

    /// Apply pending schema migrations
    pub async fn migrate(&self) -> Result<()> {
        Migrator::up(&*self.db, None).await?;
        tracing::info!("Levels migrations completed");
        Ok(())
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    /// Mount the module's REST routes
    pub fn register_rest(&self, router: axum::Router) -> axum::Router {
        tracing::info!("Registering levels REST routes");
        routes::register_routes(router, self.service.clone())
    }

    pub fn openapi() -> utoipa::openapi::OpenApi {
        LevelsApiDoc::openapi()
    }
}
