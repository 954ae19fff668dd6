//! Application assembly: database, modules and the HTTP router

use crate::config::{AppConfig, DatabaseConfig, ServerConfig};
use anyhow::{Context, Result};
use axum::{routing::get, Json, Router};
use levels::LevelsModule;
use retail::RetailModule;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde_json::{json, Value};
use tower::Layer;
use tower_http::{
    normalize_path::{NormalizePath, NormalizePathLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::openapi::{InfoBuilder, OpenApi};

/// Both modules wired to one database
pub struct App {
    levels: LevelsModule,
    retail: RetailModule,
}

impl App {
    pub async fn init(config: &AppConfig) -> Result<Self> {
        let db = connect(&config.database).await?;

        let levels = LevelsModule::new(db.clone(), config.modules.levels.clone())?;
        let retail = RetailModule::new(db, config.modules.retail.clone())?;

        Ok(Self { levels, retail })
    }

    /// Apply every module's pending migrations
    pub async fn migrate(&self) -> Result<()> {
        self.levels.migrate().await.context("levels migrations failed")?;
        self.retail.migrate().await.context("retail migrations failed")?;
        Ok(())
    }

    /// Full router; trailing slashes are trimmed before routing
    pub fn router(&self, server: &ServerConfig) -> NormalizePath<Router> {
        let router = Router::new()
            .route("/health", get(health))
            .route("/openapi.json", get(openapi_json));

        let router = self.levels.register_rest(router);
        let router = self.retail.register_rest(router);

        let router = router
            .layer(TimeoutLayer::new(server.request_timeout))
            .layer(TraceLayer::new_for_http());

        NormalizePathLayer::trim_trailing_slash().layer(router)
    }
}

pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .sqlx_logging(config.sqlx_logging);

    let db = Database::connect(options)
        .await
        .with_context(|| format!("failed to connect to {}", config.url))?;

    tracing::info!(max_connections = config.max_connections, "Database connected");
    Ok(db)
}

/// Merged OpenAPI document of all modules
pub fn openapi() -> OpenApi {
    let mut doc = LevelsModule::openapi();
    doc.merge(RetailModule::openapi());
    doc.info = InfoBuilder::new()
        .title("Circuits API")
        .version(env!("CARGO_PKG_VERSION"))
        .build();
    doc
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn openapi_json() -> Json<OpenApi> {
    Json(openapi())
}
