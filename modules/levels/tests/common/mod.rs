//! Shared test setup: an in-memory SQLite database migrated for the levels module

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use levels::{Config, LevelsModule};
use sea_orm::{ConnectOptions, Database};
use serde_json::Value;
use tower::ServiceExt;

pub async fn setup() -> LevelsModule {
    setup_with(Config::default()).await
}

pub async fn setup_with(config: Config) -> LevelsModule {
    // A single connection keeps every query on the same in-memory database
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);

    let db = Database::connect(options).await.unwrap();
    let module = LevelsModule::new(db, config).unwrap();
    module.migrate().await.unwrap();
    module
}

pub async fn router() -> Router {
    let module = setup().await;
    module.register_rest(Router::new())
}

/// Send a request through the router and decode the JSON response body
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
