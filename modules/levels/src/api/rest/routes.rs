//! Route registration

use super::handlers;
use crate::domain::Service;
use axum::{routing::get, Extension, Router};
use std::sync::Arc;

/// Register all levels REST routes on `router`
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    let levels = Router::new()
        // Level endpoints
        .route(
            "/level",
            get(handlers::list_levels).post(handlers::create_level),
        )
        .route(
            "/level/{id}",
            get(handlers::get_level)
                .put(handlers::update_level)
                .patch(handlers::patch_level)
                .delete(handlers::delete_level),
        )
        // Guided level endpoints
        .route(
            "/guided-level",
            get(handlers::list_guided_levels).post(handlers::create_guided_level),
        )
        .route(
            "/guided-level/{id}",
            get(handlers::get_guided_level)
                .put(handlers::update_guided_level)
                .patch(handlers::patch_guided_level)
                .delete(handlers::delete_guided_level),
        )
        // Question endpoints
        .route(
            "/question",
            get(handlers::list_questions).post(handlers::create_question),
        )
        .route(
            "/question/{id}",
            get(handlers::get_question)
                .put(handlers::update_question)
                .patch(handlers::patch_question)
                .delete(handlers::delete_question),
        )
        // Choice endpoints
        .route(
            "/choice",
            get(handlers::list_choices).post(handlers::create_choice),
        )
        .route(
            "/choice/{id}",
            get(handlers::get_choice)
                .put(handlers::update_choice)
                .patch(handlers::patch_choice)
                .delete(handlers::delete_choice),
        )
        .layer(Extension(service));

    router.merge(levels)
}
