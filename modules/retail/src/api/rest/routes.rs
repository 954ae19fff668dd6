//! Route registration

use super::handlers;
use crate::domain::Service;
use axum::{routing::get, Extension, Router};
use std::sync::Arc;

/// Register all retail REST routes on `router`
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    let retail = Router::new()
        .route(
            "/chains",
            get(handlers::list_chains).post(handlers::create_chain),
        )
        .route(
            "/chains/{id}",
            get(handlers::get_chain)
                .put(handlers::update_chain)
                .patch(handlers::patch_chain)
                .delete(handlers::delete_chain),
        )
        .route(
            "/stores",
            get(handlers::list_stores).post(handlers::create_store),
        )
        .route(
            "/stores/{id}",
            get(handlers::get_store)
                .put(handlers::update_store)
                .patch(handlers::patch_store)
                .delete(handlers::delete_store),
        )
        .route(
            "/employees",
            get(handlers::list_employees).post(handlers::create_employee),
        )
        .route(
            "/employees/{id}",
            get(handlers::get_employee)
                .put(handlers::update_employee)
                .patch(handlers::patch_employee)
                .delete(handlers::delete_employee),
        )
        .layer(Extension(service));

    router.merge(retail)
}
