//! HTTP request handlers - thin layer that delegates to domain service

use super::dto::*;
use super::error::{
    map_domain_error, map_json_rejection, map_path_rejection, map_query_rejection, Problem,
};
use crate::domain::Service;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query,
    },
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;

type Svc = Extension<Arc<Service>>;

// ===== Chain Handlers =====

/// List chains ordered by id
#[utoipa::path(
    get,
    path = "/chains",
    tag = "chains",
    params(ListQuery),
    responses((status = 200, description = "Chains ordered by id", body = [ChainDto]))
)]
pub async fn list_chains(
    Extension(service): Svc,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<ChainDto>>, Problem> {
    let Query(query) = query.map_err(map_query_rejection)?;
    let chains = service
        .list_chains((&query).into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(chains.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/chains/{id}",
    tag = "chains",
    params(("id" = i32, Path, description = "Chain id")),
    responses(
        (status = 200, description = "Success", body = ChainDto),
        (status = 404, description = "Not found", body = Problem)
    )
)]
pub async fn get_chain(
    Extension(service): Svc,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<ChainDto>, Problem> {
    let Path(id) = path.map_err(map_path_rejection)?;
    let chain = service.get_chain(id).await.map_err(map_domain_error)?;
    Ok(Json(chain.into()))
}

#[utoipa::path(
    post,
    path = "/chains",
    tag = "chains",
    request_body = ChainRequest,
    responses(
        (status = 201, description = "Created", body = ChainDto),
        (status = 400, description = "Invalid input", body = Problem)
    )
)]
pub async fn create_chain(
    Extension(service): Svc,
    payload: Result<Json<ChainRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ChainDto>), Problem> {
    let Json(req) = payload.map_err(map_json_rejection)?;
    let chain = service
        .create_chain(req.into())
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(chain.into())))
}

#[utoipa::path(
    put,
    path = "/chains/{id}",
    tag = "chains",
    params(("id" = i32, Path, description = "Chain id")),
    request_body = ChainRequest,
    responses(
        (status = 200, description = "Success", body = ChainDto),
        (status = 400, description = "Invalid input", body = Problem),
        (status = 404, description = "Not found", body = Problem)
    )
)]
pub async fn update_chain(
    Extension(service): Svc,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<ChainRequest>, JsonRejection>,
) -> Result<Json<ChainDto>, Problem> {
    let Path(id) = path.map_err(map_path_rejection)?;
    let Json(req) = payload.map_err(map_json_rejection)?;
    let chain = service
        .update_chain(id, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(chain.into()))
}

#[utoipa::path(
    patch,
    path = "/chains/{id}",
    tag = "chains",
    params(("id" = i32, Path, description = "Chain id")),
    request_body = ChainPatchRequest,
    responses(
        (status = 200, description = "Success", body = ChainDto),
        (status = 400, description = "Invalid input", body = Problem),
        (status = 404, description = "Not found", body = Problem)
    )
)]
pub async fn patch_chain(
    Extension(service): Svc,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<ChainPatchRequest>, JsonRejection>,
) -> Result<Json<ChainDto>, Problem> {
    let Path(id) = path.map_err(map_path_rejection)?;
    let Json(req) = payload.map_err(map_json_rejection)?;
    let chain = service
        .patch_chain(id, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(chain.into()))
}

#[utoipa::path(
    delete,
    path = "/chains/{id}",
    tag = "chains",
    params(("id" = i32, Path, description = "Chain id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found", body = Problem)
    )
)]
pub async fn delete_chain(
    Extension(service): Svc,
    path: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, Problem> {
    let Path(id) = path.map_err(map_path_rejection)?;
    service.delete_chain(id).await.map_err(map_domain_error)?;
    Ok(StatusCode::NO_CONTENT)
}

// ===== Store Handlers =====

/// List stores, optionally only those of one chain
#[utoipa::path(
    get,
    path = "/stores",
    tag = "stores",
    params(StoreListQuery),
    responses((status = 200, description = "Stores ordered by id", body = [StoreDto]))
)]
pub async fn list_stores(
    Extension(service): Svc,
    query: Result<Query<StoreListQuery>, QueryRejection>,
) -> Result<Json<Vec<StoreDto>>, Problem> {
    let Query(query) = query.map_err(map_query_rejection)?;
    let stores = service
        .list_stores(query.chain, (&query).into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(stores.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/stores/{id}",
    tag = "stores",
    params(("id" = i32, Path, description = "Store id")),
    responses(
        (status = 200, description = "Success", body = StoreDto),
        (status = 404, description = "Not found", body = Problem)
    )
)]
pub async fn get_store(
    Extension(service): Svc,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<StoreDto>, Problem> {
    let Path(id) = path.map_err(map_path_rejection)?;
    let store = service.get_store(id).await.map_err(map_domain_error)?;
    Ok(Json(store.into()))
}

#[utoipa::path(
    post,
    path = "/stores",
    tag = "stores",
    request_body = StoreRequest,
    responses(
        (status = 201, description = "Created", body = StoreDto),
        (status = 400, description = "Invalid input", body = Problem)
    )
)]
pub async fn create_store(
    Extension(service): Svc,
    payload: Result<Json<StoreRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<StoreDto>), Problem> {
    let Json(req) = payload.map_err(map_json_rejection)?;
    let store = service
        .create_store(req.into())
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(store.into())))
}

#[utoipa::path(
    put,
    path = "/stores/{id}",
    tag = "stores",
    params(("id" = i32, Path, description = "Store id")),
    request_body = StoreRequest,
    responses(
        (status = 200, description = "Success", body = StoreDto),
        (status = 400, description = "Invalid input", body = Problem),
        (status = 404, description = "Not found", body = Problem)
    )
)]
pub async fn update_store(
    Extension(service): Svc,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<StoreRequest>, JsonRejection>,
) -> Result<Json<StoreDto>, Problem> {
    let Path(id) = path.map_err(map_path_rejection)?;
    let Json(req) = payload.map_err(map_json_rejection)?;
    let store = service
        .update_store(id, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(store.into()))
}

#[utoipa::path(
    patch,
    path = "/stores/{id}",
    tag = "stores",
    params(("id" = i32, Path, description = "Store id")),
    request_body = StorePatchRequest,
    responses(
        (status = 200, description = "Success", body = StoreDto),
        (status = 400, description = "Invalid input", body = Problem),
        (status = 404, description = "Not found", body = Problem)
    )
)]
pub async fn patch_store(
    Extension(service): Svc,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<StorePatchRequest>, JsonRejection>,
) -> Result<Json<StoreDto>, Problem> {
    let Path(id) = path.map_err(map_path_rejection)?;
    let Json(req) = payload.map_err(map_json_rejection)?;
    let store = service
        .patch_store(id, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(store.into()))
}

#[utoipa::path(
    delete,
    path = "/stores/{id}",
    tag = "stores",
    params(("id" = i32, Path, description = "Store id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found", body = Problem)
    )
)]
pub async fn delete_store(
    Extension(service): Svc,
    path: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, Problem> {
    let Path(id) = path.map_err(map_path_rejection)?;
    service.delete_store(id).await.map_err(map_domain_error)?;
    Ok(StatusCode::NO_CONTENT)
}

// ===== Employee Handlers =====

/// List employees, optionally only those of one store
#[utoipa::path(
    get,
    path = "/employees",
    tag = "employees",
    params(EmployeeListQuery),
    responses((status = 200, description = "Employees ordered by id", body = [EmployeeDto]))
)]
pub async fn list_employees(
    Extension(service): Svc,
    query: Result<Query<EmployeeListQuery>, QueryRejection>,
) -> Result<Json<Vec<EmployeeDto>>, Problem> {
    let Query(query) = query.map_err(map_query_rejection)?;
    let employees = service
        .list_employees(query.store, (&query).into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(employees.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/employees/{id}",
    tag = "employees",
    params(("id" = i32, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Success", body = EmployeeDto),
        (status = 404, description = "Not found", body = Problem)
    )
)]
pub async fn get_employee(
    Extension(service): Svc,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<EmployeeDto>, Problem> {
    let Path(id) = path.map_err(map_path_rejection)?;
    let employee = service.get_employee(id).await.map_err(map_domain_error)?;
    Ok(Json(employee.into()))
}

#[utoipa::path(
    post,
    path = "/employees",
    tag = "employees",
    request_body = EmployeeRequest,
    responses(
        (status = 201, description = "Created", body = EmployeeDto),
        (status = 400, description = "Invalid input", body = Problem)
    )
)]
pub async fn create_employee(
    Extension(service): Svc,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<EmployeeDto>), Problem> {
    let Json(req) = payload.map_err(map_json_rejection)?;
    let employee = service
        .create_employee(req.into())
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(employee.into())))
}

#[utoipa::path(
    put,
    path = "/employees/{id}",
    tag = "employees",
    params(("id" = i32, Path, description = "Employee id")),
    request_body = EmployeeRequest,
    responses(
        (status = 200, description = "Success", body = EmployeeDto),
        (status = 400, description = "Invalid input", body = Problem),
        (status = 404, description = "Not found", body = Problem)
    )
)]
pub async fn update_employee(
    Extension(service): Svc,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Result<Json<EmployeeDto>, Problem> {
    let Path(id) = path.map_err(map_path_rejection)?;
    let Json(req) = payload.map_err(map_json_rejection)?;
    let employee = service
        .update_employee(id, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(employee.into()))
}

#[utoipa::path(
    patch,
    path = "/employees/{id}",
    tag = "employees",
    params(("id" = i32, Path, description = "Employee id")),
    request_body = EmployeePatchRequest,
    responses(
        (status = 200, description = "Success", body = EmployeeDto),
        (status = 400, description = "Invalid input", body = Problem),
        (status = 404, description = "Not found", body = Problem)
    )
)]
pub async fn patch_employee(
    Extension(service): Svc,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<EmployeePatchRequest>, JsonRejection>,
) -> Result<Json<EmployeeDto>, Problem> {
    let Path(id) = path.map_err(map_path_rejection)?;
    let Json(req) = payload.map_err(map_json_rejection)?;
    let employee = service
        .patch_employee(id, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(employee.into()))
}

#[utoipa::path(
    delete,
    path = "/employees/{id}",
    tag = "employees",
    params(("id" = i32, Path, description = "Employee id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found", body = Problem)
    )
)]
pub async fn delete_employee(
    Extension(service): Svc,
    path: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, Problem> {
    let Path(id) = path.map_err(map_path_rejection)?;
    service.delete_employee(id).await.map_err(map_domain_error)?;
    Ok(StatusCode::NO_CONTENT)
}
