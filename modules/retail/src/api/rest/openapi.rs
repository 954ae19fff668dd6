//! OpenAPI document for the retail REST API

use super::{dto::*, error::Problem, handlers};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::list_chains,
        handlers::get_chain,
        handlers::create_chain,
        handlers::update_chain,
        handlers::patch_chain,
        handlers::delete_chain,
        handlers::list_stores,
        handlers::get_store,
        handlers::create_store,
        handlers::update_store,
        handlers::patch_store,
        handlers::delete_store,
        handlers::list_employees,
        handlers::get_employee,
        handlers::create_employee,
        handlers::update_employee,
        handlers::patch_employee,
        handlers::delete_employee,
    ),
    components(schemas(
        ChainDto,
        ChainRequest,
        ChainPatchRequest,
        StoreDto,
        StoreRequest,
        StorePatchRequest,
        EmployeeDto,
        EmployeeRequest,
        EmployeePatchRequest,
        Problem,
    )),
    tags(
        (name = "chains", description = "Retail chains"),
        (name = "stores", description = "Stores of a chain"),
        (name = "employees", description = "Store employees")
    )
)]
pub struct RetailApiDoc;
