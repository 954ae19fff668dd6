//! Domain layer - business logic and services

pub mod repository;
pub mod service;
pub mod validation;

pub use repository::{ChainsRepository, EmployeesRepository, StoresRepository};
pub use service::Service;
