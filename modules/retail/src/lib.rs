//! Retail Module
//!
//! Directory of retail chains, their stores and the employees working there.

// Public exports
pub mod contract;
pub use contract::{
    Chain, ChainPatch, Employee, EmployeePatch, ListParams, NewChain, NewEmployee, NewStore,
    RetailError, Store, StorePatch,
};

pub mod module;
pub use module::RetailModule;

pub mod config;
pub use config::Config;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
