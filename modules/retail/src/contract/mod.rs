//! Contract layer - transport-agnostic models and errors

pub mod error;
pub mod model;

pub use error::RetailError;
pub use model::{
    Chain, ChainPatch, Employee, EmployeePatch, ListParams, NewChain, NewEmployee, NewStore,
    Store, StorePatch,
};
