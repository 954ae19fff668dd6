//! Mapper implementations for converting between DTOs and contract models

use super::dto::*;
use crate::contract;

// ===== Chain conversions =====

impl From<contract::Chain> for ChainDto {
    fn from(chain: contract::Chain) -> Self {
        Self {
            id: chain.id,
            name: chain.name,
            description: chain.description,
            slogan: chain.slogan,
            founded_date: chain.founded_date,
            website: chain.website,
        }
    }
}

impl From<ChainRequest> for contract::NewChain {
    fn from(req: ChainRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            slogan: req.slogan,
            founded_date: req.founded_date,
            website: req.website,
        }
    }
}

impl From<ChainPatchRequest> for contract::ChainPatch {
    fn from(req: ChainPatchRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            slogan: req.slogan,
            founded_date: req.founded_date,
            website: req.website,
        }
    }
}

// ===== Store conversions =====

impl From<contract::Store> for StoreDto {
    fn from(store: contract::Store) -> Self {
        Self {
            id: store.id,
            chain: store.chain_id,
            number: store.number,
            address: store.address,
            opening_date: store.opening_date,
            business_hours_start: store.business_hours_start,
            business_hours_end: store.business_hours_end,
        }
    }
}

impl From<StoreRequest> for contract::NewStore {
    fn from(req: StoreRequest) -> Self {
        Self {
            chain_id: req.chain,
            number: req.number,
            address: req.address,
            opening_date: req.opening_date,
            business_hours_start: req.business_hours_start,
            business_hours_end: req.business_hours_end,
        }
    }
}

impl From<StorePatchRequest> for contract::StorePatch {
    fn from(req: StorePatchRequest) -> Self {
        Self {
            chain_id: req.chain,
            number: req.number,
            address: req.address,
            opening_date: req.opening_date,
            business_hours_start: req.business_hours_start,
            business_hours_end: req.business_hours_end,
        }
    }
}

// ===== Employee conversions =====

impl From<contract::Employee> for EmployeeDto {
    fn from(employee: contract::Employee) -> Self {
        Self {
            id: employee.id,
            store: employee.store_id,
            number: employee.number,
            first_name: employee.first_name,
            last_name: employee.last_name,
            hired_date: employee.hired_date,
        }
    }
}

impl From<EmployeeRequest> for contract::NewEmployee {
    fn from(req: EmployeeRequest) -> Self {
        Self {
            store_id: req.store,
            number: req.number,
            first_name: req.first_name,
            last_name: req.last_name,
            hired_date: req.hired_date,
        }
    }
}

impl From<EmployeePatchRequest> for contract::EmployeePatch {
    fn from(req: EmployeePatchRequest) -> Self {
        Self {
            store_id: req.store,
            number: req.number,
            first_name: req.first_name,
            last_name: req.last_name,
            hired_date: req.hired_date,
        }
    }
}

// ===== Query conversions =====

impl From<&ListQuery> for contract::ListParams {
    fn from(query: &ListQuery) -> Self {
        Self {
            limit: query.limit,
            offset: query.offset,
        }
    }
}

impl From<&StoreListQuery> for contract::ListParams {
    fn from(query: &StoreListQuery) -> Self {
        Self {
            limit: query.limit,
            offset: query.offset,
        }
    }
}

impl From<&EmployeeListQuery> for contract::ListParams {
    fn from(query: &EmployeeListQuery) -> Self {
        Self {
            limit: query.limit,
            offset: query.offset,
        }
    }
}
