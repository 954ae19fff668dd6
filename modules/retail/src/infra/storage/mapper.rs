//! Entity to model mappers

use super::entity::{chain, employee, store};
use crate::contract::{Chain, Employee, Store};
use sea_orm::ActiveValue::{NotSet, Set};

// ===== Chain Conversions =====

impl From<chain::Model> for Chain {
    fn from(entity: chain::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            slogan: entity.slogan,
            founded_date: entity.founded_date,
            website: entity.website,
        }
    }
}

impl From<&Chain> for chain::ActiveModel {
    fn from(model: &Chain) -> Self {
        Self {
            id: Set(model.id),
            name: Set(model.name.clone()),
            description: Set(model.description.clone()),
            slogan: Set(model.slogan.clone()),
            founded_date: Set(model.founded_date.clone()),
            website: Set(model.website.clone()),
        }
    }
}

/// Active model for an insert; the id is left to the database
pub fn new_chain(model: &Chain) -> chain::ActiveModel {
    chain::ActiveModel {
        id: NotSet,
        ..model.into()
    }
}

// ===== Store Conversions =====

impl From<store::Model> for Store {
    fn from(entity: store::Model) -> Self {
        Self {
            id: entity.id,
            chain_id: entity.chain_id,
            number: entity.number,
            address: entity.address,
            opening_date: entity.opening_date,
            business_hours_start: entity.business_hours_start,
            business_hours_end: entity.business_hours_end,
        }
    }
}

impl From<&Store> for store::ActiveModel {
    fn from(model: &Store) -> Self {
        Self {
            id: Set(model.id),
            chain_id: Set(model.chain_id),
            number: Set(model.number.clone()),
            address: Set(model.address.clone()),
            opening_date: Set(model.opening_date),
            business_hours_start: Set(model.business_hours_start),
            business_hours_end: Set(model.business_hours_end),
        }
    }
}

pub fn new_store(model: &Store) -> store::ActiveModel {
    store::ActiveModel {
        id: NotSet,
        ..model.into()
    }
}

// ===== Employee Conversions =====

impl From<employee::Model> for Employee {
    fn from(entity: employee::Model) -> Self {
        Self {
            id: entity.id,
            store_id: entity.store_id,
            number: entity.number,
            first_name: entity.first_name,
            last_name: entity.last_name,
            hired_date: entity.hired_date,
        }
    }
}

impl From<&Employee> for employee::ActiveModel {
    fn from(model: &Employee) -> Self {
        Self {
            id: Set(model.id),
            store_id: Set(model.store_id),
            number: Set(model.number.clone()),
            first_name: Set(model.first_name.clone()),
            last_name: Set(model.last_name.clone()),
            hired_date: Set(model.hired_date),
        }
    }
}

pub fn new_employee(model: &Employee) -> employee::ActiveModel {
    employee::ActiveModel {
        id: NotSet,
        ..model.into()
    }
}
