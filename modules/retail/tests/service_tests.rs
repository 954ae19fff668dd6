//! Service tests for the retail module against a migrated SQLite database

use chrono::{TimeZone, Utc};
use retail::contract::*;
use retail::Config;

mod common;

fn new_chain(name: &str) -> NewChain {
    NewChain {
        name: name.to_string(),
        description: "Neighbourhood groceries".to_string(),
        slogan: "Fresh every morning".to_string(),
        founded_date: "1962".to_string(),
        website: "https://www.example.com".to_string(),
    }
}

fn new_store(chain_id: i32, number: &str) -> NewStore {
    NewStore {
        chain_id,
        number: number.to_string(),
        address: "12 Market Street".to_string(),
        opening_date: None,
        business_hours_start: None,
        business_hours_end: None,
    }
}

fn new_employee(store_id: i32, number: &str) -> NewEmployee {
    NewEmployee {
        store_id,
        number: number.to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        hired_date: None,
    }
}

// ===== Chains =====

#[tokio::test]
async fn test_create_and_get_chain() {
    let module = common::setup().await;
    let service = module.service();

    let chain = service.create_chain(new_chain("Corner Grocers")).await.unwrap();
    assert!(chain.id > 0);
    assert_eq!(chain.name, "Corner Grocers");

    let fetched = service.get_chain(chain.id).await.unwrap();
    assert_eq!(fetched, chain);
}

#[tokio::test]
async fn test_chain_website_must_be_a_url() {
    let module = common::setup().await;
    let service = module.service();

    let err = service
        .create_chain(NewChain {
            website: "not a url".to_string(),
            ..new_chain("Corner Grocers")
        })
        .await
        .unwrap_err();

    assert_eq!(
        err,
        RetailError::validation("website", "Enter a valid URL.")
    );
}

#[tokio::test]
async fn test_chain_name_length_is_bounded() {
    let module = common::setup().await;
    let service = module.service();

    let err = service
        .create_chain(new_chain(&"n".repeat(101)))
        .await
        .unwrap_err();
    assert!(matches!(err, RetailError::Validation { ref field, .. } if field == "name"));
}

#[tokio::test]
async fn test_patch_chain_keeps_other_fields() {
    let module = common::setup().await;
    let service = module.service();

    let chain = service.create_chain(new_chain("Corner Grocers")).await.unwrap();
    let patched = service
        .patch_chain(
            chain.id,
            ChainPatch {
                slogan: Some("Open late".to_string()),
                ..ChainPatch::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(patched.slogan, "Open late");
    assert_eq!(patched.name, chain.name);
    assert_eq!(patched.website, chain.website);
}

#[tokio::test]
async fn test_deleting_chain_cascades_to_stores_and_employees() {
    let module = common::setup().await;
    let service = module.service();

    let chain = service.create_chain(new_chain("Corner Grocers")).await.unwrap();
    let other = service.create_chain(new_chain("Big Box")).await.unwrap();
    let store = service.create_store(new_store(chain.id, "001")).await.unwrap();
    let kept = service.create_store(new_store(other.id, "900")).await.unwrap();
    let employee = service
        .create_employee(new_employee(store.id, "E-1"))
        .await
        .unwrap();

    service.delete_chain(chain.id).await.unwrap();

    assert!(matches!(
        service.get_store(store.id).await,
        Err(RetailError::NotFound { .. })
    ));
    assert!(matches!(
        service.get_employee(employee.id).await,
        Err(RetailError::NotFound { .. })
    ));
    assert_eq!(service.get_store(kept.id).await.unwrap(), kept);
}

#[tokio::test]
async fn test_delete_missing_chain_is_not_found() {
    let module = common::setup().await;
    let err = module.service().delete_chain(42).await.unwrap_err();
    assert_eq!(err, RetailError::not_found("chain", 42));
}

// ===== Stores =====

#[tokio::test]
async fn test_store_defaults() {
    let module = common::setup().await;
    let service = module.service();

    let chain = service.create_chain(new_chain("Corner Grocers")).await.unwrap();
    let before = Utc::now();
    let store = service.create_store(new_store(chain.id, "001")).await.unwrap();

    assert_eq!(store.business_hours_start, 8);
    assert_eq!(store.business_hours_end, 17);
    assert!(store.opening_date >= before);
}

#[tokio::test]
async fn test_store_defaults_follow_config() {
    let module = common::setup_with(Config {
        default_business_hours_start: 6,
        default_business_hours_end: 22,
        ..Config::default()
    })
    .await;
    let service = module.service();

    let chain = service.create_chain(new_chain("Corner Grocers")).await.unwrap();
    let store = service.create_store(new_store(chain.id, "001")).await.unwrap();

    assert_eq!(store.business_hours_start, 6);
    assert_eq!(store.business_hours_end, 22);
}

#[tokio::test]
async fn test_store_hours_outside_day_are_rejected() {
    let module = common::setup().await;
    let service = module.service();
    let chain = service.create_chain(new_chain("Corner Grocers")).await.unwrap();

    let err = service
        .create_store(NewStore {
            business_hours_start: Some(-1),
            ..new_store(chain.id, "001")
        })
        .await
        .unwrap_err();
    assert!(matches!(err, RetailError::Validation { ref field, .. } if field == "business_hours_start"));

    let err = service
        .create_store(NewStore {
            business_hours_end: Some(24),
            ..new_store(chain.id, "001")
        })
        .await
        .unwrap_err();
    assert!(matches!(err, RetailError::Validation { ref field, .. } if field == "business_hours_end"));

    let store = service
        .create_store(NewStore {
            business_hours_start: Some(0),
            business_hours_end: Some(23),
            ..new_store(chain.id, "001")
        })
        .await
        .unwrap();
    assert_eq!((store.business_hours_start, store.business_hours_end), (0, 23));
}

#[tokio::test]
async fn test_store_for_unknown_chain_is_rejected() {
    let module = common::setup().await;

    let err = module
        .service()
        .create_store(new_store(77, "001"))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        RetailError::validation("chain", "Invalid pk \"77\" - object does not exist.")
    );
}

#[tokio::test]
async fn test_update_store_keeps_omitted_optional_fields() {
    let module = common::setup().await;
    let service = module.service();

    let chain = service.create_chain(new_chain("Corner Grocers")).await.unwrap();
    let opened = Utc.with_ymd_and_hms(2017, 8, 11, 9, 0, 0).unwrap();
    let store = service
        .create_store(NewStore {
            opening_date: Some(opened),
            business_hours_start: Some(7),
            business_hours_end: Some(21),
            ..new_store(chain.id, "001")
        })
        .await
        .unwrap();

    let updated = service
        .update_store(
            store.id,
            NewStore {
                address: "1 Harbour Road".to_string(),
                ..new_store(chain.id, "002")
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.number, "002");
    assert_eq!(updated.address, "1 Harbour Road");
    assert_eq!(updated.opening_date, opened);
    assert_eq!(updated.business_hours_start, 7);
    assert_eq!(updated.business_hours_end, 21);
}

#[tokio::test]
async fn test_move_store_to_other_chain() {
    let module = common::setup().await;
    let service = module.service();

    let first = service.create_chain(new_chain("Corner Grocers")).await.unwrap();
    let second = service.create_chain(new_chain("Big Box")).await.unwrap();
    let store = service.create_store(new_store(first.id, "001")).await.unwrap();

    let moved = service
        .patch_store(
            store.id,
            StorePatch {
                chain_id: Some(second.id),
                ..StorePatch::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(moved.chain_id, second.id);

    let err = service
        .patch_store(
            store.id,
            StorePatch {
                chain_id: Some(999),
                ..StorePatch::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, RetailError::Validation { ref field, .. } if field == "chain"));
}

#[tokio::test]
async fn test_list_stores_filters_by_chain_and_paginates() {
    let module = common::setup_with(Config {
        max_page_size: 2,
        ..Config::default()
    })
    .await;
    let service = module.service();

    let first = service.create_chain(new_chain("Corner Grocers")).await.unwrap();
    let second = service.create_chain(new_chain("Big Box")).await.unwrap();
    for number in ["001", "002", "003"] {
        service.create_store(new_store(first.id, number)).await.unwrap();
    }
    service.create_store(new_store(second.id, "900")).await.unwrap();

    let page = service
        .list_stores(
            Some(first.id),
            ListParams {
                limit: Some(50),
                offset: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].number, "001");

    let rest = service
        .list_stores(
            Some(first.id),
            ListParams {
                limit: None,
                offset: Some(2),
            },
        )
        .await
        .unwrap();
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].number, "003");

    let others = service
        .list_stores(Some(second.id), ListParams::default())
        .await
        .unwrap();
    assert_eq!(others.len(), 1);
}

// ===== Employees =====

#[tokio::test]
async fn test_deleting_store_removes_its_employees() {
    let module = common::setup().await;
    let service = module.service();

    let chain = service.create_chain(new_chain("Corner Grocers")).await.unwrap();
    let store = service.create_store(new_store(chain.id, "001")).await.unwrap();
    for number in ["E-1", "E-2"] {
        service
            .create_employee(new_employee(store.id, number))
            .await
            .unwrap();
    }

    service.delete_store(store.id).await.unwrap();

    let remaining = service
        .list_employees(None, ListParams::default())
        .await
        .unwrap();
    assert!(remaining.is_empty());
    assert_eq!(service.get_chain(chain.id).await.unwrap(), chain);
}

#[tokio::test]
async fn test_employee_for_unknown_store_is_rejected() {
    let module = common::setup().await;

    let err = module
        .service()
        .create_employee(new_employee(5, "E-1"))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        RetailError::validation("store", "Invalid pk \"5\" - object does not exist.")
    );
}

#[tokio::test]
async fn test_patch_employee_name() {
    let module = common::setup().await;
    let service = module.service();

    let chain = service.create_chain(new_chain("Corner Grocers")).await.unwrap();
    let store = service.create_store(new_store(chain.id, "001")).await.unwrap();
    let hired = Utc.with_ymd_and_hms(2020, 1, 6, 8, 0, 0).unwrap();
    let employee = service
        .create_employee(NewEmployee {
            hired_date: Some(hired),
            ..new_employee(store.id, "E-1")
        })
        .await
        .unwrap();

    let patched = service
        .patch_employee(
            employee.id,
            EmployeePatch {
                last_name: Some("Byron".to_string()),
                ..EmployeePatch::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(patched.first_name, "Ada");
    assert_eq!(patched.last_name, "Byron");
    assert_eq!(patched.hired_date, hired);

    let err = service
        .patch_employee(
            employee.id,
            EmployeePatch {
                first_name: Some("  ".to_string()),
                ..EmployeePatch::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(
        err,
        RetailError::validation("first_name", "This field may not be blank.")
    );
}

// ===== Setup =====

#[tokio::test]
async fn test_migrations_are_recorded_once() {
    // setup() already migrated a fresh database
    let module = common::setup().await;
    module.migrate().await.unwrap();

    let chain = module
        .service()
        .create_chain(new_chain("Corner Grocers"))
        .await
        .unwrap();
    assert!(chain.id > 0);
}

#[tokio::test]
async fn test_huge_offset_yields_empty_page() {
    let module = common::setup().await;
    let service = module.service();
    service.create_chain(new_chain("Corner Grocers")).await.unwrap();

    let chains = service
        .list_chains(ListParams {
            limit: None,
            offset: Some(u64::MAX),
        })
        .await
        .unwrap();
    assert!(chains.is_empty());

    let stores = service
        .list_stores(
            None,
            ListParams {
                limit: Some(u64::MAX),
                offset: Some(u64::MAX),
            },
        )
        .await
        .unwrap();
    assert!(stores.is_empty());
}
