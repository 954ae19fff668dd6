//! REST tests for the retail module, driven through the axum router

use axum::{
    http::{Method, StatusCode},
    Router,
};
use serde_json::{json, Value};

mod common;
use common::send;

fn chain_body(name: &str) -> Value {
    json!({
        "name": name,
        "description": "Neighbourhood groceries",
        "slogan": "Fresh every morning",
        "founded_date": "1962",
        "website": "https://www.example.com"
    })
}

async fn create(app: &Router, uri: &str, body: Value) -> Value {
    let (status, created) = send(app, Method::POST, uri, Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "{created}");
    created
}

fn sorted_keys(value: &Value) -> Vec<&str> {
    let mut keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    keys
}

#[tokio::test]
async fn test_chain_crud_round() {
    let app = common::router().await;

    let created = create(&app, "/chains", chain_body("Corner Grocers")).await;
    assert_eq!(
        sorted_keys(&created),
        ["description", "founded_date", "id", "name", "slogan", "website"]
    );
    let id = created["id"].as_i64().unwrap();

    let (status, fetched) = send(&app, Method::GET, &format!("/chains/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let mut replacement = chain_body("Corner Grocers Ltd");
    replacement["slogan"] = json!("Open late");
    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/chains/{id}"),
        Some(replacement),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Corner Grocers Ltd");
    assert_eq!(updated["slogan"], "Open late");

    let (status, _) = send(&app, Method::DELETE, &format!("/chains/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, listed) = send(&app, Method::GET, "/chains", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_put_chain_requires_every_field() {
    let app = common::router().await;
    let created = create(&app, "/chains", chain_body("Corner Grocers")).await;
    let id = created["id"].as_i64().unwrap();

    let (status, problem) = send(
        &app,
        Method::PUT,
        &format!("/chains/{id}"),
        Some(json!({ "name": "Only a name" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(problem["title"], "Invalid Request Body");
}

#[tokio::test]
async fn test_invalid_website_is_a_field_error() {
    let app = common::router().await;

    let mut body = chain_body("Corner Grocers");
    body["website"] = json!("www.example");
    let (status, problem) = send(&app, Method::POST, "/chains", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(problem["errors"]["website"], json!(["Enter a valid URL."]));
}

#[tokio::test]
async fn test_store_body_and_defaults() {
    let app = common::router().await;
    let chain = create(&app, "/chains", chain_body("Corner Grocers")).await;

    let store = create(
        &app,
        "/stores",
        json!({
            "chain": chain["id"],
            "number": "001",
            "address": "12 Market Street"
        }),
    )
    .await;

    assert_eq!(
        sorted_keys(&store),
        [
            "address",
            "business_hours_end",
            "business_hours_start",
            "chain",
            "id",
            "number",
            "opening_date"
        ]
    );
    assert_eq!(store["chain"], chain["id"]);
    assert_eq!(store["business_hours_start"], 8);
    assert_eq!(store["business_hours_end"], 17);
    assert!(store["opening_date"].is_string());
}

#[tokio::test]
async fn test_store_hours_out_of_range_is_bad_request() {
    let app = common::router().await;
    let chain = create(&app, "/chains", chain_body("Corner Grocers")).await;

    let (status, problem) = send(
        &app,
        Method::POST,
        "/stores",
        Some(json!({
            "chain": chain["id"],
            "number": "001",
            "address": "12 Market Street",
            "business_hours_end": 24
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        problem["errors"]["business_hours_end"],
        json!(["Ensure this value is less than or equal to 23."])
    );
}

#[tokio::test]
async fn test_explicit_opening_date_round_trips() {
    let app = common::router().await;
    let chain = create(&app, "/chains", chain_body("Corner Grocers")).await;

    let store = create(
        &app,
        "/stores",
        json!({
            "chain": chain["id"],
            "number": "001",
            "address": "12 Market Street",
            "opening_date": "2017-08-11T09:00:00Z"
        }),
    )
    .await;

    assert_eq!(store["opening_date"], "2017-08-11T09:00:00Z");
}

#[tokio::test]
async fn test_filters_and_cascade_through_http() {
    let app = common::router().await;
    let first = create(&app, "/chains", chain_body("Corner Grocers")).await;
    let second = create(&app, "/chains", chain_body("Big Box")).await;

    let store = create(
        &app,
        "/stores",
        json!({ "chain": first["id"], "number": "001", "address": "12 Market Street" }),
    )
    .await;
    create(
        &app,
        "/stores",
        json!({ "chain": second["id"], "number": "900", "address": "1 Harbour Road" }),
    )
    .await;

    let employee = create(
        &app,
        "/employees",
        json!({
            "store": store["id"],
            "number": "E-1",
            "first_name": "Ada",
            "last_name": "Lovelace"
        }),
    )
    .await;
    assert_eq!(
        sorted_keys(&employee),
        ["first_name", "hired_date", "id", "last_name", "number", "store"]
    );

    let first_id = first["id"].as_i64().unwrap();
    let (_, stores) = send(&app, Method::GET, &format!("/stores?chain={first_id}"), None).await;
    assert_eq!(stores.as_array().unwrap().len(), 1);

    let store_id = store["id"].as_i64().unwrap();
    let (_, employees) = send(
        &app,
        Method::GET,
        &format!("/employees?store={store_id}"),
        None,
    )
    .await;
    assert_eq!(employees.as_array().unwrap().len(), 1);

    let (status, _) = send(&app, Method::DELETE, &format!("/chains/{first_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let employee_id = employee["id"].as_i64().unwrap();
    let (status, _) = send(
        &app,
        Method::GET,
        &format!("/employees/{employee_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, stores) = send(&app, Method::GET, "/stores", None).await;
    assert_eq!(stores.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_employee_for_unknown_store_is_bad_request() {
    let app = common::router().await;

    let (status, problem) = send(
        &app,
        Method::POST,
        "/employees",
        Some(json!({
            "store": 3,
            "number": "E-1",
            "first_name": "Ada",
            "last_name": "Lovelace"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        problem["errors"]["store"],
        json!(["Invalid pk \"3\" - object does not exist."])
    );
}

#[tokio::test]
async fn test_offset_beyond_signed_range_returns_empty_list() {
    let app = common::router().await;
    create(&app, "/chains", chain_body("Corner Grocers")).await;

    for uri in [
        "/chains?offset=18446744073709551615",
        "/stores?offset=18446744073709551615",
        "/employees?offset=18446744073709551615",
    ] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, json!([]), "{uri}");
    }
}

#[tokio::test]
async fn test_malformed_path_and_query_are_problems() {
    let app = common::router().await;

    let (status, problem) = send(&app, Method::DELETE, "/stores/first", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(problem["title"], "Invalid Path");

    let (status, problem) = send(&app, Method::GET, "/employees?store=abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(problem["title"], "Invalid Query");
}
