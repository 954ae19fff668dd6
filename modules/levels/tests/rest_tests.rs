//! REST tests for the levels module, driven through the axum router

use axum::http::{Method, StatusCode};
use serde_json::json;

mod common;
use common::send;

#[tokio::test]
async fn test_level_crud_round() {
    let app = common::router().await;

    let (status, created) = send(
        &app,
        Method::POST,
        "/level",
        Some(json!({ "circuit": "[gate:and]", "difficulty": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let body = created.as_object().unwrap();
    let mut keys: Vec<&str> = body.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["circuit", "creation_date", "difficulty", "id"]);

    let id = created["id"].as_i64().unwrap();

    let (status, fetched) = send(&app, Method::GET, &format!("/level/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, patched) = send(
        &app,
        Method::PATCH,
        &format!("/level/{id}"),
        Some(json!({ "circuit": "[gate:or]" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["circuit"], "[gate:or]");
    assert_eq!(patched["difficulty"], 2);

    let (status, listed) = send(&app, Method::GET, "/level", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (status, body) = send(&app, Method::DELETE, &format!("/level/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, problem) = send(&app, Method::GET, &format!("/level/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(problem["status"], 404);
}

#[tokio::test]
async fn test_duplicate_difficulty_returns_conflict() {
    let app = common::router().await;

    let level = json!({ "circuit": "c", "difficulty": 3 });
    let (status, _) = send(&app, Method::POST, "/level", Some(level.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, problem) = send(&app, Method::POST, "/level", Some(level)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(problem["title"], "Conflict");
    assert_eq!(
        problem["detail"],
        "levels with this difficulty already exists."
    );
}

#[tokio::test]
async fn test_validation_problem_lists_field_errors() {
    let app = common::router().await;

    let (status, problem) = send(
        &app,
        Method::POST,
        "/level",
        Some(json!({ "circuit": "", "difficulty": 1 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        problem["errors"]["circuit"],
        json!(["This field may not be blank."])
    );
}

#[tokio::test]
async fn test_read_only_fields_are_ignored_on_input() {
    let app = common::router().await;

    let (status, created) = send(
        &app,
        Method::POST,
        "/level",
        Some(json!({
            "id": 500,
            "circuit": "c",
            "creation_date": "1999-01-01",
            "difficulty": 1
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_ne!(created["id"], 500);
    assert_ne!(created["creation_date"], "1999-01-01");
}

#[tokio::test]
async fn test_malformed_body_is_a_problem() {
    let app = common::router().await;

    let request = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/question")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let problem: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(problem["title"], "Invalid Request Body");
}

#[tokio::test]
async fn test_guided_level_body_includes_inherited_fields() {
    let app = common::router().await;

    let (status, created) = send(
        &app,
        Method::POST,
        "/guided-level",
        Some(json!({
            "circuit": "[gate:xor]",
            "difficulty": 4,
            "parts": "XOR",
            "labels": "Q=1"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let body = created.as_object().unwrap();
    let mut keys: Vec<&str> = body.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        ["circuit", "creation_date", "difficulty", "id", "labels", "parts"]
    );

    // The parent level is listed with the plain levels
    let id = created["id"].as_i64().unwrap();
    let (status, parent) = send(&app, Method::GET, &format!("/level/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parent["difficulty"], 4);
}

#[tokio::test]
async fn test_deleting_question_removes_its_choices() {
    let app = common::router().await;

    let (_, question) = send(
        &app,
        Method::POST,
        "/question",
        Some(json!({ "question": "Which gate inverts its input?" })),
    )
    .await;
    let question_id = question["id"].as_i64().unwrap();

    let (status, choice) = send(
        &app,
        Method::POST,
        "/choice",
        Some(json!({ "question": question_id, "answer": "NOT" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(choice["question"], question_id);

    let (_, listed) = send(
        &app,
        Method::GET,
        &format!("/choice?question={question_id}"),
        None,
    )
    .await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/question/{question_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let choice_id = choice["id"].as_i64().unwrap();
    let (status, _) = send(&app, Method::GET, &format!("/choice/{choice_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_choice_for_unknown_question_is_bad_request() {
    let app = common::router().await;

    let (status, problem) = send(
        &app,
        Method::POST,
        "/choice",
        Some(json!({ "question": 12, "answer": "AND" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        problem["errors"]["question"],
        json!(["Invalid pk \"12\" - object does not exist."])
    );
}

#[tokio::test]
async fn test_offset_beyond_signed_range_returns_empty_list() {
    let app = common::router().await;
    send(
        &app,
        Method::POST,
        "/level",
        Some(json!({ "circuit": "c", "difficulty": 1 })),
    )
    .await;

    for uri in [
        "/level?offset=18446744073709551615",
        "/choice?offset=18446744073709551615&limit=18446744073709551615",
    ] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, json!([]), "{uri}");
    }
}

#[tokio::test]
async fn test_malformed_path_and_query_are_problems() {
    let app = common::router().await;

    let (status, problem) = send(&app, Method::GET, "/level/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(problem["title"], "Invalid Path");
    assert_eq!(problem["status"], 400);

    let (status, problem) = send(&app, Method::GET, "/question?limit=-1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(problem["title"], "Invalid Query");
}
