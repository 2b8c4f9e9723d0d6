mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

// ─── GET ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_students_returns_seeded_dataset() {
    let server = common::make_server();

    let response = server.get("/students").await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    let students = body["students"].as_array().unwrap();
    assert_eq!(students.len(), 3);
    assert_eq!(students[0]["name"], "Alice");
    assert_eq!(students[0]["id"], 1);
}

#[tokio::test]
async fn test_get_student_by_id() {
    let server = common::make_server();

    let response = server.get("/students/1").await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Alice");
    assert_eq!(body["email"], "alice@example.com");
}

#[tokio::test]
async fn test_get_student_not_found() {
    let server = common::make_server();

    let response = server.get("/students/999").await;
    response.assert_status_not_found();

    let body = response.json::<Value>();
    assert!(body["error"].is_string());
}

// ─── POST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_student() {
    let server = common::make_server();

    let response = server
        .post("/students")
        .json(&json!({ "name": "David", "email": "david@example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    assert_eq!(body["name"], "David");
    assert_eq!(body["id"], 4);
}

#[tokio::test]
async fn test_create_student_duplicate_email() {
    let server = common::make_server();

    // alice@example.com belongs to the seeded Alice; the name does not matter.
    let response = server
        .post("/students")
        .json(&json!({ "name": "Eve", "email": "alice@example.com" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_create_student_missing_fields() {
    let server = common::make_server();

    let response = server
        .post("/students")
        .json(&json!({ "name": "David" }))
        .await;
    response.assert_status_bad_request();

    let response = server
        .post("/students")
        .json(&json!({ "email": "david@example.com" }))
        .await;
    response.assert_status_bad_request();

    let response = server
        .post("/students")
        .json(&json!({ "name": "", "email": "david@example.com" }))
        .await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_created_ids_stay_monotonic_after_delete() {
    let server = common::make_server();

    server.delete("/students/3").await.assert_status(StatusCode::NO_CONTENT);

    let response = server
        .post("/students")
        .json(&json!({ "name": "David", "email": "david@example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    // Id 3 was freed by the delete, but ids are never reused.
    let body = response.json::<Value>();
    assert_eq!(body["id"], 4);
}

// ─── PUT ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_student() {
    let server = common::make_server();

    let response = server
        .put("/students/1")
        .json(&json!({ "name": "Alice Updated", "email": "alice.updated@example.com" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["name"], "Alice Updated");
    assert_eq!(body["email"], "alice.updated@example.com");
}

#[tokio::test]
async fn test_update_student_duplicate_email() {
    let server = common::make_server();

    let response = server
        .put("/students/1")
        .json(&json!({ "name": "Alice", "email": "bob@example.com" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_update_student_not_found() {
    let server = common::make_server();

    let response = server
        .put("/students/999")
        .json(&json!({ "name": "Ghost", "email": "ghost@example.com" }))
        .await;

    response.assert_status_not_found();
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_student() {
    let server = common::make_server();

    server.delete("/students/1").await.assert_status(StatusCode::NO_CONTENT);

    // Gone afterwards.
    server.get("/students/1").await.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_student_not_found() {
    let server = common::make_server();

    let response = server.delete("/students/999").await;
    response.assert_status_not_found();
}
