mod common;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Request, StatusCode};
use bank_api::routes::app_router;
use tower::ServiceExt;
use serde_json::{Value, json};
use sqlx::PgPool;

// ─── CREATE / LIST ───────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_then_list_contains_account(pool: PgPool) {
    let server = common::create_test_server(pool);

    server
        .post("/account")
        .json(&json!({ "firstName": "Ada", "lastName": "Lovelace" }))
        .await
        .assert_status_ok();

    let response = server.get("/account").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    let items = json.as_array().unwrap();
    assert!(
        items
            .iter()
            .any(|a| a["firstName"] == "Ada" && a["lastName"] == "Lovelace")
    );
}

#[sqlx::test]
async fn test_create_returns_full_account(pool: PgPool) {
    let server = common::create_test_server(pool);

    let response = server
        .post("/account")
        .json(&json!({ "firstName": "Ada", "lastName": "Lovelace" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
    let body = response.json::<Value>();
    for field in ["id", "firstName", "lastName", "number", "balance", "createdAt"] {
        assert!(body.get(field).is_some(), "missing {field}");
    }
    assert_eq!(body["firstName"], "Ada");
    assert_eq!(body["lastName"], "Lovelace");
}

#[sqlx::test]
async fn test_list_empty_table(pool: PgPool) {
    let server = common::create_test_server(pool);

    let response = server.get("/account").await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[sqlx::test]
async fn test_create_malformed_json(pool: PgPool) {
    let server = common::create_test_server(pool);

    let response = server.post("/account").text("{firstName: Ada}").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert!(!body["error"].as_str().unwrap().is_empty());
}

// ─── GET BY ID ────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_get_created_account_by_id(pool: PgPool) {
    let server = common::create_test_server(pool);

    let created = server
        .post("/account")
        .json(&json!({ "firstName": "Grace", "lastName": "Hopper" }))
        .await
        .json::<Value>();
    let id = created["id"].as_i64().unwrap();

    let response = server.get(&format!("/account/{id}")).await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["id"], id);
    assert_eq!(body["firstName"], "Grace");
    assert_eq!(body["lastName"], "Hopper");
}

#[sqlx::test]
async fn test_get_missing_account(pool: PgPool) {
    let server = common::create_test_server(pool);

    let response = server.get("/account/999999").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert!(body["error"].as_str().unwrap().contains("999999"));
}

#[sqlx::test]
async fn test_get_non_integer_id(pool: PgPool) {
    let server = common::create_test_server(pool);

    let response = server.get("/account/abc").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["error"].is_string());
}

// ─── DELETE ───────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_delete_then_get_fails(pool: PgPool) {
    let id = common::create_test_account(&pool, "Ada", "Lovelace").await;
    let server = common::create_test_server(pool);

    let response = server.delete(&format!("/account/{id}")).await;

    response.assert_status_ok();
    response.assert_json(&json!({ "deleted": id }));

    let response = server.get(&format!("/account/{id}")).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(
        response.json::<Value>()["error"]
            .as_str()
            .unwrap()
            .contains(&id.to_string())
    );
}

#[sqlx::test]
async fn test_delete_missing_account_acknowledged(pool: PgPool) {
    let server = common::create_test_server(pool);

    let response = server.delete("/account/31337").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "deleted": 31337 }));
}

// ─── TRANSFER ─────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_transfer_echo(pool: PgPool) {
    let id = common::create_test_account(&pool, "Ada", "Lovelace").await;
    let server = common::create_test_server(pool);
    let payload = json!({ "toAccount": id, "amount": 100 });

    let response = server.post("/transfer").json(&payload).await;

    response.assert_status_ok();
    response.assert_json(&payload);

    // No balance is touched.
    let account = server.get(&format!("/account/{id}")).await.json::<Value>();
    assert_eq!(account["balance"], 0);
}

#[sqlx::test]
async fn test_transfer_echoes_null_and_string_members(pool: PgPool) {
    let server = common::create_test_server(pool);
    let payload = json!({ "fromAccount": null, "amount": "12.50", "memo": [1] });

    let response = server.post("/transfer").json(&payload).await;

    response.assert_status_ok();
    response.assert_json(&payload);
}

#[sqlx::test]
async fn test_transfer_malformed_json(pool: PgPool) {
    let server = common::create_test_server(pool);

    let response = server.post("/transfer").text("{\"amount\": }").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(!response.json::<Value>()["error"].as_str().unwrap().is_empty());
}

// ─── ROUTING ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_trailing_slash_is_normalized(pool: PgPool) {
    let app = app_router(common::create_test_state(pool));

    let response = app
        .oneshot(Request::get("/account/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test]
async fn test_unsupported_method(pool: PgPool) {
    let server = common::create_test_server(pool);

    let response = server.patch("/account/1").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"],
        "method PATCH not supported"
    );
}
