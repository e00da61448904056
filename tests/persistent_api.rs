use axum::http::{Method, StatusCode};
use serde_json::{Value, json};
use userhub::config::Variant;

mod common;

use common::TestApp;

async fn create(app: &TestApp, name: &str) -> Value {
    let (status, body) = app
        .json(Method::POST, "/users/", Some(json!({ "name": name })))
        .await;
    assert_eq!(status, StatusCode::OK);
    body
}

fn not_found() -> Value {
    json!({ "detail": "Пользователь не найден" })
}

#[tokio::test]
async fn create_then_get_returns_same_record() {
    let app = TestApp::new(Variant::Persistent).await;

    let created = create(&app, "ada").await;
    assert_eq!(created["name"], "ada");
    let id = created["id"].as_i64().expect("id");

    let (status, body) = app.json(Method::GET, &format!("/users/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);
}

#[tokio::test]
async fn update_overwrites_name() {
    let app = TestApp::new(Variant::Persistent).await;
    let id = create(&app, "ada").await["id"].as_i64().expect("id");

    let (status, body) = app
        .json(
            Method::PATCH,
            &format!("/users/{id}"),
            Some(json!({ "name": "Ada Lovelace" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": id, "name": "Ada Lovelace" }));

    let (_, body) = app.json(Method::GET, &format!("/users/{id}"), None).await;
    assert_eq!(body["name"], "Ada Lovelace");
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let app = TestApp::new(Variant::Persistent).await;
    let id = create(&app, "ada").await["id"].as_i64().expect("id");

    let (status, body) = app
        .json(Method::DELETE, &format!("/users/{id}"), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "status": "success", "message": "Пользователь удален" })
    );

    let (status, body) = app.json(Method::GET, &format!("/users/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, not_found());

    let (status, body) = app
        .json(Method::DELETE, &format!("/users/{id}"), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, not_found());
}

#[tokio::test]
async fn missing_ids_are_not_found_for_every_operation() {
    let app = TestApp::new(Variant::Persistent).await;

    let (status, body) = app.json(Method::GET, "/users/4242", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, not_found());

    let (status, body) = app
        .json(Method::PATCH, "/users/4242", Some(json!({ "name": "ghost" })))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, not_found());

    let (status, body) = app.json(Method::DELETE, "/users/4242", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, not_found());
}

#[tokio::test]
async fn list_applies_skip_and_limit() {
    let app = TestApp::new(Variant::Persistent).await;
    for name in ["a", "b", "c", "d", "e"] {
        create(&app, name).await;
    }

    let (status, body) = app.json(Method::GET, "/users/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().expect("array").len(), 5);

    let (status, body) = app.json(Method::GET, "/users/?skip=1&limit=2", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .expect("array")
        .iter()
        .map(|user| user["name"].as_str().expect("name"))
        .collect();
    assert_eq!(names, ["b", "c"]);

    let (_, body) = app.json(Method::GET, "/users/?skip=10", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn list_ends_with_two_creates() {
    let app = TestApp::new(Variant::Persistent).await;
    let (_, before) = app.json(Method::GET, "/users/", None).await;
    let before = before.as_array().expect("array").len();

    create(&app, "x").await;
    create(&app, "y").await;

    let (_, after) = app.json(Method::GET, "/users/", None).await;
    let after = after.as_array().expect("array");
    assert_eq!(after.len(), before + 2);
    assert_eq!(after[after.len() - 2]["name"], "x");
    assert_eq!(after[after.len() - 1]["name"], "y");
}

#[tokio::test]
async fn invalid_input_is_rejected() {
    let app = TestApp::new(Variant::Persistent).await;

    let (status, _) = app.request(Method::GET, "/users/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.request(Method::GET, "/users/?skip=-1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .request(Method::POST, "/users/", Some(json!({})))
        .await;
    assert!(status.is_client_error());

    let (_, body) = app.json(Method::GET, "/users/", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn data_survives_reopening_the_store() {
    let app = TestApp::new(Variant::Persistent).await;
    let id = create(&app, "durable").await["id"].as_i64().expect("id");

    app.application.shutdown().await.expect("shutdown");
    let reopened = app.reopen().await;

    let (status, body) = reopened
        .json(Method::GET, &format!("/users/{id}"), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "durable");
}

#[tokio::test]
async fn oversized_skip_and_limit_are_capped() {
    let app = TestApp::new(Variant::Persistent).await;
    create(&app, "a").await;

    let (status, body) = app
        .json(Method::GET, "/users/?skip=9223372036854775808", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = app
        .json(Method::GET, "/users/?limit=18446744073709551615", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().expect("array").len(), 1);

    let (status, body) = app
        .json(Method::GET, "/users/?limit=9223372036854775807", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["name"], "a");
}

#[tokio::test]
async fn ids_beyond_32_bits_are_not_found() {
    let app = TestApp::new(Variant::Persistent).await;
    let uri = "/users/2147483648";

    let (status, body) = app.json(Method::GET, uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, not_found());

    let (status, body) = app
        .json(Method::PATCH, uri, Some(json!({ "name": "ghost" })))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, not_found());

    let (status, body) = app.json(Method::DELETE, uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, not_found());
}

#[tokio::test]
async fn collection_is_served_without_trailing_slash() {
    let app = TestApp::new(Variant::Persistent).await;

    let (status, body) = app
        .json(Method::POST, "/users", Some(json!({ "name": "ada" })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "ada");

    let (status, body) = app.json(Method::GET, "/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().expect("array").len(), 1);
}
