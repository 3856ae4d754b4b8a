mod common;

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use hexlink::routes::app_router;
use serde_json::json;
use sqlx::SqlitePool;

fn server(pool: SqlitePool) -> TestServer {
    let app = app_router(common::create_test_state(pool));

    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

#[sqlx::test]
async fn test_trailing_slash_is_trimmed(pool: SqlitePool) {
    let server = server(pool);

    let response = server
        .post("/api/urls/")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let response = server.get("/api/urls/").add_query_param("url", "1").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["content"]["long_url"],
        "https://example.com"
    );
}

#[sqlx::test]
async fn test_static_routes_take_precedence_over_codes(pool: SqlitePool) {
    let server = server(pool);

    let health = server.get("/health").await;
    health.assert_status_ok();
    assert_eq!(health.json::<serde_json::Value>()["status"], "healthy");

    for path in ["/", "/index", "/submit"] {
        let response = server.get(path).await;

        response.assert_status_ok();
        assert!(response.text().contains(r#"name="shorten_url""#));
    }
}

#[sqlx::test]
async fn test_shorten_then_follow(pool: SqlitePool) {
    let server = server(pool);

    server
        .post("/api/urls")
        .json(&json!({ "url": "https://www.rust-lang.org" }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let response = server.get("/1").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://www.rust-lang.org");

    let response = server.get("/2/").await;

    assert_eq!(response.status_code(), 404);
    assert_eq!(response.json::<serde_json::Value>()["response"], 404);
}
