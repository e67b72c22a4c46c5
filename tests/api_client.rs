use axum::{
    Json, Router,
    extract::Query,
    http::StatusCode,
    routing::{get, post},
};
use inventory_builder::{ApiClient, ApiError, Style, compose_request};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

async fn serve(router: Router) -> ApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    ApiClient::new(format!("http://{addr}/")).unwrap()
}

#[tokio::test]
async fn test_list_roles_sends_invokable_flag() {
    let seen = Arc::new(Mutex::new(None));
    let recorded = seen.clone();
    let client = serve(Router::new().route(
        "/roles",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let recorded = recorded.clone();
            async move {
                *recorded.lock().unwrap() = params.get("invokable_only").cloned();
                Json(json!({"count": 2, "items": ["web-app-gitea", "svc-db-postgres"]}))
            }
        }),
    ))
    .await;

    let roles = client.list_roles(true).await.unwrap();

    assert_eq!(roles.items, vec!["web-app-gitea", "svc-db-postgres"]);
    assert_eq!(roles.count, Some(2));
    assert_eq!(seen.lock().unwrap().as_deref(), Some("true"));
}

#[tokio::test]
async fn test_list_roles_without_items_is_empty() {
    let client = serve(Router::new().route("/roles", get(|| async { Json(json!({})) }))).await;

    let roles = client.list_roles(true).await.unwrap();

    assert!(roles.items.is_empty());
    assert_eq!(roles.count, None);
}

#[tokio::test]
async fn test_list_roles_with_null_items_is_empty() {
    let client = serve(Router::new().route(
        "/roles",
        get(|| async { Json(json!({"count": 0, "items": null})) }),
    ))
    .await;

    let roles = client.list_roles(true).await.unwrap();

    assert!(roles.items.is_empty());
    assert_eq!(roles.count, Some(0));
}

#[tokio::test]
async fn test_generate_inventory_posts_composed_body() {
    let bodies = Arc::new(Mutex::new(Vec::new()));
    let recorded = bodies.clone();
    let client = serve(Router::new().route(
        "/generate/inventory",
        post(move |Json(body): Json<Value>| {
            let recorded = recorded.clone();
            async move {
                recorded.lock().unwrap().push(body);
                Json(json!({"filename": "inventory.yml", "content": "all: {}\n"}))
            }
        }),
    ))
    .await;

    let request = compose_request("node1", Style::Hostvars, " web-app-x , ,svc-db-y,");
    let result = client.generate_inventory(&request).await.unwrap();

    assert_eq!(result.filename, "inventory.yml");
    assert_eq!(result.content, "all: {}\n");
    assert_eq!(
        *bodies.lock().unwrap(),
        vec![json!({"host": "node1", "style": "hostvars", "ignore": ["web-app-x", "svc-db-y"]})]
    );
}

#[tokio::test]
async fn test_error_status_carries_detail() {
    let client = serve(Router::new().route(
        "/generate/inventory",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"detail": "unknown style"})),
            )
        }),
    ))
    .await;

    let request = compose_request("localhost", Style::Group, "");
    let err = client.generate_inventory(&request).await.unwrap_err();

    match err {
        ApiError::Status { status, detail } => {
            assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
            assert_eq!(detail, "unknown style");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_health() {
    let client = serve(Router::new().route(
        "/health",
        get(|| async { Json(json!({"status": "ok"})) }),
    ))
    .await;

    let health = client.health().await.unwrap();
    assert!(health.is_ok());
}

#[tokio::test]
async fn test_unreachable_backend_is_http_error() {
    let client = ApiClient::new("http://127.0.0.1:9").unwrap();
    let err = client.list_roles(true).await.unwrap_err();
    assert!(matches!(err, ApiError::Http(_)));
}
