use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use univera::directory::{directory_router, DirectoryService, InMemoryDirectory, ROLE_HEADER};

fn app() -> Router {
    let service = Arc::new(DirectoryService::new(Arc::new(InMemoryDirectory::seeded())));
    directory_router(service)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("router responds");
    let status = response.status();
    let body = to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("json body")
    };
    (status, value)
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("request")
}

fn json_request(method: &str, uri: &str, role: Option<&str>, payload: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(role) = role {
        builder = builder.header(ROLE_HEADER, role);
    }
    builder
        .body(Body::from(payload.to_string()))
        .expect("request")
}

#[tokio::test]
async fn lists_colleges_matching_query() {
    let app = app();
    let (status, body) = send(&app, get("/api/v1/colleges?city=Mumbai")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 4);
    assert_eq!(body["shown"], 1);
    assert_eq!(body["summary"], "Showing 1 of 4 colleges");
    assert_eq!(body["results"][0]["feesLakhs"], "2.5");
    assert_eq!(body["results"][0]["courses"]["overflowLabel"], "+2 more");
}

#[tokio::test]
async fn unparseable_bounds_return_empty_results() {
    let app = app();
    let (status, body) = send(&app, get("/api/v1/colleges?min_fees=cheap")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["shown"], 0);
    assert_eq!(body["total"], 4);

    let (status, body) = send(&app, get("/api/v1/pgs?budget=luxury")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["shown"], 0);
}

#[tokio::test]
async fn pg_budget_bucket_filters_rent() {
    let app = app();
    let (status, body) = send(&app, get("/api/v1/pgs?budget=10k_15k")).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["results"]
        .as_array()
        .expect("results array")
        .iter()
        .filter_map(|card| card["name"].as_str())
        .collect();
    assert_eq!(names, vec!["Elite Boys PG", "Safe Haven Girls PG"]);
    assert_eq!(body["results"][0]["rent"], "12,000");
}

#[tokio::test]
async fn college_detail_and_missing_id() {
    let app = app();
    let (status, body) = send(&app, get("/api/v1/colleges/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["facilities"]["overflowLabel"], "+1 more");

    let (status, _) = send(&app, get("/api/v1/colleges/404")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn admin_mutations_require_admin_role() {
    let app = app();
    let payload = json!({
        "name": "Government Law College",
        "location": "Churchgate, Mumbai",
        "city": "Mumbai",
        "state": "Maharashtra",
        "type": "Law",
        "rating": 4.1,
        "fees": 60000
    });

    let (status, _) = send(
        &app,
        json_request("POST", "/api/v1/colleges", Some("user"), payload.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(
        &app,
        json_request("POST", "/api/v1/colleges", Some("admin"), payload),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_str().expect("id assigned").to_string();

    let (_, listing) = send(&app, get("/api/v1/colleges?type=Law")).await;
    assert_eq!(listing["shown"], 1);

    let (status, _) = send(
        &app,
        json_request(
            "PATCH",
            &format!("/api/v1/colleges/{id}"),
            Some("admin"),
            json!({ "fees": 65000 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, detail) = send(&app, get(&format!("/api/v1/colleges/{id}"))).await;
    assert_eq!(detail["feesLakhs"], "0.7");

    let delete = Request::delete(format!("/api/v1/colleges/{id}"))
        .header(ROLE_HEADER, "admin")
        .body(Body::empty())
        .expect("request");
    let (status, _) = send(&app, delete).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, listing) = send(&app, get("/api/v1/colleges?type=Law")).await;
    assert_eq!(listing["shown"], 0);
}

#[tokio::test]
async fn invalid_record_is_unprocessable() {
    let app = app();
    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/v1/pgs",
            Some("admin"),
            json!({ "name": "Overrated PG", "location": "Somewhere", "rating": 9.0 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("rating"));
}
