use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;
use utoipa::OpenApi;

use crate::server::{
    config::ApmConfig, doc::ApiDoc, observability::ApmClient, router::router, state::AppState,
};


/// Router over an in-memory database with the bird table created.
///
/// The context must outlive the router so the database stays open.
async fn app() -> (TestContext, Router) {
    let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
    let app = app_over(&test);

    (test, app)
}

fn app_over(test: &TestContext) -> Router {
    let db = test.db().clone();
    let apm = ApmClient::new(&ApmConfig {
        app_name: "BirdsWorld".to_string(),
        license_key: String::new(),
        log_level: "info".to_string(),
    });

    router(ApiDoc::openapi()).with_state(AppState::new(db, apm))
}

/// Sends a request and returns the status with the decoded JSON body.
///
/// Bodies that are empty or not JSON decode to `Value::Null`.
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => request
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    send_request(app, request).await
}

async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}

fn robin() -> Value {
    json!({ "name": "Robin", "breed": "Passerine", "age": 1 })
}
