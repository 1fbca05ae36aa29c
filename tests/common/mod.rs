#![allow(dead_code)]

use std::sync::{Arc, Once};

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use serde_json::{json, Value};
use tower::ServiceExt;

use face_yoga::api::routes::create_routes;
use face_yoga::repository::InMemoryStore;

static INIT: Once = Once::new();

/// Initialize test logging
pub fn init_test_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .init();
    });
}

/// Router over a fresh, empty store
pub fn test_app() -> Router {
    init_test_logging();
    create_routes(Arc::new(InMemoryStore::new()))
}

/// Send one request through the router and decode the JSON body
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json");

    let request = match body {
        Some(body_data) => builder.body(Body::from(body_data.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json_response = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json_response)
}

/// Mock data generators
pub struct MockDataGenerator;

impl MockDataGenerator {
    pub fn user() -> Value {
        let email: String = SafeEmail().fake();
        let name: String = Name().fake();
        json!({ "email": email, "name": name })
    }

    pub fn exercise(title: &str) -> Value {
        json!({
            "title": title,
            "duration": "5 minutes",
            "target_area": "Face",
            "description": format!("{} description", title),
            "image_url": format!("https://example.com/{}.jpg", title.to_lowercase().replace(' ', "-")),
            "instructions": ["Step 1", "Step 2"]
        })
    }
}

pub struct ApiTestHelpers;

impl ApiTestHelpers {
    pub async fn create_user(app: &Router) -> String {
        let (status, body) = send(app, Method::POST, "/users", Some(MockDataGenerator::user())).await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_str().unwrap().to_string()
    }

    pub async fn create_exercise(app: &Router, title: &str) -> String {
        let (status, body) = send(app, Method::POST, "/exercises", Some(MockDataGenerator::exercise(title))).await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_str().unwrap().to_string()
    }

    pub async fn create_routine(app: &Router, user_id: &str, exercise_ids: &[&str]) -> (StatusCode, Value) {
        send(
            app,
            Method::POST,
            "/routines",
            Some(json!({ "user_id": user_id, "exercise_ids": exercise_ids })),
        )
        .await
    }
}
