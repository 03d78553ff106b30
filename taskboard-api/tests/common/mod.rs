//! Common test utilities for integration tests
//!
//! This module provides shared infrastructure for integration tests:
//! - A fresh in-memory SQLite database per test, with the schema applied
//! - The production router built on top of it
//! - Request helpers that decode JSON responses

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::Value;
use sqlx::AnyPool;
use taskboard_api::app::{build_router, AppState};
use taskboard_api::config::{ApiConfig, Config, DatabaseConfig};
use taskboard_shared::db::pool::{self, create_pool};
use taskboard_shared::db::schema::{ensure_schema, Backend};
use tower::ServiceExt;

/// Test context containing all necessary resources
pub struct TestContext {
    pub db: AnyPool,
    pub app: axum::Router,
}

impl TestContext {
    /// Creates a new test context with an empty database
    pub async fn new() -> anyhow::Result<Self> {
        let config = test_config();

        let db = create_pool(pool::DatabaseConfig::in_memory()).await?;
        ensure_schema(&db, Backend::Sqlite).await?;

        let state = AppState::new(db.clone(), config);
        let app = build_router(state);

        Ok(TestContext { db, app })
    }

    /// Sends a request and returns the status and decoded JSON body
    ///
    /// An empty body decodes to `Value::Null`.
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.send(request).await
    }

    /// Sends a prepared request
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                panic!("non-JSON response body: {}", String::from_utf8_lossy(&bytes))
            })
        };

        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, None).await
    }

    /// Creates a project through the API and returns its ID
    pub async fn create_project(&self, name: &str, description: Option<&str>) -> i64 {
        let (status, body) = self
            .post(
                "/projects/",
                serde_json::json!({ "name": name, "description": description }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "create project failed: {body}");
        body["id"].as_i64().unwrap()
    }

    /// Creates a task through the API and returns its ID
    pub async fn create_task(&self, name: &str, project_id: i64) -> i64 {
        let (status, body) = self
            .post(
                "/tasks/",
                serde_json::json!({ "name": name, "project_id": project_id }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "create task failed: {body}");
        body["id"].as_i64().unwrap()
    }
}

/// Configuration used by tests; the database URL is informational only
pub fn test_config() -> Config {
    Config {
        api: ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_origins: vec!["*".to_string()],
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
        },
    }
}
