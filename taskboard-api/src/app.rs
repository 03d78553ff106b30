//! Application state and router builder
//!
//! This module defines the shared application state and provides
//! a function to build the Axum router with all routes and middleware.
//!
//! # Example
//!
//! ```no_run
//! use taskboard_api::{app::AppState, config::Config};
//! use taskboard_shared::db::pool::create_pool;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = Config::from_env()?;
//! let pool = create_pool(config.pool_config()).await?;
//! let state = AppState::new(pool, config);
//! let app = taskboard_api::app::build_router(state);
//! # Ok(())
//! # }
//! ```

use crate::config::Config;
use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use sqlx::AnyPool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// Uses Arc internally for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: AnyPool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: AnyPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── GET    /                      # Welcome message
/// ├── GET    /health                # Health check
/// ├── /projects/
/// │   ├── POST   /                  # Create project
/// │   ├── GET    /?local_kw=        # List / filter projects
/// │   ├── GET    /:id               # Get project
/// │   ├── PUT    /:id               # Replace project
/// │   ├── DELETE /:id               # Delete project
/// │   └── GET    /:id/tasks         # Tasks of a project
/// └── /tasks/
///     ├── POST   /                  # Create task
///     ├── GET    /                  # List tasks
///     ├── GET    /:id               # Get task
///     ├── PUT    /:id               # Replace task
///     └── DELETE /:id               # Delete task
/// ```
///
/// Collection routes answer both with and without the trailing slash.
///
/// # Middleware Stack
///
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer)
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let root_routes = Router::new()
        .route("/", get(routes::root::welcome))
        .route("/health", get(routes::health::health_check));

    let project_routes = Router::new()
        .route(
            "/projects",
            get(routes::projects::list_projects).post(routes::projects::create_project),
        )
        .route(
            "/projects/",
            get(routes::projects::list_projects).post(routes::projects::create_project),
        )
        .route(
            "/projects/:id",
            get(routes::projects::get_project)
                .put(routes::projects::update_project)
                .delete(routes::projects::delete_project),
        );

    let task_routes = Router::new()
        .route(
            "/tasks",
            get(routes::tasks::list_tasks).post(routes::tasks::create_task),
        )
        .route(
            "/tasks/",
            get(routes::tasks::list_tasks).post(routes::tasks::create_task),
        )
        .route(
            "/tasks/:id",
            get(routes::tasks::get_task)
                .put(routes::tasks::update_task)
                .delete(routes::tasks::delete_task),
        )
        .route(
            "/projects/:id/tasks",
            get(routes::tasks::list_project_tasks),
        );

    let cors = build_cors(&state.config);

    Router::new()
        .merge(root_routes)
        .merge(project_routes)
        .merge(task_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}

/// Configures CORS from the allowed origin list
fn build_cors(config: &Config) -> CorsLayer {
    if config.allows_any_origin() {
        // Development mode: permissive CORS
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .api
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(std::time::Duration::from_secs(3600))
}
