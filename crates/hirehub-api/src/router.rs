//! Route definitions for the HireHub HTTP API.
//!
//! All API routes are mounted under `/api`; uploaded resumes are served
//! under `/uploads`. The router receives `AppState` and passes it to all
//! handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use hirehub_core::config::app::CorsConfig;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Slack on top of the upload cap for multipart boundaries and headers,
/// so an oversize file is rejected by the policy check (400) rather than
/// the transport limit.
const BODY_LIMIT_SLACK_BYTES: usize = 64 * 1024;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let body_limit =
        state.config.storage.max_upload_size_bytes as usize + BODY_LIMIT_SLACK_BYTES;

    let api_routes = Router::new()
        .merge(job_routes())
        .merge(application_routes())
        .merge(upload_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .route("/uploads/{filename}", get(handlers::upload::serve_resume))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Job listing CRUD and per-job application listing
fn job_routes() -> Router<AppState> {
    Router::new()
        .route("/jobs", get(handlers::job::list_jobs))
        .route("/jobs", post(handlers::job::create_job))
        .route("/jobs/{id}", get(handlers::job::get_job))
        .route("/jobs/{id}", delete(handlers::job::delete_job))
        .route(
            "/jobs/{job_id}/applications",
            get(handlers::job::list_job_applications),
        )
}

/// Application submission and status updates
fn application_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/applications",
            get(handlers::application::list_applications),
        )
        .route(
            "/applications",
            post(handlers::application::create_application),
        )
        .route(
            "/applications/{id}",
            get(handlers::application::get_application),
        )
        .route(
            "/applications/{id}",
            put(handlers::application::update_application_status),
        )
}

/// Resume upload
fn upload_routes() -> Router<AppState> {
    Router::new().route("/upload/resume", post(handlers::upload::upload_resume))
}

/// Health check endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Build CORS layer from configuration
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    use axum::http::{HeaderName, HeaderValue, Method};
    use tower_http::cors::Any;

    let mut cors = CorsLayer::new();

    if config.allowed_origins.iter().any(|o| o == "*") {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if config.allowed_headers.iter().any(|h| h == "*") {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<HeaderName> = config
            .allowed_headers
            .iter()
            .filter_map(|h| h.parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}
