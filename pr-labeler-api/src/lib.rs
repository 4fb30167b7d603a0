//! PR Labeler API Server
//!
//! REST API for evaluating label rules against pull requests and
//! dispatching repository events to workflows.

pub mod error;
pub mod handlers;
pub mod settings;
pub mod state;

pub use error::ApiError;
pub use settings::{ServerSettings, TriggerKind};
pub use state::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Rules
        .route("/api/rules", get(handlers::list_rules))
        .route("/api/settings", get(handlers::get_settings))
        // Evaluation
        .route("/api/evaluate", post(handlers::evaluate))
        // Events
        .route("/api/events/:event_name", post(handlers::dispatch_event))
        .route("/api/events/:event_name/plan", get(handlers::plan_event))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
