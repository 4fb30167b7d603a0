//! API request handlers

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use pr_labeler_core::{DispatchResponse, EventPayload};
use serde::Deserialize;
use std::sync::Arc;

use crate::{ApiError, AppState};

// ==================== Rule Handlers ====================

/// List the loaded rules
pub async fn list_rules(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.config.rules.summaries())
}

/// Settings passed through to collaborators (e.g. the CODEOWNERS path)
pub async fn get_settings(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.config.settings.as_ref().clone())
}

// ==================== Evaluation Handler ====================

/// Evaluate the loaded rule set against a PR context
pub async fn evaluate(
    State(state): State<Arc<AppState>>,
    Json(ctx): Json<serde_json::Value>,
) -> Result<impl IntoResponse, ApiError> {
    if !ctx.is_object() {
        return Err(ApiError::BadRequest(
            "PR context must be a JSON object".to_string(),
        ));
    }

    let result = state.evaluator.evaluate_json(&state.config.rules, &ctx)?;

    tracing::info!(
        "Evaluated {} rules in {}us - labels: {:?}",
        result.rules_evaluated,
        result.evaluation_time_us,
        result.labels
    );

    Ok(Json(result))
}

// ==================== Event Handlers ====================

/// Trigger the workflows bound to an event
pub async fn dispatch_event(
    State(state): State<Arc<AppState>>,
    Path(event_name): Path<String>,
    Json(payload): Json<EventPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let workflows = state.dispatcher.dispatch(&event_name, &payload).await?;

    Ok(Json(DispatchResponse {
        event: event_name,
        workflows,
    }))
}

#[derive(Debug, Deserialize)]
pub struct PlanQuery {
    /// Comma-separated scopes
    pub packages: Option<String>,
}

/// Workflows an event would trigger, without triggering them
pub async fn plan_event(
    State(state): State<Arc<AppState>>,
    Path(event_name): Path<String>,
    Query(query): Query<PlanQuery>,
) -> impl IntoResponse {
    let payload = EventPayload::for_packages(
        query
            .packages
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty()),
    );

    let workflows = state.dispatcher.plan(&event_name, &payload);

    Json(DispatchResponse {
        event: event_name,
        workflows,
    })
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "pr-labeler"
    }))
}
