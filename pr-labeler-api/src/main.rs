//! PR Labeler - Main Application Entry Point
//!
//! Loads the labeler document once at startup and serves rule
//! evaluation and event dispatch over HTTP.

use anyhow::Context;
use pr_labeler_api::{AppState, ServerSettings};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,pr_labeler=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = ServerSettings::from_env()?;

    // An invalid document blocks startup
    let app_state = AppState::from_settings(&settings).await.with_context(|| {
        format!(
            "Invalid labeler configuration at {}",
            settings.config_path.display()
        )
    })?;

    tracing::info!(
        "Loaded {} rules and {} event bindings (CODEOWNERS: {})",
        app_state.config.rules.len(),
        app_state.config.events.len(),
        app_state.config.settings.code_owners_path
    );

    let app = pr_labeler_api::create_router(Arc::new(app_state));

    tracing::info!("Starting PR labeler server on {}", settings.bind_addr());

    let listener = tokio::net::TcpListener::bind(settings.bind_addr()).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
