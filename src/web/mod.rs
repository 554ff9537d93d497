//! Web API module.
//!
//! Exposes the generation pipeline over HTTP for a browser-based frontend.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `POST /api/generate` - Generate a new app, or modify an existing one
//!   when `isModification` is set and an `existing` snapshot is supplied

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, routing::post, Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::completion::{CompletionClient, OpenAiClient};
use crate::config::Config;
use crate::generator::{GenerationOutcome, Generator};
use crate::models::{CustomizationRecord, GeneratedApp};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    /// Generation orchestrator (blocking; handlers run it off the runtime).
    generator: Arc<Generator>,
}

impl AppState {
    /// Creates the state, wiring the completion client from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the completion client cannot be constructed.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = OpenAiClient::from_env(
            config.completion.settings(),
            &config.completion.api_key_env,
        )?
        .map(|c| Box::new(c) as Box<dyn CompletionClient>);

        Ok(Self {
            generator: Arc::new(Generator::new(client)),
        })
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Generation request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Natural-language description or change request.
    pub user_input: String,
    /// When true (and `existing` is present), route through the
    /// modification engine instead of generating from scratch.
    #[serde(default)]
    pub is_modification: bool,
    /// Snapshot of the app to modify.
    #[serde(default)]
    pub existing: Option<GeneratedApp>,
}

/// Generation response body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    /// Derived app identifier.
    pub app_name: String,
    /// Template display name (e.g., "Restaurant App").
    pub template: String,
    /// Capability labels in display order.
    pub features: Vec<String>,
    /// Complete source files keyed by relative path.
    pub files: BTreeMap<String, String>,
    /// Identity/theme record the files were rendered with.
    pub customizations: CustomizationRecord,
    /// Generation timestamp.
    pub timestamp: DateTime<Utc>,
    /// Set when the response is the result of a modification.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_modification: bool,
    /// One-sentence modification summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modification_summary: Option<String>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

// ============================================================================
// Router
// ============================================================================

/// Creates the API router.
///
/// The permissive CORS policy is intended for local development; the server
/// is designed to run on the user's machine alongside the frontend.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/generate", post(generate))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Starts the web server.
///
/// # Errors
///
/// Returns an error if the state cannot be built or the listener fails.
pub async fn run_server(config: Config, addr: SocketAddr) -> anyhow::Result<()> {
    let state = AppState::new(&config)?;
    let app = create_router(state);

    info!("Starting app generator web server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Handlers
// ============================================================================

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, (StatusCode, Json<ErrorResponse>)> {
    if request.user_input.trim().is_empty() {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "User input is required",
        ));
    }

    let generator = Arc::clone(&state.generator);
    let user_input = request.user_input;
    let existing = if request.is_modification {
        request.existing
    } else {
        None
    };

    // The orchestrator blocks on template rendering and, when configured,
    // on the completion service.
    let existing_for_task = existing.clone();
    let outcome = tokio::task::spawn_blocking(move || {
        generator.process(&user_input, existing_for_task.as_ref())
    })
    .await
    .map_err(|e| {
        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Generation task failed: {e}"),
        )
    })?;

    match outcome {
        Ok(GenerationOutcome::New(app)) => Ok(Json(GenerateResponse {
            app_name: app.app_name,
            template: app.template_name,
            features: app.features,
            files: app.files,
            customizations: app.customizations,
            timestamp: app.generated_at,
            is_modification: false,
            modification_summary: None,
        })),
        Ok(GenerationOutcome::Modified(result)) => {
            // Modified is only produced when an existing snapshot was
            // supplied; its identity fields carry over unchanged.
            let Some(existing) = existing else {
                return Err(error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Modification outcome without an existing app",
                ));
            };
            Ok(Json(GenerateResponse {
                app_name: existing.app_name,
                template: existing.template_name,
                features: existing.features,
                files: result.files,
                customizations: result.customizations,
                timestamp: existing.generated_at,
                is_modification: true,
                modification_summary: Some(result.summary),
            }))
        }
        Err(error) => Err(error_response(
            StatusCode::BAD_REQUEST,
            format!("Failed to generate app: {error:#}"),
        )),
    }
}

fn error_response(
    status: StatusCode,
    message: impl Into<String>,
) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}
