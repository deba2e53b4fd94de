use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{ChatReply, Mode},
    services::formatter::welcome_message,
};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub text: String,
    /// Falls back to the persisted mode when omitted
    #[serde(default)]
    pub mode: Option<Mode>,
}

#[derive(Debug, Deserialize)]
pub struct SetModeRequest {
    pub mode: Mode,
}

#[derive(Debug, Serialize)]
pub struct ModeResponse {
    pub mode: Mode,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub welcome: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub mode: Mode,
    pub message: String,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Run one chat query through the pipeline for its mode
pub async fn chat(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<ChatRequest>,
) -> AppResult<Json<ChatReply>> {
    let mode = match request.mode {
        Some(mode) => mode,
        None => state.mode_store.load().await?,
    };

    tracing::info!(
        request_id = %request_id,
        mode = ?mode,
        "Processing chat query"
    );

    let reply = state
        .recommendations
        .submit_query(&request.text, mode)
        .await?;

    tracing::info!(
        request_id = %request_id,
        kind = ?reply.kind,
        results = reply.recommendations.len(),
        "Chat query answered"
    );

    Ok(Json(reply))
}

/// Get the persisted mode
pub async fn get_mode(State(state): State<AppState>) -> AppResult<Json<ModeResponse>> {
    let mode = state.mode_store.load().await?;
    Ok(Json(ModeResponse {
        mode,
        label: mode.label(),
        welcome: None,
    }))
}

/// Toggle the mode; the chat restarts with the new mode's welcome message
pub async fn set_mode(
    State(state): State<AppState>,
    Json(request): Json<SetModeRequest>,
) -> AppResult<Json<ModeResponse>> {
    state.mode_store.save(request.mode).await?;
    Ok(Json(ModeResponse {
        mode: request.mode,
        label: request.mode.label(),
        welcome: Some(welcome_message(request.mode)),
    }))
}

/// Welcome message for the persisted mode
pub async fn welcome(State(state): State<AppState>) -> AppResult<Json<WelcomeResponse>> {
    let mode = state.mode_store.load().await?;
    Ok(Json(WelcomeResponse {
        mode,
        message: welcome_message(mode),
    }))
}
