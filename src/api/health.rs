//! Health check endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, AppState};

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Current status of the service
    pub status: String,
    /// Version of the service
    pub version: String,
    /// Configured data source (readiness only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<String>,
    /// Configured re-verification delay in milliseconds (readiness only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_delay_ms: Option<u64>,
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data_source: None,
        verification_delay_ms: None,
    })
}

/// Readiness check endpoint (checks the data source can be read)
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Service is ready", body = HealthResponse),
        (status = 503, description = "Data source unavailable", body = crate::error::ErrorResponse)
    )
)]
pub async fn readiness_check(State(state): State<AppState>) -> AppResult<Json<HealthResponse>> {
    state.services.equipment.summary().await?;
    state.services.usage.stats().await?;
    Ok(Json(HealthResponse {
        status: "ready".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data_source: Some(state.config.data.source_name().to_string()),
        verification_delay_ms: Some(state.config.verification.delay_ms),
    }))
}
