//! Usage history and integrity verification endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{usage::UsageQuery, UsageRecord, VerificationStats, VerifyStatus},
    AppState,
};

/// Records still displayed by the client
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RetainRequest {
    pub visible_ids: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RetainResponse {
    pub cancelled: usize,
}

/// Search usage history
#[utoipa::path(
    get,
    path = "/usage",
    tag = "usage",
    params(UsageQuery),
    responses(
        (status = 200, description = "Matching usage records, history order", body = Vec<UsageRecord>)
    )
)]
pub async fn list_usage(
    State(state): State<AppState>,
    Query(query): Query<UsageQuery>,
) -> AppResult<Json<Vec<UsageRecord>>> {
    let records = state.services.usage.search(&query).await?;
    Ok(Json(records))
}

/// Staff departments present in the history
#[utoipa::path(
    get,
    path = "/usage/departments",
    tag = "usage",
    responses(
        (status = 200, description = "ALL followed by departments, first-seen order", body = Vec<String>)
    )
)]
pub async fn list_departments(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    let departments = state.services.usage.departments().await?;
    Ok(Json(departments))
}

/// Verification statistics over the whole history
#[utoipa::path(
    get,
    path = "/usage/stats",
    tag = "usage",
    responses(
        (status = 200, description = "Verification statistics", body = VerificationStats)
    )
)]
pub async fn get_stats(State(state): State<AppState>) -> AppResult<Json<VerificationStats>> {
    let stats = state.services.usage.stats().await?;
    Ok(Json(stats))
}

/// Get a usage record by ID
#[utoipa::path(
    get,
    path = "/usage/{id}",
    tag = "usage",
    params(("id" = String, Path, description = "Usage record ID")),
    responses(
        (status = 200, description = "Usage record", body = UsageRecord),
        (status = 404, description = "Unknown record", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_usage(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UsageRecord>> {
    let record = state.services.usage.get_by_id(&id).await?;
    Ok(Json(record))
}

/// Start re-verification of a usage record
#[utoipa::path(
    post,
    path = "/usage/{id}/verify",
    tag = "verification",
    params(("id" = String, Path, description = "Usage record ID")),
    responses(
        (status = 202, description = "Verification scheduled", body = VerifyStatus),
        (status = 404, description = "Unknown record", body = crate::error::ErrorResponse)
    )
)]
pub async fn start_verification(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<(StatusCode, Json<VerifyStatus>)> {
    let status = state.services.verification.start(&id).await?;
    Ok((StatusCode::ACCEPTED, Json(status)))
}

/// Re-verification state of a usage record
#[utoipa::path(
    get,
    path = "/usage/{id}/verify",
    tag = "verification",
    params(("id" = String, Path, description = "Usage record ID")),
    responses(
        (status = 200, description = "Verification state", body = VerifyStatus),
        (status = 404, description = "Unknown record", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_verification(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<VerifyStatus>> {
    let status = state.services.verification.status(&id).await?;
    Ok(Json(status))
}

/// Cancel a pending re-verification
#[utoipa::path(
    delete,
    path = "/usage/{id}/verify",
    tag = "verification",
    params(("id" = String, Path, description = "Usage record ID")),
    responses(
        (status = 204, description = "No verification pending"),
        (status = 404, description = "Unknown record", body = crate::error::ErrorResponse)
    )
)]
pub async fn cancel_verification(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.services.usage.get_by_id(&id).await?;
    state.services.verification.cancel(&id).await;
    Ok(StatusCode::NO_CONTENT)
}

/// Cancel pending re-verifications of records the client no longer shows
#[utoipa::path(
    post,
    path = "/verifications/retain",
    tag = "verification",
    request_body = RetainRequest,
    responses(
        (status = 200, description = "Number of cancelled verifications", body = RetainResponse),
        (status = 400, description = "Malformed request body", body = crate::error::ErrorResponse)
    )
)]
pub async fn retain_verifications(
    State(state): State<AppState>,
    payload: Result<Json<RetainRequest>, JsonRejection>,
) -> AppResult<Json<RetainResponse>> {
    let Json(body) = payload?;
    let cancelled = state.services.verification.retain(&body.visible_ids).await;
    Ok(Json(RetainResponse { cancelled }))
}

/// Records with a pending re-verification
#[utoipa::path(
    get,
    path = "/verifications",
    tag = "verification",
    responses(
        (status = 200, description = "Record ids being verified, sorted", body = Vec<String>)
    )
)]
pub async fn list_verifying(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.services.verification.verifying_ids().await)
}
