//! RFID reader and tag registration endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        registry::{CreateReader, CreateTag, TagQuery},
        Reader, Tag,
    },
    AppState,
};

/// Register a reader
#[utoipa::path(
    post,
    path = "/readers",
    tag = "registry",
    request_body = CreateReader,
    responses(
        (status = 201, description = "Reader registered", body = Reader),
        (status = 400, description = "Missing field or malformed body", body = crate::error::ErrorResponse),
        (status = 409, description = "Reader id already registered", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_reader(
    State(state): State<AppState>,
    payload: Result<Json<CreateReader>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Reader>)> {
    let Json(data) = payload?;
    let reader = state.services.registry.create_reader(&data).await?;
    Ok((StatusCode::CREATED, Json(reader)))
}

/// List readers
#[utoipa::path(
    get,
    path = "/readers",
    tag = "registry",
    responses(
        (status = 200, description = "Readers ordered by id", body = Vec<Reader>)
    )
)]
pub async fn list_readers(State(state): State<AppState>) -> Json<Vec<Reader>> {
    Json(state.services.registry.list_readers().await)
}

/// Get a reader and the room it covers
#[utoipa::path(
    get,
    path = "/readers/{id}",
    tag = "registry",
    params(("id" = String, Path, description = "Reader ID")),
    responses(
        (status = 200, description = "Reader", body = Reader),
        (status = 404, description = "Reader not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_reader(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Reader>> {
    let reader = state.services.registry.get_reader(&id).await?;
    Ok(Json(reader))
}

/// Register an equipment tag
#[utoipa::path(
    post,
    path = "/tags",
    tag = "registry",
    request_body = CreateTag,
    responses(
        (status = 201, description = "Tag registered", body = Tag),
        (status = 400, description = "Missing field or malformed body", body = crate::error::ErrorResponse),
        (status = 409, description = "Tag id or serial number already registered", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_tag(
    State(state): State<AppState>,
    payload: Result<Json<CreateTag>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Tag>)> {
    let Json(data) = payload?;
    let tag = state.services.registry.create_tag(data).await?;
    Ok((StatusCode::CREATED, Json(tag)))
}

/// Search equipment tags
#[utoipa::path(
    get,
    path = "/tags",
    tag = "registry",
    params(TagQuery),
    responses(
        (status = 200, description = "Up to 100 tags, newest first", body = Vec<Tag>)
    )
)]
pub async fn list_tags(
    State(state): State<AppState>,
    Query(query): Query<TagQuery>,
) -> Json<Vec<Tag>> {
    Json(state.services.registry.search_tags(query.q.as_deref()).await)
}
