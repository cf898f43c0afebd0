//! Equipment locator endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::{
        equipment::{EquipmentFilterOptions, EquipmentQuery, EquipmentSummary},
        EquipmentRecord, WardGroup,
    },
    AppState,
};

/// Search equipment
#[utoipa::path(
    get,
    path = "/equipment",
    tag = "equipment",
    params(EquipmentQuery),
    responses(
        (status = 200, description = "Matching equipment, catalog order", body = Vec<EquipmentRecord>)
    )
)]
pub async fn list_equipment(
    State(state): State<AppState>,
    Query(query): Query<EquipmentQuery>,
) -> AppResult<Json<Vec<EquipmentRecord>>> {
    let equipment = state.services.equipment.search(&query).await?;
    Ok(Json(equipment))
}

/// Filter vocabularies (types and departments)
#[utoipa::path(
    get,
    path = "/equipment/filters",
    tag = "equipment",
    responses(
        (status = 200, description = "Filter options", body = EquipmentFilterOptions)
    )
)]
pub async fn get_filter_options(
    State(state): State<AppState>,
) -> AppResult<Json<EquipmentFilterOptions>> {
    let options = state.services.equipment.filter_options().await?;
    Ok(Json(options))
}

/// Search results grouped by ward
#[utoipa::path(
    get,
    path = "/equipment/floor-plan",
    tag = "equipment",
    params(EquipmentQuery),
    responses(
        (status = 200, description = "Ward groups", body = Vec<WardGroup>)
    )
)]
pub async fn get_floor_plan(
    State(state): State<AppState>,
    Query(query): Query<EquipmentQuery>,
) -> AppResult<Json<Vec<WardGroup>>> {
    let plan = state.services.equipment.floor_plan(&query).await?;
    Ok(Json(plan))
}

/// Catalog counters
#[utoipa::path(
    get,
    path = "/equipment/summary",
    tag = "equipment",
    responses(
        (status = 200, description = "Catalog summary", body = EquipmentSummary)
    )
)]
pub async fn get_summary(State(state): State<AppState>) -> AppResult<Json<EquipmentSummary>> {
    let summary = state.services.equipment.summary().await?;
    Ok(Json(summary))
}

/// Get equipment by ID
#[utoipa::path(
    get,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = String, Path, description = "Equipment asset tag")),
    responses(
        (status = 200, description = "Equipment details", body = EquipmentRecord),
        (status = 404, description = "Unknown equipment", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_equipment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<EquipmentRecord>> {
    let equipment = state.services.equipment.get_by_id(&id).await?;
    Ok(Json(equipment))
}
