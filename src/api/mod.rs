//! API handlers for MedTrack REST endpoints

pub mod equipment;
pub mod health;
pub mod openapi;
pub mod registry;
pub mod usage;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Equipment locator
        .route("/equipment", get(equipment::list_equipment))
        .route("/equipment/filters", get(equipment::get_filter_options))
        .route("/equipment/floor-plan", get(equipment::get_floor_plan))
        .route("/equipment/summary", get(equipment::get_summary))
        .route("/equipment/:id", get(equipment::get_equipment))
        // Usage history
        .route("/usage", get(usage::list_usage))
        .route("/usage/departments", get(usage::list_departments))
        .route("/usage/stats", get(usage::get_stats))
        .route("/usage/:id", get(usage::get_usage))
        // Integrity verification
        .route(
            "/usage/:id/verify",
            post(usage::start_verification)
                .get(usage::get_verification)
                .delete(usage::cancel_verification),
        )
        .route("/verifications", get(usage::list_verifying))
        .route("/verifications/retain", post(usage::retain_verifications))
        // Reader and tag registry
        .route(
            "/readers",
            get(registry::list_readers).post(registry::create_reader),
        )
        .route("/readers/:id", get(registry::get_reader))
        .route("/tags", get(registry::list_tags).post(registry::create_tag))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
