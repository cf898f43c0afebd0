//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{equipment, health, registry, usage};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "MedTrack API",
        version = "0.1.0",
        description = "Medical equipment locator and usage integrity verification REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Equipment
        equipment::list_equipment,
        equipment::get_filter_options,
        equipment::get_floor_plan,
        equipment::get_summary,
        equipment::get_equipment,
        // Usage
        usage::list_usage,
        usage::list_departments,
        usage::get_stats,
        usage::get_usage,
        // Verification
        usage::start_verification,
        usage::get_verification,
        usage::cancel_verification,
        usage::list_verifying,
        usage::retain_verifications,
        // Registry
        registry::create_reader,
        registry::list_readers,
        registry::get_reader,
        registry::create_tag,
        registry::list_tags,
    ),
    components(
        schemas(
            // Equipment
            crate::models::equipment::EquipmentRecord,
            crate::models::equipment::EquipmentFilterOptions,
            crate::models::equipment::WardGroup,
            crate::models::equipment::EquipmentSummary,
            crate::models::enums::EquipmentStatus,
            crate::models::enums::EquipmentType,
            crate::models::enums::BatteryLevel,
            // Usage
            crate::models::usage::UsageRecord,
            crate::models::usage::StaffMember,
            crate::models::enums::StaffRole,
            crate::models::usage::VerificationStats,
            crate::models::usage::VerifyStatus,
            crate::models::usage::VerifyState,
            usage::RetainRequest,
            usage::RetainResponse,
            // Registry
            crate::models::registry::Reader,
            crate::models::registry::CreateReader,
            crate::models::registry::Tag,
            crate::models::registry::CreateTag,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "equipment", description = "Equipment locator"),
        (name = "usage", description = "Equipment usage history"),
        (name = "verification", description = "Ledger integrity re-verification"),
        (name = "registry", description = "RFID reader and tag registration")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
