//! RFID reader and tag registration models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

fn default_active() -> bool {
    true
}

/// Fixed RFID reader installed in a room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Reader {
    pub reader_id: String,
    /// Room or zone the reader covers
    pub location_name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Register reader request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateReader {
    pub reader_id: String,
    pub location_name: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// RFID tag attached to a piece of equipment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Tag {
    pub tag_id: String,
    pub equipment_name: String,
    pub equipment_type: String,
    pub serial_number: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Register tag request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateTag {
    pub tag_id: String,
    pub equipment_name: String,
    pub equipment_type: String,
    pub serial_number: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// Tag search parameters
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct TagQuery {
    /// Case-insensitive substring of the equipment name or tag id
    pub q: Option<String>,
}
