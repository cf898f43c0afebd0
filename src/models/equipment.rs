//! Equipment model

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::enums::{BatteryLevel, EquipmentStatus};

/// Tracked medical device and its last known position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentRecord {
    /// Asset tag (e.g. "VEN-102")
    pub id: String,
    pub name: String,
    /// Category label (see `EquipmentType`); kept as the raw label
    #[serde(rename = "type")]
    pub equipment_type: String,
    /// Room or area where the device was last seen
    pub location: String,
    pub department: String,
    pub status: EquipmentStatus,
    /// Human readable age of the last position fix ("2분 전")
    pub last_update: String,
    /// Battery charge, 0-100
    pub battery: u8,
}

impl EquipmentRecord {
    pub fn battery_level(&self) -> BatteryLevel {
        BatteryLevel::from(self.battery)
    }

    pub fn is_in_use(&self) -> bool {
        self.status == EquipmentStatus::InUse
    }
}

/// Catalog search parameters
#[derive(Debug, Default, Clone, Deserialize, IntoParams, ToSchema)]
pub struct EquipmentQuery {
    /// Free text matched against name, id and location
    pub q: Option<String>,
    /// Equipment type label, or ALL
    #[serde(rename = "type")]
    pub equipment_type: Option<String>,
    /// Department (substring match), or ALL
    pub department: Option<String>,
}

/// Filter vocabularies offered to the locator screen
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EquipmentFilterOptions {
    pub types: Vec<String>,
    pub departments: Vec<String>,
}

/// Devices shown in one ward of the floor plan
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct WardGroup {
    pub department: String,
    pub equipment: Vec<EquipmentRecord>,
}

/// Catalog-wide counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentSummary {
    pub total: usize,
    pub in_use: usize,
    pub idle: usize,
    pub low_battery: usize,
}
