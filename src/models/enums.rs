//! Shared domain vocabularies (labels match the hospital UI)

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Sentinel accepted by every filter to mean "no restriction"
pub const ALL: &str = "ALL";

/// Korean UI label for [`ALL`], accepted as an alias
pub const ALL_LABEL: &str = "전체";

/// Whether a raw filter value means "match everything". Only the empty
/// string and the two sentinels qualify; whitespace is a real value.
pub fn is_all(value: &str) -> bool {
    value.is_empty() || value == ALL || value == ALL_LABEL
}

// ---------------------------------------------------------------------------
// EquipmentType
// ---------------------------------------------------------------------------

/// Equipment category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum EquipmentType {
    #[serde(rename = "모니터링")]
    Monitoring,
    #[serde(rename = "치료")]
    Treatment,
    #[serde(rename = "응급")]
    Emergency,
    #[serde(rename = "병실")]
    Ward,
    #[serde(rename = "측정")]
    Measurement,
    #[serde(rename = "영상")]
    Imaging,
}

impl EquipmentType {
    pub const VALUES: [EquipmentType; 6] = [
        EquipmentType::Monitoring,
        EquipmentType::Treatment,
        EquipmentType::Emergency,
        EquipmentType::Ward,
        EquipmentType::Measurement,
        EquipmentType::Imaging,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EquipmentType::Monitoring => "모니터링",
            EquipmentType::Treatment => "치료",
            EquipmentType::Emergency => "응급",
            EquipmentType::Ward => "병실",
            EquipmentType::Measurement => "측정",
            EquipmentType::Imaging => "영상",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::VALUES.into_iter().find(|t| t.label() == label)
    }
}

// ---------------------------------------------------------------------------
// EquipmentStatus
// ---------------------------------------------------------------------------

/// Equipment availability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum EquipmentStatus {
    #[serde(rename = "사용중")]
    InUse,
    #[serde(rename = "대기")]
    Idle,
}

// ---------------------------------------------------------------------------
// StaffRole
// ---------------------------------------------------------------------------

/// Role of the staff member who checked out a device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum StaffRole {
    #[serde(rename = "간호사")]
    Nurse,
    #[serde(rename = "의사")]
    Doctor,
}

impl std::fmt::Display for StaffRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            StaffRole::Nurse => "간호사",
            StaffRole::Doctor => "의사",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// BatteryLevel
// ---------------------------------------------------------------------------

/// Battery charge bucket: above 70 is good, above 30 is a warning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BatteryLevel {
    Good,
    Warning,
    Low,
}

impl From<u8> for BatteryLevel {
    fn from(percent: u8) -> Self {
        if percent > 70 {
            BatteryLevel::Good
        } else if percent > 30 {
            BatteryLevel::Warning
        } else {
            BatteryLevel::Low
        }
    }
}

// ---------------------------------------------------------------------------
// VerificationFilter
// ---------------------------------------------------------------------------

/// Verification status filter.
///
/// Parsing never fails: values outside the vocabulary become `Unrecognized`,
/// which matches no record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VerificationFilter {
    #[default]
    All,
    Verified,
    Failed,
    Unrecognized(String),
}

impl VerificationFilter {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            v if is_all(v) => VerificationFilter::All,
            "VERIFIED" | "검증 성공" => VerificationFilter::Verified,
            "FAILED" | "검증 실패" => VerificationFilter::Failed,
            other => VerificationFilter::Unrecognized(other.to_string()),
        }
    }

    pub fn matches(&self, verified: bool) -> bool {
        match self {
            VerificationFilter::All => true,
            VerificationFilter::Verified => verified,
            VerificationFilter::Failed => !verified,
            VerificationFilter::Unrecognized(_) => false,
        }
    }
}
