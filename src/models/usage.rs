//! Equipment usage (checkout / return) history and integrity verification types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::enums::StaffRole;

/// Staff member embedded in a usage record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StaffMember {
    pub name: String,
    pub department: String,
    pub role: StaffRole,
}

impl StaffMember {
    /// Text searched by the free-text filter: "{name} {department} {role}"
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.name, self.department, self.role)
    }
}

/// One checkout of a device, anchored to a ledger transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UsageRecord {
    pub id: String,
    pub equipment_id: String,
    pub equipment_name: String,
    pub user: StaffMember,
    /// "YYYY-MM-DD HH:mm:ss"
    pub rented_at: String,
    /// None while the device is still checked out
    pub returned_at: Option<String>,
    /// Ledger transaction index
    pub tx_index: u64,
    pub calculated_hash: String,
    pub blockchain_hash: String,
    pub verified: bool,
}

impl UsageRecord {
    pub fn is_checked_out(&self) -> bool {
        self.returned_at.is_none()
    }

    pub fn hashes_match(&self) -> bool {
        self.calculated_hash == self.blockchain_hash
    }
}

/// Usage history search parameters
#[derive(Debug, Default, Clone, Deserialize, IntoParams, ToSchema)]
pub struct UsageQuery {
    /// Free text matched against equipment name, equipment id and user
    pub q: Option<String>,
    /// Staff department (exact match), or ALL
    pub department: Option<String>,
    /// ALL, VERIFIED or FAILED
    pub status: Option<String>,
}

/// Verification statistics over the whole usage history
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerificationStats {
    pub total: usize,
    pub verified_count: usize,
    pub failed_count: usize,
    /// Percentage rounded to one decimal place; 0.0 for an empty history
    pub verification_rate: f64,
}

/// Phase of a re-verification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum VerifyState {
    Idle,
    Verifying,
    Completed,
}

/// Re-verification state of a single usage record
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyStatus {
    pub record_id: String,
    pub state: VerifyState,
    /// Outcome of the last completed check
    pub verified: Option<bool>,
    pub checked_at: Option<DateTime<Utc>>,
}

impl VerifyStatus {
    pub fn idle(record_id: &str) -> Self {
        Self {
            record_id: record_id.to_string(),
            state: VerifyState::Idle,
            verified: None,
            checked_at: None,
        }
    }

    pub fn verifying(record_id: &str) -> Self {
        Self {
            state: VerifyState::Verifying,
            ..Self::idle(record_id)
        }
    }

    pub fn completed(record_id: &str, verified: bool, checked_at: DateTime<Utc>) -> Self {
        Self {
            record_id: record_id.to_string(),
            state: VerifyState::Completed,
            verified: Some(verified),
            checked_at: Some(checked_at),
        }
    }
}
