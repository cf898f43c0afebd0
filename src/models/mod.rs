//! Data models for MedTrack

pub mod enums;
pub mod equipment;
pub mod registry;
pub mod selection;
pub mod usage;

// Re-export commonly used types
pub use enums::{BatteryLevel, EquipmentStatus, EquipmentType, StaffRole, VerificationFilter};
pub use equipment::{EquipmentRecord, WardGroup};
pub use registry::{Reader, Tag};
pub use selection::Selection;
pub use usage::{StaffMember, UsageRecord, VerificationStats, VerifyStatus};
