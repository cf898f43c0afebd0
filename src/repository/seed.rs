//! Built-in demo dataset used when no fixture files are configured

use async_trait::async_trait;

use super::DataSource;
use crate::{
    error::AppResult,
    models::{
        enums::{EquipmentStatus, StaffRole},
        EquipmentRecord, StaffMember, UsageRecord,
    },
};

/// Serves the seed collections from memory
#[derive(Debug, Clone, Default)]
pub struct SeedSource;

#[async_trait]
impl DataSource for SeedSource {
    async fn fetch_equipment(&self) -> AppResult<Vec<EquipmentRecord>> {
        Ok(seed_equipment())
    }

    async fn fetch_usage_history(&self) -> AppResult<Vec<UsageRecord>> {
        Ok(seed_usage_history())
    }

    fn name(&self) -> &'static str {
        "seed"
    }
}

fn equipment(
    id: &str,
    name: &str,
    equipment_type: &str,
    department: &str,
    status: EquipmentStatus,
    last_update: &str,
    battery: u8,
) -> EquipmentRecord {
    EquipmentRecord {
        id: id.to_string(),
        name: name.to_string(),
        equipment_type: equipment_type.to_string(),
        location: department.to_string(),
        department: department.to_string(),
        status,
        last_update: last_update.to_string(),
        battery,
    }
}

pub fn seed_equipment() -> Vec<EquipmentRecord> {
    use EquipmentStatus::{Idle, InUse};

    vec![
        equipment("ECG-001", "심전도 모니터", "모니터링", "진단검사실", InUse, "2분 전", 85),
        equipment("VEN-102", "인공호흡기", "치료", "내과", InUse, "1분 전", 92),
        equipment("DEF-203", "제세동기", "응급", "진료과", Idle, "5분 전", 100),
        equipment("INF-304", "수액펌프", "치료", "내과", InUse, "3분 전", 67),
        equipment("MON-405", "환자 모니터", "모니터링", "응급실", InUse, "1분 전", 88),
        equipment("BED-506", "전동침대", "병실", "내과", InUse, "10분 전", 45),
        equipment("TEMP-607", "체온계", "측정", "응급실", Idle, "2분 전", 78),
        equipment("XRA-708", "이동식 X-Ray", "영상", "영상의학과", Idle, "15분 전", 95),
        equipment("ULT-809", "초음파기", "영상", "영상의학과", InUse, "7분 전", 82),
        equipment("STE-910", "청진기", "측정", "응급실", Idle, "20분 전", 100),
    ]
}

#[allow(clippy::too_many_arguments)]
fn usage(
    id: &str,
    equipment: (&str, &str),
    user: (&str, &str, StaffRole),
    rented_at: &str,
    returned_at: Option<&str>,
    tx_index: u64,
    calculated_hash: &str,
    blockchain_hash: &str,
) -> UsageRecord {
    UsageRecord {
        id: id.to_string(),
        equipment_id: equipment.0.to_string(),
        equipment_name: equipment.1.to_string(),
        user: StaffMember {
            name: user.0.to_string(),
            department: user.1.to_string(),
            role: user.2,
        },
        rented_at: rented_at.to_string(),
        returned_at: returned_at.map(str::to_string),
        tx_index,
        calculated_hash: calculated_hash.to_string(),
        blockchain_hash: blockchain_hash.to_string(),
        verified: calculated_hash == blockchain_hash,
    }
}

pub fn seed_usage_history() -> Vec<UsageRecord> {
    use StaffRole::{Doctor, Nurse};

    vec![
        usage(
            "USG-003",
            ("DEF-203", "제세동기"),
            ("최현우", "내과", Nurse),
            "2026-02-11 12:30:22",
            Some("2026-02-11 12:43:08"),
            452193,
            "df2939a157d02ded4ba8457ec3508b425f445bd1369a7fbac774a543197d724a",
            "df2939a157d02ded4ba8457ec3508b425f445bd1369a7fbac774a543197d724a",
        ),
        usage(
            "USG-004",
            ("XRA-708", "이동식 X-Ray"),
            ("최기사", "영상의학과", Doctor),
            "2026-02-11 06:20:33",
            None,
            13,
            "d6e8f1a2b5c4d7e9f0d1c2b3a4f5e6d7",
            "d6e8f1a2b5c4d7e9f0d1c2b3a4f5e6d7",
        ),
        usage(
            "USG-005",
            ("INF-304", "수액펌프"),
            ("정간호사", "내과", Nurse),
            "2026-02-10 21:50:45",
            Some("2026-02-10 23:50:45"),
            14,
            "e7f9a2b3c6d5e8f0a1d2c3b4a5f6e7d8",
            "e7f9a2b3c6d5e8f0a1d2c3b4a5f6e7d8",
        ),
        usage(
            "USG-006",
            ("ECG-001", "심전도 모니터"),
            ("강의사", "진단검사실", Doctor),
            "2026-02-10 21:45:18",
            Some("2026-02-10 22:15:18"),
            15,
            "f8a0b3c4d7e6f9a1b2d3c4b5a6f7e8d9",
            "MODIFIED_HASH_12345678910",
        ),
        usage(
            "USG-007",
            ("ULT-809", "초음파기"),
            ("송의사", "영상의학과", Doctor),
            "2026-02-10 20:30:55",
            None,
            16,
            "a9b1c4d5e8f7a0b2c3d4e5f6a7b8c9d0",
            "a9b1c4d5e8f7a0b2c3d4e5f6a7b8c9d0",
        ),
        usage(
            "USG-008",
            ("MON-405", "환자 모니터"),
            ("윤간호사", "진료과", Nurse),
            "2026-02-10 18:45:12",
            None,
            17,
            "b0c2d5e6f9a8b1c3d4e5f6a7b8c9d0e1",
            "b0c2d5e6f9a8b1c3d4e5f6a7b8c9d0e1",
        ),
    ]
}
