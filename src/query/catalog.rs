//! Equipment catalog search (locator screen)

use crate::models::{
    enums::{EquipmentType, ALL},
    equipment::{EquipmentQuery, EquipmentSummary},
    BatteryLevel, EquipmentRecord, WardGroup,
};

use super::Selector;

/// Wards drawn on the locator floor plan, in display order
pub const DEFAULT_WARDS: [&str; 5] = ["진단검사실", "내과", "영상의학과", "진료과", "응급실"];

/// Active catalog filter state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    needle: String,
    equipment_type: Selector,
    department: Selector,
}

impl CatalogFilter {
    pub fn new(query: &str, equipment_type: Selector, department: Selector) -> Self {
        Self {
            needle: query.to_lowercase(),
            equipment_type,
            department,
        }
    }

    /// Free text must appear in the name, id or location (case-insensitive)
    fn matches_query(&self, record: &EquipmentRecord) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        [&record.name, &record.id, &record.location]
            .iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }

    fn matches_type(&self, record: &EquipmentRecord) -> bool {
        match &self.equipment_type {
            Selector::All => true,
            Selector::Only(t) => record.equipment_type == *t,
        }
    }

    /// Department strings may be composite, so this is a substring test
    fn matches_department(&self, record: &EquipmentRecord) -> bool {
        match &self.department {
            Selector::All => true,
            Selector::Only(d) => record.department.contains(d.as_str()),
        }
    }

    pub fn matches(&self, record: &EquipmentRecord) -> bool {
        self.matches_query(record) && self.matches_type(record) && self.matches_department(record)
    }
}

impl From<&EquipmentQuery> for CatalogFilter {
    fn from(q: &EquipmentQuery) -> Self {
        Self::new(
            q.q.as_deref().unwrap_or_default(),
            Selector::parse(q.equipment_type.as_deref()),
            Selector::parse(q.department.as_deref()),
        )
    }
}

/// Records satisfying every predicate of `filter`, in collection order
pub fn filter<'a>(records: &'a [EquipmentRecord], filter: &CatalogFilter) -> Vec<&'a EquipmentRecord> {
    records.iter().filter(|r| filter.matches(r)).collect()
}

/// `ALL` followed by the equipment type vocabulary
pub fn list_types() -> Vec<String> {
    std::iter::once(ALL.to_string())
        .chain(EquipmentType::VALUES.iter().map(|t| t.label().to_string()))
        .collect()
}

/// `ALL`, the floor-plan wards, then any other department in first-seen order
pub fn list_departments(records: &[EquipmentRecord]) -> Vec<String> {
    super::distinct_with_all(
        DEFAULT_WARDS
            .iter()
            .copied()
            .chain(records.iter().map(|r| r.department.as_str())),
    )
}

/// Group records into `wards` by exact department. Wards without devices
/// are kept; devices outside every ward are left out.
pub fn floor_plan(records: &[&EquipmentRecord], wards: &[&str]) -> Vec<WardGroup> {
    wards
        .iter()
        .map(|ward| WardGroup {
            department: ward.to_string(),
            equipment: records
                .iter()
                .filter(|r| r.department == *ward)
                .map(|r| (*r).clone())
                .collect(),
        })
        .collect()
}

pub fn summarize(records: &[EquipmentRecord]) -> EquipmentSummary {
    let in_use = records.iter().filter(|r| r.is_in_use()).count();
    EquipmentSummary {
        total: records.len(),
        in_use,
        idle: records.len() - in_use,
        low_battery: records
            .iter()
            .filter(|r| r.battery_level() == BatteryLevel::Low)
            .count(),
    }
}
