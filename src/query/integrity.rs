//! Usage history search and verification statistics (integrity screen)

use crate::models::{
    usage::UsageQuery, UsageRecord, VerificationFilter, VerificationStats,
};

use super::{contains_ci, normalize_query, Selector};

/// Active usage-history filter state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageFilter {
    needle: String,
    department: Selector,
    status: VerificationFilter,
}

impl UsageFilter {
    pub fn new(query: &str, department: Selector, status: VerificationFilter) -> Self {
        Self {
            needle: normalize_query(query),
            department,
            status,
        }
    }

    fn matches_query(&self, record: &UsageRecord) -> bool {
        self.needle.is_empty()
            || contains_ci(&record.equipment_name, &self.needle)
            || contains_ci(&record.equipment_id, &self.needle)
            || contains_ci(&record.user.search_text(), &self.needle)
    }

    fn matches_department(&self, record: &UsageRecord) -> bool {
        match &self.department {
            Selector::All => true,
            Selector::Only(d) => record.user.department == *d,
        }
    }

    pub fn matches(&self, record: &UsageRecord) -> bool {
        self.matches_query(record)
            && self.matches_department(record)
            && self.status.matches(record.verified)
    }
}

impl From<&UsageQuery> for UsageFilter {
    fn from(q: &UsageQuery) -> Self {
        Self::new(
            q.q.as_deref().unwrap_or_default(),
            Selector::parse(q.department.as_deref()),
            q.status
                .as_deref()
                .map(VerificationFilter::parse)
                .unwrap_or_default(),
        )
    }
}

/// Records satisfying every predicate of `filter`, in collection order
pub fn filter<'a>(records: &'a [UsageRecord], filter: &UsageFilter) -> Vec<&'a UsageRecord> {
    records.iter().filter(|r| filter.matches(r)).collect()
}

/// `ALL` followed by each distinct staff department, first-seen order
pub fn list_departments(records: &[UsageRecord]) -> Vec<String> {
    super::distinct_with_all(records.iter().map(|r| r.user.department.as_str()))
}

/// Statistics over the given (normally unfiltered) history
pub fn stats(records: &[UsageRecord]) -> VerificationStats {
    let total = records.len();
    let verified_count = records.iter().filter(|r| r.verified).count();
    let verification_rate = if total == 0 {
        0.0
    } else {
        (verified_count as f64 / total as f64 * 1000.0).round() / 10.0
    };

    VerificationStats {
        total,
        verified_count,
        failed_count: total - verified_count,
        verification_rate,
    }
}
