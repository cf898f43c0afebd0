//! Equipment locator service

use crate::{
    error::AppResult,
    models::{
        equipment::{EquipmentFilterOptions, EquipmentQuery, EquipmentSummary},
        EquipmentRecord, WardGroup,
    },
    query::catalog::{self, CatalogFilter, DEFAULT_WARDS},
    repository::Repository,
};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
}

impl EquipmentService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Search the catalog
    pub async fn search(&self, query: &EquipmentQuery) -> AppResult<Vec<EquipmentRecord>> {
        let records = self.repository.equipment_list().await?;
        let filter = CatalogFilter::from(query);
        let found: Vec<EquipmentRecord> = catalog::filter(&records, &filter)
            .into_iter()
            .cloned()
            .collect();
        tracing::debug!("Equipment search matched {} of {}", found.len(), records.len());
        Ok(found)
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<EquipmentRecord> {
        self.repository.equipment_get_by_id(id).await
    }

    /// Dropdown vocabularies for the locator screen
    pub async fn filter_options(&self) -> AppResult<EquipmentFilterOptions> {
        let records = self.repository.equipment_list().await?;
        Ok(EquipmentFilterOptions {
            types: catalog::list_types(),
            departments: catalog::list_departments(&records),
        })
    }

    /// Search results laid out per ward
    pub async fn floor_plan(&self, query: &EquipmentQuery) -> AppResult<Vec<WardGroup>> {
        let records = self.repository.equipment_list().await?;
        let visible = catalog::filter(&records, &CatalogFilter::from(query));
        Ok(catalog::floor_plan(&visible, &DEFAULT_WARDS))
    }

    /// Counters over the whole catalog
    pub async fn summary(&self) -> AppResult<EquipmentSummary> {
        let records = self.repository.equipment_list().await?;
        Ok(catalog::summarize(&records))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::repository::seed::SeedSource;

    fn service() -> EquipmentService {
        EquipmentService::new(Repository::new(Arc::new(SeedSource)))
    }

    #[tokio::test]
    async fn test_search_with_query_params() {
        let query = EquipmentQuery {
            q: None,
            equipment_type: Some("치료".to_string()),
            department: Some("내과".to_string()),
        };
        let found = service().search(&query).await.unwrap();
        let ids: Vec<_> = found.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["VEN-102", "INF-304"]);
    }

    #[tokio::test]
    async fn test_korean_all_label_is_accepted() {
        let query = EquipmentQuery {
            q: Some(String::new()),
            equipment_type: Some("전체".to_string()),
            department: Some("전체".to_string()),
        };
        assert_eq!(service().search(&query).await.unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_filter_options() {
        let options = service().filter_options().await.unwrap();
        assert_eq!(options.types.len(), 7);
        assert_eq!(options.departments[0], "ALL");
        assert_eq!(options.departments.len(), 6);
    }

    #[tokio::test]
    async fn test_floor_plan_follows_search() {
        let query = EquipmentQuery {
            q: Some("모니터".to_string()),
            ..Default::default()
        };
        let plan = service().floor_plan(&query).await.unwrap();
        let placed: Vec<_> = plan
            .iter()
            .flat_map(|g| g.equipment.iter().map(|e| e.id.as_str()))
            .collect();
        assert_eq!(placed, vec!["ECG-001", "MON-405"]);
    }
}
