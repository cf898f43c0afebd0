//! Usage history and integrity statistics service

use crate::{
    error::AppResult,
    models::{usage::UsageQuery, UsageRecord, VerificationStats},
    query::integrity::{self, UsageFilter},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsageService {
    repository: Repository,
}

impl UsageService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Search the usage history
    pub async fn search(&self, query: &UsageQuery) -> AppResult<Vec<UsageRecord>> {
        let records = self.repository.usage_list().await?;
        let filter = UsageFilter::from(query);
        let found: Vec<UsageRecord> = integrity::filter(&records, &filter)
            .into_iter()
            .cloned()
            .collect();
        tracing::debug!("Usage search matched {} of {}", found.len(), records.len());
        Ok(found)
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<UsageRecord> {
        self.repository.usage_get_by_id(id).await
    }

    pub async fn departments(&self) -> AppResult<Vec<String>> {
        let records = self.repository.usage_list().await?;
        Ok(integrity::list_departments(&records))
    }

    /// Statistics over the full history, independent of any search
    pub async fn stats(&self) -> AppResult<VerificationStats> {
        let records = self.repository.usage_list().await?;
        Ok(integrity::stats(&records))
    }
}
