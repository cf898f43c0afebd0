//! Usage history domain methods on Repository

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::UsageRecord,
};

impl Repository {
    /// List the full usage history in source order
    pub async fn usage_list(&self) -> AppResult<Vec<UsageRecord>> {
        self.source.fetch_usage_history().await
    }

    /// Get a usage record by ID
    pub async fn usage_get_by_id(&self, id: &str) -> AppResult<UsageRecord> {
        self.source
            .fetch_usage_history()
            .await?
            .into_iter()
            .find(|u| u.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Usage record {} not found", id)))
    }
}
