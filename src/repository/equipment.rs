//! Equipment domain methods on Repository

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::EquipmentRecord,
};

impl Repository {
    /// List the whole catalog in source order
    pub async fn equipment_list(&self) -> AppResult<Vec<EquipmentRecord>> {
        self.source.fetch_equipment().await
    }

    /// Get equipment by asset tag
    pub async fn equipment_get_by_id(&self, id: &str) -> AppResult<EquipmentRecord> {
        self.source
            .fetch_equipment()
            .await?
            .into_iter()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }
}
