//! Fixture-file data source: two JSON arrays read on every fetch

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::DataSource;
use crate::{
    error::{AppError, AppResult},
    models::{EquipmentRecord, EquipmentType, UsageRecord},
};

#[derive(Debug, Clone)]
pub struct JsonFileSource {
    equipment_path: PathBuf,
    usage_path: PathBuf,
}

impl JsonFileSource {
    pub fn new(equipment_path: impl Into<PathBuf>, usage_path: impl Into<PathBuf>) -> Self {
        Self {
            equipment_path: equipment_path.into(),
            usage_path: usage_path.into(),
        }
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<Vec<T>> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        tracing::warn!("Failed to read {}: {}", path.display(), e);
        AppError::DataSource(format!("Cannot read {}: {}", path.display(), e))
    })?;

    serde_json::from_slice(&bytes).map_err(|e| {
        tracing::warn!("Invalid JSON in {}: {}", path.display(), e);
        AppError::DataSource(format!("Invalid data in {}: {}", path.display(), e))
    })
}

/// Every catalog entry must carry a label from the equipment type vocabulary
fn check_type_labels(path: &Path, records: &[EquipmentRecord]) -> AppResult<()> {
    match records
        .iter()
        .find(|r| EquipmentType::from_label(&r.equipment_type).is_none())
    {
        Some(record) => {
            tracing::warn!(
                "Unknown equipment type '{}' for {} in {}",
                record.equipment_type,
                record.id,
                path.display()
            );
            Err(AppError::DataSource(format!(
                "Unknown equipment type '{}' for {} in {}",
                record.equipment_type,
                record.id,
                path.display()
            )))
        }
        None => Ok(()),
    }
}

#[async_trait]
impl DataSource for JsonFileSource {
    async fn fetch_equipment(&self) -> AppResult<Vec<EquipmentRecord>> {
        let records = read_json(&self.equipment_path).await?;
        check_type_labels(&self.equipment_path, &records)?;
        Ok(records)
    }

    async fn fetch_usage_history(&self) -> AppResult<Vec<UsageRecord>> {
        read_json(&self.usage_path).await
    }

    fn name(&self) -> &'static str {
        "json-file"
    }
}
