//! Repository layer: where the catalog and the usage history come from

pub mod equipment;
pub mod json_file;
pub mod registry;
pub mod seed;
pub mod usage;

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    config::DataConfig,
    error::AppResult,
    models::{EquipmentRecord, UsageRecord},
};

/// Supplier of the equipment catalog and usage history
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch_equipment(&self) -> AppResult<Vec<EquipmentRecord>>;
    async fn fetch_usage_history(&self) -> AppResult<Vec<UsageRecord>>;

    /// Short label for logs
    fn name(&self) -> &'static str;
}

/// Main repository struct holding the data source and the device registry
#[derive(Clone)]
pub struct Repository {
    source: Arc<dyn DataSource>,
    registry: Arc<RwLock<registry::RegistryStore>>,
}

impl Repository {
    /// Create a new repository over the given data source
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self {
            source,
            registry: Arc::new(RwLock::new(registry::RegistryStore::seeded())),
        }
    }

    /// Pick the data source described by configuration: fixture files when
    /// both paths are set, the built-in seed data otherwise
    pub fn from_config(config: &DataConfig) -> Self {
        let source: Arc<dyn DataSource> = match (&config.equipment_path, &config.usage_path) {
            (Some(equipment), Some(usage)) => {
                Arc::new(json_file::JsonFileSource::new(equipment, usage))
            }
            _ => Arc::new(seed::SeedSource),
        };
        tracing::info!("Using {} data source", source.name());
        Self::new(source)
    }
}
