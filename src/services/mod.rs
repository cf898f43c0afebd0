//! Business logic services

pub mod equipment;
pub mod registry;
pub mod usage;
pub mod verification;

use crate::{config::AppConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub equipment: equipment::EquipmentService,
    pub registry: registry::RegistryService,
    pub usage: usage::UsageService,
    pub verification: verification::VerificationService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, config: &AppConfig) -> Self {
        Self {
            equipment: equipment::EquipmentService::new(repository.clone()),
            registry: registry::RegistryService::new(repository.clone()),
            usage: usage::UsageService::new(repository.clone()),
            verification: verification::VerificationService::new(repository, &config.verification),
        }
    }
}
