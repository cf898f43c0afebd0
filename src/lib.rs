//! MedTrack server
//!
//! Equipment locator and usage-integrity dashboard backend: searches a
//! catalog of tracked medical devices, searches their checkout history and
//! reports how many history records still match their ledger hash. Also
//! keeps the registry of RFID readers and equipment tags.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Wire repository and services for the given configuration
    pub fn new(config: AppConfig) -> Self {
        let repository = repository::Repository::from_config(&config.data);
        let services = services::Services::new(repository, &config);
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}
