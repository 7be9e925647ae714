//! Firesafe Fire Safety Inspection Server
//!
//! Tracks fire-safety equipment, records checklist-driven inspections,
//! derives compliance status and due dates, and exports reports over a
//! REST JSON API.

use std::sync::Arc;

pub mod api;
pub mod clock;
pub mod compliance;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod repository;
pub mod scanner;
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
    /// Wire services over `repository`, reading "today" from `clock`
    pub fn new(
        config: AppConfig,
        repository: repository::Repository,
        clock: Arc<dyn clock::Clock>,
    ) -> Self {
        let services = services::Services::new(repository, config.inspection.clone(), clock);
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}
