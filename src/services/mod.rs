//! Business logic services

pub mod equipment;
pub mod inspections;
pub mod reports;
pub mod scanner;
pub mod stats;

use std::sync::Arc;

use crate::{clock::Clock, config::InspectionConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub equipment: equipment::EquipmentService,
    pub inspections: inspections::InspectionsService,
    pub stats: stats::StatsService,
    pub reports: reports::ReportsService,
    pub scanner: scanner::ScannerService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, config: InspectionConfig, clock: Arc<dyn Clock>) -> Self {
        let inspections = inspections::InspectionsService::new(repository.clone(), clock.clone());
        Self {
            equipment: equipment::EquipmentService::new(
                repository.clone(),
                config.clone(),
                clock.clone(),
            ),
            stats: stats::StatsService::new(repository.clone(), config.clone(), clock.clone()),
            reports: reports::ReportsService::new(
                repository.clone(),
                inspections.clone(),
                config,
                clock,
            ),
            scanner: scanner::ScannerService::new(repository),
            inspections,
        }
    }
}
