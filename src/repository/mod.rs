//! Repository layer
//!
//! Storage is reached only through the `EquipmentStore` and
//! `InspectionStore` traits. The bundled implementation keeps everything in
//! memory; nothing is persisted across restarts.

pub mod equipment;
pub mod inspections;
pub mod seed;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{Equipment, Inspection, NewInspection},
};

/// Equipment registry: create, read and update. There is no delete.
#[async_trait]
pub trait EquipmentStore: Send + Sync {
    /// All equipment in registration order
    async fn list(&self) -> AppResult<Vec<Equipment>>;

    async fn get_by_id(&self, id: &str) -> AppResult<Equipment>;

    async fn get_by_barcode(&self, barcode: &str) -> AppResult<Equipment>;

    /// Register equipment. An empty `id` is replaced by a generated one;
    /// duplicate ids or barcodes are rejected.
    async fn create(&self, equipment: Equipment) -> AppResult<Equipment>;

    /// Replace the stored record with the same id
    async fn update(&self, equipment: Equipment) -> AppResult<Equipment>;
}

/// Append-only inspection log
#[async_trait]
pub trait InspectionStore: Send + Sync {
    /// All inspections in the order they were recorded
    async fn list(&self) -> AppResult<Vec<Inspection>>;

    async fn get_by_id(&self, id: &str) -> AppResult<Inspection>;

    async fn list_by_equipment(&self, equipment_id: &str) -> AppResult<Vec<Inspection>>;

    /// Append a record, assigning its id
    async fn create(&self, inspection: NewInspection) -> AppResult<Inspection>;
}

/// Main repository struct holding the stores
#[derive(Clone)]
pub struct Repository {
    pub equipment: Arc<dyn EquipmentStore>,
    pub inspections: Arc<dyn InspectionStore>,
}

impl Repository {
    /// Create a repository over the given stores
    pub fn new(equipment: Arc<dyn EquipmentStore>, inspections: Arc<dyn InspectionStore>) -> Self {
        Self {
            equipment,
            inspections,
        }
    }

    /// Empty in-memory repository
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(equipment::MemoryEquipmentStore::default()),
            Arc::new(inspections::MemoryInspectionStore::default()),
        )
    }
}
