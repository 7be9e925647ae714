//! In-memory inspection log

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::InspectionStore;
use crate::{
    error::{AppError, AppResult},
    models::{Inspection, NewInspection},
};

/// Append-only: records are never modified or removed once pushed
#[derive(Default)]
pub struct MemoryInspectionStore {
    rows: RwLock<Vec<Inspection>>,
}

#[async_trait]
impl InspectionStore for MemoryInspectionStore {
    async fn list(&self) -> AppResult<Vec<Inspection>> {
        Ok(self.rows.read().await.clone())
    }

    async fn get_by_id(&self, id: &str) -> AppResult<Inspection> {
        self.rows
            .read()
            .await
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or_else(|| AppError::InspectionNotFound(format!("Inspection {} not found", id)))
    }

    async fn list_by_equipment(&self, equipment_id: &str) -> AppResult<Vec<Inspection>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|i| i.equipment_id == equipment_id)
            .cloned()
            .collect())
    }

    async fn create(&self, inspection: NewInspection) -> AppResult<Inspection> {
        let record = inspection.with_id(format!("insp-{}", Uuid::new_v4().simple()));
        self.rows.write().await.push(record.clone());
        Ok(record)
    }
}
