//! In-memory equipment registry

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::EquipmentStore;
use crate::{
    error::{AppError, AppResult},
    models::Equipment,
};

#[derive(Default)]
pub struct MemoryEquipmentStore {
    rows: RwLock<Vec<Equipment>>,
}

#[async_trait]
impl EquipmentStore for MemoryEquipmentStore {
    async fn list(&self) -> AppResult<Vec<Equipment>> {
        Ok(self.rows.read().await.clone())
    }

    async fn get_by_id(&self, id: &str) -> AppResult<Equipment> {
        self.rows
            .read()
            .await
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| AppError::EquipmentNotFound(format!("Equipment {} not found", id)))
    }

    async fn get_by_barcode(&self, barcode: &str) -> AppResult<Equipment> {
        self.rows
            .read()
            .await
            .iter()
            .find(|e| e.barcode == barcode)
            .cloned()
            .ok_or_else(|| {
                AppError::EquipmentNotFound(format!(
                    "Equipment with barcode \"{}\" not found",
                    barcode
                ))
            })
    }

    async fn create(&self, mut equipment: Equipment) -> AppResult<Equipment> {
        let mut rows = self.rows.write().await;

        if equipment.id.is_empty() {
            equipment.id = format!("eq-{}", Uuid::new_v4().simple());
        }
        if rows.iter().any(|e| e.id == equipment.id) {
            return Err(AppError::Conflict(format!(
                "Equipment {} already exists",
                equipment.id
            )));
        }
        if rows.iter().any(|e| e.barcode == equipment.barcode) {
            return Err(AppError::Conflict(format!(
                "Barcode {} is already registered",
                equipment.barcode
            )));
        }

        rows.push(equipment.clone());
        Ok(equipment)
    }

    async fn update(&self, equipment: Equipment) -> AppResult<Equipment> {
        let mut rows = self.rows.write().await;

        if rows
            .iter()
            .any(|e| e.barcode == equipment.barcode && e.id != equipment.id)
        {
            return Err(AppError::Conflict(format!(
                "Barcode {} is already registered",
                equipment.barcode
            )));
        }

        let slot = rows
            .iter_mut()
            .find(|e| e.id == equipment.id)
            .ok_or_else(|| {
                AppError::EquipmentNotFound(format!("Equipment {} not found", equipment.id))
            })?;
        *slot = equipment.clone();
        Ok(equipment)
    }
}
