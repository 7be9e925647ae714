//! Barcode resolution service

use tokio::sync::oneshot;

use crate::{
    error::{AppError, AppResult},
    repository::Repository,
    scanner::{ScanOutcome, ScanPurpose, ScanResolution, ScanSession},
};

#[derive(Clone)]
pub struct ScannerService {
    repository: Repository,
}

impl ScannerService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Match a scanned code against the registry
    pub async fn resolve(&self, code: &str, purpose: ScanPurpose) -> AppResult<ScanResolution> {
        let code = code.trim();
        if code.is_empty() {
            return Err(AppError::BadRequest("Scanned code is empty".to_string()));
        }

        match self.repository.equipment.get_by_barcode(code).await {
            Ok(equipment) => Ok(ScanResolution {
                route: purpose.route(&equipment.id),
                equipment_id: equipment.id,
                barcode: equipment.barcode,
            }),
            Err(AppError::EquipmentNotFound(_)) => {
                tracing::warn!("Scanned barcode {} is not registered", code);
                Err(AppError::EquipmentNotFound(format!(
                    "Equipment with barcode \"{}\" not found in database.",
                    code
                )))
            }
            Err(e) => Err(e),
        }
    }

    /// Run a camera scan and resolve whatever it reads; `None` when the
    /// scan was cancelled
    pub async fn scan(
        &self,
        session: &ScanSession,
        cancel: oneshot::Receiver<()>,
        purpose: ScanPurpose,
    ) -> AppResult<Option<ScanResolution>> {
        match session.run(cancel).await? {
            ScanOutcome::Detected(code) => self.resolve(&code, purpose).await.map(Some),
            ScanOutcome::Cancelled => Ok(None),
        }
    }
}
