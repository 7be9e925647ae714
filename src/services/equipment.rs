//! Equipment registry service

use std::sync::Arc;

use chrono::NaiveDate;
use validator::Validate;

use crate::{
    clock::Clock,
    compliance::{filter, next_inspection_date, status, FilterCriteria},
    config::InspectionConfig,
    error::{AppError, AppResult},
    models::{
        equipment_type, Condition, CreateEquipment, Equipment, EquipmentDetails, EquipmentStatus,
        EquipmentType, UpdateEquipment,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
    config: InspectionConfig,
    clock: Arc<dyn Clock>,
}

fn resolve_type(id: &str) -> AppResult<&'static EquipmentType> {
    equipment_type::find(id).ok_or_else(|| AppError::Validation {
        message: format!("Unknown equipment type: {}", id),
        missing: vec!["equipment_type".to_string()],
    })
}

/// Next inspection date for a baseline supplied by the caller
fn schedule_from(baseline: NaiveDate, kind: &EquipmentType) -> AppResult<NaiveDate> {
    next_inspection_date(baseline, kind).ok_or_else(|| AppError::Validation {
        message: format!("Inspection schedule from {} falls past the supported calendar", baseline),
        missing: vec!["installation_date".to_string()],
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl EquipmentService {
    pub fn new(repository: Repository, config: InspectionConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            repository,
            config,
            clock,
        }
    }

    /// Attach type name and due state to an equipment record
    pub fn details(&self, equipment: Equipment) -> EquipmentDetails {
        let today = self.clock.today();
        EquipmentDetails {
            type_name: equipment_type::display_name(&equipment.equipment_type).to_string(),
            due_state: status::due_state_of(&equipment, today, self.config.due_soon_days),
            days_until_due: status::days_until_due(&equipment, today),
            equipment,
        }
    }

    /// List equipment matching the search/status/type criteria
    pub async fn list(&self, criteria: &FilterCriteria) -> AppResult<Vec<Equipment>> {
        let equipment = self.repository.equipment.list().await?;
        Ok(filter(equipment, criteria))
    }

    /// Inspection schedule: every piece of equipment with its due state.
    /// The status filter applies to the due state.
    pub async fn schedule(&self, criteria: &FilterCriteria) -> AppResult<Vec<EquipmentDetails>> {
        let entries = self
            .repository
            .equipment
            .list()
            .await?
            .into_iter()
            .map(|e| self.details(e))
            .collect();
        Ok(filter(entries, criteria))
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<EquipmentDetails> {
        let equipment = self.repository.equipment.get_by_id(id).await?;
        Ok(self.details(equipment))
    }

    pub async fn get_by_barcode(&self, barcode: &str) -> AppResult<EquipmentDetails> {
        let equipment = self.repository.equipment.get_by_barcode(barcode.trim()).await?;
        Ok(self.details(equipment))
    }

    /// Register new equipment; the first inspection is scheduled one
    /// interval after installation (or after a prior inspection, if given)
    pub async fn create(&self, data: &CreateEquipment) -> AppResult<EquipmentDetails> {
        data.validate()?;
        let kind = resolve_type(data.equipment_type.trim())?;

        let barcode = data.barcode.trim().to_string();
        let location = data.location.trim().to_string();
        if barcode.is_empty() || location.is_empty() {
            let mut missing = Vec::new();
            if barcode.is_empty() {
                missing.push("barcode".to_string());
            }
            if location.is_empty() {
                missing.push("location".to_string());
            }
            return Err(AppError::Validation {
                message: "Please complete all required fields".to_string(),
                missing,
            });
        }
        if let Some(last) = data.last_inspection_date {
            if last < data.installation_date {
                return Err(AppError::validation(
                    "Last inspection date precedes installation date",
                ));
            }
        }

        let baseline = data.last_inspection_date.unwrap_or(data.installation_date);
        let name = non_blank(data.name.clone())
            .unwrap_or_else(|| format!("{} - {}", kind.name, location));

        let equipment = Equipment {
            id: String::new(),
            barcode,
            name,
            equipment_type: kind.id.clone(),
            location,
            manufacturer: data.manufacturer.trim().to_string(),
            model: data.model.trim().to_string(),
            serial_number: data.serial_number.trim().to_string(),
            installation_date: data.installation_date,
            last_inspection_date: data.last_inspection_date,
            next_inspection_date: schedule_from(baseline, kind)?,
            status: data.status.unwrap_or(EquipmentStatus::Operational),
            condition: data.condition.unwrap_or(Condition::Good),
            notes: non_blank(data.notes.clone()),
        };

        let created = self.repository.equipment.create(equipment).await?;
        tracing::info!(
            "Registered equipment {} ({}) at {}",
            created.id,
            created.barcode,
            created.location
        );
        Ok(self.details(created))
    }

    /// Update descriptive fields. A type change reschedules the next
    /// inspection from the same baseline with the new interval.
    pub async fn update(&self, id: &str, data: &UpdateEquipment) -> AppResult<EquipmentDetails> {
        let mut equipment = self.repository.equipment.get_by_id(id).await?;

        if let Some(kind) = non_blank(data.equipment_type.clone()) {
            let kind = resolve_type(&kind)?;
            if kind.id != equipment.equipment_type {
                equipment.equipment_type = kind.id.clone();
                equipment.next_inspection_date =
                    schedule_from(equipment.schedule_baseline(), kind)?;
            }
        }
        if let Some(name) = non_blank(data.name.clone()) {
            equipment.name = name;
        }
        if let Some(location) = non_blank(data.location.clone()) {
            equipment.location = location;
        }
        if let Some(manufacturer) = &data.manufacturer {
            equipment.manufacturer = manufacturer.trim().to_string();
        }
        if let Some(model) = &data.model {
            equipment.model = model.trim().to_string();
        }
        if let Some(serial_number) = &data.serial_number {
            equipment.serial_number = serial_number.trim().to_string();
        }
        if data.notes.is_some() {
            equipment.notes = non_blank(data.notes.clone());
        }

        let updated = self.repository.equipment.update(equipment).await?;
        tracing::info!("Updated equipment {}", updated.id);
        Ok(self.details(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{clock::FixedClock, models::DueState};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn service(today: NaiveDate) -> EquipmentService {
        EquipmentService::new(
            Repository::in_memory(),
            InspectionConfig::default(),
            Arc::new(FixedClock(today)),
        )
    }

    fn request(barcode: &str) -> CreateEquipment {
        CreateEquipment {
            barcode: barcode.to_string(),
            equipment_type: "fire-extinguisher".to_string(),
            location: "Building A - Floor 1 - Lobby".to_string(),
            name: None,
            manufacturer: "Amerex".to_string(),
            model: "B500".to_string(),
            serial_number: "AX1".to_string(),
            installation_date: date(2024, 1, 15),
            last_inspection_date: None,
            status: None,
            condition: None,
            notes: Some("  ".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_schedules_first_inspection() {
        let svc = service(date(2024, 1, 20));
        let created = svc.create(&request("FE001")).await.unwrap();

        let e = &created.equipment;
        assert_eq!(e.next_inspection_date, date(2024, 2, 14));
        assert_eq!(e.last_inspection_date, None);
        assert_eq!(e.status, EquipmentStatus::Operational);
        assert_eq!(e.name, "Fire Extinguisher (APAR) - Building A - Floor 1 - Lobby");
        assert_eq!(e.notes, None);
        assert_eq!(created.due_state, DueState::Pending);
        assert_eq!(created.days_until_due, 25);
    }

    #[tokio::test]
    async fn test_create_rejects_bad_input() {
        let svc = service(date(2024, 1, 20));
        svc.create(&request("FE001")).await.unwrap();

        let err = svc.create(&request("FE001")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        let mut unknown_type = request("FE002");
        unknown_type.equipment_type = "sprinkler".to_string();
        assert!(matches!(
            svc.create(&unknown_type).await,
            Err(AppError::Validation { .. })
        ));

        let mut blank = request("   ");
        blank.location = String::new();
        match svc.create(&blank).await.unwrap_err() {
            AppError::Validation { missing, .. } => assert!(missing.contains(&"location".to_string())),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_type_change_reschedules() {
        let svc = service(date(2024, 1, 20));
        let created = svc.create(&request("FE001")).await.unwrap();

        let update = UpdateEquipment {
            equipment_type: Some("hydrant".to_string()),
            location: Some("Parking".to_string()),
            ..Default::default()
        };
        let updated = svc.update(&created.equipment.id, &update).await.unwrap();
        assert_eq!(updated.equipment.next_inspection_date, date(2024, 7, 13));
        assert_eq!(updated.equipment.location, "Parking");
        assert_eq!(updated.equipment.last_inspection_date, None);
    }

    #[tokio::test]
    async fn test_schedule_filters_on_due_state() {
        let svc = service(date(2024, 3, 1));
        svc.create(&request("FE001")).await.unwrap();
        let mut recent = request("FE002");
        recent.last_inspection_date = Some(date(2024, 2, 25));
        svc.create(&recent).await.unwrap();

        let overdue = FilterCriteria {
            status: Some("overdue".to_string()),
            ..Default::default()
        };
        let entries = svc.schedule(&overdue).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].equipment.barcode, "FE001");

        let completed = FilterCriteria {
            status: Some("completed".to_string()),
            ..Default::default()
        };
        let entries = svc.schedule(&completed).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].equipment.barcode, "FE002");
    }

    #[tokio::test]
    async fn test_create_rejects_schedule_past_calendar_end() {
        let svc = service(date(2024, 1, 20));
        let mut far_future = request("FE001");
        far_future.installation_date = NaiveDate::MAX - chrono::Duration::days(10);

        match svc.create(&far_future).await.unwrap_err() {
            AppError::Validation { missing, .. } => {
                assert_eq!(missing, vec!["installation_date".to_string()])
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(svc.repository.equipment.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_type_change_past_calendar_end_is_rejected() {
        let svc = service(date(2024, 1, 20));
        let mut late = request("FE001");
        late.installation_date = NaiveDate::MAX - chrono::Duration::days(30);
        let created = svc.create(&late).await.unwrap();
        assert_eq!(created.equipment.next_inspection_date, NaiveDate::MAX);

        let update = UpdateEquipment {
            equipment_type: Some("hydrant".to_string()),
            ..Default::default()
        };
        let err = svc.update(&created.equipment.id, &update).await.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));

        let stored = svc.repository.equipment.get_by_id(&created.equipment.id).await.unwrap();
        assert_eq!(stored.equipment_type, "fire-extinguisher");
    }
}

