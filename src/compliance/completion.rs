//! Inspection completion

use chrono::NaiveDate;
use indexmap::IndexMap;

use super::{checklist::validate, status};
use crate::{
    error::{AppError, AppResult},
    models::{
        ChecklistDefinition, Condition, Equipment, EquipmentType, InspectionResult,
        InspectionSubmission, NewInspection,
    },
};

/// Next inspection date for an interval counted from `baseline`; None when
/// it would fall past the last representable date
pub fn next_inspection_date(
    baseline: NaiveDate,
    equipment_type: &EquipmentType,
) -> Option<NaiveDate> {
    status::add_days(baseline, equipment_type.inspection_interval)
}

/// Percentage of answered checklist items that passed
pub fn checklist_score(checklist: &IndexMap<String, bool>) -> u8 {
    let passed = checklist.values().filter(|passed| **passed).count();
    status::percentage(passed, checklist.len())
}

/// Turn a validated submission into a new inspection record and the
/// equipment state that follows from it.
///
/// Fails with a validation error listing the missing keys when the
/// submission does not satisfy the checklist.
pub fn complete_inspection(
    equipment: &Equipment,
    equipment_type: &EquipmentType,
    definition: &ChecklistDefinition,
    submission: &InspectionSubmission,
    today: NaiveDate,
) -> AppResult<(Equipment, NewInspection)> {
    let report = validate(
        definition,
        &submission.checklist,
        submission.overall_condition.as_deref(),
        &submission.inspector_name,
    );
    if !report.valid {
        let message = if report.unknown.is_empty() {
            "Please complete all required fields".to_string()
        } else {
            format!("Unknown checklist items: {}", report.unknown.join(", "))
        };
        let mut missing = report.missing;
        missing.extend(report.unknown);
        return Err(AppError::Validation { message, missing });
    }

    let condition: Condition = submission
        .overall_condition
        .as_deref()
        .unwrap_or_default()
        .parse()
        .map_err(|e: String| AppError::validation(e))?;

    let checklist: IndexMap<String, bool> = definition
        .items
        .iter()
        .filter_map(|item| match submission.checklist.get(&item.key) {
            Some(Some(answer)) => Some((item.key.clone(), *answer)),
            _ => None,
        })
        .collect();

    let mut updated = equipment.clone();
    updated.last_inspection_date = Some(today);
    updated.next_inspection_date =
        next_inspection_date(today, equipment_type).ok_or_else(|| {
            AppError::Internal(format!("Next inspection date overflows from {}", today))
        })?;
    updated.condition = condition;
    updated.status = status::status_for_condition(condition);

    let record = NewInspection {
        equipment_id: equipment.id.clone(),
        equipment_name: equipment.name.clone(),
        inspector_name: submission.inspector_name.trim().to_string(),
        inspection_date: today,
        overall_condition: condition,
        result: InspectionResult::from(condition),
        score: checklist_score(&checklist),
        checklist,
        photos: submission.photos.clone(),
        notes: submission.notes.clone(),
    };

    Ok((updated, record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{checklist::definition_for, equipment_type, EquipmentStatus};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn extinguisher() -> Equipment {
        Equipment {
            id: "eq-001".to_string(),
            barcode: "FE001".to_string(),
            name: "Fire Extinguisher - Lobby".to_string(),
            equipment_type: "fire-extinguisher".to_string(),
            location: "Building A - Floor 1 - Lobby".to_string(),
            manufacturer: "Amerex".to_string(),
            model: "B500".to_string(),
            serial_number: "AX2024001".to_string(),
            installation_date: date(2024, 1, 15),
            last_inspection_date: None,
            next_inspection_date: date(2024, 2, 14),
            status: EquipmentStatus::Operational,
            condition: Condition::Excellent,
            notes: None,
        }
    }

    fn submission(condition: &str) -> InspectionSubmission {
        let checklist = [
            ("accessibility", Some(true)),
            ("visual_condition", Some(true)),
            ("pressure_gauge", Some(false)),
            ("safety_seal", Some(true)),
            ("location_sign", Some(true)),
            ("inspection_tag", None),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), *v))
        .collect();
        InspectionSubmission {
            checklist,
            overall_condition: Some(condition.to_string()),
            inspector_name: " John Smith ".to_string(),
            notes: "Gauge reading low".to_string(),
            photos: vec!["/photos/fe001.jpg".to_string()],
        }
    }

    fn run(condition: &str) -> AppResult<(Equipment, NewInspection)> {
        let kind = equipment_type::find("fire-extinguisher").unwrap();
        let def = definition_for("fire-extinguisher").unwrap();
        complete_inspection(&extinguisher(), kind, &def, &submission(condition), date(2024, 2, 1))
    }

    #[test]
    fn test_good_condition_reschedules_and_stays_operational() {
        let (updated, record) = run("good").unwrap();

        assert_eq!(updated.last_inspection_date, Some(date(2024, 2, 1)));
        assert_eq!(updated.next_inspection_date, date(2024, 3, 2));
        assert_eq!(updated.status, EquipmentStatus::Operational);
        assert_eq!(updated.condition, Condition::Good);

        assert_eq!(record.inspection_date, date(2024, 2, 1));
        assert_eq!(record.result, InspectionResult::Passed);
        assert_eq!(record.inspector_name, "John Smith");
        assert_eq!(record.checklist.len(), 5);
        assert_eq!(record.score, 80);
    }

    #[test]
    fn test_poor_condition_takes_equipment_out_of_service() {
        let (updated, record) = run("poor").unwrap();
        assert_eq!(updated.status, EquipmentStatus::OutOfService);
        assert_eq!(record.result, InspectionResult::Failed);
    }

    #[test]
    fn test_fair_condition_needs_attention() {
        let (updated, _) = run("fair").unwrap();
        assert_eq!(updated.status, EquipmentStatus::NeedsAttention);
    }

    #[test]
    fn test_invalid_submission_is_rejected() {
        let kind = equipment_type::find("fire-extinguisher").unwrap();
        let def = definition_for("fire-extinguisher").unwrap();
        let empty = InspectionSubmission::default();

        let err = complete_inspection(&extinguisher(), kind, &def, &empty, date(2024, 2, 1))
            .unwrap_err();
        match err {
            AppError::Validation { missing, .. } => {
                assert!(missing.contains(&"pressure_gauge".to_string()));
                assert!(missing.contains(&"overall_condition".to_string()));
                assert!(missing.contains(&"inspector_name".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_score_of_empty_checklist() {
        assert_eq!(checklist_score(&IndexMap::new()), 0);
    }

    #[test]
    fn test_next_inspection_date_past_calendar_end() {
        let kind = equipment_type::find("fire-extinguisher").unwrap();
        assert_eq!(next_inspection_date(date(2024, 2, 1), kind), Some(date(2024, 3, 2)));
        assert_eq!(next_inspection_date(NaiveDate::MAX, kind), None);
    }

    #[test]
    fn test_completion_on_last_calendar_day_is_an_error() {
        let kind = equipment_type::find("fire-extinguisher").unwrap();
        let def = definition_for("fire-extinguisher").unwrap();
        let last_day = NaiveDate::MAX;
        let err = complete_inspection(&extinguisher(), kind, &def, &submission("good"), last_day)
            .unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }
}

