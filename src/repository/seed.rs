//! Demonstration fixture set loaded at start-up

use chrono::NaiveDate;
use indexmap::IndexMap;

use super::Repository;
use crate::{
    compliance::{completion::checklist_score, next_inspection_date},
    error::{AppError, AppResult},
    models::{
        equipment_type, Condition, Equipment, EquipmentStatus, InspectionResult, NewInspection,
    },
};

struct EquipmentFixture {
    id: &'static str,
    barcode: &'static str,
    name: &'static str,
    kind: &'static str,
    location: &'static str,
    manufacturer: &'static str,
    model: &'static str,
    serial: &'static str,
    installed: &'static str,
    last_inspected: Option<&'static str>,
    status: EquipmentStatus,
    condition: Condition,
    notes: Option<&'static str>,
}

const EQUIPMENT: &[EquipmentFixture] = &[
    EquipmentFixture {
        id: "eq-001",
        barcode: "FE001234567890",
        name: "Fire Extinguisher - Main Lobby",
        kind: "fire-extinguisher",
        location: "Building A - Main Lobby",
        manufacturer: "Amerex Corporation",
        model: "B402",
        serial: "AX2024001",
        installed: "2024-01-15",
        last_inspected: Some("2024-11-01"),
        status: EquipmentStatus::Operational,
        condition: Condition::Excellent,
        notes: Some("Recently serviced, all components in good condition"),
    },
    EquipmentFixture {
        id: "eq-002",
        barcode: "FA002345678901",
        name: "Smoke Detector - Conference Room",
        kind: "fire-alarm",
        location: "Building A - Conference Room 201",
        manufacturer: "Honeywell",
        model: "SD-851",
        serial: "HW2024002",
        installed: "2024-02-10",
        last_inspected: Some("2024-10-15"),
        status: EquipmentStatus::Operational,
        condition: Condition::Good,
        notes: None,
    },
    EquipmentFixture {
        id: "eq-003",
        barcode: "HY003456789012",
        name: "Fire Hydrant - Parking Lot",
        kind: "hydrant",
        location: "Building A - East Parking Lot",
        manufacturer: "Mueller Company",
        model: "A-423",
        serial: "MC2024003",
        installed: "2024-01-20",
        last_inspected: Some("2024-08-20"),
        status: EquipmentStatus::NeedsAttention,
        condition: Condition::Fair,
        notes: Some("Valve requires minor adjustment"),
    },
    EquipmentFixture {
        id: "eq-004",
        barcode: "EL004567890123",
        name: "Emergency Exit Light - Stairwell",
        kind: "emergency-light",
        location: "Building A - Stairwell B",
        manufacturer: "Lithonia Lighting",
        model: "ELM2",
        serial: "LL2024004",
        installed: "2024-03-05",
        last_inspected: Some("2024-11-05"),
        status: EquipmentStatus::Operational,
        condition: Condition::Excellent,
        notes: None,
    },
    EquipmentFixture {
        id: "eq-005",
        barcode: "HP005678901234",
        name: "Fire Pump - Mechanical Room",
        kind: "hydrant-pump",
        location: "Building A - Mechanical Room",
        manufacturer: "Grundfos",
        model: "CR64-2",
        serial: "GF2024005",
        installed: "2024-01-30",
        last_inspected: Some("2024-09-30"),
        status: EquipmentStatus::Operational,
        condition: Condition::Good,
        notes: None,
    },
    EquipmentFixture {
        id: "eq-006",
        barcode: "ED006789012345",
        name: "Emergency Door - North Exit",
        kind: "emergency-door",
        location: "Building B - North Exit",
        manufacturer: "Von Duprin",
        model: "99EO",
        serial: "VD2024006",
        installed: "2024-04-12",
        last_inspected: None,
        status: EquipmentStatus::Operational,
        condition: Condition::Good,
        notes: None,
    },
    EquipmentFixture {
        id: "eq-007",
        barcode: "FS007890123456",
        name: "Fire Suppression - Server Room",
        kind: "fire-suppression",
        location: "Building B - Server Room",
        manufacturer: "Kidde Fire Systems",
        model: "FM-200",
        serial: "KF2024007",
        installed: "2024-02-01",
        last_inspected: Some("2024-08-01"),
        status: EquipmentStatus::OutOfService,
        condition: Condition::Poor,
        notes: Some("Pressure system failure"),
    },
];

struct InspectionFixture {
    equipment_id: &'static str,
    inspector: &'static str,
    date: &'static str,
    condition: Condition,
    checklist: &'static [(&'static str, bool)],
    photo: &'static str,
    notes: &'static str,
}

const INSPECTIONS: &[InspectionFixture] = &[
    InspectionFixture {
        equipment_id: "eq-001",
        inspector: "John Smith",
        date: "2024-11-01",
        condition: Condition::Excellent,
        checklist: &[
            ("accessibility", true),
            ("visual_condition", true),
            ("pressure_gauge", true),
            ("safety_seal", true),
            ("location_sign", true),
            ("inspection_tag", true),
        ],
        photo: "/fire-extinguisher-inspection.jpg",
        notes: "All checks passed. Equipment in excellent condition.",
    },
    InspectionFixture {
        equipment_id: "eq-002",
        inspector: "Sarah Johnson",
        date: "2024-10-15",
        condition: Condition::Good,
        checklist: &[
            ("accessibility", true),
            ("visual_condition", true),
            ("test_activation", true),
            ("power_indicator", true),
            ("mounting", true),
        ],
        photo: "/smoke-detector-inspection.jpg",
        notes: "Detector functioning properly. Battery level good.",
    },
    InspectionFixture {
        equipment_id: "eq-003",
        inspector: "Mike Wilson",
        date: "2024-08-20",
        condition: Condition::Fair,
        checklist: &[
            ("accessibility", true),
            ("visual_condition", false),
            ("valve_operation", true),
            ("hose_condition", true),
            ("location_sign", true),
        ],
        photo: "/fire-hydrant-inspection.jpg",
        notes: "Valve handle shows signs of corrosion. Recommend maintenance.",
    },
    InspectionFixture {
        equipment_id: "eq-007",
        inspector: "Jane Doe",
        date: "2024-08-01",
        condition: Condition::Poor,
        checklist: &[
            ("visual_condition", true),
            ("pressure_gauge", false),
            ("nozzle_condition", true),
            ("control_panel", false),
            ("location_sign", true),
        ],
        photo: "/fire-suppression-inspection.jpg",
        notes: "Agent container pressure below operating range. Panel reports fault.",
    },
];

fn parse_date(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| AppError::Internal(format!("Invalid fixture date {}: {}", value, e)))
}

fn build_equipment(fixture: &EquipmentFixture) -> AppResult<Equipment> {
    let kind = equipment_type::find(fixture.kind)
        .ok_or_else(|| AppError::Internal(format!("Unknown fixture type {}", fixture.kind)))?;
    let installation_date = parse_date(fixture.installed)?;
    let last_inspection_date = fixture.last_inspected.map(parse_date).transpose()?;
    let baseline = last_inspection_date.unwrap_or(installation_date);

    Ok(Equipment {
        id: fixture.id.to_string(),
        barcode: fixture.barcode.to_string(),
        name: fixture.name.to_string(),
        equipment_type: fixture.kind.to_string(),
        location: fixture.location.to_string(),
        manufacturer: fixture.manufacturer.to_string(),
        model: fixture.model.to_string(),
        serial_number: fixture.serial.to_string(),
        installation_date,
        last_inspection_date,
        next_inspection_date: next_inspection_date(baseline, kind).ok_or_else(|| {
            AppError::Internal(format!("Fixture {} schedule overflows", fixture.id))
        })?,
        status: fixture.status,
        condition: fixture.condition,
        notes: fixture.notes.map(str::to_string),
    })
}

fn build_inspection(fixture: &InspectionFixture, equipment_name: &str) -> AppResult<NewInspection> {
    let checklist: IndexMap<String, bool> = fixture
        .checklist
        .iter()
        .map(|(key, passed)| (key.to_string(), *passed))
        .collect();

    Ok(NewInspection {
        equipment_id: fixture.equipment_id.to_string(),
        equipment_name: equipment_name.to_string(),
        inspector_name: fixture.inspector.to_string(),
        inspection_date: parse_date(fixture.date)?,
        overall_condition: fixture.condition,
        result: InspectionResult::from(fixture.condition),
        score: checklist_score(&checklist),
        checklist,
        photos: vec![fixture.photo.to_string()],
        notes: fixture.notes.to_string(),
    })
}

/// Populate the repository with the demonstration fixtures
pub async fn load(repository: &Repository) -> AppResult<()> {
    for fixture in EQUIPMENT {
        repository.equipment.create(build_equipment(fixture)?).await?;
    }
    for fixture in INSPECTIONS {
        let equipment = repository.equipment.get_by_id(fixture.equipment_id).await?;
        repository
            .inspections
            .create(build_inspection(fixture, &equipment.name)?)
            .await?;
    }

    tracing::info!(
        "Loaded {} equipment records and {} inspections",
        EQUIPMENT.len(),
        INSPECTIONS.len()
    );
    Ok(())
}
