//! Per-type inspection checklist definitions

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use utoipa::ToSchema;

/// One yes/no inspection criterion
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChecklistItem {
    pub key: String,
    pub label: String,
    pub description: String,
    pub required: bool,
}

/// Ordered checklist for one equipment type
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChecklistDefinition {
    pub equipment_type: String,
    pub items: Vec<ChecklistItem>,
}

impl ChecklistDefinition {
    pub fn required_items(&self) -> impl Iterator<Item = &ChecklistItem> {
        self.items.iter().filter(|item| item.required)
    }

    pub fn item(&self, key: &str) -> Option<&ChecklistItem> {
        self.items.iter().find(|item| item.key == key)
    }

    /// Human label for a key, falling back to the key itself
    pub fn label<'a>(&'a self, key: &'a str) -> &'a str {
        self.item(key).map(|item| item.label.as_str()).unwrap_or(key)
    }
}

fn item(key: &str, label: &str, description: &str, required: bool) -> ChecklistItem {
    ChecklistItem {
        key: key.to_string(),
        label: label.to_string(),
        description: description.to_string(),
        required,
    }
}

fn accessibility() -> ChecklistItem {
    item(
        "accessibility",
        "Accessibility Check",
        "Equipment is easily accessible and not blocked",
        true,
    )
}

fn visual_condition() -> ChecklistItem {
    item(
        "visual_condition",
        "Visual Condition",
        "No visible damage, corrosion, or leakage",
        true,
    )
}

fn signage(description: &str) -> ChecklistItem {
    item("location_sign", "Location Signage", description, true)
}

fn inspection_tag() -> ChecklistItem {
    item(
        "inspection_tag",
        "Inspection Tag",
        "Previous inspection tag is present and up to date",
        false,
    )
}

static DEFINITIONS: Lazy<HashMap<&'static str, Vec<ChecklistItem>>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(
        "fire-extinguisher",
        vec![
            accessibility(),
            visual_condition(),
            item(
                "pressure_gauge",
                "Pressure Gauge",
                "Pressure gauge shows proper pressure level",
                true,
            ),
            item(
                "safety_seal",
                "Safety Seal/Pin",
                "Safety seal and pin are intact and in place",
                true,
            ),
            signage("Fire extinguisher sign is visible and legible"),
            inspection_tag(),
        ],
    );
    m.insert(
        "fire-alarm",
        vec![
            accessibility(),
            visual_condition(),
            item(
                "test_activation",
                "Test Activation",
                "Alarm sounds when the test button or test smoke is applied",
                true,
            ),
            item(
                "power_indicator",
                "Power Indicator",
                "Power or battery indicator shows normal operation",
                true,
            ),
            item(
                "mounting",
                "Mounting",
                "Device is firmly mounted at the correct position",
                false,
            ),
            inspection_tag(),
        ],
    );
    m.insert(
        "hydrant",
        vec![
            accessibility(),
            visual_condition(),
            item(
                "valve_operation",
                "Valve Operation",
                "Valve opens and closes fully without excessive force",
                true,
            ),
            item(
                "hose_condition",
                "Hose Condition",
                "Hose and couplings are free of cracks and leaks",
                true,
            ),
            signage("Hydrant marker is visible and legible"),
        ],
    );
    m.insert(
        "hydrant-pump",
        vec![
            visual_condition(),
            item(
                "start_test",
                "Start Test",
                "Pump starts automatically on pressure drop",
                true,
            ),
            item(
                "pressure_test",
                "Discharge Pressure",
                "Discharge pressure reaches the rated value",
                true,
            ),
            item(
                "control_panel",
                "Control Panel",
                "Controller shows no fault indications",
                true,
            ),
            item(
                "leak_check",
                "Leak Check",
                "No leaks at packing glands, seals or fittings",
                false,
            ),
        ],
    );
    m.insert(
        "emergency-light",
        vec![
            visual_condition(),
            item(
                "illumination_test",
                "Illumination Test",
                "Lamp illuminates when mains power is interrupted",
                true,
            ),
            item(
                "battery_test",
                "Battery Test",
                "Battery sustains illumination for the rated duration",
                true,
            ),
            signage("Exit sign is visible and legible"),
        ],
    );
    m.insert(
        "emergency-door",
        vec![
            accessibility(),
            item(
                "door_operation",
                "Door Operation",
                "Door opens freely in the direction of egress",
                true,
            ),
            item(
                "panic_hardware",
                "Panic Hardware",
                "Push bar releases the latch with a single motion",
                true,
            ),
            signage("Emergency exit sign is visible and legible"),
        ],
    );
    m.insert(
        "fire-suppression",
        vec![
            visual_condition(),
            item(
                "pressure_gauge",
                "Pressure Gauge",
                "Agent container pressure is within the operating range",
                true,
            ),
            item(
                "nozzle_condition",
                "Nozzle Condition",
                "Discharge nozzles are unobstructed and undamaged",
                true,
            ),
            item(
                "control_panel",
                "Control Panel",
                "Release panel shows no fault indications",
                true,
            ),
            signage("Warning signage is visible and legible"),
            inspection_tag(),
        ],
    );
    m
});

/// Checklist for an equipment type id
pub fn definition_for(equipment_type: &str) -> Option<ChecklistDefinition> {
    DEFINITIONS
        .get(equipment_type)
        .map(|items| ChecklistDefinition {
            equipment_type: equipment_type.to_string(),
            items: items.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::equipment_type;

    #[test]
    fn test_every_type_has_a_checklist() {
        for t in equipment_type::all() {
            let def = definition_for(&t.id).expect("checklist missing");
            assert!(def.required_items().count() > 0, "{} has no required items", t.id);
        }
    }

    #[test]
    fn test_extinguisher_checklist() {
        let def = definition_for("fire-extinguisher").unwrap();
        assert_eq!(def.items.len(), 6);
        assert_eq!(def.required_items().count(), 5);
        assert!(!def.item("inspection_tag").unwrap().required);
        assert_eq!(def.label("safety_seal"), "Safety Seal/Pin");
        assert_eq!(def.label("bogus"), "bogus");
    }
}
