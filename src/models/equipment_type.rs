//! Equipment type catalogue

use once_cell::sync::Lazy;
use serde::Serialize;
use utoipa::ToSchema;

/// Category of fire-safety asset with its own inspection interval
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EquipmentType {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    /// Days between two scheduled inspections
    pub inspection_interval: i64,
}

impl EquipmentType {
    fn new(id: &str, name: &str, description: &str, icon: &str, inspection_interval: i64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            inspection_interval,
        }
    }
}

static EQUIPMENT_TYPES: Lazy<Vec<EquipmentType>> = Lazy::new(|| {
    vec![
        EquipmentType::new(
            "fire-extinguisher",
            "Fire Extinguisher (APAR)",
            "Portable fire extinguishing equipment",
            "🧯",
            30,
        ),
        EquipmentType::new(
            "fire-alarm",
            "Fire Alarm",
            "Fire detection and alarm system",
            "🚨",
            90,
        ),
        EquipmentType::new(
            "hydrant",
            "Fire Hydrant",
            "Water supply for firefighting",
            "🚰",
            180,
        ),
        EquipmentType::new(
            "hydrant-pump",
            "Hydrant Pump",
            "Water pressure system for hydrants",
            "⚙️",
            90,
        ),
        EquipmentType::new(
            "emergency-light",
            "Emergency Light",
            "Emergency illumination system",
            "💡",
            30,
        ),
        EquipmentType::new(
            "emergency-door",
            "Emergency Door",
            "Emergency exit access",
            "🚪",
            90,
        ),
        EquipmentType::new(
            "fire-suppression",
            "Fire Suppression System",
            "Automatic fire suppression",
            "🌊",
            180,
        ),
    ]
});

/// All known equipment types, in catalogue order
pub fn all() -> &'static [EquipmentType] {
    &EQUIPMENT_TYPES
}

/// Look up an equipment type by id
pub fn find(id: &str) -> Option<&'static EquipmentType> {
    EQUIPMENT_TYPES.iter().find(|t| t.id == id)
}

/// Display name of a type id, falling back to the id itself
pub fn display_name(id: &str) -> &str {
    find(id).map(|t| t.name.as_str()).unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_ids_unique() {
        let mut ids: Vec<&str> = all().iter().map(|t| t.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), all().len());
    }

    #[test]
    fn test_find() {
        assert_eq!(find("fire-extinguisher").map(|t| t.inspection_interval), Some(30));
        assert_eq!(find("hydrant").map(|t| t.inspection_interval), Some(180));
        assert!(find("sprinkler").is_none());
        assert_eq!(display_name("fire-alarm"), "Fire Alarm");
        assert_eq!(display_name("sprinkler"), "sprinkler");
    }
}
