//! Search and filter over equipment, inspections and schedule entries

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::models::{equipment_type, Equipment, EquipmentDetails, InspectionDetails};

/// Sentinel value that disables a filter dimension
pub const ALL: &str = "all";

/// List query shared by every searchable listing
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
pub struct FilterCriteria {
    /// Case-insensitive substring over barcode, location and type
    pub search: Option<String>,
    /// Exact status value, or "all"
    pub status: Option<String>,
    /// Exact equipment type id, or "all"
    pub equipment_type: Option<String>,
}

/// Something a `FilterCriteria` can be applied to
pub trait Filterable {
    fn barcode(&self) -> &str;
    fn location(&self) -> &str;
    /// Equipment type id
    fn type_id(&self) -> &str;
    /// Status value compared against the status filter
    fn status_key(&self) -> &str;
}

fn dimension(value: &Option<String>) -> Option<&str> {
    match value.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(v) if v.eq_ignore_ascii_case(ALL) => None,
        Some(v) => Some(v),
    }
}

impl FilterCriteria {
    pub fn matches<T: Filterable>(&self, item: &T) -> bool {
        if let Some(term) = dimension(&self.search) {
            let term = term.to_lowercase();
            let type_id = item.type_id();
            let hit = [
                item.barcode(),
                item.location(),
                type_id,
                equipment_type::display_name(type_id),
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(&term));
            if !hit {
                return false;
            }
        }
        if let Some(status) = dimension(&self.status) {
            if item.status_key() != status {
                return false;
            }
        }
        if let Some(kind) = dimension(&self.equipment_type) {
            if item.type_id() != kind {
                return false;
            }
        }
        true
    }
}

/// Keep the items matching `criteria`, preserving input order
pub fn filter<T: Filterable>(items: Vec<T>, criteria: &FilterCriteria) -> Vec<T> {
    items.into_iter().filter(|item| criteria.matches(item)).collect()
}

impl Filterable for Equipment {
    fn barcode(&self) -> &str {
        &self.barcode
    }
    fn location(&self) -> &str {
        &self.location
    }
    fn type_id(&self) -> &str {
        &self.equipment_type
    }
    fn status_key(&self) -> &str {
        self.status.as_str()
    }
}

/// Schedule entries filter on their due state
impl Filterable for EquipmentDetails {
    fn barcode(&self) -> &str {
        &self.equipment.barcode
    }
    fn location(&self) -> &str {
        &self.equipment.location
    }
    fn type_id(&self) -> &str {
        &self.equipment.equipment_type
    }
    fn status_key(&self) -> &str {
        self.due_state.as_str()
    }
}

impl Filterable for InspectionDetails {
    fn barcode(&self) -> &str {
        &self.equipment_barcode
    }
    fn location(&self) -> &str {
        &self.location
    }
    fn type_id(&self) -> &str {
        &self.equipment_type
    }
    fn status_key(&self) -> &str {
        self.inspection.result.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Condition, EquipmentStatus};
    use chrono::NaiveDate;

    fn item(id: &str, barcode: &str, kind: &str, location: &str, status: EquipmentStatus) -> Equipment {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        Equipment {
            id: id.to_string(),
            barcode: barcode.to_string(),
            name: id.to_string(),
            equipment_type: kind.to_string(),
            location: location.to_string(),
            manufacturer: String::new(),
            model: String::new(),
            serial_number: String::new(),
            installation_date: d,
            last_inspection_date: Some(d),
            next_inspection_date: d,
            status,
            condition: Condition::Good,
            notes: None,
        }
    }

    fn sample() -> Vec<Equipment> {
        vec![
            item("1", "FE001", "fire-extinguisher", "Building A - Lobby", EquipmentStatus::Operational),
            item("2", "FA001", "fire-alarm", "Building A - Floor 2", EquipmentStatus::NeedsAttention),
            item("3", "HY001", "hydrant", "Building B - Parking", EquipmentStatus::Operational),
            item("4", "FE002", "fire-extinguisher", "Building B - Kitchen", EquipmentStatus::OutOfService),
        ]
    }

    fn criteria(search: Option<&str>, status: Option<&str>, kind: Option<&str>) -> FilterCriteria {
        FilterCriteria {
            search: search.map(String::from),
            status: status.map(String::from),
            equipment_type: kind.map(String::from),
        }
    }

    fn ids(items: &[Equipment]) -> Vec<&str> {
        items.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let found = filter(sample(), &criteria(Some("fe0"), None, None));
        assert_eq!(ids(&found), vec!["1", "4"]);
    }

    #[test]
    fn test_search_matches_location_and_type_name() {
        assert_eq!(ids(&filter(sample(), &criteria(Some("parking"), None, None))), vec!["3"]);
        assert_eq!(ids(&filter(sample(), &criteria(Some("Fire Alarm"), None, None))), vec!["2"]);
    }

    #[test]
    fn test_all_sentinel_disables_dimension() {
        let found = filter(sample(), &criteria(None, Some("all"), Some("all")));
        assert_eq!(ids(&found), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_exact_filters_combine() {
        let found = filter(sample(), &criteria(None, Some("operational"), None));
        assert_eq!(ids(&found), vec!["1", "3"]);

        let found = filter(
            sample(),
            &criteria(Some("building b"), Some("out_of_service"), Some("fire-extinguisher")),
        );
        assert_eq!(ids(&found), vec!["4"]);

        let found = filter(sample(), &criteria(None, Some("operational"), Some("fire-alarm")));
        assert!(found.is_empty());
    }
}
