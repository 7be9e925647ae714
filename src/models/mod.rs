//! Data models for Firesafe

pub mod checklist;
pub mod enums;
pub mod equipment;
pub mod equipment_type;
pub mod inspection;

// Re-export commonly used types
pub use checklist::{ChecklistDefinition, ChecklistItem};
pub use enums::{Condition, DueState, EquipmentStatus, InspectionResult};
pub use equipment::{CreateEquipment, Equipment, EquipmentDetails, UpdateEquipment};
pub use equipment_type::EquipmentType;
pub use inspection::{Inspection, InspectionDetails, InspectionSubmission, NewInspection};
