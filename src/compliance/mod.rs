//! Inspection compliance rules
//!
//! Pure functions over the domain model: due-state derivation, checklist
//! validation, inspection completion and list filtering. Nothing in here
//! touches storage or the clock.

pub mod checklist;
pub mod completion;
pub mod filter;
pub mod status;

pub use checklist::{validate, ValidationReport};
pub use completion::{complete_inspection, next_inspection_date};
pub use filter::{filter, FilterCriteria, Filterable};
pub use status::{compliance_rate, derive_due_state, status_for_condition};
