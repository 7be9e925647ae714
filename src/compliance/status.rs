//! Due-state and compliance derivation

use chrono::{Duration, NaiveDate};

use crate::models::{Condition, DueState, Equipment, EquipmentStatus};

/// Equipment status implied by an inspector's overall condition assessment.
///
/// This is the only place the mapping lives; inspection completion and
/// reporting both go through it.
pub fn status_for_condition(condition: Condition) -> EquipmentStatus {
    match condition {
        Condition::Excellent | Condition::Good => EquipmentStatus::Operational,
        Condition::Fair => EquipmentStatus::NeedsAttention,
        Condition::Poor => EquipmentStatus::OutOfService,
    }
}

/// `date` moved by `days`; None when the result leaves the calendar range
pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    Duration::try_days(days).and_then(|delta| date.checked_add_signed(delta))
}

/// Due state of an inspection scheduled for `next`.
///
/// Overdue strictly after `next`. Pending when `next` falls within
/// `lookahead_days`, or when the equipment has never been inspected.
pub fn derive_due_state(
    last: Option<NaiveDate>,
    next: NaiveDate,
    today: NaiveDate,
    lookahead_days: i64,
) -> DueState {
    if today > next {
        return DueState::Overdue;
    }
    if last.is_none() || (next - today).num_days() <= lookahead_days {
        return DueState::Pending;
    }
    DueState::Completed
}

/// Due state of a registered piece of equipment
pub fn due_state_of(equipment: &Equipment, today: NaiveDate, lookahead_days: i64) -> DueState {
    derive_due_state(
        equipment.last_inspection_date,
        equipment.next_inspection_date,
        today,
        lookahead_days,
    )
}

/// Whole days from `today` until the next inspection; negative when overdue
pub fn days_until_due(equipment: &Equipment, today: NaiveDate) -> i64 {
    (equipment.next_inspection_date - today).num_days()
}

/// Rounded percentage of `part` over `total`, 0 when `total` is 0
pub fn percentage(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round() as u8
}

/// Percentage of equipment currently operational; 0 for an empty registry
pub fn compliance_rate(equipment: &[Equipment]) -> u8 {
    let operational = equipment
        .iter()
        .filter(|e| e.status == EquipmentStatus::Operational)
        .count();
    percentage(operational, equipment.len())
}
