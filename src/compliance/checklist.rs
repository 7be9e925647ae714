//! Checklist validation

use indexmap::IndexMap;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{ChecklistDefinition, Condition};

/// Outcome of validating an in-progress inspection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ValidationReport {
    pub valid: bool,
    /// Required checklist keys left unanswered, followed by
    /// `overall_condition` / `inspector_name` when those are missing
    pub missing: Vec<String>,
    /// Answer keys that are not part of the checklist
    pub unknown: Vec<String>,
    /// Checklist keys answered as failed; these call for explanatory notes
    pub failed: Vec<String>,
}

/// Check an inspection submission against its checklist definition.
///
/// A failed item (`false`) counts as answered.
pub fn validate(
    definition: &ChecklistDefinition,
    answers: &IndexMap<String, Option<bool>>,
    overall_condition: Option<&str>,
    inspector_name: &str,
) -> ValidationReport {
    let mut missing: Vec<String> = definition
        .required_items()
        .filter(|item| !matches!(answers.get(&item.key), Some(Some(_))))
        .map(|item| item.key.clone())
        .collect();

    if overall_condition
        .map(|c| c.parse::<Condition>().is_err())
        .unwrap_or(true)
    {
        missing.push("overall_condition".to_string());
    }

    if inspector_name.trim().is_empty() {
        missing.push("inspector_name".to_string());
    }

    let unknown: Vec<String> = answers
        .keys()
        .filter(|key| definition.item(key).is_none())
        .cloned()
        .collect();

    let failed: Vec<String> = definition
        .items
        .iter()
        .filter(|item| answers.get(&item.key) == Some(&Some(false)))
        .map(|item| item.key.clone())
        .collect();

    ValidationReport {
        valid: missing.is_empty() && unknown.is_empty(),
        missing,
        unknown,
        failed,
    }
}
