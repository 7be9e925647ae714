//! Shared domain enums

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// EquipmentStatus
// ---------------------------------------------------------------------------

/// Compliance status of a piece of equipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentStatus {
    Operational,
    NeedsAttention,
    OutOfService,
}

impl EquipmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentStatus::Operational => "operational",
            EquipmentStatus::NeedsAttention => "needs_attention",
            EquipmentStatus::OutOfService => "out_of_service",
        }
    }
}

impl std::fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EquipmentStatus::Operational => "Operational",
            EquipmentStatus::NeedsAttention => "Needs Attention",
            EquipmentStatus::OutOfService => "Out of Service",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// Condition
// ---------------------------------------------------------------------------

/// Overall physical condition recorded by an inspector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Condition {
    pub const ALL: [Condition; 4] = [
        Condition::Excellent,
        Condition::Good,
        Condition::Fair,
        Condition::Poor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Excellent => "excellent",
            Condition::Good => "good",
            Condition::Fair => "fair",
            Condition::Poor => "poor",
        }
    }
}

impl FromStr for Condition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown condition: {}", s))
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Condition::Excellent => "Excellent",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
            Condition::Poor => "Poor",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// InspectionResult
// ---------------------------------------------------------------------------

/// Pass/fail outcome of a single inspection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum InspectionResult {
    Passed,
    NeedsAttention,
    Failed,
}

impl InspectionResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            InspectionResult::Passed => "passed",
            InspectionResult::NeedsAttention => "needs_attention",
            InspectionResult::Failed => "failed",
        }
    }
}

impl From<Condition> for InspectionResult {
    fn from(c: Condition) -> Self {
        match c {
            Condition::Excellent | Condition::Good => InspectionResult::Passed,
            Condition::Fair => InspectionResult::NeedsAttention,
            Condition::Poor => InspectionResult::Failed,
        }
    }
}

// ---------------------------------------------------------------------------
// DueState
// ---------------------------------------------------------------------------

/// Relationship between today and the next scheduled inspection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DueState {
    Completed,
    Pending,
    Overdue,
}

impl DueState {
    pub fn as_str(&self) -> &'static str {
        match self {
            DueState::Completed => "completed",
            DueState::Pending => "pending",
            DueState::Overdue => "overdue",
        }
    }
}
