//! Dashboard statistics service

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    clock::Clock,
    compliance::status::{self, compliance_rate, due_state_of, percentage},
    config::InspectionConfig,
    error::AppResult,
    models::{
        equipment_type, DueState, Equipment, EquipmentDetails, EquipmentStatus, Inspection,
        InspectionResult,
    },
    repository::Repository,
};

/// Equipment status breakdown
#[derive(Debug, Serialize, ToSchema)]
pub struct EquipmentStats {
    pub total: usize,
    pub operational: usize,
    pub needs_attention: usize,
    pub out_of_service: usize,
    /// Compliance rate (share of operational equipment)
    pub operational_percentage: u8,
}

/// Inspection result breakdown
#[derive(Debug, Serialize, ToSchema)]
pub struct InspectionStats {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub needs_attention: usize,
    pub pass_rate: u8,
}

/// Equipment count per due state
#[derive(Debug, Default, Serialize, ToSchema)]
pub struct ScheduleStats {
    pub completed: usize,
    pub pending: usize,
    pub overdue: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TypeCount {
    pub equipment_type: String,
    pub name: String,
    pub count: usize,
}

/// Inspections recorded during one calendar month
#[derive(Debug, Serialize, ToSchema)]
pub struct MonthlyTrend {
    /// `YYYY-MM`
    pub month: String,
    pub completed: usize,
    /// Inspections whose result was not `passed`
    pub failed: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Overdue,
    OutOfService,
}

/// Equipment requiring action
#[derive(Debug, Serialize, ToSchema)]
pub struct Alert {
    pub kind: AlertKind,
    pub equipment_id: String,
    pub barcode: String,
    pub type_name: String,
    pub location: String,
    /// Set for overdue alerts
    pub days_overdue: Option<i64>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardStats {
    pub as_of: NaiveDate,
    pub equipment: EquipmentStats,
    pub inspections: InspectionStats,
    pub schedule: ScheduleStats,
    pub by_type: Vec<TypeCount>,
    pub trends: Vec<MonthlyTrend>,
    pub alerts: Vec<Alert>,
}

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
    config: InspectionConfig,
    clock: Arc<dyn Clock>,
}

pub fn equipment_stats(equipment: &[Equipment]) -> EquipmentStats {
    let count = |s: EquipmentStatus| equipment.iter().filter(|e| e.status == s).count();
    EquipmentStats {
        total: equipment.len(),
        operational: count(EquipmentStatus::Operational),
        needs_attention: count(EquipmentStatus::NeedsAttention),
        out_of_service: count(EquipmentStatus::OutOfService),
        operational_percentage: compliance_rate(equipment),
    }
}

pub fn inspection_stats(inspections: &[Inspection]) -> InspectionStats {
    let count = |r: InspectionResult| inspections.iter().filter(|i| i.result == r).count();
    let passed = count(InspectionResult::Passed);
    InspectionStats {
        total: inspections.len(),
        passed,
        failed: count(InspectionResult::Failed),
        needs_attention: count(InspectionResult::NeedsAttention),
        pass_rate: percentage(passed, inspections.len()),
    }
}

/// First day of the month `back` months before the month of `date`
fn month_start(date: NaiveDate, back: u32) -> Option<NaiveDate> {
    let index = date.year() * 12 + date.month0() as i32 - back as i32;
    NaiveDate::from_ymd_opt(index.div_euclid(12), index.rem_euclid(12) as u32 + 1, 1)
}

/// Per-month completed/failed counts for the `months` months ending with
/// the month of `today`, oldest first
pub fn monthly_trends(inspections: &[Inspection], today: NaiveDate, months: u32) -> Vec<MonthlyTrend> {
    (0..months)
        .rev()
        .filter_map(|back| month_start(today, back))
        .map(|start| {
            let in_month: Vec<&Inspection> = inspections
                .iter()
                .filter(|i| {
                    i.inspection_date.year() == start.year()
                        && i.inspection_date.month() == start.month()
                })
                .collect();
            MonthlyTrend {
                month: start.format("%Y-%m").to_string(),
                completed: in_month.len(),
                failed: in_month
                    .iter()
                    .filter(|i| i.result != InspectionResult::Passed)
                    .count(),
            }
        })
        .collect()
}

impl StatsService {
    pub fn new(repository: Repository, config: InspectionConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            repository,
            config,
            clock,
        }
    }

    pub async fn dashboard(&self) -> AppResult<DashboardStats> {
        let today = self.clock.today();
        let equipment = self.repository.equipment.list().await?;
        let inspections = self.repository.inspections.list().await?;

        let mut schedule = ScheduleStats::default();
        let mut alerts = Vec::new();
        for e in &equipment {
            match due_state_of(e, today, self.config.due_soon_days) {
                DueState::Completed => schedule.completed += 1,
                DueState::Pending => schedule.pending += 1,
                DueState::Overdue => {
                    schedule.overdue += 1;
                    alerts.push(alert(e, AlertKind::Overdue, Some(-status::days_until_due(e, today))));
                }
            }
            if e.status == EquipmentStatus::OutOfService {
                alerts.push(alert(e, AlertKind::OutOfService, None));
            }
        }

        let by_type = equipment_type::all()
            .iter()
            .map(|t| TypeCount {
                equipment_type: t.id.clone(),
                name: t.name.clone(),
                count: equipment.iter().filter(|e| e.equipment_type == t.id).count(),
            })
            .collect();

        Ok(DashboardStats {
            as_of: today,
            equipment: equipment_stats(&equipment),
            inspections: inspection_stats(&inspections),
            schedule,
            by_type,
            trends: monthly_trends(&inspections, today, self.config.trend_months),
            alerts,
        })
    }

    /// Equipment due within the lookahead window (overdue included),
    /// soonest first
    pub async fn upcoming(&self) -> AppResult<Vec<EquipmentDetails>> {
        let today = self.clock.today();
        let horizon =
            status::add_days(today, self.config.due_soon_days).unwrap_or(NaiveDate::MAX);

        let mut due: Vec<EquipmentDetails> = self
            .repository
            .equipment
            .list()
            .await?
            .into_iter()
            .filter(|e| e.next_inspection_date <= horizon)
            .map(|e| EquipmentDetails {
                type_name: equipment_type::display_name(&e.equipment_type).to_string(),
                due_state: due_state_of(&e, today, self.config.due_soon_days),
                days_until_due: status::days_until_due(&e, today),
                equipment: e,
            })
            .collect();
        due.sort_by_key(|d| d.equipment.next_inspection_date);
        Ok(due)
    }
}

fn alert(e: &Equipment, kind: AlertKind, days_overdue: Option<i64>) -> Alert {
    Alert {
        kind,
        equipment_id: e.id.clone(),
        barcode: e.barcode.clone(),
        type_name: equipment_type::display_name(&e.equipment_type).to_string(),
        location: e.location.clone(),
        days_overdue,
        notes: e.notes.clone(),
    }
}
