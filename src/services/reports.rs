//! Report catalogue and export service

use std::{str::FromStr, sync::Arc};

use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    clock::Clock,
    compliance::{filter::ALL, status::due_state_of, FilterCriteria},
    config::InspectionConfig,
    error::{AppError, AppResult},
    export::{spreadsheet, ExportFile, InspectionReport, SpreadsheetFormat},
    models::{checklist, DueState, Equipment, EquipmentStatus, InspectionDetails},
    repository::Repository,
    services::inspections::InspectionsService,
};

/// Available report kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    Compliance,
    Inspection,
    Critical,
    Inventory,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::Compliance,
        ReportKind::Inspection,
        ReportKind::Critical,
        ReportKind::Inventory,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Compliance => "compliance",
            ReportKind::Inspection => "inspection",
            ReportKind::Critical => "critical",
            ReportKind::Inventory => "inventory",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ReportKind::Compliance => "Equipment Compliance Report",
            ReportKind::Inspection => "Inspection Summary Report",
            ReportKind::Critical => "Critical Issues Report",
            ReportKind::Inventory => "Equipment Inventory Report",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ReportKind::Compliance => "Comprehensive overview of all equipment compliance status",
            ReportKind::Inspection => "Summary of all completed inspections",
            ReportKind::Critical => "List of all critical issues requiring immediate attention",
            ReportKind::Inventory => "Complete inventory of all fire safety equipment",
        }
    }
}

impl FromStr for ReportKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", s)))
    }
}

/// Catalogue entry
#[derive(Debug, Serialize, ToSchema)]
pub struct ReportDefinition {
    pub kind: ReportKind,
    pub name: String,
    pub description: String,
    /// File formats the export can produce
    pub formats: Vec<SpreadsheetFormat>,
}

impl From<ReportKind> for ReportDefinition {
    fn from(kind: ReportKind) -> Self {
        Self {
            kind,
            name: kind.name().to_string(),
            description: kind.description().to_string(),
            formats: SpreadsheetFormat::ALL.to_vec(),
        }
    }
}

/// One line of the inspection export
#[derive(Debug, Serialize)]
pub struct InspectionRow {
    #[serde(rename = "Equipment ID")]
    pub equipment: String,
    #[serde(rename = "Type")]
    pub equipment_type: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Inspector")]
    pub inspector: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Result")]
    pub result: String,
    #[serde(rename = "Score")]
    pub score: String,
}

impl From<&InspectionDetails> for InspectionRow {
    fn from(d: &InspectionDetails) -> Self {
        Self {
            equipment: d.equipment_barcode.clone(),
            equipment_type: d.type_name.clone(),
            location: d.location.clone(),
            inspector: d.inspection.inspector_name.clone(),
            date: d.inspection.inspection_date.format("%Y-%m-%d").to_string(),
            result: d.inspection.result.as_str().to_string(),
            score: format!("{}%", d.inspection.score),
        }
    }
}

/// Inspection line of a generated report
#[derive(Debug, Serialize)]
struct InspectionReportRow {
    #[serde(rename = "Report Type")]
    report_type: &'static str,
    #[serde(rename = "Equipment ID")]
    equipment: String,
    #[serde(rename = "Type")]
    equipment_type: String,
    #[serde(rename = "Location")]
    location: String,
    #[serde(rename = "Inspector")]
    inspector: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Result")]
    result: String,
    #[serde(rename = "Score")]
    score: String,
}

/// Equipment line of a generated report
#[derive(Debug, Serialize)]
struct EquipmentReportRow {
    #[serde(rename = "Report Type")]
    report_type: &'static str,
    #[serde(rename = "Equipment ID")]
    barcode: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Type")]
    equipment_type: String,
    #[serde(rename = "Location")]
    location: String,
    #[serde(rename = "Manufacturer")]
    manufacturer: String,
    #[serde(rename = "Model")]
    model: String,
    #[serde(rename = "Serial Number")]
    serial_number: String,
    #[serde(rename = "Last Inspection")]
    last_inspection: String,
    #[serde(rename = "Next Inspection")]
    next_inspection: String,
    #[serde(rename = "Status")]
    status: String,
    #[serde(rename = "Condition")]
    condition: String,
    #[serde(rename = "Due State")]
    due_state: String,
}

#[derive(Clone)]
pub struct ReportsService {
    repository: Repository,
    inspections: InspectionsService,
    config: InspectionConfig,
    clock: Arc<dyn Clock>,
}

impl ReportsService {
    pub fn new(
        repository: Repository,
        inspections: InspectionsService,
        config: InspectionConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            inspections,
            config,
            clock,
        }
    }

    /// Report catalogue, optionally restricted to one kind ("all" disables)
    pub fn catalog(&self, kind: Option<&str>) -> Vec<ReportDefinition> {
        ReportKind::ALL
            .into_iter()
            .filter(|k| match kind {
                None | Some(ALL) => true,
                Some(wanted) => k.as_str() == wanted,
            })
            .map(ReportDefinition::from)
            .collect()
    }

    /// Every recorded inspection as a spreadsheet
    pub async fn export_inspections(&self, format: SpreadsheetFormat) -> AppResult<ExportFile> {
        let details = self.inspections.list(&FilterCriteria::default()).await?;
        let rows: Vec<InspectionRow> = details.iter().map(InspectionRow::from).collect();
        let filename =
            spreadsheet::dated_filename("fire-safety-inspections", self.clock.today(), format);
        self.logged(spreadsheet::write_rows(&rows, filename, "Inspections", format))
    }

    /// Generate one catalogue report
    pub async fn export_report(
        &self,
        kind: ReportKind,
        format: SpreadsheetFormat,
    ) -> AppResult<ExportFile> {
        let today = self.clock.today();
        let filename = spreadsheet::dated_filename(kind.name(), today, format);

        let file = match kind {
            ReportKind::Inspection => {
                let details = self.inspections.list(&FilterCriteria::default()).await?;
                let rows: Vec<InspectionReportRow> = details
                    .iter()
                    .map(|d| {
                        let row = InspectionRow::from(d);
                        InspectionReportRow {
                            report_type: kind.name(),
                            equipment: row.equipment,
                            equipment_type: row.equipment_type,
                            location: row.location,
                            inspector: row.inspector,
                            date: row.date,
                            result: row.result,
                            score: row.score,
                        }
                    })
                    .collect();
                spreadsheet::write_rows(&rows, filename, kind.name(), format)
            }
            ReportKind::Compliance | ReportKind::Critical | ReportKind::Inventory => {
                let lookahead = self.config.due_soon_days;
                let rows: Vec<EquipmentReportRow> = self
                    .repository
                    .equipment
                    .list()
                    .await?
                    .iter()
                    .map(|e| (e, due_state_of(e, today, lookahead)))
                    .filter(|(e, due)| kind != ReportKind::Critical || is_critical(e, *due))
                    .map(|(e, due)| equipment_row(kind, e, due))
                    .collect();
                spreadsheet::write_rows(&rows, filename, kind.name(), format)
            }
        };
        self.logged(file)
    }

    /// Printable report of a single inspection
    pub async fn inspection_report(&self, inspection_id: &str) -> AppResult<InspectionReport> {
        let details = self.inspections.get_by_id(inspection_id).await?;
        let definition = checklist::definition_for(&details.equipment_type);
        Ok(InspectionReport::build(&details, definition.as_ref()))
    }

    fn logged(&self, file: AppResult<ExportFile>) -> AppResult<ExportFile> {
        match &file {
            Ok(f) => tracing::info!("Generated export {}", f.filename),
            Err(e) => tracing::error!("Export failed: {}", e),
        }
        file
    }
}

/// Out of service, needing attention, or overdue
fn is_critical(e: &Equipment, due: DueState) -> bool {
    e.status != EquipmentStatus::Operational || due == DueState::Overdue
}

fn equipment_row(kind: ReportKind, e: &Equipment, due: DueState) -> EquipmentReportRow {
    EquipmentReportRow {
        report_type: kind.name(),
        barcode: e.barcode.clone(),
        name: e.name.clone(),
        equipment_type: crate::models::equipment_type::display_name(&e.equipment_type).to_string(),
        location: e.location.clone(),
        manufacturer: e.manufacturer.clone(),
        model: e.model.clone(),
        serial_number: e.serial_number.clone(),
        last_inspection: e
            .last_inspection_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        next_inspection: e.next_inspection_date.format("%Y-%m-%d").to_string(),
        status: e.status.to_string(),
        condition: e.condition.to_string(),
        due_state: due.as_str().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{clock::FixedClock, repository::seed};
    use calamine::{open_workbook_from_rs, Reader, Xlsx};
    use chrono::NaiveDate;
    use std::io::Cursor;

    async fn service() -> ReportsService {
        let repository = Repository::in_memory();
        seed::load(&repository).await.unwrap();
        let clock: Arc<dyn Clock> = Arc::new(FixedClock(NaiveDate::from_ymd_opt(2024, 12, 3).unwrap()));
        let inspections = InspectionsService::new(repository.clone(), clock.clone());
        ReportsService::new(repository, inspections, InspectionConfig::default(), clock)
    }

    #[tokio::test]
    async fn test_catalog_filter() {
        let svc = service().await;
        assert_eq!(svc.catalog(None).len(), 4);
        assert_eq!(svc.catalog(Some("all")).len(), 4);
        let critical = svc.catalog(Some("critical"));
        assert_eq!(critical.len(), 1);
        assert_eq!(critical[0].name, "Critical Issues Report");
        assert_eq!(critical[0].formats, SpreadsheetFormat::ALL.to_vec());
        assert!(svc.catalog(Some("bogus")).is_empty());
    }

    #[tokio::test]
    async fn test_export_inspections() {
        let svc = service().await;
        let file = svc.export_inspections(SpreadsheetFormat::Csv).await.unwrap();
        assert_eq!(file.filename, "fire-safety-inspections-2024-12-03.csv");
        assert_eq!(file.sheet_name.as_deref(), Some("Inspections"));

        let text = String::from_utf8(file.bytes).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("Equipment ID,Type,Location,Inspector,Date,Result,Score")
        );
        assert_eq!(lines.count(), 4);
        assert!(text.contains("FE001234567890,Fire Extinguisher (APAR),Building A - Main Lobby,John Smith,2024-11-01,passed,100%"));
    }

    #[tokio::test]
    async fn test_critical_report_lists_only_problem_equipment() {
        let svc = service().await;
        let file = svc
            .export_report(ReportKind::Critical, SpreadsheetFormat::Csv)
            .await
            .unwrap();
        assert_eq!(file.filename, "critical-issues-report-2024-12-03.csv");

        let text = String::from_utf8(file.bytes).unwrap();
        assert!(text.starts_with("Report Type,Equipment ID,Name"));
        assert!(text.contains("FS007890123456"));
        assert!(text.contains("HY003456789012"));
        assert!(!text.contains("HP005678901234"));
        assert!(text.contains(",Out of Service,"));
    }

    #[tokio::test]
    async fn test_report_workbook_is_named_after_report() {
        let svc = service().await;
        let file = svc
            .export_report(ReportKind::Inventory, SpreadsheetFormat::Xlsx)
            .await
            .unwrap();
        assert_eq!(file.filename, "equipment-inventory-report-2024-12-03.xlsx");
        assert_eq!(file.content_type, spreadsheet::XLSX_CONTENT_TYPE);

        let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(file.bytes)).unwrap();
        assert_eq!(workbook.sheet_names(), vec!["Equipment Inventory Report".to_string()]);
        let range = workbook.worksheet_range("Equipment Inventory Report").unwrap();
        assert_eq!(range.height(), 8);
        let header: Vec<String> = range
            .rows()
            .next()
            .unwrap()
            .iter()
            .map(|c| c.to_string())
            .collect();
        assert_eq!(header[0], "Report Type");
        assert_eq!(header[1], "Equipment ID");
    }

    #[tokio::test]
    async fn test_inspection_report_labels_checklist() {
        let svc = service().await;
        let id = svc
            .inspections
            .list(&FilterCriteria::default())
            .await
            .unwrap()
            .into_iter()
            .find(|d| d.inspection.equipment_id == "eq-001")
            .map(|d| d.inspection.id)
            .unwrap();

        let report = svc.inspection_report(&id).await.unwrap();
        assert_eq!(report.filename(), "inspection-report-FE001234567890-2024-11-01.json");
        assert_eq!(report.checklist[3].label, "Safety Seal/Pin");
        assert!(report.checklist.iter().all(|c| c.passed));
    }
}
