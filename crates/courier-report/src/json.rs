//! Machine-readable report mirroring the classification CSV.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use courier_model::{ClassifiedCourier, SummaryStats};

pub const JSON_REPORT_FILE_NAME: &str = "reconciliation_report.json";

const REPORT_SCHEMA: &str = "courier-audit.reconciliation-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct ReconciliationReportPayload {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub summary: SummaryStats,
    pub couriers: Vec<CourierOutcomeJson>,
}

#[derive(Debug, Serialize)]
pub struct CourierOutcomeJson {
    pub courier_id: String,
    pub diagnosis: String,
    pub recommended_action: String,
}

/// Writes the JSON report and returns its path.
pub fn write_reconciliation_json(
    output_dir: &Path,
    stats: &SummaryStats,
    classified: &[ClassifiedCourier],
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir: {}", output_dir.display()))?;
    let output_path = output_dir.join(JSON_REPORT_FILE_NAME);
    let payload = ReconciliationReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        summary: stats.clone(),
        couriers: classified
            .iter()
            .map(|entry| CourierOutcomeJson {
                courier_id: entry.courier.courier_id.to_string(),
                diagnosis: entry.classification.diagnosis.to_string(),
                recommended_action: entry.classification.action.to_string(),
            })
            .collect(),
    };
    let json = serde_json::to_string_pretty(&payload)
        .with_context(|| format!("serialize {}", output_path.display()))?;
    std::fs::write(&output_path, format!("{json}\n"))
        .with_context(|| format!("write {}", output_path.display()))?;
    Ok(output_path)
}
