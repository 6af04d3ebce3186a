//! Classification CSV: the comparison columns plus diagnosis and action.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use courier_model::ClassifiedCourier;

use crate::common::{employment_cells, leave_cells};
use crate::comparison::COMPARISON_COLUMNS;

pub const CLASSIFICATION_FILE_NAME: &str = "courier_classification.csv";

/// Writes the classification CSV and returns its path.
pub fn write_classification_csv(
    output_dir: &Path,
    classified: &[ClassifiedCourier],
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir: {}", output_dir.display()))?;
    let output_path = output_dir.join(CLASSIFICATION_FILE_NAME);
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("create {}", output_path.display()))?;

    let mut header: Vec<&str> = COMPARISON_COLUMNS.to_vec();
    header.push("diagnosis");
    header.push("recommended_action");
    writer
        .write_record(&header)
        .with_context(|| format!("write header: {}", output_path.display()))?;

    for entry in classified {
        let courier = &entry.courier;
        let (employment_presence, first_name, last_name, status, city, hours) =
            employment_cells(courier);
        let (leave_presence, leave_type, leave_date, leave_status) = leave_cells(courier);
        let diagnosis = entry.classification.diagnosis.to_string();
        writer
            .write_record([
                courier.courier_id.as_str(),
                employment_presence,
                first_name,
                last_name,
                status,
                city,
                hours,
                leave_presence,
                leave_type,
                leave_date,
                leave_status,
                diagnosis.as_str(),
                entry.classification.action.as_str(),
            ])
            .with_context(|| format!("write row for courier {}", courier.courier_id))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", output_path.display()))?;
    Ok(output_path)
}
