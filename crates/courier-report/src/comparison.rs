//! Side-by-side comparison CSV, one row per courier in the union.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use courier_model::JoinedCourier;

use crate::common::{employment_cells, leave_cells};

pub const COMPARISON_FILE_NAME: &str = "courier_comparison.csv";

pub(crate) const COMPARISON_COLUMNS: [&str; 11] = [
    "courier_id",
    "present_in_employees",
    "first_name",
    "last_name",
    "status",
    "city",
    "hours",
    "present_in_company_leaves",
    "leave_type",
    "leave_date",
    "leave_status",
];

/// Writes the comparison CSV and returns its path. Input order is preserved,
/// which for pipeline output means identifier order. The header row is
/// written even when there are no couriers.
pub fn write_comparison_csv(output_dir: &Path, couriers: &[JoinedCourier]) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir: {}", output_dir.display()))?;
    let output_path = output_dir.join(COMPARISON_FILE_NAME);
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("create {}", output_path.display()))?;
    writer
        .write_record(COMPARISON_COLUMNS)
        .with_context(|| format!("write header: {}", output_path.display()))?;
    for courier in couriers {
        let (employment_presence, first_name, last_name, status, city, hours) =
            employment_cells(courier);
        let (leave_presence, leave_type, leave_date, leave_status) = leave_cells(courier);
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
            ])
            .with_context(|| format!("write row for courier {}", courier.courier_id))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", output_path.display()))?;
    Ok(output_path)
}
