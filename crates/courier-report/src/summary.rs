//! Plain-text summary of one reconciliation run.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use courier_model::SummaryStats;

pub const SUMMARY_FILE_NAME: &str = "courier_summary.txt";

/// Renders the summary text: the raw statistics section of the dump verbatim
/// and in file order, then the derived counts, then the alphabetical status
/// histogram.
pub fn render_summary(dump_stats: &[(String, String)], stats: &SummaryStats) -> String {
    let mut out = String::new();
    out.push_str("COURIER ID RECONCILIATION SUMMARY\n");
    out.push_str(&"=".repeat(50));
    out.push_str("\n\n");

    out.push_str("GENERAL STATISTICS:\n");
    for (category, count) in dump_stats {
        let _ = writeln!(out, "- {category}: {count}");
    }

    let _ = writeln!(out, "\nTOTAL COURIER IDS ANALYZED: {}", stats.total_couriers);
    let _ = writeln!(out, "PRESENT IN EMPLOYEES: {}", stats.employment_present);
    let _ = writeln!(out, "NOT PRESENT IN EMPLOYEES: {}", stats.employment_absent);
    let _ = writeln!(out, "PRESENT IN COMPANY LEAVES: {}", stats.leave_present);
    let _ = writeln!(out, "NOT PRESENT IN COMPANY LEAVES: {}", stats.leave_absent);

    out.push_str("\nSTATUS DISTRIBUTION IN EMPLOYEES:\n");
    for (status, count) in &stats.status_counts {
        let _ = writeln!(out, "- {status}: {count}");
    }
    out
}

/// Writes the summary file and returns its path.
pub fn write_summary_text(
    output_dir: &Path,
    dump_stats: &[(String, String)],
    stats: &SummaryStats,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir: {}", output_dir.display()))?;
    let output_path = output_dir.join(SUMMARY_FILE_NAME);
    let text = render_summary(dump_stats, stats);
    std::fs::write(&output_path, text)
        .with_context(|| format!("write {}", output_path.display()))?;
    Ok(output_path)
}
