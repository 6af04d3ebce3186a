//! Reconciliation pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: Read and parse the psql dump file
//! 2. **Reconcile**: Join the employees and company-leaves datasets on courier id
//! 3. **Classify**: Apply the decision table to every joined courier
//! 4. **Aggregate**: Derive the summary counters
//! 5. **Output**: Write the CSV, text and JSON artifacts
//!
//! Each stage takes the output of the previous stage and returns typed results.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span, warn};

use courier_ingest::{CourierDump, read_dump};
use courier_model::{ClassifiedCourier, JoinedCourier, SummaryStats};
use courier_report::{
    write_classification_csv, write_comparison_csv, write_reconciliation_json, write_summary_text,
};

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Read and parse the dump file.
///
/// Row-level problems were already handled leniently by the parser; the only
/// hard failure here is not being able to read the file at all.
pub fn ingest(dump_path: &Path) -> Result<CourierDump> {
    let ingest_span = info_span!("ingest", dump = %dump_path.display());
    let _ingest_guard = ingest_span.enter();
    let ingest_start = Instant::now();

    let dump = read_dump(dump_path)?;
    if dump.skipped_rows > 0 {
        warn!(
            skipped_rows = dump.skipped_rows,
            "malformed dump rows were skipped"
        );
    }
    info!(
        employees = dump.employees.len(),
        leaves = dump.leaves.len(),
        stats = dump.stats.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(dump)
}

// ============================================================================
// Stage 2: Reconcile
// ============================================================================

/// Join both datasets into one record per courier in the union of key sets.
pub fn reconcile(dump: &CourierDump) -> Vec<JoinedCourier> {
    let reconcile_span = info_span!("reconcile");
    let _reconcile_guard = reconcile_span.enter();
    let reconcile_start = Instant::now();

    let couriers = courier_recon::reconcile(&dump.employees, &dump.leaves);
    info!(
        courier_count = couriers.len(),
        employment_only = couriers.iter().filter(|c| c.leave.is_none()).count(),
        leave_only = couriers.iter().filter(|c| c.employment.is_none()).count(),
        duration_ms = reconcile_start.elapsed().as_millis(),
        "reconcile complete"
    );
    couriers
}

// ============================================================================
// Stage 3: Classify
// ============================================================================

/// Apply the decision table to every joined courier, preserving order.
pub fn classify(couriers: &[JoinedCourier]) -> Vec<ClassifiedCourier> {
    let classify_span = info_span!("classify");
    let _classify_guard = classify_span.enter();
    let classify_start = Instant::now();

    let classified = courier_recon::classify_all(couriers);
    info!(
        courier_count = classified.len(),
        duration_ms = classify_start.elapsed().as_millis(),
        "classify complete"
    );
    classified
}

// ============================================================================
// Stage 4: Aggregate
// ============================================================================

/// Derive the summary counters from the classified couriers.
pub fn aggregate(classified: &[ClassifiedCourier]) -> SummaryStats {
    let aggregate_span = info_span!("aggregate");
    let _aggregate_guard = aggregate_span.enter();
    let aggregate_start = Instant::now();

    let stats = courier_recon::summarize(classified);
    info!(
        total_couriers = stats.total_couriers,
        employment_present = stats.employment_present,
        leave_present = stats.leave_present,
        duration_ms = aggregate_start.elapsed().as_millis(),
        "aggregate complete"
    );
    stats
}

// ============================================================================
// Stage 5: Output
// ============================================================================

/// Paths of the written artifacts.
#[derive(Debug)]
pub struct ArtifactPaths {
    /// Side-by-side comparison CSV.
    pub comparison: PathBuf,
    /// Comparison columns plus diagnosis and recommended action.
    pub classification: PathBuf,
    /// Plain-text summary.
    pub summary: PathBuf,
    /// Machine-readable JSON report.
    pub report_json: PathBuf,
}

/// Output stage configuration.
pub struct OutputConfig<'a> {
    pub output_dir: &'a Path,
    /// Raw statistics pairs from the dump, rendered verbatim in the summary.
    pub dump_stats: &'a [(String, String)],
    pub couriers: &'a [JoinedCourier],
    pub classified: &'a [ClassifiedCourier],
    pub stats: &'a SummaryStats,
    pub dry_run: bool,
}

/// Write the four artifacts, or none on a dry run.
///
/// Any write failure aborts the run; partial output is never reported as
/// success.
pub fn output(config: OutputConfig<'_>) -> Result<Option<ArtifactPaths>> {
    let OutputConfig {
        output_dir,
        dump_stats,
        couriers,
        classified,
        stats,
        dry_run,
    } = config;
    let output_span = info_span!("output", output_dir = %output_dir.display());
    let _output_guard = output_span.enter();
    let output_start = Instant::now();

    if dry_run {
        info!(
            courier_count = couriers.len(),
            duration_ms = output_start.elapsed().as_millis(),
            "output skipped (dry run)"
        );
        return Ok(None);
    }

    let comparison = write_comparison_csv(output_dir, couriers)?;
    let classification = write_classification_csv(output_dir, classified)?;
    let summary = write_summary_text(output_dir, dump_stats, stats)?;
    let report_json = write_reconciliation_json(output_dir, stats, classified)?;
    info!(
        courier_count = couriers.len(),
        duration_ms = output_start.elapsed().as_millis(),
        "output complete"
    );
    Ok(Some(ArtifactPaths {
        comparison,
        classification,
        summary,
        report_json,
    }))
}
