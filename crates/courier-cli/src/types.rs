use std::path::PathBuf;

use courier_model::{RecommendedAction, SummaryStats};

use crate::pipeline::ArtifactPaths;

/// Everything one audit run produced, for the console summary.
#[derive(Debug)]
pub struct AuditResult {
    pub dump_path: PathBuf,
    pub output_dir: PathBuf,
    pub stats: SummaryStats,
    /// One row per distinct diagnosis, in tag order.
    pub diagnoses: Vec<DiagnosisSummary>,
    /// `None` on a dry run.
    pub artifacts: Option<ArtifactPaths>,
    /// Dump rows dropped by the lenient parser.
    pub skipped_rows: usize,
}

/// One diagnosis row of the console table.
#[derive(Debug)]
pub struct DiagnosisSummary {
    pub diagnosis: String,
    pub action: RecommendedAction,
    pub count: usize,
}
