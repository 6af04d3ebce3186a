use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;
use tracing::info_span;

use courier_model::ClassifiedCourier;
use courier_recon::rule_catalog;

use crate::cli::RunArgs;
use crate::pipeline::{self, OutputConfig};
use crate::summary::apply_table_style;
use crate::types::{AuditResult, DiagnosisSummary};

pub fn run_rules() {
    let mut table = Table::new();
    table.set_header(vec!["#", "Condition", "Diagnosis", "Recommended action"]);
    apply_table_style(&mut table);
    for rule in rule_catalog() {
        table.add_row(vec![
            rule.number.to_string(),
            rule.condition.to_string(),
            rule.diagnosis.to_string(),
            rule.action.to_string(),
        ]);
    }
    println!("{table}");
}

pub fn run_audit(args: &RunArgs) -> Result<AuditResult> {
    let audit_span = info_span!("audit", dump = %args.dump_file.display());
    let _audit_guard = audit_span.enter();
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(args));

    let dump = pipeline::ingest(&args.dump_file)?;
    let couriers = pipeline::reconcile(&dump);
    let classified = pipeline::classify(&couriers);
    let stats = pipeline::aggregate(&classified);
    let artifacts = pipeline::output(OutputConfig {
        output_dir: &output_dir,
        dump_stats: &dump.stats,
        couriers: &couriers,
        classified: &classified,
        stats: &stats,
        dry_run: args.dry_run,
    })?;

    Ok(AuditResult {
        dump_path: args.dump_file.clone(),
        output_dir,
        diagnoses: diagnosis_summaries(&classified),
        stats,
        artifacts,
        skipped_rows: dump.skipped_rows,
    })
}

fn default_output_dir(args: &RunArgs) -> PathBuf {
    match args.dump_file.parent() {
        Some(parent) => parent.join("output"),
        None => PathBuf::from("output"),
    }
}

/// Groups classified couriers by diagnosis tag for the console table.
///
/// The decision table pairs each diagnosis with exactly one action, so the
/// first occurrence of a tag fixes the action column for that row.
fn diagnosis_summaries(classified: &[ClassifiedCourier]) -> Vec<DiagnosisSummary> {
    let mut by_tag: BTreeMap<String, DiagnosisSummary> = BTreeMap::new();
    for entry in classified {
        let row = by_tag
            .entry(entry.classification.diagnosis.to_string())
            .or_insert_with_key(|tag| DiagnosisSummary {
                diagnosis: tag.clone(),
                action: entry.classification.action,
                count: 0,
            });
        row.count += 1;
    }
    by_tag.into_values().collect()
}
