use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use courier_model::RecommendedAction;

use crate::types::{AuditResult, DiagnosisSummary};

pub fn print_summary(result: &AuditResult) {
    println!("Dump: {}", result.dump_path.display());
    match &result.artifacts {
        Some(artifacts) => {
            println!("Output: {}", result.output_dir.display());
            println!("Comparison CSV: {}", artifacts.comparison.display());
            println!("Classification CSV: {}", artifacts.classification.display());
            println!("Summary: {}", artifacts.summary.display());
            println!("JSON report: {}", artifacts.report_json.display());
        }
        None => println!("Output: skipped (dry run)"),
    }
    if result.skipped_rows > 0 {
        println!("Skipped dump rows: {}", result.skipped_rows);
    }
    println!("Couriers analyzed: {}", result.stats.total_couriers);
    println!(
        "Employees: {} present, {} absent",
        result.stats.employment_present, result.stats.employment_absent
    );
    println!(
        "Company leaves: {} present, {} absent",
        result.stats.leave_present, result.stats.leave_absent
    );

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Diagnosis"),
        header_cell("Recommended action"),
        header_cell("Couriers"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for row in &result.diagnoses {
        table.add_row(vec![
            diagnosis_cell(row),
            Cell::new(row.action.as_str()),
            Cell::new(row.count),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(result.stats.total_couriers).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

/// Plain style for listing tables such as the `rules` output.
pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if table.column_count() >= 3 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(28)),
            ColumnConstraint::LowerBoundary(Width::Fixed(24)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

// Color by outcome: the active-with-leave conflict is the anomaly this audit
// exists to catch, correct actives are fine, everything else needs a look.
fn diagnosis_cell(row: &DiagnosisSummary) -> Cell {
    match row.action {
        RecommendedAction::StatusCorrect => Cell::new(&row.diagnosis).fg(Color::Green),
        RecommendedAction::ReviewLeaveStatus => Cell::new(&row.diagnosis)
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        _ => Cell::new(&row.diagnosis).fg(Color::Yellow),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
