//! Parser for the psql reconciliation dump.
//!
//! The dump is the textual output of three queries separated by blank lines:
//! an employees section, a company-leaves section, and a category/count
//! statistics section. Sections are recognized by the column names in their
//! header line. Row-level problems never abort a run; malformed rows are
//! skipped, counted and logged.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, warn};

use courier_model::{CourierId, EmploymentRecord, EmploymentStatus, LeaveRecord};

use crate::error::{DumpError, Result};

const EMPLOYEES_MARKER: &str = "present_in_employees";
const LEAVES_MARKER: &str = "present_in_company_leaves";

const EMPLOYEE_MIN_CELLS: usize = 7;
const LEAVE_MIN_CELLS: usize = 5;

/// Everything extracted from one dump file.
#[derive(Debug, Clone, Default)]
pub struct CourierDump {
    pub employees: BTreeMap<CourierId, EmploymentRecord>,
    pub leaves: BTreeMap<CourierId, LeaveRecord>,
    /// Category/count pairs from the statistics section, in file order.
    pub stats: Vec<(String, String)>,
    /// Data rows dropped for being too short or missing an identifier.
    pub skipped_rows: usize,
}

/// Reads and parses a dump file. Only the read itself can fail.
pub fn read_dump(path: &Path) -> Result<CourierDump> {
    let content = std::fs::read_to_string(path).map_err(|source| DumpError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_dump(&content))
}

/// Parses dump text. Infallible: unrecognized sections and malformed rows
/// are skipped rather than reported as errors.
pub fn parse_dump(content: &str) -> CourierDump {
    let mut dump = CourierDump::default();
    for section in content.split("\n\n") {
        if section.contains(EMPLOYEES_MARKER) {
            parse_employees_section(section, &mut dump);
        } else if section.contains(LEAVES_MARKER) {
            parse_leaves_section(section, &mut dump);
        } else if section.contains("category") && section.contains("count") {
            parse_stats_section(section, &mut dump);
        }
    }
    debug!(
        employees = dump.employees.len(),
        leaves = dump.leaves.len(),
        stats = dump.stats.len(),
        skipped = dump.skipped_rows,
        "parsed dump"
    );
    dump
}

// The first two lines of a section are the column header and the dashed rule.
fn data_rows(section: &str) -> impl Iterator<Item = &str> {
    section
        .trim()
        .lines()
        .skip(2)
        .filter(|line| line.contains('|'))
}

fn split_cells(line: &str) -> Vec<&str> {
    line.split('|').map(str::trim).collect()
}

fn parse_employees_section(section: &str, dump: &mut CourierDump) {
    for line in data_rows(section) {
        let cells = split_cells(line);
        if cells.len() < EMPLOYEE_MIN_CELLS {
            debug!(cells = cells.len(), "skipping short employees row");
            dump.skipped_rows += 1;
            continue;
        }
        let Ok(id) = CourierId::new(cells[0]) else {
            warn!(line, "skipping employees row without courier id");
            dump.skipped_rows += 1;
            continue;
        };
        let record = EmploymentRecord {
            presence: cells[1].to_string(),
            first_name: cells[2].to_string(),
            last_name: cells[3].to_string(),
            status: EmploymentStatus::parse(cells[4]),
            city: cells[5].to_string(),
            hours: cells[6].to_string(),
        };
        if dump.employees.insert(id.clone(), record).is_some() {
            debug!(courier_id = %id, "duplicate employees row, keeping the later one");
        }
    }
}

fn parse_leaves_section(section: &str, dump: &mut CourierDump) {
    for line in data_rows(section) {
        let cells = split_cells(line);
        if cells.len() < LEAVE_MIN_CELLS {
            debug!(cells = cells.len(), "skipping short company-leaves row");
            dump.skipped_rows += 1;
            continue;
        }
        let Ok(id) = CourierId::new(cells[0]) else {
            warn!(line, "skipping company-leaves row without courier id");
            dump.skipped_rows += 1;
            continue;
        };
        let record = LeaveRecord {
            presence: cells[1].to_string(),
            leave_type: cells[2].to_string(),
            leave_date: cells[3].to_string(),
            leave_status: cells[4].to_string(),
        };
        if dump.leaves.insert(id.clone(), record).is_some() {
            debug!(courier_id = %id, "duplicate company-leaves row, keeping the later one");
        }
    }
}

fn parse_stats_section(section: &str, dump: &mut CourierDump) {
    for line in data_rows(section) {
        let cells = split_cells(line);
        if cells.len() < 2 {
            debug!(cells = cells.len(), "skipping short statistics row");
            dump.skipped_rows += 1;
            continue;
        }
        dump.stats.push((cells[0].to_string(), cells[1].to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courier_model::{EMPLOYMENT_PRESENT_TAG, LEAVE_PRESENT_TAG};

    const EMPLOYEES_SECTION: &str = "\
 courier_id | present_in_employees | first_name | last_name | status | city | hours
------------+----------------------+------------+-----------+--------+------+------
 C001       | PRESENT_IN_EMPLOYEES | Ana        | Ruiz      | active | MAD  | 40
 C002       | PRESENT_IN_EMPLOYEES | Luis       | Mora      | penalized | BCN | 30";

    const LEAVES_SECTION: &str = "\
 courier_id | present_in_company_leaves | leave_type | leave_date | leave_status
------------+---------------------------+------------+------------+-------------
 C002       | PRESENT_IN_COMPANY_LEAVES | medical    | 2024-02-01 | approved";

    const STATS_SECTION: &str = "\
 category        | count
-----------------+-------
 total_employees | 2
 total_leaves    | 1";

    fn full_dump() -> String {
        format!("{EMPLOYEES_SECTION}\n\n{LEAVES_SECTION}\n\n{STATS_SECTION}\n")
    }

    #[test]
    fn parses_all_three_sections() {
        let dump = parse_dump(&full_dump());
        assert_eq!(dump.employees.len(), 2);
        assert_eq!(dump.leaves.len(), 1);
        assert_eq!(
            dump.stats,
            vec![
                ("total_employees".to_string(), "2".to_string()),
                ("total_leaves".to_string(), "1".to_string()),
            ]
        );
        assert_eq!(dump.skipped_rows, 0);
    }

    #[test]
    fn employee_row_fields_land_in_order() {
        let dump = parse_dump(&full_dump());
        let id = CourierId::new("C001").expect("valid id");
        let record = dump.employees.get(&id).expect("C001 parsed");
        assert_eq!(record.presence, EMPLOYMENT_PRESENT_TAG);
        assert_eq!(record.first_name, "Ana");
        assert_eq!(record.last_name, "Ruiz");
        assert_eq!(record.status, EmploymentStatus::Active);
        assert_eq!(record.city, "MAD");
        assert_eq!(record.hours, "40");
    }

    #[test]
    fn leave_row_fields_land_in_order() {
        let dump = parse_dump(&full_dump());
        let id = CourierId::new("C002").expect("valid id");
        let record = dump.leaves.get(&id).expect("C002 parsed");
        assert_eq!(record.presence, LEAVE_PRESENT_TAG);
        assert_eq!(record.leave_type, "medical");
        assert_eq!(record.leave_date, "2024-02-01");
        assert_eq!(record.leave_status, "approved");
    }

    #[test]
    fn skips_rows_without_pipes_and_short_rows() {
        let section = "\
 courier_id | present_in_employees | first_name | last_name | status | city | hours
------------+----------------------+------------+-----------+--------+------+------
(2 rows)
 C003 | PRESENT_IN_EMPLOYEES | Eva | Gil
 C004 | PRESENT_IN_EMPLOYEES | Ana | Paz | active | MAD | 20";
        let dump = parse_dump(section);
        assert_eq!(dump.employees.len(), 1);
        assert_eq!(dump.skipped_rows, 1);
    }

    #[test]
    fn skips_rows_with_blank_identifier() {
        let section = "\
 courier_id | present_in_employees | first_name | last_name | status | city | hours
------------+----------------------+------------+-----------+--------+------+------
      | PRESENT_IN_EMPLOYEES | Eva | Gil | active | MAD | 10";
        let dump = parse_dump(section);
        assert!(dump.employees.is_empty());
        assert_eq!(dump.skipped_rows, 1);
    }

    #[test]
    fn later_duplicate_replaces_earlier() {
        let section = "\
 courier_id | present_in_employees | first_name | last_name | status | city | hours
------------+----------------------+------------+-----------+--------+------+------
 C005 | PRESENT_IN_EMPLOYEES | Eva | Gil | active | MAD | 10
 C005 | PRESENT_IN_EMPLOYEES | Eva | Gil | penalized | MAD | 10";
        let dump = parse_dump(section);
        let id = CourierId::new("C005").expect("valid id");
        let record = dump.employees.get(&id).expect("C005 parsed");
        assert_eq!(record.status, EmploymentStatus::Penalized);
    }

    #[test]
    fn unrecognized_sections_are_ignored() {
        let dump = parse_dump("some preamble text\n\nnothing tabular here\n");
        assert!(dump.employees.is_empty());
        assert!(dump.leaves.is_empty());
        assert!(dump.stats.is_empty());
    }

    #[test]
    fn empty_input_yields_empty_dump() {
        let dump = parse_dump("");
        assert!(dump.employees.is_empty());
        assert!(dump.leaves.is_empty());
    }
}
