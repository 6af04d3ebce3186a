//! End-to-end artifact checks: join, classify, aggregate, then write all
//! four outputs and inspect their contents.

use std::collections::BTreeMap;

use tempfile::TempDir;

use courier_model::{
    CourierId, EMPLOYMENT_PRESENT_TAG, EmploymentRecord, EmploymentStatus, LEAVE_PRESENT_TAG,
    LeaveRecord,
};
use courier_recon::{classify_all, reconcile, summarize};
use courier_report::{
    write_classification_csv, write_comparison_csv, write_reconciliation_json, write_summary_text,
};

fn id(raw: &str) -> CourierId {
    CourierId::new(raw).expect("valid id")
}

fn employment(status: &str) -> EmploymentRecord {
    EmploymentRecord {
        presence: EMPLOYMENT_PRESENT_TAG.to_string(),
        first_name: "Ana".to_string(),
        last_name: "Ruiz".to_string(),
        status: EmploymentStatus::parse(status),
        city: "Madrid".to_string(),
        hours: "40".to_string(),
    }
}

fn leave() -> LeaveRecord {
    LeaveRecord {
        presence: LEAVE_PRESENT_TAG.to_string(),
        leave_type: "medical".to_string(),
        leave_date: "2024-03-11".to_string(),
        leave_status: "approved".to_string(),
    }
}

#[test]
fn all_four_artifacts_agree_on_the_same_run() {
    let employees = BTreeMap::from([
        (id("C1"), employment("active")),
        (id("C2"), employment("active")),
        (id("C3"), employment("penalized")),
    ]);
    let leaves = BTreeMap::from([(id("C2"), leave()), (id("C4"), leave())]);

    let joined = reconcile(&employees, &leaves);
    let classified = classify_all(&joined);
    let stats = summarize(&classified);

    let dir = TempDir::new().expect("create temp dir");
    let comparison = write_comparison_csv(dir.path(), &joined).expect("comparison");
    let classification = write_classification_csv(dir.path(), &classified).expect("classification");
    let summary = write_summary_text(
        dir.path(),
        &[("employees_total".to_string(), "3".to_string())],
        &stats,
    )
    .expect("summary");
    let json = write_reconciliation_json(dir.path(), &stats, &classified).expect("json");

    // Both CSVs carry one header plus one row per courier in the union.
    let comparison_text = std::fs::read_to_string(&comparison).expect("read comparison");
    let classification_text = std::fs::read_to_string(&classification).expect("read class csv");
    assert_eq!(comparison_text.lines().count(), 5);
    assert_eq!(classification_text.lines().count(), 5);

    // Rows come out in identifier order, and the conflict classifies as such.
    let second_row = classification_text.lines().nth(2).expect("C2 row");
    assert!(second_row.starts_with("C2,"));
    assert!(second_row.contains("ACTIVE_CONFLICT_WITH_LEAVE"));
    assert!(second_row.ends_with("REVIEW_LEAVE_STATUS"));

    let summary_text = std::fs::read_to_string(&summary).expect("read summary");
    assert!(summary_text.contains("TOTAL COURIER IDS ANALYZED: 4"));
    assert!(summary_text.contains("- employees_total: 3"));
    assert!(summary_text.contains("- active: 2"));

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json).expect("read json"))
            .expect("parse json");
    assert_eq!(value["summary"]["total_couriers"], 4);
    assert_eq!(value["couriers"].as_array().map(Vec::len), Some(4));
    assert_eq!(value["couriers"][3]["diagnosis"], "EMPLOYEE_REMOVED_WITH_LEAVE");
}
