//! End-to-end join-then-classify scenarios over small input mappings.

use std::collections::BTreeMap;

use courier_model::{
    CourierId, Diagnosis, EMPLOYMENT_PRESENT_TAG, EmploymentRecord, EmploymentStatus,
    LEAVE_PRESENT_TAG, LeaveRecord, RecommendedAction,
};
use courier_recon::{classify_all, reconcile};

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
fn active_courier_without_leave_is_correct() {
    let employees = BTreeMap::from([(id("C1"), employment("active"))]);
    let classified = classify_all(&reconcile(&employees, &BTreeMap::new()));

    assert_eq!(classified.len(), 1);
    assert_eq!(classified[0].courier.courier_id.as_str(), "C1");
    assert_eq!(classified[0].classification.diagnosis, Diagnosis::ActiveNoLeave);
    assert_eq!(
        classified[0].classification.action,
        RecommendedAction::StatusCorrect
    );
}

#[test]
fn leave_only_courier_flags_a_removed_employee() {
    let leaves = BTreeMap::from([(id("C2"), leave())]);
    let classified = classify_all(&reconcile(&BTreeMap::new(), &leaves));

    assert_eq!(classified.len(), 1);
    assert_eq!(
        classified[0].classification.diagnosis,
        Diagnosis::EmployeeRemovedWithLeave
    );
}

#[test]
fn penalized_courier_stays_penalized_despite_a_leave() {
    // Penalized outranks the leave check; only active is cross-checked.
    let employees = BTreeMap::from([(id("C3"), employment("penalized"))]);
    let leaves = BTreeMap::from([(id("C3"), leave())]);
    let classified = classify_all(&reconcile(&employees, &leaves));

    assert_eq!(classified.len(), 1);
    assert_eq!(
        classified[0].classification.diagnosis,
        Diagnosis::EmployeePenalized
    );
    assert_eq!(
        classified[0].classification.action,
        RecommendedAction::VerifyPenaltyEndDate
    );
}
