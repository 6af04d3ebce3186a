use std::collections::{BTreeMap, BTreeSet};

use courier_model::{CourierId, EmploymentRecord, JoinedCourier, LeaveRecord};

/// Full outer join of the two datasets by courier id.
///
/// Every identifier appearing in either mapping yields exactly one entry,
/// carrying whichever records exist for it. Output is ordered by identifier
/// so downstream reports are byte-for-byte reproducible.
pub fn reconcile(
    employees: &BTreeMap<CourierId, EmploymentRecord>,
    leaves: &BTreeMap<CourierId, LeaveRecord>,
) -> Vec<JoinedCourier> {
    let ids: BTreeSet<&CourierId> = employees.keys().chain(leaves.keys()).collect();
    ids.into_iter()
        .map(|id| JoinedCourier {
            courier_id: id.clone(),
            employment: employees.get(id).cloned(),
            leave: leaves.get(id).cloned(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use courier_model::{EMPLOYMENT_PRESENT_TAG, EmploymentStatus, LEAVE_PRESENT_TAG};

    fn id(raw: &str) -> CourierId {
        CourierId::new(raw).expect("valid id")
    }

    fn employment() -> EmploymentRecord {
        EmploymentRecord {
            presence: EMPLOYMENT_PRESENT_TAG.to_string(),
            first_name: "Ana".to_string(),
            last_name: "Ruiz".to_string(),
            status: EmploymentStatus::Active,
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
    fn joins_union_of_both_key_sets() {
        let employees = BTreeMap::from([(id("C1"), employment()), (id("C2"), employment())]);
        let leaves = BTreeMap::from([(id("C2"), leave()), (id("C3"), leave())]);

        let joined = reconcile(&employees, &leaves);
        let ids: Vec<&str> = joined
            .iter()
            .map(|entry| entry.courier_id.as_str())
            .collect();
        assert_eq!(ids, vec!["C1", "C2", "C3"]);

        assert!(joined[0].employment.is_some() && joined[0].leave.is_none());
        assert!(joined[1].employment.is_some() && joined[1].leave.is_some());
        assert!(joined[2].employment.is_none() && joined[2].leave.is_some());
    }

    #[test]
    fn output_is_lexicographic_not_numeric() {
        let employees = BTreeMap::from([
            (id("C10"), employment()),
            (id("C2"), employment()),
            (id("C1"), employment()),
        ]);
        let leaves = BTreeMap::new();

        let joined = reconcile(&employees, &leaves);
        let ids: Vec<&str> = joined
            .iter()
            .map(|entry| entry.courier_id.as_str())
            .collect();
        assert_eq!(ids, vec!["C1", "C10", "C2"]);
    }

    #[test]
    fn empty_inputs_join_to_nothing() {
        let joined = reconcile(&BTreeMap::new(), &BTreeMap::new());
        assert!(joined.is_empty());
    }
}
