//! Source records as parsed from the reconciliation dump.
//!
//! Each dump row carries its own presence tag: the extraction query joins the
//! two tables and materializes per-side presence as a column, so a courier can
//! appear in the employees section already flagged as absent there. Presence
//! checks therefore look at the tag, not just at whether a record exists.

use serde::{Deserialize, Serialize};

use crate::EmploymentStatus;

/// Tag on employees rows for couriers the employees table contains.
pub const EMPLOYMENT_PRESENT_TAG: &str = "PRESENT_IN_EMPLOYEES";
/// Sentinel for couriers the employees table does not contain.
pub const EMPLOYMENT_ABSENT_TAG: &str = "NOT_PRESENT_IN_EMPLOYEES";
/// Tag on company-leaves rows for couriers the leaves table contains.
pub const LEAVE_PRESENT_TAG: &str = "PRESENT_IN_COMPANY_LEAVES";
/// Sentinel for couriers the leaves table does not contain.
pub const LEAVE_ABSENT_TAG: &str = "NOT_PRESENT_IN_COMPANY_LEAVES";

/// One courier's row from the employees section of the dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentRecord {
    /// Raw presence tag from the dump row.
    pub presence: String,
    pub first_name: String,
    pub last_name: String,
    pub status: EmploymentStatus,
    pub city: String,
    /// Contracted hours, kept as the raw string (values like "37.5" occur).
    pub hours: String,
}

impl EmploymentRecord {
    pub fn is_present(&self) -> bool {
        self.presence != EMPLOYMENT_ABSENT_TAG
    }
}

/// One courier's row from the company-leaves section of the dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRecord {
    /// Raw presence tag from the dump row.
    pub presence: String,
    pub leave_type: String,
    /// Leave date, kept as the raw string found in the dump.
    pub leave_date: String,
    pub leave_status: String,
}

impl LeaveRecord {
    pub fn is_present(&self) -> bool {
        self.presence != LEAVE_ABSENT_TAG
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employment(presence: &str) -> EmploymentRecord {
        EmploymentRecord {
            presence: presence.to_string(),
            first_name: "Ana".to_string(),
            last_name: "Ruiz".to_string(),
            status: EmploymentStatus::Active,
            city: "Madrid".to_string(),
            hours: "40".to_string(),
        }
    }

    #[test]
    fn employment_presence_follows_tag() {
        assert!(employment(EMPLOYMENT_PRESENT_TAG).is_present());
        assert!(!employment(EMPLOYMENT_ABSENT_TAG).is_present());
    }

    #[test]
    fn leave_presence_follows_tag() {
        let leave = LeaveRecord {
            presence: LEAVE_ABSENT_TAG.to_string(),
            leave_type: String::new(),
            leave_date: String::new(),
            leave_status: String::new(),
        };
        assert!(!leave.is_present());
    }
}
