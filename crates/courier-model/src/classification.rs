//! Outcome vocabulary for the status-consistency rules.
//!
//! Diagnoses and actions render as the fixed uppercase tags that appear in
//! the generated reports. The only open-ended tag is the unrecognized-status
//! diagnosis, which embeds the raw status value.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::JoinedCourier;

/// What the rule engine concluded about one courier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnosis {
    /// No employees row, but an active leave exists.
    EmployeeRemovedWithLeave,
    /// Absent from both tables despite appearing in the dump.
    EmployeeNotFound,
    /// Marked active while a leave is on file.
    ActiveConflictWithLeave,
    /// Marked active with no leave on file.
    ActiveNoLeave,
    EmployeePenalized,
    EmployeeOnItLeave,
    /// Any status outside the known vocabulary, raw value attached.
    UnrecognizedStatus(String),
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnosis::EmployeeRemovedWithLeave => f.write_str("EMPLOYEE_REMOVED_WITH_LEAVE"),
            Diagnosis::EmployeeNotFound => f.write_str("EMPLOYEE_NOT_FOUND"),
            Diagnosis::ActiveConflictWithLeave => f.write_str("ACTIVE_CONFLICT_WITH_LEAVE"),
            Diagnosis::ActiveNoLeave => f.write_str("ACTIVE_NO_LEAVE"),
            Diagnosis::EmployeePenalized => f.write_str("EMPLOYEE_PENALIZED"),
            Diagnosis::EmployeeOnItLeave => f.write_str("EMPLOYEE_ON_IT_LEAVE"),
            Diagnosis::UnrecognizedStatus(raw) => {
                write!(f, "EMPLOYEE_STATUS_{}", raw.to_uppercase())
            }
        }
    }
}

impl Serialize for Diagnosis {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Follow-up recommended for a diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendedAction {
    VerifyLeaveValidity,
    ReviewShouldBeActive,
    ReviewLeaveStatus,
    StatusCorrect,
    VerifyPenaltyEndDate,
    VerifyItStatus,
    ReviewSpecificStatus,
}

impl RecommendedAction {
    /// Returns the tag used in the generated reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendedAction::VerifyLeaveValidity => "VERIFY_LEAVE_VALIDITY",
            RecommendedAction::ReviewShouldBeActive => "REVIEW_SHOULD_BE_ACTIVE",
            RecommendedAction::ReviewLeaveStatus => "REVIEW_LEAVE_STATUS",
            RecommendedAction::StatusCorrect => "STATUS_CORRECT",
            RecommendedAction::VerifyPenaltyEndDate => "VERIFY_PENALTY_END_DATE",
            RecommendedAction::VerifyItStatus => "VERIFY_IT_STATUS",
            RecommendedAction::ReviewSpecificStatus => "REVIEW_SPECIFIC_STATUS",
        }
    }
}

impl fmt::Display for RecommendedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Diagnosis plus its recommended follow-up, as one rule produces them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub diagnosis: Diagnosis,
    pub action: RecommendedAction,
}

/// A joined courier together with its rule outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedCourier {
    pub courier: JoinedCourier,
    pub classification: Classification,
}
