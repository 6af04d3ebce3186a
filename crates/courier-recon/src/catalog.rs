use courier_model::RecommendedAction;

/// One row of the decision table, for display.
#[derive(Debug, Clone, Copy)]
pub struct RuleSummary {
    pub number: u8,
    pub condition: &'static str,
    pub diagnosis: &'static str,
    pub action: RecommendedAction,
}

/// The decision table in evaluation order, as applied by `classify`.
pub fn rule_catalog() -> Vec<RuleSummary> {
    vec![
        RuleSummary {
            number: 1,
            condition: "employment absent, leave present",
            diagnosis: "EMPLOYEE_REMOVED_WITH_LEAVE",
            action: RecommendedAction::VerifyLeaveValidity,
        },
        RuleSummary {
            number: 2,
            condition: "employment absent, leave absent",
            diagnosis: "EMPLOYEE_NOT_FOUND",
            action: RecommendedAction::ReviewShouldBeActive,
        },
        RuleSummary {
            number: 3,
            condition: "status active, leave present",
            diagnosis: "ACTIVE_CONFLICT_WITH_LEAVE",
            action: RecommendedAction::ReviewLeaveStatus,
        },
        RuleSummary {
            number: 4,
            condition: "status active, leave absent",
            diagnosis: "ACTIVE_NO_LEAVE",
            action: RecommendedAction::StatusCorrect,
        },
        RuleSummary {
            number: 5,
            condition: "status penalized",
            diagnosis: "EMPLOYEE_PENALIZED",
            action: RecommendedAction::VerifyPenaltyEndDate,
        },
        RuleSummary {
            number: 6,
            condition: "status it_leave",
            diagnosis: "EMPLOYEE_ON_IT_LEAVE",
            action: RecommendedAction::VerifyItStatus,
        },
        RuleSummary {
            number: 7,
            condition: "any other status",
            diagnosis: "EMPLOYEE_STATUS_<STATUS>",
            action: RecommendedAction::ReviewSpecificStatus,
        },
    ]
}
