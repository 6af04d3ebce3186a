use courier_model::{
    Classification, ClassifiedCourier, Diagnosis, EmploymentStatus, JoinedCourier,
    RecommendedAction,
};

/// Applies the status-consistency decision table to one courier.
///
/// The rules are ordered and the first match wins:
///
/// 1. employment absent, leave present: removed employee still has a leave
/// 2. employment absent, leave absent: not found in either table
/// 3. active with a leave on file: conflict
/// 4. active with no leave: correct
/// 5. penalized (leave ignored)
/// 6. on IT leave (leave ignored)
/// 7. any other status (leave ignored), raw value carried in the diagnosis
///
/// Rules 5 through 7 deliberately never look at the leave side; only the
/// active status is cross-checked against leave presence.
pub fn classify(courier: &JoinedCourier) -> Classification {
    let employment = courier
        .employment
        .as_ref()
        .filter(|record| record.is_present());
    let Some(employment) = employment else {
        if courier.leave_present() {
            return Classification {
                diagnosis: Diagnosis::EmployeeRemovedWithLeave,
                action: RecommendedAction::VerifyLeaveValidity,
            };
        }
        return Classification {
            diagnosis: Diagnosis::EmployeeNotFound,
            action: RecommendedAction::ReviewShouldBeActive,
        };
    };
    match &employment.status {
        EmploymentStatus::Active => {
            if courier.leave_present() {
                Classification {
                    diagnosis: Diagnosis::ActiveConflictWithLeave,
                    action: RecommendedAction::ReviewLeaveStatus,
                }
            } else {
                Classification {
                    diagnosis: Diagnosis::ActiveNoLeave,
                    action: RecommendedAction::StatusCorrect,
                }
            }
        }
        EmploymentStatus::Penalized => Classification {
            diagnosis: Diagnosis::EmployeePenalized,
            action: RecommendedAction::VerifyPenaltyEndDate,
        },
        EmploymentStatus::ItLeave => Classification {
            diagnosis: Diagnosis::EmployeeOnItLeave,
            action: RecommendedAction::VerifyItStatus,
        },
        EmploymentStatus::Other(raw) => Classification {
            diagnosis: Diagnosis::UnrecognizedStatus(raw.clone()),
            action: RecommendedAction::ReviewSpecificStatus,
        },
    }
}

/// Classifies every joined courier, preserving input order.
pub fn classify_all(couriers: &[JoinedCourier]) -> Vec<ClassifiedCourier> {
    couriers
        .iter()
        .map(|courier| ClassifiedCourier {
            courier: courier.clone(),
            classification: classify(courier),
        })
        .collect()
}
