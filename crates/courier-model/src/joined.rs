use serde::{Deserialize, Serialize};

use crate::{CourierId, EmploymentRecord, LeaveRecord};

/// A courier's combined view across both source datasets.
///
/// Produced for every identifier in the union of the two key sets, so at
/// least one of the two records is `Some`. A record being `Some` is not the
/// same as the courier being present in that table: the dump tags rows with
/// explicit presence markers, and the `*_present` helpers honor them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinedCourier {
    pub courier_id: CourierId,
    pub employment: Option<EmploymentRecord>,
    pub leave: Option<LeaveRecord>,
}

impl JoinedCourier {
    pub fn employment_present(&self) -> bool {
        self.employment
            .as_ref()
            .is_some_and(EmploymentRecord::is_present)
    }

    pub fn leave_present(&self) -> bool {
        self.leave.as_ref().is_some_and(LeaveRecord::is_present)
    }
}
