use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Aggregate counts over one reconciliation run.
///
/// Presence counts are taken over the union of identifiers, so present plus
/// absent always equals the total for each source. Histogram keys are the
/// rendered tag strings; `BTreeMap` keeps report ordering alphabetical.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total_couriers: usize,
    pub employment_present: usize,
    pub employment_absent: usize,
    pub leave_present: usize,
    pub leave_absent: usize,
    /// Raw employment status per courier with a present employees row.
    pub status_counts: BTreeMap<String, usize>,
    /// Diagnosis tag per classified courier.
    pub diagnosis_counts: BTreeMap<String, usize>,
}
