use courier_model::{ClassifiedCourier, SummaryStats};

/// Derives the summary counters from a classified run.
///
/// Every courier contributes to exactly one presence bucket per source, and
/// every courier with a present employees row contributes one entry to the
/// status histogram, so the histogram totals match the presence counts.
pub fn summarize(classified: &[ClassifiedCourier]) -> SummaryStats {
    let mut stats = SummaryStats {
        total_couriers: classified.len(),
        ..SummaryStats::default()
    };
    for entry in classified {
        match entry
            .courier
            .employment
            .as_ref()
            .filter(|record| record.is_present())
        {
            Some(employment) => {
                stats.employment_present += 1;
                *stats
                    .status_counts
                    .entry(employment.status.as_str().to_string())
                    .or_insert(0) += 1;
            }
            None => stats.employment_absent += 1,
        }
        if entry.courier.leave_present() {
            stats.leave_present += 1;
        } else {
            stats.leave_absent += 1;
        }
        *stats
            .diagnosis_counts
            .entry(entry.classification.diagnosis.to_string())
            .or_insert(0) += 1;
    }
    stats
}
