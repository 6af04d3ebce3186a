//! Shared field rendering for the CSV reports.

use courier_model::{EMPLOYMENT_ABSENT_TAG, JoinedCourier, LEAVE_ABSENT_TAG};

/// Employment-side cells in column order: presence, first name, last name,
/// status, city, hours. A missing record renders as the absence sentinel
/// followed by empty cells; an existing record renders its fields verbatim,
/// including whatever presence tag the dump row carried.
pub(crate) fn employment_cells(courier: &JoinedCourier) -> (&str, &str, &str, &str, &str, &str) {
    match courier.employment.as_ref() {
        Some(record) => (
            record.presence.as_str(),
            record.first_name.as_str(),
            record.last_name.as_str(),
            record.status.as_str(),
            record.city.as_str(),
            record.hours.as_str(),
        ),
        None => (EMPLOYMENT_ABSENT_TAG, "", "", "", "", ""),
    }
}

/// Leave-side cells in column order: presence, leave type, leave date,
/// leave status.
pub(crate) fn leave_cells(courier: &JoinedCourier) -> (&str, &str, &str, &str) {
    match courier.leave.as_ref() {
        Some(record) => (
            record.presence.as_str(),
            record.leave_type.as_str(),
            record.leave_date.as_str(),
            record.leave_status.as_str(),
        ),
        None => (LEAVE_ABSENT_TAG, "", "", ""),
    }
}
