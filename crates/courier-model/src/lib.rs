pub mod classification;
pub mod error;
pub mod ids;
pub mod joined;
pub mod record;
pub mod status;
pub mod summary;

pub use classification::{Classification, ClassifiedCourier, Diagnosis, RecommendedAction};
pub use error::{ModelError, Result};
pub use ids::CourierId;
pub use joined::JoinedCourier;
pub use record::{
    EMPLOYMENT_ABSENT_TAG, EMPLOYMENT_PRESENT_TAG, EmploymentRecord, LEAVE_ABSENT_TAG,
    LEAVE_PRESENT_TAG, LeaveRecord,
};
pub use status::EmploymentStatus;
pub use summary::SummaryStats;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joined_courier_serializes() {
        let joined = JoinedCourier {
            courier_id: CourierId::new("C7").expect("valid id"),
            employment: Some(EmploymentRecord {
                presence: EMPLOYMENT_PRESENT_TAG.to_string(),
                first_name: "Marta".to_string(),
                last_name: "Vidal".to_string(),
                status: EmploymentStatus::Penalized,
                city: "Sevilla".to_string(),
                hours: "20".to_string(),
            }),
            leave: None,
        };
        let json = serde_json::to_string(&joined).expect("serialize joined courier");
        let round: JoinedCourier = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(round, joined);
    }

    #[test]
    fn classification_serializes_tags() {
        let classification = Classification {
            diagnosis: Diagnosis::UnrecognizedStatus("on_call".to_string()),
            action: RecommendedAction::ReviewSpecificStatus,
        };
        let json = serde_json::to_string(&classification).expect("serialize classification");
        assert_eq!(
            json,
            "{\"diagnosis\":\"EMPLOYEE_STATUS_ON_CALL\",\"action\":\"REVIEW_SPECIFIC_STATUS\"}"
        );
    }
}
