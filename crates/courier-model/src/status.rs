//! Employment status vocabulary.
//!
//! The employees dataset stores status as free text. Three tokens drive the
//! classification rules; everything else is carried through verbatim so the
//! reports can surface it for manual review.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Employment status as recorded in the employees dataset.
///
/// Matching against the known tokens is exact and case-sensitive. `Other`
/// keeps the raw string, including the empty string for rows that left the
/// column blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EmploymentStatus {
    /// Token `active`: courier expected to be working.
    Active,
    /// Token `penalized`: courier suspended pending penalty review.
    Penalized,
    /// Token `it_leave`: courier on IT (temporary incapacity) leave.
    ItLeave,
    /// Any other token, preserved exactly as found.
    Other(String),
}

impl EmploymentStatus {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "active" => EmploymentStatus::Active,
            "penalized" => EmploymentStatus::Penalized,
            "it_leave" => EmploymentStatus::ItLeave,
            other => EmploymentStatus::Other(other.to_string()),
        }
    }

    /// Returns the status exactly as it appears in the source data.
    pub fn as_str(&self) -> &str {
        match self {
            EmploymentStatus::Active => "active",
            EmploymentStatus::Penalized => "penalized",
            EmploymentStatus::ItLeave => "it_leave",
            EmploymentStatus::Other(raw) => raw,
        }
    }
}

impl From<&str> for EmploymentStatus {
    fn from(raw: &str) -> Self {
        EmploymentStatus::parse(raw)
    }
}

impl fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EmploymentStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EmploymentStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(EmploymentStatus::parse(&raw))
    }
}
