pub mod aggregate;
pub mod catalog;
pub mod classify;
pub mod reconcile;

pub use aggregate::summarize;
pub use catalog::{RuleSummary, rule_catalog};
pub use classify::{classify, classify_all};
pub use reconcile::reconcile;
