pub mod classification;
mod common;
pub mod comparison;
pub mod json;
pub mod summary;

pub use classification::{CLASSIFICATION_FILE_NAME, write_classification_csv};
pub use comparison::{COMPARISON_FILE_NAME, write_comparison_csv};
pub use json::{JSON_REPORT_FILE_NAME, write_reconciliation_json};
pub use summary::{SUMMARY_FILE_NAME, render_summary, write_summary_text};
