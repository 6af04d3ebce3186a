//! CLI library components for the courier reconciliation audit.

pub mod logging;
pub mod pipeline;
