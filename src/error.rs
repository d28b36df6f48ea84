//! Defines the error and outcome types for an export invocation.

use thiserror::Error;

/// Hard failures of an export run.
///
/// Data-quality problems never surface here: blank attributes, unparseable
/// numerics and cyclic references all degrade locally inside the pipeline.
/// The only real failure surfaces are the report sink and the boundary
/// JSON payload.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("report sink I/O failure")]
    Io(#[from] std::io::Error),
    #[error("malformed attribute bundle payload")]
    MalformedInput(#[from] serde_json::Error),
}

/// The benign result of an export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// No bundle passed the eligibility filter; nothing was written.
    /// This is "nothing to do", not an error.
    NoEligibleRecords,
    /// The schedule was written with this many merged records.
    Written { records: usize },
}
