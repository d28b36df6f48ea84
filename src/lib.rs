//! Switchboard network exporter core.
//!
//! Takes the flat collection of labelled distribution-board connections
//! read out of a building model, builds the implicit directed graph over
//! their endpoints, orders it source-to-downstream with a deterministic
//! pre-order traversal, collapses duplicate feeds per board, runs the
//! domain rule cascade over the result, and writes the delimited cable
//! schedule.
//!
//! The host model, file dialogs and CSV plumbing live outside this crate;
//! the boundary is [`model::AttributeBundle`] in and any
//! [`std::io::Write`] sink out.

pub mod error;
pub mod extract;
pub mod graph;
pub mod merge;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod resolve;
pub mod rules;

// Re-export key types for convenient access
pub use error::{ExportError, ExportOutcome};
pub use model::{AttributeBundle, CableAttributes, EdgeRecord, MergedRecord, NodeClass};
pub use pipeline::export;
