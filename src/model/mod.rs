//! Defines the core record types flowing through the export pipeline.
pub mod record;

// Re-export key types for convenient access
pub use record::{
    AttributeBundle, CableAttributes, EdgeRecord, MergedRecord, NodeClass, SOURCE_NODE,
};
