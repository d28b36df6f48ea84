//! The implicit distribution graph: adjacency/in-degree tables over
//! endpoint labels, plus the deterministic pre-order traversal.
pub mod network;
pub mod traversal;

// Re-export key types for convenient access
pub use network::{EdgeId, NetworkIndex};
pub use traversal::{preorder, Preorder};
