//! network.rs
//! Builds the implicit directed graph over endpoint labels: an adjacency
//! index and an in-degree table, both keyed by label. No graph object is
//! materialized; edges stay in their flat record list and are addressed
//! by [`EdgeId`].

use crate::model::{EdgeRecord, SOURCE_NODE};
use std::collections::HashMap;

/// Index of an edge in the resolved record list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct EdgeId(pub u32);

impl EdgeId {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
    pub fn new(idx: usize) -> Self {
        Self(idx as u32)
    }
}

/// Adjacency and in-degree tables over the full node set.
///
/// Nodes are the union of every `from_node` and `to_node` label; every
/// node is seeded at in-degree 0 so disconnected roots are still found.
#[derive(Debug)]
pub struct NetworkIndex<'a> {
    edges: &'a [EdgeRecord],
    edges_from: HashMap<&'a str, Vec<EdgeId>>,
    in_degree: HashMap<&'a str, u32>,
}

impl<'a> NetworkIndex<'a> {
    pub fn build(edges: &'a [EdgeRecord]) -> Self {
        let mut in_degree: HashMap<&str, u32> = HashMap::new();
        let mut edges_from: HashMap<&str, Vec<EdgeId>> = HashMap::new();

        for edge in edges {
            in_degree.entry(edge.from_node.as_str()).or_insert(0);
            in_degree.entry(edge.to_node.as_str()).or_insert(0);
        }

        // Edges from the SOURCE sentinel are skipped unless SOURCE is a
        // tracked node of the graph. Any connection touching it puts it in
        // the node set, so in practice supply feeds do pull their boards
        // below the root.
        let source_tracked = in_degree.contains_key(SOURCE_NODE);

        for (i, edge) in edges.iter().enumerate() {
            edges_from
                .entry(edge.from_node.as_str())
                .or_default()
                .push(EdgeId::new(i));
            if edge.from_node != SOURCE_NODE || source_tracked {
                *in_degree.entry(edge.to_node.as_str()).or_insert(0) += 1;
            }
        }

        // Stable per-node ordering: children are visited ascending by
        // destination label, ties kept in resolver order.
        for list in edges_from.values_mut() {
            list.sort_by(|a, b| edges[a.index()].to_node.cmp(&edges[b.index()].to_node));
        }

        Self {
            edges,
            edges_from,
            in_degree,
        }
    }

    pub fn edge(&self, id: EdgeId) -> &'a EdgeRecord {
        &self.edges[id.index()]
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn outgoing(&self, node: &str) -> &[EdgeId] {
        self.edges_from.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The traversal starting set: every zero-in-degree node, sorted
    /// ordinally ascending. The SOURCE sentinel is never a destination, so
    /// when present it sits at in-degree 0 and is always a starting node.
    pub fn roots(&self) -> Vec<&'a str> {
        let mut roots: Vec<&str> = self
            .in_degree
            .iter()
            .filter(|&(_, &degree)| degree == 0)
            .map(|(&node, _)| node)
            .collect();
        roots.sort_unstable();
        roots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CableAttributes, NodeClass};

    fn edge(from: &str, to: &str) -> EdgeRecord {
        EdgeRecord {
            from_node: from.to_string(),
            to_node: to.to_string(),
            original_reference: String::new(),
            final_reference: String::new(),
            classification: NodeClass::Unclassified,
            attrs: CableAttributes::default(),
        }
    }

    #[test]
    fn test_source_fed_boards_sit_below_the_root() {
        let edges = vec![edge(SOURCE_NODE, "A"), edge("A", "B")];
        let index = NetworkIndex::build(&edges);
        // SOURCE is tracked (it feeds A), so A is not a root itself.
        assert_eq!(index.roots(), vec![SOURCE_NODE]);
    }

    #[test]
    fn test_source_as_a_destination_is_not_a_root() {
        // A board literally named SOURCE: X -> SOURCE -> A.
        let edges = vec![edge("X", SOURCE_NODE), edge(SOURCE_NODE, "A")];
        let index = NetworkIndex::build(&edges);
        assert_eq!(index.roots(), vec!["X"]);
    }

    #[test]
    fn test_outgoing_sorted_by_destination() {
        let edges = vec![edge("MSB", "DB-C"), edge("MSB", "DB-A"), edge("MSB", "DB-B")];
        let index = NetworkIndex::build(&edges);
        let order: Vec<&str> = index
            .outgoing("MSB")
            .iter()
            .map(|&id| index.edge(id).to_node.as_str())
            .collect();
        assert_eq!(order, vec!["DB-A", "DB-B", "DB-C"]);
    }

    #[test]
    fn test_every_node_is_seeded() {
        let edges = vec![edge("MSB", "DB-01")];
        let index = NetworkIndex::build(&edges);
        assert_eq!(index.roots(), vec!["MSB"]);
        assert_eq!(index.outgoing("DB-01"), &[]);
    }
}
