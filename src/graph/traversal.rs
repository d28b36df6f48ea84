//! traversal.rs
//! Deterministic pre-order depth-first traversal of the distribution
//! graph. Produces the total edge order the report is written in: every
//! downstream board listed immediately after its parent.

use super::network::{EdgeId, NetworkIndex};
use std::collections::HashSet;
use tracing::warn;

/// The traversal result: a total pre-order over every discoverable path.
///
/// A node reachable via several distinct paths (a diamond) appears once
/// per path; the merge pass collapses those afterwards. Only true cycles
/// are suppressed, and `cycle_truncations` counts how often the guard
/// fired. Truncation stays silent in the data itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preorder {
    pub edges: Vec<EdgeId>,
    pub cycle_truncations: usize,
}

pub fn preorder(index: &NetworkIndex<'_>) -> Preorder {
    let mut out = Vec::with_capacity(index.edge_count());
    let mut on_path = HashSet::new();
    let mut truncations = 0usize;

    for root in index.roots() {
        visit(index, root, &mut on_path, &mut out, &mut truncations);
    }

    if truncations > 0 {
        warn!(
            truncations,
            "cyclic switchboard references truncated during traversal"
        );
    }

    Preorder {
        edges: out,
        cycle_truncations: truncations,
    }
}

/// Recursive pre-order visit with an on-path cycle guard.
///
/// The guard is path-local, not a global visited set: leaving a node
/// un-marks it so another parent may walk the same subtree. Re-entering a
/// node within one path is the only thing suppressed, which bounds the
/// recursion even on cyclic input.
fn visit<'a>(
    index: &NetworkIndex<'a>,
    node: &'a str,
    on_path: &mut HashSet<&'a str>,
    out: &mut Vec<EdgeId>,
    truncations: &mut usize,
) {
    if !on_path.insert(node) {
        *truncations += 1;
        return;
    }

    for &edge_id in index.outgoing(node) {
        out.push(edge_id);
        visit(
            index,
            index.edge(edge_id).to_node.as_str(),
            on_path,
            out,
            truncations,
        );
    }

    on_path.remove(node);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CableAttributes, EdgeRecord, NodeClass, SOURCE_NODE};

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

    fn walk(edges: &[EdgeRecord]) -> (Vec<(String, String)>, usize) {
        let index = NetworkIndex::build(edges);
        let result = preorder(&index);
        let pairs = result
            .edges
            .iter()
            .map(|&id| {
                let e = index.edge(id);
                (e.from_node.clone(), e.to_node.clone())
            })
            .collect();
        (pairs, result.cycle_truncations)
    }

    fn pair(from: &str, to: &str) -> (String, String) {
        (from.to_string(), to.to_string())
    }

    #[test]
    fn test_source_fan_out_in_preorder() {
        let edges = vec![edge(SOURCE_NODE, "A"), edge("A", "B"), edge("A", "C")];
        let (order, truncations) = walk(&edges);
        assert_eq!(
            order,
            vec![pair(SOURCE_NODE, "A"), pair("A", "B"), pair("A", "C")]
        );
        assert_eq!(truncations, 0);
    }

    #[test]
    fn test_subtree_listed_before_sibling() {
        // A feeds B and C; B feeds D. Pre-order keeps D next to B.
        let edges = vec![
            edge(SOURCE_NODE, "A"),
            edge("A", "C"),
            edge("A", "B"),
            edge("B", "D"),
        ];
        let (order, _) = walk(&edges);
        assert_eq!(
            order,
            vec![
                pair(SOURCE_NODE, "A"),
                pair("A", "B"),
                pair("B", "D"),
                pair("A", "C"),
            ]
        );
    }

    #[test]
    fn test_diamond_child_enumerated_from_both_parents() {
        let edges = vec![
            edge(SOURCE_NODE, "A"),
            edge("A", "B"),
            edge("A", "C"),
            edge("B", "D"),
            edge("C", "D"),
        ];
        let (order, truncations) = walk(&edges);
        let d_visits = order.iter().filter(|(_, to)| to == "D").count();
        assert_eq!(d_visits, 2);
        assert_eq!(truncations, 0);
    }

    #[test]
    fn test_cycle_terminates_and_is_counted() {
        // A -> B -> C -> A, entered from SOURCE.
        let edges = vec![
            edge(SOURCE_NODE, "A"),
            edge("A", "B"),
            edge("B", "C"),
            edge("C", "A"),
        ];
        let (order, truncations) = walk(&edges);
        assert_eq!(
            order,
            vec![
                pair(SOURCE_NODE, "A"),
                pair("A", "B"),
                pair("B", "C"),
                pair("C", "A"),
            ]
        );
        assert_eq!(truncations, 1);
    }

    #[test]
    fn test_pure_cycle_with_no_root_emits_nothing() {
        // No zero-in-degree node exists, so there is nowhere to start.
        let edges = vec![edge("A", "B"), edge("B", "A")];
        let (order, truncations) = walk(&edges);
        assert!(order.is_empty());
        assert_eq!(truncations, 0);
    }

    #[test]
    fn test_roots_visited_in_ordinal_order() {
        let edges = vec![edge("Z", "Z1"), edge("A", "A1")];
        let (order, _) = walk(&edges);
        assert_eq!(order, vec![pair("A", "A1"), pair("Z", "Z1")]);
    }
}
