//! resolve.rs
//! The reference resolver: settles one definitive cable reference per
//! destination node and normalizes the record order before graph
//! construction.

use crate::model::EdgeRecord;
use std::collections::HashMap;

/// Assigns every record's `final_reference` and returns the list stably
/// sorted by it.
///
/// Within each `to_node` group, the definitive reference is the first
/// non-blank `original_reference` in input order, or empty if the whole
/// group is blank. The trailing stable sort (ordinal, ascending) is a
/// normalization step so graph construction always sees the same order.
pub fn assign_references(mut records: Vec<EdgeRecord>) -> Vec<EdgeRecord> {
    let mut definitive: HashMap<String, String> = HashMap::new();
    for record in &records {
        let slot = definitive.entry(record.to_node.clone()).or_default();
        if slot.is_empty() && !record.original_reference.trim().is_empty() {
            *slot = record.original_reference.clone();
        }
    }

    for record in &mut records {
        record.final_reference = definitive[&record.to_node].clone();
    }

    records.sort_by(|a, b| a.final_reference.cmp(&b.final_reference));
    records
}
