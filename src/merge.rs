//! merge.rs
//! Collapses the pre-order edge sequence into one record per destination
//! node. First occurrence wins the slot; later occurrences fill blanks.

use crate::graph::EdgeId;
use crate::model::{EdgeRecord, MergedRecord, NodeClass};
use std::collections::HashMap;
use tracing::debug;

/// Load scope of a board unless the model says otherwise.
pub const DEFAULT_LOAD_SCOPE: &str = "Local";
/// Unity power factor assumed where none is recorded.
pub const DEFAULT_POWER_FACTOR: &str = "1";
/// Installation method assumed where none is recorded: perforated tray.
pub const DEFAULT_INSTALLATION_METHOD: &str = "PT";

/// Folds the pre-order sequence into merged records, one per unique
/// `to_node`, in first-seen (pre-order) order.
pub fn merge_preorder(edges: &[EdgeRecord], order: &[EdgeId]) -> Vec<MergedRecord> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut merged: Vec<MergedRecord> = Vec::new();

    for &id in order {
        let edge = &edges[id.index()];
        match slots.get(edge.to_node.as_str()) {
            None => {
                slots.insert(edge.to_node.as_str(), merged.len());
                merged.push(canonical_from(edge));
            }
            Some(&slot) => fold(&mut merged[slot], edge),
        }
    }

    debug!(
        visited = order.len(),
        merged = merged.len(),
        "collapsed traversal sequence into per-board records"
    );
    merged
}

/// The first edge seen for a destination becomes its canonical record,
/// with the fixed defaults applied to still-blank fields.
fn canonical_from(edge: &EdgeRecord) -> MergedRecord {
    let mut record = MergedRecord {
        reference: edge.final_reference.clone(),
        from_node: edge.from_node.clone(),
        to_node: edge.to_node.clone(),
        classification: edge.classification,
        attrs: edge.attrs.clone(),
    };
    adopt(&mut record.attrs.load_scope, DEFAULT_LOAD_SCOPE);
    adopt(&mut record.attrs.power_factor, DEFAULT_POWER_FACTOR);
    adopt(
        &mut record.attrs.installation_method,
        DEFAULT_INSTALLATION_METHOD,
    );
    record
}

/// Field-by-field merge: a blank canonical field adopts a non-blank
/// incoming value; anything already set is kept.
fn fold(record: &mut MergedRecord, edge: &EdgeRecord) {
    if record.classification == NodeClass::Unclassified {
        record.classification = edge.classification;
    }

    let dst = &mut record.attrs;
    let src = &edge.attrs;
    adopt(&mut dst.load, &src.load);
    adopt(&mut dst.load_scope, &src.load_scope);
    adopt(&mut dst.power_factor, &src.power_factor);
    adopt(&mut dst.cable_length, &src.cable_length);
    adopt(&mut dst.size_active, &src.size_active);
    adopt(&mut dst.size_neutral, &src.size_neutral);
    adopt(&mut dst.size_earth, &src.size_earth);
    adopt(&mut dst.conductor_material, &src.conductor_material);
    adopt(&mut dst.phases, &src.phases);
    adopt(&mut dst.cable_type, &src.cable_type);
    adopt(&mut dst.insulation, &src.insulation);
    adopt(&mut dst.installation_method, &src.installation_method);
    adopt(&mut dst.derating, &src.derating);
    adopt(&mut dst.trip_unit_type, &src.trip_unit_type);
    adopt(&mut dst.switchgear_manufacturer, &src.switchgear_manufacturer);
    adopt(&mut dst.bus_type, &src.bus_type);
    adopt(&mut dst.bus_chassis_rating, &src.bus_chassis_rating);
    adopt(&mut dst.upstream_diversity, &src.upstream_diversity);
    adopt(&mut dst.isolator_type, &src.isolator_type);
    adopt(&mut dst.isolator_rating, &src.isolator_rating);
    adopt(&mut dst.device_rating, &src.device_rating);
    adopt(&mut dst.device_manufacturer, &src.device_manufacturer);
    adopt(&mut dst.device_type, &src.device_type);
    adopt(&mut dst.device_model, &src.device_model);
    adopt(&mut dst.device_ocr_unit, &src.device_ocr_unit);
    adopt(&mut dst.device_trip_setting, &src.device_trip_setting);

    // The protective-device trip setting is authoritative: once known, the
    // device rating and the board load follow it.
    if !dst.device_trip_setting.trim().is_empty() {
        dst.device_rating = dst.device_trip_setting.clone();
        dst.load = dst.device_trip_setting.clone();
    }
}

fn adopt(dst: &mut String, src: &str) {
    if dst.trim().is_empty() && !src.trim().is_empty() {
        *dst = src.to_string();
    }
}
