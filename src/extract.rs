//! extract.rs
//! The record extractor: filters raw attribute bundles down to eligible
//! connections and derives the classification fields the downstream rules
//! key on.

use crate::error::ExportError;
use crate::model::record::{
    ISOLATOR_CIRCUIT_BREAKER, ISOLATOR_SWITCH_ISOLATING, ISOLATOR_SWITCH_LOAD_BREAK,
};
use crate::model::{AttributeBundle, CableAttributes, EdgeRecord, NodeClass, SOURCE_NODE};
use tracing::debug;

/// Insulation class forced onto any cable fed from a safety-services
/// supply. Safety circuits are run in fire-rated cable regardless of what
/// the model says.
pub const SAFETY_INSULATION: &str = "X-HF-110";

/// Deserializes an attribute-bundle payload handed over by the host
/// exporter as a JSON array.
pub fn bundles_from_json(payload: &[u8]) -> Result<Vec<AttributeBundle>, ExportError> {
    Ok(serde_json::from_slice(payload)?)
}

/// Returns the edge records for every eligible bundle, in input order.
///
/// A bundle is eligible when its include flag is set AND its destination
/// key is non-blank. An empty result is the benign "no eligible data"
/// outcome, not an error.
pub fn eligible_records(bundles: &[AttributeBundle]) -> Vec<EdgeRecord> {
    let records: Vec<EdgeRecord> = bundles
        .iter()
        .filter(|b| b.include && !b.to_key.trim().is_empty())
        .map(extract_one)
        .collect();
    debug!(
        bundles = bundles.len(),
        eligible = records.len(),
        "extracted eligible connection records"
    );
    records
}

fn extract_one(bundle: &AttributeBundle) -> EdgeRecord {
    let from_node = if bundle.from_key.trim().is_empty() {
        SOURCE_NODE.to_string()
    } else {
        bundle.from_key.clone()
    };

    let mut attrs = bundle.attrs.clone();
    derive_phase_marker(&bundle.type_name, &mut attrs);
    derive_isolator_class(&bundle.family_name, &bundle.type_name, &mut attrs);
    if from_node.to_uppercase().contains("SAFETY") {
        attrs.insulation = SAFETY_INSULATION.to_string();
    }

    EdgeRecord {
        from_node,
        to_node: bundle.to_key.clone(),
        original_reference: bundle.cable_reference.clone(),
        final_reference: String::new(),
        classification: classify(&bundle.type_name),
        attrs,
    }
}

/// Board-vs-tap-off classification from the type name.
/// `"BUS"` is checked before `"TOB"`; first match wins.
fn classify(type_name: &str) -> NodeClass {
    let upper = type_name.to_uppercase();
    if upper.contains("BUS") {
        NodeClass::Board
    } else if upper.contains("TOB") {
        NodeClass::TapOff
    } else {
        NodeClass::Unclassified
    }
}

/// Single-phase boards are marked `"R"` (red phase only); everything else
/// keeps whatever the model carried.
fn derive_phase_marker(type_name: &str, attrs: &mut CableAttributes) {
    if type_name.to_uppercase().contains("1-PHASE") {
        attrs.phases = "R".to_string();
    }
}

/// Isolator sub-classification, derived only for isolator families.
///
/// The isolator rating is already carried on the bundle attributes; this
/// only settles the class label from the type-name wording.
fn derive_isolator_class(family_name: &str, type_name: &str, attrs: &mut CableAttributes) {
    if !family_name.to_uppercase().contains("ISOLATOR TYPE") {
        return;
    }
    let upper = type_name.to_uppercase();
    if upper.contains("OFF LOAD") || upper.contains("CB (NON-AUTO)") {
        attrs.isolator_type = ISOLATOR_SWITCH_ISOLATING.to_string();
    } else if upper.contains("ON LOAD") {
        attrs.isolator_type = ISOLATOR_SWITCH_LOAD_BREAK.to_string();
    } else if upper.contains("CB (AUTO)") {
        attrs.isolator_type = ISOLATOR_CIRCUIT_BREAKER.to_string();
    }
}
