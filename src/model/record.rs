//! record.rs
//! Record types for the switchboard network export: the boundary input
//! bundle, the per-connection edge record, and the per-board merged record.

use serde::{Deserialize, Serialize};

/// Sentinel label for a connection whose origin endpoint is blank.
///
/// The supply side of a one-line diagram is often left unlabelled in the
/// model; every such connection is treated as fed directly from the site
/// source so it still participates in the traversal.
pub const SOURCE_NODE: &str = "SOURCE";

/// Isolator class labels shared by the extractor and the defaulting rule.
pub const ISOLATOR_SWITCH_ISOLATING: &str = "Switch (Isolating)";
pub const ISOLATOR_SWITCH_LOAD_BREAK: &str = "Switch (Load Break)";
pub const ISOLATOR_CIRCUIT_BREAKER: &str = "Circuit Breaker";
pub const ISOLATOR_NONE: &str = "None";

/// Classification of a destination node in the one-line diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeClass {
    /// A switchboard or busbar (`"S"`). Boards have no cable of their own.
    Board,
    /// A tap-off box drawing from a busway (`"T"`).
    TapOff,
    /// Anything the type metadata does not identify (`""`).
    #[default]
    Unclassified,
}

impl NodeClass {
    /// The single-letter code used in the exported schedule.
    pub fn code(&self) -> &'static str {
        match self {
            NodeClass::Board => "S",
            NodeClass::TapOff => "T",
            NodeClass::Unclassified => "",
        }
    }
}

/// The named string attributes carried on every connection.
///
/// Every field is independently optional; blank (empty string) means the
/// model holds no value. Keeping them as strings preserves exactly what the
/// host model stores; numeric interpretation happens only inside the rule
/// cascade, and only where a threshold needs it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CableAttributes {
    pub load: String,
    pub load_scope: String,
    pub power_factor: String,
    pub cable_length: String,
    pub size_active: String,
    pub size_neutral: String,
    pub size_earth: String,
    pub conductor_material: String,
    pub phases: String,
    pub cable_type: String,
    pub insulation: String,
    pub installation_method: String,
    pub derating: String,
    pub trip_unit_type: String,
    pub switchgear_manufacturer: String,
    pub bus_type: String,
    pub bus_chassis_rating: String,
    pub upstream_diversity: String,
    pub isolator_type: String,
    pub isolator_rating: String,
    pub device_rating: String,
    pub device_manufacturer: String,
    pub device_type: String,
    pub device_model: String,
    pub device_ocr_unit: String,
    pub device_trip_setting: String,
}

/// One raw attribute bundle as handed over by the host exporter.
///
/// The core only reads these; eligibility filtering and classification
/// derivation happen in [`crate::extract`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeBundle {
    /// Explicit include flag set on the element by the designer.
    pub include: bool,
    /// Destination endpoint label. Bundles with a blank destination are
    /// excluded upstream of the graph.
    pub to_key: String,
    /// Origin endpoint label; blank means fed from the site source.
    pub from_key: String,
    /// The element's type name, e.g. `"BUS Riser 2500A"` or
    /// `"TOB 160A 1-Phase"`. Classification derives from substrings of this.
    pub type_name: String,
    /// The element's family name; isolator sub-classification only applies
    /// when this names an isolator family.
    pub family_name: String,
    /// Cable reference identifier, possibly blank.
    pub cable_reference: String,
    pub attrs: CableAttributes,
}

/// One eligible connection: an edge of the implicit distribution graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    /// Origin endpoint. Never blank: normalized to [`SOURCE_NODE`].
    pub from_node: String,
    /// Destination endpoint. Invariant: non-empty.
    pub to_node: String,
    /// The cable reference as read from the model, possibly blank.
    pub original_reference: String,
    /// The definitive reference shared by every edge with the same
    /// destination; assigned by [`crate::resolve`].
    pub final_reference: String,
    pub classification: NodeClass,
    pub attrs: CableAttributes,
}

/// The folded record for one unique destination node.
///
/// Created on the first traversal visit to its destination, folded by every
/// later visit, then mutated once more by the rule cascade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedRecord {
    pub reference: String,
    pub from_node: String,
    pub to_node: String,
    pub classification: NodeClass,
    pub attrs: CableAttributes,
}
