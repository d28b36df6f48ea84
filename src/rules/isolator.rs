//! Rule 4: isolator defaulting. Only fires when the merge left the
//! isolator type blank; an explicit isolator from the model always stands.

use super::metric;
use crate::model::record::{
    ISOLATOR_CIRCUIT_BREAKER, ISOLATOR_NONE, ISOLATOR_SWITCH_ISOLATING,
    ISOLATOR_SWITCH_LOAD_BREAK,
};
use crate::model::{MergedRecord, NodeClass};

pub(crate) fn default_if_blank(record: &mut MergedRecord) {
    if !record.attrs.isolator_type.trim().is_empty() {
        return;
    }

    if record.classification == NodeClass::Board {
        record.attrs.isolator_type = ISOLATOR_NONE.to_string();
        record.attrs.isolator_rating.clear();
        return;
    }

    // Tiered on the protective-device trip setting; a frame size above
    // the setting is picked in each band. Unparseable settings leave the
    // isolator undecided, with both fields blank.
    let (isolator, rating) = match metric(&record.attrs.device_trip_setting) {
        None => {
            record.attrs.isolator_rating.clear();
            return;
        }
        Some(setting) if setting <= 250.0 => (ISOLATOR_SWITCH_LOAD_BREAK, "250"),
        Some(setting) if setting <= 630.0 => (ISOLATOR_SWITCH_ISOLATING, "630"),
        Some(_) => (ISOLATOR_CIRCUIT_BREAKER, "3200"),
    };
    record.attrs.isolator_type = isolator.to_string();
    record.attrs.isolator_rating = rating.to_string();
}
