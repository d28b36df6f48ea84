//! Rule 1: a board or busbar node has no cable of its own, so every
//! cable-physical field is blanked.

use crate::model::{MergedRecord, NodeClass};

pub(crate) fn strip_cable_fields(record: &mut MergedRecord) {
    if record.classification != NodeClass::Board {
        return;
    }
    let attrs = &mut record.attrs;
    attrs.cable_length.clear();
    attrs.size_active.clear();
    attrs.size_neutral.clear();
    attrs.size_earth.clear();
    attrs.conductor_material.clear();
    attrs.phases.clear();
    attrs.cable_type.clear();
    attrs.insulation.clear();
    attrs.installation_method.clear();
    attrs.derating.clear();
}
