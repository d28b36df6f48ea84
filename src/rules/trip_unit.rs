//! Rule 3: switchgear trip-unit type. Electronic by default, thermal
//! magnetic on single-phase gear, and blank for boards. A board carries
//! no trip unit, and that override is applied last so it always wins.

use crate::model::{MergedRecord, NodeClass};

pub const TRIP_UNIT_ELECTRONIC: &str = "Electronic";
pub const TRIP_UNIT_THERMAL_MAGNETIC: &str = "Thermal Magnetic";

pub(crate) fn assign(record: &mut MergedRecord) {
    record.attrs.trip_unit_type = TRIP_UNIT_ELECTRONIC.to_string();
    if record.attrs.phases == "R" {
        record.attrs.trip_unit_type = TRIP_UNIT_THERMAL_MAGNETIC.to_string();
    }
    if record.classification == NodeClass::Board {
        record.attrs.trip_unit_type.clear();
    }
}
