//! Rule 2: cable type for non-board nodes. Tap-off boxes are always fed
//! by single-core cable; everything else picks single-core vs multi-core
//! on run length and protective-device trip setting.

use super::metric;
use crate::model::{MergedRecord, NodeClass};

/// Single cores, one per phase. Long or heavily-protected runs need the
/// larger conductors only single-core cable comes in.
pub const CABLE_TYPE_SDI: &str = "SDI";
/// Multi-core cable, the default for ordinary sub-mains.
pub const CABLE_TYPE_MULTI: &str = "Multi";

const LONG_RUN_LENGTH: f64 = 100.0;
const LONG_RUN_SETTING: f64 = 160.0;
const HEAVY_SETTING: f64 = 229.0;

pub(crate) fn assign(record: &mut MergedRecord) {
    match record.classification {
        // Boards were stripped by rule 1; leave them blank.
        NodeClass::Board => {}
        NodeClass::TapOff => record.attrs.cable_type = CABLE_TYPE_SDI.to_string(),
        NodeClass::Unclassified => {
            let length = metric(&record.attrs.cable_length);
            let setting = metric(&record.attrs.device_trip_setting);

            let long_run = length.is_some_and(|l| l >= LONG_RUN_LENGTH)
                && setting.is_some_and(|s| s >= LONG_RUN_SETTING);
            let heavy = setting.is_some_and(|s| s >= HEAVY_SETTING);

            record.attrs.cable_type = if long_run || heavy {
                CABLE_TYPE_SDI.to_string()
            } else {
                CABLE_TYPE_MULTI.to_string()
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::tests::record;
    use rstest::rstest;

    #[rstest]
    #[case("100", "160", CABLE_TYPE_SDI)] // both thresholds met exactly
    #[case("99.9", "160", CABLE_TYPE_MULTI)] // just under the length threshold
    #[case("0", "229", CABLE_TYPE_SDI)] // heavy setting alone suffices
    #[case("0", "228.9", CABLE_TYPE_MULTI)]
    #[case("150", "100", CABLE_TYPE_MULTI)] // long run but light setting
    #[case("", "300", CABLE_TYPE_SDI)]
    #[case("150", "", CABLE_TYPE_MULTI)] // unparseable setting fails both branches
    #[case("n/a", "n/a", CABLE_TYPE_MULTI)]
    fn test_threshold_boundaries(
        #[case] length: &str,
        #[case] setting: &str,
        #[case] expected: &str,
    ) {
        let mut rec = record(NodeClass::Unclassified);
        rec.attrs.cable_length = length.to_string();
        rec.attrs.device_trip_setting = setting.to_string();
        assign(&mut rec);
        assert_eq!(rec.attrs.cable_type, expected);
    }

    #[test]
    fn test_tap_off_box_is_always_single_core() {
        let mut rec = record(NodeClass::TapOff);
        rec.attrs.cable_length = "1".to_string();
        rec.attrs.device_trip_setting = "63".to_string();
        assign(&mut rec);
        assert_eq!(rec.attrs.cable_type, CABLE_TYPE_SDI);
    }

    #[test]
    fn test_board_cable_type_left_alone() {
        let mut rec = record(NodeClass::Board);
        assign(&mut rec);
        assert!(rec.attrs.cable_type.is_empty());
    }
}
