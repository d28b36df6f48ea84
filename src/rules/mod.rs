//! The business-rule cascade applied once to every merged record.
//!
//! Each rule is a total function over a single record; the cascade runs
//! them in a fixed order and later rules may override earlier ones. None
//! of them can fail: malformed numerics simply leave a threshold unmet.

use crate::model::MergedRecord;
use tracing::debug;

mod board;
mod cable_type;
mod isolator;
mod trip_unit;

type Rule = fn(&mut MergedRecord);

/// Cascade order is semantic: the board strip runs first so the cable-type
/// rule never sees a board, and the trip-unit blank-out for boards is the
/// final word on that field.
const CASCADE: &[Rule] = &[
    board::strip_cable_fields,
    cable_type::assign,
    trip_unit::assign,
    isolator::default_if_blank,
];

/// Runs the full cascade over every record, in place.
pub fn apply(records: &mut [MergedRecord]) {
    for record in records.iter_mut() {
        for rule in CASCADE {
            rule(record);
        }
    }
    debug!(records = records.len(), "applied business-rule cascade");
}

/// Parses a numeric attribute; blank or malformed input yields `None`,
/// which every threshold treats as "condition not met".
pub(crate) fn metric(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}
