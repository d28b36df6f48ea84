//! pipeline.rs
//! End-to-end export: extract -> resolve -> traverse -> merge -> rules ->
//! report. A single synchronous pass over in-memory collections; the only
//! I/O is the report sink handed in by the caller.

use crate::error::{ExportError, ExportOutcome};
use crate::graph::{self, NetworkIndex};
use crate::model::AttributeBundle;
use crate::{extract, merge, report, resolve, rules};
use std::io::Write;
use tracing::debug;

/// Runs the full switchboard network export and writes the schedule to
/// `sink`. Returns [`ExportOutcome::NoEligibleRecords`] without touching
/// the sink when nothing passes the eligibility filter.
pub fn export<W: Write>(
    bundles: &[AttributeBundle],
    sink: W,
) -> Result<ExportOutcome, ExportError> {
    let records = extract::eligible_records(bundles);
    if records.is_empty() {
        debug!("no eligible connection records; nothing to export");
        return Ok(ExportOutcome::NoEligibleRecords);
    }

    let records = resolve::assign_references(records);
    let index = NetworkIndex::build(&records);
    let order = graph::preorder(&index);
    let mut merged = merge::merge_preorder(&records, &order.edges);
    rules::apply(&mut merged);
    report::write_schedule(&merged, sink)?;

    debug!(
        edges = records.len(),
        boards = merged.len(),
        cycle_truncations = order.cycle_truncations,
        "switchboard network export complete"
    );
    Ok(ExportOutcome::Written {
        records: merged.len(),
    })
}
