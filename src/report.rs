//! report.rs
//! Serializes the merged record list to the delimited cable-schedule
//! format the downstream sizing tool imports.

use crate::error::ExportError;
use crate::model::MergedRecord;
use std::borrow::Cow;
use std::io::Write;

const DELIMITER: char = ',';

/// The fixed schedule columns, in output order.
pub const HEADER: [&str; 30] = [
    "Cable Reference",
    "SWB From",
    "SWB To",
    "SWB Type",
    "SWB Load",
    "SWB Load Scope",
    "SWB PF",
    "Cable Length",
    "Cable Size - Active conductors",
    "Cable Size - Neutral conductors",
    "Cable Size - Earthing conductor",
    "Active Conductor material",
    "# of Phases",
    "Cable Type",
    "Cable Insulation",
    "Installation Method",
    "Cable Additional De-rating",
    "Switchgear Trip Unit Type",
    "Switchgear Manufacturer",
    "Bus Type",
    "Bus/Chassis Rating (A)",
    "Upstream Diversity",
    "Isolator Type",
    "Isolator Rating (A)",
    "Protective Device Rating (A)",
    "Protective Device Manufacturer",
    "Protective Device Type",
    "Protective Device Model",
    "Protective Device OCR/Trip Unit",
    "Protective Device Trip Setting (A)",
];

/// Writes the header and one row per merged record, in list order.
pub fn write_schedule<W: Write>(records: &[MergedRecord], mut out: W) -> Result<(), ExportError> {
    write_row(&mut out, HEADER.iter().map(|h| Cow::Borrowed(*h)))?;
    for record in records {
        write_row(&mut out, row_fields(record).into_iter())?;
    }
    Ok(())
}

fn write_row<'a, W: Write>(
    out: &mut W,
    fields: impl Iterator<Item = Cow<'a, str>>,
) -> Result<(), ExportError> {
    for (i, field) in fields.enumerate() {
        if i > 0 {
            write!(out, "{DELIMITER}")?;
        }
        write!(out, "{}", escape(&field))?;
    }
    writeln!(out)?;
    Ok(())
}

fn row_fields(record: &MergedRecord) -> Vec<Cow<'_, str>> {
    let a = &record.attrs;
    let mut fields: Vec<Cow<'_, str>> = Vec::with_capacity(HEADER.len());
    fields.push(Cow::Owned(formula_guard(&record.reference)));
    fields.push(Cow::Borrowed(record.from_node.as_str()));
    fields.push(Cow::Borrowed(record.to_node.as_str()));
    fields.push(Cow::Borrowed(record.classification.code()));
    for value in [
        &a.load,
        &a.load_scope,
        &a.power_factor,
        &a.cable_length,
        &a.size_active,
        &a.size_neutral,
        &a.size_earth,
        &a.conductor_material,
        &a.phases,
        &a.cable_type,
        &a.insulation,
        &a.installation_method,
        &a.derating,
        &a.trip_unit_type,
        &a.switchgear_manufacturer,
        &a.bus_type,
        &a.bus_chassis_rating,
        &a.upstream_diversity,
        &a.isolator_type,
        &a.isolator_rating,
        &a.device_rating,
        &a.device_manufacturer,
        &a.device_type,
        &a.device_model,
        &a.device_ocr_unit,
        &a.device_trip_setting,
    ] {
        fields.push(Cow::Borrowed(value.as_str()));
    }
    fields
}

/// Quotes a field when it contains the delimiter, a quote, or a line
/// break; embedded quotes are doubled.
fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([DELIMITER, '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Wraps the cable reference so spreadsheet consumers keep it literal
/// instead of reading it as a number or formula (e.g. `C12` vs a date).
fn formula_guard(reference: &str) -> String {
    format!("=\"{reference}\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CableAttributes, NodeClass};
    use rstest::rstest;
    use std::io::Read;

    fn record(reference: &str, from: &str, to: &str) -> MergedRecord {
        MergedRecord {
            reference: reference.to_string(),
            from_node: from.to_string(),
            to_node: to.to_string(),
            classification: NodeClass::Unclassified,
            attrs: CableAttributes::default(),
        }
    }

    #[rstest]
    #[case("plain", "plain")]
    #[case("a,b", "\"a,b\"")]
    #[case("say \"hi\"", "\"say \"\"hi\"\"\"")]
    #[case("two\nlines", "\"two\nlines\"")]
    #[case("", "")]
    fn test_field_escaping(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape(input), expected);
    }

    #[test]
    fn test_header_matches_row_width() {
        let rec = record("C1", "MSB", "DB-01");
        let fields = row_fields(&rec);
        assert_eq!(fields.len(), HEADER.len());
    }

    #[test]
    fn test_reference_is_formula_guarded_and_quoted() {
        let mut out = Vec::new();
        write_schedule(&[record("C12", "MSB", "DB-01")], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let row = text.lines().nth(1).unwrap();
        // ="C12" contains quotes, so the writer re-quotes and doubles them.
        assert!(row.starts_with("\"=\"\"C12\"\"\","));
    }

    #[test]
    fn test_schedule_round_trips_through_a_file() {
        let mut rec = record("C1", "MSB", "DB-01");
        rec.attrs.load = "400".to_string();

        let mut file = tempfile::tempfile().unwrap();
        write_schedule(std::slice::from_ref(&rec), &mut file).unwrap();

        use std::io::Seek;
        file.rewind().unwrap();
        let mut text = String::new();
        file.read_to_string(&mut text).unwrap();

        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("Cable Reference,SWB From"));
        let row = lines.next().unwrap();
        assert!(row.contains(",MSB,DB-01,"));
        assert!(row.contains(",400,"));
        assert!(lines.next().is_none());
    }
}
