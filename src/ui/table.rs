// FHRSView - ui/table.rs
//
// Fixed-width ratings table framed with box-drawing borders.

use crate::core::model::Record;
use crate::util::constants::{DATE_NOT_AVAILABLE, TABLE_DATE_FORMAT};
use std::io::{self, Write};

/// Column header row. Border widths are derived from its length.
pub const HEADING: &str = "| Rating Date         | Hygiene Score | Structural Score | Confidence in Management Score | Food Hygiene Rating |";

/// A horizontal rule as wide as `heading`, capped with `start` and `end`.
pub fn separator(heading: &str, start: char, end: char) -> String {
    let width = heading.chars().count().saturating_sub(2);
    let mut rule = String::with_capacity(width + 2);
    rule.push(start);
    rule.extend(std::iter::repeat('-').take(width));
    rule.push(end);
    rule
}

/// One table row for `record`.
pub fn format_row(record: &Record) -> String {
    let date = record
        .rating_date()
        .map(|d| d.format(TABLE_DATE_FORMAT).to_string())
        .unwrap_or_else(|| DATE_NOT_AVAILABLE.to_string());
    format!(
        "| {:<19} | {:<13} | {:<16} | {:<30} | {:<19} |",
        date,
        record.hygiene_score(),
        record.structural_score(),
        record.confidence_in_management_score(),
        record.rating_value().unwrap_or("null"),
    )
}

/// Render the ratings table for `business_name`.
///
/// An empty result prints the "not found" notice instead of a table.
pub fn render<W: Write>(out: &mut W, business_name: &str, records: &[&Record]) -> io::Result<()> {
    if records.is_empty() {
        writeln!(out, "No business with that name found")?;
        return Ok(());
    }

    writeln!(out, "Display Business name for: {business_name}")?;
    writeln!(out, "{}", separator(HEADING, '┌', '┐'))?;
    writeln!(out, "{HEADING}")?;
    writeln!(out, "{}", separator(HEADING, '|', '|'))?;
    for record in records {
        writeln!(out, "{}", format_row(record))?;
    }
    writeln!(out, "{}", separator(HEADING, '└', '┘'))?;
    Ok(())
}
