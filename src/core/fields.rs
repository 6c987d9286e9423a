// FHRSView - core/fields.rs
//
// Permissive conversion of raw CSV text into typed values.
// Every parser is total: malformed input yields a fixed fallback, never an
// error. Core layer: pure logic, no I/O.

use crate::util::constants::{DOUBLE_FALLBACK, INT_FALLBACK};
use chrono::{Days, NaiveDate};

/// Parse a base-10 `i32`, returning `-1` on any failure (empty, non-numeric,
/// overflow). A single leading `+` or `-` is accepted; whitespace is not.
pub fn parse_int_or_default(text: &str) -> i32 {
    text.parse::<i32>().unwrap_or(INT_FALLBACK)
}

/// Parse an `f64`, returning `-1.0` on any failure.
///
/// Surrounding whitespace is ignored.
pub fn parse_double_or_default(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(DOUBLE_FALLBACK)
}

/// Parse a boolean flag. Only a case-insensitive `"true"` is true; anything
/// else, including an empty cell, is false.
pub fn parse_bool(text: &str) -> bool {
    text.eq_ignore_ascii_case("true")
}

/// Parse a rating date laid out as `<year>-<day-of-year>-<month>`.
///
/// The FHRS exports are read with this field order, so `"2019-05-12"` is the
/// fifth day of 2019, not the twelfth of May. The month must be present and
/// numeric but does not influence the result. The day-of-year is resolved
/// leniently: `0` is the last day of the previous year and values past the
/// end of the year roll forward. Anything after the month digits (such as a
/// `T00:00:00` time suffix) is ignored.
///
/// Returns `None` when the text does not have that shape.
pub fn parse_date_or_absent(text: &str) -> Option<NaiveDate> {
    let (year, rest) = split_digits(text)?;
    if year.len() != 4 {
        return None;
    }
    let rest = rest.strip_prefix('-')?;
    let (day_of_year, rest) = split_digits(rest)?;
    let rest = rest.strip_prefix('-')?;
    // Month is validated for shape only.
    split_digits(rest)?;

    let year: i32 = year.parse().ok()?;
    let day_of_year: i64 = day_of_year.parse().ok()?;

    let new_year = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let offset = day_of_year - 1;
    if offset >= 0 {
        new_year.checked_add_days(Days::new(offset.unsigned_abs()))
    } else {
        new_year.checked_sub_days(Days::new(offset.unsigned_abs()))
    }
}

/// Split a leading run of ASCII digits from `text`.
/// Returns `None` if `text` does not start with a digit.
fn split_digits(text: &str) -> Option<(&str, &str)> {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    if end == 0 {
        return None;
    }
    Some(text.split_at(end))
}
