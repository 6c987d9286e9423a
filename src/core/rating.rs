// FHRSView - core/rating.rs
//
// Rating normalisation: maps raw RatingValue text onto one ordered integer
// domain so numeric ratings and categorical states compare uniformly.

use crate::core::model::Record;
use crate::util::constants::{RATING_AWAITING_INSPECTION, RATING_EXEMPT, RATING_UNKNOWN};

/// Categorical (non-numeric) rating states a user can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Categorical {
    Exempt,
    AwaitingInspection,
}

impl Categorical {
    /// Returns all variants in menu order.
    pub fn all() -> &'static [Categorical] {
        &[Categorical::Exempt, Categorical::AwaitingInspection]
    }

    /// The normalised value records in this state carry.
    pub fn sentinel(&self) -> i32 {
        match self {
            Categorical::Exempt => RATING_EXEMPT,
            Categorical::AwaitingInspection => RATING_AWAITING_INSPECTION,
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Categorical::Exempt => "Exempt",
            Categorical::AwaitingInspection => "Awaiting Inspection",
        }
    }

    /// Interpret user input. Case-insensitive; "Awaiting Inspection" is
    /// accepted with or without the space.
    pub fn parse(input: &str) -> Option<Categorical> {
        let compact: String = input.split_whitespace().collect();
        if compact.eq_ignore_ascii_case("Exempt") {
            Some(Categorical::Exempt)
        } else if compact.eq_ignore_ascii_case("AwaitingInspection") {
            Some(Categorical::AwaitingInspection)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Categorical {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Normalise a record's raw rating. See [`normalize_rating_value`].
pub fn normalize_rating(record: &Record) -> i32 {
    normalize_rating_value(record.rating_value())
}

/// Map raw rating text to the normalised domain:
///
/// | Raw value                         | Result        |
/// |-----------------------------------|---------------|
/// | absent                            | `-999`        |
/// | `AwaitingInspection` (any case)   | `-666`        |
/// | `Exempt` (any case)               | `-111`        |
/// | base-10 integer                   | that integer  |
/// | anything else                     | `-999`        |
pub fn normalize_rating_value(raw: Option<&str>) -> i32 {
    let Some(raw) = raw else {
        return RATING_UNKNOWN;
    };
    if raw.eq_ignore_ascii_case("AwaitingInspection") {
        RATING_AWAITING_INSPECTION
    } else if raw.eq_ignore_ascii_case("Exempt") {
        RATING_EXEMPT
    } else {
        raw.parse::<i32>().unwrap_or(RATING_UNKNOWN)
    }
}
