// FHRSView - core/query.rs
//
// Query engine: case-insensitive business-name match combined with an
// optional rating predicate, plus chronological ordering of the matches.
// Core layer: pure logic, no I/O or UI dependencies.
//
// Ordering is pluggable through `RatingOrder`. The default,
// `AdjacentChronological`, keeps the inspection-history ordering the menus
// have always shown (see its docs); `StrictChronological` is a total order
// that can be swapped in without touching the query API.

use crate::core::model::Record;
use crate::core::rating::{normalize_rating, Categorical};
use crate::util::constants::RATING_UNKNOWN;
use std::cmp::Ordering;

// =============================================================================
// Predicates
// =============================================================================

/// Rating filter applied on top of the name match.
///
/// Records whose rating normalises to the unknown sentinel never match any
/// predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingPredicate {
    /// Normalised rating strictly greater than the threshold.
    Above(i32),

    /// Normalised rating strictly less than the threshold.
    Below(i32),

    /// Normalised rating strictly between the bounds (both exclusive).
    Range { minimum: i32, maximum: i32 },

    /// Normalised rating equal to the categorical sentinel.
    Categorical(Categorical),
}

impl RatingPredicate {
    /// Check a normalised rating against this predicate.
    pub fn matches(&self, rating: i32) -> bool {
        if rating == RATING_UNKNOWN {
            return false;
        }
        match *self {
            RatingPredicate::Above(threshold) => rating > threshold,
            RatingPredicate::Below(threshold) => rating < threshold,
            RatingPredicate::Range { minimum, maximum } => minimum < rating && rating < maximum,
            RatingPredicate::Categorical(target) => rating == target.sentinel(),
        }
    }
}

/// A name lookup with an optional rating filter.
#[derive(Debug, Clone)]
pub struct RatingQuery {
    /// Business name, matched exactly but case-insensitively.
    pub business_name: String,

    /// `None` lists every rating recorded for the business.
    pub predicate: Option<RatingPredicate>,
}

impl RatingQuery {
    /// List every rating recorded for `business_name`.
    pub fn by_name(business_name: impl Into<String>) -> Self {
        Self {
            business_name: business_name.into(),
            predicate: None,
        }
    }

    /// List ratings for `business_name` that satisfy `predicate`.
    pub fn filtered(business_name: impl Into<String>, predicate: RatingPredicate) -> Self {
        Self {
            business_name: business_name.into(),
            predicate: Some(predicate),
        }
    }

    /// Check if a single record satisfies the query.
    pub fn matches(&self, record: &Record) -> bool {
        if !names_equal_ignore_case(record.business_name(), &self.business_name) {
            return false;
        }
        match self.predicate {
            Some(predicate) => predicate.matches(normalize_rating(record)),
            None => true,
        }
    }
}

/// Select the records satisfying `query`, preserving input order.
///
/// An empty result is a normal outcome, not an error.
pub fn find_ratings<'a, I>(records: I, query: &RatingQuery) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    let matches: Vec<&Record> = records.into_iter().filter(|r| query.matches(r)).collect();
    tracing::debug!(
        business = %query.business_name,
        predicate = ?query.predicate,
        matches = matches.len(),
        "Rating query evaluated"
    );
    matches
}

/// Case-insensitive exact comparison using full Unicode lowercasing.
fn names_equal_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

// =============================================================================
// Chronological ordering
// =============================================================================

/// Pluggable comparator for ordering query results by rating date.
///
/// `compare(a, b)` returning `Ordering::Less` means `a` belongs before `b`.
/// Implementations need not be total orders; `sort_ratings` only ever swaps
/// adjacent pairs and never panics on an inconsistent comparator.
pub trait RatingOrder: std::fmt::Debug {
    fn compare(&self, a: &Record, b: &Record) -> Ordering;
}

/// The historical inspection-table ordering.
///
/// `a` is placed before `b` only when both dates are present and `a`'s date is
/// strictly earlier. If either date is absent, or `a` is on or after `b`, the
/// pair is reported equal and keeps its current order. Combined with
/// `sort_ratings` this means a record without a date is never moved past its
/// neighbour, so it splits the list into independently-ordered runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdjacentChronological;

impl RatingOrder for AdjacentChronological {
    fn compare(&self, a: &Record, b: &Record) -> Ordering {
        match (a.rating_date(), b.rating_date()) {
            (Some(da), Some(db)) if da < db => Ordering::Less,
            _ => Ordering::Equal,
        }
    }
}

/// Ascending by date with undated records last. A true total order.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictChronological;

impl RatingOrder for StrictChronological {
    fn compare(&self, a: &Record, b: &Record) -> Ordering {
        match (a.rating_date(), b.rating_date()) {
            (Some(da), Some(db)) => da.cmp(&db),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

/// Stable in-place sort by `order`.
///
/// Insertion sort: each element moves left one adjacent swap at a time while
/// `order` places it strictly before its left neighbour. For a total order
/// this is an ordinary stable sort; for `AdjacentChronological` it is the
/// run-wise ordering described there. Result sets are per-business, so the
/// quadratic worst case is irrelevant in practice.
pub fn sort_ratings(records: &mut [&Record], order: &dyn RatingOrder) {
    for i in 1..records.len() {
        let mut j = i;
        while j > 0 && order.compare(records[j], records[j - 1]) == Ordering::Less {
            records.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Run `query` and return the matches ordered by `order`.
pub fn query_ratings<'a, I>(records: I, query: &RatingQuery, order: &dyn RatingOrder) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut matches = find_ratings(records, query);
    sort_ratings(&mut matches, order);
    matches
}
