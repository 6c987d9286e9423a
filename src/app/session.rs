// FHRSView - app/session.rs
//
// Browsing session: the loaded catalog plus the settings every menu action
// needs. Owned by the menu loop and passed explicitly to each action, so
// there is no ambient global state.

use crate::core::model::{Catalog, Record};
use crate::core::pager::Pager;
use crate::core::query::{query_ratings, AdjacentChronological, RatingOrder, RatingQuery};
use crate::util::constants::DEFAULT_PAGE_SIZE;

/// State shared by all menu actions for the life of the process.
#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
    page_size: usize,
    order: Box<dyn RatingOrder>,
}

impl Session {
    /// Create a session over a loaded catalog with the default ordering.
    pub fn new(catalog: Catalog, page_size: usize) -> Self {
        Self {
            catalog,
            page_size,
            order: Box::new(AdjacentChronological),
        }
    }

    /// Replace the chronological comparator used for rating tables.
    pub fn with_order(mut self, order: Box<dyn RatingOrder>) -> Self {
        self.order = order;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Authority names in load order.
    pub fn authority_names(&self) -> Vec<&str> {
        self.catalog
            .authorities()
            .iter()
            .map(|a| a.name.as_str())
            .collect()
    }

    /// Start a fresh business-name browse with the cursor at 0.
    pub fn browse_businesses(&self) -> Pager {
        Pager::from_records(self.catalog.records(), self.page_size)
    }

    /// Run a rating query over every loaded record, ordered by date.
    pub fn ratings(&self, query: &RatingQuery) -> Vec<&Record> {
        query_ratings(self.catalog.records(), query, self.order.as_ref())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Catalog::new(), DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Authority;
    use crate::core::query::{RatingPredicate, StrictChronological};
    use std::collections::HashMap;

    fn make_record(name: &str, rating: &str, date: &str) -> Record {
        let row: HashMap<&str, &str> = [
            ("BusinessName", name),
            ("RatingValue", rating),
            ("RatingDate", date),
        ]
        .into_iter()
        .collect();
        Record::from_row(&row)
    }

    fn session() -> Session {
        let mut catalog = Catalog::new();
        catalog.push(Authority {
            name: "Adur".to_string(),
            records: vec![
                make_record("Cafe", "4", "2020-40-01"),
                make_record("Deli", "5", "2020-10-01"),
            ],
        });
        catalog.push(Authority {
            name: "Worthing".to_string(),
            records: vec![
                make_record("Cafe", "2", "2020-20-01"),
                make_record("Cafe", "", "2020-01-01"),
            ],
        });
        Session::new(catalog, 10)
    }

    #[test]
    fn test_authority_names_in_load_order() {
        assert_eq!(session().authority_names(), vec!["Adur", "Worthing"]);
    }

    #[test]
    fn test_browse_starts_fresh_each_time() {
        let s = session();
        let mut pager = s.browse_businesses();
        assert_eq!(pager.names(), ["Cafe".to_string(), "Deli".to_string()]);
        pager.next();
        assert_eq!(s.browse_businesses().cursor(), 0);
    }

    #[test]
    fn test_ratings_span_authorities_and_sort_by_date() {
        let s = session();
        let result = s.ratings(&RatingQuery::by_name("cafe"));
        let values: Vec<_> = result.iter().map(|r| r.rating_value().unwrap()).collect();
        assert_eq!(values, vec!["", "2", "4"]);
    }

    #[test]
    fn test_filtered_ratings_exclude_unknown() {
        let s = session();
        let result = s.ratings(&RatingQuery::filtered("Cafe", RatingPredicate::Below(5)));
        let values: Vec<_> = result.iter().map(|r| r.rating_value().unwrap()).collect();
        assert_eq!(values, vec!["2", "4"]);
    }

    #[test]
    fn test_order_is_pluggable() {
        let make = || {
            let mut catalog = Catalog::new();
            catalog.push(Authority {
                name: "Adur".to_string(),
                records: vec![
                    make_record("Cafe", "late", "2020-300-01"),
                    make_record("Cafe", "undated", ""),
                    make_record("Cafe", "early", "2020-10-01"),
                ],
            });
            Session::new(catalog, 10)
        };
        let query = RatingQuery::by_name("Cafe");

        let default = make();
        let values: Vec<_> = default.ratings(&query).iter().map(|r| r.rating_value().unwrap()).collect();
        assert_eq!(values, vec!["late", "undated", "early"]);

        let strict = make().with_order(Box::new(StrictChronological));
        let values: Vec<_> = strict.ratings(&query).iter().map(|r| r.rating_value().unwrap()).collect();
        assert_eq!(values, vec!["early", "late", "undated"]);
    }
}
