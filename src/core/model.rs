// FHRSView - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no UI.
//
// These types are the shared vocabulary across all layers: the fixed FHRS
// column set, the immutable per-row `Record`, and the append-only authority
// catalog built once at startup.

use crate::core::fields::{
    parse_bool, parse_date_or_absent, parse_double_or_default, parse_int_or_default,
};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

// =============================================================================
// Header (fixed FHRS column set)
// =============================================================================

/// One column of an FHRS CSV export.
///
/// Variants are declared in export column order; `Header::all()` yields them
/// in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Header {
    FhrsId,
    LocalAuthorityBusinessId,
    BusinessName,
    BusinessType,
    BusinessTypeId,
    AddressLine1,
    AddressLine2,
    AddressLine3,
    AddressLine4,
    PostCode,
    RatingValue,
    RatingKey,
    RatingDate,
    LocalAuthorityCode,
    LocalAuthorityName,
    LocalAuthorityWebSite,
    LocalAuthorityEmailAddress,
    HygieneScore,
    StructuralScore,
    ConfidenceInManagementScore,
    SchemeType,
    NewRatingPending,
    Longitude,
    Latitude,
    RightToReply,
    RatingDateNil,
}

impl Header {
    /// Returns all columns in export order.
    pub fn all() -> &'static [Header] {
        &[
            Header::FhrsId,
            Header::LocalAuthorityBusinessId,
            Header::BusinessName,
            Header::BusinessType,
            Header::BusinessTypeId,
            Header::AddressLine1,
            Header::AddressLine2,
            Header::AddressLine3,
            Header::AddressLine4,
            Header::PostCode,
            Header::RatingValue,
            Header::RatingKey,
            Header::RatingDate,
            Header::LocalAuthorityCode,
            Header::LocalAuthorityName,
            Header::LocalAuthorityWebSite,
            Header::LocalAuthorityEmailAddress,
            Header::HygieneScore,
            Header::StructuralScore,
            Header::ConfidenceInManagementScore,
            Header::SchemeType,
            Header::NewRatingPending,
            Header::Longitude,
            Header::Latitude,
            Header::RightToReply,
            Header::RatingDateNil,
        ]
    }

    /// The exact header string used in the CSV header row.
    pub fn label(&self) -> &'static str {
        match self {
            Header::FhrsId => "FHRSID",
            Header::LocalAuthorityBusinessId => "LocalAuthorityBusinessID",
            Header::BusinessName => "BusinessName",
            Header::BusinessType => "BusinessType",
            Header::BusinessTypeId => "BusinessTypeID",
            Header::AddressLine1 => "AddressLine1",
            Header::AddressLine2 => "AddressLine2",
            Header::AddressLine3 => "AddressLine3",
            Header::AddressLine4 => "AddressLine4",
            Header::PostCode => "PostCode",
            Header::RatingValue => "RatingValue",
            Header::RatingKey => "RatingKey",
            Header::RatingDate => "RatingDate",
            Header::LocalAuthorityCode => "LocalAuthorityCode",
            Header::LocalAuthorityName => "LocalAuthorityName",
            Header::LocalAuthorityWebSite => "LocalAuthorityWebSite",
            Header::LocalAuthorityEmailAddress => "LocalAuthorityEmailAddress",
            Header::HygieneScore => "Scores/Hygiene",
            Header::StructuralScore => "Scores/Structural",
            Header::ConfidenceInManagementScore => "Scores/ConfidenceInManagement",
            Header::SchemeType => "SchemeType",
            Header::NewRatingPending => "NewRatingPending",
            Header::Longitude => "Geocode/Longitude",
            Header::Latitude => "Geocode/Latitude",
            Header::RightToReply => "RightToReply",
            Header::RatingDateNil => "RatingDate/_xsi:nil",
        }
    }

    /// Look up a column by its exact header string.
    pub fn from_label(label: &str) -> Option<Header> {
        Header::all().iter().copied().find(|h| h.label() == label)
    }
}

impl std::fmt::Display for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Row source
// =============================================================================

/// Anything that can supply the raw text of one row, keyed by column.
///
/// `None` means the column is not present at all, which is distinct from a
/// present-but-empty cell only for the raw rating value.
pub trait RowSource {
    fn field(&self, header: Header) -> Option<&str>;
}

/// Header-name to raw-value mapping, as produced by a generic CSV reader.
impl RowSource for HashMap<String, String> {
    fn field(&self, header: Header) -> Option<&str> {
        self.get(header.label()).map(String::as_str)
    }
}

impl RowSource for HashMap<&str, &str> {
    fn field(&self, header: Header) -> Option<&str> {
        self.get(header.label()).copied()
    }
}

// =============================================================================
// Record (one CSV row)
// =============================================================================

/// One inspection row from an FHRS export.
///
/// Immutable after construction. Every numeric field holds either the parsed
/// value or `-1`; the rating date holds either the parsed date or `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    fhrs_id: i32,
    local_authority_business_id: String,

    business_name: String,
    business_type: String,
    business_type_id: i32,

    address_lines: [String; 4],
    post_code: String,

    rating_value: Option<String>,
    rating_key: String,
    rating_date_nil: bool,
    rating_date_text: String,
    rating_date: Option<NaiveDate>,

    local_authority_code: i32,
    local_authority_name: String,
    local_authority_web_site: String,
    local_authority_email_address: String,

    scheme_type: String,
    new_rating_pending: bool,

    longitude: f64,
    latitude: f64,

    hygiene_score: i32,
    structural_score: i32,
    confidence_in_management_score: i32,

    right_to_reply: String,
}

impl Record {
    /// Build a record from one row. Cannot fail: missing or malformed cells
    /// degrade to their fallback values.
    pub fn from_row<R: RowSource + ?Sized>(row: &R) -> Self {
        let text = |h: Header| row.field(h).unwrap_or("").to_string();
        let int = |h: Header| parse_int_or_default(row.field(h).unwrap_or(""));
        let double = |h: Header| parse_double_or_default(row.field(h).unwrap_or(""));
        let flag = |h: Header| parse_bool(row.field(h).unwrap_or(""));

        let rating_date_text = text(Header::RatingDate);
        let rating_date = parse_date_or_absent(&rating_date_text);

        Self {
            fhrs_id: int(Header::FhrsId),
            local_authority_business_id: text(Header::LocalAuthorityBusinessId),
            business_name: text(Header::BusinessName),
            business_type: text(Header::BusinessType),
            business_type_id: int(Header::BusinessTypeId),
            address_lines: [
                text(Header::AddressLine1),
                text(Header::AddressLine2),
                text(Header::AddressLine3),
                text(Header::AddressLine4),
            ],
            post_code: text(Header::PostCode),
            rating_value: row.field(Header::RatingValue).map(str::to_string),
            rating_key: text(Header::RatingKey),
            rating_date_nil: flag(Header::RatingDateNil),
            rating_date_text,
            rating_date,
            local_authority_code: int(Header::LocalAuthorityCode),
            local_authority_name: text(Header::LocalAuthorityName),
            local_authority_web_site: text(Header::LocalAuthorityWebSite),
            local_authority_email_address: text(Header::LocalAuthorityEmailAddress),
            scheme_type: text(Header::SchemeType),
            new_rating_pending: flag(Header::NewRatingPending),
            longitude: double(Header::Longitude),
            latitude: double(Header::Latitude),
            hygiene_score: int(Header::HygieneScore),
            structural_score: int(Header::StructuralScore),
            confidence_in_management_score: int(Header::ConfidenceInManagementScore),
            right_to_reply: text(Header::RightToReply),
        }
    }

    pub fn fhrs_id(&self) -> i32 {
        self.fhrs_id
    }

    pub fn local_authority_business_id(&self) -> &str {
        &self.local_authority_business_id
    }

    pub fn business_name(&self) -> &str {
        &self.business_name
    }

    pub fn business_type(&self) -> &str {
        &self.business_type
    }

    pub fn business_type_id(&self) -> i32 {
        self.business_type_id
    }

    /// Address lines 1 to 4, in order.
    pub fn address_lines(&self) -> &[String; 4] {
        &self.address_lines
    }

    pub fn post_code(&self) -> &str {
        &self.post_code
    }

    /// Raw rating text. `None` only when the export has no RatingValue column.
    pub fn rating_value(&self) -> Option<&str> {
        self.rating_value.as_deref()
    }

    pub fn rating_key(&self) -> &str {
        &self.rating_key
    }

    pub fn rating_date_nil(&self) -> bool {
        self.rating_date_nil
    }

    /// The RatingDate cell exactly as it appeared in the export.
    pub fn rating_date_text(&self) -> &str {
        &self.rating_date_text
    }

    pub fn rating_date(&self) -> Option<NaiveDate> {
        self.rating_date
    }

    pub fn local_authority_code(&self) -> i32 {
        self.local_authority_code
    }

    pub fn local_authority_name(&self) -> &str {
        &self.local_authority_name
    }

    pub fn local_authority_web_site(&self) -> &str {
        &self.local_authority_web_site
    }

    pub fn local_authority_email_address(&self) -> &str {
        &self.local_authority_email_address
    }

    pub fn scheme_type(&self) -> &str {
        &self.scheme_type
    }

    pub fn new_rating_pending(&self) -> bool {
        self.new_rating_pending
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn hygiene_score(&self) -> i32 {
        self.hygiene_score
    }

    pub fn structural_score(&self) -> i32 {
        self.structural_score
    }

    pub fn confidence_in_management_score(&self) -> i32 {
        self.confidence_in_management_score
    }

    pub fn right_to_reply(&self) -> &str {
        &self.right_to_reply
    }
}

// =============================================================================
// Authority catalog
// =============================================================================

/// All records loaded from one authority's export file.
#[derive(Debug, Clone)]
pub struct Authority {
    /// Source filename with the `.csv` extension removed.
    pub name: String,

    /// Records in file order.
    pub records: Vec<Record>,
}

/// Every authority loaded at startup. Append-only while loading, read-only
/// afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    authorities: Vec<Authority>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one authority's records.
    pub fn push(&mut self, authority: Authority) {
        self.authorities.push(authority);
    }

    /// Authorities in load order.
    pub fn authorities(&self) -> &[Authority] {
        &self.authorities
    }

    /// Look up an authority by exact name.
    pub fn authority(&self, name: &str) -> Option<&Authority> {
        self.authorities.iter().find(|a| a.name == name)
    }

    /// Every record across all authorities, authority by authority.
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.authorities.iter().flat_map(|a| a.records.iter())
    }

    pub fn record_count(&self) -> usize {
        self.authorities.iter().map(|a| a.records.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.authorities.is_empty()
    }
}
