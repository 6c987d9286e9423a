// FHRSView - core/export.rs
//
// CSV and JSON export of records.
// Core layer: writes to any Write trait object.
//
// CSV rows use the FHRS column order, so an exported file can be loaded back
// as an authority. Successfully parsed fields reproduce their source text;
// fields that fell back to a sentinel are written as the sentinel.

use crate::core::model::{Header, Record};
use crate::util::error::ExportError;
use std::io::Write;

/// Serialise one record in `Header::all()` order.
pub fn record_to_row(record: &Record) -> Vec<String> {
    Header::all()
        .iter()
        .map(|h| field_text(record, *h))
        .collect()
}

fn field_text(record: &Record, header: Header) -> String {
    let [line1, line2, line3, line4] = record.address_lines();
    match header {
        Header::FhrsId => record.fhrs_id().to_string(),
        Header::LocalAuthorityBusinessId => record.local_authority_business_id().to_string(),
        Header::BusinessName => record.business_name().to_string(),
        Header::BusinessType => record.business_type().to_string(),
        Header::BusinessTypeId => record.business_type_id().to_string(),
        Header::AddressLine1 => line1.clone(),
        Header::AddressLine2 => line2.clone(),
        Header::AddressLine3 => line3.clone(),
        Header::AddressLine4 => line4.clone(),
        Header::PostCode => record.post_code().to_string(),
        Header::RatingValue => record.rating_value().unwrap_or_default().to_string(),
        Header::RatingKey => record.rating_key().to_string(),
        Header::RatingDate => record.rating_date_text().to_string(),
        Header::LocalAuthorityCode => record.local_authority_code().to_string(),
        Header::LocalAuthorityName => record.local_authority_name().to_string(),
        Header::LocalAuthorityWebSite => record.local_authority_web_site().to_string(),
        Header::LocalAuthorityEmailAddress => {
            record.local_authority_email_address().to_string()
        }
        Header::HygieneScore => record.hygiene_score().to_string(),
        Header::StructuralScore => record.structural_score().to_string(),
        Header::ConfidenceInManagementScore => {
            record.confidence_in_management_score().to_string()
        }
        Header::SchemeType => record.scheme_type().to_string(),
        Header::NewRatingPending => record.new_rating_pending().to_string(),
        Header::Longitude => record.longitude().to_string(),
        Header::Latitude => record.latitude().to_string(),
        Header::RightToReply => record.right_to_reply().to_string(),
        Header::RatingDateNil => record.rating_date_nil().to_string(),
    }
}

/// Export records to CSV: one header row, then one row per record.
pub fn export_csv<'a, I, W>(records: I, writer: W) -> Result<usize, ExportError>
where
    I: IntoIterator<Item = &'a Record>,
    W: Write,
{
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(Header::all().iter().map(Header::label))
        .map_err(|e| ExportError::Csv { source: e })?;

    let mut count = 0;
    for record in records {
        csv_writer
            .write_record(record_to_row(record))
            .map_err(|e| ExportError::Csv { source: e })?;
        count += 1;
    }

    csv_writer
        .flush()
        .map_err(|e| ExportError::Io { source: e })?;

    Ok(count)
}

/// Export records to JSON format (array of objects).
pub fn export_json<'a, I, W>(records: I, writer: W) -> Result<usize, ExportError>
where
    I: IntoIterator<Item = &'a Record>,
    W: Write,
{
    let records: Vec<&Record> = records.into_iter().collect();
    serde_json::to_writer_pretty(writer, &records).map_err(|e| ExportError::Json { source: e })?;
    Ok(records.len())
}
