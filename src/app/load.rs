// FHRSView - app/load.rs
//
// One-time ingestion: discovery -> per-file CSV parsing -> authority catalog.
//
// Files are independent, so they are parsed in parallel with rayon. Results
// are merged in filename order before the catalog is returned, so every query
// sees one consistent load regardless of which file finished first.
//
// Error policy:
//   - A missing/invalid data directory is fatal (returned as Err).
//   - A file that cannot be opened or has no readable header row is dropped
//     from the catalog with a warning; loading continues.
//   - Bytes that are not valid UTF-8 (Windows-1252 exports) are decoded
//     lossily; the row still loads.
//   - A row the CSV reader cannot read at all is skipped with a warning; the
//     rest of the file loads.
//   - Malformed fields inside a row are never errors (see core::fields).

use crate::core::discovery::{self, DiscoveredFile};
use crate::core::model::{Authority, Catalog, Header, Record, RowSource};
use crate::util::constants::MAX_WARNINGS;
use crate::util::error::{DiscoveryError, LoadError};
use csv::{ByteRecord, StringRecord};
use rayon::prelude::*;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::time::{Duration, Instant};

// =============================================================================
// CSV row adapter
// =============================================================================

/// Column positions of the known FHRS headers in one file.
///
/// Unknown headers are ignored; missing ones simply have no position.
#[derive(Debug, Clone, Default)]
pub struct HeaderIndex {
    positions: HashMap<Header, usize>,
}

impl HeaderIndex {
    pub fn from_headers(headers: &StringRecord) -> Self {
        let positions = headers
            .iter()
            .enumerate()
            .filter_map(|(pos, label)| {
                Header::from_label(label.trim_start_matches('\u{feff}')).map(|h| (h, pos))
            })
            .collect();
        Self { positions }
    }

    /// Known headers missing from this file, in column order.
    pub fn missing(&self) -> Vec<Header> {
        Header::all()
            .iter()
            .copied()
            .filter(|h| !self.positions.contains_key(h))
            .collect()
    }
}

/// One CSV row viewed through its file's header index.
struct CsvRow<'a> {
    index: &'a HeaderIndex,
    record: &'a StringRecord,
}

impl RowSource for CsvRow<'_> {
    fn field(&self, header: Header) -> Option<&str> {
        self.index
            .positions
            .get(&header)
            .and_then(|&pos| self.record.get(pos))
    }
}

// =============================================================================
// Per-file loading
// =============================================================================

/// Records and non-fatal warnings from one export.
#[derive(Debug)]
pub struct FileLoad {
    pub authority: Authority,
    pub skipped_rows: usize,
    pub warnings: Vec<String>,
}

/// Parse one authority export from any reader.
///
/// `source` names the input in warnings.
pub fn read_authority<R: Read>(
    name: &str,
    reader: R,
    source: &Path,
) -> Result<FileLoad, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);
    read_from_csv(name, &mut csv_reader, source)
}

/// Open and parse the export at `file.path`.
pub fn load_authority(file: &DiscoveredFile) -> Result<FileLoad, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(&file.path)
        .map_err(|e| LoadError::Open {
            path: file.path.clone(),
            source: e,
        })?;
    read_from_csv(&file.authority, &mut csv_reader, &file.path)
}

fn read_from_csv<R: Read>(
    name: &str,
    csv_reader: &mut csv::Reader<R>,
    source: &Path,
) -> Result<FileLoad, LoadError> {
    let headers = csv_reader
        .byte_headers()
        .map_err(|e| LoadError::Headers {
            path: source.to_path_buf(),
            source: e,
        })?
        .clone();
    let index = HeaderIndex::from_headers(&decode_lossy(headers));

    let missing = index.missing();
    if !missing.is_empty() {
        tracing::debug!(
            file = %source.display(),
            missing = ?missing.iter().map(Header::label).collect::<Vec<_>>(),
            "Export lacks some FHRS columns; fallbacks will be used"
        );
    }

    let mut records = Vec::new();
    let mut warnings = Vec::new();
    let mut skipped_rows = 0;
    let mut lossy_rows = 0;

    for result in csv_reader.byte_records() {
        match result {
            Ok(raw) => {
                if std::str::from_utf8(raw.as_slice()).is_err() {
                    lossy_rows += 1;
                }
                let row = decode_lossy(raw);
                records.push(Record::from_row(&CsvRow {
                    index: &index,
                    record: &row,
                }));
            }
            Err(e) => {
                skipped_rows += 1;
                let line = e.position().map(|p| p.line()).unwrap_or_default();
                tracing::debug!(file = %source.display(), line, error = %e, "Skipping malformed row");
                if warnings.len() < MAX_WARNINGS {
                    warnings.push(format!(
                        "'{}' line {line}: row skipped: {e}",
                        source.display()
                    ));
                }
            }
        }
    }

    tracing::debug!(
        file = %source.display(),
        authority = name,
        records = records.len(),
        skipped_rows,
        lossy_rows,
        "Authority export parsed"
    );

    Ok(FileLoad {
        authority: Authority {
            name: name.to_string(),
            records,
        },
        skipped_rows,
        warnings,
    })
}

/// Decode a raw row, replacing invalid UTF-8 sequences with U+FFFD.
fn decode_lossy(raw: ByteRecord) -> StringRecord {
    StringRecord::from_byte_record_lossy(raw)
}

// =============================================================================
// Catalog loading
// =============================================================================

/// Summary statistics for a completed load.
#[derive(Debug, Clone, Default)]
pub struct LoadSummary {
    /// Authorities added to the catalog.
    pub authorities: usize,

    /// Records across all authorities.
    pub records: usize,

    /// Directory entries or files that contributed no authority.
    pub skipped_files: usize,

    /// Rows dropped as malformed.
    pub skipped_rows: usize,

    /// Wall-clock load duration.
    pub duration: Duration,
}

/// Everything produced by the startup load.
#[derive(Debug)]
pub struct LoadOutcome {
    pub catalog: Catalog,
    pub warnings: Vec<String>,
    pub summary: LoadSummary,
}

/// Load every authority export in `root` into a catalog.
///
/// # Fatal errors
/// Returns `Err` only if `root` is missing or not a directory.
pub fn load_catalog(root: &Path) -> Result<LoadOutcome, DiscoveryError> {
    let start = Instant::now();
    let (files, mut warnings) = discovery::discover_csv_files(root)?;
    let mut skipped_files = warnings.len();

    let results: Vec<Result<FileLoad, LoadError>> = files.par_iter().map(load_authority).collect();

    let mut catalog = Catalog::new();
    let mut skipped_rows = 0;
    for result in results {
        match result {
            Ok(load) => {
                skipped_rows += load.skipped_rows;
                warnings.extend(load.warnings);
                catalog.push(load.authority);
            }
            Err(e) => {
                tracing::debug!(error = %e, "Authority export dropped");
                skipped_files += 1;
                warnings.push(e.to_string());
            }
        }
    }
    warnings.truncate(MAX_WARNINGS);

    let summary = LoadSummary {
        authorities: catalog.authorities().len(),
        records: catalog.record_count(),
        skipped_files,
        skipped_rows,
        duration: start.elapsed(),
    };

    tracing::info!(
        authorities = summary.authorities,
        records = summary.records,
        skipped_files = summary.skipped_files,
        skipped_rows = summary.skipped_rows,
        elapsed_ms = summary.duration.as_millis() as u64,
        "Load complete"
    );

    Ok(LoadOutcome {
        catalog,
        warnings,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const HEADER: &str = "FHRSID,BusinessName,RatingValue,RatingDate,Scores/Hygiene";

    fn read(content: &str) -> FileLoad {
        read_authority("Adur", content.as_bytes(), &PathBuf::from("Adur.csv")).unwrap()
    }

    #[test]
    fn test_reads_rows_by_header_name() {
        let load = read(&format!(
            "{HEADER}\n1,The Crown,5,2019-05-12,10\n2,Cafe Nero,Exempt,,\n"
        ));
        let records = &load.authority.records;
        assert_eq!(load.authority.name, "Adur");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].business_name(), "The Crown");
        assert_eq!(records[0].hygiene_score(), 10);
        assert_eq!(records[1].rating_value(), Some("Exempt"));
        assert_eq!(records[1].hygiene_score(), -1);
        assert_eq!(records[1].rating_date(), None);
    }

    #[test]
    fn test_column_order_does_not_matter() {
        let load = read("RatingValue,BusinessName\n4,Deli\n");
        assert_eq!(load.authority.records[0].business_name(), "Deli");
        assert_eq!(load.authority.records[0].rating_value(), Some("4"));
        assert_eq!(load.authority.records[0].fhrs_id(), -1);
    }

    #[test]
    fn test_short_rows_degrade_to_fallbacks() {
        let load = read(&format!("{HEADER}\n7,Deli\n"));
        let record = &load.authority.records[0];
        assert_eq!(record.fhrs_id(), 7);
        assert_eq!(record.rating_value(), None);
        assert_eq!(load.skipped_rows, 0);
    }

    #[test]
    fn test_byte_order_mark_is_ignored() {
        let load = read("\u{feff}FHRSID,BusinessName\n42,Bakery\n");
        assert_eq!(load.authority.records[0].fhrs_id(), 42);
    }

    #[test]
    fn test_header_index_reports_missing_columns() {
        let headers = StringRecord::from(vec!["BusinessName", "Unrelated"]);
        let index = HeaderIndex::from_headers(&headers);
        let missing = index.missing();
        assert_eq!(missing.len(), Header::all().len() - 1);
        assert!(!missing.contains(&Header::BusinessName));
    }

    #[test]
    fn test_non_utf8_cells_decode_lossily() {
        let load = read_authority(
            "Adur",
            &b"FHRSID,BusinessName,RatingValue\n1,Deli,4\n2,Caf\xE9 Rouge,5\n"[..],
            &PathBuf::from("Adur.csv"),
        )
        .unwrap();
        let records = &load.authority.records;
        assert_eq!(records.len(), 2);
        assert_eq!(load.skipped_rows, 0);
        assert_eq!(records[1].business_name(), "Caf\u{FFFD} Rouge");
        assert_eq!(records[1].fhrs_id(), 2);
        assert_eq!(records[1].rating_value(), Some("5"));
    }

    #[test]
    fn test_empty_input_gives_empty_authority() {
        let load = read("");
        assert!(load.authority.records.is_empty());
    }
}
