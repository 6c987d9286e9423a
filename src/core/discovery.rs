// FHRSView - core/discovery.rs
//
// Lists the data directory and picks out the authority CSV exports.
//
// Only the top level of the directory is read; each `.csv` file is one
// authority. Anything else is reported as a non-fatal warning and skipped.
// Warnings are returned for the caller to show; the per-entry log events
// stay at debug so they are not printed twice.
// Reads directory metadata only, never file contents -- that is owned by the
// app layer (app::load).

use crate::util::constants::CSV_EXTENSION;
use crate::util::error::DiscoveryError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// An authority export found in the data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    /// Full path to the file.
    pub path: PathBuf,

    /// Authority name: the filename with its extension removed.
    pub authority: String,
}

/// True when `path` has a `.csv` extension (ASCII case-insensitive).
pub fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(CSV_EXTENSION))
}

/// Authority name for an export file: its filename without the extension.
pub fn authority_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// List the CSV exports directly inside `root`, sorted by filename.
///
/// # Non-fatal errors
/// Non-CSV files and unreadable entries are recorded as human-readable
/// strings in the returned warnings vector and do NOT cause `Err`.
///
/// # Fatal errors
/// Returns `Err` only if `root` does not exist or is not a directory.
pub fn discover_csv_files(
    root: &Path,
) -> Result<(Vec<DiscoveredFile>, Vec<String>), DiscoveryError> {
    let meta = std::fs::metadata(root).map_err(|_| DiscoveryError::RootNotFound {
        path: root.to_path_buf(),
    })?;
    if !meta.is_dir() {
        return Err(DiscoveryError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    let mut warnings = Vec::new();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                let err = DiscoveryError::Traversal {
                    path: e.path().map(Path::to_path_buf).unwrap_or_else(|| root.to_path_buf()),
                    source: e,
                };
                tracing::debug!(error = %err, "Skipping unreadable directory entry");
                warnings.push(err.to_string());
                continue;
            }
        };

        let path = entry.path();
        if entry.file_type().is_file() && is_csv(path) {
            tracing::debug!(path = %path.display(), "Discovered authority export");
            files.push(DiscoveredFile {
                path: path.to_path_buf(),
                authority: authority_name(path),
            });
        } else {
            let msg = format!(
                "Detected file which doesn't belong in directory '{}': {}",
                root.display(),
                entry.file_name().to_string_lossy()
            );
            tracing::debug!(path = %path.display(), "Skipping non-CSV entry");
            warnings.push(msg);
        }
    }

    tracing::info!(
        root = %root.display(),
        files = files.len(),
        skipped = warnings.len(),
        "Discovery complete"
    );
    Ok((files, warnings))
}
