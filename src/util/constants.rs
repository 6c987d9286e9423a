// FHRSView - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "FHRSView";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "FHRSView";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Data source
// =============================================================================

/// Directory scanned for authority CSV exports when none is configured.
pub const DEFAULT_DATA_DIR: &str = "./datasets-foodsafety";

/// Extension (compared ASCII case-insensitively) of ingestible files.
pub const CSV_EXTENSION: &str = "csv";

/// Maximum number of non-fatal warnings kept from a single load pass.
pub const MAX_WARNINGS: usize = 1_000;

// =============================================================================
// Field fallbacks
// =============================================================================

/// Substituted for any integer field that fails to parse.
pub const INT_FALLBACK: i32 = -1;

/// Substituted for any floating-point field that fails to parse.
pub const DOUBLE_FALLBACK: f64 = -1.0;

// =============================================================================
// Rating normalisation sentinels
// =============================================================================

/// Rating is missing or unparseable. Never matched by a rating predicate.
pub const RATING_UNKNOWN: i32 = -999;

/// Raw rating was "AwaitingInspection".
pub const RATING_AWAITING_INSPECTION: i32 = -666;

/// Raw rating was "Exempt".
pub const RATING_EXEMPT: i32 = -111;

// =============================================================================
// Browsing
// =============================================================================

/// Number of business names shown per Previous/Next step.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Minimum user-configurable page size.
pub const MIN_PAGE_SIZE: usize = 1;

/// Maximum user-configurable page size.
pub const MAX_PAGE_SIZE: usize = 100;

// =============================================================================
// Rendering
// =============================================================================

/// chrono format for the Rating Date column (e.g. "Tue 05/03/2019").
pub const TABLE_DATE_FORMAT: &str = "%a %d/%m/%Y";

/// Shown in the Rating Date column when the record has no parsed date.
pub const DATE_NOT_AVAILABLE: &str = "Date Not Available";

// =============================================================================
// Logging
// =============================================================================

/// Default log level. Kept quiet so diagnostics do not crowd the menu.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
