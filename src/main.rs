// FHRSView - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation (debug mode support)
// 3. One-time load of every authority export
// 4. Interactive menu, or a non-interactive dump of one authority

use clap::{Parser, ValueEnum};
use fhrsview::app::{load, menu, session::Session};
use fhrsview::core::export;
use fhrsview::platform::config::{self, PlatformPaths};
use fhrsview::ui::console::Console;
use fhrsview::util::{self, constants, error::ExportError, error::FhrsError};
use std::io::Write;
use std::path::PathBuf;

/// FHRSView - Food Hygiene Rating Scheme browser.
///
/// Loads every `<Authority>.csv` export in a directory and lets you browse
/// businesses and their inspection history from a text menu.
#[derive(Parser, Debug)]
#[command(name = "FHRSView", version, about)]
struct Cli {
    /// Directory of authority CSV exports (overrides config).
    data_dir: Option<PathBuf>,

    /// Config file to use instead of the platform default.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Business names shown per Previous/Next step (1-100).
    #[arg(short = 'n', long = "page-size", value_parser = parse_page_size)]
    page_size: Option<usize>,

    /// Write every record of this authority to stdout and exit.
    #[arg(long = "dump", value_name = "AUTHORITY")]
    dump: Option<String>,

    /// Output format for --dump.
    #[arg(long = "format", value_enum, default_value_t = DumpFormat::Csv)]
    format: DumpFormat,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DumpFormat {
    Csv,
    Json,
}

fn parse_page_size(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|e| format!("{e}"))?;
    if (constants::MIN_PAGE_SIZE..=constants::MAX_PAGE_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(format!(
            "must be between {} and {}",
            constants::MIN_PAGE_SIZE,
            constants::MAX_PAGE_SIZE
        ))
    }
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging so its [logging] level can take effect;
    // its warnings are printed once tracing is up.
    let (config_path, loaded) = match &cli.config {
        Some(path) => (path.clone(), config::load_explicit_config(path)),
        None => {
            let path = PlatformPaths::resolve().config_file();
            let loaded = Ok(config::load_config(&path));
            (path, loaded)
        }
    };
    let (app_config, config_warnings) = match loaded {
        Ok(loaded) => loaded,
        Err(e) => {
            util::logging::init(cli.debug, None);
            fail(FhrsError::from(e));
        }
    };

    util::logging::init(cli.debug, app_config.log_level.as_deref());

    tracing::info!(
        version = constants::APP_VERSION,
        debug = cli.debug,
        config = %config_path.display(),
        "FHRSView starting"
    );
    for warning in &config_warnings {
        eprintln!("Warning: {warning}");
    }

    let data_dir = cli.data_dir.clone().unwrap_or(app_config.data_dir);
    let page_size = cli.page_size.unwrap_or(app_config.page_size);

    if let Err(e) = run(&cli, data_dir, page_size) {
        fail(e);
    }
}

fn fail(e: FhrsError) -> ! {
    tracing::error!(error = %e, "Fatal error");
    eprintln!("Error: {e}");
    std::process::exit(1);
}

fn run(cli: &Cli, data_dir: PathBuf, page_size: usize) -> util::error::Result<()> {
    let interactive = cli.dump.is_none();
    if interactive {
        println!("Greetings! Welcome to our Food Hygiene Data; ");
        println!();
    }

    let outcome = load::load_catalog(&data_dir)?;
    for warning in &outcome.warnings {
        eprintln!("{warning}");
    }

    let session = Session::new(outcome.catalog, page_size);

    match &cli.dump {
        Some(authority) => dump(&session, authority, cli.format),
        None => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let mut console = Console::new(stdin.lock(), stdout.lock());
            menu::run(&session, &mut console).map_err(|e| FhrsError::Io {
                path: PathBuf::from("<console>"),
                operation: "menu interaction",
                source: e,
            })
        }
    }
}

fn dump(session: &Session, authority: &str, format: DumpFormat) -> util::error::Result<()> {
    let records = &session
        .catalog()
        .authority(authority)
        .ok_or_else(|| ExportError::UnknownAuthority {
            name: authority.to_string(),
        })?
        .records;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let count = match format {
        DumpFormat::Csv => export::export_csv(records, &mut out)?,
        DumpFormat::Json => {
            let count = export::export_json(records, &mut out)?;
            writeln!(out).map_err(|e| ExportError::Io { source: e })?;
            count
        }
    };

    tracing::info!(authority, count, ?format, "Authority dumped");
    Ok(())
}
