//! Activity Log Analyzer CLI Application
//!
//! Command-line interface around the activity-log-core library. It adds the
//! boundary functionality the library deliberately leaves out:
//! - CSV log import and row parsing
//! - TOML configuration loading
//! - Report generation (text/JSON)

use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;

use activity_log_core::{ScanConfig, WindowScanner};
use config::OutputFormat;

mod config;
mod importer;
mod report;

/// Activity Log Analyzer - find the activity window in a CSV event log
#[derive(Parser, Debug)]
#[command(name = "activity-log-cli")]
#[command(about = "Analyze a CSV activity log for a capacity-bounded time window", long_about = None)]
#[command(version)]
struct Args {
    /// Path to the CSV activity log to analyze
    #[arg(short, long, value_name = "FILE")]
    log: Option<PathBuf>,

    /// Number of matching records that form a complete window
    #[arg(long, value_name = "N")]
    capacity: Option<usize>,

    /// Activity identifier to filter records by
    #[arg(long, value_name = "ID")]
    activity_id: Option<i64>,

    /// Path to configuration file (config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output file for the report (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Emit the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

/// Fully resolved analysis parameters (flags override config file values)
#[derive(Debug)]
struct Settings {
    log: PathBuf,
    scan: ScanConfig,
    output: Option<PathBuf>,
    format: OutputFormat,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Activity Log Analyzer CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using core library v{}", activity_log_core::VERSION);

    if args.log.is_none() && args.config.is_none() {
        // No arguments - show help
        println!("Activity Log Analyzer - No input specified");
        println!("\nQuick Start:");
        println!("  activity-log-cli --log activity.csv --capacity 3 --activity-id 1");
        println!("  activity-log-cli --config config.toml");
        println!("\nUse --help for more options");
        return Ok(());
    }

    let settings = resolve_settings(&args)?;
    run_analysis(&settings)
}

/// Merge command line flags over the optional config file
fn resolve_settings(args: &Args) -> Result<Settings> {
    let file_config = match &args.config {
        Some(path) => Some(config::load_config(path)?),
        None => None,
    };

    let log = match (&args.log, &file_config) {
        (Some(path), _) => path.clone(),
        (None, Some(cfg)) => cfg.input.file.clone(),
        (None, None) => bail!("No input log file given (use --log or a config file)"),
    };

    let capacity = args
        .capacity
        .or_else(|| file_config.as_ref().map(|cfg| cfg.scan.capacity));
    let activity_id = args
        .activity_id
        .or_else(|| file_config.as_ref().map(|cfg| cfg.scan.activity_id));

    let (capacity, activity_id) = match (capacity, activity_id) {
        (Some(c), Some(id)) => (c, id),
        _ => bail!("Both --capacity and --activity-id are required (flags or config file)"),
    };

    let output = args.output.clone().or_else(|| {
        file_config
            .as_ref()
            .and_then(|cfg| cfg.output.file.clone())
    });
    let format = if args.json {
        OutputFormat::Json
    } else {
        file_config
            .as_ref()
            .map(|cfg| cfg.output.format)
            .unwrap_or_default()
    };

    Ok(Settings {
        log,
        scan: ScanConfig::new(capacity, activity_id),
        output,
        format,
    })
}

/// Import, parse, scan, report
fn run_analysis(settings: &Settings) -> Result<()> {
    let scanner = WindowScanner::new(settings.scan)?;

    let rows = importer::import_file(&settings.log)?;
    let records = importer::parse_records(&rows);
    log::info!(
        "Scanning {} records for activity {} with capacity {}",
        records.len(),
        settings.scan.target_activity_id,
        settings.scan.capacity
    );

    let window = scanner.scan(&records);
    match &window {
        Some(w) => log::info!("Window found: {}", w),
        None => log::info!("No window found"),
    }

    let rendered = report::render(window.as_ref(), settings.format);
    report::write_report(&rendered, settings.output.as_deref())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Args {
        Args {
            log: Some(PathBuf::from("activity.csv")),
            capacity: Some(3),
            activity_id: Some(1),
            config: None,
            output: None,
            json: false,
            verbose: 0,
            quiet: false,
        }
    }

    #[test]
    fn test_resolve_settings_from_flags() {
        let settings = resolve_settings(&base_args()).unwrap();
        assert_eq!(settings.log, PathBuf::from("activity.csv"));
        assert_eq!(settings.scan.capacity, 3);
        assert_eq!(settings.scan.target_activity_id, 1);
        assert_eq!(settings.format, OutputFormat::Text);
        assert!(settings.output.is_none());
    }

    #[test]
    fn test_json_flag_selects_json_format() {
        let args = Args {
            json: true,
            ..base_args()
        };
        let settings = resolve_settings(&args).unwrap();
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn test_missing_scan_parameters_rejected() {
        let args = Args {
            capacity: None,
            ..base_args()
        };
        assert!(resolve_settings(&args).is_err());
    }
}
