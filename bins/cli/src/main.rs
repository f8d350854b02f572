//! asset-manager command-line entry point.
//!
//! Usage:
//!   asset-manager fetch          - Fetch the spreadsheet and save today's records
//!   asset-manager report         - Write net-worth report data as JSON
//!   asset-manager import-legacy  - Import legacy CSV snapshots from storage
//!   asset-manager version        - Show the version

mod commands;
mod sheets;

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tokio::runtime::Builder;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use asset_manager_shared::{AppConfig, AppError};

use commands::Status;

/// `asset-manager` command arguments.
#[derive(Debug, Parser)]
#[command(
    name = "asset-manager",
    about = "Track personal financial assets and liabilities",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch the spreadsheet and save its records.
    Fetch {
        /// Read the grid from a JSON file instead of the spreadsheet API.
        #[arg(long, value_name = "FILE")]
        grid: Option<PathBuf>,
        /// Date to stamp on the records. Defaults to today.
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<NaiveDate>,
        /// Parse and validate without writing to the database.
        #[arg(long)]
        dry_run: bool,
    },
    /// Write report data as JSON.
    Report {
        /// Save the report to this file instead of stdout.
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
        /// First date to include.
        #[arg(long, value_name = "YYYY-MM-DD")]
        start: Option<NaiveDate>,
        /// Last date to include.
        #[arg(long, value_name = "YYYY-MM-DD")]
        end: Option<NaiveDate>,
    },
    /// Import legacy CSV snapshots into the database.
    ImportLegacy,
    /// Show the version and exit.
    Version,
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "asset_manager=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    if matches!(cli.command, Command::Version) {
        println!("asset-manager {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let runtime = match Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(err) => {
            error!(error = %err, "Failed to create Tokio runtime");
            return ExitCode::from(70);
        }
    };

    match runtime.block_on(run(cli.command)) {
        Ok(Status::Done) => ExitCode::SUCCESS,
        Ok(Status::Empty) => ExitCode::from(1),
        Err(err) => {
            let code = err.downcast_ref::<AppError>().map_or(70, AppError::exit_code);
            let kind = err
                .downcast_ref::<AppError>()
                .map_or("INTERNAL_ERROR", AppError::error_code);
            error!(code = kind, "{err:#}");
            eprintln!("Error: {err:#}");
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

async fn run(command: Command) -> anyhow::Result<Status> {
    let config = AppConfig::load().map_err(AppError::from)?;

    match command {
        Command::Fetch {
            grid,
            date,
            dry_run,
        } => commands::fetch(&config, grid, date, dry_run).await,
        Command::Report { output, start, end } => {
            commands::report(&config, output, start, end).await
        }
        Command::ImportLegacy => commands::import_legacy(&config).await,
        Command::Version => Ok(Status::Done),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_fetch_flags() {
        let cli = Cli::try_parse_from([
            "asset-manager",
            "fetch",
            "--grid",
            "grid.json",
            "--date",
            "2024-01-15",
            "--dry-run",
        ])
        .unwrap();

        let Command::Fetch {
            grid,
            date,
            dry_run,
        } = cli.command
        else {
            panic!("expected fetch");
        };
        assert_eq!(grid, Some(PathBuf::from("grid.json")));
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15));
        assert!(dry_run);
    }

    #[test]
    fn test_parse_report_range() {
        let cli =
            Cli::try_parse_from(["asset-manager", "report", "-o", "out.json", "--start", "2024-01-01"])
                .unwrap();
        let Command::Report { output, start, end } = cli.command else {
            panic!("expected report");
        };
        assert_eq!(output, Some(PathBuf::from("out.json")));
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(end, None);
    }

    #[test]
    fn test_parse_rejects_bad_date() {
        assert!(Cli::try_parse_from(["asset-manager", "fetch", "--date", "15/01/2024"]).is_err());
    }

    #[test]
    fn test_parse_import_legacy() {
        let cli = Cli::try_parse_from(["asset-manager", "import-legacy"]).unwrap();
        assert!(matches!(cli.command, Command::ImportLegacy));
    }
}
