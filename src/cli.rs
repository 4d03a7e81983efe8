//! Command-line front end printing panel data as JSON.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;

use crate::dto::Notice;
use crate::models::config::DashboardConfig;
use crate::repository::errors::RepositoryError;
use crate::repository::{InMemoryRepository, Store};
use crate::services::appointments::DayTab;
use crate::services::{
    ServiceError, analytics, appointments, catalog, clients, dashboard, feedback, inventory,
    loyalty, notifications, payments, team,
};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Service(#[from] ServiceError),
    #[error("failed to load records: {0}")]
    Repository(#[from] RepositoryError),
    #[error("failed to render output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid date `{0}`, expected today, tomorrow or YYYY-MM-DD")]
    InvalidDate(String),
}

#[derive(Debug, Parser)]
#[command(
    name = "barbershop-dashboard",
    about = "Barbershop dashboard panels rendered as JSON",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum Command {
    /// Headline statistics for the reference date.
    Summary,
    Clients {
        query: Option<String>,
    },
    Inventory {
        query: Option<String>,
    },
    /// Day view; DATE is `today`, `tomorrow` or `YYYY-MM-DD`.
    Appointments {
        date: String,
        query: Option<String>,
    },
    Payments {
        query: Option<String>,
        /// `all` or part of a method label.
        method: Option<String>,
    },
    Feedback,
    Loyalty {
        query: Option<String>,
    },
    Team {
        query: Option<String>,
    },
    Services {
        query: Option<String>,
    },
    Notifications,
    Analytics,
    /// Writes the (optionally filtered) transactions to a CSV file.
    ExportTransactions {
        path: PathBuf,
        #[arg(long)]
        query: Option<String>,
        #[arg(long)]
        method: Option<String>,
    },
}

/// Resolves a day argument against the reference date.
pub fn parse_day(raw: &str, reference: NaiveDate) -> Result<NaiveDate, CliError> {
    match raw.trim().to_lowercase().as_str() {
        "today" | "hoje" => Ok(DayTab::Today.resolve(reference)),
        "tomorrow" | "amanha" | "amanhã" => Ok(DayTab::Tomorrow.resolve(reference)),
        other => NaiveDate::parse_from_str(other, "%Y-%m-%d")
            .map_err(|_| CliError::InvalidDate(raw.to_string())),
    }
}

/// Relative export paths land in the configured export directory.
fn export_path(config: &DashboardConfig, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        Path::new(&config.export_dir).join(path)
    }
}

fn print_json<W, T>(out: &mut W, value: &T) -> Result<(), CliError>
where
    W: Write,
    T: Serialize + ?Sized,
{
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Builds the record store named by the configuration.
pub fn load_store(config: &DashboardConfig) -> Result<Store, CliError> {
    let store = match &config.seed_file {
        Some(path) => Store::from_json_file(path)?,
        None => {
            log::info!("No seed file configured, using the demo shop");
            Store::demo()?
        }
    };
    Ok(store)
}

/// Runs one command against `repo`, writing its JSON output to `out`.
pub fn execute<W>(
    repo: &InMemoryRepository,
    config: &DashboardConfig,
    command: Command,
    out: &mut W,
) -> Result<(), CliError>
where
    W: Write,
{
    let reference_date = config.reference_date();

    match command {
        Command::Summary => print_json(out, &dashboard::load_summary(repo, reference_date)?),
        Command::Clients { query } => {
            print_json(out, &clients::load_clients(repo, query.as_deref())?)
        }
        Command::Inventory { query } => print_json(
            out,
            &inventory::load_inventory(repo, query.as_deref(), config.most_used_limit)?,
        ),
        Command::Appointments { date, query } => {
            let date = parse_day(&date, reference_date)?;
            print_json(
                out,
                &appointments::load_appointments(repo, date, query.as_deref())?,
            )
        }
        Command::Payments { query, method } => print_json(
            out,
            &payments::load_payments(repo, query.as_deref(), method.as_deref())?,
        ),
        Command::Feedback => print_json(out, &feedback::load_feedback(repo)?),
        Command::Loyalty { query } => {
            print_json(out, &loyalty::load_loyalty(repo, query.as_deref())?)
        }
        Command::Team { query } => print_json(out, &team::load_team(repo, query.as_deref())?),
        Command::Services { query } => print_json(
            out,
            &catalog::load_catalog(repo, query.as_deref(), config.popular_services_limit)?,
        ),
        Command::Notifications => print_json(out, &notifications::load_notifications(repo)?),
        Command::Analytics => print_json(out, &analytics::load_analytics(repo)?),
        Command::ExportTransactions {
            path,
            query,
            method,
        } => {
            let page = payments::load_payments(repo, query.as_deref(), method.as_deref())?;
            let path = export_path(config, &path);
            let file = std::fs::File::create(&path).map_err(|err| {
                log::error!("Failed to create {}: {err}", path.display());
                err
            })?;
            let written = payments::export_transactions(&page.transactions, file)?;
            log::info!("Exported {written} transactions to {}", path.display());

            print_json(
                out,
                &Notice::success(
                    "Exportação concluída",
                    format!("{written} transações exportadas para {}.", path.display()),
                ),
            )
        }
    }
}

/// Loads the configured store and runs `command` against it.
pub fn run<W>(config: &DashboardConfig, command: Command, out: &mut W) -> Result<(), CliError>
where
    W: Write,
{
    let repo = InMemoryRepository::new(load_store(config)?);
    execute(&repo, config, command, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> DashboardConfig {
        DashboardConfig {
            reference_date: NaiveDate::from_ymd_opt(2023, 6, 12),
            ..DashboardConfig::default()
        }
    }

    fn run_json(command: Command) -> serde_json::Value {
        let mut out = Vec::new();
        run(&config(), command, &mut out).unwrap();
        serde_json::from_slice(&out).unwrap()
    }

    #[test]
    fn parses_subcommands() {
        let cli = Cli::try_parse_from(["barbershop-dashboard", "payments", "t00", "pix"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Payments {
                query: Some("t00".to_string()),
                method: Some("pix".to_string()),
            }
        );

        let cli = Cli::try_parse_from(["barbershop-dashboard", "appointments", "tomorrow"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Appointments {
                date: "tomorrow".to_string(),
                query: None,
            }
        );
    }

    #[test]
    fn day_arguments_resolve_against_reference() {
        let reference = NaiveDate::from_ymd_opt(2023, 6, 12).unwrap();
        assert_eq!(parse_day("today", reference).unwrap(), reference);
        assert_eq!(
            parse_day("Tomorrow", reference).unwrap(),
            NaiveDate::from_ymd_opt(2023, 6, 13).unwrap()
        );
        assert_eq!(
            parse_day("2023-06-01", reference).unwrap(),
            NaiveDate::from_ymd_opt(2023, 6, 1).unwrap()
        );
        assert!(matches!(
            parse_day("someday", reference),
            Err(CliError::InvalidDate(_))
        ));
    }

    #[test]
    fn summary_is_printed_as_json() {
        let value = run_json(Command::Summary);
        assert_eq!(value["appointments_today"], 5);
        assert_eq!(value["reference_date"], "2023-06-12");
    }

    #[test]
    fn tomorrow_uses_reference_date() {
        let value = run_json(Command::Appointments {
            date: "tomorrow".to_string(),
            query: None,
        });
        assert_eq!(value["date"], "2023-06-13");
        assert_eq!(value["appointments"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn export_writes_csv_into_export_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = DashboardConfig {
            export_dir: dir.path().display().to_string(),
            ..config()
        };
        let mut out = Vec::new();

        run(
            &config,
            Command::ExportTransactions {
                path: PathBuf::from("transacoes.csv"),
                query: None,
                method: Some("dinheiro".to_string()),
            },
            &mut out,
        )
        .unwrap();

        let csv = std::fs::read_to_string(dir.path().join("transacoes.csv")).unwrap();
        assert_eq!(csv.lines().count(), 3);
        assert!(csv.contains("T003"));
        assert!(csv.contains("T006"));
    }

    #[test]
    fn missing_seed_file_is_an_error() {
        let config = DashboardConfig {
            seed_file: Some("/nonexistent/seed.json".to_string()),
            ..config()
        };
        let mut out = Vec::new();
        assert!(matches!(
            run(&config, Command::Feedback, &mut out),
            Err(CliError::Repository(_))
        ));
    }
}
