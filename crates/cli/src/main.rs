// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod commands;
mod config;
mod error;

use std::path::{Path, PathBuf};
use std::time::Duration;

use awards_api::{ClientConfig, DateRange, ExportFilter, ExportFormat, RetryPolicy};
use awards_domain::{FormData, ReviewDecision, fields};
use awards_persistence::{ServiceOptions, SqliteStorage};
use clap::{Parser, Subcommand};
use time::{Date, OffsetDateTime};
use time::macros::format_description;
use tracing::info;

use crate::commands::ExportEntity;
use crate::config::{Context, FeatureFlags, LocalStorage};
use crate::error::CliError;

/// Awards Portal demo - drives the signup wizard, waitlist, NRC and exports
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Base URL of the participation backend
    #[arg(long, default_value = "http://127.0.0.1:8080/api")]
    api_base_url: String,

    /// Seconds to wait for each backend attempt
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Attempts per backend call, including the first
    #[arg(long, default_value_t = 3)]
    max_attempts: u32,

    /// Artificial delay for local services, in milliseconds
    #[arg(long, default_value_t = 0)]
    latency_ms: u64,

    /// Turn off the Nominee Research Corps
    #[arg(long)]
    disable_nrc: bool,

    /// Turn off the waitlist
    #[arg(long)]
    disable_waitlist: bool,

    /// Answer submissions locally instead of calling the backend
    #[arg(long)]
    mock_backend: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Walk the signup wizard over a JSON answers file and submit it
    Signup {
        /// JSON object of field names to answers
        answers: PathBuf,
        /// Discard any saved wizard progress first
        #[arg(long)]
        reset: bool,
    },
    /// Join the waitlist
    Waitlist {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// What to hear about; repeat for several
        #[arg(long = "category", required = true)]
        categories: Vec<String>,
    },
    /// File a Nominee Research Corps application from a JSON answers file
    Apply { answers: PathBuf },
    /// Approve or reject a pending application
    Review {
        id: String,
        #[arg(long)]
        reject: bool,
        #[arg(long, default_value = "admin@awards.example")]
        reviewer: String,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Save a nominee profile for a volunteer from a JSON answers file
    Nominee {
        /// The volunteer's email
        email: String,
        answers: PathBuf,
        /// Submit the profile after saving the draft
        #[arg(long)]
        submit: bool,
    },
    /// Show Nominee Research Corps counts
    Stats,
    /// List a user's notifications
    Notifications {
        email: String,
        #[arg(long)]
        mark_read: bool,
    },
    /// Export a stored collection
    Export {
        #[arg(value_enum)]
        entity: ExportEntity,
        /// csv or json
        #[arg(long, default_value = "csv")]
        format: String,
        /// First day to include (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Last day to include (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        #[arg(long = "status")]
        statuses: Vec<String>,
        #[arg(long = "category")]
        categories: Vec<String>,
        #[arg(long = "country")]
        countries: Vec<String>,
        /// Directory to write into
        #[arg(long, default_value = ".")]
        output: PathBuf,
    },
}

impl Args {
    fn feature_flags(&self) -> FeatureFlags {
        FeatureFlags {
            nrc: !self.disable_nrc,
            waitlist: !self.disable_waitlist,
            mock_backend: self.mock_backend,
        }
    }

    fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api_base_url.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_retry(RetryPolicy::default().with_max_attempts(self.max_attempts))
    }
}

fn parse_date(value: &str) -> Result<Date, CliError> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .map_err(|err| CliError::InvalidArgument(format!("{value}: {err}")))
}

/// Builds the export filter. A range needs both ends.
fn build_filter(
    from: Option<&str>,
    to: Option<&str>,
    statuses: Vec<String>,
    categories: Vec<String>,
    countries: Vec<String>,
) -> Result<ExportFilter, CliError> {
    let date_range: Option<DateRange> = match (from, to) {
        (None, None) => None,
        (Some(from), Some(to)) => Some(DateRange {
            start: parse_date(from)?,
            end: parse_date(to)?,
        }),
        _ => {
            return Err(CliError::InvalidArgument(String::from(
                "--from and --to must be given together",
            )));
        }
    };
    Ok(ExportFilter {
        date_range,
        statuses,
        categories,
        countries,
    })
}

fn read_answers(path: &Path) -> Result<FormData, CliError> {
    let raw: String = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn waitlist_form(name: String, email: String, categories: Vec<String>) -> FormData {
    let mut form: FormData = FormData::new();
    form.set(fields::NAME, name);
    form.set(fields::EMAIL, email);
    form.set(fields::CATEGORIES, categories);
    form
}

async fn run(ctx: &Context, command: Command) -> Result<String, CliError> {
    match command {
        Command::Signup { answers, reset } => {
            commands::signup(ctx, read_answers(&answers)?, reset).await
        }
        Command::Waitlist {
            name,
            email,
            categories,
        } => commands::join_waitlist(ctx, waitlist_form(name, email, categories)).await,
        Command::Apply { answers } => commands::apply(ctx, read_answers(&answers)?).await,
        Command::Review {
            id,
            reject,
            reviewer,
            notes,
        } => {
            let decision: ReviewDecision = if reject {
                ReviewDecision::Reject
            } else {
                ReviewDecision::Approve
            };
            commands::review(ctx, &id, decision, &reviewer, notes).await
        }
        Command::Nominee {
            email,
            answers,
            submit,
        } => commands::research_nominee(ctx, &email, read_answers(&answers)?, submit).await,
        Command::Stats => commands::stats(ctx).await,
        Command::Notifications { email, mark_read } => {
            commands::notifications(ctx, &email, mark_read).await
        }
        Command::Export {
            entity,
            format,
            from,
            to,
            statuses,
            categories,
            countries,
            output,
        } => {
            let format: ExportFormat = format.parse().map_err(CliError::InvalidArgument)?;
            let filter: ExportFilter =
                build_filter(from.as_deref(), to.as_deref(), statuses, categories, countries)?;
            let path: PathBuf = commands::export_to_dir(ctx, entity, &filter, format, &output)?;
            Ok(format!("Wrote {}", path.display()))
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting Awards Portal demo");

    let storage: SqliteStorage = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        SqliteStorage::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        SqliteStorage::new_in_memory()?
    };

    let ctx: Context = Context {
        storage: LocalStorage::from(storage),
        flags: args.feature_flags(),
        client: args.client_config(),
        options: ServiceOptions::with_latency(Duration::from_millis(args.latency_ms)),
        today: OffsetDateTime::now_utc().date(),
    };
    info!(flags = ?ctx.flags, backend = %ctx.client.base_url, "Configuration loaded");

    let output: String = run(&ctx, args.command).await?;
    println!("{}", output.trim_end());
    Ok(())
}
