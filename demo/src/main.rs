//! Clinic screens demo CLI
//!
//! Renders one or all of the clinic list screens on the terminal. Without
//! `--input` each screen uses its built-in fictional fixture payload.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- doctor-appointments --status TODAY
//!   cargo run -p demo -- invoices --status UNPAID --search "nguyen van"
//!   cargo run -p demo -- medical-records --input records.json --today 2026-02-18

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use clinic_contracts::{
    criteria::{ListCriteria, StatusFilter},
    error::{ClinicError, ClinicResult},
};
use clinic_core::traits::{Clock, FixedClock, LocalClock};
use clinic_profile::TomlProfileStore;
use clinic_screens::{default_profiles, mock_data::FIXTURE_TODAY, screens::ScreenContext, Screen};

// ── CLI definition ────────────────────────────────────────────────────────────

/// Clinic list screens: filter, sort, and summarize record lists.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "Clinic list screens demo",
    long_about = "Renders clinic list screens with status, date, and search filters,\n\
                  summary tiles, and pagination."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every screen on its fixture payload.
    RunAll(CommonArgs),
    /// Doctor's daily queue.
    DoctorAppointments(ListArgs),
    /// A patient's own bookings.
    PatientAppointments(ListArgs),
    /// Examination records.
    MedicalRecords(ListArgs),
    /// Cashier invoice list.
    Invoices(ListArgs),
    /// E-wallet top-ups and payments.
    WalletTransactions(ListArgs),
    /// Prescriptions grouped by date.
    MedicationHistory(ListArgs),
}

#[derive(Args, Clone, Default)]
struct CommonArgs {
    /// TOML file with screen profiles (defaults to the shipped profiles).
    #[arg(long)]
    profiles: Option<PathBuf>,
    /// Treat this date (YYYY-MM-DD) as today.
    #[arg(long)]
    today: Option<NaiveDate>,
}

#[derive(Args, Clone, Default)]
struct ListArgs {
    /// ALL, TODAY, or an exact status such as CONFIRMED.
    #[arg(long)]
    status: Option<String>,
    /// Keep only records on this date.
    #[arg(long)]
    date: Option<String>,
    /// Case- and accent-insensitive search text.
    #[arg(long)]
    search: Option<String>,
    /// 1-based page number.
    #[arg(long, default_value_t = 1)]
    page: usize,
    /// JSON payload to load instead of the fixture.
    #[arg(long)]
    input: Option<PathBuf>,
    #[command(flatten)]
    common: CommonArgs,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Set RUST_LOG=debug for processor traces.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::RunAll(common) => run_all(common),
        Command::DoctorAppointments(args) => run_one(Screen::DoctorAppointments, args),
        Command::PatientAppointments(args) => run_one(Screen::PatientAppointments, args),
        Command::MedicalRecords(args) => run_one(Screen::MedicalRecords, args),
        Command::Invoices(args) => run_one(Screen::Invoices, args),
        Command::WalletTransactions(args) => run_one(Screen::WalletTransactions, args),
        Command::MedicationHistory(args) => run_one(Screen::MedicationHistory, args),
    };

    if let Err(e) = result {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

// ── Screen dispatch ───────────────────────────────────────────────────────────

fn run_all(common: CommonArgs) -> ClinicResult<()> {
    let store = load_profiles(&common)?;
    for screen in Screen::ALL {
        let args = ListArgs {
            page: 1,
            common: common.clone(),
            ..ListArgs::default()
        };
        run_with(screen, &args, &store)?;
    }
    Ok(())
}

fn run_one(screen: Screen, args: ListArgs) -> ClinicResult<()> {
    let store = load_profiles(&args.common)?;
    run_with(screen, &args, &store)
}

fn run_with(screen: Screen, args: &ListArgs, store: &TomlProfileStore) -> ClinicResult<()> {
    let profile = store.resolve(screen.id());
    let status = args
        .status
        .as_deref()
        .map(StatusFilter::from)
        .unwrap_or_else(|| profile.default_status());

    let mut criteria = ListCriteria::all().with_status(status);
    if let Some(date) = &args.date {
        criteria = criteria.with_date(date.as_str());
    }
    if let Some(term) = &args.search {
        criteria = criteria.with_search(term.as_str());
    }

    let ctx = ScreenContext {
        criteria,
        profile,
        clock: clock_for(args)?,
        page: args.page,
    };
    let outcome = screen.run(args.input.as_deref(), ctx)?;
    info!(
        screen = %outcome.screen_id,
        matched = outcome.matched,
        shown = outcome.shown,
        skipped = outcome.skipped,
        "screen rendered"
    );
    Ok(())
}

// ── Configuration ─────────────────────────────────────────────────────────────

fn load_profiles(common: &CommonArgs) -> ClinicResult<TomlProfileStore> {
    match &common.profiles {
        Some(path) => TomlProfileStore::from_file(path),
        None => default_profiles(),
    }
}

/// `--today` wins; fixtures are pinned to the date they were written around;
/// real input uses the local calendar.
fn clock_for(args: &ListArgs) -> ClinicResult<Box<dyn Clock>> {
    if let Some(today) = args.common.today {
        return Ok(Box::new(FixedClock(today)));
    }
    if args.input.is_some() {
        return Ok(Box::new(LocalClock));
    }
    let today = NaiveDate::parse_from_str(FIXTURE_TODAY, "%Y-%m-%d").map_err(|e| {
        ClinicError::ConfigError {
            reason: format!("invalid fixture date '{}': {}", FIXTURE_TODAY, e),
        }
    })?;
    Ok(Box::new(FixedClock(today)))
}
