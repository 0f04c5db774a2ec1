//! Fleet maintenance booking command line
//!
//! Every subcommand prints a single JSON document to stdout; logs go to
//! stderr.

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use fleet_booking_cli::catalog::load_catalog;
use fleet_booking_cli::commands::{BookingInput, CommandContext};
use fleet_booking_cli::{config::Config, LogFormat, Result};
use fleet_booking_core::booking::Urgency;
use fleet_booking_core::planner::MaintenanceTask;
use serde::Serialize;
use std::io::{self, Write};
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "fleet-booking")]
#[command(about = "Find workshop slots, price and book fleet maintenance")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Override the catalog file
    #[arg(long, global = true)]
    catalog: Option<String>,

    /// Override the log level
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Override the log format
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Slots bookable for a service on a date
    Slots {
        #[arg(long)]
        date: NaiveDate,
        #[arg(long)]
        service: String,
    },
    /// Workshops offering a service
    Workshops {
        #[arg(long)]
        service: String,
    },
    /// Estimated cost of a service at a workshop
    Quote {
        #[arg(long)]
        service: String,
        #[arg(long)]
        workshop: String,
    },
    /// One workshop's schedule for a date
    WorkshopDay {
        #[arg(long)]
        workshop: String,
        #[arg(long)]
        date: NaiveDate,
    },
    /// Validate a selection and schedule the booking
    Book {
        #[arg(long)]
        vehicle: String,
        #[arg(long)]
        workshop: String,
        #[arg(long)]
        service: String,
        #[arg(long)]
        date: NaiveDate,
        #[arg(long)]
        time: String,
        #[arg(long, default_value = "medium")]
        urgency: Urgency,
    },
    /// Pick the best workshop and slot for a task
    Plan {
        #[arg(long)]
        vehicle: String,
        #[arg(long)]
        service: String,
        #[arg(long, default_value = "medium")]
        urgency: Urgency,
        /// First day to consider, today when omitted
        #[arg(long)]
        from: Option<NaiveDate>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match cli.config.as_deref() {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    apply_cli_overrides(&mut config, &cli);
    config.validate()?;

    init_tracing(&config);
    info!(
        horizon_days = config.planner.horizon_days,
        catalog = config.catalog.path.as_deref().unwrap_or("<sample>"),
        "Configuration loaded"
    );

    let catalog = load_catalog(&config.catalog).map_err(|e| {
        error!("Failed to load catalog: {}", e);
        e
    })?;
    let context = CommandContext::new(catalog, config.planner_settings());

    if let Err(e) = run(&context, cli.command) {
        error!("Command failed: {}", e);
        return Err(e);
    }
    Ok(())
}

/// Apply CLI argument overrides to configuration
fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if let Some(catalog) = &cli.catalog {
        config.catalog.path = Some(catalog.clone());
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(format) = cli.log_format {
        config.logging.format = format;
    }
}

fn init_tracing(config: &Config) {
    let level = &config.logging.level;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "fleet_booking_core={},fleet_booking_cli={},fleet_booking={}",
            level, level, level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);
    match config.logging.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .init(),
        LogFormat::Text => registry.with(fmt::layer().with_writer(io::stderr)).init(),
    }
}

fn run(context: &CommandContext, command: Command) -> Result<()> {
    match command {
        Command::Slots { date, service } => print_json(&context.slots(date, &service)?),
        Command::Workshops { service } => print_json(&context.workshops(&service)?),
        Command::Quote { service, workshop } => print_json(&context.quote(&service, &workshop)?),
        Command::WorkshopDay { workshop, date } => {
            print_json(&context.workshop_day(&workshop, date)?)
        }
        Command::Book {
            vehicle,
            workshop,
            service,
            date,
            time,
            urgency,
        } => print_json(&context.book(BookingInput {
            vehicle_id: vehicle,
            workshop_id: workshop,
            service_type: service,
            date,
            time,
            urgency,
        })?),
        Command::Plan {
            vehicle,
            service,
            urgency,
            from,
        } => {
            let task = MaintenanceTask::new(vehicle, service, urgency);
            let from = from.unwrap_or_else(|| Local::now().date_naive());
            print_json(&context.plan(&task, from)?)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
