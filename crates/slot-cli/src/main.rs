//! `slots` CLI — inspect booking availability from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Availability for a window, busy periods piped via stdin
//! echo '[]' | slots availability --from 2026-03-16T00:00:00Z --to 2026-03-21T00:00:00Z
//!
//! # Busy periods and tenant settings from files, result to a file
//! slots availability -i busy.json --settings tenant.json \
//!   --from 2026-03-16T00:00:00Z --to 2026-03-21T00:00:00Z \
//!   --timezone America/New_York -o result.json
//!
//! # Check one proposed instant against the open slots
//! slots check -i busy.json --proposed 2026-03-16T14:00:00Z \
//!   --from 2026-03-16T00:00:00Z --to 2026-03-17T00:00:00Z
//!
//! # Show the effective weekly schedule for a settings file
//! slots hours --settings tenant.json
//! ```

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::io::{self, Read};

use slot_engine::availability::check_availability;
use slot_engine::interval::{parse_busy_periods, parse_timestamp, BusyPeriod, RawBusyPeriod};
use slot_engine::settings::BookingSettings;

#[derive(Parser)]
#[command(name = "slots", version, about = "Booking availability inspector")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute bookable slots for a time window
    Availability {
        /// Window start (ISO 8601, e.g. 2026-03-16T00:00:00Z)
        #[arg(long)]
        from: String,
        /// Window end, exclusive (ISO 8601)
        #[arg(long)]
        to: String,
        /// IANA timezone of the tenant (unrecognized zones fall back to UTC)
        #[arg(long, default_value = "UTC")]
        timezone: String,
        /// Busy-periods JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Tenant settings JSON file (stock settings if omitted)
        #[arg(long)]
        settings: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Check a proposed time against the open slots
    Check {
        /// Window start (ISO 8601)
        #[arg(long)]
        from: String,
        /// Window end, exclusive (ISO 8601)
        #[arg(long)]
        to: String,
        /// IANA timezone of the tenant (unrecognized zones fall back to UTC)
        #[arg(long, default_value = "UTC")]
        timezone: String,
        /// Proposed appointment time (ISO 8601)
        #[arg(long)]
        proposed: String,
        /// Busy-periods JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Tenant settings JSON file (stock settings if omitted)
        #[arg(long)]
        settings: Option<String>,
    },
    /// Show the effective weekly schedule for a settings file
    Hours {
        /// Tenant settings JSON file (stock settings if omitted)
        #[arg(long)]
        settings: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Availability {
            from,
            to,
            timezone,
            input,
            settings,
            output,
        } => {
            let busy = read_busy_periods(input.as_deref())?;
            let settings = load_settings(settings.as_deref())?;
            let (start, end) = parse_window(&from, &to)?;

            let result = check_availability(start, end, &busy, &timezone, &settings, None)?;
            let json = serde_json::to_string_pretty(&result)?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::Check {
            from,
            to,
            timezone,
            proposed,
            input,
            settings,
        } => {
            let busy = read_busy_periods(input.as_deref())?;
            let settings = load_settings(settings.as_deref())?;
            let (start, end) = parse_window(&from, &to)?;

            let result =
                check_availability(start, end, &busy, &timezone, &settings, Some(&proposed))?;
            match result.matching_slot {
                Some(slot) => println!("match: {}", slot.time.to_rfc3339()),
                None => println!("no match ({} open slots in window)", result.total_slots),
            }
        }
        Commands::Hours { settings } => {
            let settings = load_settings(settings.as_deref())?;
            print_hours(&settings);
        }
    }

    Ok(())
}

/// Parse the --from/--to window bounds.
fn parse_window(from: &str, to: &str) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    let start =
        parse_timestamp(from).with_context(|| format!("invalid --from value: {}", from))?;
    let end = parse_timestamp(to).with_context(|| format!("invalid --to value: {}", to))?;
    Ok((start, end))
}

/// Read busy periods from a JSON file or stdin and validate them.
fn read_busy_periods(path: Option<&str>) -> Result<Vec<BusyPeriod>> {
    let json = read_input(path)?;
    let raw: Vec<RawBusyPeriod> = serde_json::from_str(&json)
        .context("busy-periods input is not a JSON array of {start, end} objects")?;
    Ok(parse_busy_periods(&raw)?)
}

/// Load tenant settings from a JSON file, or fall back to the stock settings.
fn load_settings(path: Option<&str>) -> Result<BookingSettings> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read settings file: {}", path))?;
            Ok(BookingSettings::from_json(&json)?)
        }
        None => Ok(BookingSettings::default()),
    }
}

/// Print the weekly schedule after defaults are applied.
fn print_hours(settings: &BookingSettings) {
    println!("slot length: {} min", settings.slot_length_minutes);
    println!("buffer: {} min", settings.buffer_minutes);
    println!("minimum advance: {} min", settings.minimum_advance_minutes);
    println!();
    for (name, day) in settings.business_hours.days() {
        match day {
            Some(d) if d.enabled => println!(
                "{:<10} {:02}:00-{:02}:00",
                name, d.start_hour, d.end_hour
            ),
            _ => println!("{:<10} closed", name),
        }
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
