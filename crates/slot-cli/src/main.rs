//! `slots` CLI — evaluate booking-slot and contact-privacy decisions from
//! the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Is the provider free at 10:00 for 1.5 hours?
//! slots check -i bookings.json --date 2024-06-15 --time 10:00 --hours 1.5
//!
//! # Pipe bookings via stdin
//! curl -s "$API/bookings?provider=42" | slots check --date 2024-06-15 --time 10:00 --hours 1
//!
//! # May a provider see the customer's contact details on a given day?
//! slots contact --date 2024-06-15 --role PROVIDER --today 2024-06-14
//!
//! # Open windows in a working day
//! slots free -i bookings.json --date 2024-06-15 --from 08:00 --to 18:00
//! ```
//!
//! `check` and `free` exit non-zero only on input errors (unreadable file,
//! bad JSON, malformed arguments) — "busy" is a result, not a failure.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use slot_engine::booking::{Booking, SlotRequest, ViewerRole};
use slot_engine::{availability, conflict, privacy, time};
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Booking-slot availability and contact-privacy decisions"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a candidate slot collides with existing bookings
    Check {
        /// Bookings JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Service date, YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Start time, HH:MM (24h)
        #[arg(long)]
        time: String,
        /// Duration in hours (fractions allowed)
        #[arg(long)]
        hours: f64,
    },
    /// Decide contact-detail visibility for a viewer role
    Contact {
        /// Service date, YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Viewer role: ADMIN, CUSTOMER or PROVIDER
        #[arg(long)]
        role: String,
        /// The viewer's current calendar date, YYYY-MM-DD
        #[arg(long)]
        today: String,
    },
    /// List free windows within a working day
    Free {
        /// Bookings JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Service date, YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Working day start, HH:MM
        #[arg(long)]
        from: String,
        /// Working day end, HH:MM
        #[arg(long)]
        to: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            input,
            date,
            time,
            hours,
        } => {
            let bookings = read_bookings(input.as_deref())?;
            let request = SlotRequest {
                date,
                start_time: time,
                duration_hours: hours,
            };
            let conflicts = conflict::find_slot_conflicts(&bookings, &request)
                .context("Failed to evaluate the candidate slot")?;

            if conflicts.is_empty() {
                println!("available");
            } else {
                println!("busy");
                for c in &conflicts {
                    println!(
                        "  booking {} ({} - {}) overlaps by {} min",
                        c.booking_id,
                        c.start.format("%H:%M"),
                        c.end.format("%H:%M"),
                        c.overlap_minutes
                    );
                }
            }
        }
        Commands::Contact { date, role, today } => {
            let today = time::parse_service_date(&today)
                .with_context(|| format!("Invalid --today date: {}", today))?;
            let decision =
                privacy::check_contact_visibility_raw(&date, ViewerRole::from_wire(&role), today);

            println!("{}", if decision.visible { "visible" } else { "hidden" });
            println!("  {}", decision.reason);
        }
        Commands::Free {
            input,
            date,
            from,
            to,
        } => {
            let bookings = read_bookings(input.as_deref())?;
            let from = time::parse_time_of_day(&from)
                .with_context(|| format!("Invalid --from time: {}", from))?;
            let to = time::parse_time_of_day(&to)
                .with_context(|| format!("Invalid --to time: {}", to))?;
            let windows = availability::free_windows(&bookings, &date, from, to)
                .context("Failed to compute free windows")?;

            if windows.is_empty() {
                println!("no free windows");
            } else {
                for w in &windows {
                    println!(
                        "{} - {} ({} min)",
                        w.start.format("%H:%M"),
                        w.end.format("%H:%M"),
                        w.duration_minutes
                    );
                }
            }
        }
    }

    Ok(())
}

fn read_bookings(path: Option<&str>) -> Result<Vec<Booking>> {
    let raw = read_input(path)?;
    serde_json::from_str(&raw).context("Failed to parse bookings JSON")
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
