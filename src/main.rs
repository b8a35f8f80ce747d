use anyhow::{Context, Result};
use chrono::TimeDelta;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use parkinglot::config::{FileConfig, StrategyKind};
use parkinglot::{Clock, ManualClock, ParkingLot, SystemClock, Ticket, Vehicle};

/// Console walk-through of a small parking lot
///
/// Examples:
///   # Sample lot, linear pricing, two hour stay starting now
///   parkinglot
///
///   # Peak pricing for an evening arrival
///   parkinglot --strategy peak --entry-hour 19
///
///   # Use a config file and dump the final lot state as JSON
///   parkinglot --config my-lot.toml --json
#[derive(Parser, Debug)]
#[command(name = "parkinglot")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches parkinglot.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Hourly base rate
    #[arg(long)]
    base_rate: Option<f64>,

    /// Fare strategy: linear or peak
    #[arg(long)]
    strategy: Option<StrategyKind>,

    /// Multiplier applied to peak-hour entries
    #[arg(long)]
    peak_multiplier: Option<f64>,

    /// Hour of day at which the demo vehicles arrive (defaults to now)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=23))]
    entry_hour: Option<u32>,

    /// Simulated length of the car's stay, in minutes
    #[arg(long, default_value = "120")]
    stay_minutes: u32,

    /// Print the final lot status as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = if let Some(ref config_path) = args.config {
        Some(FileConfig::from_path(config_path).context("Failed to load config file")?)
    } else {
        FileConfig::load()
    };

    let mut config = file_config.unwrap_or_default();
    if let Some(rate) = args.base_rate {
        config.base_rate = rate;
    }
    if let Some(strategy) = args.strategy {
        config.strategy = strategy;
    }
    if let Some(multiplier) = args.peak_multiplier {
        config.peak_multiplier = multiplier;
    }
    let verbose = args.verbose || config.verbose;

    init_tracing(verbose);

    let mut lot = config
        .build_lot()
        .context("Failed to build parking lot from configuration")?;

    if verbose {
        println!("Configuration:");
        println!("  Spots: {}", config.spots.join(", "));
        println!("  Strategy: {}", lot.fare_calculator().strategy().name());
        println!("  Base rate: {:.2}", lot.fare_calculator().base_rate());
        match args.entry_hour {
            Some(hour) => println!("  Entry hour: {:02}:00", hour),
            None => println!("  Entry hour: now"),
        }
        println!("  Stay: {} minutes", args.stay_minutes);
        println!();
    }

    let now = SystemClock.now();
    let start = match args.entry_hour {
        Some(hour) => now
            .date()
            .and_hms_opt(hour, 0, 0)
            .context("Invalid entry hour")?,
        None => now,
    };
    let clock = ManualClock::new(start);

    println!("=== Parking Lot System ===");
    println!();

    let car = Vehicle::car("ABC123");
    let motorcycle = Vehicle::motorcycle("XYZ789");
    let truck = Vehicle::truck("TRK456");

    println!("1. Vehicle Entry:");
    let car_ticket = enter(&mut lot, &car, &clock);
    enter(&mut lot, &motorcycle, &clock);
    enter(&mut lot, &truck, &clock);

    println!();
    println!("2. Vehicle Exit:");
    if let Some(mut ticket) = car_ticket {
        clock.advance(TimeDelta::minutes(i64::from(args.stay_minutes)));
        println!("   {} leaving...", car);
        match lot.leave_vehicle(&mut ticket, &clock) {
            Some(fare) => println!("   ✓ Fare: ${:.2}", fare),
            None => println!("   ✗ Ticket already closed"),
        }
        if lot.leave_vehicle(&mut ticket, &clock).is_none() {
            println!("   ✓ Second exit on {} rejected", ticket.id());
        }
    } else {
        println!("   No car parked, nothing to charge");
    }

    println!();
    println!("3. Current Status:");
    if args.json {
        let json = serde_json::to_string_pretty(&lot.status())
            .context("Failed to serialize lot status")?;
        println!("{}", json);
    } else {
        for spot in lot.manager().spots() {
            println!("   {}", spot);
        }
        let status = lot.status();
        println!();
        println!("   {} of {} spots free", status.available, status.total);
    }

    Ok(())
}

fn enter(lot: &mut ParkingLot, vehicle: &Vehicle, clock: &ManualClock) -> Option<Ticket> {
    println!("   {} entering...", vehicle);
    let ticket = lot.enter_vehicle(vehicle, clock);
    match &ticket {
        Some(ticket) => println!("   ✓ {}", ticket),
        None => println!("   ✗ No spot available"),
    }
    ticket
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}
