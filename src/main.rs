// Copyright (c) 2026 bad-antics
// Licensed under the MIT License. See LICENSE file in the project root.
// https://github.com/bad-antics/privscan-rs

//! PrivScan - Privacy Scan Simulator
//!
//! Headless driver for the scan orchestrator: runs one full sweep (or a
//! single-sensor retry) against wall-clock time and renders the per-sensor
//! panels to the terminal.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Parser;
use parking_lot::Mutex;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use privscan::core::{EventBus, Notification, NotificationKind, ScanOrchestrator, ScanUpdate};
use privscan::{Config, ScanState, SensorKind, VERSION};

/// PrivScan - Privacy Scan Simulator
#[derive(Parser, Debug)]
#[command(name = "privscan")]
#[command(author = "PrivScan Project")]
#[command(version = VERSION)]
#[command(about = "Simulated surveillance-device sweep with randomized findings")]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable trace-level logging
    #[arg(long)]
    trace: bool,

    /// Seed the outcome RNG for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Scan a single sensor instead of the full sweep
    /// (infrared, wifi, magnetic, audio, light)
    #[arg(long)]
    sensor: Option<String>,

    /// Print the final scan state as JSON instead of panels
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.trace {
        Level::TRACE
    } else if args.debug {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_ansi(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("PrivScan v{} - Privacy Scan Simulator", VERSION);

    let config_path = args.config.clone().unwrap_or_else(Config::default_path);
    let config = Config::load_or_create(&config_path)?;
    info!("Configuration loaded from {:?}", config_path);

    let target = match args.sensor.as_deref() {
        Some(label) => match SensorKind::from_label(label) {
            Some(kind) => Some(kind),
            None => bail!(
                "unknown sensor '{}', expected one of: infrared, wifi, magnetic, audio, light",
                label
            ),
        },
        None => None,
    };

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        tokio::select! {
            result = run_scan(config, args.seed, target, args.json) => result,
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted, exiting");
                Ok(())
            }
        }
    })
}

async fn run_scan(
    config: Config,
    seed: Option<u64>,
    target: Option<SensorKind>,
    json: bool,
) -> Result<()> {
    let config = Arc::new(config);
    let bus = Arc::new(EventBus::new(64));

    let mut notify_rx = bus.subscribe_notifications();
    let mut update_rx = bus.subscribe_updates();

    let orch = Arc::new(Mutex::new(match seed {
        Some(seed) => ScanOrchestrator::seeded(config.clone(), bus.clone(), seed),
        None => ScanOrchestrator::new(config.clone(), bus.clone()),
    }));

    {
        let mut orch = orch.lock();
        let started = match target {
            Some(sensor) => orch.start_single_scan(sensor),
            None => orch.start_full_scan(),
        };
        debug_assert!(started, "fresh orchestrator cannot be running");
    }

    // Drive the virtual scheduler against wall-clock sleeps, relaying bus
    // traffic as it arrives.
    loop {
        let due = { orch.lock().next_due() };
        let Some(due) = due else { break };

        let sleep = tokio::time::sleep(due);
        tokio::pin!(sleep);

        loop {
            tokio::select! {
                _ = &mut sleep => {
                    orch.lock().advance(due);
                    break;
                }
                msg = notify_rx.recv() => {
                    if let Ok(note) = msg {
                        print_notification(&note);
                    }
                }
                upd = update_rx.recv() => {
                    if let Ok(update) = upd {
                        print_update(&update);
                    }
                }
            }
        }
    }

    while let Ok(note) = notify_rx.try_recv() {
        print_notification(&note);
    }
    while let Ok(update) = update_rx.try_recv() {
        print_update(&update);
    }

    let state = orch.lock().state().clone();
    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        print_panels(&state);
    }

    Ok(())
}

fn print_notification(note: &Notification) {
    let marker = match note.kind {
        NotificationKind::Info => "•",
        NotificationKind::Success => "✔",
    };
    match &note.description {
        Some(desc) => info!("{} {} - {}", marker, note.title, desc),
        None => info!("{} {}", marker, note.title),
    }
}

fn print_update(update: &ScanUpdate) {
    match update {
        ScanUpdate::SweepStarted { session } => info!("Sweep {} started", session),
        ScanUpdate::SingleStarted { session, sensor } => {
            info!("Session {} started for {}", session, sensor)
        }
        ScanUpdate::SensorActivated(sensor) => info!("{} scanning...", sensor.title()),
        ScanUpdate::SensorCompleted { sensor, result } => {
            info!("{}: {} - {}", sensor.title(), result.status, result.details)
        }
        ScanUpdate::SessionFinished { session } => info!("Session {} finished", session),
    }
}

fn print_panels(state: &ScanState) {
    println!();
    println!("Scan Results");
    println!("{}", "-".repeat(72));
    for sensor in SensorKind::ALL {
        match state.results.get(&sensor) {
            Some(result) => println!(
                "{:<26} {:<12} {}",
                sensor.title(),
                result.status.label(),
                result.details
            ),
            None => println!("{:<26} {:<12} Not yet scanned", sensor.title(), "Pending"),
        }
    }
    println!("{}", "-".repeat(72));
}
