// Copyright (c) 2026 bad-antics
// Licensed under the MIT License. See LICENSE file in the project root.
// https://github.com/bad-antics/privscan-rs

//! PrivScan - Privacy Scan Simulator
//!
//! A simulated surveillance-device sweep: five sensor categories
//! (infrared, Wi-Fi, magnetic, audio, light), staggered activation and
//! completion timing, and randomized status results with fixed finding
//! text. No real sensor I/O anywhere; the interesting part is the
//! scan-orchestration state machine and its deterministic scheduler.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                  Scan Orchestrator                    │
//! ├───────────────────────────────────────────────────────┤
//! │  ┌───────────┐   ┌────────────┐   ┌───────────────┐   │
//! │  │ ScanState │ ← │ Scheduler  │ ← │   Finding     │   │
//! │  │ container │   │ (virtual   │   │   Generator   │   │
//! │  │           │   │  time)     │   │  (rand/seeded)│   │
//! │  └───────────┘   └────────────┘   └───────────────┘   │
//! │        ↓                                              │
//! │  ┌───────────────────────────────────────────────┐    │
//! │  │       Event Bus (updates + notifications)     │    │
//! │  └───────────────────────────────────────────────┘    │
//! │        ↓                                              │
//! │  presentation layer / notification sink (CLI)         │
//! └───────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod core;
pub mod sensors;

// Re-exports for convenience
pub use config::Config;
pub use core::{EventBus, Notification, ScanOrchestrator, ScanState, ScanUpdate, Scheduler};
pub use sensors::{ScanResult, ScanStatus, SensorKind};

/// PrivScan version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// PrivScan name
pub const NAME: &str = "PrivScan";
