//! Core orchestration - scan state machine and event sequencing

mod event_bus;
mod orchestrator;
mod scheduler;

pub use event_bus::{EventBus, Notification, NotificationKind, ScanUpdate};
pub use orchestrator::{ScanAction, ScanOrchestrator};
pub use scheduler::Scheduler;

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::sensors::{ScanResult, SensorKind};

/// What kind of scan session is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanMode {
    /// All five sensors, staggered
    Full,
    /// One sensor retried on its own
    Single(SensorKind),
}

/// One scan session, full sweep or single retry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSession {
    /// Session id
    pub id: Uuid,
    /// Sweep or single-sensor
    pub mode: ScanMode,
    /// When the session was triggered
    pub started_at: DateTime<Utc>,
}

impl ScanSession {
    fn begin(mode: ScanMode) -> Self {
        Self {
            id: Uuid::new_v4(),
            mode,
            started_at: Utc::now(),
        }
    }
}

/// Process-wide scan state, one logical writer
///
/// `running` is true exactly while a session is unresolved: the active set
/// is non-empty or completions are still scheduled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanState {
    /// True while any scan session is in flight
    pub running: bool,
    /// Sensors between their activation and completion events
    pub active: BTreeSet<SensorKind>,
    /// Last known result per sensor; absent = never scanned or reset
    pub results: BTreeMap<SensorKind, ScanResult>,
    /// The in-flight session, if any
    pub session: Option<ScanSession>,
}

impl Default for ScanState {
    fn default() -> Self {
        Self {
            running: false,
            active: BTreeSet::new(),
            results: BTreeMap::new(),
            session: None,
        }
    }
}

impl ScanState {
    /// True once every sensor carries a result
    pub fn all_scanned(&self) -> bool {
        SensorKind::ALL.iter().all(|k| self.results.contains_key(k))
    }
}
