// Copyright (c) 2026 bad-antics
// Licensed under the MIT License. See LICENSE file in the project root.
// https://github.com/bad-antics/privscan-rs

//! Scan orchestrator - sequences simulated sensor scans
//!
//! Per session the machine walks `idle -> running (scheduled) -> running
//! (completing one by one) -> idle`. There is no error state and no
//! cancellation; the `running` guard is the only back-pressure.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use super::{EventBus, ScanMode, ScanSession, ScanState, ScanUpdate, Scheduler};
use crate::config::Config;
use crate::sensors::{FindingGenerator, OutcomeSource, SensorKind};

/// Deferred state mutations fired by the scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanAction {
    /// Sensor enters its scanning phase
    Activate(SensorKind),
    /// Sensor resolves with a generated result
    Complete(SensorKind),
}

/// Owns the scan state and the event timeline
///
/// Single logical writer: every mutation flows through `start_full_scan`,
/// `start_single_scan`, or `advance`.
pub struct ScanOrchestrator {
    config: Arc<Config>,
    bus: Arc<EventBus>,
    state: ScanState,
    scheduler: Scheduler<ScanAction>,
    findings: FindingGenerator,
}

impl ScanOrchestrator {
    /// Orchestrator with entropy-seeded outcomes
    pub fn new(config: Arc<Config>, bus: Arc<EventBus>) -> Self {
        Self::with_findings(config, bus, FindingGenerator::new())
    }

    /// Orchestrator with reproducible outcomes
    pub fn seeded(config: Arc<Config>, bus: Arc<EventBus>, seed: u64) -> Self {
        Self::with_findings(config, bus, FindingGenerator::seeded(seed))
    }

    /// Orchestrator with a caller-supplied outcome source
    pub fn with_outcomes(
        config: Arc<Config>,
        bus: Arc<EventBus>,
        source: Box<dyn OutcomeSource>,
    ) -> Self {
        Self::with_findings(config, bus, FindingGenerator::with_source(source))
    }

    fn with_findings(config: Arc<Config>, bus: Arc<EventBus>, findings: FindingGenerator) -> Self {
        Self {
            config,
            bus,
            state: ScanState::default(),
            scheduler: Scheduler::new(),
            findings,
        }
    }

    /// Current scan state
    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// True while a session is unresolved
    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Time until the next scheduled event, if any
    pub fn next_due(&self) -> Option<Duration> {
        self.scheduler.next_due()
    }

    /// Start a staggered sweep of all five sensors
    ///
    /// No-op while a session is already running. Clears every prior result,
    /// then schedules each sensor's activation at increasing offsets and
    /// its completion at the sensor-specific offset.
    pub fn start_full_scan(&mut self) -> bool {
        if self.state.running {
            debug!("full scan requested while running, ignored");
            return false;
        }

        let session = ScanSession::begin(ScanMode::Full);
        info!(session = %session.id, "full scan started");

        self.state.running = true;
        self.state.active.clear();
        self.state.results.clear();
        self.state.session = Some(session.clone());

        self.bus
            .publish_update(ScanUpdate::SweepStarted { session: session.id });
        self.bus.notify(
            "Scan started",
            Some("Activating all sensors..."),
            self.config.notifications.start_display(),
        );

        let timing = &self.config.timing;
        for (i, sensor) in SensorKind::ALL.into_iter().enumerate() {
            let stagger = timing.activation_stagger() * (i as u32 + 1);
            self.scheduler.schedule(stagger, ScanAction::Activate(sensor));
            self.scheduler
                .schedule(timing.completion(sensor), ScanAction::Complete(sensor));
        }

        true
    }

    /// Retry one sensor on its own
    ///
    /// No-op while a session is already running. The sensor becomes active
    /// immediately; only its own prior result is cleared.
    pub fn start_single_scan(&mut self, sensor: SensorKind) -> bool {
        if self.state.running {
            debug!(%sensor, "single scan requested while running, ignored");
            return false;
        }

        let session = ScanSession::begin(ScanMode::Single(sensor));
        info!(session = %session.id, %sensor, "single scan started");

        self.state.running = true;
        self.state.active.insert(sensor);
        self.state.results.remove(&sensor);
        self.state.session = Some(session.clone());

        self.bus.publish_update(ScanUpdate::SingleStarted {
            session: session.id,
            sensor,
        });
        self.bus.notify(
            &format!("{} started", sensor.title()),
            None,
            self.config.notifications.start_display(),
        );

        self.scheduler
            .schedule(self.config.timing.single_scan(), ScanAction::Complete(sensor));

        true
    }

    /// Move the virtual clock forward and apply every event that came due
    pub fn advance(&mut self, step: Duration) {
        for action in self.scheduler.advance(step) {
            self.apply(action);
        }
    }

    fn apply(&mut self, action: ScanAction) {
        match action {
            ScanAction::Activate(sensor) => {
                debug!(%sensor, "sensor activated");
                self.state.active.insert(sensor);
                self.bus.publish_update(ScanUpdate::SensorActivated(sensor));
            }
            ScanAction::Complete(sensor) => {
                self.state.active.remove(&sensor);
                let result = self.findings.generate(sensor);
                debug!(%sensor, status = %result.status, "sensor completed");
                self.state.results.insert(sensor, result.clone());
                self.bus
                    .publish_update(ScanUpdate::SensorCompleted { sensor, result });
                self.finish_if_resolved();
            }
        }
    }

    // A session resolves once nothing is active and nothing is scheduled.
    // For a full sweep that is the light completion, the latest offset.
    fn finish_if_resolved(&mut self) {
        if !self.state.active.is_empty() || !self.scheduler.is_idle() {
            return;
        }

        let Some(session) = self.state.session.take() else {
            return;
        };

        self.state.running = false;
        info!(session = %session.id, "scan session finished");

        match session.mode {
            ScanMode::Full => self.bus.notify_success(
                "Scan complete",
                Some("All sensor results ready."),
                self.config.notifications.result_display(),
            ),
            ScanMode::Single(sensor) => self.bus.notify_success(
                &format!("{} complete", sensor.title()),
                None,
                self.config.notifications.result_display(),
            ),
        }

        self.bus
            .publish_update(ScanUpdate::SessionFinished { session: session.id });
    }
}
