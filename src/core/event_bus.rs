// Copyright (c) 2026 bad-antics
// Licensed under the MIT License. See LICENSE file in the project root.
// https://github.com/bad-antics/privscan-rs

//! Event bus - state updates and user notifications

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::sensors::{ScanResult, SensorKind};

/// State-change events published for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ScanUpdate {
    /// A full sweep began
    SweepStarted {
        /// Scan session id
        session: Uuid,
    },
    /// A single-sensor retry began
    SingleStarted {
        /// Scan session id
        session: Uuid,
        /// The sensor being rescanned
        sensor: SensorKind,
    },
    /// A sensor entered its scanning phase
    SensorActivated(SensorKind),
    /// A sensor resolved with a result
    SensorCompleted {
        /// The sensor that resolved
        sensor: SensorKind,
        /// Its generated result
        result: ScanResult,
    },
    /// The session fully resolved; `running` is false again
    SessionFinished {
        /// Scan session id
        session: Uuid,
    },
}

/// Notification display style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    /// Neutral progress message
    Info,
    /// Completion message
    Success,
}

/// Short user-facing message, fire-and-forget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Message title
    pub title: String,
    /// Optional longer description
    pub description: Option<String>,
    /// How long the sink should display it
    pub duration: Duration,
    /// Display style
    pub kind: NotificationKind,
    /// When it was emitted
    pub timestamp: DateTime<Utc>,
}

/// Central pub/sub bus for scan updates and notifications
///
/// Delivery is best-effort: publishing with no subscribers is fine, and no
/// acknowledgment flows back.
pub struct EventBus {
    update_tx: broadcast::Sender<ScanUpdate>,
    notify_tx: broadcast::Sender<Notification>,
    event_counter: std::sync::atomic::AtomicU64,
}

impl EventBus {
    /// Bus with bounded per-subscriber backlog
    pub fn new(capacity: usize) -> Self {
        let (update_tx, _) = broadcast::channel(capacity);
        let (notify_tx, _) = broadcast::channel(capacity);

        Self {
            update_tx,
            notify_tx,
            event_counter: std::sync::atomic::AtomicU64::new(0),
        }
    }

    /// Publish a state-change event
    pub fn publish_update(&self, update: ScanUpdate) {
        self.event_counter
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        let _ = self.update_tx.send(update);
    }

    /// Publish a neutral notification
    pub fn notify(&self, title: &str, description: Option<&str>, duration: Duration) {
        self.publish_notification(title, description, duration, NotificationKind::Info);
    }

    /// Publish a completion notification
    pub fn notify_success(&self, title: &str, description: Option<&str>, duration: Duration) {
        self.publish_notification(title, description, duration, NotificationKind::Success);
    }

    fn publish_notification(
        &self,
        title: &str,
        description: Option<&str>,
        duration: Duration,
        kind: NotificationKind,
    ) {
        self.event_counter
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        let _ = self.notify_tx.send(Notification {
            title: title.to_string(),
            description: description.map(str::to_string),
            duration,
            kind,
            timestamp: Utc::now(),
        });
    }

    /// Subscribe to state-change events
    pub fn subscribe_updates(&self) -> broadcast::Receiver<ScanUpdate> {
        self.update_tx.subscribe()
    }

    /// Subscribe to notifications
    pub fn subscribe_notifications(&self) -> broadcast::Receiver<Notification> {
        self.notify_tx.subscribe()
    }

    /// Total events published since creation
    pub fn events_published(&self) -> u64 {
        self.event_counter
            .load(std::sync::atomic::Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_without_subscribers_is_fine() {
        let bus = EventBus::new(16);
        bus.publish_update(ScanUpdate::SensorActivated(SensorKind::Wifi));
        bus.notify("Scan started", None, Duration::from_millis(2000));
        assert_eq!(bus.events_published(), 2);
    }

    #[test]
    fn test_subscribers_receive_notifications() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe_notifications();
        bus.notify_success("Scan complete", Some("All sensor results ready."), Duration::from_millis(4000));

        let msg = rx.try_recv().unwrap();
        assert_eq!(msg.title, "Scan complete");
        assert_eq!(msg.kind, NotificationKind::Success);
        assert_eq!(msg.description.as_deref(), Some("All sensor results ready."));
    }
}
