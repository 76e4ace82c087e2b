//! Sensor catalog - the five simulated detection categories

mod findings;

pub use findings::{FindingGenerator, OutcomeSource, RandomOutcomes};

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Detection categories covered by a privacy sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorKind {
    /// Passive IR light source detection
    Infrared,
    /// 2.4/5GHz device discovery
    Wifi,
    /// Magnetic field probing
    Magnetic,
    /// Ultrasonic audio analysis
    Audio,
    /// Ambient light monitoring
    Light,
}

impl SensorKind {
    /// Fixed sweep order for a full scan
    pub const ALL: [SensorKind; 5] = [
        SensorKind::Infrared,
        SensorKind::Wifi,
        SensorKind::Magnetic,
        SensorKind::Audio,
        SensorKind::Light,
    ];

    /// Short identifier used in logs and config keys
    pub fn label(&self) -> &'static str {
        match self {
            SensorKind::Infrared => "infrared",
            SensorKind::Wifi => "wifi",
            SensorKind::Magnetic => "magnetic",
            SensorKind::Audio => "audio",
            SensorKind::Light => "light",
        }
    }

    /// User-facing scan title
    pub fn title(&self) -> &'static str {
        match self {
            SensorKind::Infrared => "IR Camera Scan",
            SensorKind::Wifi => "Wi-Fi Network Scan",
            SensorKind::Magnetic => "Magnetic Field Scan",
            SensorKind::Audio => "Audio Frequency Analysis",
            SensorKind::Light => "Ambient Light Monitoring",
        }
    }

    /// Parse a label back into a kind
    pub fn from_label(s: &str) -> Option<SensorKind> {
        Self::ALL.iter().copied().find(|k| k.label() == s)
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Qualitative outcome of a completed scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanStatus {
    /// Nothing detected
    Safe,
    /// Weak or ambiguous signal
    Suspicious,
    /// Strong signal consistent with a surveillance device
    Danger,
}

impl ScanStatus {
    /// The three possible outcomes, in drawing order
    pub const ALL: [ScanStatus; 3] =
        [ScanStatus::Safe, ScanStatus::Suspicious, ScanStatus::Danger];

    /// User-facing status label
    pub fn label(&self) -> &'static str {
        match self {
            ScanStatus::Safe => "Safe",
            ScanStatus::Suspicious => "Suspicious",
            ScanStatus::Danger => "Danger!",
        }
    }
}

impl fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one completed sensor scan
///
/// Immutable once produced; the next scan of the same sensor replaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    /// Qualitative outcome
    pub status: ScanStatus,
    /// Fixed descriptive text for the (sensor, status) pair
    pub details: String,
    /// When the scan resolved
    pub completed_at: DateTime<Utc>,
}

impl ScanResult {
    /// Build a result stamped with the current time
    pub fn new(status: ScanStatus, details: impl Into<String>) -> Self {
        Self {
            status,
            details: details.into(),
            completed_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_order_is_fixed() {
        let labels: Vec<&str> = SensorKind::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(labels, vec!["infrared", "wifi", "magnetic", "audio", "light"]);
    }

    #[test]
    fn test_label_round_trip() {
        for kind in SensorKind::ALL {
            assert_eq!(SensorKind::from_label(kind.label()), Some(kind));
        }
        assert_eq!(SensorKind::from_label("thermal"), None);
    }

    #[test]
    fn test_serde_uses_labels() {
        for kind in SensorKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.label()));
        }
    }
}
