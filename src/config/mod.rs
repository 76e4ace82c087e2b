// Copyright (c) 2026 bad-antics
// Licensed under the MIT License. See LICENSE file in the project root.
// https://github.com/bad-antics/privscan-rs

//! Configuration module

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::sensors::SensorKind;

/// Configuration validation failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A delay of zero would fire events before the state mutation settles
    #[error("{field} must be greater than zero")]
    ZeroDelay {
        /// Offending timing field
        field: &'static str,
    },
    /// A sensor would resolve before it ever became active
    #[error("completion offset for {sensor} ({completion_ms}ms) falls before its activation at {activation_ms}ms")]
    CompletionBeforeActivation {
        /// Offending sensor
        sensor: SensorKind,
        /// Configured completion offset
        completion_ms: u64,
        /// Implied activation offset
        activation_ms: u64,
    },
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Log level
    pub log_level: String,

    /// Scan timing table
    pub timing: TimingConfig,

    /// Notification display settings
    pub notifications: NotificationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            timing: TimingConfig::default(),
            notifications: NotificationConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Load or create default configuration
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            let config = Self::default();

            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }

            config.save(path)?;
            Ok(config)
        }
    }

    /// Get configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("privscan"))
            .unwrap_or_else(|| PathBuf::from("./config"))
    }

    /// Get default configuration path
    pub fn default_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Check timing invariants
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        self.timing.validate()
    }
}

/// Scan timing table, all offsets relative to scan invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Gap between successive activations in a full sweep
    pub activation_stagger_ms: u64,

    /// Completion delay for a single-sensor retry
    pub single_scan_ms: u64,

    /// Per-sensor completion offsets during a full sweep
    pub completion_ms: CompletionOffsets,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            activation_stagger_ms: 500,
            single_scan_ms: 3000,
            completion_ms: CompletionOffsets::default(),
        }
    }
}

impl TimingConfig {
    /// Activation stagger as a duration
    pub fn activation_stagger(&self) -> Duration {
        Duration::from_millis(self.activation_stagger_ms)
    }

    /// Single-scan completion delay as a duration
    pub fn single_scan(&self) -> Duration {
        Duration::from_millis(self.single_scan_ms)
    }

    /// Full-sweep completion offset for one sensor
    pub fn completion(&self, sensor: SensorKind) -> Duration {
        Duration::from_millis(self.completion_ms.get(sensor))
    }

    fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.activation_stagger_ms == 0 {
            return Err(ConfigError::ZeroDelay {
                field: "activation_stagger_ms",
            });
        }
        if self.single_scan_ms == 0 {
            return Err(ConfigError::ZeroDelay {
                field: "single_scan_ms",
            });
        }

        for (i, sensor) in SensorKind::ALL.into_iter().enumerate() {
            let activation_ms = self.activation_stagger_ms * (i as u64 + 1);
            let completion_ms = self.completion_ms.get(sensor);
            if completion_ms <= activation_ms {
                return Err(ConfigError::CompletionBeforeActivation {
                    sensor,
                    completion_ms,
                    activation_ms,
                });
            }
        }

        Ok(())
    }
}

/// Full-sweep completion offsets per sensor, in milliseconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionOffsets {
    /// Infrared completion offset
    pub infrared: u64,
    /// Wi-Fi completion offset
    pub wifi: u64,
    /// Magnetic completion offset
    pub magnetic: u64,
    /// Audio completion offset
    pub audio: u64,
    /// Light completion offset; the latest, so it ends the sweep
    pub light: u64,
}

impl Default for CompletionOffsets {
    fn default() -> Self {
        Self {
            infrared: 3500,
            wifi: 5000,
            magnetic: 6000,
            audio: 7000,
            light: 8000,
        }
    }
}

impl CompletionOffsets {
    /// Offset for one sensor
    pub fn get(&self, sensor: SensorKind) -> u64 {
        match sensor {
            SensorKind::Infrared => self.infrared,
            SensorKind::Wifi => self.wifi,
            SensorKind::Magnetic => self.magnetic,
            SensorKind::Audio => self.audio,
            SensorKind::Light => self.light,
        }
    }
}

/// Notification display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Display time for scan-started messages
    pub start_display_ms: u64,

    /// Display time for completion messages
    pub result_display_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            start_display_ms: 2000,
            result_display_ms: 4000,
        }
    }
}

impl NotificationConfig {
    /// Scan-started display time as a duration
    pub fn start_display(&self) -> Duration {
        Duration::from_millis(self.start_display_ms)
    }

    /// Completion display time as a duration
    pub fn result_display(&self) -> Duration {
        Duration::from_millis(self.result_display_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn test_default_timing_matches_sweep_table() {
        let timing = TimingConfig::default();
        assert_eq!(timing.completion(SensorKind::Infrared), Duration::from_millis(3500));
        assert_eq!(timing.completion(SensorKind::Wifi), Duration::from_millis(5000));
        assert_eq!(timing.completion(SensorKind::Magnetic), Duration::from_millis(6000));
        assert_eq!(timing.completion(SensorKind::Audio), Duration::from_millis(7000));
        assert_eq!(timing.completion(SensorKind::Light), Duration::from_millis(8000));
        assert_eq!(timing.activation_stagger(), Duration::from_millis(500));
        assert_eq!(timing.single_scan(), Duration::from_millis(3000));
    }

    #[test]
    fn test_completion_before_activation_is_rejected() {
        let mut config = Config::default();
        // Light activates at 2500ms; a 2000ms completion can never fire after it
        config.timing.completion_ms.light = 2000;
        assert_eq!(
            config.validate(),
            Err(ConfigError::CompletionBeforeActivation {
                sensor: SensorKind::Light,
                completion_ms: 2000,
                activation_ms: 2500,
            })
        );
    }

    #[test]
    fn test_zero_delay_is_rejected() {
        let mut config = Config::default();
        config.timing.single_scan_ms = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroDelay {
                field: "single_scan_ms"
            })
        );
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.timing.completion_ms.audio, config.timing.completion_ms.audio);
        assert_eq!(parsed.notifications.start_display_ms, config.notifications.start_display_ms);
        assert_eq!(parsed.log_level, config.log_level);
    }
}
