// Copyright (c) 2026 bad-antics
// Licensed under the MIT License. See LICENSE file in the project root.
// https://github.com/bad-antics/privscan-rs

//! Finding generator - randomized scan outcomes with fixed detail text

use rand::prelude::*;

use super::{ScanResult, ScanStatus, SensorKind};

/// Source of scan outcomes
///
/// Production draws uniformly at random; tests substitute a scripted source
/// to pin results.
pub trait OutcomeSource: Send {
    /// Draw the status for the next completed scan
    fn next_status(&mut self) -> ScanStatus;
}

/// Uniform random outcome source backed by `StdRng`
pub struct RandomOutcomes {
    rng: StdRng,
}

impl RandomOutcomes {
    /// Entropy-seeded source
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic source for reproducible runs
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomOutcomes {
    fn default() -> Self {
        Self::new()
    }
}

impl OutcomeSource for RandomOutcomes {
    fn next_status(&mut self) -> ScanStatus {
        // Uniform over the three outcomes, no weighting
        ScanStatus::ALL[self.rng.gen_range(0..ScanStatus::ALL.len())]
    }
}

/// Fixed detail text for every (sensor, status) pair
pub fn details_for(sensor: SensorKind, status: ScanStatus) -> &'static str {
    match (sensor, status) {
        (SensorKind::Infrared, ScanStatus::Safe) => "No infrared light source detected.",
        (SensorKind::Infrared, ScanStatus::Suspicious) => {
            "Weak infrared light source detected. Location: front right corner."
        }
        (SensorKind::Infrared, ScanStatus::Danger) => {
            "Strong infrared light source detected! Location: front right corner."
        }
        (SensorKind::Wifi, ScanStatus::Safe) => "No suspicious Wi-Fi devices detected.",
        (SensorKind::Wifi, ScanStatus::Suspicious) => {
            "2 unidentified devices detected. MAC: 00:1A:2B:3C:4D:5E"
        }
        (SensorKind::Wifi, ScanStatus::Danger) => {
            "Known surveillance device MAC address detected! MAC: 00:1A:2B:3C:4D:5E"
        }
        (SensorKind::Magnetic, ScanStatus::Safe) => "No abnormal magnetic field detected.",
        (SensorKind::Magnetic, ScanStatus::Suspicious) => {
            "Slight magnetic anomaly detected. Location: near left wall."
        }
        (SensorKind::Magnetic, ScanStatus::Danger) => {
            "Strong magnetic field detected! Possible hidden device. Location: left wall."
        }
        (SensorKind::Audio, ScanStatus::Safe) => "No ultrasonic audio frequency detected.",
        (SensorKind::Audio, ScanStatus::Suspicious) => {
            "Suspicious audio frequency above 18kHz detected."
        }
        (SensorKind::Audio, ScanStatus::Danger) => {
            "Known listening device frequency in the 19-22kHz range detected!"
        }
        (SensorKind::Light, ScanStatus::Safe) => "No abnormal light variation detected.",
        (SensorKind::Light, ScanStatus::Suspicious) => {
            "Slight light variations detected. The cause may be natural."
        }
        (SensorKind::Light, ScanStatus::Danger) => {
            "Pronounced light variations detected! Possible hidden camera lens reflection."
        }
    }
}

/// Produces one `ScanResult` per completed sensor scan
pub struct FindingGenerator {
    source: Box<dyn OutcomeSource>,
}

impl FindingGenerator {
    /// Generator with uniform random outcomes
    pub fn new() -> Self {
        Self::with_source(Box::new(RandomOutcomes::new()))
    }

    /// Generator with reproducible outcomes
    pub fn seeded(seed: u64) -> Self {
        Self::with_source(Box::new(RandomOutcomes::seeded(seed)))
    }

    /// Generator drawing from a caller-supplied source
    pub fn with_source(source: Box<dyn OutcomeSource>) -> Self {
        Self { source }
    }

    /// Draw a status and attach the matching detail text
    pub fn generate(&mut self, sensor: SensorKind) -> ScanResult {
        let status = self.source.next_status();
        ScanResult::new(status, details_for(sensor, status))
    }
}

impl Default for FindingGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedOutcome(ScanStatus);

    impl OutcomeSource for FixedOutcome {
        fn next_status(&mut self) -> ScanStatus {
            self.0
        }
    }

    #[test]
    fn test_all_fifteen_details_are_distinct_and_nonempty() {
        let mut seen = std::collections::HashSet::new();
        for sensor in SensorKind::ALL {
            for status in ScanStatus::ALL {
                let text = details_for(sensor, status);
                assert!(!text.is_empty(), "{sensor}/{status} has empty details");
                assert!(seen.insert(text), "{sensor}/{status} duplicates another entry");
            }
        }
        assert_eq!(seen.len(), 15);
    }

    #[test]
    fn test_generated_details_match_table() {
        for status in ScanStatus::ALL {
            let mut gen = FindingGenerator::with_source(Box::new(FixedOutcome(status)));
            for sensor in SensorKind::ALL {
                let result = gen.generate(sensor);
                assert_eq!(result.status, status);
                assert_eq!(result.details, details_for(sensor, status));
            }
        }
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let mut a = RandomOutcomes::seeded(42);
        let mut b = RandomOutcomes::seeded(42);
        for _ in 0..32 {
            assert_eq!(a.next_status(), b.next_status());
        }
    }

    #[test]
    fn test_random_source_covers_all_statuses() {
        let mut source = RandomOutcomes::seeded(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..256 {
            seen.insert(source.next_status());
        }
        assert_eq!(seen.len(), 3);
    }
}
