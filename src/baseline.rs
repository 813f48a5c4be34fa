//! Population baselines for the five metrics.
//!
//! Each baseline is a heuristic (mean, spread) pair describing a "typical"
//! face; uniqueness is deviation from it. The values are display
//! calibration, not statistics. The table is an immutable value handed to
//! the scorer and formatter, so tests can substitute synthetic baselines.

use crate::metrics::MetricKey;

/// Reference distribution for one metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Baseline {
    pub mean: f32,
    pub spread: f32,
    pub label: &'static str,
}

impl Baseline {
    pub const fn new(mean: f32, spread: f32, label: &'static str) -> Self {
        Self {
            mean,
            spread,
            label,
        }
    }
}

/// The five per-metric baselines, keyed by [`MetricKey`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaselineTable {
    pub eye_distance: Baseline,
    pub mouth_width: Baseline,
    pub nose_length: Baseline,
    pub symmetry: Baseline,
    pub jaw_angle: Baseline,
}

impl BaselineTable {
    pub fn get(&self, key: MetricKey) -> &Baseline {
        match key {
            MetricKey::EyeDistance => &self.eye_distance,
            MetricKey::MouthWidth => &self.mouth_width,
            MetricKey::NoseLength => &self.nose_length,
            MetricKey::Symmetry => &self.symmetry,
            MetricKey::JawAngle => &self.jaw_angle,
        }
    }
}

impl Default for BaselineTable {
    fn default() -> Self {
        Self {
            eye_distance: Baseline::new(0.42, 0.05, "Eye distance"),
            mouth_width: Baseline::new(0.62, 0.08, "Mouth width"),
            nose_length: Baseline::new(0.28, 0.05, "Nose length"),
            symmetry: Baseline::new(0.88, 0.07, "Jaw symmetry"),
            jaw_angle: Baseline::new(108.0, 12.0, "Jaw angle"),
        }
    }
}
