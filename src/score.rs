//! Uniqueness scoring: bounded deviation from a baseline.

use serde::Serialize;

use crate::baseline::{Baseline, BaselineTable};
use crate::metrics::{FaceMetrics, MetricKey};

/// Floor for the baseline spread, so a zero-spread baseline cannot divide
/// by zero.
const SPREAD_EPSILON: f32 = 1e-6;

/// Map a metric value to a uniqueness percentage in [0, 100].
///
/// The absolute z-score against the baseline is squashed through `tanh`:
/// a value at the mean scores 0, and large deviations saturate toward 100
/// instead of growing without bound. Non-finite values (degenerate
/// geometry) score 0, keeping the result always renderable.
pub fn uniqueness_score(value: f32, baseline: &Baseline) -> f32 {
    if !value.is_finite() {
        return 0.0;
    }
    let z = (value - baseline.mean).abs() / baseline.spread.max(SPREAD_EPSILON);
    (z.tanh() * 100.0).clamp(0.0, 100.0)
}

/// Per-metric uniqueness percentages for one face.
///
/// Derived deterministically from a [`FaceMetrics`] and a baseline table;
/// recomputed per analysis, never cached across images.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UniquenessScores {
    pub eye_distance: f32,
    pub mouth_width: f32,
    pub nose_length: f32,
    pub symmetry: f32,
    pub jaw_angle: f32,
}

impl UniquenessScores {
    /// Score every metric against its baseline.
    pub fn compute(metrics: &FaceMetrics, baselines: &BaselineTable) -> Self {
        let score = |key| uniqueness_score(metrics.get(key), baselines.get(key));
        Self {
            eye_distance: score(MetricKey::EyeDistance),
            mouth_width: score(MetricKey::MouthWidth),
            nose_length: score(MetricKey::NoseLength),
            symmetry: score(MetricKey::Symmetry),
            jaw_angle: score(MetricKey::JawAngle),
        }
    }

    /// Look up a score by metric key.
    pub fn get(&self, key: MetricKey) -> f32 {
        match key {
            MetricKey::EyeDistance => self.eye_distance,
            MetricKey::MouthWidth => self.mouth_width,
            MetricKey::NoseLength => self.nose_length,
            MetricKey::Symmetry => self.symmetry,
            MetricKey::JawAngle => self.jaw_angle,
        }
    }
}
