//! Presentation formatting: labeled display rows and the radar vector.
//!
//! This is the last step before the numbers leave the library. Rows feed a
//! list renderer; the radar vector feeds a five-axis 0-100 chart.

use serde::Serialize;

use crate::baseline::BaselineTable;
use crate::metrics::{FaceMetrics, MetricKey};
use crate::score::uniqueness_score;

/// Uniqueness percentage at or above which a row is visually emphasized.
/// A display threshold only, not a statistical claim.
pub const HIGH_UNIQUENESS_THRESHOLD: f32 = 66.0;

/// One formatted display row.
#[derive(Debug, Clone, Serialize)]
pub struct MetricRow {
    pub label: &'static str,
    pub value: String,
    pub uniqueness_percent: f32,
    pub is_high_uniqueness: bool,
}

/// Format every metric as a display row, in canonical metric order.
///
/// Ratio metrics render with 3 decimal places; the jaw angle with 1 decimal
/// place and a degree suffix.
pub fn rows(metrics: &FaceMetrics, baselines: &BaselineTable) -> Vec<MetricRow> {
    MetricKey::ALL
        .iter()
        .map(|&key| {
            let value = metrics.get(key);
            let baseline = baselines.get(key);
            let percent = uniqueness_score(value, baseline);
            MetricRow {
                label: baseline.label,
                value: format_value(key, value),
                uniqueness_percent: percent,
                is_high_uniqueness: percent >= HIGH_UNIQUENESS_THRESHOLD,
            }
        })
        .collect()
}

/// Build the radar chart vector: ordered axis labels and integer
/// uniqueness values in [0, 100], rounded to nearest.
pub fn radar(
    metrics: &FaceMetrics,
    baselines: &BaselineTable,
) -> (Vec<&'static str>, Vec<u8>) {
    let mut labels = Vec::with_capacity(MetricKey::ALL.len());
    let mut values = Vec::with_capacity(MetricKey::ALL.len());
    for &key in MetricKey::ALL.iter() {
        let baseline = baselines.get(key);
        labels.push(baseline.label);
        values.push(uniqueness_score(metrics.get(key), baseline).round() as u8);
    }
    (labels, values)
}

fn format_value(key: MetricKey, value: f32) -> String {
    if key.is_ratio() {
        format!("{value:.3}")
    } else {
        format!("{value:.1}°")
    }
}
