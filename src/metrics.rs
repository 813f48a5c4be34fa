//! Facial proportion metrics derived from landmark geometry.
//!
//! Five values are measured per face: three width/height ratios, a jaw
//! symmetry score, and the jaw opening angle at the chin. All of them are
//! pure functions of the landmark set and the detection box, computed fresh
//! per analysis.

use serde::Serialize;

use crate::landmarks::LandmarkSet;
use crate::types::{DetectionBox, Point};

/// Identifies one of the five measured metrics.
///
/// The declaration order here is the canonical display order and matches
/// the baseline table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MetricKey {
    EyeDistance,
    MouthWidth,
    NoseLength,
    Symmetry,
    JawAngle,
}

impl MetricKey {
    /// All metric keys in canonical order.
    pub const ALL: [MetricKey; 5] = [
        MetricKey::EyeDistance,
        MetricKey::MouthWidth,
        MetricKey::NoseLength,
        MetricKey::Symmetry,
        MetricKey::JawAngle,
    ];

    /// Whether this metric is a dimensionless ratio (as opposed to an
    /// angle in degrees). Drives display formatting.
    pub fn is_ratio(self) -> bool {
        !matches!(self, MetricKey::JawAngle)
    }
}

/// The five proportion metrics measured from one face.
///
/// Ratios are normalized by face width (cheek-to-cheek distance) or by the
/// detection box height; symmetry is in [0, 1]; the jaw angle is in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FaceMetrics {
    /// Distance between the eye centers over face width.
    pub eye_distance_ratio: f32,

    /// Mouth corner-to-corner width over face width.
    pub mouth_width_ratio: f32,

    /// Nose ridge length over detection box height.
    pub nose_length_ratio: f32,

    /// Mirror symmetry of the jaw outline, 1.0 = perfectly symmetric.
    pub symmetry: f32,

    /// Angle at the chin between rays to the two cheek points, in degrees.
    pub jaw_angle_deg: f32,
}

impl FaceMetrics {
    /// Measure all five metrics from a validated landmark set and the
    /// detector's bounding box.
    ///
    /// Degenerate geometry (zero face width or box height) is absorbed by
    /// [`safe_ratio`]; a fully collapsed jaw yields a non-finite angle,
    /// which the scorer downstream treats as "not unique".
    pub fn measure(landmarks: &LandmarkSet, face_box: &DetectionBox) -> Self {
        let eye_l = landmarks.left_eye_center();
        let eye_r = landmarks.right_eye_center();
        let eye_distance = eye_l.distance(&eye_r);

        let face_width = landmarks.left_cheek().distance(&landmarks.right_cheek());
        let face_height = face_box.height;

        let mouth_width = landmarks
            .mouth_left_corner()
            .distance(&landmarks.mouth_right_corner());
        let nose_length = landmarks.nose_top().distance(&landmarks.nose_bottom());

        let mid_x = (eye_l.x + eye_r.x) / 2.0;

        Self {
            eye_distance_ratio: safe_ratio(eye_distance, face_width),
            mouth_width_ratio: safe_ratio(mouth_width, face_width),
            nose_length_ratio: safe_ratio(nose_length, face_height),
            symmetry: jaw_symmetry(landmarks.jaw(), mid_x, face_width),
            jaw_angle_deg: angle_deg(
                landmarks.chin(),
                landmarks.left_cheek(),
                landmarks.right_cheek(),
            ),
        }
    }

    /// Look up a metric value by key.
    pub fn get(&self, key: MetricKey) -> f32 {
        match key {
            MetricKey::EyeDistance => self.eye_distance_ratio,
            MetricKey::MouthWidth => self.mouth_width_ratio,
            MetricKey::NoseLength => self.nose_length_ratio,
            MetricKey::Symmetry => self.symmetry,
            MetricKey::JawAngle => self.jaw_angle_deg,
        }
    }
}

/// Divide with a guarded denominator: an exactly-zero denominator is
/// replaced by 1, so degenerate geometry yields a large-but-finite ratio
/// instead of infinity. All normalized metrics share this one rule.
pub fn safe_ratio(numerator: f32, denominator: f32) -> f32 {
    let denominator = if denominator == 0.0 { 1.0 } else { denominator };
    numerator / denominator
}

/// Angle in degrees at `vertex` between the rays toward `a` and `b`.
///
/// The cosine is clamped to [-1, 1] before `acos` so float error on nearly
/// collinear rays cannot leave the domain. A zero-length ray produces NaN,
/// which callers absorb.
fn angle_deg(vertex: Point, a: Point, b: Point) -> f32 {
    let u = a - vertex;
    let v = b - vertex;
    let dot = u.x * v.x + u.y * v.y;
    let norms = (u.x * u.x + u.y * u.y).sqrt() * (v.x * v.x + v.y * v.y).sqrt();
    (dot / norms).clamp(-1.0, 1.0).acos().to_degrees()
}

/// Mirror symmetry of the 17-point jaw outline in [0, 1].
///
/// Each of jaw points 0..=8 is reflected across the vertical midline at
/// `mid_x` and compared to its opposite point 16-i. Pair distances are
/// normalized by half the face width and folded into a per-pair score of
/// `1 - min(1, d)`; the result is the average over the nine pairs.
fn jaw_symmetry(jaw: &[Point], mid_x: f32, face_width: f32) -> f32 {
    debug_assert_eq!(jaw.len(), 17);

    let half_width = face_width * 0.5;
    let mut total = 0.0;
    for i in 0..=8 {
        let mirrored = jaw[i].mirror_x(mid_x);
        let normalized = safe_ratio(mirrored.distance(&jaw[16 - i]), half_width);
        total += 1.0 - normalized.min(1.0);
    }
    (total / 9.0).clamp(0.0, 1.0)
}
