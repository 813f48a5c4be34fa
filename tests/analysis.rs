//! End-to-end tests running the full landmark -> metrics -> scores -> report
//! pipeline on synthetic faces.

use face_uniqueness::{
    report, uniqueness_score, Baseline, BaselineTable, DetectionBox, FaceMetrics, LandmarkSet,
    MetricKey, Point, UniquenessScores,
};

/// Jaw arc mirror-symmetric about x = 100: endpoints at (20, 70),
/// chin apex at (100, 150).
fn symmetric_jaw() -> Vec<Point> {
    (0..17)
        .map(|i| {
            let offset = i as f32 - 8.0;
            Point::new(100.0 + offset * 10.0, 150.0 - offset.abs() * 10.0)
        })
        .collect()
}

/// Mouth outline with corners at (90, 120) and (110, 120).
fn mouth_outline() -> Vec<Point> {
    (0..7)
        .map(|i| Point::new(90.0 + i as f32 * (20.0 / 6.0), 120.0))
        .collect()
}

fn symmetric_face() -> LandmarkSet {
    LandmarkSet::new(
        vec![Point::new(80.0, 50.0)],
        vec![Point::new(120.0, 50.0)],
        mouth_outline(),
        vec![Point::new(100.0, 60.0), Point::new(100.0, 100.0)],
        symmetric_jaw(),
    )
    .unwrap()
}

#[test]
fn symmetric_face_measures_deterministically() {
    let landmarks = symmetric_face();
    let face_box = DetectionBox::new(20.0, 30.0, 160.0, 100.0);

    let metrics = FaceMetrics::measure(&landmarks, &face_box);

    // Perfectly mirrored jaw
    assert_eq!(metrics.symmetry, 1.0);

    // Face width is jaw[4] (60, 110) to jaw[12] (140, 110) = 80
    // Eyes at (80, 50) and (120, 50): distance 40
    assert!((metrics.eye_distance_ratio - 0.5).abs() < 1e-6);

    // Mouth corners 20 apart
    assert!((metrics.mouth_width_ratio - 0.25).abs() < 1e-6);

    // Nose ridge 40 long over box height 100
    assert!((metrics.nose_length_ratio - 0.4).abs() < 1e-6);

    // Chin (100, 150) to cheeks (60, 110) and (140, 110): right angle
    assert!((metrics.jaw_angle_deg - 90.0).abs() < 1e-3);
}

#[test]
fn ratios_are_non_negative_for_valid_geometry() {
    let landmarks = symmetric_face();
    let face_box = DetectionBox::new(20.0, 30.0, 160.0, 100.0);
    let metrics = FaceMetrics::measure(&landmarks, &face_box);

    assert!(metrics.eye_distance_ratio >= 0.0);
    assert!(metrics.mouth_width_ratio >= 0.0);
    assert!(metrics.nose_length_ratio >= 0.0);
    assert!((0.0..=1.0).contains(&metrics.symmetry));
}

#[test]
fn two_spread_deviation_scores_tanh_two() {
    let baseline = Baseline::new(0.42, 0.05, "Eye distance");
    let score = uniqueness_score(0.42 + 2.0 * 0.05, &baseline);
    assert!((score - 96.4).abs() < 0.1);
}

#[test]
fn collapsed_jaw_width_is_absorbed() {
    // Every jaw point coincides, so face width is 0 and the chin angle is
    // undefined. Nothing may panic and ratios must stay finite.
    let jaw = vec![Point::new(100.0, 100.0); 17];
    let landmarks = LandmarkSet::new(
        vec![Point::new(80.0, 50.0)],
        vec![Point::new(120.0, 50.0)],
        mouth_outline(),
        vec![Point::new(100.0, 60.0), Point::new(100.0, 100.0)],
        jaw,
    )
    .unwrap();
    let face_box = DetectionBox::new(0.0, 0.0, 200.0, 0.0);

    let metrics = FaceMetrics::measure(&landmarks, &face_box);

    // Normalizers fall back to 1: ratios equal the raw distances
    assert!((metrics.eye_distance_ratio - 40.0).abs() < 1e-6);
    assert!((metrics.mouth_width_ratio - 20.0).abs() < 1e-6);
    assert!((metrics.nose_length_ratio - 40.0).abs() < 1e-6);
    assert!((0.0..=1.0).contains(&metrics.symmetry));

    // The undefined angle must still score, as 0
    let scores = UniquenessScores::compute(&metrics, &BaselineTable::default());
    assert_eq!(scores.jaw_angle, 0.0);
    for key in MetricKey::ALL {
        let s = scores.get(key);
        assert!((0.0..=100.0).contains(&s));
    }
}

#[test]
fn full_pipeline_produces_renderable_report() {
    let landmarks = symmetric_face();
    let face_box = DetectionBox::new(20.0, 30.0, 160.0, 100.0);
    let baselines = BaselineTable::default();

    let metrics = FaceMetrics::measure(&landmarks, &face_box);
    let rows = report::rows(&metrics, &baselines);
    let (labels, values) = report::radar(&metrics, &baselines);

    assert_eq!(rows.len(), 5);
    assert_eq!(labels.len(), 5);
    assert_eq!(values.len(), 5);

    // Rows and radar share ordering with the baseline table
    for (row, label) in rows.iter().zip(labels.iter()) {
        assert_eq!(row.label, *label);
    }
    for (row, value) in rows.iter().zip(values.iter()) {
        assert_eq!(row.uniqueness_percent.round() as u8, *value);
    }

    // Symmetry row shows the exact 1.0 and the jaw angle carries its unit
    assert_eq!(rows[3].value, "1.000");
    assert_eq!(rows[4].value, "90.0°");
}

#[test]
fn from_ibug_68_feeds_the_same_pipeline() {
    // Assemble a flat 68-point array around the synthetic face above, with
    // filler points for the regions the metrics never touch.
    let mut flat = vec![Point::new(0.0, 0.0); 68];
    for (i, p) in symmetric_jaw().into_iter().enumerate() {
        flat[i] = p; // jaw 0-16
    }
    flat[27] = Point::new(100.0, 60.0); // nose ridge top
    for i in 28..=35 {
        flat[i] = Point::new(100.0, 60.0 + (i - 27) as f32 * (40.0 / 6.0));
    }
    for i in 36..=41 {
        flat[i] = Point::new(80.0, 50.0); // left eye ring
    }
    for i in 42..=47 {
        flat[i] = Point::new(120.0, 50.0); // right eye ring
    }
    for i in 48..=67 {
        flat[i] = Point::new(100.0, 120.0); // mouth filler
    }
    flat[48] = Point::new(90.0, 120.0); // left corner
    flat[54] = Point::new(110.0, 120.0); // right corner

    let landmarks = LandmarkSet::from_ibug_68(&flat).unwrap();
    let face_box = DetectionBox::new(20.0, 30.0, 160.0, 100.0);
    let metrics = FaceMetrics::measure(&landmarks, &face_box);

    assert_eq!(metrics.symmetry, 1.0);
    assert!((metrics.eye_distance_ratio - 0.5).abs() < 1e-6);
    assert!((metrics.mouth_width_ratio - 0.25).abs() < 1e-6);
    // nose[6] = flat[33] = (100, 100): ridge length 40 over height 100
    assert!((metrics.nose_length_ratio - 0.4).abs() < 1e-5);
}

#[test]
fn scores_are_recomputed_per_baseline_table() {
    let landmarks = symmetric_face();
    let face_box = DetectionBox::new(20.0, 30.0, 160.0, 100.0);
    let metrics = FaceMetrics::measure(&landmarks, &face_box);

    // A table centered exactly on the measured values scores all zeros
    let centered = BaselineTable {
        eye_distance: Baseline::new(metrics.eye_distance_ratio, 0.05, "Eye distance"),
        mouth_width: Baseline::new(metrics.mouth_width_ratio, 0.08, "Mouth width"),
        nose_length: Baseline::new(metrics.nose_length_ratio, 0.05, "Nose length"),
        symmetry: Baseline::new(metrics.symmetry, 0.07, "Jaw symmetry"),
        jaw_angle: Baseline::new(metrics.jaw_angle_deg, 12.0, "Jaw angle"),
    };
    let scores = UniquenessScores::compute(&metrics, &centered);
    for key in MetricKey::ALL {
        assert_eq!(scores.get(key), 0.0);
    }

    // The default table disagrees somewhere
    let default_scores = UniquenessScores::compute(&metrics, &BaselineTable::default());
    assert!(MetricKey::ALL.iter().any(|&k| default_scores.get(k) > 0.0));
}
