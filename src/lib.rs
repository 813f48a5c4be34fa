//! # face-uniqueness
//!
//! Facial proportion metrics and "uniqueness" scoring from 2D landmarks.
//!
//! This crate provides:
//! - **Landmark grouping**: a validated [`LandmarkSet`] with named
//!   anatomical accessors, built from pre-grouped points or a flat 68-point
//!   detector array
//! - **Metrics**: eye distance, mouth width, and nose length ratios, a jaw
//!   symmetry score, and the jaw angle at the chin
//! - **Uniqueness scores**: each metric's deviation from a population
//!   baseline, squashed into a saturating 0-100 percentage
//! - **Report formatting**: labeled display rows and a five-axis radar
//!   vector for chart rendering
//!
//! Face detection and landmark inference are *not* part of this crate; it
//! consumes the output of an external detector (a landmark set plus the
//! face bounding box) and everything downstream is a pure, synchronous
//! function of that input. Nothing is cached between analyses.
//!
//! ## Pipeline
//!
//! 1. Group detector output into a [`LandmarkSet`] (validation happens here)
//! 2. Measure [`FaceMetrics`] against the [`DetectionBox`]
//! 3. Score each metric against the [`BaselineTable`]
//! 4. Format rows and the radar vector for display
//!
//! ## Quick Start
//!
//! ```rust
//! use face_uniqueness::{
//!     report, BaselineTable, DetectionBox, FaceMetrics, LandmarkSet, Point,
//!     UniquenessScores,
//! };
//!
//! // Landmarks normally come from an external face detector; here we
//! // build a small synthetic face by hand.
//! let jaw: Vec<Point> = (0..17)
//!     .map(|i| {
//!         let offset = i as f32 - 8.0;
//!         Point::new(100.0 + offset * 10.0, 150.0 - offset.abs() * 10.0)
//!     })
//!     .collect();
//! let landmarks = LandmarkSet::new(
//!     vec![Point::new(80.0, 50.0)],                  // left eye
//!     vec![Point::new(120.0, 50.0)],                 // right eye
//!     (0..7)
//!         .map(|i| Point::new(90.0 + i as f32 * (20.0 / 6.0), 120.0))
//!         .collect(),                                // mouth outline
//!     vec![Point::new(100.0, 60.0), Point::new(100.0, 100.0)], // nose ridge
//!     jaw,
//! )
//! .unwrap();
//!
//! let face_box = DetectionBox::new(20.0, 30.0, 160.0, 130.0);
//! let metrics = FaceMetrics::measure(&landmarks, &face_box);
//!
//! let baselines = BaselineTable::default();
//! let scores = UniquenessScores::compute(&metrics, &baselines);
//! assert!(scores.symmetry <= 100.0);
//!
//! for row in report::rows(&metrics, &baselines) {
//!     println!("{}: {} ({:.0}% unique)", row.label, row.value, row.uniqueness_percent);
//! }
//! ```

pub mod report;

mod baseline;
mod error;
mod landmarks;
mod metrics;
mod score;
mod types;

pub use baseline::{Baseline, BaselineTable};
pub use error::{Error, Result};
pub use landmarks::{LandmarkSet, JAW_POINT_COUNT, MIN_MOUTH_POINTS};
pub use metrics::{safe_ratio, FaceMetrics, MetricKey};
pub use report::{MetricRow, HIGH_UNIQUENESS_THRESHOLD};
pub use score::{uniqueness_score, UniquenessScores};
pub use types::{centroid, DetectionBox, Point};
