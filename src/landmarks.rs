//! Validated facial landmark groups with named anatomical accessors.
//!
//! Detectors hand back a flat point array whose indices carry meaning by
//! convention (point 8 is the chin, point 48 the left mouth corner, and so
//! on). `LandmarkSet` enforces that convention once, at construction, so the
//! measurement code downstream never touches a magic index.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{centroid, Point};

/// Number of points on the jaw outline. Index 0 and 16 are the
/// ear-adjacent endpoints, index 8 is the chin apex.
pub const JAW_POINT_COUNT: usize = 17;

/// Minimum mouth outline length; the corner accessors need indices 0 and 6.
pub const MIN_MOUTH_POINTS: usize = 7;

/// Facial landmarks grouped by anatomical region.
///
/// Construction validates group sizes, so every accessor on a built set is
/// infallible. Groups keep the detector's point ordering: eye rings and the
/// mouth outline are ordered rings, the nose ridge runs top to bottom, and
/// the jaw outline runs ear to ear through the chin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandmarkSet {
    left_eye: Vec<Point>,
    right_eye: Vec<Point>,
    mouth: Vec<Point>,
    nose: Vec<Point>,
    jaw: Vec<Point>,
}

impl LandmarkSet {
    /// Build a landmark set from pre-grouped points.
    ///
    /// Returns an error if the jaw outline is not exactly
    /// [`JAW_POINT_COUNT`] points, either eye ring or the nose ridge is
    /// empty, or the mouth outline is shorter than [`MIN_MOUTH_POINTS`].
    pub fn new(
        left_eye: Vec<Point>,
        right_eye: Vec<Point>,
        mouth: Vec<Point>,
        nose: Vec<Point>,
        jaw: Vec<Point>,
    ) -> Result<Self> {
        if jaw.len() != JAW_POINT_COUNT {
            return Err(Error::JawPointCount {
                expected: JAW_POINT_COUNT,
                actual: jaw.len(),
            });
        }
        check_region("left eye", &left_eye, 1)?;
        check_region("right eye", &right_eye, 1)?;
        check_region("mouth", &mouth, MIN_MOUTH_POINTS)?;
        check_region("nose", &nose, 1)?;

        Ok(Self {
            left_eye,
            right_eye,
            mouth,
            nose,
            jaw,
        })
    }

    /// Build a landmark set from a flat 68-point array in the standard
    /// iBUG/dlib layout: jaw 0-16, nose 27-35, left eye 36-41,
    /// right eye 42-47, mouth 48-67.
    pub fn from_ibug_68(points: &[Point]) -> Result<Self> {
        if points.len() != 68 {
            return Err(Error::WrongLandmarkCount(points.len()));
        }
        Self::new(
            points[36..=41].to_vec(),
            points[42..=47].to_vec(),
            points[48..=67].to_vec(),
            points[27..=35].to_vec(),
            points[0..=16].to_vec(),
        )
    }

    pub fn left_eye(&self) -> &[Point] {
        &self.left_eye
    }

    pub fn right_eye(&self) -> &[Point] {
        &self.right_eye
    }

    pub fn mouth(&self) -> &[Point] {
        &self.mouth
    }

    pub fn nose(&self) -> &[Point] {
        &self.nose
    }

    pub fn jaw(&self) -> &[Point] {
        &self.jaw
    }

    /// Arithmetic center of the left eye ring.
    pub fn left_eye_center(&self) -> Point {
        centroid(&self.left_eye)
    }

    /// Arithmetic center of the right eye ring.
    pub fn right_eye_center(&self) -> Point {
        centroid(&self.right_eye)
    }

    /// Chin apex (jaw point 8).
    pub fn chin(&self) -> Point {
        self.jaw[8]
    }

    /// Left cheekbone proxy (jaw point 4).
    pub fn left_cheek(&self) -> Point {
        self.jaw[4]
    }

    /// Right cheekbone proxy (jaw point 12).
    pub fn right_cheek(&self) -> Point {
        self.jaw[12]
    }

    /// Left corner of the mouth outline (mouth point 0).
    pub fn mouth_left_corner(&self) -> Point {
        self.mouth[0]
    }

    /// Right corner of the mouth outline (mouth point 6).
    pub fn mouth_right_corner(&self) -> Point {
        self.mouth[6]
    }

    /// Top of the nose ridge (nose point 0).
    pub fn nose_top(&self) -> Point {
        self.nose[0]
    }

    /// Bottom of the nose ridge: nose point 6 when the ridge has that many
    /// points, otherwise the last point.
    pub fn nose_bottom(&self) -> Point {
        // The ridge is validated non-empty, so the fallback index exists.
        self.nose
            .get(6)
            .copied()
            .unwrap_or(self.nose[self.nose.len() - 1])
    }
}

fn check_region(region: &'static str, points: &[Point], min: usize) -> Result<()> {
    if points.len() < min {
        return Err(Error::RegionTooSmall {
            region,
            min,
            actual: points.len(),
        });
    }
    Ok(())
}
