use serde::{Deserialize, Serialize};

/// A 2D point with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn distance(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Reflect this point across the vertical line `x = mid_x`.
    pub fn mirror_x(&self, mid_x: f32) -> Point {
        Point::new(2.0 * mid_x - self.x, self.y)
    }
}

impl std::ops::Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl std::ops::Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl std::ops::Mul<f32> for Point {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

/// Arithmetic mean of a point slice. Returns the origin for an empty slice.
pub fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::zero();
    }
    let sum = points.iter().fold(Point::zero(), |acc, p| acc + *p);
    sum * (1.0 / points.len() as f32)
}

/// Axis-aligned bounding box of a detected face, as reported by the
/// external detector. The height serves as the vertical normalizer for
/// face proportions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectionBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl DetectionBox {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, 4.0);

        let sum = a + b;
        assert_eq!(sum.x, 4.0);
        assert_eq!(sum.y, 6.0);

        let diff = b - a;
        assert_eq!(diff.x, 2.0);
        assert_eq!(diff.y, 2.0);

        let scaled = a * 2.0;
        assert_eq!(scaled.x, 2.0);
        assert_eq!(scaled.y, 4.0);
    }

    #[test]
    fn point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn mirror_across_midline() {
        let p = Point::new(30.0, 7.0);
        let m = p.mirror_x(100.0);
        assert_eq!(m.x, 170.0);
        assert_eq!(m.y, 7.0);

        // A point on the midline maps to itself
        let on_line = Point::new(100.0, 42.0);
        assert_eq!(on_line.mirror_x(100.0), on_line);
    }

    #[test]
    fn centroid_of_points() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        let c = centroid(&points);
        assert!((c.x - 5.0).abs() < 1e-6);
        assert!((c.y - 5.0).abs() < 1e-6);

        assert_eq!(centroid(&[]), Point::zero());
    }

    #[test]
    fn detection_box_center() {
        let bbox = DetectionBox::new(100.0, 100.0, 200.0, 200.0);
        let c = bbox.center();
        assert_eq!(c.x, 200.0);
        assert_eq!(c.y, 200.0);
    }
}
