use serde::{Deserialize, Serialize};
use std::ops::Sub;

/// A point on the plane
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    #[inline]
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Per-axis absolute differences `(|x1 - x2|, |y1 - y2|)`
    #[inline]
    #[must_use]
    pub fn abs_diff(&self, other: &Point2) -> (f64, f64) {
        let d = *self - *other;
        (d.x.abs(), d.y.abs())
    }
}

impl Sub for Point2 {
    type Output = Point2;

    fn sub(self, other: Point2) -> Point2 {
        Point2::new(self.x - other.x, self.y - other.y)
    }
}
