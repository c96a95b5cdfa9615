//! Distance metrics on the plane
//!
//! Stateless: every function here is a pure computation over two points.

use crate::{Error, Point2, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selectable distance function
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Metric {
    /// `max(|x1 - x2|, |y1 - y2|)`
    #[default]
    Chebyshev,
    /// `(|x1 - x2|^p + |y1 - y2|^p)^(1/p)` for an integer order `p >= 1`
    Minkowski,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::Chebyshev, Metric::Minkowski];

    /// Name used in log lines and front ends
    pub fn display_name(&self) -> &'static str {
        match self {
            Metric::Chebyshev => "Chebyshev",
            Metric::Minkowski => "Minkowski",
        }
    }

    /// Whether the metric reads the order argument
    #[inline]
    pub fn uses_order(&self) -> bool {
        matches!(self, Metric::Minkowski)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Metric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Metric::ALL
            .into_iter()
            .find(|m| m.display_name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownMetric(name.to_string()))
    }
}

/// Compute the distance between `a` and `b` under `metric`
///
/// `order` is only read by [`Metric::Minkowski`] and must be at least 1.
pub fn distance(metric: Metric, a: &Point2, b: &Point2, order: i64) -> Result<f64> {
    match metric {
        Metric::Chebyshev => Ok(chebyshev(a, b)),
        Metric::Minkowski => minkowski(a, b, order),
    }
}

#[inline]
pub fn chebyshev(a: &Point2, b: &Point2) -> f64 {
    let (dx, dy) = a.abs_diff(b);
    dx.max(dy)
}

pub fn minkowski(a: &Point2, b: &Point2, order: i64) -> Result<f64> {
    if order < 1 {
        return Err(Error::InvalidOrder(order));
    }

    let (dx, dy) = a.abs_diff(b);
    let dist = match order {
        1 => dx + dy,
        2 => dx.hypot(dy),
        p => {
            // Scale by the larger component so high orders neither overflow nor underflow
            let m = dx.max(dy);
            if m == 0.0 || !m.is_finite() {
                m
            } else {
                let p = p as f64;
                m * ((dx / m).powf(p) + (dy / m).powf(p)).powf(1.0 / p)
            }
        }
    };
    Ok(dist)
}
