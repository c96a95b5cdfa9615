//! # vecdist Core
//!
//! Core library for vecdist.
//!
//! - [`Point2`] - A point on the plane
//! - [`Metric`] - Chebyshev or Minkowski, with [`distance`] dispatching to either
//! - [`LogSink`] - Capability the view-model appends change-log lines to
//!
//! ## Example
//!
//! ```rust
//! use vecdist_core::{distance, Metric, Point2};
//!
//! let a = Point2::new(3.0, 3.0);
//! let b = Point2::new(1.0, 3.0);
//! assert_eq!(distance(Metric::Minkowski, &a, &b, 3).unwrap(), 2.0);
//! assert_eq!(distance(Metric::Chebyshev, &a, &b, 1).unwrap(), 2.0);
//! ```

pub mod error;
pub mod metric;
pub mod point;
pub mod sink;

pub use error::{Error, Result};
pub use metric::{chebyshev, distance, minkowski, Metric};
pub use point::Point2;
pub use sink::{LogSink, MemorySink};
