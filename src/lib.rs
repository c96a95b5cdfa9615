//! # vecdist
//!
//! Distance between two vectors on the plane, behind a validating view-model
//! that keeps a human-readable log of every meaningful change.
//!
//! ## Quick Start
//!
//! ### As a Program
//!
//! ```bash
//! vecdist --log-file session.log
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use vecdist::prelude::*;
//! use std::sync::Arc;
//!
//! let sink: Arc<dyn LogSink> = Arc::new(MemorySink::new());
//! let mut vm = DistanceViewModel::new(Some(sink)).unwrap();
//! vm.set_vec1_x("3");
//! vm.set_vec1_y("3");
//! vm.set_vec2_x("1");
//! vm.set_vec2_y("3");
//! vm.set_dim("2");
//! vm.set_metric(Metric::Minkowski);
//! vm.calculate();
//!
//! assert_eq!(vm.status(), Status::Success);
//! assert_eq!(vm.result(), "2.0");
//! ```
//!
//! ## Crate Structure
//!
//! - `vecdist-core` - Points, metrics, the log sink capability
//! - `vecdist-storage` - Plain-text log file
//! - `vecdist-viewmodel` - Input validation, status, change logging

pub use vecdist_core::{
    distance, Error, LogSink, MemorySink, Metric, Point2, Result,
};

pub use vecdist_storage::TxtLogger;

pub use vecdist_viewmodel::{
    DistanceViewModel, Field, FieldSnapshot, Status, ViewModelConfig, ViewState,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        distance, DistanceViewModel, Error, Field, LogSink, MemorySink, Metric, Point2, Result,
        Status, TxtLogger, ViewModelConfig,
    };
}

/// Change-log tags and line formatting
pub mod messages {
    pub use vecdist_viewmodel::messages::*;
}
