//! # vecdist View-Model
//!
//! The state behind a two-vector distance form: five free-text fields, a
//! selected [`Metric`](vecdist_core::Metric), a derived [`Status`], the last
//! result, and an append-only change log.
//!
//! ## Example
//!
//! ```rust
//! use vecdist_viewmodel::{DistanceViewModel, Status};
//!
//! let mut vm = DistanceViewModel::in_memory();
//! vm.set_vec1_x("2");
//! vm.set_vec1_y("2");
//! vm.set_vec2_x("1");
//! vm.set_vec2_y("3");
//! assert_eq!(vm.status(), Status::Ready);
//!
//! vm.calculate();
//! assert_eq!(vm.result(), "1.0");
//! assert_eq!(vm.log().len(), 1);
//! ```
//!
//! ## Status transitions
//!
//! ```text
//! WAITING ──(coordinates complete)──> READY ──calculate()──> SUCCESS
//!    │                                  │                       │
//!    └──────(malformed field)────> BAD_FORMAT <──(edit)─────────┘
//! ```

pub mod input;
pub mod messages;
pub mod status;
pub mod viewmodel;

pub use input::{Field, FieldSnapshot, FieldState};
pub use status::{derive_status, Status};
pub use viewmodel::{DistanceViewModel, ViewModelConfig, ViewState};
