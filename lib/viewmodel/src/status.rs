use crate::input::{classify_coordinate, classify_order, Field, FieldSnapshot, FieldState};
use serde::{Deserialize, Serialize};
use std::fmt;
use vecdist_core::Metric;

/// Readiness of the view-model, derived from its inputs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// Not enough fields filled in
    #[default]
    Waiting,
    /// A filled field does not parse
    BadFormat,
    /// Inputs are complete and well-formed, no result for them yet
    Ready,
    /// The last calculation produced `result` for the current inputs
    Success,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Waiting => "WAITING",
            Status::BadFormat => "BAD_FORMAT",
            Status::Ready => "READY",
            Status::Success => "SUCCESS",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Status::Waiting => "Please provide input data",
            Status::BadFormat => "Bad format",
            Status::Ready => "Press 'Calculate' or Enter",
            Status::Success => "Success",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status implied by the inputs alone
///
/// Never returns [`Status::Success`]: whether a result is current is known
/// only to the view-model. The order field is validated only under
/// [`Metric::Minkowski`], and its emptiness never blocks readiness.
pub fn derive_status(fields: &FieldSnapshot, metric: Metric) -> Status {
    let coordinates: Vec<FieldState> = Field::COORDINATES
        .iter()
        .map(|&field| classify_coordinate(fields.get(field)))
        .collect();
    let order = if metric.uses_order() {
        classify_order(&fields.dim)
    } else {
        FieldState::Empty
    };

    if order == FieldState::Malformed || coordinates.contains(&FieldState::Malformed) {
        Status::BadFormat
    } else if coordinates.iter().all(|&state| state == FieldState::Valid) {
        Status::Ready
    } else {
        Status::Waiting
    }
}
