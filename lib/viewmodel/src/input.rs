//! Text inputs and their incremental validation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use vecdist_core::{Error, Result};

/// One of the five user-editable text fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Vec1X,
    Vec1Y,
    Vec2X,
    Vec2Y,
    Dim,
}

impl Field {
    pub const ALL: [Field; 5] = [Field::Vec1X, Field::Vec1Y, Field::Vec2X, Field::Vec2Y, Field::Dim];
    pub const COORDINATES: [Field; 4] = [Field::Vec1X, Field::Vec1Y, Field::Vec2X, Field::Vec2Y];

    pub fn name(&self) -> &'static str {
        match self {
            Field::Vec1X => "vec1x",
            Field::Vec1Y => "vec1y",
            Field::Vec2X => "vec2x",
            Field::Vec2Y => "vec2y",
            Field::Dim => "dim",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Field::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownField(name.to_string()))
    }
}

/// Classification of a field's raw text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    Empty,
    Valid,
    Malformed,
}

/// Raw text of all five fields; the empty string means unset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSnapshot {
    pub vec1_x: String,
    pub vec1_y: String,
    pub vec2_x: String,
    pub vec2_y: String,
    pub dim: String,
}

impl FieldSnapshot {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Vec1X => &self.vec1_x,
            Field::Vec1Y => &self.vec1_y,
            Field::Vec2X => &self.vec2_x,
            Field::Vec2Y => &self.vec2_y,
            Field::Dim => &self.dim,
        }
    }

    /// Replace a field's text, returning the previous text
    pub fn set(&mut self, field: Field, text: String) -> String {
        let slot = match field {
            Field::Vec1X => &mut self.vec1_x,
            Field::Vec1Y => &mut self.vec1_y,
            Field::Vec2X => &mut self.vec2_x,
            Field::Vec2Y => &mut self.vec2_y,
            Field::Dim => &mut self.dim,
        };
        std::mem::replace(slot, text)
    }
}

/// Parse a coordinate; `None` for empty or malformed text
pub fn parse_coordinate(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a Minkowski order; `None` for empty, malformed, or non-positive text
pub fn parse_order(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok().filter(|&p| p >= 1)
}

pub fn classify_coordinate(text: &str) -> FieldState {
    classify(text, |t| parse_coordinate(t).is_some())
}

pub fn classify_order(text: &str) -> FieldState {
    classify(text, |t| parse_order(t).is_some())
}

fn classify(text: &str, well_formed: impl Fn(&str) -> bool) -> FieldState {
    if text.is_empty() {
        FieldState::Empty
    } else if well_formed(text) {
        FieldState::Valid
    } else {
        FieldState::Malformed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_classification() {
        assert_eq!(classify_coordinate(""), FieldState::Empty);
        assert_eq!(classify_coordinate("1"), FieldState::Valid);
        assert_eq!(classify_coordinate("-1.4"), FieldState::Valid);
        assert_eq!(classify_coordinate(" 2.5e3 "), FieldState::Valid);
        assert_eq!(classify_coordinate("#selfie"), FieldState::Malformed);
        assert_eq!(classify_coordinate("1,5"), FieldState::Malformed);
        assert_eq!(classify_coordinate("NaN"), FieldState::Malformed);
        assert_eq!(classify_coordinate("inf"), FieldState::Malformed);
        assert_eq!(classify_coordinate(" "), FieldState::Malformed);
    }

    #[test]
    fn test_order_classification() {
        assert_eq!(classify_order(""), FieldState::Empty);
        assert_eq!(classify_order("1"), FieldState::Valid);
        assert_eq!(classify_order("42"), FieldState::Valid);
        assert_eq!(classify_order("0"), FieldState::Malformed);
        assert_eq!(classify_order("-2"), FieldState::Malformed);
        assert_eq!(classify_order("1.5"), FieldState::Malformed);
        assert_eq!(classify_order("two"), FieldState::Malformed);
    }

    #[test]
    fn test_snapshot_set_returns_previous() {
        let mut snapshot = FieldSnapshot::default();
        assert_eq!(snapshot.set(Field::Vec2Y, "3".to_string()), "");
        assert_eq!(snapshot.set(Field::Vec2Y, "4".to_string()), "3");
        assert_eq!(snapshot.get(Field::Vec2Y), "4");
        assert_eq!(snapshot.get(Field::Dim), "");
    }

    #[test]
    fn test_field_names() {
        assert_eq!("VEC1X".parse::<Field>().unwrap(), Field::Vec1X);
        assert_eq!("dim".parse::<Field>().unwrap(), Field::Dim);
        assert!(matches!("vec3x".parse::<Field>(), Err(Error::UnknownField(_))));
        for field in Field::ALL {
            assert_eq!(field.to_string().parse::<Field>().unwrap(), field);
        }
    }
}
