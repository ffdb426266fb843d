//! Layout inputs supplied by the host during measurement.

use serde::{Deserialize, Serialize};

/// Constraint for one axis of the measure pass.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum MeasureSpec {
    /// The host fixed this axis to an exact size.
    Exactly(f64),
    /// The widget may use up to this size.
    AtMost(f64),
    /// No constraint.
    #[default]
    Unspecified,
}

impl MeasureSpec {
    pub fn is_exact(self) -> bool {
        matches!(self, MeasureSpec::Exactly(_))
    }

    /// The size carried by the constraint (0 when unspecified).
    pub fn size(self) -> f64 {
        match self {
            MeasureSpec::Exactly(size) | MeasureSpec::AtMost(size) => size,
            MeasureSpec::Unspecified => 0.0,
        }
    }
}

/// Inner spacing between the widget bounds and the star row.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Padding {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same padding on every side.
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_spec_size() {
        assert!((MeasureSpec::Exactly(10.0).size() - 10.0).abs() < f64::EPSILON);
        assert!((MeasureSpec::AtMost(20.0).size() - 20.0).abs() < f64::EPSILON);
        assert_eq!(MeasureSpec::Unspecified.size(), 0.0);
        assert!(MeasureSpec::Exactly(0.0).is_exact());
        assert!(!MeasureSpec::AtMost(5.0).is_exact());
    }

    #[test]
    fn test_padding_sums() {
        let padding = Padding::new(1.0, 2.0, 3.0, 4.0);
        assert!((padding.horizontal() - 4.0).abs() < f64::EPSILON);
        assert!((padding.vertical() - 6.0).abs() < f64::EPSILON);
    }
}
