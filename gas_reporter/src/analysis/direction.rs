//!
//! The direction of a gas cost change.
//!

///
/// The direction of a gas cost change.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// The method got more expensive.
    Regression,
    /// The method got cheaper.
    Improvement,
    /// The cost did not change.
    Unchanged,
    /// The previous cost was zero.
    Undefined,
}

impl Direction {
    ///
    /// Classifies a percentage change.
    ///
    pub fn of(percentage: Option<f64>) -> Self {
        match percentage {
            None => Self::Undefined,
            Some(value) if value.is_nan() => Self::Undefined,
            Some(value) if value > 0.0 => Self::Regression,
            Some(value) if value < 0.0 => Self::Improvement,
            Some(_) => Self::Unchanged,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Regression => "▲",
            Self::Improvement => "▼",
            Self::Unchanged => "−",
            Self::Undefined => "n/a",
        }
    }

    ///
    /// Renders a percentage change as a delta table cell, e.g. `▲10.00%`.
    ///
    pub fn render(percentage: Option<f64>) -> String {
        let direction = Self::of(percentage);
        match (direction, percentage) {
            (Self::Regression | Self::Improvement, Some(value)) => {
                format!("{}{:.2}%", direction.glyph(), value.abs())
            }
            _ => direction.glyph().to_owned(),
        }
    }
}
