//!
//! The change of a method's gas cost between two runs.
//!

use crate::model::method_result::MethodResult;

///
/// The change of a method's gas cost between two runs, in percent.
///
/// Positive values are regressions, negative ones are improvements.
/// `None` means the previous value was zero and the change is undefined.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diff {
    /// The change of the cheapest call.
    pub min: Option<f64>,
    /// The change of the most expensive call.
    pub max: Option<f64>,
    /// The change of the average call.
    pub avg: Option<f64>,
}

impl Diff {
    ///
    /// Compares the current result of a method with its previous one.
    ///
    pub fn new(current: &MethodResult, previous: &MethodResult) -> Self {
        Self {
            min: percentage(current.min, previous.min),
            max: percentage(current.max, previous.max),
            avg: percentage(current.avg, previous.avg),
        }
    }
}

///
/// Returns `current * 100 / previous - 100`, or `None` if `previous` is zero.
///
pub fn percentage(current: u64, previous: u64) -> Option<f64> {
    if previous == 0 {
        return None;
    }
    Some((current as f64) * 100.0 / (previous as f64) - 100.0)
}
