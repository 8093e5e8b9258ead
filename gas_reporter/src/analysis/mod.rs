//!
//! Compares the current run against a previous one.
//!

pub mod diff;
pub mod direction;


use std::collections::BTreeMap;

use crate::model::method_key::MethodKey;
use crate::model::run_report::RunReport;

use self::diff::Diff;

///
/// Computes the per-method changes of `current` relative to `previous`.
///
/// Methods the previous run did not measure have no entry.
///
pub fn compute(current: &RunReport, previous: &RunReport) -> BTreeMap<MethodKey, Diff> {
    let diffs: BTreeMap<MethodKey, Diff> = current
        .data
        .iter()
        .filter_map(|result| {
            let key = result.key();
            previous
                .get(&key)
                .map(|previous| (key, Diff::new(result, previous)))
        })
        .collect();

    tracing::debug!(
        current = current.len(),
        previous = previous.len(),
        matched = diffs.len(),
        "compared runs"
    );
    diffs
}
