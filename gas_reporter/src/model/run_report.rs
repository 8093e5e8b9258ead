//!
//! The gas report of a single run.
//!

use std::collections::BTreeMap;

use crate::model::method_key::MethodKey;
use crate::model::method_result::MethodResult;

///
/// The gas report of a single run.
///
/// Holds at most one result per method key. Results keep the order they were first seen in.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// The CI run identifier.
    pub id: String,
    /// The measured commit.
    pub commit: String,
    /// The per-method results.
    pub data: Vec<MethodResult>,
    /// Positions of the results in `data`, by key.
    positions: BTreeMap<MethodKey, usize>,
}

impl RunReport {
    ///
    /// Creates an empty report.
    ///
    pub fn new(id: impl Into<String>, commit: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            commit: commit.into(),
            data: Vec::new(),
            positions: BTreeMap::new(),
        }
    }

    ///
    /// Adds a result. A result with an already present key replaces the older one in place.
    ///
    pub fn push(&mut self, result: MethodResult) {
        let key = result.key();
        if let Some(position) = self.positions.get(&key).copied() {
            self.data[position] = result;
            return;
        }
        self.positions.insert(key, self.data.len());
        self.data.push(result);
    }

    ///
    /// Returns the result for `key`, if the run measured it.
    ///
    pub fn get(&self, key: &MethodKey) -> Option<&MethodResult> {
        self.positions
            .get(key)
            .and_then(|position| self.data.get(*position))
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Extend<MethodResult> for RunReport {
    fn extend<I: IntoIterator<Item = MethodResult>>(&mut self, iter: I) {
        for result in iter {
            self.push(result);
        }
    }
}
