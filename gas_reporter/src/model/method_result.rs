//!
//! Gas statistics of a single method.
//!

use crate::model::method_key::MethodKey;

///
/// Gas statistics of a single method within one run.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodResult {
    /// Contract name.
    pub contract: String,
    /// Method name or signature.
    pub method: String,
    /// The cheapest call.
    pub min: u64,
    /// The most expensive call.
    pub max: u64,
    /// The average call cost, rounded to the nearest integer.
    pub avg: u64,
}

impl MethodResult {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        contract: impl Into<String>,
        method: impl Into<String>,
        min: u64,
        max: u64,
        avg: u64,
    ) -> Self {
        Self {
            contract: contract.into(),
            method: method.into(),
            min,
            max,
            avg,
        }
    }

    ///
    /// Returns the key the result is matched by across runs.
    ///
    pub fn key(&self) -> MethodKey {
        MethodKey::new(self.contract.as_str(), self.method.as_str())
    }
}
