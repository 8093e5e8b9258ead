//!
//! The method key, unambiguously locating a method within a run.
//!

///
/// The method key, unambiguously locating a method within a run.
///
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MethodKey {
    /// Contract name.
    pub contract: String,
    /// Method name or signature.
    pub method: String,
}

impl MethodKey {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(contract: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            contract: contract.into(),
            method: method.into(),
        }
    }
}

impl std::fmt::Display for MethodKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}::{}", self.contract, self.method)
    }
}
