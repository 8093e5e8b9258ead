//!
//! The contract allow-list.
//!

use std::collections::BTreeSet;
use std::str::FromStr;

///
/// The contract allow-list. An empty list allows every contract.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter(BTreeSet<String>);

impl Filter {
    ///
    /// Whether the contract passes the filter.
    ///
    pub fn allows(&self, contract: &str) -> bool {
        self.0.is_empty() || self.0.contains(contract)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S> FromIterator<S> for Filter
where
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl FromStr for Filter {
    type Err = std::convert::Infallible;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Ok(string
            .split(',')
            .map(str::trim)
            .filter(|contract| !contract.is_empty())
            .collect())
    }
}
