//!
//! The pull request.
//!

///
/// The pull request.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct PullRequest {
    /// The pull request number, which is also its issue number.
    pub number: u64,
    /// The pull request state: `open` or `closed`.
    pub state: String,
}

impl PullRequest {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(number: u64, state: impl Into<String>) -> Self {
        Self {
            number,
            state: state.into(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.state == "open"
    }
}
