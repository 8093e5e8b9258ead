//!
//! The run context.
//!

pub mod repository;

use self::repository::Repository;

///
/// Identifies the current run: what was measured and where it gets published.
///
/// Built once from the arguments and passed explicitly to every stage that needs it.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    /// The CI run identifier.
    pub run_id: String,
    /// The commit the benchmark was run against.
    pub commit: String,
    /// The repository hosting the pull request, if known.
    pub repository: Option<Repository>,
}

impl RunContext {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(run_id: String, commit: String, repository: Option<Repository>) -> Self {
        Self {
            run_id,
            commit,
            repository,
        }
    }
}
