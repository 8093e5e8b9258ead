//!
//! The gas reporter library.
//!

pub mod action;
pub mod analysis;
pub mod codec;
pub mod context;
pub mod github;
pub mod history;
pub mod input;
pub mod model;
pub mod output;
pub mod publisher;

pub use crate::action::Config as ActionConfig;
pub use crate::action::Outcome as ActionOutcome;
pub use crate::analysis::diff::Diff;
pub use crate::analysis::direction::Direction;
pub use crate::codec::anchor::Anchor;
pub use crate::codec::error::Error as DecodeError;
pub use crate::context::repository::Repository;
pub use crate::context::RunContext;
pub use crate::github::comment::Comment;
pub use crate::github::error::Error as FetchError;
pub use crate::github::pull_request::PullRequest;
pub use crate::github::Client as GitHubClient;
pub use crate::github::CommentLister;
pub use crate::github::Host;
pub use crate::history::pages::CommentPages;
pub use crate::input::error::Error as InputError;
pub use crate::input::filter::Filter as ContractFilter;
pub use crate::input::method::Method as RawMethod;
pub use crate::input::RawReport;
pub use crate::model::method_key::MethodKey;
pub use crate::model::method_result::MethodResult;
pub use crate::model::run_report::RunReport;
pub use crate::output::format::Format as OutputFormat;
pub use crate::output::Output;

///
/// The number of comments requested per page when scanning history.
///
pub const COMMENTS_PER_PAGE: usize = 100;

///
/// The default process output name.
///
pub const DEFAULT_OUTPUT_NAME: &str = "github_comment";

///
/// The successful exit code.
///
pub const EXIT_CODE_SUCCESS: i32 = 0;

///
/// The failure exit code.
///
pub const EXIT_CODE_FAILURE: i32 = 1;
