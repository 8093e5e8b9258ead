//!
//! The report publisher.
//!

use crate::github::error::Error as FetchError;
use crate::github::pull_request::PullRequest;
use crate::github::Host;

///
/// Returns the first open pull request the commit belongs to.
///
/// A failed lookup is logged and treated as no pull request, so the run continues without
/// publishing.
///
pub fn resolve_pull_request<H>(host: &H, commit: &str) -> Option<PullRequest>
where
    H: Host + ?Sized,
{
    match host.list_pull_requests(commit) {
        Ok(pull_requests) => {
            let pull_request = pull_requests
                .into_iter()
                .find(|pull_request| pull_request.is_open());
            match pull_request.as_ref() {
                Some(pull_request) => {
                    tracing::info!(commit, number = pull_request.number, "resolved pull request")
                }
                None => tracing::info!(commit, "no open pull request for the commit"),
            }
            pull_request
        }
        Err(error) => {
            tracing::warn!(commit, %error, "pull request lookup failed");
            None
        }
    }
}

///
/// Posts the body as a new comment. Earlier comments are never edited or deleted.
///
pub fn publish<H>(host: &H, pull_request: &PullRequest, body: &str) -> Result<(), FetchError>
where
    H: Host + ?Sized,
{
    host.create_comment(pull_request.number, body)?;
    tracing::info!(number = pull_request.number, "published gas report");
    Ok(())
}
