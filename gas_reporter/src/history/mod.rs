//!
//! The report history of a pull request.
//!

pub mod pages;

#[cfg(test)]
mod tests;

use crate::codec;
use crate::github::error::Error as FetchError;
use crate::github::CommentLister;
use crate::model::run_report::RunReport;

use self::pages::CommentPages;

///
/// Finds the most recent report posted to the pull request.
///
/// Pages are scanned in order, each newest first, until a comment decodes or the pages run out.
/// Comments that do not decode are skipped. A failed page fetch is returned as an error.
///
pub fn find_previous<L>(
    pull_request: u64,
    lister: &L,
    per_page: usize,
) -> Result<Option<RunReport>, FetchError>
where
    L: CommentLister + ?Sized,
{
    for page in CommentPages::new(lister, pull_request, per_page) {
        let previous = page?
            .iter()
            .find_map(|comment| codec::decode(comment.body.as_str()));
        if let Some(previous) = previous {
            tracing::info!(
                pull_request,
                run_id = previous.id.as_str(),
                commit = previous.commit.as_str(),
                "found previous report"
            );
            return Ok(Some(previous));
        }
    }

    tracing::info!(pull_request, "no previous report found");
    Ok(None)
}
