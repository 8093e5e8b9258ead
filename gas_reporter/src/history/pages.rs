//!
//! The lazy comment page sequence.
//!

use crate::github::comment::Comment;
use crate::github::error::Error as FetchError;
use crate::github::CommentLister;

///
/// Fetches the comment pages of a pull request lazily, in page order.
///
/// Every page is sorted newest first. The sequence ends after the first page shorter than the
/// page size, or right after a failed fetch.
///
pub struct CommentPages<'a, L: ?Sized> {
    /// The comment source.
    lister: &'a L,
    /// The pull request number.
    pull_request: u64,
    /// The page size.
    per_page: usize,
    /// The next page to fetch, 1-based.
    page: usize,
    /// Set once the last page has been yielded.
    is_exhausted: bool,
}

impl<'a, L> CommentPages<'a, L>
where
    L: CommentLister + ?Sized,
{
    ///
    /// A shortcut constructor.
    ///
    pub fn new(lister: &'a L, pull_request: u64, per_page: usize) -> Self {
        Self {
            lister,
            pull_request,
            per_page: per_page.max(1),
            page: 1,
            is_exhausted: false,
        }
    }
}

impl<L> Iterator for CommentPages<'_, L>
where
    L: CommentLister + ?Sized,
{
    type Item = Result<Vec<Comment>, FetchError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_exhausted {
            return None;
        }

        let result = self
            .lister
            .list_comments(self.pull_request, self.page, self.per_page);
        match result {
            Ok(mut comments) => {
                tracing::debug!(
                    pull_request = self.pull_request,
                    page = self.page,
                    comments = comments.len(),
                    "fetched comment page"
                );
                self.is_exhausted = comments.len() < self.per_page;
                self.page += 1;
                comments.sort_by(|a, b| b.id.cmp(&a.id));
                Some(Ok(comments))
            }
            Err(error) => {
                self.is_exhausted = true;
                Some(Err(error))
            }
        }
    }
}
