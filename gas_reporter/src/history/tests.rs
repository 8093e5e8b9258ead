//!
//! The report history tests.
//!

use std::cell::RefCell;

use crate::codec;
use crate::github::comment::Comment;
use crate::github::error::Error as FetchError;
use crate::github::CommentLister;
use crate::model::method_result::MethodResult;
use crate::model::run_report::RunReport;

use super::find_previous;
use super::pages::CommentPages;

///
/// Serves a fixed comment list in pages, recording the requested pages.
///
struct Lister {
    comments: Vec<Comment>,
    failing_page: Option<usize>,
    requests: RefCell<Vec<usize>>,
}

impl Lister {
    fn new(comments: Vec<Comment>) -> Self {
        Self {
            comments,
            failing_page: None,
            requests: RefCell::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<usize> {
        self.requests.borrow().clone()
    }
}

impl CommentLister for Lister {
    fn list_comments(
        &self,
        _pull_request: u64,
        page: usize,
        per_page: usize,
    ) -> Result<Vec<Comment>, FetchError> {
        self.requests.borrow_mut().push(page);
        if self.failing_page == Some(page) {
            return Err(FetchError::Status {
                url: "https://api.github.com/repos/o/r/issues/1/comments".to_owned(),
                status: reqwest::StatusCode::BAD_GATEWAY,
                body: "Bad Gateway".to_owned(),
            });
        }
        Ok(self
            .comments
            .iter()
            .skip((page - 1) * per_page)
            .take(per_page)
            .cloned()
            .collect())
    }
}

fn report_comment(id: u64, run_id: &str) -> Comment {
    let mut report = RunReport::new(run_id, "abc1234");
    report.push(MethodResult::new("Token", "transfer", 100, 120, 110));
    Comment::new(id, codec::encode(&report, None))
}

fn chatter(id: u64) -> Comment {
    Comment::new(id, format!("comment #{id}"))
}

#[test]
fn highest_decodable_id_wins_regardless_of_order() {
    let lister = Lister::new(vec![
        chatter(5),
        report_comment(9, "run-9"),
        chatter(2),
        report_comment(3, "run-3"),
        chatter(7),
    ]);

    let previous = find_previous(1, &lister, 100)
        .expect("Always valid")
        .expect("Always exists");
    assert_eq!(previous.id, "run-9");
}

#[test]
fn only_decodable_comment_is_found() {
    let lister = Lister::new(vec![
        report_comment(12, "run-12"),
        chatter(3),
        chatter(40),
        Comment::new(41, "<table id=\"gas-report-table\"><tr><td>broken"),
    ]);

    let previous = find_previous(1, &lister, 100)
        .expect("Always valid")
        .expect("Always exists");
    assert_eq!(previous.id, "run-12");
    assert_eq!(
        previous.data,
        vec![MethodResult::new("Token", "transfer", 100, 120, 110)]
    );
}

#[test]
fn empty_history() {
    let lister = Lister::new(vec![]);
    assert_eq!(find_previous(1, &lister, 100).expect("Always valid"), None);
    assert_eq!(lister.requests(), vec![1]);
}

#[test]
fn no_reports() {
    let lister = Lister::new(vec![chatter(1), chatter(2), chatter(3)]);
    assert_eq!(find_previous(1, &lister, 2).expect("Always valid"), None);
    assert_eq!(lister.requests(), vec![1, 2]);
}

#[test]
fn keeps_scanning_later_pages() {
    let lister = Lister::new(vec![
        chatter(1),
        chatter(2),
        chatter(3),
        chatter(4),
        report_comment(5, "run-5"),
    ]);

    let previous = find_previous(1, &lister, 2)
        .expect("Always valid")
        .expect("Always exists");
    assert_eq!(previous.id, "run-5");
    assert_eq!(lister.requests(), vec![1, 2, 3]);
}

#[test]
fn stops_at_first_page_with_a_report() {
    let lister = Lister::new(vec![
        chatter(1),
        report_comment(2, "run-2"),
        report_comment(3, "run-3"),
        chatter(4),
    ]);

    let previous = find_previous(1, &lister, 2)
        .expect("Always valid")
        .expect("Always exists");
    assert_eq!(previous.id, "run-2");
    assert_eq!(lister.requests(), vec![1]);
}

#[test]
fn full_last_page_fetches_one_more() {
    let lister = Lister::new(vec![chatter(1), chatter(2)]);
    assert_eq!(find_previous(1, &lister, 2).expect("Always valid"), None);
    assert_eq!(lister.requests(), vec![1, 2]);
}

#[test]
fn fetch_failure_propagates() {
    let mut lister = Lister::new(vec![chatter(1), chatter(2), report_comment(3, "run-3")]);
    lister.failing_page = Some(2);

    assert!(matches!(
        find_previous(1, &lister, 2),
        Err(FetchError::Status { .. })
    ));
    assert_eq!(lister.requests(), vec![1, 2]);
}

#[test]
fn pages_are_sorted_newest_first() {
    let lister = Lister::new(vec![chatter(3), chatter(8), chatter(5)]);
    let pages: Vec<Vec<u64>> = CommentPages::new(&lister, 1, 100)
        .map(|page| {
            page.expect("Always valid")
                .into_iter()
                .map(|comment| comment.id)
                .collect()
        })
        .collect();
    assert_eq!(pages, vec![vec![8, 5, 3]]);
}

#[test]
fn pages_end_after_failure() {
    let mut lister = Lister::new(vec![chatter(1)]);
    lister.failing_page = Some(1);

    let mut pages = CommentPages::new(&lister, 1, 100);
    assert!(matches!(pages.next(), Some(Err(_))));
    assert!(pages.next().is_none());
}
