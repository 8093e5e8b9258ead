//!
//! The machine-readable anchors of a report comment.
//!

///
/// The machine-readable anchors of a report comment, addressed by HTML `id`.
///
/// Changing an identifier breaks decoding of every comment posted before the change.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Holds the run identifier as text.
    RunId,
    /// Holds the commit identifier as text.
    Commit,
    /// The results table.
    Table,
}

impl Anchor {
    ///
    /// Returns the HTML `id` of the anchor.
    ///
    pub fn id(&self) -> &'static str {
        match self {
            Self::RunId => "gas-report-run-id",
            Self::Commit => "gas-report-commit",
            Self::Table => "gas-report-table",
        }
    }

    ///
    /// Returns the CSS selector matching the anchor.
    ///
    pub fn selector(&self) -> scraper::Selector {
        scraper::Selector::parse(format!("#{}", self.id()).as_str()).expect("Always valid")
    }
}

impl std::fmt::Display for Anchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.id())
    }
}
