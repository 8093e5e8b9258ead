//!
//! Report comment decoding error.
//!

use crate::codec::anchor::Anchor;
use crate::codec::column::Column;

///
/// Report comment decoding error.
///
/// Never surfaces past the history scan: a comment that fails to decode is not a report.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required anchor is absent.
    #[error("Anchor `{0}` is missing")]
    MissingAnchor(Anchor),
    /// The table has no header for a data column.
    #[error("Table column `{0}` is missing")]
    MissingColumn(Column),
    /// A row is shorter than the header.
    #[error("Table row {row} has no `{column}` cell")]
    MissingCell {
        /// The data row index.
        row: usize,
        /// The missing column.
        column: Column,
    },
    /// A numeric cell does not hold an integer.
    #[error("Table row {row} column `{column}` value `{value}` is not an integer: {error}")]
    Integer {
        /// The data row index.
        row: usize,
        /// The offending column.
        column: Column,
        /// The cell text.
        value: String,
        /// The underlying parsing error.
        error: std::num::ParseIntError,
    },
}
