//!
//! Gas report reading error.
//!

use std::path::PathBuf;

///
/// Gas report reading error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading the report file.
    #[error("Reading report file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the report file.
        path: PathBuf,
    },
    /// Error parsing the report file.
    #[error("Parsing report file {path:?}: {error}")]
    Parsing {
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The path to the report file.
        path: PathBuf,
    },
    /// The report has no `info.methods` object.
    #[error("Report file {path:?} has no `info.methods` object")]
    MissingMethods {
        /// The path to the report file.
        path: PathBuf,
    },
    /// Empty file error.
    #[error("Report file {path:?} is empty")]
    Empty {
        /// The path to the report file.
        path: PathBuf,
    },
    /// A called method has no gas measurements, so its statistics are undefined.
    #[error("Report file {path:?}: method `{contract}::{method}` has calls but no gas data")]
    EmptyGasData {
        /// The path to the report file.
        path: PathBuf,
        /// Contract name.
        contract: String,
        /// Method name.
        method: String,
    },
}
