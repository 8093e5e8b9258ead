//!
//! The named process output.
//!

pub mod format;


use std::io::Write;
use std::path::Path;

use crate::input::filter::Filter;
use crate::input::RawReport;

use self::format::Format;

///
/// The named value handed to the surrounding pipeline.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    /// The output name.
    pub name: String,
    /// The output value.
    pub value: String,
}

impl Output {
    /// Terminates multiline values in the output file.
    const DELIMITER: &'static str = "ghadelimiter_gas_reporter";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    ///
    /// Builds the output in the requested format.
    ///
    /// `html` is the rendered comment; the JSON format lists the raw records passing the filter.
    ///
    pub fn build(
        name: &str,
        format: Format,
        html: &str,
        raw: &RawReport,
        filter: &Filter,
    ) -> anyhow::Result<Self> {
        let value = match format {
            Format::Html => html.to_owned(),
            Format::Json => serde_json::to_string(&raw.matching(filter).collect::<Vec<_>>())?,
        };
        Ok(Self::new(name, value))
    }

    ///
    /// Appends the output to the file in the `name=value` notation of the CI runner.
    ///
    pub fn write_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|error| anyhow::anyhow!("Output file {path:?} opening: {error}"))?;
        file.write_all(self.to_string().as_bytes())
            .map_err(|error| anyhow::anyhow!("Output file {path:?} writing: {error}"))?;
        Ok(())
    }
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.value.contains(|character: char| matches!(character, '\n' | '\r')) {
            writeln!(f, "{}<<{}", self.name, Self::DELIMITER)?;
            writeln!(f, "{}", self.value)?;
            writeln!(f, "{}", Self::DELIMITER)
        } else {
            writeln!(f, "{}={}", self.name, self.value)
        }
    }
}
