//!
//! The raw gas report, as produced by the benchmarking tool.
//!

pub mod error;
pub mod filter;
pub mod method;

#[cfg(test)]
mod tests;

use std::path::Path;
use std::path::PathBuf;

use crate::context::RunContext;
use crate::model::method_result::MethodResult;
use crate::model::run_report::RunReport;

use self::error::Error as InputError;
use self::filter::Filter;
use self::method::Method;

///
/// The raw gas report.
///
/// Only `info.methods` is read. Method records keep the order of the source file.
///
#[derive(Debug)]
pub struct RawReport {
    /// The report file path.
    pub path: PathBuf,
    /// The method records, by their opaque key.
    pub methods: Vec<(String, Method)>,
}

impl RawReport {
    ///
    /// Parses the report text. `path` is only used for error reporting.
    ///
    pub fn parse(path: &Path, text: &str) -> Result<Self, InputError> {
        if text.trim().is_empty() {
            return Err(InputError::Empty {
                path: path.to_path_buf(),
            });
        }
        let mut json: serde_json::Value =
            serde_json::from_str(text).map_err(|error| InputError::Parsing {
                error,
                path: path.to_path_buf(),
            })?;
        let methods = match json
            .get_mut("info")
            .and_then(|info| info.get_mut("methods"))
            .and_then(serde_json::Value::as_object_mut)
        {
            Some(methods) => std::mem::take(methods),
            None => {
                return Err(InputError::MissingMethods {
                    path: path.to_path_buf(),
                })
            }
        };

        let methods = methods
            .into_iter()
            .map(|(key, value)| {
                serde_json::from_value::<Method>(value)
                    .map(|method| (key, method))
                    .map_err(|error| InputError::Parsing {
                        error,
                        path: path.to_path_buf(),
                    })
            })
            .collect::<Result<Vec<(String, Method)>, InputError>>()?;

        Ok(Self {
            path: path.to_path_buf(),
            methods,
        })
    }

    ///
    /// Returns the records that pass the contract filter and were called at least once.
    ///
    pub fn matching<'a>(&'a self, filter: &'a Filter) -> impl Iterator<Item = &'a Method> + 'a {
        self.methods
            .iter()
            .map(|(_key, method)| method)
            .filter(move |method| filter.allows(method.contract.as_str()))
            .filter(|method| !method.is_inert())
    }

    ///
    /// Projects the matching records into the normalized report of the current run.
    ///
    pub fn to_run_report(
        &self,
        filter: &Filter,
        context: &RunContext,
    ) -> Result<RunReport, InputError> {
        let mut report = RunReport::new(context.run_id.as_str(), context.commit.as_str());
        for method in self.matching(filter) {
            let (min, max, avg) = method.statistics().ok_or_else(|| InputError::EmptyGasData {
                path: self.path.clone(),
                contract: method.contract.clone(),
                method: method.method.clone(),
            })?;
            report.push(MethodResult::new(
                method.contract.as_str(),
                method.method.as_str(),
                min,
                max,
                avg,
            ));
        }
        tracing::info!(
            path = %self.path.display(),
            records = self.methods.len(),
            methods = report.len(),
            "loaded gas report"
        );
        Ok(report)
    }
}

impl TryFrom<&Path> for RawReport {
    type Error = InputError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| InputError::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        Self::parse(path, text.as_str())
    }
}

///
/// Reads the report at `path` and normalizes it for the current run.
///
pub fn load(path: &Path, filter: &Filter, context: &RunContext) -> Result<RunReport, InputError> {
    RawReport::try_from(path)?.to_run_report(filter, context)
}
