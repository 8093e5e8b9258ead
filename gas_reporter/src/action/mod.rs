//!
//! The reporting pipeline.
//!


use std::path::PathBuf;

use crate::codec;
use crate::context::RunContext;
use crate::github::pull_request::PullRequest;
use crate::github::Host;
use crate::history;
use crate::input::filter::Filter;
use crate::input::RawReport;
use crate::model::run_report::RunReport;
use crate::output::format::Format as OutputFormat;
use crate::output::Output;
use crate::publisher;

///
/// The pipeline configuration.
///
#[derive(Debug, Clone)]
pub struct Config {
    /// The gas report file.
    pub report_file: PathBuf,
    /// The contract allow-list.
    pub filter: Filter,
    /// The current run.
    pub context: RunContext,
    /// The process output format.
    pub output_format: OutputFormat,
    /// The process output name.
    pub output_name: String,
}

///
/// What a pipeline run produced.
///
#[derive(Debug)]
pub struct Outcome {
    /// The report of the current run.
    pub report: RunReport,
    /// The report the current run was compared against.
    pub previous: Option<RunReport>,
    /// The pull request the current run belongs to.
    pub pull_request: Option<PullRequest>,
    /// The rendered comment.
    pub comment: String,
    /// Whether the comment was posted.
    pub is_published: bool,
    /// The process output.
    pub output: Output,
}

///
/// Runs the pipeline: load, find the previous report, render, publish.
///
/// Without a host nothing leaves the process, but the comment is still rendered.
/// Failures to find the pull request or to read its history degrade to an uncompared report;
/// a failure to post the comment is fatal.
///
pub fn run<H>(config: &Config, host: Option<&H>) -> anyhow::Result<Outcome>
where
    H: Host + ?Sized,
{
    let raw = RawReport::try_from(config.report_file.as_path())?;
    let report = raw.to_run_report(&config.filter, &config.context)?;

    let mut previous = None;
    let mut pull_request = None;
    let mut is_published = false;
    let comment = match host {
        None => {
            tracing::info!("no token provided, skipping comment post");
            codec::encode(&report, None)
        }
        Some(host) => {
            pull_request = publisher::resolve_pull_request(host, config.context.commit.as_str());
            match pull_request.as_ref() {
                None => codec::encode(&report, None),
                Some(pull_request) => {
                    previous = match history::find_previous(
                        pull_request.number,
                        host,
                        crate::COMMENTS_PER_PAGE,
                    ) {
                        Ok(previous) => previous,
                        Err(error) => {
                            tracing::warn!(%error, "comment history unavailable, skipping comparison");
                            None
                        }
                    };
                    let comment = codec::encode(&report, previous.as_ref());
                    publisher::publish(host, pull_request, comment.as_str())?;
                    is_published = true;
                    comment
                }
            }
        }
    };

    let output = Output::build(
        config.output_name.as_str(),
        config.output_format,
        comment.as_str(),
        &raw,
        &config.filter,
    )?;

    Ok(Outcome {
        report,
        previous,
        pull_request,
        comment,
        is_published,
        output,
    })
}
