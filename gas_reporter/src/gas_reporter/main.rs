//!
//! The gas reporter binary.
//!

pub(crate) mod arguments;

use std::time::Duration;
use std::time::Instant;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    let exit_code = match Arguments::try_parse()
        .map_err(|error| anyhow::anyhow!(error))
        .and_then(main_inner)
    {
        Ok(()) => gas_reporter::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            gas_reporter::EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let start = Instant::now();
    if !arguments.quiet {
        eprintln!(
            "    {} {} v{}",
            "Starting".bright_green().bold(),
            env!("CARGO_PKG_DESCRIPTION"),
            env!("CARGO_PKG_VERSION"),
        );
    }

    let context = gas_reporter::RunContext::new(
        arguments.run_id.clone(),
        arguments.commit.clone(),
        arguments.repository.clone(),
    );
    tracing::debug!(?context, "run context");

    let host = match arguments.token() {
        Some(token) => {
            let repository = context.repository.clone().ok_or_else(|| {
                anyhow::anyhow!("The repository must be set with `--repository` or `GITHUB_REPOSITORY`")
            })?;
            let mut http_client_builder = reqwest::blocking::ClientBuilder::new();
            http_client_builder = http_client_builder.connect_timeout(Duration::from_secs(60));
            http_client_builder = http_client_builder.timeout(Duration::from_secs(60));
            let http_client = http_client_builder.build()?;
            Some(gas_reporter::GitHubClient::new(
                http_client,
                arguments.api_url.as_str(),
                repository,
                token,
            ))
        }
        None => None,
    };

    let config = gas_reporter::ActionConfig {
        report_file: arguments.report_file.clone(),
        filter: arguments.contracts.clone(),
        context,
        output_format: arguments.output_format,
        output_name: arguments.output_name.clone(),
    };
    let outcome = gas_reporter::action::run(&config, host.as_ref())?;

    match arguments.output_file.as_deref() {
        Some(path) => outcome.output.write_to_file(path)?,
        None => println!("{}", outcome.output.value),
    }

    if !arguments.quiet {
        let status = match outcome.pull_request.as_ref() {
            Some(pull_request) if outcome.is_published => format!(
                "{} gas report of {} methods to #{}",
                "Published".bright_green().bold(),
                outcome.report.len(),
                pull_request.number,
            ),
            _ => format!(
                "{} gas report of {} methods",
                " Rendered".bright_green().bold(),
                outcome.report.len(),
            ),
        };
        eprintln!("{status}");
        if let Some(previous) = outcome.previous.as_ref() {
            eprintln!(
                "   {} against run {} ({})",
                "Compared".bright_green().bold(),
                previous.id,
                previous.commit,
            );
        }
        eprintln!(
            "    {} in {}.{:03}s",
            "Finished".bright_green().bold(),
            start.elapsed().as_secs(),
            start.elapsed().subsec_millis(),
        );
    }

    Ok(())
}
