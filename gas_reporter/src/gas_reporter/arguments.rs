//!
//! The gas reporter arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The gas reporter arguments.
///
/// Every option also reads the variables set by the CI runner, so the binary works as an action step.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Suppresses the terminal summary.
    #[arg(short, long)]
    pub quiet: bool,

    /// The gas report JSON file.
    #[arg(long, env = "INPUT_REPORT_FILE")]
    pub report_file: PathBuf,

    /// Comma-separated contracts to report. All contracts are reported if empty.
    #[arg(long, env = "INPUT_CONTRACTS", default_value = "")]
    pub contracts: gas_reporter::ContractFilter,

    /// The API token. Without it, the report is only rendered.
    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// The CI run identifier.
    #[arg(long, env = "GITHUB_RUN_ID", default_value = "local")]
    pub run_id: String,

    /// The measured commit.
    #[arg(long, env = "GITHUB_SHA", default_value = "unknown")]
    pub commit: String,

    /// The repository as `owner/name`. Required with a token.
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<gas_reporter::Repository>,

    /// The API root.
    #[arg(long, env = "GITHUB_API_URL", default_value = gas_reporter::GitHubClient::DEFAULT_API_URL)]
    pub api_url: String,

    /// Process output format: `html` or `json`.
    #[arg(long, env = "INPUT_OUTPUT_FORMAT", default_value_t = gas_reporter::OutputFormat::Html)]
    pub output_format: gas_reporter::OutputFormat,

    /// Process output name.
    #[arg(long, default_value = gas_reporter::DEFAULT_OUTPUT_NAME)]
    pub output_name: String,

    /// The file the process output is appended to. If unset, the value is printed to `stdout`.
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub output_file: Option<PathBuf>,
}

impl Arguments {
    ///
    /// Returns the non-empty token, falling back to `GITHUB_TOKEN`.
    ///
    pub fn token(&self) -> Option<String> {
        self.token
            .clone()
            .or_else(|| std::env::var("GITHUB_TOKEN").ok())
            .filter(|token| !token.trim().is_empty())
    }
}
