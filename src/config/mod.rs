pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, validate_range,
};
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub use crate::adapters::http::DEFAULT_USER_AGENT;

pub const DEFAULT_OUTPUT_FILE: &str = "leads_output.csv";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 5;
pub const MAX_TIMEOUT_SECONDS: u64 = 120;
pub const MAX_CONCURRENT_REQUESTS: usize = 64;

const INPUT_EXTENSIONS: [&str; 2] = ["csv", "json"];

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "lead-scorer")]
#[command(about = "Normalize, validate and AI-score company domains, then write a CSV report")]
pub struct CliConfig {
    /// Leads file (.csv or .json); the built-in sample list is used when omitted
    #[arg(short, long)]
    pub input: Option<String>,

    /// TOML configuration file; --input still overrides its source
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, default_value = ".")]
    pub output_path: String,

    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: String,

    /// Per-request timeout for homepage fetches
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    /// Homepage fetches in flight at once; 1 keeps the run sequential
    #[arg(long, default_value_t = 1)]
    pub concurrent_requests: usize,

    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> Option<&str> {
        self.input.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn concurrent_requests(&self) -> usize {
        self.concurrent_requests
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_settings(
            self,
            &SettingNames {
                input: "--input",
                output_path: "--output-path",
                output_file: "--output-file",
                timeout: "--timeout-seconds",
                concurrency: "--concurrent-requests",
                user_agent: "--user-agent",
            },
        )
    }
}

/// How each setting is named in error messages for a given config surface.
pub(crate) struct SettingNames {
    pub input: &'static str,
    pub output_path: &'static str,
    pub output_file: &'static str,
    pub timeout: &'static str,
    pub concurrency: &'static str,
    pub user_agent: &'static str,
}

pub(crate) fn validate_settings<C: ConfigProvider>(config: &C, names: &SettingNames) -> Result<()> {
    if let Some(input) = config.input_path() {
        validate_path(names.input, input)?;
        validate_file_extension(names.input, input, &INPUT_EXTENSIONS)?;
    }

    validate_path(names.output_path, config.output_path())?;
    validate_path(names.output_file, config.output_file())?;
    validate_range(
        names.timeout,
        config.request_timeout().as_secs(),
        1,
        MAX_TIMEOUT_SECONDS,
    )?;
    validate_range(
        names.concurrency,
        config.concurrent_requests(),
        1,
        MAX_CONCURRENT_REQUESTS,
    )?;
    validate_non_empty_string(names.user_agent, config.user_agent())?;

    Ok(())
}
