pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{InputSource, LocalStorage, ReqwestFetcher};
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::{
    etl::{EtlEngine, RunOutput},
    pipeline::LeadPipeline,
    processor::LeadProcessor,
    scorer::RelevanceScorer,
};
pub use crate::domain::model::{AiScore, CanonicalDomain, EnrichedLead, RawLead, ReportRowSet};
pub use crate::domain::services::{is_valid_domain, normalize_domain};
pub use crate::utils::error::{LeadError, Result};

use crate::domain::ports::ConfigProvider;

/// Wire the production adapters for a validated configuration.
pub fn build_pipeline<C: ConfigProvider>(
    config: &C,
) -> Result<LeadPipeline<LocalStorage, InputSource, ReqwestFetcher>> {
    let source = InputSource::from_path(config.input_path())?;
    let fetcher = ReqwestFetcher::new(config.request_timeout(), config.user_agent())?;
    let storage = LocalStorage::new(config.output_path());

    Ok(LeadPipeline::new(storage, source, fetcher, config))
}
