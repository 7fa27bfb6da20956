use crate::core::{LeadSource, RawLead};
use crate::utils::error::{LeadError, Result};
use std::path::{Path, PathBuf};

/// Where raw leads come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// The built-in sample list.
    Seed,
    /// CSV with `name` and `domain` header columns.
    Csv(PathBuf),
    /// JSON array of `{"name": ..., "domain": ...}` objects.
    Json(PathBuf),
}

impl InputSource {
    /// Pick a reader from the file extension; no path means the seed list.
    pub fn from_path(path: Option<&str>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(InputSource::Seed);
        };

        let extension = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("csv") => Ok(InputSource::Csv(PathBuf::from(path))),
            Some("json") => Ok(InputSource::Json(PathBuf::from(path))),
            _ => Err(LeadError::input(format!(
                "cannot tell the format of '{}': expected a .csv or .json file",
                path
            ))),
        }
    }
}

impl LeadSource for InputSource {
    async fn load_leads(&self) -> Result<Vec<RawLead>> {
        match self {
            InputSource::Seed => Ok(seed_leads()),
            InputSource::Csv(path) => {
                tracing::debug!("Reading CSV leads from {}", path.display());
                parse_csv_leads(&tokio::fs::read(path).await?)
            }
            InputSource::Json(path) => {
                tracing::debug!("Reading JSON leads from {}", path.display());
                parse_json_leads(&tokio::fs::read(path).await?)
            }
        }
    }
}

pub fn seed_leads() -> Vec<RawLead> {
    vec![
        RawLead::new("OpenAI", "openai.com"),
        RawLead::new("Caprae Capital", "capraecapital.com"),
        RawLead::new("OpenAI Duplicate", "https://openai.com/"),
        RawLead::new("Invalid Example", "notarealdomain.abc"),
    ]
}

/// Empty cells read as absent values; columns other than `name` and `domain` are ignored.
pub fn parse_csv_leads(data: &[u8]) -> Result<Vec<RawLead>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(data);

    let headers = reader.headers()?;
    if !headers.iter().any(|header| header == "domain") {
        return Err(LeadError::input("CSV input has no 'domain' column"));
    }

    reader
        .deserialize()
        .map(|row| row.map_err(LeadError::from))
        .collect()
}

pub fn parse_json_leads(data: &[u8]) -> Result<Vec<RawLead>> {
    Ok(serde_json::from_slice(data)?)
}
