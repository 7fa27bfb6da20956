use crate::domain::model::{FetchFailure, FetchedPage, RawLead, ReportRowSet};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;
use url::Url;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait LeadSource: Send + Sync {
    fn load_leads(&self) -> impl std::future::Future<Output = Result<Vec<RawLead>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> Option<&str>;
    fn output_path(&self) -> &str;
    fn output_file(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn concurrent_requests(&self) -> usize;
    fn user_agent(&self) -> &str;
}

/// Single GET of a page. Transport problems are reported as [`FetchFailure`];
/// any HTTP status, including errors, comes back as a [`FetchedPage`].
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> std::result::Result<FetchedPage, FetchFailure>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<RawLead>>;
    async fn transform(&self, leads: Vec<RawLead>) -> Result<ReportRowSet>;
    async fn load(&self, report: &ReportRowSet) -> Result<String>;
}
