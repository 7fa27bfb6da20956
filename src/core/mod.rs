pub mod etl;
pub mod pipeline;
pub mod processor;
pub mod scorer;

pub use crate::domain::model::{
    AiScore, CanonicalDomain, EnrichedLead, FetchFailure, FetchedPage, RawLead, ReportRowSet,
};
pub use crate::domain::ports::{ConfigProvider, LeadSource, PageFetcher, Pipeline, Storage};
pub use crate::utils::error::Result;
