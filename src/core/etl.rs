use crate::core::{Pipeline, ReportRowSet};
use crate::utils::error::Result;

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub output_path: String,
    pub leads_read: usize,
    pub report: ReportRowSet,
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunOutput> {
        tracing::info!("Starting lead scoring run");

        tracing::info!("Extracting leads...");
        let leads = self.pipeline.extract().await?;
        let leads_read = leads.len();
        tracing::info!("Extracted {} leads", leads_read);

        tracing::info!("Scoring leads...");
        let report = self.pipeline.transform(leads).await?;
        tracing::info!(
            "Scored {} unique domains ({} leads skipped or duplicated)",
            report.len(),
            leads_read - report.len()
        );

        tracing::info!("Writing report...");
        let output_path = self.pipeline.load(&report).await?;
        tracing::info!("Report saved to: {}", output_path);

        Ok(RunOutput {
            output_path,
            leads_read,
            report,
        })
    }
}
