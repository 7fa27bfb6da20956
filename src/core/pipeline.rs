use crate::adapters::report::render_csv;
use crate::core::processor::LeadProcessor;
use crate::core::{ConfigProvider, LeadSource, PageFetcher, Pipeline, RawLead, ReportRowSet, Storage};
use crate::utils::error::Result;

pub struct LeadPipeline<S: Storage, L: LeadSource, F: PageFetcher> {
    pub(crate) storage: S,
    pub(crate) source: L,
    pub(crate) processor: LeadProcessor<F>,
    pub(crate) output_file: String,
}

impl<S: Storage, L: LeadSource, F: PageFetcher> LeadPipeline<S, L, F> {
    pub fn new<C: ConfigProvider>(storage: S, source: L, fetcher: F, config: &C) -> Self {
        Self {
            storage,
            source,
            processor: LeadProcessor::with_concurrency(fetcher, config.concurrent_requests()),
            output_file: config.output_file().to_string(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, L: LeadSource, F: PageFetcher> Pipeline for LeadPipeline<S, L, F> {
    async fn extract(&self) -> Result<Vec<RawLead>> {
        let leads = self.source.load_leads().await?;
        tracing::debug!("Loaded {} raw leads", leads.len());
        Ok(leads)
    }

    async fn transform(&self, leads: Vec<RawLead>) -> Result<ReportRowSet> {
        Ok(self.processor.process(&leads).await)
    }

    async fn load(&self, report: &ReportRowSet) -> Result<String> {
        let csv_data = render_csv(report)?;
        tracing::debug!(
            "Writing {} rows ({} bytes) to {}",
            report.len(),
            csv_data.len(),
            self.output_file
        );
        self.storage.write_file(&self.output_file, &csv_data).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{FetchFailure, FetchedPage};
    use crate::utils::error::LeadError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::Mutex;
    use url::Url;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(format!("memory://{}", path))
        }
    }

    struct MockSource(Vec<RawLead>);

    impl LeadSource for MockSource {
        async fn load_leads(&self) -> Result<Vec<RawLead>> {
            Ok(self.0.clone())
        }
    }

    struct BrokenSource;

    impl LeadSource for BrokenSource {
        async fn load_leads(&self) -> Result<Vec<RawLead>> {
            Err(LeadError::input("leads.xml is not a supported input"))
        }
    }

    /// Serves `<p>{host}</p>` for every host except those starting with `down.`.
    struct EchoFetcher;

    #[async_trait]
    impl PageFetcher for EchoFetcher {
        async fn fetch(&self, url: &Url) -> std::result::Result<FetchedPage, FetchFailure> {
            let host = url.host_str().unwrap_or_default();
            if host.starts_with("down.") {
                return Err(FetchFailure::Connect("connection refused".to_string()));
            }
            Ok(FetchedPage {
                status: 200,
                body: format!("<p>{}</p>", host),
            })
        }
    }

    struct MockConfig {
        output_file: String,
    }

    impl ConfigProvider for MockConfig {
        fn input_path(&self) -> Option<&str> {
            None
        }

        fn output_path(&self) -> &str {
            "test_output"
        }

        fn output_file(&self) -> &str {
            &self.output_file
        }

        fn request_timeout(&self) -> Duration {
            Duration::from_secs(5)
        }

        fn concurrent_requests(&self) -> usize {
            2
        }

        fn user_agent(&self) -> &str {
            "lead-scorer-test"
        }
    }

    fn config() -> MockConfig {
        MockConfig {
            output_file: "leads_output.csv".to_string(),
        }
    }

    #[tokio::test]
    async fn test_extract_passes_leads_through() {
        let leads = vec![RawLead::new("OpenAI", "openai.com")];
        let pipeline =
            LeadPipeline::new(MockStorage::new(), MockSource(leads.clone()), EchoFetcher, &config());

        assert_eq!(pipeline.extract().await.unwrap(), leads);
    }

    #[tokio::test]
    async fn test_extract_propagates_source_errors() {
        let pipeline = LeadPipeline::new(MockStorage::new(), BrokenSource, EchoFetcher, &config());

        let err = pipeline.extract().await.unwrap_err();
        assert!(matches!(err, LeadError::InputError { .. }));
    }

    #[tokio::test]
    async fn test_transform_scores_from_page_text() {
        let leads = vec![
            // the echoed host "mainframe.ai" contains "ai"
            RawLead::new("Mainframe", "mainframe.ai"),
            RawLead::new("Down", "down.example.com"),
        ];
        let pipeline = LeadPipeline::new(MockStorage::new(), MockSource(vec![]), EchoFetcher, &config());

        let rows = pipeline.transform(leads).await.unwrap().into_vec();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].ai_score.value(), 1);
        assert_eq!(rows[1].ai_score.value(), 0);
        assert!(rows[1].domain_valid);
    }

    #[tokio::test]
    async fn test_load_writes_csv_to_storage() {
        let storage = MockStorage::new();
        let pipeline = LeadPipeline::new(storage.clone(), MockSource(vec![]), EchoFetcher, &config());

        let report = pipeline
            .transform(vec![
                RawLead::new("Solid", "solid.com"),
                RawLead::new("Solid Again", "https://SOLID.com/"),
            ])
            .await
            .unwrap();
        let location = pipeline.load(&report).await.unwrap();

        assert_eq!(location, "memory://leads_output.csv");
        let written = storage.get_file("leads_output.csv").await.unwrap();
        let csv_text = String::from_utf8(written).unwrap();
        assert_eq!(
            csv_text,
            "Company,Domain,Domain Valid,AI Score (0-5)\nSolid,solid.com,True,0\n"
        );
    }
}
