use async_trait::async_trait;
use lead_scorer::core::{FetchFailure, FetchedPage, PageFetcher};
use lead_scorer::{EtlEngine, InputSource, LeadPipeline, LocalStorage, TomlConfig};
use std::collections::HashMap;
use tempfile::TempDir;
use url::Url;

/// Deterministic stand-in for the network: known hosts serve fixed HTML, the rest fail to connect.
struct StubFetcher {
    pages: HashMap<&'static str, (u16, &'static str)>,
}

impl StubFetcher {
    fn new(pages: &[(&'static str, u16, &'static str)]) -> Self {
        Self {
            pages: pages
                .iter()
                .map(|(host, status, body)| (*host, (*status, *body)))
                .collect(),
        }
    }
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchFailure> {
        let host = url.host_str().unwrap_or_default();
        match self.pages.get(host) {
            Some((status, body)) => Ok(FetchedPage {
                status: *status,
                body: body.to_string(),
            }),
            None => Err(FetchFailure::Connect(format!("dns error: {}", host))),
        }
    }
}

fn seed_fetcher() -> StubFetcher {
    StubFetcher::new(&[
        (
            "openai.com",
            200,
            "<html><head><title>OpenAI</title></head>\
             <body><h1>Artificial intelligence research</h1>\
             <p>Machine learning, automation and data science.</p></body></html>",
        ),
        (
            "capraecapital.com",
            200,
            "<html><body><p>We bring AI automation to private equity.</p></body></html>",
        ),
    ])
}

fn read_csv(path: &std::path::Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .unwrap();
    reader
        .records()
        .map(|record| record.unwrap().iter().map(str::to_string).collect())
        .collect()
}

fn config_for(output_path: &str, extra: &str) -> TomlConfig {
    TomlConfig::from_toml_str(&format!(
        "{}\n[load]\noutput_path = \"{}\"\noutput_file = \"leads_output.csv\"\n",
        extra,
        output_path.replace('\\', "/")
    ))
    .unwrap()
}

#[tokio::test]
async fn test_end_to_end_seed_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();
    let config = config_for(&output_path, "");

    let pipeline = LeadPipeline::new(
        LocalStorage::new(output_path.clone()),
        InputSource::Seed,
        seed_fetcher(),
        &config,
    );
    let output = EtlEngine::new(pipeline).run().await.unwrap();

    assert_eq!(output.leads_read, 4);
    assert_eq!(output.report.len(), 3);
    assert!(output.output_path.ends_with("leads_output.csv"));

    let rows = read_csv(&temp_dir.path().join("leads_output.csv"));
    assert_eq!(
        rows,
        vec![
            vec!["Company", "Domain", "Domain Valid", "AI Score (0-5)"],
            vec!["OpenAI", "openai.com", "True", "5"],
            vec!["Caprae Capital", "capraecapital.com", "True", "2"],
            // syntactically valid, but nothing answers: score falls back to 0
            vec!["Invalid Example", "notarealdomain.abc", "True", "0"],
        ]
    );
}

#[tokio::test]
async fn test_end_to_end_json_input_with_duplicates_and_skips() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("out").to_str().unwrap().to_string();
    let input_path = temp_dir.path().join("leads.json");
    std::fs::write(
        &input_path,
        r#"[
            {"name": "Caprae", "domain": "HTTPS://CapraeCapital.com/team"},
            {"name": "No Domain", "domain": null},
            {"name": "Protocol Only", "domain": "https:///"},
            {"name": "Broken", "domain": "not a domain"},
            {"name": "Caprae Again", "domain": "capraecapital.com"},
            {"domain": "openai.com/"}
        ]"#,
    )
    .unwrap();

    let config = config_for(
        &output_path,
        &format!(
            "[source]\ninput = \"{}\"\n[scoring]\nconcurrent_requests = 3\n",
            input_path.to_str().unwrap().replace('\\', "/")
        ),
    );
    let source = InputSource::from_path(Some(input_path.to_str().unwrap())).unwrap();
    let pipeline = LeadPipeline::new(
        LocalStorage::new(output_path.clone()),
        source,
        seed_fetcher(),
        &config,
    );

    let output = EtlEngine::new(pipeline).run().await.unwrap();

    assert_eq!(output.leads_read, 6);
    let rows = read_csv(&temp_dir.path().join("out").join("leads_output.csv"));
    assert_eq!(
        rows,
        vec![
            vec!["Company", "Domain", "Domain Valid", "AI Score (0-5)"],
            vec!["Caprae", "capraecapital.com", "True", "2"],
            vec!["Broken", "not a domain", "False", "0"],
            vec!["", "openai.com", "True", "5"],
        ]
    );
}

#[tokio::test]
async fn test_end_to_end_all_fetches_fail() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();
    let config = config_for(&output_path, "");

    let pipeline = LeadPipeline::new(
        LocalStorage::new(output_path),
        InputSource::Seed,
        StubFetcher::new(&[("openai.com", 503, "<p>AI</p>")]),
        &config,
    );
    let output = EtlEngine::new(pipeline).run().await.unwrap();

    assert_eq!(output.report.len(), 3);
    assert!(output.report.iter().all(|row| row.ai_score.value() == 0));
}

#[tokio::test]
async fn test_missing_input_file_fails_the_run() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();
    let config = config_for(&output_path, "");

    let pipeline = LeadPipeline::new(
        LocalStorage::new(output_path),
        InputSource::Csv(temp_dir.path().join("missing.csv")),
        seed_fetcher(),
        &config,
    );
    let result = EtlEngine::new(pipeline).run().await;

    assert!(matches!(result, Err(lead_scorer::LeadError::IoError(_))));
    assert!(!temp_dir.path().join("leads_output.csv").exists());
}
