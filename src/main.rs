use anyhow::Context;
use clap::Parser;
use lead_scorer::adapters::report::render_table;
use lead_scorer::core::ConfigProvider;
use lead_scorer::utils::error::ErrorSeverity;
use lead_scorer::utils::{logger, validation::Validate};
use lead_scorer::{build_pipeline, CliConfig, EtlEngine, LeadError, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting lead-scorer");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match cli.config.clone() {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            let config = TomlConfig::from_file(&path)
                .with_context(|| format!("failed to load config file '{}'", path))?
                .with_input_override(cli.input.clone());
            run(config).await
        }
        None => run(cli).await,
    };

    if let Err(e) = result {
        tracing::error!(
            "Run failed: {} (Severity: {:?})",
            e,
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run<C: ConfigProvider + Validate>(config: C) -> Result<(), LeadError> {
    config.validate()?;

    let pipeline = build_pipeline(&config)?;
    let output = EtlEngine::new(pipeline).run().await?;

    println!(
        "✔ Lead data processed ({} leads in, {} rows out) and saved to {}",
        output.leads_read,
        output.report.len(),
        output.output_path
    );
    println!("{}", render_table(&output.report));

    Ok(())
}
