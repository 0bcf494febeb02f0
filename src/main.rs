use anyhow::{Context, Result};
use clap::Parser;
use synchro_cosmetics::{
    cli::Cli,
    config::{LoggingSettings, Settings},
    report, RecommendationEngine, TabularDataset,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    // stdout carries the report, logs go to stderr
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "json" => subscriber.json().init(),
        _ => subscriber.init(),
    }
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
    .context("Failed to load configuration")?;
    cli.apply(&mut settings);
    settings.validate().context("Invalid configuration")?;

    init_logging(&settings.logging);

    info!("Starting SynchroCosmetics report generation...");

    let audience = TabularDataset::from_path(&settings.data.audience_path)
        .with_context(|| format!("Failed to load audience data from {}", settings.data.audience_path))?;
    let catalog = TabularDataset::from_path(&settings.data.catalog_path)
        .with_context(|| format!("Failed to load product catalog from {}", settings.data.catalog_path))?;

    info!(
        "Datasets loaded: {} audience records, {} products",
        audience.len(),
        catalog.len()
    );

    let engine = RecommendationEngine::new(&audience, &catalog)?;
    let report = engine.report(settings.report.top_n);

    info!(
        "{} products fit the audience, listing {}",
        report.total_matching,
        report.recommendations.len()
    );

    let rendered = report::render(&report, settings.report.format)?;
    println!("{}", rendered);

    if settings.report.save_to_file {
        report::write_report(&settings.report.output_path, &rendered)?;
    }

    Ok(())
}
