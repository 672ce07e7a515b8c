//! WorldSeed - Builds the world configuration and exports it as JSON

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use worldseed::application::services::WorldSeedService;
use worldseed::infrastructure::config::AppConfig;
use worldseed::infrastructure::export::JsonFileExporter;
use worldseed::infrastructure::seed_data::{all_maps, standard_catalog};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "worldseed=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting WorldSeed");

    let config = AppConfig::from_env()?;
    tracing::info!("Configuration loaded");
    tracing::info!("  Output: {}", config.output_path.display());
    tracing::info!("  Pretty: {}", config.pretty);

    let service = WorldSeedService::new(standard_catalog());
    let configuration = if config.skip_export {
        tracing::warn!("Export disabled, validating only");
        service.seed(all_maps())?
    } else {
        let exporter = JsonFileExporter::new(config.output_path).pretty(config.pretty);
        service.seed_and_store(all_maps(), &exporter)?
    };

    tracing::info!("World configuration ready: {}", configuration.summary());
    Ok(())
}
