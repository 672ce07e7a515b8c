//! World Seed Service - Runs a complete configuration build pass
//!
//! Map tables run strictly one after another against a single fresh
//! configuration, because later maps may spawn species registered by
//! earlier ones. The first error aborts the pass: an incomplete world is
//! not deployable.

use anyhow::{Context, Result};
use tracing::{debug, info, instrument};

use crate::application::ports::outbound::ConfigurationSinkPort;
use crate::application::services::map_initializer::{MapInitializer, MapTable};
use crate::domain::aggregates::{AttributeCatalog, GameConfiguration};

/// Builds game configurations from map tables
pub struct WorldSeedService {
    catalog: AttributeCatalog,
}

impl WorldSeedService {
    /// Create a service seeding every pass with `catalog`
    pub fn new(catalog: AttributeCatalog) -> Self {
        Self { catalog }
    }

    /// Build and verify a configuration from `tables`, in order
    #[instrument(skip_all, fields(maps = tables.len()))]
    pub fn seed(&self, tables: Vec<MapTable>) -> Result<GameConfiguration> {
        let mut config = GameConfiguration::new(self.catalog.clone());

        for table in tables {
            let initializer = MapInitializer::new(table);
            let context = format!(
                "Failed to initialize map {} ({})",
                initializer.name(),
                initializer.number()
            );
            let summary = initializer.run(&mut config).context(context)?;
            debug!(
                map = %summary.name,
                monsters = summary.monsters_created,
                spawn_areas = summary.spawn_areas,
                "Map contribution registered"
            );
        }

        config
            .verify()
            .context("Game configuration failed integrity verification")?;

        info!(summary = %config.summary(), "Game configuration built");
        Ok(config)
    }

    /// Build a configuration and hand it to `sink`
    pub fn seed_and_store(
        &self,
        tables: Vec<MapTable>,
        sink: &dyn ConfigurationSinkPort,
    ) -> Result<GameConfiguration> {
        let config = self.seed(tables)?;
        sink
            .store(&config)
            .context("Failed to store game configuration")?;
        Ok(config)
    }
}
