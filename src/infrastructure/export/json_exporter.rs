//! JSON file exporter - Writes configuration snapshots to disk

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::application::ports::outbound::ConfigurationSinkPort;
use crate::domain::aggregates::GameConfiguration;
use crate::infrastructure::export::ConfigurationSnapshot;

/// Stores configurations as a JSON snapshot file
#[derive(Debug, Clone)]
pub struct JsonFileExporter {
    path: PathBuf,
    pretty: bool,
}

impl JsonFileExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: false,
        }
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Render a snapshot of `configuration` as JSON
    pub fn render(&self, configuration: &GameConfiguration) -> Result<String> {
        let snapshot = ConfigurationSnapshot::capture(configuration);
        let json = if self.pretty {
            serde_json::to_string_pretty(&snapshot)
        } else {
            serde_json::to_string(&snapshot)
        };
        json.context("Failed to serialize configuration snapshot")
    }
}

impl ConfigurationSinkPort for JsonFileExporter {
    fn store(&self, configuration: &GameConfiguration) -> Result<()> {
        let json = self.render(configuration)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        info!(path = %self.path.display(), "Configuration snapshot written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregates::AttributeCatalog;
    use crate::domain::entities::AttributeDefinition;
    use crate::domain::value_objects::Stat;

    fn configuration() -> GameConfiguration {
        GameConfiguration::new(AttributeCatalog::from_definitions([AttributeDefinition::new(
            Stat::Level,
            "Level",
        )]))
    }

    #[test]
    fn test_store_writes_snapshot_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("config.json");
        let exporter = JsonFileExporter::new(&path).pretty(true);

        exporter.store(&configuration()).expect("write succeeds");

        let written = fs::read_to_string(&path).expect("file exists");
        assert!(written.contains('\n'));
        let snapshot: ConfigurationSnapshot =
            serde_json::from_str(&written).expect("valid snapshot json");
        assert_eq!(snapshot.attributes.len(), 1);
        assert!(snapshot.maps.is_empty());
    }

    #[test]
    fn test_compact_render_is_single_line() {
        let json = JsonFileExporter::new("unused.json")
            .render(&configuration())
            .expect("render succeeds");
        assert!(!json.contains('\n'));
        assert!(json.contains("\"stat\":\"Level\""));
    }
}
