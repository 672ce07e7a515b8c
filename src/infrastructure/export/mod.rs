//! Configuration export functionality
//!
//! This module turns a finished [`GameConfiguration`](crate::domain::aggregates::GameConfiguration)
//! into serializable data and provides the file-based sink adapter.
//!
//! - [`ConfigurationSnapshot`]: flattened, serde-ready view of the graph
//! - [`JsonFileExporter`]: writes that snapshot as JSON

mod configuration_snapshot;
mod json_exporter;

pub use configuration_snapshot::{
    AttributeData, ConfigurationSnapshot, MapData, MonsterAttributeData, MonsterData,
    SpawnAreaData, SummaryData,
};
pub use json_exporter::JsonFileExporter;
