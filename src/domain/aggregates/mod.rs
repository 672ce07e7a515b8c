//! Aggregates - Cluster of domain objects treated as a single unit

pub mod attribute_catalog;
pub mod game_configuration;

pub use attribute_catalog::AttributeCatalog;
pub use game_configuration::{ConfigurationSummary, GameConfiguration, MonsterLookup};
