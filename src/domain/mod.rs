//! Domain layer - Configuration model with no external dependencies
//!
//! This layer contains:
//! - Entities: AttributeDefinition, MonsterDefinition, GameMapDefinition, MonsterSpawnArea
//! - Value Objects: Stat, Direction, SpawnTrigger, SpawnRegion, typed ids
//! - Aggregates: GameConfiguration root and the AttributeCatalog
//! - Errors: ConfigurationError

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod value_objects;

pub use error::ConfigurationError;
