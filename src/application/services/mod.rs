//! Application services - Configuration build use cases
//!
//! The two builders create single records, the map initializer runs one
//! map table through them, and the world seed service runs a whole pass.

pub mod map_initializer;
pub mod monster_definition_builder;
pub mod spawn_area_builder;
pub mod world_seed_service;

pub use map_initializer::{MapInitializer, MapSummary, MapTable};
pub use monster_definition_builder::{MonsterDefinitionBuilder, MonsterSpec};
pub use spawn_area_builder::{SpawnAreaBuilder, SpawnSpec};
pub use world_seed_service::WorldSeedService;
