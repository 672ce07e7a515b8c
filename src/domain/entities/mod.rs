//! Domain entities - Configuration objects with identity

mod attribute;
mod game_map;
mod monster;
mod spawn_area;

pub use attribute::AttributeDefinition;
pub use game_map::GameMapDefinition;
pub use monster::{MonsterAttribute, MonsterDefinition, MonsterKind};
pub use spawn_area::MonsterSpawnArea;
