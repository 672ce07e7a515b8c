//! Value objects - Immutable objects defined by their attributes

mod direction;
mod ids;
mod spawn_region;
mod spawn_trigger;
mod stat;

pub use direction::Direction;
pub use ids::*;
pub use spawn_region::SpawnRegion;
pub use spawn_trigger::SpawnTrigger;
pub use stat::Stat;
