//! Monster spawn area entity - A placement rule, not a live monster

use crate::domain::value_objects::{
    Direction, GameMapId, MonsterDefinitionId, SpawnAreaId, SpawnRegion, SpawnTrigger,
};

/// Where, how many, and when instances of a monster species appear
#[derive(Debug, Clone, PartialEq)]
pub struct MonsterSpawnArea {
    pub id: SpawnAreaId,
    /// The map owning this rule
    pub map: GameMapId,
    /// The spawned species
    pub monster: MonsterDefinitionId,
    /// Number of the spawned species, kept for diagnostics and export
    pub monster_number: u16,
    /// Instances produced at runtime, at least 1
    pub quantity: u16,
    pub direction: Direction,
    pub trigger: SpawnTrigger,
    pub region: SpawnRegion,
}
