//! Game map definition entity - One world map and its spawn rules

use crate::domain::entities::MonsterSpawnArea;
use crate::domain::value_objects::{GameMapId, SpawnTrigger};

/// A world map
///
/// The map owns its spawn areas. They can only be appended through the
/// spawn area builder, never removed.
#[derive(Debug, Clone, PartialEq)]
pub struct GameMapDefinition {
    pub id: GameMapId,
    pub number: u8,
    pub name: String,
    /// Experience multiplier applied to kills on this map
    pub exp_multiplier: f64,
    spawns: Vec<MonsterSpawnArea>,
}

impl GameMapDefinition {
    pub fn new(number: u8, name: impl Into<String>) -> Self {
        Self {
            id: GameMapId::new(),
            number,
            name: name.into(),
            exp_multiplier: 1.0,
            spawns: Vec::new(),
        }
    }

    pub fn with_exp_multiplier(mut self, exp_multiplier: f64) -> Self {
        self.exp_multiplier = exp_multiplier;
        self
    }

    pub fn spawns(&self) -> &[MonsterSpawnArea] {
        &self.spawns
    }

    /// Spawn rules for one species
    pub fn spawns_of(&self, monster_number: u16) -> impl Iterator<Item = &MonsterSpawnArea> {
        self.spawns
            .iter()
            .filter(move |s| s.monster_number == monster_number)
    }

    /// Total instances the runtime will create, optionally only event-bound ones
    pub fn instance_count(&self, trigger: Option<SpawnTrigger>) -> u32 {
        self.spawns
            .iter()
            .filter(|s| trigger.map_or(true, |t| s.trigger == t))
            .map(|s| u32::from(s.quantity))
            .sum()
    }

    pub(crate) fn push_spawn(&mut self, spawn: MonsterSpawnArea) -> &MonsterSpawnArea {
        self.spawns.push(spawn);
        &self.spawns[self.spawns.len() - 1]
    }
}
