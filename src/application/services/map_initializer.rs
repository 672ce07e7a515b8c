//! Map Initializer - Builds one map's contribution to the configuration
//!
//! A map is described declaratively by a [`MapTable`]. Running it goes
//! through two phases with no way back:
//! 1. Monsters: every species the table introduces is validated, then all
//!    of them are registered together.
//! 2. Spawns: a number lookup is taken from the configuration (including
//!    species registered by earlier maps) and every spawn rule is built
//!    onto a staged map.
//!
//! The staged map is registered only after both phases succeed.

use std::collections::HashSet;

use tracing::{info, instrument};

use crate::application::services::monster_definition_builder::{
    MonsterDefinitionBuilder, MonsterSpec,
};
use crate::application::services::spawn_area_builder::{SpawnAreaBuilder, SpawnSpec};
use crate::domain::aggregates::GameConfiguration;
use crate::domain::entities::GameMapDefinition;
use crate::domain::error::ConfigurationError;

/// Declarative content of one map
#[derive(Debug, Clone, PartialEq)]
pub struct MapTable {
    pub number: u8,
    pub name: String,
    pub exp_multiplier: f64,
    /// Species introduced by this map
    pub monsters: Vec<MonsterSpec>,
    /// Spawn rules, which may also reference species of earlier maps
    pub spawns: Vec<SpawnSpec>,
}

impl MapTable {
    pub fn new(number: u8, name: impl Into<String>) -> Self {
        Self {
            number,
            name: name.into(),
            exp_multiplier: 1.0,
            monsters: Vec::new(),
            spawns: Vec::new(),
        }
    }

    pub fn with_exp_multiplier(mut self, exp_multiplier: f64) -> Self {
        self.exp_multiplier = exp_multiplier;
        self
    }

    pub fn with_monsters(mut self, monsters: impl IntoIterator<Item = MonsterSpec>) -> Self {
        self.monsters.extend(monsters);
        self
    }

    pub fn with_spawns(mut self, spawns: impl IntoIterator<Item = SpawnSpec>) -> Self {
        self.spawns.extend(spawns);
        self
    }
}

/// What a map run added to the configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapSummary {
    pub number: u8,
    pub name: String,
    pub monsters_created: usize,
    pub spawn_areas: usize,
    pub spawned_instances: u32,
}

/// Runs a [`MapTable`] against a configuration
pub struct MapInitializer {
    table: MapTable,
}

impl MapInitializer {
    pub fn new(table: MapTable) -> Self {
        Self { table }
    }

    pub fn number(&self) -> u8 {
        self.table.number
    }

    pub fn name(&self) -> &str {
        &self.table.name
    }

    /// Build the map into `config`.
    ///
    /// On error nothing of this map is registered: no monster, no spawn
    /// area, no map.
    #[instrument(skip(self, config), fields(map = %self.table.name, number = self.table.number))]
    pub fn run(self, config: &mut GameConfiguration) -> Result<MapSummary, ConfigurationError> {
        let MapTable {
            number,
            name,
            exp_multiplier,
            monsters,
            spawns,
        } = self.table;

        if config.contains_map(number) {
            return Err(ConfigurationError::DuplicateMapNumber(number));
        }

        // Phase 1: monsters
        let mut numbers = HashSet::with_capacity(monsters.len());
        let mut definitions = Vec::with_capacity(monsters.len());
        for spec in monsters {
            if !numbers.insert(spec.number) {
                return Err(ConfigurationError::DuplicateMonsterNumber(spec.number));
            }
            definitions.push(MonsterDefinitionBuilder::prepare(config, spec)?);
        }

        // Phase 2: spawns, staged on a map that is not registered yet
        let mut map = GameMapDefinition::new(number, name).with_exp_multiplier(exp_multiplier);
        {
            let mut lookup = config.monster_lookup();
            lookup.extend(definitions.iter().map(|d| (d.number, d)));
            for spec in spawns {
                SpawnAreaBuilder::build(&mut map, &lookup, spec)?;
            }
        }

        let monsters_created = definitions.len();
        for definition in definitions {
            config.add_monster(definition)?;
        }

        let summary = MapSummary {
            number,
            name: map.name.clone(),
            monsters_created,
            spawn_areas: map.spawns().len(),
            spawned_instances: map.instance_count(None),
        };
        config.add_map(map)?;

        info!(
            monsters = summary.monsters_created,
            spawn_areas = summary.spawn_areas,
            instances = summary.spawned_instances,
            "Map initialized"
        );
        Ok(summary)
    }
}
