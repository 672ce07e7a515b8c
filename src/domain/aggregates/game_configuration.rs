//! Game Configuration - The root aggregate of a seed build pass
//!
//! A GameConfiguration holds the attribute catalog, every monster
//! definition and every map built in one pass. Map initializers receive it
//! by mutable reference and run one after another; it is never shared
//! between threads.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::domain::aggregates::AttributeCatalog;
use crate::domain::entities::{GameMapDefinition, MonsterDefinition};
use crate::domain::error::ConfigurationError;
use crate::domain::value_objects::{MonsterDefinitionId, SpawnTrigger};

/// Monster number to definition, used while building spawn areas
pub type MonsterLookup<'a> = HashMap<u16, &'a MonsterDefinition>;

/// The Game Configuration Aggregate Root
#[derive(Debug, Clone)]
pub struct GameConfiguration {
    /// Seeded attribute definitions
    attributes: AttributeCatalog,
    /// All monster and trap definitions, in registration order
    monsters: Vec<MonsterDefinition>,
    monster_index: HashMap<u16, usize>,
    /// All maps, in registration order
    maps: Vec<GameMapDefinition>,
    map_index: HashMap<u8, usize>,
}

impl GameConfiguration {
    /// Create an empty configuration over a seeded catalog
    pub fn new(attributes: AttributeCatalog) -> Self {
        Self {
            attributes,
            monsters: Vec::new(),
            monster_index: HashMap::new(),
            maps: Vec::new(),
            map_index: HashMap::new(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn attributes(&self) -> &AttributeCatalog {
        &self.attributes
    }

    pub fn monsters(&self) -> &[MonsterDefinition] {
        &self.monsters
    }

    pub fn maps(&self) -> &[GameMapDefinition] {
        &self.maps
    }

    // ========================================================================
    // Finders
    // ========================================================================

    /// Find a monster definition by number
    pub fn find_monster(&self, number: u16) -> Option<&MonsterDefinition> {
        self.monster_index.get(&number).map(|&i| &self.monsters[i])
    }

    /// Find a monster definition by ID
    pub fn find_monster_by_id(&self, id: &MonsterDefinitionId) -> Option<&MonsterDefinition> {
        self.monsters.iter().find(|m| &m.id == id)
    }

    /// Find a map by number
    pub fn find_map(&self, number: u8) -> Option<&GameMapDefinition> {
        self.map_index.get(&number).map(|&i| &self.maps[i])
    }

    pub fn contains_monster(&self, number: u16) -> bool {
        self.monster_index.contains_key(&number)
    }

    pub fn contains_map(&self, number: u8) -> bool {
        self.map_index.contains_key(&number)
    }

    /// Snapshot of every registered monster keyed by number.
    ///
    /// Includes species registered by earlier maps, which is how maps share
    /// definitions.
    pub fn monster_lookup(&self) -> MonsterLookup<'_> {
        self.monsters.iter().map(|m| (m.number, m)).collect()
    }

    // ========================================================================
    // Mutators
    // ========================================================================

    /// Add a monster definition
    ///
    /// # Invariants
    /// - Monster number must be unique in the whole configuration
    pub fn add_monster(
        &mut self,
        monster: MonsterDefinition,
    ) -> Result<&MonsterDefinition, ConfigurationError> {
        if self.monster_index.contains_key(&monster.number) {
            return Err(ConfigurationError::DuplicateMonsterNumber(monster.number));
        }
        let position = self.monsters.len();
        self.monster_index.insert(monster.number, position);
        self.monsters.push(monster);
        Ok(&self.monsters[position])
    }

    /// Add a fully built map
    ///
    /// # Invariants
    /// - Map number must be unique in the whole configuration
    pub fn add_map(
        &mut self,
        map: GameMapDefinition,
    ) -> Result<&GameMapDefinition, ConfigurationError> {
        if self.map_index.contains_key(&map.number) {
            return Err(ConfigurationError::DuplicateMapNumber(map.number));
        }
        let position = self.maps.len();
        self.map_index.insert(map.number, position);
        self.maps.push(map);
        Ok(&self.maps[position])
    }

    // ========================================================================
    // Integrity
    // ========================================================================

    /// Check the whole graph, returning the first violation found.
    ///
    /// The builders already enforce these rules on the way in; this pass
    /// catches definitions that were assembled by hand and added directly.
    pub fn verify(&self) -> Result<(), ConfigurationError> {
        for monster in &self.monsters {
            let mut seen = HashSet::new();
            for attribute in &monster.attributes {
                if !self.attributes.is_registered(attribute.stat, &attribute.attribute) {
                    return Err(ConfigurationError::UnknownAttribute(attribute.stat));
                }
                if !seen.insert(attribute.stat) {
                    return Err(ConfigurationError::DuplicateAttributeKey {
                        monster: monster.number,
                        stat: attribute.stat,
                    });
                }
            }
        }

        let numbers_by_id: HashMap<MonsterDefinitionId, u16> =
            self.monsters.iter().map(|m| (m.id, m.number)).collect();

        for map in &self.maps {
            for spawn in map.spawns() {
                if spawn.map != map.id {
                    return Err(ConfigurationError::ForeignSpawnArea {
                        map: map.number,
                        region: spawn.region,
                    });
                }
                if numbers_by_id.get(&spawn.monster) != Some(&spawn.monster_number) {
                    return Err(ConfigurationError::DanglingSpawnReference {
                        map: map.number,
                        monster: spawn.monster_number,
                        region: spawn.region,
                    });
                }
                if spawn.quantity == 0 {
                    return Err(ConfigurationError::InvalidQuantity {
                        monster: spawn.monster_number,
                        quantity: spawn.quantity,
                    });
                }
            }
        }

        Ok(())
    }

    /// Counts describing the finished configuration
    pub fn summary(&self) -> ConfigurationSummary {
        let traps = self.monsters.iter().filter(|m| m.is_trap()).count();
        ConfigurationSummary {
            attributes: self.attributes.len(),
            maps: self.maps.len(),
            monsters: self.monsters.len() - traps,
            traps,
            spawn_areas: self.maps.iter().map(|m| m.spawns().len()).sum(),
            spawned_instances: self.maps.iter().map(|m| m.instance_count(None)).sum(),
            event_spawned_instances: self
                .maps
                .iter()
                .map(|m| m.instance_count(Some(SpawnTrigger::AutomaticDuringEvent)))
                .sum(),
        }
    }
}

/// Size of a built configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConfigurationSummary {
    pub attributes: usize,
    pub maps: usize,
    pub monsters: usize,
    pub traps: usize,
    pub spawn_areas: usize,
    pub spawned_instances: u32,
    pub event_spawned_instances: u32,
}

impl std::fmt::Display for ConfigurationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} maps, {} monsters, {} traps, {} spawn areas ({} instances, {} event-bound)",
            self.maps,
            self.monsters,
            self.traps,
            self.spawn_areas,
            self.spawned_instances,
            self.event_spawned_instances
        )
    }
}
