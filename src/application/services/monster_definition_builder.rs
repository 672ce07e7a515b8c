//! Monster Definition Builder - Creates monster and trap definitions
//!
//! Each definition is checked against the configuration before it is
//! registered: its number must be new, and every stat must resolve in the
//! attribute catalog exactly once.

use std::collections::HashSet;
use std::time::Duration;

use tracing::debug;

use crate::domain::aggregates::GameConfiguration;
use crate::domain::entities::{MonsterAttribute, MonsterDefinition, MonsterKind};
use crate::domain::error::ConfigurationError;
use crate::domain::value_objects::{MonsterDefinitionId, Stat};

/// Request describing one monster or trap species
#[derive(Debug, Clone, PartialEq)]
pub struct MonsterSpec {
    pub number: u16,
    pub designation: String,
    pub move_range: u8,
    pub attack_range: u8,
    pub view_range: u8,
    pub move_delay: Duration,
    pub attack_delay: Duration,
    pub respawn_delay: Duration,
    pub kind: MonsterKind,
    /// Stat pairs in authoring order. Keys must not repeat.
    pub stats: Vec<(Stat, f32)>,
}

impl MonsterSpec {
    /// A regular monster with default pacing and no drops yet
    pub fn monster(number: u16, designation: impl Into<String>) -> Self {
        Self {
            number,
            designation: designation.into(),
            move_range: 3,
            attack_range: 1,
            view_range: 5,
            move_delay: Duration::from_millis(400),
            attack_delay: Duration::from_millis(1600),
            respawn_delay: Duration::from_secs(10),
            kind: MonsterKind::Monster { max_item_drops: 0 },
            stats: Vec::new(),
        }
    }

    /// A stationary trap
    pub fn trap(number: u16, designation: impl Into<String>) -> Self {
        Self {
            number,
            designation: designation.into(),
            move_range: 0,
            attack_range: 1,
            view_range: 1,
            move_delay: Duration::from_millis(400),
            attack_delay: Duration::from_millis(1000),
            respawn_delay: Duration::from_secs(10),
            kind: MonsterKind::Trap,
            stats: Vec::new(),
        }
    }

    pub fn ranges(mut self, move_range: u8, attack_range: u8, view_range: u8) -> Self {
        self.move_range = move_range;
        self.attack_range = attack_range;
        self.view_range = view_range;
        self
    }

    /// Move and attack delay in milliseconds, respawn delay in seconds
    pub fn delays(mut self, move_delay_ms: u64, attack_delay_ms: u64, respawn_delay_secs: u64) -> Self {
        self.move_delay = Duration::from_millis(move_delay_ms);
        self.attack_delay = Duration::from_millis(attack_delay_ms);
        self.respawn_delay = Duration::from_secs(respawn_delay_secs);
        self
    }

    /// Maximum item drops. Traps never drop items, so this has no effect on them.
    pub fn drops(mut self, max_item_drops: u8) -> Self {
        if let MonsterKind::Monster { .. } = self.kind {
            self.kind = MonsterKind::Monster { max_item_drops };
        }
        self
    }

    pub fn stat(mut self, stat: Stat, value: f32) -> Self {
        self.stats.push((stat, value));
        self
    }

    pub fn stats(mut self, stats: impl IntoIterator<Item = (Stat, f32)>) -> Self {
        self.stats.extend(stats);
        self
    }
}

/// Builds monster definitions into a configuration
pub struct MonsterDefinitionBuilder;

impl MonsterDefinitionBuilder {
    /// Validate a spec and create the definition without registering it.
    ///
    /// Only checks the number against already registered monsters.
    pub fn prepare(
        config: &GameConfiguration,
        spec: MonsterSpec,
    ) -> Result<MonsterDefinition, ConfigurationError> {
        if config.contains_monster(spec.number) {
            return Err(ConfigurationError::DuplicateMonsterNumber(spec.number));
        }

        let mut seen = HashSet::with_capacity(spec.stats.len());
        let mut attributes = Vec::with_capacity(spec.stats.len());
        for (stat, value) in spec.stats {
            let definition = config.attributes().resolve(stat)?;
            if !seen.insert(stat) {
                return Err(ConfigurationError::DuplicateAttributeKey {
                    monster: spec.number,
                    stat,
                });
            }
            attributes.push(MonsterAttribute {
                attribute: definition.id,
                stat,
                value,
            });
        }

        Ok(MonsterDefinition {
            id: MonsterDefinitionId::new(),
            number: spec.number,
            designation: spec.designation,
            move_range: spec.move_range,
            attack_range: spec.attack_range,
            view_range: spec.view_range,
            move_delay: spec.move_delay,
            attack_delay: spec.attack_delay,
            respawn_delay: spec.respawn_delay,
            kind: spec.kind,
            attributes,
        })
    }

    /// Create a definition and register it in the configuration
    pub fn build(
        config: &mut GameConfiguration,
        spec: MonsterSpec,
    ) -> Result<&MonsterDefinition, ConfigurationError> {
        let definition = Self::prepare(config, spec)?;
        debug!(
            number = definition.number,
            designation = %definition.designation,
            trap = definition.is_trap(),
            "Registering monster definition"
        );
        config.add_monster(definition)
    }
}
