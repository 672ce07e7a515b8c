//! Serializable snapshot of a game configuration
//!
//! The domain entities carry no serde derives. This module flattens the
//! graph into plain data for whatever storage consumes it: ids become
//! strings, delays become milliseconds, and spawn areas keep both the
//! monster id and its number.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::aggregates::{ConfigurationSummary, GameConfiguration};
use crate::domain::entities::{
    AttributeDefinition, GameMapDefinition, MonsterDefinition, MonsterKind, MonsterSpawnArea,
};
use crate::domain::value_objects::{Direction, SpawnTrigger, Stat};

/// Complete configuration snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigurationSnapshot {
    pub exported_at: DateTime<Utc>,
    pub summary: SummaryData,
    pub attributes: Vec<AttributeData>,
    pub monsters: Vec<MonsterData>,
    pub maps: Vec<MapData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryData {
    pub maps: usize,
    pub monsters: usize,
    pub traps: usize,
    pub spawn_areas: usize,
    pub spawned_instances: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeData {
    pub id: String,
    pub stat: Stat,
    pub designation: String,
    pub description: String,
    pub maximum_value: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonsterData {
    pub id: String,
    pub number: u16,
    pub designation: String,
    pub move_range: u8,
    pub attack_range: u8,
    pub view_range: u8,
    pub move_delay_ms: u64,
    pub attack_delay_ms: u64,
    pub respawn_delay_ms: u64,
    #[serde(flatten)]
    pub kind: MonsterKind,
    pub attributes: Vec<MonsterAttributeData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonsterAttributeData {
    /// Id of the catalog entry
    pub attribute_id: String,
    pub stat: Stat,
    pub value: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapData {
    pub id: String,
    pub number: u8,
    pub name: String,
    pub exp_multiplier: f64,
    pub spawns: Vec<SpawnAreaData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnAreaData {
    pub id: String,
    pub monster_id: String,
    pub monster_number: u16,
    pub quantity: u16,
    pub direction: Direction,
    pub trigger: SpawnTrigger,
    pub x1: u8,
    pub y1: u8,
    pub x2: u8,
    pub y2: u8,
}

impl ConfigurationSnapshot {
    /// Flatten a configuration, stamping it with the current time
    pub fn capture(config: &GameConfiguration) -> Self {
        Self {
            exported_at: Utc::now(),
            summary: config.summary().into(),
            attributes: config.attributes().iter().map(AttributeData::from).collect(),
            monsters: config.monsters().iter().map(MonsterData::from).collect(),
            maps: config.maps().iter().map(MapData::from).collect(),
        }
    }
}

impl From<ConfigurationSummary> for SummaryData {
    fn from(summary: ConfigurationSummary) -> Self {
        Self {
            maps: summary.maps,
            monsters: summary.monsters,
            traps: summary.traps,
            spawn_areas: summary.spawn_areas,
            spawned_instances: summary.spawned_instances,
        }
    }
}

impl From<&AttributeDefinition> for AttributeData {
    fn from(a: &AttributeDefinition) -> Self {
        Self {
            id: a.id.to_string(),
            stat: a.stat,
            designation: a.designation.clone(),
            description: a.description.clone(),
            maximum_value: a.maximum_value,
        }
    }
}

impl From<&MonsterDefinition> for MonsterData {
    fn from(m: &MonsterDefinition) -> Self {
        Self {
            id: m.id.to_string(),
            number: m.number,
            designation: m.designation.clone(),
            move_range: m.move_range,
            attack_range: m.attack_range,
            view_range: m.view_range,
            move_delay_ms: m.move_delay.as_millis() as u64,
            attack_delay_ms: m.attack_delay.as_millis() as u64,
            respawn_delay_ms: m.respawn_delay.as_millis() as u64,
            kind: m.kind,
            attributes: m
                .attributes
                .iter()
                .map(|a| MonsterAttributeData {
                    attribute_id: a.attribute.to_string(),
                    stat: a.stat,
                    value: a.value,
                })
                .collect(),
        }
    }
}

impl From<&GameMapDefinition> for MapData {
    fn from(map: &GameMapDefinition) -> Self {
        Self {
            id: map.id.to_string(),
            number: map.number,
            name: map.name.clone(),
            exp_multiplier: map.exp_multiplier,
            spawns: map.spawns().iter().map(SpawnAreaData::from).collect(),
        }
    }
}

impl From<&MonsterSpawnArea> for SpawnAreaData {
    fn from(s: &MonsterSpawnArea) -> Self {
        Self {
            id: s.id.to_string(),
            monster_id: s.monster.to_string(),
            monster_number: s.monster_number,
            quantity: s.quantity,
            direction: s.direction,
            trigger: s.trigger,
            x1: s.region.x1(),
            y1: s.region.y1(),
            x2: s.region.x2(),
            y2: s.region.y2(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::{MapTable, MonsterSpec, SpawnSpec, WorldSeedService};
    use crate::domain::aggregates::AttributeCatalog;

    fn configuration() -> GameConfiguration {
        let catalog = AttributeCatalog::from_definitions(
            Stat::ALL.map(|stat| AttributeDefinition::new(stat, stat.name())),
        );
        let table = MapTable::new(1, "Dungeon")
            .with_monsters([
                MonsterSpec::monster(5, "Hell Hound")
                    .delays(400, 1400, 10)
                    .drops(1)
                    .stat(Stat::Level, 38.0),
                MonsterSpec::trap(100, "Lance").stat(Stat::Level, 60.0),
            ])
            .with_spawns([
                SpawnSpec::area(5, 3, 100, 120, 40, 60).facing(Direction::East),
                SpawnSpec::point(100, 30, 30),
            ]);
        WorldSeedService::new(catalog)
            .seed(vec![table])
            .expect("valid table")
    }

    #[test]
    fn test_snapshot_keeps_cross_references() {
        let config = configuration();
        let snapshot = ConfigurationSnapshot::capture(&config);

        assert_eq!(snapshot.attributes.len(), Stat::ALL.len());
        assert_eq!(snapshot.summary.traps, 1);

        let hound = snapshot
            .monsters
            .iter()
            .find(|m| m.number == 5)
            .expect("hound exported");
        assert_eq!(hound.attack_delay_ms, 1400);
        assert_eq!(hound.respawn_delay_ms, 10_000);

        let level = snapshot
            .attributes
            .iter()
            .find(|a| a.stat == Stat::Level)
            .expect("level exported");
        assert_eq!(hound.attributes[0].attribute_id, level.id);

        let spawn = &snapshot.maps[0].spawns[0];
        assert_eq!(spawn.monster_id, hound.id);
        assert_eq!((spawn.x1, spawn.x2, spawn.y1, spawn.y2), (100, 120, 40, 60));
    }

    #[test]
    fn test_snapshot_json_shape() {
        let snapshot = ConfigurationSnapshot::capture(&configuration());
        let json = serde_json::to_value(&snapshot).expect("serialization should succeed");

        let monsters = json["monsters"].as_array().expect("monsters array");
        assert!(monsters
            .iter()
            .any(|m| m["kind"] == "trap" && m["designation"] == "Lance"));
        assert!(monsters
            .iter()
            .any(|m| m["kind"] == "monster" && m["max_item_drops"] == 1));
        assert_eq!(json["maps"][0]["spawns"][0]["direction"], "east");
        assert_eq!(json["maps"][0]["spawns"][1]["trigger"], "automatic");
    }
}
