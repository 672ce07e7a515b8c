//! Spawn Area Builder - Creates spawn rules on a map

use tracing::debug;

use crate::domain::aggregates::MonsterLookup;
use crate::domain::entities::{GameMapDefinition, MonsterSpawnArea};
use crate::domain::error::ConfigurationError;
use crate::domain::value_objects::{Direction, SpawnAreaId, SpawnRegion, SpawnTrigger};

/// Request describing one spawn rule
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnSpec {
    pub monster_number: u16,
    pub quantity: u16,
    pub direction: Direction,
    pub trigger: SpawnTrigger,
    pub x1: u8,
    pub x2: u8,
    pub y1: u8,
    pub y2: u8,
}

impl SpawnSpec {
    /// `quantity` instances anywhere inside `(x1,y1)-(x2,y2)`
    pub fn area(monster_number: u16, quantity: u16, x1: u8, x2: u8, y1: u8, y2: u8) -> Self {
        Self {
            monster_number,
            quantity,
            direction: Direction::Undefined,
            trigger: SpawnTrigger::Automatic,
            x1,
            x2,
            y1,
            y2,
        }
    }

    /// A single instance standing on one cell
    pub fn point(monster_number: u16, x: u8, y: u8) -> Self {
        Self::area(monster_number, 1, x, x, y, y)
    }

    pub fn facing(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Only active while the map's event window is open
    pub fn during_event(mut self) -> Self {
        self.trigger = SpawnTrigger::AutomaticDuringEvent;
        self
    }
}

/// Builds spawn areas onto a map
pub struct SpawnAreaBuilder;

impl SpawnAreaBuilder {
    /// Resolve the monster, validate the rule and append it to `map`
    pub fn build<'m>(
        map: &'m mut GameMapDefinition,
        lookup: &MonsterLookup<'_>,
        spec: SpawnSpec,
    ) -> Result<&'m MonsterSpawnArea, ConfigurationError> {
        let monster = lookup.get(&spec.monster_number).ok_or(
            ConfigurationError::UnresolvedMonsterReference {
                map: map.number,
                monster: spec.monster_number,
            },
        )?;

        if spec.quantity == 0 {
            return Err(ConfigurationError::InvalidQuantity {
                monster: spec.monster_number,
                quantity: spec.quantity,
            });
        }

        let region = SpawnRegion::new(spec.x1, spec.x2, spec.y1, spec.y2)?;

        debug!(
            map = map.number,
            monster = monster.number,
            quantity = spec.quantity,
            %region,
            trigger = %spec.trigger,
            "Adding spawn area"
        );

        let spawn = MonsterSpawnArea {
            id: SpawnAreaId::new(),
            map: map.id,
            monster: monster.id,
            monster_number: monster.number,
            quantity: spec.quantity,
            direction: spec.direction,
            trigger: spec.trigger,
            region,
        };
        Ok(map.push_spawn(spawn))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use proptest::prelude::*;

    use super::*;
    use crate::domain::entities::{MonsterDefinition, MonsterKind};
    use crate::domain::value_objects::MonsterDefinitionId;

    fn hell_hound() -> MonsterDefinition {
        MonsterDefinition {
            id: MonsterDefinitionId::new(),
            number: 5,
            designation: "Hell Hound".to_string(),
            move_range: 3,
            attack_range: 2,
            view_range: 6,
            move_delay: Duration::from_millis(400),
            attack_delay: Duration::from_millis(1400),
            respawn_delay: Duration::from_secs(10),
            kind: MonsterKind::Monster { max_item_drops: 1 },
            attributes: Vec::new(),
        }
    }

    #[test]
    fn test_point_spawn_references_monster_and_map() {
        let hound = hell_hound();
        let lookup: MonsterLookup<'_> = HashMap::from([(5, &hound)]);
        let mut map = GameMapDefinition::new(1, "Dungeon");
        let map_id = map.id;

        let spawn = SpawnAreaBuilder::build(
            &mut map,
            &lookup,
            SpawnSpec::point(5, 50, 50).facing(Direction::South),
        )
        .expect("valid spawn")
        .clone();

        assert_eq!(spawn.monster, hound.id);
        assert_eq!(spawn.monster_number, 5);
        assert_eq!(spawn.map, map_id);
        assert_eq!(spawn.quantity, 1);
        assert_eq!(spawn.direction, Direction::South);
        assert!(spawn.region.is_point());
        assert_eq!(map.spawns().len(), 1);
    }

    #[test]
    fn test_unresolved_monster_leaves_map_unchanged() {
        let lookup: MonsterLookup<'_> = HashMap::new();
        let mut map = GameMapDefinition::new(0, "Lorencia");

        let result = SpawnAreaBuilder::build(&mut map, &lookup, SpawnSpec::point(999, 10, 10));

        assert_eq!(
            result.map(|s| s.quantity),
            Err(ConfigurationError::UnresolvedMonsterReference {
                map: 0,
                monster: 999
            })
        );
        assert!(map.spawns().is_empty());
    }

    #[test]
    fn test_zero_quantity_is_rejected() {
        let hound = hell_hound();
        let lookup: MonsterLookup<'_> = HashMap::from([(5, &hound)]);
        let mut map = GameMapDefinition::new(1, "Dungeon");

        let result = SpawnAreaBuilder::build(&mut map, &lookup, SpawnSpec::area(5, 0, 10, 20, 10, 20));

        assert_eq!(
            result.map(|s| s.quantity),
            Err(ConfigurationError::InvalidQuantity {
                monster: 5,
                quantity: 0
            })
        );
        assert!(map.spawns().is_empty());
    }

    #[test]
    fn test_inverted_area_is_rejected() {
        let hound = hell_hound();
        let lookup: MonsterLookup<'_> = HashMap::from([(5, &hound)]);
        let mut map = GameMapDefinition::new(1, "Dungeon");

        let result = SpawnAreaBuilder::build(&mut map, &lookup, SpawnSpec::area(5, 4, 30, 20, 10, 20));

        assert!(matches!(
            result,
            Err(ConfigurationError::InvalidCoordinate { x1: 30, x2: 20, .. })
        ));
        assert!(map.spawns().is_empty());
    }

    #[test]
    fn test_overlapping_areas_are_allowed() {
        let hound = hell_hound();
        let lookup: MonsterLookup<'_> = HashMap::from([(5, &hound)]);
        let mut map = GameMapDefinition::new(1, "Dungeon");

        SpawnAreaBuilder::build(&mut map, &lookup, SpawnSpec::area(5, 10, 100, 150, 100, 150))
            .expect("valid spawn");
        SpawnAreaBuilder::build(
            &mut map,
            &lookup,
            SpawnSpec::area(5, 5, 120, 160, 120, 160).during_event(),
        )
        .expect("overlap is valid");

        assert_eq!(map.spawns().len(), 2);
        assert_eq!(map.instance_count(None), 15);
        assert_eq!(
            map.instance_count(Some(SpawnTrigger::AutomaticDuringEvent)),
            5
        );
    }

    proptest! {
        #[test]
        fn prop_built_spawns_resolve_and_stay_in_bounds(
            monster_number in prop_oneof![Just(5u16), 0u16..1000],
            quantity in 0u16..20,
            x1 in any::<u8>(),
            x2 in any::<u8>(),
            y1 in any::<u8>(),
            y2 in any::<u8>()
        ) {
            let hound = hell_hound();
            let lookup: MonsterLookup<'_> = HashMap::from([(5, &hound)]);
            let mut map = GameMapDefinition::new(1, "Dungeon");

            let spec = SpawnSpec::area(monster_number, quantity, x1, x2, y1, y2);
            let result = SpawnAreaBuilder::build(&mut map, &lookup, spec).cloned();

            match result {
                Ok(spawn) => {
                    prop_assert_eq!(spawn.monster, hound.id);
                    prop_assert!(spawn.quantity >= 1);
                    prop_assert!(spawn.region.x1() <= spawn.region.x2());
                    prop_assert!(spawn.region.y1() <= spawn.region.y2());
                    prop_assert_eq!(map.spawns().len(), 1);
                }
                Err(_) => {
                    prop_assert!(monster_number != 5 || quantity == 0 || x1 > x2 || y1 > y2);
                    prop_assert!(map.spawns().is_empty());
                }
            }
        }
    }
}
