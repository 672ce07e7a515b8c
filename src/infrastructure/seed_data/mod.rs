//! Seed data - Literal per-map content
//!
//! Each map module exposes one `table()` with the species it introduces and
//! its spawn rules. Species are registered by the first map that needs
//! them; later maps only spawn them. [`all_maps`] returns the tables in the
//! order they must run.

pub mod attributes;

mod devias;
mod devil_square;
mod dungeon;
mod lorencia;
mod lost_tower;
mod noria;

pub use attributes::standard_catalog;

use crate::application::services::MapTable;
use crate::domain::value_objects::Stat;

/// Every map table, in build order
pub fn all_maps() -> Vec<MapTable> {
    vec![
        lorencia::table(),
        dungeon::table(),
        devias::table(),
        noria::table(),
        lost_tower::table(),
        devil_square::table(),
    ]
}

/// Level, health, physical damage range, defense and PvM rates
fn combat(
    level: f32,
    health: f32,
    damage: (f32, f32),
    defense: f32,
    attack_rate: f32,
    defense_rate: f32,
) -> [(Stat, f32); 7] {
    [
        (Stat::Level, level),
        (Stat::MaximumHealth, health),
        (Stat::MinimumPhysBaseDmg, damage.0),
        (Stat::MaximumPhysBaseDmg, damage.1),
        (Stat::DefenseBase, defense),
        (Stat::AttackRatePvm, attack_rate),
        (Stat::DefenseRatePvm, defense_rate),
    ]
}

/// Poison, ice, lightning and fire resistance
fn resistances(poison: f32, ice: f32, lightning: f32, fire: f32) -> [(Stat, f32); 4] {
    [
        (Stat::PoisonResistance, poison),
        (Stat::IceResistance, ice),
        (Stat::LightningResistance, lightning),
        (Stat::FireResistance, fire),
    ]
}

/// Level, damage range and hit rate of a trap
fn trap_stats(level: f32, damage: (f32, f32), attack_rate: f32) -> [(Stat, f32); 4] {
    [
        (Stat::Level, level),
        (Stat::MinimumPhysBaseDmg, damage.0),
        (Stat::MaximumPhysBaseDmg, damage.1),
        (Stat::AttackRatePvm, attack_rate),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use super::*;
    use crate::application::services::WorldSeedService;
    use crate::domain::aggregates::GameConfiguration;
    use crate::domain::value_objects::SpawnTrigger;

    fn seeded() -> GameConfiguration {
        WorldSeedService::new(standard_catalog())
            .seed(all_maps())
            .expect("shipped seed data must build")
    }

    #[test]
    fn test_all_maps_build_and_verify() {
        let config = seeded();
        assert_eq!(config.maps().len(), 6);
        assert_eq!(config.verify(), Ok(()));
    }

    #[test]
    fn test_monster_numbers_are_unique() {
        let config = seeded();
        let numbers: HashSet<u16> = config.monsters().iter().map(|m| m.number).collect();
        assert_eq!(numbers.len(), config.monsters().len());
    }

    #[test]
    fn test_every_spawn_resolves_to_exactly_one_monster() {
        let config = seeded();
        let mut by_number: HashMap<u16, usize> = HashMap::new();
        for monster in config.monsters() {
            *by_number.entry(monster.number).or_default() += 1;
        }
        for map in config.maps() {
            for spawn in map.spawns() {
                assert_eq!(by_number.get(&spawn.monster_number), Some(&1));
                let monster = config
                    .find_monster(spawn.monster_number)
                    .expect("referenced monster is registered");
                assert_eq!(monster.id, spawn.monster);
                assert!(spawn.quantity >= 1);
                assert!(spawn.region.x1() <= spawn.region.x2());
                assert!(spawn.region.y1() <= spawn.region.y2());
            }
        }
    }

    #[test]
    fn test_every_attribute_is_in_the_catalog_once() {
        let config = seeded();
        for monster in config.monsters() {
            let mut seen = HashSet::new();
            for attribute in &monster.attributes {
                assert!(config
                    .attributes()
                    .is_registered(attribute.stat, &attribute.attribute));
                assert!(seen.insert(attribute.stat), "{} repeats {}", monster.designation, attribute.stat);
            }
        }
    }

    #[test]
    fn test_devil_square_reuses_lost_tower_species() {
        let config = seeded();
        let wizard = config.find_monster(34).expect("registered by Lost Tower");
        assert_eq!(wizard.designation, "Cursed Wizard");

        let tower = config.find_map(4).expect("Lost Tower");
        let square = config.find_map(9).expect("Devil Square");
        assert!(tower.spawns_of(34).all(|s| s.monster == wizard.id));
        assert!(square.spawns_of(34).count() > 0);
        assert!(square.spawns_of(34).all(|s| s.monster == wizard.id));
        assert!(square
            .spawns()
            .iter()
            .all(|s| s.trigger == SpawnTrigger::AutomaticDuringEvent));
    }

    #[test]
    fn test_traps_are_stationary_and_drop_nothing() {
        let config = seeded();
        let traps: Vec<_> = config.monsters().iter().filter(|m| m.is_trap()).collect();
        assert!(!traps.is_empty());
        for trap in traps {
            assert_eq!(trap.move_range, 0);
            assert_eq!(trap.max_item_drops(), 0);
            assert!(trap.attribute(Stat::MaximumHealth).is_none());
        }
    }

    #[test]
    fn test_tables_out_of_order_fail_to_resolve() {
        let mut tables = all_maps();
        let square = tables.pop().expect("devil square is last");
        let result = WorldSeedService::new(standard_catalog()).seed(vec![square]);
        assert!(result.is_err());
    }
}
