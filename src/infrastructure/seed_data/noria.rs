//! Noria (map 3)

use super::{combat, resistances};
use crate::application::services::{MapTable, MonsterSpec, SpawnSpec};
use crate::domain::value_objects::Direction;

pub fn table() -> MapTable {
    MapTable::new(3, "Noria")
        .with_monsters(monsters())
        .with_spawns(spawns())
}

fn monsters() -> Vec<MonsterSpec> {
    vec![
        MonsterSpec::monster(26, "Goblin")
            .ranges(3, 1, 5)
            .delays(400, 1800, 10)
            .drops(1)
            .stats(combat(3.0, 45.0, (7.0, 10.0), 2.0, 13.0, 2.0))
            .stats(resistances(0.0, 0.0, 0.0, 0.0)),
        MonsterSpec::monster(27, "Chain Scorpion")
            .ranges(3, 1, 5)
            .delays(400, 1600, 10)
            .drops(1)
            .stats(combat(5.0, 80.0, (13.0, 17.0), 4.0, 23.0, 4.0))
            .stats(resistances(1.0, 0.0, 0.0, 0.0)),
        MonsterSpec::monster(28, "Beetle Monster")
            .ranges(3, 1, 5)
            .delays(400, 1600, 10)
            .drops(1)
            .stats(combat(10.0, 165.0, (26.0, 31.0), 10.0, 43.0, 10.0))
            .stats(resistances(0.0, 0.0, 0.0, 0.0)),
        MonsterSpec::monster(29, "Hunter")
            .ranges(3, 4, 6)
            .delays(400, 1600, 10)
            .drops(1)
            .stats(combat(13.0, 220.0, (36.0, 41.0), 13.0, 56.0, 13.0))
            .stats(resistances(0.0, 0.0, 0.0, 0.0)),
        MonsterSpec::monster(30, "Forest Monster")
            .ranges(3, 1, 5)
            .delays(400, 1600, 10)
            .drops(1)
            .stats(combat(15.0, 295.0, (46.0, 51.0), 15.0, 68.0, 15.0))
            .stats(resistances(1.0, 0.0, 0.0, 0.0)),
        MonsterSpec::monster(31, "Agon")
            .ranges(3, 1, 5)
            .delays(400, 1600, 10)
            .drops(1)
            .stats(combat(16.0, 340.0, (51.0, 57.0), 16.0, 74.0, 16.0))
            .stats(resistances(0.0, 0.0, 0.0, 0.0)),
        MonsterSpec::monster(32, "Stone Golem")
            .ranges(2, 2, 4)
            .delays(600, 2200, 10)
            .drops(1)
            .stats(combat(18.0, 465.0, (62.0, 68.0), 20.0, 86.0, 20.0))
            .stats(resistances(0.0, 0.0, 1.0, 0.0)),
        MonsterSpec::monster(33, "Elite Goblin")
            .ranges(3, 1, 5)
            .delays(400, 1600, 10)
            .drops(1)
            .stats(combat(8.0, 120.0, (19.0, 23.0), 8.0, 33.0, 8.0))
            .stats(resistances(0.0, 0.0, 0.0, 0.0)),
    ]
}

fn spawns() -> Vec<SpawnSpec> {
    vec![
        SpawnSpec::area(26, 20, 140, 220, 60, 120),
        SpawnSpec::area(33, 10, 140, 220, 60, 120),
        SpawnSpec::area(27, 20, 140, 220, 120, 180),
        SpawnSpec::area(28, 15, 60, 140, 120, 180),
        SpawnSpec::area(29, 12, 60, 140, 180, 240),
        SpawnSpec::area(30, 12, 10, 60, 120, 200),
        SpawnSpec::area(31, 10, 10, 60, 200, 250),
        SpawnSpec::area(32, 6, 60, 120, 10, 60),
        SpawnSpec::point(32, 98, 64).facing(Direction::North),
        SpawnSpec::point(32, 104, 64).facing(Direction::North),
    ]
}
