//! Lorencia (map 0)

use super::{combat, resistances};
use crate::application::services::{MapTable, MonsterSpec, SpawnSpec};
use crate::domain::value_objects::Direction;

pub fn table() -> MapTable {
    MapTable::new(0, "Lorencia")
        .with_monsters(monsters())
        .with_spawns(spawns())
}

fn monsters() -> Vec<MonsterSpec> {
    vec![
        MonsterSpec::monster(0, "Bull Fighter")
            .ranges(3, 1, 5)
            .delays(400, 1600, 10)
            .drops(1)
            .stats(combat(6.0, 100.0, (16.0, 20.0), 6.0, 28.0, 6.0))
            .stats(resistances(0.0, 0.0, 0.0, 0.0)),
        MonsterSpec::monster(1, "Hound")
            .ranges(3, 1, 5)
            .delays(400, 1600, 10)
            .drops(1)
            .stats(combat(9.0, 140.0, (22.0, 27.0), 9.0, 39.0, 9.0))
            .stats(resistances(0.0, 0.0, 0.0, 0.0)),
        MonsterSpec::monster(2, "Budge Dragon")
            .ranges(3, 1, 4)
            .delays(400, 2000, 10)
            .drops(1)
            .stats(combat(4.0, 60.0, (10.0, 13.0), 3.0, 18.0, 3.0))
            .stats(resistances(0.0, 0.0, 0.0, 0.0)),
        MonsterSpec::monster(3, "Spider")
            .ranges(2, 1, 5)
            .delays(600, 1800, 10)
            .drops(1)
            .stats(combat(2.0, 30.0, (4.0, 7.0), 1.0, 8.0, 1.0))
            .stats(resistances(0.0, 0.0, 0.0, 0.0)),
        MonsterSpec::monster(4, "Elite Bull Fighter")
            .ranges(3, 1, 5)
            .delays(400, 1400, 10)
            .drops(1)
            .stats(combat(12.0, 190.0, (31.0, 36.0), 12.0, 50.0, 12.0))
            .stats(resistances(0.0, 0.0, 0.0, 0.0)),
        MonsterSpec::monster(6, "Lich")
            .ranges(3, 4, 7)
            .delays(400, 2000, 10)
            .drops(1)
            .stats(combat(14.0, 255.0, (41.0, 46.0), 14.0, 62.0, 14.0))
            .stats(resistances(0.0, 0.0, 1.0, 0.0)),
        MonsterSpec::monster(7, "Giant")
            .ranges(2, 2, 3)
            .delays(400, 2200, 10)
            .drops(1)
            .stats(combat(17.0, 400.0, (57.0, 62.0), 18.0, 80.0, 18.0))
            .stats(resistances(0.0, 0.0, 0.0, 1.0)),
        MonsterSpec::monster(14, "Skeleton Warrior")
            .ranges(3, 1, 5)
            .delays(400, 1400, 10)
            .drops(1)
            .stats(combat(19.0, 525.0, (68.0, 74.0), 22.0, 93.0, 22.0))
            .stats(resistances(1.0, 0.0, 0.0, 0.0)),
    ]
}

fn spawns() -> Vec<SpawnSpec> {
    vec![
        // Fields around the town walls
        SpawnSpec::area(3, 30, 135, 240, 20, 88),
        SpawnSpec::area(3, 20, 180, 230, 90, 150),
        SpawnSpec::area(2, 20, 180, 240, 150, 230),
        SpawnSpec::area(2, 10, 90, 130, 180, 240),
        SpawnSpec::area(0, 15, 180, 230, 90, 150),
        SpawnSpec::area(0, 10, 20, 80, 180, 240),
        SpawnSpec::area(1, 15, 20, 80, 120, 180),
        SpawnSpec::area(1, 10, 100, 130, 20, 60),
        SpawnSpec::area(4, 10, 20, 60, 20, 80),
        SpawnSpec::area(6, 8, 20, 60, 20, 80),
        SpawnSpec::area(7, 6, 60, 100, 20, 50),
        // Graveyard near the dungeon entrance
        SpawnSpec::area(14, 6, 108, 125, 230, 245),
        SpawnSpec::point(14, 120, 246).facing(Direction::South),
        SpawnSpec::point(7, 45, 35).facing(Direction::SouthEast),
    ]
}
