//! Devias (map 2)

use super::{combat, resistances};
use crate::application::services::{MapTable, MonsterSpec, SpawnSpec};
use crate::domain::value_objects::{Direction, Stat};

pub fn table() -> MapTable {
    MapTable::new(2, "Devias")
        .with_monsters(monsters())
        .with_spawns(spawns())
}

fn monsters() -> Vec<MonsterSpec> {
    vec![
        MonsterSpec::monster(19, "Yeti")
            .ranges(3, 2, 6)
            .delays(400, 1600, 10)
            .drops(1)
            .stats(combat(30.0, 900.0, (105.0, 110.0), 37.0, 150.0, 37.0))
            .stats(resistances(0.0, 2.0, 0.0, 0.0))
            .stat(Stat::WindResistance, 0.0),
        MonsterSpec::monster(20, "Elite Yeti")
            .ranges(3, 2, 6)
            .delays(400, 1600, 10)
            .drops(1)
            .stats(combat(36.0, 1200.0, (120.0, 130.0), 50.0, 180.0, 42.0))
            .stats(resistances(0.0, 3.0, 0.0, 0.0))
            .stat(Stat::WindResistance, 0.0),
        MonsterSpec::monster(21, "Assassin")
            .ranges(3, 2, 6)
            .delays(400, 1200, 10)
            .drops(1)
            .stats(combat(26.0, 800.0, (95.0, 100.0), 33.0, 130.0, 33.0))
            .stats(resistances(1.0, 0.0, 0.0, 0.0)),
        MonsterSpec::monster(22, "Ice Monster")
            .ranges(2, 1, 5)
            .delays(400, 1600, 10)
            .drops(1)
            .stats(combat(22.0, 650.0, (80.0, 90.0), 27.0, 110.0, 27.0))
            .stats(resistances(0.0, 4.0, 0.0, 0.0)),
        MonsterSpec::monster(23, "Hommerd")
            .ranges(3, 2, 5)
            .delays(400, 1600, 10)
            .drops(1)
            .stats(combat(24.0, 700.0, (85.0, 95.0), 29.0, 120.0, 29.0))
            .stats(resistances(0.0, 2.0, 0.0, 0.0)),
        MonsterSpec::monster(24, "Worm")
            .ranges(2, 1, 4)
            .delays(600, 1600, 10)
            .drops(1)
            .stats(combat(20.0, 600.0, (75.0, 80.0), 25.0, 100.0, 25.0))
            .stats(resistances(0.0, 1.0, 0.0, 0.0)),
        MonsterSpec::monster(25, "Ice Queen")
            .ranges(3, 4, 7)
            .delays(400, 1600, 600)
            .drops(3)
            .stats(combat(52.0, 4000.0, (220.0, 240.0), 95.0, 280.0, 70.0))
            .stats(resistances(0.0, 6.0, 0.0, 0.0))
            .stat(Stat::WindResistance, 0.0),
    ]
}

fn spawns() -> Vec<SpawnSpec> {
    vec![
        SpawnSpec::area(24, 20, 10, 90, 10, 70),
        SpawnSpec::area(22, 20, 10, 90, 70, 130),
        SpawnSpec::area(23, 15, 90, 150, 10, 70),
        SpawnSpec::area(19, 20, 150, 240, 10, 90),
        SpawnSpec::area(20, 10, 150, 240, 90, 150),
        SpawnSpec::area(21, 12, 90, 150, 150, 220),
        // The frozen lake overlaps the yeti grounds
        SpawnSpec::area(19, 6, 180, 220, 60, 120),
        SpawnSpec::point(25, 78, 148).facing(Direction::South),
    ]
}
