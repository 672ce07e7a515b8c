//! Lost Tower (map 4)

use super::{combat, resistances, trap_stats};
use crate::application::services::{MapTable, MonsterSpec, SpawnSpec};
use crate::domain::value_objects::{Direction, Stat};

pub fn table() -> MapTable {
    MapTable::new(4, "Lost Tower")
        .with_monsters(monsters())
        .with_spawns(spawns())
}

fn monsters() -> Vec<MonsterSpec> {
    vec![
        MonsterSpec::monster(34, "Cursed Wizard")
            .ranges(3, 5, 7)
            .delays(400, 1600, 10)
            .drops(1)
            .stats(combat(54.0, 4000.0, (210.0, 230.0), 95.0, 280.0, 65.0))
            .stats(resistances(0.0, 0.0, 4.0, 0.0)),
        MonsterSpec::monster(35, "Death Gorgon")
            .ranges(3, 2, 6)
            .delays(400, 1400, 10)
            .drops(1)
            .stats(combat(64.0, 6000.0, (280.0, 320.0), 120.0, 330.0, 85.0))
            .stats(resistances(0.0, 0.0, 0.0, 5.0)),
        MonsterSpec::monster(36, "Shadow")
            .ranges(3, 2, 6)
            .delays(400, 1400, 10)
            .drops(1)
            .stats(combat(47.0, 2500.0, (170.0, 180.0), 78.0, 240.0, 55.0))
            .stats(resistances(2.0, 0.0, 0.0, 0.0)),
        MonsterSpec::monster(37, "Devil")
            .ranges(3, 2, 6)
            .delays(400, 1400, 10)
            .drops(1)
            .stats(combat(60.0, 5000.0, (260.0, 280.0), 110.0, 310.0, 80.0))
            .stats(resistances(0.0, 0.0, 0.0, 4.0)),
        MonsterSpec::monster(38, "Balrog")
            .ranges(3, 3, 7)
            .delays(400, 1400, 600)
            .drops(3)
            .stats(combat(75.0, 9000.0, (370.0, 400.0), 155.0, 380.0, 110.0))
            .stats(resistances(3.0, 3.0, 3.0, 6.0))
            .stat(Stat::WindResistance, 0.0),
        MonsterSpec::monster(39, "Poison Shadow")
            .ranges(3, 2, 6)
            .delays(400, 1400, 10)
            .drops(1)
            .stats(combat(50.0, 3500.0, (195.0, 205.0), 88.0, 260.0, 60.0))
            .stats(resistances(5.0, 0.0, 0.0, 0.0)),
        MonsterSpec::monster(40, "Death Knight")
            .ranges(3, 2, 6)
            .delays(400, 1400, 10)
            .drops(1)
            .stats(combat(62.0, 5500.0, (270.0, 290.0), 115.0, 320.0, 82.0))
            .stats(resistances(2.0, 2.0, 2.0, 2.0)),
        MonsterSpec::monster(41, "Death Cow")
            .ranges(3, 2, 6)
            .delays(400, 1600, 10)
            .drops(1)
            .stats(combat(57.0, 4500.0, (250.0, 260.0), 105.0, 290.0, 75.0))
            .stats(resistances(0.0, 3.0, 0.0, 0.0)),
        MonsterSpec::trap(103, "Meteorite")
            .delays(400, 1400, 10)
            .stats(trap_stats(80.0, (160.0, 200.0), 400.0))
            .stat(Stat::FireResistance, 255.0),
    ]
}

fn spawns() -> Vec<SpawnSpec> {
    vec![
        // Floors 1 and 2
        SpawnSpec::area(36, 15, 200, 250, 10, 80),
        SpawnSpec::area(39, 12, 200, 250, 80, 160),
        SpawnSpec::area(34, 12, 130, 200, 10, 80),
        // Floors 3 to 5
        SpawnSpec::area(41, 12, 130, 200, 80, 160),
        SpawnSpec::area(37, 10, 80, 130, 10, 80),
        SpawnSpec::area(40, 10, 80, 130, 80, 160),
        SpawnSpec::area(35, 8, 10, 80, 10, 80),
        // Floors 6 and 7
        SpawnSpec::area(34, 6, 10, 80, 80, 160),
        SpawnSpec::area(38, 2, 10, 60, 160, 240),
        SpawnSpec::point(38, 40, 236).facing(Direction::South),
        // Falling stones in the stairwells
        SpawnSpec::point(103, 86, 167),
        SpawnSpec::point(103, 165, 167),
        SpawnSpec::area(103, 2, 20, 26, 90, 92),
    ]
}
