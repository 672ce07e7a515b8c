//! Dungeon (map 1)
//!
//! Skeleton Warriors come from Lorencia.

use super::{combat, resistances, trap_stats};
use crate::application::services::{MapTable, MonsterSpec, SpawnSpec};
use crate::domain::value_objects::{Direction, Stat};

pub fn table() -> MapTable {
    MapTable::new(1, "Dungeon")
        .with_monsters(monsters())
        .with_spawns(spawns())
}

fn monsters() -> Vec<MonsterSpec> {
    vec![
        MonsterSpec::monster(5, "Hell Hound")
            .ranges(3, 2, 6)
            .delays(400, 1400, 10)
            .drops(1)
            .stats(combat(38.0, 1400.0, (130.0, 140.0), 60.0, 190.0, 45.0))
            .stats(resistances(0.0, 0.0, 0.0, 2.0)),
        MonsterSpec::monster(8, "Poison Bull Fighter")
            .ranges(3, 2, 6)
            .delays(400, 1400, 10)
            .drops(1)
            .stats(combat(46.0, 2500.0, (182.0, 190.0), 80.0, 230.0, 58.0))
            .stats(resistances(6.0, 0.0, 0.0, 0.0)),
        MonsterSpec::monster(9, "Thunder Lich")
            .ranges(3, 4, 7)
            .delays(400, 1800, 10)
            .drops(1)
            .stats(combat(44.0, 2200.0, (165.0, 175.0), 75.0, 220.0, 55.0))
            .stats(resistances(0.0, 0.0, 6.0, 0.0)),
        MonsterSpec::monster(10, "Dark Knight")
            .ranges(3, 2, 6)
            .delays(400, 1400, 10)
            .drops(1)
            .stats(combat(48.0, 2800.0, (190.0, 200.0), 85.0, 240.0, 60.0))
            .stats(resistances(1.0, 1.0, 1.0, 1.0)),
        MonsterSpec::monster(11, "Ghost")
            .ranges(3, 1, 5)
            .delays(400, 1600, 10)
            .drops(1)
            .stats(combat(10.0, 160.0, (23.0, 29.0), 10.0, 42.0, 10.0))
            .stats(resistances(0.0, 0.0, 0.0, 0.0)),
        MonsterSpec::monster(12, "Larva")
            .ranges(2, 1, 4)
            .delays(600, 1600, 10)
            .drops(1)
            .stats(combat(22.0, 650.0, (78.0, 85.0), 28.0, 110.0, 28.0))
            .stats(resistances(1.0, 0.0, 0.0, 0.0)),
        MonsterSpec::monster(13, "Hell Spider")
            .ranges(3, 4, 5)
            .delays(400, 1600, 10)
            .drops(1)
            .stats(combat(24.0, 700.0, (85.0, 92.0), 30.0, 120.0, 30.0))
            .stats(resistances(2.0, 0.0, 0.0, 0.0)),
        MonsterSpec::monster(15, "Skeleton Archer")
            .ranges(3, 4, 6)
            .delays(400, 1600, 10)
            .drops(1)
            .stats(combat(34.0, 1200.0, (115.0, 123.0), 50.0, 170.0, 38.0))
            .stats(resistances(1.0, 0.0, 0.0, 0.0)),
        MonsterSpec::monster(16, "Elite Skeleton")
            .ranges(3, 2, 6)
            .delays(400, 1400, 10)
            .drops(1)
            .stats(combat(42.0, 2000.0, (155.0, 165.0), 70.0, 210.0, 50.0))
            .stats(resistances(2.0, 0.0, 0.0, 0.0)),
        MonsterSpec::monster(17, "Cyclops")
            .ranges(3, 2, 5)
            .delays(400, 1800, 10)
            .drops(1)
            .stats(combat(28.0, 880.0, (95.0, 105.0), 38.0, 140.0, 33.0))
            .stats(resistances(0.0, 0.0, 0.0, 1.0)),
        MonsterSpec::monster(18, "Gorgon")
            .ranges(3, 2, 7)
            .delays(400, 1400, 600)
            .drops(3)
            .stats(combat(55.0, 6000.0, (240.0, 260.0), 100.0, 300.0, 80.0))
            .stats(resistances(3.0, 3.0, 3.0, 3.0))
            .stat(Stat::WindResistance, 0.0),
        MonsterSpec::trap(100, "Lance")
            .delays(400, 1000, 10)
            .stats(trap_stats(60.0, (90.0, 120.0), 300.0)),
        MonsterSpec::trap(101, "Iron Stick")
            .delays(400, 1000, 10)
            .stats(trap_stats(60.0, (120.0, 150.0), 300.0)),
        MonsterSpec::trap(102, "Fire")
            .delays(400, 1200, 10)
            .stats(trap_stats(60.0, (100.0, 130.0), 300.0))
            .stat(Stat::FireResistance, 255.0),
    ]
}

fn spawns() -> Vec<SpawnSpec> {
    vec![
        // Dungeon 1
        SpawnSpec::area(14, 12, 100, 130, 90, 130),
        SpawnSpec::area(11, 12, 100, 130, 90, 130),
        SpawnSpec::area(12, 10, 60, 100, 90, 130),
        SpawnSpec::area(13, 10, 60, 100, 130, 160),
        SpawnSpec::area(17, 8, 120, 150, 130, 160),
        // Dungeon 2
        SpawnSpec::area(15, 12, 10, 60, 60, 100),
        SpawnSpec::area(5, 10, 10, 60, 10, 60),
        SpawnSpec::area(16, 8, 60, 100, 10, 60),
        // Dungeon 3
        SpawnSpec::area(8, 10, 170, 240, 140, 200),
        SpawnSpec::area(9, 10, 170, 240, 200, 250),
        SpawnSpec::area(10, 10, 170, 240, 80, 140),
        SpawnSpec::point(18, 228, 175).facing(Direction::SouthWest),
        // Corridor traps
        SpawnSpec::point(100, 80, 74).facing(Direction::East),
        SpawnSpec::point(100, 84, 74).facing(Direction::East),
        SpawnSpec::point(101, 92, 74).facing(Direction::West),
        SpawnSpec::point(101, 96, 74).facing(Direction::West),
        SpawnSpec::area(102, 3, 140, 148, 100, 102),
    ]
}
