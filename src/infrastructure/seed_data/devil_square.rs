//! Devil Square (map 9)
//!
//! Event arena. It introduces no species of its own: every rule spawns a
//! Lost Tower or Dungeon species and only while the event is running.

use crate::application::services::{MapTable, SpawnSpec};

pub fn table() -> MapTable {
    MapTable::new(9, "Devil Square")
        .with_exp_multiplier(1.5)
        .with_spawns(spawns())
}

fn spawns() -> Vec<SpawnSpec> {
    vec![
        // First wave ring
        SpawnSpec::area(17, 10, 120, 150, 80, 110).during_event(),
        SpawnSpec::area(36, 10, 120, 150, 80, 110).during_event(),
        SpawnSpec::area(39, 8, 120, 150, 80, 110).during_event(),
        // Inner ring
        SpawnSpec::area(34, 10, 125, 145, 85, 105).during_event(),
        SpawnSpec::area(41, 8, 125, 145, 85, 105).during_event(),
        SpawnSpec::area(37, 6, 125, 145, 85, 105).during_event(),
        SpawnSpec::area(40, 4, 130, 140, 90, 100).during_event(),
    ]
}
