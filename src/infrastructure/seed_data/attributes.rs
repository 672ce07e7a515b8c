//! Standard attribute catalog

use crate::domain::aggregates::AttributeCatalog;
use crate::domain::entities::AttributeDefinition;
use crate::domain::value_objects::Stat;

/// Upper bound of every elemental resistance
const MAXIMUM_RESISTANCE: f32 = 255.0;

/// Catalog with every known stat
pub fn standard_catalog() -> AttributeCatalog {
    AttributeCatalog::from_definitions(Stat::ALL.map(definition))
}

fn definition(stat: Stat) -> AttributeDefinition {
    let (designation, description) = match stat {
        Stat::Level => ("Level", "The level of the character or monster."),
        Stat::MaximumHealth => ("Maximum Health", "The maximum health points."),
        Stat::MinimumPhysBaseDmg => (
            "Minimum physical base damage",
            "Lower bound of the physical damage before modifiers.",
        ),
        Stat::MaximumPhysBaseDmg => (
            "Maximum physical base damage",
            "Upper bound of the physical damage before modifiers.",
        ),
        Stat::DefenseBase => ("Base defense", "Defense before item and skill bonuses."),
        Stat::AttackRatePvm => ("Attack rate (PvM)", "Hit chance against monsters."),
        Stat::DefenseRatePvm => ("Defense rate (PvM)", "Evasion against monsters."),
        Stat::PoisonResistance => ("Poison resistance", "Resistance against poison damage."),
        Stat::IceResistance => ("Ice resistance", "Resistance against ice damage."),
        Stat::LightningResistance => (
            "Lightning resistance",
            "Resistance against lightning damage.",
        ),
        Stat::FireResistance => ("Fire resistance", "Resistance against fire damage."),
        Stat::WaterResistance => ("Water resistance", "Resistance against water damage."),
        Stat::EarthResistance => ("Earth resistance", "Resistance against earth damage."),
        Stat::WindResistance => ("Wind resistance", "Resistance against wind damage."),
    };

    let definition = AttributeDefinition::new(stat, designation).with_description(description);
    if stat.is_resistance() {
        definition.with_maximum_value(MAXIMUM_RESISTANCE)
    } else {
        definition
    }
}
