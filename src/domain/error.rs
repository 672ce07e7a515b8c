//! Configuration errors
//!
//! Every variant is fatal for the build pass. These are data-authoring
//! mistakes, so nothing in this crate catches or retries them.

use crate::domain::value_objects::{SpawnRegion, Stat};

/// Errors raised while assembling a game configuration
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Unknown attribute: {0} is not in the attribute catalog")]
    UnknownAttribute(Stat),

    #[error("Duplicate attribute key {stat} on monster {monster}")]
    DuplicateAttributeKey { monster: u16, stat: Stat },

    #[error("Duplicate monster number: {0}")]
    DuplicateMonsterNumber(u16),

    #[error("Duplicate map number: {0}")]
    DuplicateMapNumber(u8),

    #[error("Spawn area on map {map} references unknown monster {monster}")]
    UnresolvedMonsterReference { map: u8, monster: u16 },

    #[error("Invalid coordinates ({x1},{y1})-({x2},{y2})")]
    InvalidCoordinate { x1: u8, y1: u8, x2: u8, y2: u8 },

    #[error("Invalid quantity {quantity} for monster {monster}, must be at least 1")]
    InvalidQuantity { monster: u16, quantity: u16 },

    #[error("Invalid direction value: {0}")]
    InvalidDirection(u8),

    #[error("Invalid spawn trigger value: {0}")]
    InvalidSpawnTrigger(u8),

    #[error("Spawn area {region} on map {map} points at a monster that is not registered as number {monster}")]
    DanglingSpawnReference {
        map: u8,
        monster: u16,
        region: SpawnRegion,
    },

    #[error("Spawn area {region} listed on map {map} belongs to a different map")]
    ForeignSpawnArea { map: u8, region: SpawnRegion },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_values() {
        let err = ConfigurationError::DuplicateMonsterNumber(5);
        assert_eq!(err.to_string(), "Duplicate monster number: 5");

        let err = ConfigurationError::UnresolvedMonsterReference {
            map: 0,
            monster: 999,
        };
        assert!(err.to_string().contains("999"));

        let err = ConfigurationError::UnknownAttribute(Stat::FireResistance);
        assert!(err.to_string().contains("FireResistance"));
    }
}
