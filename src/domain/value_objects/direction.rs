//! Initial facing of spawned monsters

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigurationError;

/// Facing direction on the map grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Undefined,
    West,
    SouthWest,
    South,
    SouthEast,
    East,
    NorthEast,
    North,
    NorthWest,
}

impl Direction {
    /// Raw value as stored by the map format
    pub fn value(&self) -> u8 {
        match self {
            Direction::Undefined => 0,
            Direction::West => 1,
            Direction::SouthWest => 2,
            Direction::South => 3,
            Direction::SouthEast => 4,
            Direction::East => 5,
            Direction::NorthEast => 6,
            Direction::North => 7,
            Direction::NorthWest => 8,
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = ConfigurationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Direction::Undefined),
            1 => Ok(Direction::West),
            2 => Ok(Direction::SouthWest),
            3 => Ok(Direction::South),
            4 => Ok(Direction::SouthEast),
            5 => Ok(Direction::East),
            6 => Ok(Direction::NorthEast),
            7 => Ok(Direction::North),
            8 => Ok(Direction::NorthWest),
            other => Err(ConfigurationError::InvalidDirection(other)),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Undefined => write!(f, "undefined"),
            Direction::West => write!(f, "west"),
            Direction::SouthWest => write!(f, "south_west"),
            Direction::South => write!(f, "south"),
            Direction::SouthEast => write!(f, "south_east"),
            Direction::East => write!(f, "east"),
            Direction::NorthEast => write!(f, "north_east"),
            Direction::North => write!(f, "north"),
            Direction::NorthWest => write!(f, "north_west"),
        }
    }
}
