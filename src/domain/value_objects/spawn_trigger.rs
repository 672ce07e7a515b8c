//! Spawn trigger policy

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigurationError;

/// When a spawn rule is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SpawnTrigger {
    /// Always active
    #[default]
    Automatic,
    /// Active only while the map's event window is open
    AutomaticDuringEvent,
}

impl SpawnTrigger {
    pub fn value(&self) -> u8 {
        match self {
            SpawnTrigger::Automatic => 0,
            SpawnTrigger::AutomaticDuringEvent => 1,
        }
    }

    /// Whether an event window gates this rule
    pub fn is_event_bound(&self) -> bool {
        matches!(self, SpawnTrigger::AutomaticDuringEvent)
    }
}

impl TryFrom<u8> for SpawnTrigger {
    type Error = ConfigurationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(SpawnTrigger::Automatic),
            1 => Ok(SpawnTrigger::AutomaticDuringEvent),
            other => Err(ConfigurationError::InvalidSpawnTrigger(other)),
        }
    }
}

impl std::fmt::Display for SpawnTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpawnTrigger::Automatic => write!(f, "automatic"),
            SpawnTrigger::AutomaticDuringEvent => write!(f, "automatic_during_event"),
        }
    }
}
