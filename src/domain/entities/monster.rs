//! Monster definition entity - A species of monster or trap

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{AttributeDefinitionId, MonsterDefinitionId, Stat};

/// Whether a definition describes a fighting monster or a passive hazard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MonsterKind {
    /// Attacks and can be attacked; may drop items
    Monster { max_item_drops: u8 },
    /// Environmental hazard, never drops anything
    Trap,
}

/// A stat value on a monster definition, keyed by catalog identity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonsterAttribute {
    pub attribute: AttributeDefinitionId,
    pub stat: Stat,
    pub value: f32,
}

/// A monster or trap species
///
/// Definitions are only created through the monster definition builder,
/// which guarantees that `number` is unique in the configuration and that
/// every attribute references a catalog entry exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct MonsterDefinition {
    pub id: MonsterDefinitionId,
    pub number: u16,
    pub designation: String,
    pub move_range: u8,
    pub attack_range: u8,
    pub view_range: u8,
    pub move_delay: Duration,
    pub attack_delay: Duration,
    pub respawn_delay: Duration,
    pub kind: MonsterKind,
    pub attributes: Vec<MonsterAttribute>,
}

impl MonsterDefinition {
    /// Value of a stat, if the definition carries it
    pub fn attribute(&self, stat: Stat) -> Option<f32> {
        self.attributes
            .iter()
            .find(|a| a.stat == stat)
            .map(|a| a.value)
    }

    pub fn is_trap(&self) -> bool {
        matches!(self.kind, MonsterKind::Trap)
    }

    /// Maximum number of items dropped on death (always 0 for traps)
    pub fn max_item_drops(&self) -> u8 {
        match self.kind {
            MonsterKind::Monster { max_item_drops } => max_item_drops,
            MonsterKind::Trap => 0,
        }
    }

    /// Level of the species, 0 when not set
    pub fn level(&self) -> u32 {
        self.attribute(Stat::Level).map(|v| v as u32).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(kind: MonsterKind) -> MonsterDefinition {
        MonsterDefinition {
            id: MonsterDefinitionId::new(),
            number: 3,
            designation: "Spider".to_string(),
            move_range: 2,
            attack_range: 1,
            view_range: 5,
            move_delay: Duration::from_millis(600),
            attack_delay: Duration::from_millis(1800),
            respawn_delay: Duration::from_secs(10),
            kind,
            attributes: vec![MonsterAttribute {
                attribute: AttributeDefinitionId::new(),
                stat: Stat::Level,
                value: 2.0,
            }],
        }
    }

    #[test]
    fn test_attribute_lookup() {
        let spider = definition(MonsterKind::Monster { max_item_drops: 1 });
        assert_eq!(spider.attribute(Stat::Level), Some(2.0));
        assert_eq!(spider.attribute(Stat::FireResistance), None);
        assert_eq!(spider.level(), 2);
    }

    #[test]
    fn test_traps_never_drop_items() {
        let trap = definition(MonsterKind::Trap);
        assert!(trap.is_trap());
        assert_eq!(trap.max_item_drops(), 0);

        let spider = definition(MonsterKind::Monster { max_item_drops: 1 });
        assert!(!spider.is_trap());
        assert_eq!(spider.max_item_drops(), 1);
    }

    #[test]
    fn test_kind_serialization_is_tagged() {
        let json = serde_json::to_string(&MonsterKind::Monster { max_item_drops: 3 })
            .expect("serialization should succeed");
        assert_eq!(json, r#"{"kind":"monster","max_item_drops":3}"#);

        let json = serde_json::to_string(&MonsterKind::Trap).expect("serialization should succeed");
        assert_eq!(json, r#"{"kind":"trap"}"#);
    }
}
