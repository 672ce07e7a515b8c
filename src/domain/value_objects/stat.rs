//! Attribute identities
//!
//! A [`Stat`] names a numeric stat slot. It is only a key: whether the slot
//! exists in a given configuration is decided by the
//! [`AttributeCatalog`](crate::domain::aggregates::AttributeCatalog) it was
//! seeded into.

use serde::{Deserialize, Serialize};

/// Stable identity of an attribute definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stat {
    Level,
    MaximumHealth,
    MinimumPhysBaseDmg,
    MaximumPhysBaseDmg,
    DefenseBase,
    AttackRatePvm,
    DefenseRatePvm,
    PoisonResistance,
    IceResistance,
    LightningResistance,
    FireResistance,
    WaterResistance,
    EarthResistance,
    WindResistance,
}

impl Stat {
    /// Every known attribute identity, in catalog order
    pub const ALL: [Stat; 14] = [
        Stat::Level,
        Stat::MaximumHealth,
        Stat::MinimumPhysBaseDmg,
        Stat::MaximumPhysBaseDmg,
        Stat::DefenseBase,
        Stat::AttackRatePvm,
        Stat::DefenseRatePvm,
        Stat::PoisonResistance,
        Stat::IceResistance,
        Stat::LightningResistance,
        Stat::FireResistance,
        Stat::WaterResistance,
        Stat::EarthResistance,
        Stat::WindResistance,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Stat::Level => "Level",
            Stat::MaximumHealth => "MaximumHealth",
            Stat::MinimumPhysBaseDmg => "MinimumPhysBaseDmg",
            Stat::MaximumPhysBaseDmg => "MaximumPhysBaseDmg",
            Stat::DefenseBase => "DefenseBase",
            Stat::AttackRatePvm => "AttackRatePvm",
            Stat::DefenseRatePvm => "DefenseRatePvm",
            Stat::PoisonResistance => "PoisonResistance",
            Stat::IceResistance => "IceResistance",
            Stat::LightningResistance => "LightningResistance",
            Stat::FireResistance => "FireResistance",
            Stat::WaterResistance => "WaterResistance",
            Stat::EarthResistance => "EarthResistance",
            Stat::WindResistance => "WindResistance",
        }
    }

    /// Whether this stat is one of the elemental resistances
    pub fn is_resistance(&self) -> bool {
        matches!(
            self,
            Stat::PoisonResistance
                | Stat::IceResistance
                | Stat::LightningResistance
                | Stat::FireResistance
                | Stat::WaterResistance
                | Stat::EarthResistance
                | Stat::WindResistance
        )
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
