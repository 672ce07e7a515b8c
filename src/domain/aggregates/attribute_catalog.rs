//! Attribute Catalog - The seeded set of attribute definitions
//!
//! The catalog is filled once, before any map is initialized, and is
//! read-only afterwards. Monster definitions never copy an attribute
//! definition; they keep its id.

use std::collections::HashMap;

use crate::domain::entities::AttributeDefinition;
use crate::domain::error::ConfigurationError;
use crate::domain::value_objects::{AttributeDefinitionId, Stat};

#[derive(Debug, Clone, Default)]
pub struct AttributeCatalog {
    definitions: HashMap<Stat, AttributeDefinition>,
}

impl AttributeCatalog {
    /// Build a catalog from seeded definitions.
    ///
    /// A later definition for the same stat replaces the earlier one.
    pub fn from_definitions(definitions: impl IntoIterator<Item = AttributeDefinition>) -> Self {
        Self {
            definitions: definitions.into_iter().map(|d| (d.stat, d)).collect(),
        }
    }

    /// Resolve a stat to its definition, failing if it was never seeded
    pub fn resolve(&self, stat: Stat) -> Result<&AttributeDefinition, ConfigurationError> {
        self.definitions
            .get(&stat)
            .ok_or(ConfigurationError::UnknownAttribute(stat))
    }

    pub fn get(&self, stat: Stat) -> Option<&AttributeDefinition> {
        self.definitions.get(&stat)
    }

    pub fn contains(&self, stat: Stat) -> bool {
        self.definitions.contains_key(&stat)
    }

    /// Whether `id` is the definition registered for `stat`
    pub fn is_registered(&self, stat: Stat, id: &AttributeDefinitionId) -> bool {
        self.definitions.get(&stat).is_some_and(|d| &d.id == id)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// All definitions, ordered by stat
    pub fn iter(&self) -> impl Iterator<Item = &AttributeDefinition> {
        let mut definitions: Vec<&AttributeDefinition> = self.definitions.values().collect();
        definitions.sort_by_key(|d| d.stat);
        definitions.into_iter()
    }
}
