//! Attribute definition entity - A named numeric stat slot

use crate::domain::value_objects::{AttributeDefinitionId, Stat};

/// A stat slot that monster definitions reference by identity
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeDefinition {
    pub id: AttributeDefinitionId,
    pub stat: Stat,
    pub designation: String,
    pub description: String,
    /// Upper bound the runtime clamps to (informational for this layer)
    pub maximum_value: f32,
}

impl AttributeDefinition {
    pub fn new(stat: Stat, designation: impl Into<String>) -> Self {
        Self {
            id: AttributeDefinitionId::new(),
            stat,
            designation: designation.into(),
            description: String::new(),
            maximum_value: f32::MAX,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_maximum_value(mut self, maximum_value: f32) -> Self {
        self.maximum_value = maximum_value;
        self
    }
}
