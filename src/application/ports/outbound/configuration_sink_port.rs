//! Configuration sink port - Where a finished configuration goes
//!
//! The storage technology is not this crate's concern. Anything that can
//! durably keep a [`GameConfiguration`] implements this trait.

use anyhow::Result;

use crate::domain::aggregates::GameConfiguration;

/// Receives a fully built and verified configuration
pub trait ConfigurationSinkPort {
    /// Persist the configuration graph
    fn store(&self, configuration: &GameConfiguration) -> Result<()>;
}
