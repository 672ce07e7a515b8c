//! Infrastructure layer - Adapters and literal content
//!
//! This layer contains:
//! - Config: Environment-driven runtime configuration
//! - Export: JSON snapshot of a finished configuration
//! - Seed data: The standard attribute catalog and per-map tables

pub mod config;
pub mod export;
pub mod seed_data;
