//! WorldSeed - Seed-data builder for a game server's world configuration
//!
//! Builds the initial monster, map and spawn configuration from
//! hand-written tables. Every cross-reference is resolved while building,
//! so a table that names an unknown attribute or monster fails at startup
//! instead of producing a half-wired world.

pub mod application;
pub mod domain;
pub mod infrastructure;
