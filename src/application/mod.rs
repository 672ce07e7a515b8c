//! Application layer - Build pass orchestration
//!
//! Services here drive the domain builders and hand the finished
//! configuration to an outbound port. They hold no state of their own
//! between runs.

pub mod ports;
pub mod services;
