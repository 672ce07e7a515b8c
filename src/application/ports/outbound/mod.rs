//! Outbound ports - Interfaces that the application requires from external systems

mod configuration_sink_port;

pub use configuration_sink_port::ConfigurationSinkPort;
