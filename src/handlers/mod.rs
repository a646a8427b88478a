// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod health;
pub mod locations;
pub mod tools;

pub use health::config as health_config;
pub use locations::config as locations_config;
pub use tools::config as tools_config;
