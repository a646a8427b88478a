// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod intent;
pub mod location;
pub mod query;
pub mod tools;

pub use intent::*;
pub use location::*;
pub use query::*;
pub use tools::*;
