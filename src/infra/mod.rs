//! Infrastructure adapters: telemetry bootstrap and token persistence.

pub mod error;
pub mod telemetry;
pub mod token;
