// src/lib.rs

#![no_std] // Specify no_std at the crate root

pub mod common;
pub mod poller;
pub mod sensor;

// Re-export key types for convenience
pub use common::SeesawAddr;
pub use common::SeesawError;
pub use poller::{PollResult, SoilPoller};
pub use sensor::SoilSensor;
