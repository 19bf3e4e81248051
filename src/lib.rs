// src/lib.rs

#![no_std] // Specify no_std at the crate root

#[cfg(test)]
extern crate std;

pub mod common;
pub mod sampler;

// Re-export key types for convenience
pub use common::{Command, CommandFrame, DecodeError, Measurement, Scd41Error};
pub use common::{decode_measurement, Scd41Bus, Scd41Timer};
pub use sampler::Scd41Sampler;
