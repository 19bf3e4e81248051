// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod command;
pub mod crc;
pub mod error;
pub mod hal_traits;
pub mod measurement;
pub mod timing;

// --- Re-export key types/traits/functions for easier access ---

// From command.rs
pub use command::{Command, CommandFrame, I2C_ADDR_7BIT, I2C_ADDR_READ, I2C_ADDR_WRITE};

// From crc.rs
pub use crc::{append_crc8, compute_crc8, verify_crc8};

// From error.rs
pub use error::{DecodeError, Scd41Error};

// From hal_traits.rs
pub use hal_traits::{Scd41Bus, Scd41Timer};

// From measurement.rs
pub use measurement::{decode_measurement, Measurement, MEASUREMENT_RESPONSE_LEN};

// From timing.rs (constants - users can access via common::timing::*)
// No re-exports by default.

// --- Feature-gated re-exports ---

// embedded-hal I2C adapter (from hal_traits.rs)
#[cfg(feature = "embedded-hal")]
pub use hal_traits::I2cBus;
