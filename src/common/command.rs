//! SCD41 command definitions.
//!
//! See Sensirion SCD4x datasheet, Section 3 "Operation and Communication".

use super::measurement::MEASUREMENT_RESPONSE_LEN;

/// 7-bit I2C address of the SCD41.
pub const I2C_ADDR_7BIT: u8 = 0x62;
/// Address byte for write transactions (7-bit address shifted, R/W = 0).
pub const I2C_ADDR_WRITE: u8 = 0xC4;
/// Address byte for read transactions (7-bit address shifted, R/W = 1).
pub const I2C_ADDR_READ: u8 = 0xC5;

/// A fully framed command as it goes to the bridge:
/// `[address byte, command MSB, command LSB]`.
pub type CommandFrame = [u8; 3];

/// Represents an SCD41 command.
///
/// Each command is a fixed 16-bit code sent big-endian after the address
/// byte. Commands either return nothing or a fixed-length CRC-protected
/// response; [`Command::response_len`] states which.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Start Periodic Measurement (`0x21B1`) - the sensor begins sampling
    /// every 5 s. The first result is valid only after the signal update
    /// interval has elapsed.
    StartPeriodicMeasurement,

    /// Read Measurement (`0xEC05`) - returns the latest CO2, temperature and
    /// humidity registers as three CRC-protected words (9 bytes).
    ReadMeasurement,

    /// Stop Periodic Measurement (`0x3F86`) - halts sampling. The sensor
    /// accepts no other command for 500 ms afterwards.
    StopPeriodicMeasurement,
}

impl Command {
    /// The 16-bit command code, as listed in the datasheet.
    pub fn code(&self) -> u16 {
        match self {
            Command::StartPeriodicMeasurement => 0x21B1,
            Command::ReadMeasurement => 0xEC05,
            Command::StopPeriodicMeasurement => 0x3F86,
        }
    }

    /// Builds the 3-byte wire frame: write address byte followed by the
    /// big-endian command code.
    pub fn frame(&self) -> CommandFrame {
        let [msb, lsb] = self.code().to_be_bytes();
        [I2C_ADDR_WRITE, msb, lsb]
    }

    /// Number of response bytes the bridge must read back after writing this
    /// command. Zero means the command has no response phase.
    pub fn response_len(&self) -> usize {
        match self {
            Command::ReadMeasurement => MEASUREMENT_RESPONSE_LEN,
            Command::StartPeriodicMeasurement | Command::StopPeriodicMeasurement => 0,
        }
    }
}
