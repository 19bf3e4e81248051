//! Read-measurement response decoding.
//!
//! The SCD41 answers `Read Measurement` with three 16-bit registers, each
//! protected by its own CRC byte: `[CO2 MSB, LSB, CRC, T MSB, LSB, CRC,
//! RH MSB, LSB, CRC]`. Conversion to physical units uses the fixed-point
//! transfer functions from the datasheet; the constants are contract values
//! and must not be re-derived.

use super::crc::{compute_crc8, verify_crc8};
use super::error::DecodeError;

/// Length of the raw read-measurement response in bytes.
pub const MEASUREMENT_RESPONSE_LEN: usize = 9;

/// One decoded sensor reading. Immutable; produced once per successful
/// read-measurement transaction.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    /// CO2 concentration in ppm. The raw register is already in ppm, no
    /// scaling applied.
    pub co2_ppm: u16,
    /// Temperature in degrees Celsius, range -45.0 to 130.0 over the full
    /// raw register range.
    pub temperature_c: f32,
    /// Relative humidity in percent, 0.0 to 100.0 over the full raw
    /// register range.
    pub humidity_pct: f32,
}

/// Splits a verified 3-byte group back into its 16-bit register value.
/// Caller must have CRC-checked the group first.
#[inline]
fn word(group: &[u8]) -> u16 {
    u16::from_be_bytes([group[0], group[1]])
}

/// Decodes a raw 9-byte read-measurement response into a [`Measurement`].
///
/// Every word group is CRC-gated before conversion; a single corrupted group
/// rejects the whole reading rather than returning a partially-wrong result.
/// Boundary register values pass through unclamped (`0x0000`/`0xFFFF` map to
/// -45.0/130.0 degrees and 0.0/100.0 %).
///
/// # Errors
///
/// * [`DecodeError::MalformedResponse`] if `raw` is not exactly 9 bytes.
/// * [`DecodeError::ChecksumMismatch`] naming the first group (0 = CO2,
///   1 = temperature, 2 = humidity) whose CRC byte does not verify.
pub fn decode_measurement(raw: &[u8]) -> Result<Measurement, DecodeError> {
    if raw.len() != MEASUREMENT_RESPONSE_LEN {
        return Err(DecodeError::MalformedResponse { got: raw.len() });
    }

    for (index, group) in raw.chunks_exact(3).enumerate() {
        if !verify_crc8(&group[..2], group[2]) {
            return Err(DecodeError::ChecksumMismatch {
                group: index,
                expected: group[2],
                calculated: compute_crc8(&group[..2]),
            });
        }
    }

    // Datasheet transfer functions. Division stays in f32, no truncation.
    let temp_raw = word(&raw[3..6]);
    let hum_raw = word(&raw[6..9]);

    Ok(Measurement {
        co2_ppm: word(&raw[0..3]),
        temperature_c: -45.0 + 175.0 * f32::from(temp_raw) / 65535.0,
        humidity_pct: 100.0 * f32::from(hum_raw) / 65535.0,
    })
}
