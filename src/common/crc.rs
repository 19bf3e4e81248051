// src/common/crc.rs

use crc::{Algorithm, Crc};

/// Custom CRC algorithm matching the Sensirion SCD4x datasheet (CRC-8/NRSC-5).
/// Polynomial: 0x31 (x^8 + x^5 + x^4 + 1)
/// Initial Value: 0xFF
/// Input Reflected: false
/// Output Reflected: false
/// Final XOR: 0x00
/// Check Value: 0xF7 (for "123456789") - standard for CRC-8/NRSC-5
pub const SENSIRION_CRC8: Algorithm<u8> = Algorithm {
    poly: 0x31,
    init: 0xFF,
    refin: false,
    refout: false,
    xorout: 0x00,
    check: 0xF7,
    width: 8,
    residue: 0x00,
};

// Create a Crc instance for the Sensirion algorithm for reuse.
const CRC_COMPUTER: Crc<u8> = Crc::<u8>::new(&SENSIRION_CRC8);

/// Calculates the Sensirion CRC-8 for the given data buffer.
///
/// Uses the `crc` crate configured for CRC-8/NRSC-5, which matches the
/// checksum the SCD4x appends to every 16-bit word it transmits. On the wire
/// the input is always the two data bytes (MSB, LSB) of one word.
///
/// # Arguments
///
/// * `data`: A slice of bytes for which to calculate the CRC.
///
/// # Returns
///
/// The calculated 8-bit CRC value.
#[inline]
pub fn compute_crc8(data: &[u8]) -> u8 {
    CRC_COMPUTER.checksum(data)
}

/// Checks a received CRC byte against the CRC calculated over `data`.
///
/// This is the single validity gate: a sensor word whose CRC byte does not
/// verify must never be converted to a physical value.
#[inline]
pub fn verify_crc8(data: &[u8], expected: u8) -> bool {
    compute_crc8(data) == expected
}

/// Encodes a 16-bit word into the 3-byte wire group `[MSB, LSB, CRC]`.
///
/// The sensor transmits every register this way; the encode direction is
/// needed when emulating the sensor side (e.g. in tests or a bus mock).
pub fn append_crc8(word: u16) -> [u8; 3] {
    let [msb, lsb] = word.to_be_bytes();
    [msb, lsb, compute_crc8(&[msb, lsb])]
}
